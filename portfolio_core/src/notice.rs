/// How long a notice stays on screen before it is dismissed.
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

///
/// A transient, dismissible message. Only one notice is shown at a time;
/// the rendered toast carries `duration_ms` for its timed dismissal.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub duration_ms: u64,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "toast-success",
            NoticeKind::Error => "toast-error",
            NoticeKind::Info => "toast-info",
        }
    }
}
