/// Key under which the preference is persisted in the client's cookie jar.
pub const THEME_KEY: &str = "theme";

///
/// Light/dark preference. Persisted as `"light"`/`"dark"`; the same value
/// doubles as the document root class.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than a stored `"dark"` means light.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_stored_preference_should_mean_light() {
        assert_eq!(Theme::Light, Theme::from_stored(None));
        assert_eq!(Theme::Light, Theme::from_stored(Some("")));
        assert_eq!(Theme::Light, Theme::from_stored(Some("garbage")));
    }

    #[test]
    fn stored_dark_should_mean_dark() {
        assert_eq!(Theme::Dark, Theme::from_stored(Some("dark")));
    }

    #[test]
    fn toggling_should_round_trip_through_the_stored_value() {
        let theme = Theme::from_stored(None);
        assert_eq!(Theme::Light, theme);

        let theme = theme.toggled();
        assert_eq!("dark", theme.as_str());

        let theme = Theme::from_stored(Some(theme.as_str())).toggled();
        assert_eq!("light", theme.as_str());
    }
}
