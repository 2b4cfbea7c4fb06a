use regex::Regex;
use std::sync::LazyLock;

// Scheme is optional; validity is governed by the host shape: a dotted
// hostname ending in a >= 2 letter label, or a dotted-quad IPv4 literal.
// Port, path, query and fragment are optional.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("url pattern should be a valid regex")
});

/// Whether the string is shaped like a resolvable http(s) URL.
/// Used to gate profile photo references before rendering them.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_hostname_urls() {
        assert!(is_valid_url("https://example.com/a.png"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("sub.Example.COM/photo.jpg?size=200#top"));
    }

    #[test]
    fn should_accept_ipv4_urls() {
        assert!(is_valid_url("http://192.168.1.1:8080/x"));
        assert!(is_valid_url("10.0.0.1"));
    }

    #[test]
    fn should_reject_non_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("http://example"));
        assert!(!is_valid_url("ftp://x"));
        assert!(!is_valid_url("http://-bad-.com"));
    }
}
