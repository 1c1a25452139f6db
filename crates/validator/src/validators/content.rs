//! Email and URL validators

use std::sync::LazyLock;

use crate::foundation::{ValidationComplexity, ValidationError, ValidatorMetadata, require_text};

/// Longest address accepted, per RFC 5321's forward-path limit.
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

const URL_SCHEMES: &[&str] = &["http", "https", "ftp"];

fn is_email(input: &str) -> bool {
    input.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(input)
}

fn is_url(input: &str) -> bool {
    // the parser trims surrounding whitespace on its own
    if input.trim() != input {
        return false;
    }
    url::Url::parse(input).is_ok_and(|parsed| {
        URL_SCHEMES.contains(&parsed.scheme()) && parsed.host_str().is_some_and(|h| !h.is_empty())
    })
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email addresses.
    ///
    /// Accepts a dot-atom style local part and a dotted domain of DNS labels.
    /// Quoted local parts and IP-literal domains are not supported.
    ///
    /// ```
    /// use veritas_validator::validators::email;
    /// use veritas_validator::foundation::Validate;
    ///
    /// assert!(email().is_valid("user.name+tag@example.co.uk"));
    /// assert!(!email().is_valid("user@localhost"));
    /// assert!(!email().is_valid("user@-example.com"));
    /// ```
    pub Email for str;
    guard(require_text);
    rule(input) { is_email(input) }
    error(input) { ValidationError::invalid_format("email") }
    metadata {
        ValidatorMetadata::named("Email")
            .with_description("local@domain.tld email address")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["string", "network"])
    }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates absolute `http`, `https` or `ftp` URLs with a host.
    ///
    /// ```
    /// use veritas_validator::validators::url;
    /// use veritas_validator::foundation::Validate;
    ///
    /// assert!(url().is_valid("https://example.com/path?q=1"));
    /// assert!(url().is_valid("ftp://files.example.com"));
    /// assert!(!url().is_valid("mailto:user@example.com"));
    /// assert!(!url().is_valid("example.com"));
    /// ```
    pub Url for str;
    guard(require_text);
    rule(input) { is_url(input) }
    error(input) {
        ValidationError::invalid_format("url")
            .with_help("Expected an absolute http, https or ftp URL")
    }
    metadata {
        ValidatorMetadata::named("Url")
            .with_description("Absolute http/https/ftp URL")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["string", "network"])
    }
    fn url();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("a+b@x-y.io", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@example", false)]
    #[case("user@example..com", false)]
    #[case("user@example-.com", false)]
    #[case("us er@example.com", false)]
    #[case(" user@example.com", false)]
    fn email_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email().is_valid(input), expected, "{input:?}");
    }

    #[test]
    fn email_length_limit() {
        let local = "a".repeat(64);
        let label = "b".repeat(60);
        let address = format!("{local}@{label}.{label}.{label}.{label}.com");
        assert!(address.len() > MAX_EMAIL_LENGTH);
        assert!(!email().is_valid(&address));
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com/path", true)]
    #[case("https://127.0.0.1:8080/", true)]
    #[case("ftp://example.com", true)]
    #[case("invalid", false)]
    #[case("file:///etc/hosts", false)]
    #[case("https://", false)]
    #[case("http://exa mple.com", false)]
    #[case(" https://example.com", false)]
    fn url_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(url().is_valid(input), expected, "{input:?}");
    }
}
