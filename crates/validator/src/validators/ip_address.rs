//! IP address validator.

use std::net::IpAddr;

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata, require_text,
};

/// Validates textual IPv4 and IPv6 addresses.
///
/// Parsing follows `std::net`: IPv4 must be a strict dotted quad (no leading
/// zeros, no shorthand), IPv6 accepts `::` compression and embedded IPv4.
/// Zone identifiers, ports and CIDR suffixes are rejected.
///
/// # Examples
///
/// ```
/// use veritas_validator::validators::IpAddress;
/// use veritas_validator::foundation::Validate;
///
/// let validator = IpAddress::new();
/// assert!(validator.is_valid("192.168.0.1"));
/// assert!(validator.is_valid("2001:db8::1"));
/// assert!(!validator.is_valid("256.0.0.1"));
///
/// assert!(!IpAddress::new().v4_only().is_valid("::1"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpAddress {
    allow_v4: bool,
    allow_v6: bool,
}

impl IpAddress {
    /// Accepts both address families.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_v4: true,
            allow_v6: true,
        }
    }

    /// Only accept IPv4.
    #[must_use = "builder methods must be chained or built"]
    pub fn v4_only(mut self) -> Self {
        self.allow_v4 = true;
        self.allow_v6 = false;
        self
    }

    /// Only accept IPv6.
    #[must_use = "builder methods must be chained or built"]
    pub fn v6_only(mut self) -> Self {
        self.allow_v4 = false;
        self.allow_v6 = true;
        self
    }
}

impl Default for IpAddress {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for IpAddress {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        let address: IpAddr = input
            .parse()
            .map_err(|_| ValidationError::invalid_format("ip_address"))?;

        let allowed = match address {
            IpAddr::V4(_) => self.allow_v4,
            IpAddr::V6(_) => self.allow_v6,
        };

        if allowed {
            Ok(())
        } else {
            Err(ValidationError::new(
                "ip_family_not_allowed",
                "IP address family is not allowed by current configuration",
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let families = match (self.allow_v4, self.allow_v6) {
            (true, true) => "IPv4 or IPv6",
            (true, false) => "IPv4",
            _ => "IPv6",
        };
        ValidatorMetadata::named("IpAddress")
            .with_description(format!("{families} address"))
            .with_complexity(ValidationComplexity::Constant)
            .with_tags(["network"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.0.0.0")]
    #[case("255.255.255.255")]
    #[case("::")]
    #[case("::1")]
    #[case("fe80::1ff:fe23:4567:890a")]
    #[case("::ffff:192.0.2.128")]
    fn accepts(#[case] input: &str) {
        assert!(IpAddress::new().is_valid(input));
    }

    #[rstest]
    #[case("")]
    #[case("1.2.3")]
    #[case("1.2.3.4.5")]
    #[case("01.2.3.4")]
    #[case("1.2.3.4:80")]
    #[case("10.0.0.0/8")]
    #[case(" 1.2.3.4")]
    #[case("2001:db8:::1")]
    #[case("example.com")]
    fn rejects(#[case] input: &str) {
        assert!(!IpAddress::new().is_valid(input), "{input:?}");
    }

    #[test]
    fn family_restriction() {
        assert!(IpAddress::new().v6_only().is_valid("::1"));
        assert_eq!(
            IpAddress::new().v6_only().validate("10.0.0.1").unwrap_err().code,
            "ip_family_not_allowed"
        );
        assert!(IpAddress::new().v4_only().is_valid("10.0.0.1"));
    }
}
