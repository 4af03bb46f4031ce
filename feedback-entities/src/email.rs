use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct EmailAddress {
    address: String,
    display_name: Option<String>,
}

impl EmailAddress {
    #[must_use]
    pub const fn new_unchecked(address: String) -> Self {
        Self {
            address,
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.address
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self {
            address: info.addr,
            display_name: info.display_name,
        })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            address,
            display_name,
        } = self;
        match display_name {
            Some(name) => write!(f, r#""{}" <{address}>"#, name.replace('"', r#"\""#)),
            None => f.write_str(address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_with_display_name() {
        let addr: EmailAddress = r#""Site Owner" <owner@example.com>"#.parse().unwrap();
        assert_eq!(addr.as_str(), "owner@example.com");
        assert_eq!(addr.display_name(), Some("Site Owner"));
        assert_eq!(addr.to_string(), r#""Site Owner" <owner@example.com>"#);
    }

    #[test]
    fn parse_plain_address() {
        let addr: EmailAddress = "owner@example.com".parse().unwrap();
        assert_eq!(addr.display_name(), None);
        assert_eq!(addr.to_string(), "owner@example.com");
    }

    #[test]
    fn reject_garbage() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("a@example.com, b@example.com"
            .parse::<EmailAddress>()
            .is_err());
    }

    #[test]
    fn quotes_in_display_names_are_escaped() {
        let addr = EmailAddress::new_unchecked("a@b.c".into()).with_display_name(r#"The "Boss""#);
        assert_eq!(addr.to_string(), r#""The \"Boss\"" <a@b.c>"#);
    }
}
