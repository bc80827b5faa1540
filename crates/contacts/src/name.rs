use serde::{Deserialize, Serialize};

use contactbook_core::ValueObject;

/// Value object: the name a contact is filed under.
///
/// Stored as given. Empty and blank names are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ContactName {}

impl core::fmt::Display for ContactName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContactName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ContactName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_name_as_given() {
        let name = ContactName::new("  John ");
        assert_eq!(name.as_str(), "  John ");
        assert_eq!(name.to_string(), "  John ");
    }

    #[test]
    fn empty_name_is_permitted() {
        assert_eq!(ContactName::new("").as_str(), "");
    }
}
