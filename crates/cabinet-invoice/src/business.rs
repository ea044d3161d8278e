//! Business details printed at the top of every invoice.

use serde::{Deserialize, Serialize};

/// Who issues the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl BusinessInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        BusinessInfo {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// "Phone: ..." header line.
    pub fn phone_line(&self) -> String {
        format!("Phone: {}", self.phone)
    }

    /// "Email: ..." header line.
    pub fn email_line(&self) -> String {
        format!("Email: {}", self.email)
    }
}

impl Default for BusinessInfo {
    fn default() -> Self {
        BusinessInfo::new(
            "Mike Renovations LLC",
            "239-200-5772",
            "contact@mikerenovations.com",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lines() {
        let info = BusinessInfo::default();
        assert_eq!(info.phone_line(), "Phone: 239-200-5772");
        assert_eq!(info.email_line(), "Email: contact@mikerenovations.com");
    }
}
