//! Vendor model
//!
//! The payee of a transaction, identified by name and location.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a vendor name or location
const MAX_FIELD_LEN: usize = 100;

/// A vendor (payee) identified by name and location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub location: String,
}

impl Vendor {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Normalize a vendor field for matching
    pub fn normalize(value: &str) -> String {
        value.trim().to_lowercase()
    }

    /// Whether two vendors refer to the same place (case-insensitive)
    pub fn same_as(&self, other: &Vendor) -> bool {
        Self::normalize(&self.name) == Self::normalize(&other.name)
            && Self::normalize(&self.location) == Self::normalize(&other.location)
    }

    /// Case-insensitive substring match against name or location
    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.location.to_lowercase().contains(&keyword)
    }

    /// Validate the vendor
    pub fn validate(&self) -> Result<(), VendorValidationError> {
        if self.name.trim().is_empty() {
            return Err(VendorValidationError::EmptyName);
        }

        let name_len = self.name.chars().count();
        if name_len > MAX_FIELD_LEN {
            return Err(VendorValidationError::NameTooLong(name_len));
        }

        let location_len = self.location.chars().count();
        if location_len > MAX_FIELD_LEN {
            return Err(VendorValidationError::LocationTooLong(location_len));
        }

        Ok(())
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} @ {}", self.name, self.location)
        }
    }
}

/// Validation errors for vendors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorValidationError {
    EmptyName,
    NameTooLong(usize),
    LocationTooLong(usize),
}

impl fmt::Display for VendorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Vendor name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Vendor name too long ({} chars, max {})", len, MAX_FIELD_LEN)
            }
            Self::LocationTooLong(len) => {
                write!(f, "Vendor location too long ({} chars, max {})", len, MAX_FIELD_LEN)
            }
        }
    }
}

impl std::error::Error for VendorValidationError {}
