//! # Identity Allow-List
//!
//! The set of (institute, roll number) pairs permitted to create an order.
//! Loaded once at startup from `config/identities.toml`, or the built-in
//! default pair when no file is present.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};

/// Institute accepted when no allow-list file is configured
pub const DEFAULT_INSTITUTE: &str = "Institute of Technology";

/// Roll number accepted when no allow-list file is configured
pub const DEFAULT_ROLLNO: &str = "23bec202";

/// One allowed identity pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedIdentity {
    /// Institute name
    pub institute: String,
    /// Roll number
    pub rollno: String,
}

impl AllowedIdentity {
    pub fn new(institute: impl Into<String>, rollno: impl Into<String>) -> Self {
        Self {
            institute: institute.into(),
            rollno: rollno.into(),
        }
    }

    /// Both fields must match, ignoring case
    fn matches(&self, institute: &str, rollno: &str) -> bool {
        self.institute.to_lowercase() == institute.to_lowercase()
            && self.rollno.to_lowercase() == rollno.to_lowercase()
    }
}

/// An identity that passed the allow-list check.
///
/// Only [`IdentityRegistry::validate`] hands these out, so holding one is
/// proof the caller was gated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    institute: String,
    rollno: String,
}

impl VerifiedIdentity {
    pub fn institute(&self) -> &str {
        &self.institute
    }

    pub fn rollno(&self) -> &str {
        &self.rollno
    }
}

/// Allow-list of identities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRegistry {
    pub identities: Vec<AllowedIdentity>,
}

impl IdentityRegistry {
    /// Create a registry from explicit entries
    pub fn new(identities: Vec<AllowedIdentity>) -> Self {
        Self { identities }
    }

    /// Load the allow-list from a TOML string.
    ///
    /// An empty list is rejected: it would lock every caller out.
    pub fn from_toml(toml_str: &str) -> PaymentResult<Self> {
        let registry: Self = toml::from_str(toml_str)
            .map_err(|e| PaymentError::Configuration(format!("Invalid identities file: {}", e)))?;

        if registry.identities.is_empty() {
            return Err(PaymentError::Configuration(
                "Identities file lists no identities".to_string(),
            ));
        }

        Ok(registry)
    }

    /// Number of allowed identities
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Gate a submitted identity.
    ///
    /// Absent and empty fields are both treated as missing.
    pub fn validate(
        &self,
        rollno: Option<&str>,
        institute: Option<&str>,
    ) -> PaymentResult<VerifiedIdentity> {
        let (rollno, institute) = match (non_empty(rollno), non_empty(institute)) {
            (Some(r), Some(i)) => (r, i),
            _ => return Err(PaymentError::MissingFields),
        };

        if !self.identities.iter().any(|id| id.matches(institute, rollno)) {
            return Err(PaymentError::IdentityMismatch);
        }

        Ok(VerifiedIdentity {
            institute: institute.to_string(),
            rollno: rollno.to_string(),
        })
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::new(vec![AllowedIdentity::new(DEFAULT_INSTITUTE, DEFAULT_ROLLNO)])
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pair_is_valid() {
        let registry = IdentityRegistry::default();
        let id = registry
            .validate(Some("23bec202"), Some("Institute of Technology"))
            .unwrap();
        assert_eq!(id.rollno(), "23bec202");
        assert_eq!(id.institute(), "Institute of Technology");
    }

    #[test]
    fn test_case_insensitive_match() {
        let registry = IdentityRegistry::default();
        assert!(registry
            .validate(Some("23BEC202"), Some("INSTITUTE OF TECHNOLOGY"))
            .is_ok());
        assert!(registry
            .validate(Some("23Bec202"), Some("institute of technology"))
            .is_ok());
    }

    #[test]
    fn test_mismatch() {
        let registry = IdentityRegistry::default();
        for (rollno, institute) in [
            ("wrong", "Institute of Technology"),
            ("23bec202", "Other Institute"),
            ("23bec202 ", "Institute of Technology"),
            ("23bec20", "Institute of Technology"),
        ] {
            assert!(matches!(
                registry.validate(Some(rollno), Some(institute)),
                Err(PaymentError::IdentityMismatch)
            ));
        }
    }

    #[test]
    fn test_missing_fields() {
        let registry = IdentityRegistry::default();
        assert!(matches!(
            registry.validate(None, Some("Institute of Technology")),
            Err(PaymentError::MissingFields)
        ));
        assert!(matches!(
            registry.validate(Some("23bec202"), None),
            Err(PaymentError::MissingFields)
        ));
        assert!(matches!(
            registry.validate(Some(""), Some("Institute of Technology")),
            Err(PaymentError::MissingFields)
        ));
    }

    #[test]
    fn test_no_cross_matching_between_entries() {
        let registry = IdentityRegistry::new(vec![
            AllowedIdentity::new("Alpha College", "a1"),
            AllowedIdentity::new("Beta College", "b2"),
        ]);
        assert!(registry.validate(Some("b2"), Some("beta college")).is_ok());
        assert!(matches!(
            registry.validate(Some("a1"), Some("Beta College")),
            Err(PaymentError::IdentityMismatch)
        ));
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [[identities]]
            institute = "Alpha College"
            rollno = "a1"

            [[identities]]
            institute = "Beta College"
            rollno = "b2"
        "#;
        let registry = IdentityRegistry::from_toml(toml).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.validate(Some("A1"), Some("alpha college")).is_ok());
    }

    #[test]
    fn test_from_toml_rejects_empty_list() {
        let result = IdentityRegistry::from_toml("identities = []");
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }
}
