//! Ledger configuration.
//!
//! The administrator is fixed when the registries are built. Nothing in the
//! registries can change it afterwards.

use serde::{Deserialize, Serialize};

use civic_ledger_core::Principal;

use crate::error::Result;

/// Configuration shared by all three registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    /// The single principal allowed to issue, grant, and revoke.
    pub administrator: Principal,
}

impl LedgerConfig {
    /// Create a configuration with the given administrator.
    pub fn new(administrator: Principal) -> Self {
        Self { administrator }
    }

    /// Use the principal derived from a host ledger address as administrator.
    pub fn from_admin_address(address: &str) -> Self {
        Self::new(Principal::derive(address))
    }

    /// Parse an administrator given as 64 hex characters.
    pub fn from_admin_hex(hex: &str) -> Result<Self> {
        Ok(Self::new(Principal::from_hex(hex)?))
    }

    /// Parse a JSON configuration document.
    ///
    /// ```json
    /// { "administrator": "<64 hex chars>" }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    #[test]
    fn test_config_from_json() {
        let admin = Principal::from_bytes([0x11; 32]);
        let json = format!(r#"{{ "administrator": "{}" }}"#, admin.to_hex());

        let config = LedgerConfig::from_json(&json).unwrap();
        assert_eq!(config.administrator, admin);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = LedgerConfig::from_admin_address("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
        let json = config.to_json().unwrap();
        assert_eq!(LedgerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let json = format!(
            r#"{{ "administrator": "{}", "quorum": 3 }}"#,
            "00".repeat(32)
        );
        assert!(matches!(LedgerConfig::from_json(&json), Err(LedgerError::Config(_))));
    }

    #[test]
    fn test_config_rejects_bad_principal() {
        assert!(LedgerConfig::from_json(r#"{ "administrator": "zz" }"#).is_err());
        assert!(matches!(
            LedgerConfig::from_admin_hex("abcd"),
            Err(LedgerError::Core(_))
        ));
    }
}
