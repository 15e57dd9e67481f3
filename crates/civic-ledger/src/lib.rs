//! # Civic Ledger
//!
//! Ledger-resident access control over citizen identities: issued
//! credentials, data-sharing preferences, and service-access grants.
//!
//! ## Overview
//!
//! All three registries are the same mechanism, a
//! [`PermissionRegistry`](perms::PermissionRegistry), configured three ways:
//!
//! - [`CredentialRegistry`] - key `(citizen, credential type)`, admin-only,
//!   records the issuer
//! - [`PrivacyRegistry`] - key `(citizen, data field, agency)`, admin or the
//!   citizen's representative, boolean flag with no expiry
//! - [`ServiceAccessRegistry`] - key `(citizen, service)`, admin-only, carries
//!   an access level
//!
//! ## Key Concepts
//!
//! - **Height, not time**: every call takes a [`LedgerContext`] or a
//!   [`LedgerHeight`]; expiry is `now < expiry`, strictly
//! - **Revoke collapses expiry**: a revoked grant is invalid at the height it
//!   was revoked
//! - **One error**: mutations fail only with
//!   [`PermsError::NotAuthorized`](perms::PermsError::NotAuthorized)
//!
//! ## Usage
//!
//! ```rust
//! use civic_ledger::{CitizenId, CredentialType, LedgerContext, LedgerHeight, Principal};
//! use civic_ledger::CredentialRegistry;
//!
//! let admin = Principal::derive("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
//! let citizen = CitizenId::new("CITIZEN123456789");
//! let mut credentials = CredentialRegistry::new(admin);
//!
//! let ctx = LedgerContext::new(admin, LedgerHeight::new(100));
//! credentials
//!     .issue_credential(&ctx, &citizen, CredentialType::ID, LedgerHeight::new(1100))
//!     .unwrap();
//!
//! let valid_at =
//!     |h| credentials.is_credential_valid(&citizen, CredentialType::ID, LedgerHeight::new(h));
//! assert!(valid_at(1099));
//! assert!(!valid_at(1100));
//! ```
//!
//! ## Re-exports
//!
//! - `civic_ledger::core` - Principals, heights, identifiers
//! - `civic_ledger::store` - Record storage and snapshots
//! - `civic_ledger::perms` - The generic registry and authorities

pub mod config;
pub mod credential;
pub mod error;
pub mod ledger;
pub mod privacy;
pub mod service;

// Re-export component crates
pub use civic_ledger_core as core;
pub use civic_ledger_perms as perms;
pub use civic_ledger_store as store;

// Re-export main types for convenience
pub use config::LedgerConfig;
pub use credential::{CredentialKey, CredentialRecord, CredentialRegistry};
pub use error::{LedgerError, Result};
pub use ledger::{CivicLedger, LedgerSnapshot};
pub use privacy::{PrivacyKey, PrivacyRecord, PrivacyRegistry, PrivacySummary};
pub use service::{AccessTerms, ServiceAccessKey, ServiceAccessRecord, ServiceAccessRegistry};

// Re-export commonly used core types
pub use civic_ledger_core::{
    AccessLevel, AgencyId, CitizenId, CredentialType, DataField, LedgerContext, LedgerHeight,
    Principal, ServiceType,
};
pub use civic_ledger_perms::{DelegationOracle, NoDelegation, PermsError};
