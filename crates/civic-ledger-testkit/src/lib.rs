//! # Civic Ledger Testkit
//!
//! Testing utilities for the Civic Ledger registries.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a ledger with a known administrator, representative, and
//!   citizen, plus a height that only moves forward
//! - **Generators**: Proptest strategies for principals, identifiers, and
//!   registry operation sequences
//!
//! ## Test Fixtures
//!
//! ```rust
//! use civic_ledger_testkit::fixtures::TestFixture;
//! use civic_ledger::CredentialType;
//!
//! let mut fixture = TestFixture::new();
//! let ctx = fixture.admin_ctx();
//! let citizen = fixture.citizen.clone();
//! let expiry = fixture.height().advance(1000);
//!
//! fixture
//!     .ledger
//!     .credentials_mut()
//!     .issue_credential(&ctx, &citizen, CredentialType::ID, expiry)
//!     .unwrap();
//!
//! fixture.advance(1001);
//! assert!(!fixture
//!     .ledger
//!     .credentials()
//!     .is_credential_valid(&citizen, CredentialType::ID, fixture.height()));
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use civic_ledger_testkit::generators::registry_ops;
//!
//! proptest! {
//!     #[test]
//!     fn replay_matches_model(ops in registry_ops(32)) {
//!         // apply `ops` to a registry and to a reference model
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{multi_party_principals, random_principal, RepresentativeTable, TestFixture};
pub use generators::{registry_ops, RegistryOp};
