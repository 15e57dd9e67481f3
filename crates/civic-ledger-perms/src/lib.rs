//! # Civic Ledger Permissions
//!
//! The admin-gated, expiry-aware permission registry.
//!
//! ## Overview
//!
//! A [`PermissionRegistry`] maps a composite key to a single
//! [`PermissionRecord`]. Mutation is gated by an [`Authority`]; reads are
//! public and answer plain booleans against a caller-supplied
//! [`LedgerHeight`](civic_ledger_core::LedgerHeight).
//!
//! ## Key Concepts
//!
//! - **Grant**: insert or wholesale-replace the record at a key, stamped with
//!   the current height
//! - **Revoke**: flip the record's flag and collapse its expiry to the current
//!   height; absent keys are a silent no-op
//! - **Validity**: `active && now < expiry` for expiry-bearing records, see
//!   [`Term`]
//! - **Authority**: [`AdminOnly`] or [`AdminOrDelegate`], the latter asking a
//!   [`DelegationOracle`] about the citizen behind the key
//!
//! ## Errors
//!
//! The only failure is [`PermsError::NotAuthorized`] (code
//! [`ERR_NOT_AUTHORIZED`]). There is no not-found error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use civic_ledger_perms::{AdminOnly, PermissionRegistry};
//!
//! let mut registry: PermissionRegistry<MyKey, MyRecord, _> =
//!     PermissionRegistry::new(AdminOnly::new(admin));
//!
//! registry.grant(&ctx, key.clone(), terms)?;
//! assert!(registry.is_valid(&key, ctx.height, &()));
//! registry.revoke(&ctx, &key)?;
//! ```

pub mod authority;
pub mod error;
pub mod record;
pub mod registry;

pub use authority::{
    AdminOnly, AdminOrDelegate, Authority, CitizenScoped, DelegationOracle, NoDelegation,
};
pub use error::{PermsError, Result, ERR_NOT_AUTHORIZED};
pub use record::{PermissionRecord, Term};
pub use registry::PermissionRegistry;
