//! # Civic Ledger Core
//!
//! Pure primitives for the Civic Ledger: principals, ledger heights, and the
//! typed identifiers that make up registry keys.
//!
//! This crate contains no storage and no authorization logic. It is plain
//! data with well-defined equality, ordering, and encoding.
//!
//! ## Key Types
//!
//! - [`Principal`] - Opaque ledger identity of a caller
//! - [`LedgerHeight`] - The logical clock every expiry is measured against
//! - [`CitizenId`] - Identifier of the citizen a record is about
//! - [`LedgerContext`] - The `(caller, height)` pair supplied by the host ledger
//!
//! ## Discriminants
//!
//! [`CredentialType`], [`ServiceType`], [`DataField`] and [`AgencyId`] are
//! `u32` newtypes so that one kind of discriminant can never be passed where
//! another is expected.

pub mod context;
pub mod error;
pub mod principal;
pub mod types;

pub use context::LedgerContext;
pub use error::CoreError;
pub use principal::Principal;
pub use types::{
    AccessLevel, AgencyId, CitizenId, CredentialType, DataField, LedgerHeight, ServiceType,
};
