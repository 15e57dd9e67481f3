//! Permission records and the validity window they share.
//!
//! Every registry stores one record type. The engine only needs to know how
//! to issue a record at the current height, how to check it, and how to
//! revoke it in place.

use serde::{Deserialize, Serialize};

use civic_ledger_core::{LedgerContext, LedgerHeight};

/// A record held by a [`PermissionRegistry`](crate::PermissionRegistry).
pub trait PermissionRecord: Clone {
    /// Fields supplied by the caller when granting.
    type Terms;

    /// Extra input a validity query may demand (e.g. a minimum level).
    type Requirement: ?Sized;

    /// Build a fresh record from caller-supplied terms.
    ///
    /// Implementations must stamp `ctx.height` as the grant height.
    fn issue(terms: Self::Terms, ctx: &LedgerContext) -> Self;

    /// Height at which the record was last (re)issued.
    fn granted_at(&self) -> LedgerHeight;

    /// Whether the record is valid at `now` for the given requirement.
    fn is_valid(&self, now: LedgerHeight, requirement: &Self::Requirement) -> bool;

    /// Revoke in place at height `now`.
    fn revoke(&mut self, now: LedgerHeight);
}

/// The active flag and expiry window of an expiry-bearing grant.
///
/// Validity is `active && now < expiry`. Revocation clears `active` and
/// collapses `expiry` to the revocation height, so a revoked term and a
/// naturally expired term fail the same comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Whether the grant is live, independent of expiry.
    pub active: bool,

    /// Height at which the grant was issued.
    pub granted_at: LedgerHeight,

    /// First height at which the grant is no longer valid.
    pub expiry: LedgerHeight,
}

impl Term {
    /// An active term issued at `granted_at`, valid until `expiry`.
    pub fn open(granted_at: LedgerHeight, expiry: LedgerHeight) -> Self {
        Self {
            active: true,
            granted_at,
            expiry,
        }
    }

    /// Check the term at height `now`.
    pub fn is_live(&self, now: LedgerHeight) -> bool {
        self.active && now < self.expiry
    }

    /// Deactivate and pull the expiry down to `now`.
    pub fn collapse(&mut self, now: LedgerHeight) {
        self.active = false;
        self.expiry = now;
    }
}
