//! The generic permission registry.
//!
//! One engine serves every registry configuration: it authorizes the caller,
//! writes or revokes a record, and answers validity queries against the
//! height the caller supplies.

use std::fmt;
use std::marker::PhantomData;

use civic_ledger_core::{LedgerContext, LedgerHeight};
use civic_ledger_store::{MemoryStore, RecordStore};

use crate::authority::Authority;
use crate::error::{PermsError, Result};
use crate::record::PermissionRecord;

/// An admin-gated, expiry-aware map from key to permission record.
///
/// # Design Notes
///
/// - **Overwrite on grant**: a second grant replaces the prior record wholesale.
/// - **Revoke in place**: revocation never deletes; it flips the record's flag
///   and lets the record collapse its own expiry.
/// - **Permissive revoke**: revoking an absent key succeeds and writes nothing.
/// - **Authorize first**: the authority is checked before the store is read,
///   so a rejected caller learns nothing about the key.
pub struct PermissionRegistry<K, R, A, S = MemoryStore<K, R>> {
    /// Who may mutate.
    authority: A,
    /// The records.
    store: S,
    _marker: PhantomData<fn() -> (K, R)>,
}

impl<K: Ord, R, A> PermissionRegistry<K, R, A, MemoryStore<K, R>> {
    /// Create an empty registry backed by a [`MemoryStore`].
    pub fn new(authority: A) -> Self {
        Self::with_store(authority, MemoryStore::new())
    }
}

impl<K, R, A, S> PermissionRegistry<K, R, A, S> {
    /// Create a registry over an existing store.
    pub fn with_store(authority: A, store: S) -> Self {
        Self {
            authority,
            store,
            _marker: PhantomData,
        }
    }

    /// The authorization predicate.
    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<K, R, A, S> PermissionRegistry<K, R, A, S>
where
    K: fmt::Debug,
    R: PermissionRecord,
    A: Authority<K>,
    S: RecordStore<K, R>,
{
    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Grant (or re-grant) a permission at `key`.
    ///
    /// The new record is issued at `ctx.height` and replaces any prior one.
    pub fn grant(&mut self, ctx: &LedgerContext, key: K, terms: R::Terms) -> Result<()> {
        self.authorize(ctx, &key, "grant")?;

        if let Some(existing) = self.store.get(&key) {
            if existing.granted_at() > ctx.height {
                tracing::warn!(
                    ?key,
                    granted_at = existing.granted_at().value(),
                    height = ctx.height.value(),
                    "ledger height behind stored grant"
                );
            }
        }

        tracing::debug!(?key, height = ctx.height.value(), "grant recorded");
        self.store.put(key, R::issue(terms, ctx));
        Ok(())
    }

    /// Revoke the permission at `key`.
    ///
    /// Succeeds without effect if no record exists.
    pub fn revoke(&mut self, ctx: &LedgerContext, key: &K) -> Result<()> {
        self.authorize(ctx, key, "revoke")?;

        match self.store.get_mut(key) {
            Some(record) => {
                record.revoke(ctx.height);
                tracing::debug!(?key, height = ctx.height.value(), "grant revoked");
            }
            None => {
                tracing::debug!(
                    ?key,
                    height = ctx.height.value(),
                    "revoke of absent grant ignored"
                );
            }
        }

        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the record at `key` is valid at height `now`.
    ///
    /// `false` if there is no record.
    pub fn is_valid(&self, key: &K, now: LedgerHeight, requirement: &R::Requirement) -> bool {
        self.store
            .get(key)
            .is_some_and(|record| record.is_valid(now, requirement))
    }

    /// The stored record at `key`, valid or not.
    pub fn get(&self, key: &K) -> Option<&R> {
        self.store.get(key)
    }

    /// Number of stored records, including revoked and expired ones.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no record has ever been written.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn authorize(&self, ctx: &LedgerContext, key: &K, op: &'static str) -> Result<()> {
        if self.authority.permits(&ctx.caller, key) {
            Ok(())
        } else {
            tracing::warn!(op, caller = %ctx.caller, ?key, "unauthorized caller rejected");
            Err(PermsError::NotAuthorized)
        }
    }
}

impl<K, R, A, S> fmt::Debug for PermissionRegistry<K, R, A, S>
where
    A: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionRegistry")
            .field("authority", &self.authority)
            .field("store", &self.store)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::{AdminOnly, AdminOrDelegate, CitizenScoped};
    use crate::record::Term;
    use civic_ledger_core::{CitizenId, Principal};
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Key(CitizenId, u32);

    impl CitizenScoped for Key {
        fn citizen(&self) -> &CitizenId {
            &self.0
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Grant {
        term: Term,
        tier: u32,
    }

    impl PermissionRecord for Grant {
        type Terms = (u32, LedgerHeight);
        type Requirement = u32;

        fn issue((tier, expiry): Self::Terms, ctx: &LedgerContext) -> Self {
            Self {
                term: Term::open(ctx.height, expiry),
                tier,
            }
        }

        fn granted_at(&self) -> LedgerHeight {
            self.term.granted_at
        }

        fn is_valid(&self, now: LedgerHeight, required: &u32) -> bool {
            self.term.is_live(now) && self.tier >= *required
        }

        fn revoke(&mut self, now: LedgerHeight) {
            self.term.collapse(now);
        }
    }

    fn admin() -> Principal {
        Principal::from_bytes([1; 32])
    }

    fn stranger() -> Principal {
        Principal::from_bytes([2; 32])
    }

    fn key() -> Key {
        Key(CitizenId::new("CITIZEN123456789"), 1)
    }

    fn h(n: u64) -> LedgerHeight {
        LedgerHeight::new(n)
    }

    fn registry() -> PermissionRegistry<Key, Grant, AdminOnly> {
        PermissionRegistry::new(AdminOnly::new(admin()))
    }

    #[test]
    fn test_grant_and_check() {
        let mut reg = registry();
        let ctx = LedgerContext::new(admin(), h(100));

        reg.grant(&ctx, key(), (5, h(1100))).unwrap();

        assert!(reg.is_valid(&key(), h(100), &5));
        assert!(reg.is_valid(&key(), h(1099), &5));
        assert!(!reg.is_valid(&key(), h(1100), &5));
        assert_eq!(reg.get(&key()).unwrap().term.granted_at, h(100));
    }

    #[test]
    fn test_unauthorized_grant_leaves_state() {
        let mut reg = registry();
        let ctx = LedgerContext::new(admin(), h(100));
        reg.grant(&ctx, key(), (5, h(1100))).unwrap();
        let before = reg.get(&key()).cloned();

        let err = reg
            .grant(&ctx.as_caller(stranger()), key(), (9, h(9999)))
            .unwrap_err();

        assert_eq!(err, PermsError::NotAuthorized);
        assert_eq!(err.code(), 100);
        assert_eq!(reg.get(&key()).cloned(), before);
    }

    #[test]
    fn test_unauthorized_grant_creates_nothing() {
        let mut reg = registry();
        let ctx = LedgerContext::new(stranger(), h(100));

        assert!(reg.grant(&ctx, key(), (5, h(1100))).is_err());
        assert!(reg.is_empty());
        assert!(!reg.is_valid(&key(), h(100), &0));
    }

    #[test]
    fn test_revoke_removes_access() {
        let mut reg = registry();
        let ctx = LedgerContext::new(admin(), h(100));
        reg.grant(&ctx, key(), (5, h(1100))).unwrap();

        reg.revoke(&ctx.at(h(400)), &key()).unwrap();

        let record = reg.get(&key()).unwrap();
        assert!(!record.term.active);
        assert_eq!(record.term.expiry, h(400));
        assert!(!reg.is_valid(&key(), h(400), &0));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_revoke_absent_is_noop() {
        let mut reg = registry();
        let ctx = LedgerContext::new(admin(), h(100));

        assert!(reg.revoke(&ctx, &key()).is_ok());
        assert!(reg.is_empty());
        assert!(reg.get(&key()).is_none());
    }

    #[test]
    fn test_unauthorized_revoke() {
        let mut reg = registry();
        let ctx = LedgerContext::new(admin(), h(100));
        reg.grant(&ctx, key(), (5, h(1100))).unwrap();

        let err = reg.revoke(&ctx.as_caller(stranger()), &key()).unwrap_err();
        assert_eq!(err, PermsError::NotAuthorized);
        assert!(reg.is_valid(&key(), h(100), &5));
    }

    #[test]
    fn test_unauthorized_revoke_on_absent_key() {
        let mut reg = registry();
        let ctx = LedgerContext::new(stranger(), h(100));
        assert_eq!(reg.revoke(&ctx, &key()), Err(PermsError::NotAuthorized));
    }

    #[test]
    fn test_regrant_overwrites() {
        let mut reg = registry();
        let ctx = LedgerContext::new(admin(), h(100));
        reg.grant(&ctx, key(), (5, h(1100))).unwrap();
        reg.revoke(&ctx.at(h(150)), &key()).unwrap();

        reg.grant(&ctx.at(h(200)), key(), (2, h(300))).unwrap();

        let record = reg.get(&key()).unwrap();
        assert_eq!(record.tier, 2);
        assert_eq!(record.term, Term::open(h(200), h(300)));
        assert!(reg.is_valid(&key(), h(250), &2));
        assert!(!reg.is_valid(&key(), h(250), &3));
    }

    #[test]
    fn test_delegate_can_mutate_own_citizen() {
        let rep = stranger();
        let mut reg: PermissionRegistry<Key, Grant, _> = PermissionRegistry::new(
            AdminOrDelegate::new(admin(), move |caller: &Principal, citizen: &CitizenId| {
                *caller == rep && citizen.as_str() == "CITIZEN123456789"
            }),
        );
        let ctx = LedgerContext::new(rep, h(10));

        reg.grant(&ctx, key(), (1, h(20))).unwrap();
        assert!(reg.is_valid(&key(), h(10), &1));

        let other = Key(CitizenId::new("OTHER"), 1);
        assert_eq!(reg.grant(&ctx, other.clone(), (1, h(20))), Err(PermsError::NotAuthorized));
        assert!(reg.get(&other).is_none());
    }

    proptest! {
        #[test]
        fn test_validity_window(start in 0u64..1_000_000, span in 1u64..10_000, offset in 0u64..20_000) {
            let mut reg = registry();
            let ctx = LedgerContext::new(admin(), h(start));
            reg.grant(&ctx, key(), (0, h(start + span))).unwrap();

            let now = h(start + offset);
            prop_assert_eq!(reg.is_valid(&key(), now, &0), offset < span);
        }

        #[test]
        fn test_revoke_is_final(start in 0u64..1_000_000, span in 1u64..10_000, at in 0u64..10_000, later in 0u64..10_000) {
            let mut reg = registry();
            let ctx = LedgerContext::new(admin(), h(start));
            reg.grant(&ctx, key(), (0, h(start + span))).unwrap();

            reg.revoke(&ctx.at(h(start + at)), &key()).unwrap();
            prop_assert!(!reg.is_valid(&key(), h(start + at + later), &0));
        }
    }
}
