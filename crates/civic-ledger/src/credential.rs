//! Credential registry: typed credentials issued to citizens.
//!
//! One record per `(citizen, credential type)`. Only the administrator may
//! issue or revoke, and the issuing principal is recorded on the credential.

use serde::{Deserialize, Serialize};

use civic_ledger_core::{CitizenId, CredentialType, LedgerContext, LedgerHeight, Principal};
use civic_ledger_perms::{
    AdminOnly, CitizenScoped, PermissionRecord, PermissionRegistry, Result, Term,
};
use civic_ledger_store::MemoryStore;

/// Key of a credential record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CredentialKey {
    pub citizen: CitizenId,
    pub credential_type: CredentialType,
}

impl CredentialKey {
    /// Create a new credential key.
    pub fn new(citizen: CitizenId, credential_type: CredentialType) -> Self {
        Self {
            citizen,
            credential_type,
        }
    }
}

impl CitizenScoped for CredentialKey {
    fn citizen(&self) -> &CitizenId {
        &self.citizen
    }
}

/// An issued credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Issuance flag and validity window.
    pub term: Term,

    /// The administrator that issued it.
    pub issuer: Principal,
}

impl CredentialRecord {
    /// Whether the credential is still marked as issued.
    pub fn is_issued(&self) -> bool {
        self.term.active
    }

    /// Height of (re)issuance.
    pub fn issued_at(&self) -> LedgerHeight {
        self.term.granted_at
    }

    /// First height at which the credential is invalid.
    pub fn expires_at(&self) -> LedgerHeight {
        self.term.expiry
    }
}

impl PermissionRecord for CredentialRecord {
    /// The expiry height.
    type Terms = LedgerHeight;
    type Requirement = ();

    fn issue(expiry: LedgerHeight, ctx: &LedgerContext) -> Self {
        Self {
            term: Term::open(ctx.height, expiry),
            issuer: ctx.caller,
        }
    }

    fn granted_at(&self) -> LedgerHeight {
        self.term.granted_at
    }

    fn is_valid(&self, now: LedgerHeight, _: &()) -> bool {
        self.term.is_live(now)
    }

    fn revoke(&mut self, now: LedgerHeight) {
        self.term.collapse(now);
    }
}

/// Backing store of the credential registry.
pub type CredentialStore = MemoryStore<CredentialKey, CredentialRecord>;

/// Admin-only registry of issued credentials.
#[derive(Debug)]
pub struct CredentialRegistry {
    inner: PermissionRegistry<CredentialKey, CredentialRecord, AdminOnly>,
}

impl CredentialRegistry {
    /// Create an empty registry administered by `administrator`.
    pub fn new(administrator: Principal) -> Self {
        Self::from_store(administrator, CredentialStore::new())
    }

    /// Create a registry over existing records.
    pub fn from_store(administrator: Principal, store: CredentialStore) -> Self {
        Self {
            inner: PermissionRegistry::with_store(AdminOnly::new(administrator), store),
        }
    }

    /// Issue (or re-issue) a credential, valid until `expiry`.
    pub fn issue_credential(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        credential_type: CredentialType,
        expiry: LedgerHeight,
    ) -> Result<()> {
        let key = CredentialKey::new(citizen.clone(), credential_type);
        self.inner.grant(ctx, key, expiry)
    }

    /// Revoke a credential. Revoking one that was never issued succeeds.
    pub fn revoke_credential(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        credential_type: CredentialType,
    ) -> Result<()> {
        let key = CredentialKey::new(citizen.clone(), credential_type);
        self.inner.revoke(ctx, &key)
    }

    /// Whether the credential is issued and unexpired at height `now`.
    pub fn is_credential_valid(
        &self,
        citizen: &CitizenId,
        credential_type: CredentialType,
        now: LedgerHeight,
    ) -> bool {
        let key = CredentialKey::new(citizen.clone(), credential_type);
        self.inner.is_valid(&key, now, &())
    }

    /// The stored credential, valid or not.
    pub fn credential(
        &self,
        citizen: &CitizenId,
        credential_type: CredentialType,
    ) -> Option<&CredentialRecord> {
        self.inner.get(&CredentialKey::new(citizen.clone(), credential_type))
    }

    /// The underlying generic registry.
    pub fn registry(&self) -> &PermissionRegistry<CredentialKey, CredentialRecord, AdminOnly> {
        &self.inner
    }
}
