//! Privacy registry: per-field sharing preferences toward agencies.
//!
//! One record per `(citizen, data field, agency)`. Preferences have no
//! expiry. Either the administrator or the citizen's authorized
//! representative (as answered by a [`DelegationOracle`]) may change them.

use serde::{Deserialize, Serialize};

use civic_ledger_core::{
    AgencyId, CitizenId, DataField, LedgerContext, LedgerHeight, Principal,
};
use civic_ledger_perms::{
    AdminOrDelegate, CitizenScoped, DelegationOracle, PermissionRecord, PermissionRegistry,
    Result,
};
use civic_ledger_store::MemoryStore;

/// Key of a sharing preference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrivacyKey {
    pub citizen: CitizenId,
    pub field: DataField,
    pub agency: AgencyId,
}

impl PrivacyKey {
    /// Create a new privacy key.
    pub fn new(citizen: CitizenId, field: DataField, agency: AgencyId) -> Self {
        Self {
            citizen,
            field,
            agency,
        }
    }
}

impl CitizenScoped for PrivacyKey {
    fn citizen(&self) -> &CitizenId {
        &self.citizen
    }
}

/// A sharing preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyRecord {
    /// Whether the field may be shared with the agency.
    pub shared: bool,

    /// Height of the last set.
    pub updated_at: LedgerHeight,
}

impl PermissionRecord for PrivacyRecord {
    /// The sharing flag to store.
    type Terms = bool;
    type Requirement = ();

    fn issue(shared: bool, ctx: &LedgerContext) -> Self {
        Self {
            shared,
            updated_at: ctx.height,
        }
    }

    fn granted_at(&self) -> LedgerHeight {
        self.updated_at
    }

    fn is_valid(&self, _now: LedgerHeight, _: &()) -> bool {
        self.shared
    }

    fn revoke(&mut self, _now: LedgerHeight) {
        self.shared = false;
    }
}

/// What a citizen currently shares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySummary {
    /// At least one preference is currently shared.
    pub has_privacy_settings: bool,

    /// Every `(field, agency)` pair currently shared, in key order.
    pub shared_with: Vec<(DataField, AgencyId)>,
}

/// Backing store of the privacy registry.
pub type PrivacyStore = MemoryStore<PrivacyKey, PrivacyRecord>;

/// Registry of sharing preferences, writable by the administrator or the
/// citizen's representative.
#[derive(Debug)]
pub struct PrivacyRegistry<O> {
    inner: PermissionRegistry<PrivacyKey, PrivacyRecord, AdminOrDelegate<O>>,
}

impl<O: DelegationOracle> PrivacyRegistry<O> {
    /// Create an empty registry.
    pub fn new(administrator: Principal, oracle: O) -> Self {
        Self::from_store(administrator, oracle, PrivacyStore::new())
    }

    /// Create a registry over existing records.
    pub fn from_store(administrator: Principal, oracle: O, store: PrivacyStore) -> Self {
        Self {
            inner: PermissionRegistry::with_store(
                AdminOrDelegate::new(administrator, oracle),
                store,
            ),
        }
    }

    /// Set the sharing preference for one field toward one agency.
    ///
    /// Overwrites any prior preference, so `shared = false` turns sharing off.
    pub fn set_privacy_setting(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        field: DataField,
        agency: AgencyId,
        shared: bool,
    ) -> Result<()> {
        let key = PrivacyKey::new(citizen.clone(), field, agency);
        self.inner.grant(ctx, key, shared)
    }

    /// Turn sharing on.
    pub fn grant_sharing(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        field: DataField,
        agency: AgencyId,
    ) -> Result<()> {
        self.set_privacy_setting(ctx, citizen, field, agency, true)
    }

    /// Turn sharing off in place. A preference that was never set stays unset.
    pub fn revoke_sharing(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        field: DataField,
        agency: AgencyId,
    ) -> Result<()> {
        let key = PrivacyKey::new(citizen.clone(), field, agency);
        self.inner.revoke(ctx, &key)
    }

    /// Whether the field is shared with the agency.
    ///
    /// Sharing has no expiry, so no height is needed.
    pub fn is_data_shared(&self, citizen: &CitizenId, field: DataField, agency: AgencyId) -> bool {
        let key = PrivacyKey::new(citizen.clone(), field, agency);
        self.inner.is_valid(&key, LedgerHeight::ZERO, &())
    }

    /// The stored preference, if one was ever set.
    pub fn privacy_setting(
        &self,
        citizen: &CitizenId,
        field: DataField,
        agency: AgencyId,
    ) -> Option<&PrivacyRecord> {
        self.inner.get(&PrivacyKey::new(citizen.clone(), field, agency))
    }

    /// Summarize what `citizen` currently shares.
    ///
    /// Only visits `citizen`'s own preferences.
    pub fn privacy_summary(&self, citizen: &CitizenId) -> PrivacySummary {
        let first = PrivacyKey::new(citizen.clone(), DataField::new(0), AgencyId::new(0));
        let last = PrivacyKey::new(
            citizen.clone(),
            DataField::new(u32::MAX),
            AgencyId::new(u32::MAX),
        );

        let shared_with: Vec<(DataField, AgencyId)> = self
            .inner
            .store()
            .range(first..=last)
            .filter(|(_, record)| record.shared)
            .map(|(key, _)| (key.field, key.agency))
            .collect();

        PrivacySummary {
            has_privacy_settings: !shared_with.is_empty(),
            shared_with,
        }
    }

    /// The underlying generic registry.
    pub fn registry(
        &self,
    ) -> &PermissionRegistry<PrivacyKey, PrivacyRecord, AdminOrDelegate<O>> {
        &self.inner
    }
}
