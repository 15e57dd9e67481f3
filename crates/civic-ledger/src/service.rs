//! Service-access registry: per-service grants with an access level.
//!
//! A grant at level `L` satisfies any required level up to and including `L`
//! while its term is live.

use serde::{Deserialize, Serialize};

use civic_ledger_core::{
    AccessLevel, CitizenId, LedgerContext, LedgerHeight, Principal, ServiceType,
};
use civic_ledger_perms::{
    AdminOnly, CitizenScoped, PermissionRecord, PermissionRegistry, Result, Term,
};
use civic_ledger_store::MemoryStore;

/// Key of a service-access record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceAccessKey {
    pub citizen: CitizenId,
    pub service: ServiceType,
}

impl ServiceAccessKey {
    /// Create a new service-access key.
    pub fn new(citizen: CitizenId, service: ServiceType) -> Self {
        Self { citizen, service }
    }
}

impl CitizenScoped for ServiceAccessKey {
    fn citizen(&self) -> &CitizenId {
        &self.citizen
    }
}

/// Fields supplied when granting service access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTerms {
    pub level: AccessLevel,
    pub expiry: LedgerHeight,
}

/// A service-access grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccessRecord {
    pub term: Term,
    pub level: AccessLevel,
}

impl ServiceAccessRecord {
    /// Whether access is still flagged as granted.
    pub fn has_access(&self) -> bool {
        self.term.active
    }
}

impl PermissionRecord for ServiceAccessRecord {
    type Terms = AccessTerms;
    /// Minimum level the caller needs.
    type Requirement = AccessLevel;

    fn issue(terms: AccessTerms, ctx: &LedgerContext) -> Self {
        Self {
            term: Term::open(ctx.height, terms.expiry),
            level: terms.level,
        }
    }

    fn granted_at(&self) -> LedgerHeight {
        self.term.granted_at
    }

    fn is_valid(&self, now: LedgerHeight, required: &AccessLevel) -> bool {
        self.term.is_live(now) && self.level >= *required
    }

    fn revoke(&mut self, now: LedgerHeight) {
        self.term.collapse(now);
    }
}

/// Backing store of the service-access registry.
pub type ServiceAccessStore = MemoryStore<ServiceAccessKey, ServiceAccessRecord>;

/// Admin-only registry of service-access grants.
#[derive(Debug)]
pub struct ServiceAccessRegistry {
    inner: PermissionRegistry<ServiceAccessKey, ServiceAccessRecord, AdminOnly>,
}

impl ServiceAccessRegistry {
    /// Create an empty registry administered by `administrator`.
    pub fn new(administrator: Principal) -> Self {
        Self::from_store(administrator, ServiceAccessStore::new())
    }

    /// Create a registry over existing records.
    pub fn from_store(administrator: Principal, store: ServiceAccessStore) -> Self {
        Self {
            inner: PermissionRegistry::with_store(AdminOnly::new(administrator), store),
        }
    }

    /// Grant (or replace) access to `service` at `level` until `expiry`.
    pub fn grant_service_access(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        service: ServiceType,
        level: AccessLevel,
        expiry: LedgerHeight,
    ) -> Result<()> {
        let key = ServiceAccessKey::new(citizen.clone(), service);
        self.inner.grant(ctx, key, AccessTerms { level, expiry })
    }

    /// Revoke access. Revoking access that was never granted succeeds.
    pub fn revoke_service_access(
        &mut self,
        ctx: &LedgerContext,
        citizen: &CitizenId,
        service: ServiceType,
    ) -> Result<()> {
        let key = ServiceAccessKey::new(citizen.clone(), service);
        self.inner.revoke(ctx, &key)
    }

    /// Whether the citizen holds live access of at least `required` at `now`.
    pub fn has_service_access(
        &self,
        citizen: &CitizenId,
        service: ServiceType,
        required: AccessLevel,
        now: LedgerHeight,
    ) -> bool {
        let key = ServiceAccessKey::new(citizen.clone(), service);
        self.inner.is_valid(&key, now, &required)
    }

    /// The stored grant, valid or not.
    pub fn service_access(
        &self,
        citizen: &CitizenId,
        service: ServiceType,
    ) -> Option<&ServiceAccessRecord> {
        self.inner.get(&ServiceAccessKey::new(citizen.clone(), service))
    }

    /// The underlying generic registry.
    pub fn registry(
        &self,
    ) -> &PermissionRegistry<ServiceAccessKey, ServiceAccessRecord, AdminOnly> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_ledger_perms::PermsError;
    use proptest::prelude::*;

    fn admin() -> Principal {
        Principal::derive("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }

    fn citizen() -> CitizenId {
        CitizenId::new("CITIZEN123456789")
    }

    fn h(n: u64) -> LedgerHeight {
        LedgerHeight::new(n)
    }

    fn level(n: u32) -> AccessLevel {
        AccessLevel::new(n)
    }

    fn granted() -> ServiceAccessRegistry {
        let mut reg = ServiceAccessRegistry::new(admin());
        let ctx = LedgerContext::new(admin(), h(100));
        reg.grant_service_access(&ctx, &citizen(), ServiceType::TAX, level(5), h(1100))
            .unwrap();
        reg
    }

    #[test]
    fn test_grant_by_admin() {
        let reg = granted();
        assert!(reg.has_service_access(&citizen(), ServiceType::TAX, level(5), h(100)));

        let record = reg.service_access(&citizen(), ServiceType::TAX).unwrap();
        assert!(record.has_access());
        assert_eq!(record.level, level(5));
        assert_eq!(record.term.granted_at, h(100));
    }

    #[test]
    fn test_grant_by_non_admin() {
        let mut reg = ServiceAccessRegistry::new(admin());
        let non_admin = Principal::derive("ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
        let ctx = LedgerContext::new(non_admin, h(100));

        assert_eq!(
            reg.grant_service_access(&ctx, &citizen(), ServiceType::TAX, level(5), h(1100)),
            Err(PermsError::NotAuthorized)
        );
        assert!(!reg.has_service_access(&citizen(), ServiceType::TAX, level(5), h(100)));
    }

    #[test]
    fn test_access_level_requirements() {
        let reg = granted();

        assert!(reg.has_service_access(&citizen(), ServiceType::TAX, level(5), h(100)));
        assert!(reg.has_service_access(&citizen(), ServiceType::TAX, level(4), h(100)));
        assert!(!reg.has_service_access(&citizen(), ServiceType::TAX, level(6), h(100)));
    }

    #[test]
    fn test_expired_access() {
        let reg = granted();

        assert!(reg.has_service_access(&citizen(), ServiceType::TAX, level(5), h(1099)));
        assert!(!reg.has_service_access(&citizen(), ServiceType::TAX, level(5), h(1100)));
        assert!(!reg.has_service_access(&citizen(), ServiceType::TAX, level(0), h(1101)));
    }

    #[test]
    fn test_revoke_access() {
        let mut reg = granted();
        let ctx = LedgerContext::new(admin(), h(100));

        assert_eq!(reg.revoke_service_access(&ctx, &citizen(), ServiceType::TAX), Ok(()));
        assert!(!reg.has_service_access(&citizen(), ServiceType::TAX, level(0), h(100)));

        let record = reg.service_access(&citizen(), ServiceType::TAX).unwrap();
        assert!(!record.has_access());
        assert_eq!(record.term.expiry, h(100));
        assert_eq!(record.level, level(5));
    }

    #[test]
    fn test_services_are_independent() {
        let reg = granted();
        assert!(!reg.has_service_access(&citizen(), ServiceType::HEALTHCARE, level(0), h(100)));
    }

    proptest! {
        #[test]
        fn test_level_monotonicity(granted_level in 0u32..1000, required in 0u32..1000, at in 100u64..1100) {
            let mut reg = ServiceAccessRegistry::new(admin());
            let ctx = LedgerContext::new(admin(), h(100));
            reg.grant_service_access(
                &ctx,
                &citizen(),
                ServiceType::HEALTHCARE,
                level(granted_level),
                h(1100),
            )
            .unwrap();

            prop_assert_eq!(
                reg.has_service_access(&citizen(), ServiceType::HEALTHCARE, level(required), h(at)),
                required <= granted_level
            );
        }
    }
}
