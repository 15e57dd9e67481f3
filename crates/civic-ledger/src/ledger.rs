//! The ledger facade: three independent registries under one configuration.
//!
//! The registries never reference each other. `CivicLedger` only saves the
//! host from wiring the administrator and oracle three times, and gives it a
//! single snapshot of all state.

use serde::{Deserialize, Serialize};

use civic_ledger_core::Principal;
use civic_ledger_perms::DelegationOracle;
use civic_ledger_store::{MemoryStore, Snapshot, StateDigest, StoreError};

use crate::config::LedgerConfig;
use crate::credential::{CredentialKey, CredentialRecord, CredentialRegistry};
use crate::error::Result;
use crate::privacy::{PrivacyKey, PrivacyRecord, PrivacyRegistry};
use crate::service::{ServiceAccessKey, ServiceAccessRecord, ServiceAccessRegistry};

/// The credential, privacy, and service-access registries.
#[derive(Debug)]
pub struct CivicLedger<O> {
    /// Configuration.
    config: LedgerConfig,
    credentials: CredentialRegistry,
    privacy: PrivacyRegistry<O>,
    services: ServiceAccessRegistry,
}

impl<O: DelegationOracle> CivicLedger<O> {
    /// Create empty registries administered by `config.administrator`.
    ///
    /// `oracle` answers delegation questions for the privacy registry only.
    pub fn new(config: LedgerConfig, oracle: O) -> Self {
        let admin = config.administrator;
        Self {
            credentials: CredentialRegistry::new(admin),
            privacy: PrivacyRegistry::new(admin, oracle),
            services: ServiceAccessRegistry::new(admin),
            config,
        }
    }

    /// Rebuild registries from a snapshot.
    ///
    /// Fails with [`StoreError::NonCanonical`] if any registry's entries are
    /// out of key order or repeat a key.
    pub fn restore(config: LedgerConfig, oracle: O, snapshot: LedgerSnapshot) -> Result<Self> {
        let admin = config.administrator;
        tracing::debug!(
            credentials = snapshot.credentials.len(),
            privacy = snapshot.privacy.len(),
            services = snapshot.services.len(),
            "restoring ledger state"
        );

        let credentials = MemoryStore::from_snapshot(snapshot.credentials)?;
        let privacy = MemoryStore::from_snapshot(snapshot.privacy)?;
        let services = MemoryStore::from_snapshot(snapshot.services)?;

        Ok(Self {
            credentials: CredentialRegistry::from_store(admin, credentials),
            privacy: PrivacyRegistry::from_store(admin, oracle, privacy),
            services: ServiceAccessRegistry::from_store(admin, services),
            config,
        })
    }

    /// The configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The administrator of all three registries.
    pub fn administrator(&self) -> &Principal {
        &self.config.administrator
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registries
    // ─────────────────────────────────────────────────────────────────────────

    /// The credential registry.
    pub fn credentials(&self) -> &CredentialRegistry {
        &self.credentials
    }

    /// The credential registry, for issuing and revoking.
    pub fn credentials_mut(&mut self) -> &mut CredentialRegistry {
        &mut self.credentials
    }

    /// The privacy registry.
    pub fn privacy(&self) -> &PrivacyRegistry<O> {
        &self.privacy
    }

    /// The privacy registry, for setting preferences.
    pub fn privacy_mut(&mut self) -> &mut PrivacyRegistry<O> {
        &mut self.privacy
    }

    /// The service-access registry.
    pub fn services(&self) -> &ServiceAccessRegistry {
        &self.services
    }

    /// The service-access registry, for granting and revoking.
    pub fn services_mut(&mut self) -> &mut ServiceAccessRegistry {
        &mut self.services
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshots
    // ─────────────────────────────────────────────────────────────────────────

    /// Capture every record of every registry.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            credentials: Snapshot::capture(self.credentials.registry().store()),
            privacy: Snapshot::capture(self.privacy.registry().store()),
            services: Snapshot::capture(self.services.registry().store()),
        }
    }
}

/// All registry state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub credentials: Snapshot<CredentialKey, CredentialRecord>,
    pub privacy: Snapshot<PrivacyKey, PrivacyRecord>,
    pub services: Snapshot<ServiceAccessKey, ServiceAccessRecord>,
}

impl LedgerSnapshot {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf)
            .map_err(|e| StoreError::Encoding(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot = ciborium::from_reader(bytes)
            .map_err(|e| StoreError::Decoding(e.to_string()))?;
        Ok(snapshot)
    }

    /// Blake3 digest of the CBOR encoding.
    pub fn digest(&self) -> Result<StateDigest> {
        Ok(StateDigest::hash(&self.to_bytes()?))
    }

    /// Total number of records across all registries.
    pub fn len(&self) -> usize {
        self.credentials.len() + self.privacy.len() + self.services.len()
    }

    /// Whether no registry holds any record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
