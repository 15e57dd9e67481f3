//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::{BTreeMap, BTreeSet};

use civic_ledger::{CivicLedger, LedgerConfig};
use civic_ledger_core::{CitizenId, LedgerContext, LedgerHeight, Principal};
use civic_ledger_perms::DelegationOracle;

/// Host address of the administrator in the reference scenarios.
pub const ADMIN_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Host address authorized to act for [`CITIZEN`].
pub const REPRESENTATIVE_ADDRESS: &str = "ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Host address with no standing at all.
pub const OUTSIDER_ADDRESS: &str = "ST3PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// The citizen used by the reference scenarios.
pub const CITIZEN: &str = "CITIZEN123456789";

/// Height every fixture starts at.
pub const START_HEIGHT: LedgerHeight = LedgerHeight::new(100);

/// An in-memory table of which principals may act for which citizens.
#[derive(Debug, Clone, Default)]
pub struct RepresentativeTable {
    entries: BTreeMap<CitizenId, BTreeSet<Principal>>,
}

impl RepresentativeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `representative` act for `citizen`.
    pub fn authorize(&mut self, citizen: CitizenId, representative: Principal) {
        self.entries.entry(citizen).or_default().insert(representative);
    }

    /// Withdraw `representative`'s standing for `citizen`.
    pub fn deauthorize(&mut self, citizen: &CitizenId, representative: &Principal) {
        if let Some(set) = self.entries.get_mut(citizen) {
            set.remove(representative);
            if set.is_empty() {
                self.entries.remove(citizen);
            }
        }
    }
}

impl DelegationOracle for RepresentativeTable {
    fn is_authorized_representative(&self, caller: &Principal, citizen: &CitizenId) -> bool {
        self.entries
            .get(citizen)
            .is_some_and(|set| set.contains(caller))
    }
}

/// A ledger with a known cast of principals and a forward-only height.
pub struct TestFixture {
    pub admin: Principal,
    pub representative: Principal,
    pub outsider: Principal,
    pub citizen: CitizenId,
    pub ledger: CivicLedger<RepresentativeTable>,
    height: LedgerHeight,
}

impl TestFixture {
    /// Create the reference fixture: fixed addresses, height 100.
    pub fn new() -> Self {
        Self::with_admin(Principal::derive(ADMIN_ADDRESS))
    }

    /// Create a fixture administered by a random principal.
    pub fn random() -> Self {
        Self::with_admin(random_principal())
    }

    /// Create a fixture administered by `admin`.
    pub fn with_admin(admin: Principal) -> Self {
        let representative = Principal::derive(REPRESENTATIVE_ADDRESS);
        let citizen = CitizenId::new(CITIZEN);

        let mut table = RepresentativeTable::new();
        table.authorize(citizen.clone(), representative);

        Self {
            admin,
            representative,
            outsider: Principal::derive(OUTSIDER_ADDRESS),
            citizen,
            ledger: CivicLedger::new(LedgerConfig::new(admin), table),
            height: START_HEIGHT,
        }
    }

    /// The current height.
    pub fn height(&self) -> LedgerHeight {
        self.height
    }

    /// Move the height forward by `blocks`.
    pub fn advance(&mut self, blocks: u64) -> LedgerHeight {
        self.height = self.height.advance(blocks);
        self.height
    }

    /// Move the height to `height`. Never moves backwards.
    pub fn advance_to(&mut self, height: LedgerHeight) -> LedgerHeight {
        self.height = self.height.max(height);
        self.height
    }

    /// A call context for `caller` at the current height.
    pub fn ctx(&self, caller: Principal) -> LedgerContext {
        LedgerContext::new(caller, self.height)
    }

    /// A call context for the administrator.
    pub fn admin_ctx(&self) -> LedgerContext {
        self.ctx(self.admin)
    }

    /// A call context for the citizen's representative.
    pub fn representative_ctx(&self) -> LedgerContext {
        self.ctx(self.representative)
    }

    /// A call context for a principal with no standing.
    pub fn outsider_ctx(&self) -> LedgerContext {
        self.ctx(self.outsider)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A principal from fresh random bytes.
pub fn random_principal() -> Principal {
    Principal::from_bytes(rand::random())
}

/// `count` distinct, deterministic principals.
pub fn multi_party_principals(count: usize) -> Vec<Principal> {
    (0..count)
        .map(|i| Principal::derive(&format!("ST{i}PARTY")))
        .collect()
}
