//! Authorization predicates.
//!
//! A registry asks its [`Authority`] whether a caller may mutate a key. Two
//! authorities exist: [`AdminOnly`] and [`AdminOrDelegate`], the latter
//! consulting an external [`DelegationOracle`] for the citizen behind the key.

use civic_ledger_core::{CitizenId, Principal};

/// Decides whether a caller may mutate a given key.
pub trait Authority<K> {
    /// Check `caller` against `key`.
    fn permits(&self, caller: &Principal, key: &K) -> bool;
}

/// Keys that belong to a single citizen.
pub trait CitizenScoped {
    /// The citizen this key is about.
    fn citizen(&self) -> &CitizenId;
}

/// External identity collaborator that knows who may act for a citizen.
///
/// The registries never resolve identities themselves; they only ask.
pub trait DelegationOracle {
    /// Whether `caller` is the authorized representative of `citizen`.
    fn is_authorized_representative(&self, caller: &Principal, citizen: &CitizenId) -> bool;
}

impl<F> DelegationOracle for F
where
    F: Fn(&Principal, &CitizenId) -> bool,
{
    fn is_authorized_representative(&self, caller: &Principal, citizen: &CitizenId) -> bool {
        self(caller, citizen)
    }
}

/// An oracle that recognizes no representatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelegation;

impl DelegationOracle for NoDelegation {
    fn is_authorized_representative(&self, _caller: &Principal, _citizen: &CitizenId) -> bool {
        false
    }
}

/// Only the administrator may mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOnly {
    administrator: Principal,
}

impl AdminOnly {
    /// Create an admin-only authority.
    pub fn new(administrator: Principal) -> Self {
        Self { administrator }
    }
}

impl<K> Authority<K> for AdminOnly {
    fn permits(&self, caller: &Principal, _key: &K) -> bool {
        *caller == self.administrator
    }
}

/// The administrator, or the citizen's authorized representative, may mutate.
#[derive(Debug, Clone)]
pub struct AdminOrDelegate<O> {
    administrator: Principal,
    oracle: O,
}

impl<O: DelegationOracle> AdminOrDelegate<O> {
    /// Create an authority that also accepts representatives known to `oracle`.
    pub fn new(administrator: Principal, oracle: O) -> Self {
        Self {
            administrator,
            oracle,
        }
    }

    /// The delegation oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl<K: CitizenScoped, O: DelegationOracle> Authority<K> for AdminOrDelegate<O> {
    fn permits(&self, caller: &Principal, key: &K) -> bool {
        // Administrator short-circuits; the oracle is only consulted for others.
        *caller == self.administrator
            || self.oracle.is_authorized_representative(caller, key.citizen())
    }
}
