//! The execution context a host ledger hands to every registry call.

use serde::{Deserialize, Serialize};

use crate::principal::Principal;
use crate::types::LedgerHeight;

/// Who is calling, and at what height.
///
/// The registries never fabricate either value. Both come from the host
/// ledger's already-serialized execution of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerContext {
    /// The authenticated invoking principal.
    pub caller: Principal,

    /// The current ledger height.
    pub height: LedgerHeight,
}

impl LedgerContext {
    /// Create a new context.
    pub fn new(caller: Principal, height: LedgerHeight) -> Self {
        Self {
            caller,
            height,
        }
    }

    /// The same caller at a different height.
    pub fn at(self, height: LedgerHeight) -> Self {
        Self {
            caller: self.caller,
            height,
        }
    }

    /// The same height with a different caller.
    pub fn as_caller(self, caller: Principal) -> Self {
        Self {
            caller,
            height: self.height,
        }
    }
}
