//! Strong type definitions for the Civic Ledger.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A ledger height: the only clock the registries know about.
///
/// Heights never retreat. Expiry is always compared against the height at
/// the time of the read.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LedgerHeight(pub u64);

impl LedgerHeight {
    /// The genesis height.
    pub const ZERO: Self = Self(0);

    /// Create a new height.
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Get the raw value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The height `blocks` after this one. Saturates at `u64::MAX`.
    pub const fn advance(self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl fmt::Debug for LedgerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LedgerHeight({})", self.0)
    }
}

impl fmt::Display for LedgerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LedgerHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

/// Identifier of a citizen in the platform's identity graph.
///
/// Resolution of this identifier is done elsewhere; here it is only a key
/// component. Any string is accepted, the empty one included.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitizenId(String);

impl CitizenId {
    /// Create a citizen identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CitizenId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Debug for CitizenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CitizenId({})", self.0)
    }
}

impl fmt::Display for CitizenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CitizenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

macro_rules! discriminant {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create from the raw discriminant.
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the raw discriminant.
            pub const fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

discriminant!(
    /// Kind of credential issued to a citizen.
    CredentialType
);

discriminant!(
    /// Government service a citizen can be granted access to.
    ServiceType
);

discriminant!(
    /// A field of citizen data covered by a sharing preference.
    DataField
);

discriminant!(
    /// A consuming agency that data may be shared with.
    AgencyId
);

discriminant!(
    /// Magnitude of a service grant. A grant satisfies every level up to its own.
    AccessLevel
);

impl CredentialType {
    /// National identity credential.
    pub const ID: Self = Self(1);
    /// Driver license.
    pub const DRIVER_LICENSE: Self = Self(2);
}

impl ServiceType {
    pub const TAX: Self = Self(1);
    pub const HEALTHCARE: Self = Self(2);
}

impl DataField {
    pub const NAME: Self = Self(1);
    pub const ADDRESS: Self = Self(2);
}

impl AgencyId {
    pub const TAX: Self = Self(1);
    pub const HEALTHCARE: Self = Self(2);
}
