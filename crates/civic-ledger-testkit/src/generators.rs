//! Proptest generators for property-based testing.

use proptest::prelude::*;

use civic_ledger_core::{
    AccessLevel, AgencyId, CitizenId, CredentialType, DataField, LedgerHeight, Principal,
    ServiceType,
};

/// Generate a random principal.
pub fn principal() -> impl Strategy<Value = Principal> {
    any::<[u8; 32]>().prop_map(Principal::from_bytes)
}

/// Generate a principal from a host-style address.
pub fn address_principal() -> impl Strategy<Value = Principal> {
    "ST[0-9A-Z]{38}".prop_map(|address| Principal::derive(&address))
}

/// Generate a non-empty citizen identifier.
pub fn citizen_id() -> impl Strategy<Value = CitizenId> {
    "[A-Z0-9]{1,24}".prop_map(CitizenId::new)
}

/// Generate a height far enough from `u64::MAX` to add windows to.
pub fn ledger_height() -> impl Strategy<Value = LedgerHeight> {
    (0u64..=u64::MAX / 2).prop_map(LedgerHeight::new)
}

/// Generate an access level.
pub fn access_level() -> impl Strategy<Value = AccessLevel> {
    any::<u32>().prop_map(AccessLevel::new)
}

/// Generate a credential type, favoring the well-known ones.
pub fn credential_type() -> impl Strategy<Value = CredentialType> {
    prop_oneof![
        Just(CredentialType::ID),
        Just(CredentialType::DRIVER_LICENSE),
        any::<u32>().prop_map(CredentialType::new),
    ]
}

/// Generate a service type, favoring the well-known ones.
pub fn service_type() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        Just(ServiceType::TAX),
        Just(ServiceType::HEALTHCARE),
        any::<u32>().prop_map(ServiceType::new),
    ]
}

/// Generate a data field, favoring the well-known ones.
pub fn data_field() -> impl Strategy<Value = DataField> {
    prop_oneof![
        Just(DataField::NAME),
        Just(DataField::ADDRESS),
        any::<u32>().prop_map(DataField::new),
    ]
}

/// Generate an agency, favoring the well-known ones.
pub fn agency_id() -> impl Strategy<Value = AgencyId> {
    prop_oneof![
        Just(AgencyId::TAX),
        Just(AgencyId::HEALTHCARE),
        any::<u32>().prop_map(AgencyId::new),
    ]
}

/// One step of a single-key registry history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOp {
    /// Admin grant, expiring `window` blocks after the current height.
    Grant { window: u64 },
    /// Admin revoke.
    Revoke,
    /// Grant attempt by a non-admin.
    ForeignGrant { window: u64 },
    /// Revoke attempt by a non-admin.
    ForeignRevoke,
    /// Move the height forward.
    Advance(u64),
}

/// Generate a single operation.
pub fn registry_op() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        3 => (0u64..500).prop_map(|window| RegistryOp::Grant { window }),
        2 => Just(RegistryOp::Revoke),
        1 => (0u64..500).prop_map(|window| RegistryOp::ForeignGrant { window }),
        1 => Just(RegistryOp::ForeignRevoke),
        3 => (0u64..300).prop_map(RegistryOp::Advance),
    ]
}

/// Generate a history of up to `max_len` operations.
pub fn registry_ops(max_len: usize) -> impl Strategy<Value = Vec<RegistryOp>> {
    prop::collection::vec(registry_op(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_citizen_ids_round_trip_parse(id in citizen_id()) {
            let parsed: CitizenId = id.as_str().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }

        #[test]
        fn test_principals_round_trip_hex(p in principal()) {
            prop_assert_eq!(Principal::from_hex(&p.to_hex()).unwrap(), p);
        }

        #[test]
        fn test_heights_leave_headroom(h in ledger_height()) {
            prop_assert_eq!(h.advance(1000).value(), h.value() + 1000);
        }
    }
}
