// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use cvc_types::{oid, CvcResult, KeySize};

/// The hash family selected by key length, `spec.md` §4.2 table:
/// belt-hash (256-bit) for `Bign256`, the 192/256-bit sponge hash for the
/// larger two sizes.
pub trait HashBackend {
    /// Digest `data` with the hash selected for `size`.
    fn hash(&self, size: KeySize, data: &[u8]) -> Vec<u8>;
}

/// DER-encode the hash algorithm's OID for the given key size.
///
/// `spec.md` §4.2 step 3: "DER-encode the hash-OID (expected length 11
/// octets)". The length follows from the OID arcs themselves; this function
/// does not hardcode it; and doesn't need to invoke any real hash primitive.
pub fn hash_oid_der(size: KeySize) -> CvcResult<Vec<u8>> {
    let oid = match size {
        KeySize::Bign256 => oid::BELT_HASH_OID,
        KeySize::Bign384 => oid::BASH_HASH192_OID,
        KeySize::Bign512 => oid::BASH_HASH256_OID,
    };
    asn1::write_single(&oid).map_err(|_| cvc_types::CvcError::OutOfMemory)
}

pub fn curve_oid(size: KeySize) -> asn1::ObjectIdentifier {
    match size {
        KeySize::Bign256 => oid::BIGN_CURVE256_OID,
        KeySize::Bign384 => oid::BIGN_CURVE384_OID,
        KeySize::Bign512 => oid::BIGN_CURVE512_OID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_oid_der_round_trips() {
        for size in [KeySize::Bign256, KeySize::Bign384, KeySize::Bign512] {
            let der = hash_oid_der(size).unwrap();
            let parsed = asn1::parse_single::<asn1::ObjectIdentifier>(&der).unwrap();
            assert_eq!(parsed, curve_oid_hash(size));
        }
    }

    fn curve_oid_hash(size: KeySize) -> asn1::ObjectIdentifier {
        match size {
            KeySize::Bign256 => oid::BELT_HASH_OID,
            KeySize::Bign384 => oid::BASH_HASH192_OID,
            KeySize::Bign512 => oid::BASH_HASH256_OID,
        }
    }
}
