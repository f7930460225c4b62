// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

// OID arcs for STB 34.101.79 ("btok") and its companion standards, under the
// national OID arc 1.2.112.0.2.0.34.101.

/// `bign-pubkey`, the object identifier carried in a `CertificateBody`'s
/// `SubjectPublicKeyInfo`-equivalent SEQ[APPLICATION 73].
pub const BIGN_PUBKEY_OID: asn1::ObjectIdentifier =
    asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 45, 2, 1);

/// Curve identifiers, selected by private/public key length.
pub const BIGN_CURVE256_OID: asn1::ObjectIdentifier = asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 45, 3, 1);
pub const BIGN_CURVE384_OID: asn1::ObjectIdentifier = asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 45, 3, 2);
pub const BIGN_CURVE512_OID: asn1::ObjectIdentifier = asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 45, 3, 3);

/// belt-hash, 256-bit block-cipher-based hash (priv_len == 32).
pub const BELT_HASH_OID: asn1::ObjectIdentifier = asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 31, 81);

/// bash-hash at 192-bit security (priv_len == 48).
pub const BASH_HASH192_OID: asn1::ObjectIdentifier = asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 77, 12);

/// bash-hash at 256-bit security (priv_len == 64).
pub const BASH_HASH256_OID: asn1::ObjectIdentifier = asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 77, 13);

/// id-eIdAccess, the OID preceding the eID HAT octets.
pub const ID_EID_ACCESS_OID: asn1::ObjectIdentifier =
    asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 79, 6, 1);

/// id-eSignAccess, the OID preceding the e-signature HAT octets.
pub const ID_ESIGN_ACCESS_OID: asn1::ObjectIdentifier =
    asn1::oid!(1, 2, 112, 0, 2, 0, 34, 101, 79, 6, 2);
