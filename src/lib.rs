// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! A Card-Verifiable Certificate (CVC) engine conforming to STB 34.101.79
//! ("btok"): DER encode/decode of `CertificateBody`/`CVCertificate` with
//! application-tagged constructed types, and the `wrap`/`unwrap`/`issue`
//! operations built on top of it.
//!
//! The public surface is [`CvcEngine`], a small configuration struct
//! bundling the pluggable [`SignatureBackend`]/[`HashBackend`]/[`CvcRng`]
//! collaborators with the `check`/`check2`/`wrap`/`unwrap`/`issue`
//! operations (`spec.md` §6, `SPEC_FULL.md` §6's "Configuration" section).
//! Everything else — the data model, the error taxonomy, and the codec
//! internals — lives in the `cvc-types` and `cvc-codec` crates this one
//! re-exports from.

mod engine;

pub use cvc_codec::{body_encoded_len, cert_encoded_len};
pub use cvc_crypto::{CvcRng, HashBackend, NoRng, SignatureAdapter, SignatureBackend};
pub use cvc_types::{
    Cvc, CvcDate, CvcError, CvcName, CvcResult, KeySize, PrivateKey, PublicKey, Signature,
};
pub use engine::CvcEngine;

/// The crate's own version, for diagnostic logging (`tracing::info!(version
/// = %ENGINE_VERSION, ...)`), read once and cached like
/// `pkcs7.rs`'s `OIDS_TO_MIC_NAME` static `Lazy` table.
pub static ENGINE_VERSION: once_cell::sync::Lazy<&'static str> =
    once_cell::sync::Lazy::new(|| env!("CARGO_PKG_VERSION"));

/// The bign curve OID selected for `size`, re-exposed so callers can report
/// it (e.g. in diagnostics) without reaching into `cvc-crypto` directly.
pub fn curve_oid(size: KeySize) -> asn1::ObjectIdentifier {
    cvc_crypto::hash::curve_oid(size)
}
