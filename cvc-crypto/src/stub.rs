// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! A deterministic, non-cryptographic stand-in for the real STB bign
//! signature scheme and its hash families.
//!
//! `spec.md` §9: "Process-wide RNG consulted opportunistically: ... in
//! tests, inject a deterministic stub." This module is that stub for the
//! signature/hash collaborators too: it lets the codec, validator, and
//! issuer logic in this workspace be exercised end-to-end without linking a
//! real bign/belt-hash/bash-hash implementation, which does not exist as a
//! published crate this repository can depend on. It is gated behind the
//! `test-util` feature and must never be enabled in a production build.

use crate::backend::SignatureBackend;
use crate::hash::HashBackend;
use cvc_types::{CvcError, CvcResult, KeySize, PrivateKey, PublicKey, Signature};

/// Round-trip test backend: the "public key" is simply the private key
/// bytes followed by their reverse, so `verify` can recover enough of the
/// "private" material from the public key to recompute the expected
/// signature. This has none of the one-wayness a real signature scheme
/// requires — it exists only to drive the DER codec and validation logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubBackend;

fn mix(parts: &[&[u8]], out_len: usize) -> Vec<u8> {
    let mut src = Vec::new();
    for part in parts {
        src.extend_from_slice(part);
    }
    if src.is_empty() {
        src.push(0);
    }
    (0..out_len)
        .map(|i| src[i % src.len()].wrapping_add(i as u8))
        .collect()
}

impl SignatureBackend for StubBackend {
    fn sign(
        &self,
        hash_oid_der: &[u8],
        hash: &[u8],
        priv_key: &PrivateKey,
        randomness: &[u8],
    ) -> CvcResult<Signature> {
        let size = priv_key.size();
        let bytes = mix(
            &[hash_oid_der, hash, priv_key.as_bytes(), randomness],
            size.sig_len(),
        );
        Signature::from_bytes(&bytes)
    }

    fn verify(
        &self,
        hash_oid_der: &[u8],
        hash: &[u8],
        sig: &Signature,
        pub_key: &PublicKey,
    ) -> CvcResult<()> {
        let size = pub_key.size();
        let priv_equiv = &pub_key.as_bytes()[..size.priv_len()];
        let expected = mix(&[hash_oid_der, hash, priv_equiv, &[]], size.sig_len());
        if expected == sig.as_bytes() {
            Ok(())
        } else {
            Err(CvcError::BadSig)
        }
    }

    fn calc_pubkey(&self, priv_key: &PrivateKey) -> CvcResult<PublicKey> {
        let mut bytes = priv_key.as_bytes().to_vec();
        let mut rev = priv_key.as_bytes().to_vec();
        rev.reverse();
        bytes.extend_from_slice(&rev);
        PublicKey::from_bytes(&bytes)
    }

    fn val_pubkey(&self, size: KeySize, pub_key: &PublicKey) -> CvcResult<()> {
        if pub_key.size() != size {
            return Err(CvcError::BadPubkey("public key size does not match curve"));
        }
        let bytes = pub_key.as_bytes();
        if bytes.iter().all(|&b| b == 0) {
            return Err(CvcError::BadPubkey("public key is all-zero"));
        }
        let (head, tail) = bytes.split_at(size.priv_len());
        let mut expected_tail = head.to_vec();
        expected_tail.reverse();
        if tail != expected_tail.as_slice() {
            return Err(CvcError::BadPubkey("public key fails group membership"));
        }
        Ok(())
    }
}

/// Fixed-width, non-cryptographic digest used only by [`StubBackend`]-based
/// tests; the hash's actual algorithm does not matter to the codec logic
/// under test, only that it is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubHash;

impl HashBackend for StubHash {
    fn hash(&self, _size: KeySize, data: &[u8]) -> Vec<u8> {
        const OUT_LEN: usize = 32;
        let mut state: u64 = 0xcbf29ce484222325;
        for &byte in data {
            state ^= u64::from(byte);
            state = state.wrapping_mul(0x100000001b3);
        }
        let mut out = Vec::with_capacity(OUT_LEN);
        while out.len() < OUT_LEN {
            state = state.wrapping_mul(0x100000001b3).wrapping_add(1);
            out.push((state & 0xff) as u8);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::SignatureAdapter;
    use crate::rng::NoRng;

    #[test]
    fn sign_then_verify_round_trips() {
        let priv_key = PrivateKey::from_bytes(&[7u8; 32]).unwrap();
        let mut adapter = SignatureAdapter::new(StubBackend, StubHash, NoRng);
        let pub_key = adapter.calc_pubkey(&priv_key).unwrap();
        let sig = adapter.sign(b"hello body", &priv_key).unwrap();
        adapter.verify(b"hello body", &sig, &pub_key).unwrap();
    }

    #[test]
    fn cross_key_rejects() {
        let priv_a = PrivateKey::from_bytes(&[7u8; 32]).unwrap();
        let priv_b = PrivateKey::from_bytes(&[9u8; 32]).unwrap();
        let mut adapter = SignatureAdapter::new(StubBackend, StubHash, NoRng);
        let pub_b = adapter.calc_pubkey(&priv_b).unwrap();
        let sig = adapter.sign(b"body", &priv_a).unwrap();
        assert!(adapter.verify(b"body", &sig, &pub_b).is_err());
    }
}
