// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use crate::backend::SignatureBackend;
use crate::hash::{hash_oid_der, HashBackend};
use crate::rng::CvcRng;
use cvc_types::{CvcResult, KeySize, PrivateKey, PublicKey, Signature};

/// Drives the external signature and hash collaborators from a single
/// integer — the private/public key length (`spec.md` §4.2).
pub struct SignatureAdapter<B, H, R> {
    pub backend: B,
    pub hash: H,
    pub rng: R,
}

impl<B: SignatureBackend, H: HashBackend, R: CvcRng> SignatureAdapter<B, H, R> {
    pub fn new(backend: B, hash: H, rng: R) -> Self {
        SignatureAdapter { backend, hash, rng }
    }

    /// `sign(body, priv)`: load curve by length, hash the body, DER-encode
    /// the hash OID, draw randomness if the RNG is ready (else empty, for
    /// the scheme's deterministic path), then call the external signer.
    pub fn sign(&mut self, body: &[u8], priv_key: &PrivateKey) -> CvcResult<Signature> {
        let size = priv_key.size();
        let digest = self.hash.hash(size, body);
        let oid_der = hash_oid_der(size)?;

        let mut randomness = vec![0u8; size.priv_len()];
        if self.rng.is_initialized() {
            self.rng.fill(&mut randomness);
        } else {
            randomness.clear();
            tracing::debug!(?size, "no initialized RNG, signing deterministically");
        }

        self.backend.sign(&oid_der, &digest, priv_key, &randomness)
    }

    /// `verify(body, sig, pub)`: mirror of `sign`. Any failure surfaces as
    /// `BadSig` — the backend is responsible for raising it.
    pub fn verify(&self, body: &[u8], sig: &Signature, pub_key: &PublicKey) -> CvcResult<()> {
        let size = pub_key.size();
        self.backend.val_pubkey(size, pub_key)?;
        let digest = self.hash.hash(size, body);
        let oid_der = hash_oid_der(size)?;
        self.backend.verify(&oid_der, &digest, sig, pub_key)
    }

    pub fn calc_pubkey(&self, priv_key: &PrivateKey) -> CvcResult<PublicKey> {
        self.backend.calc_pubkey(priv_key)
    }

    pub fn val_keypair(&self, priv_key: &PrivateKey, pub_key: &PublicKey) -> CvcResult<()> {
        self.backend.val_keypair(priv_key, pub_key)
    }

    pub fn val_pubkey(&self, size: KeySize, pub_key: &PublicKey) -> CvcResult<()> {
        self.backend.val_pubkey(size, pub_key)
    }
}
