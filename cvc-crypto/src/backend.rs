// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use cvc_types::{CvcError, CvcResult, KeySize, PrivateKey, PublicKey, Signature};

/// The pluggable elliptic-curve signature primitive, `spec.md` §4.2/§6.
///
/// This is intentionally a collaborator boundary, not core logic: `spec.md`
/// §1 explicitly places "the underlying signature primitive (a deterministic
/// EC scheme over STB-standard curves)" out of scope for the engine itself.
/// Mirrors the `CryptoOps` trait bound threaded through
/// `cryptography-x509-verification::policy::Policy<'a, B: CryptoOps>`.
pub trait SignatureBackend {
    /// Sign `hash` (already reduced from the body) with `priv_key`, using
    /// `hash_oid_der` and `randomness` as the scheme additionally requires.
    fn sign(
        &self,
        hash_oid_der: &[u8],
        hash: &[u8],
        priv_key: &PrivateKey,
        randomness: &[u8],
    ) -> CvcResult<Signature>;

    /// Verify `sig` over `hash` under `pub_key`.
    fn verify(
        &self,
        hash_oid_der: &[u8],
        hash: &[u8],
        sig: &Signature,
        pub_key: &PublicKey,
    ) -> CvcResult<()>;

    /// Deterministically derive the public key matching `priv_key`.
    fn calc_pubkey(&self, priv_key: &PrivateKey) -> CvcResult<PublicKey>;

    /// Check that `pub_key` is a member of the group for its declared size.
    fn val_pubkey(&self, size: KeySize, pub_key: &PublicKey) -> CvcResult<()>;

    /// Check that `pub_key` is consistent with `priv_key` under the curve.
    fn val_keypair(&self, priv_key: &PrivateKey, pub_key: &PublicKey) -> CvcResult<()> {
        if pub_key.size() != priv_key.size() {
            return Err(CvcError::BadKeypair("public/private key size mismatch"));
        }
        let derived = self.calc_pubkey(priv_key)?;
        if &derived != pub_key {
            return Err(CvcError::BadKeypair(
                "public key inconsistent with private key",
            ));
        }
        Ok(())
    }
}
