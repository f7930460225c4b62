// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! `OuterCodec`: DER wrap/unwrap of the outer `CVCertificate`
//! (`spec.md` §4.4).
//!
//! ```text
//! SEQ[APPLICATION 33]
//!   <CertificateBody>
//!   OCT[APPLICATION 55]  sig
//! ```

use crate::body::{decode_body, encode_body, encoded_len as body_encoded_len};
use crate::der::{self, Cursor};
use cvc_crypto::{CvcRng, HashBackend, SignatureAdapter, SignatureBackend};
use cvc_types::{CvcError, CvcResult, Cvc, KeySize, PrivateKey, PublicKey, Signature};

const TAG_OUTER: u8 = 33;
const TAG_SIG: u8 = 55;

/// `wrap(cvc, priv) -> cert_bytes`, `spec.md` §4.4 steps 1-7.
///
/// Mutates `cvc` in place: fills `pubkey` (if it was `None`) by deriving it
/// from `priv` via `adapter`, and always sets `sig` to the fresh signature.
pub fn wrap<B: SignatureBackend, H: HashBackend, R: CvcRng>(
    cvc: &mut Cvc,
    priv_key: &PrivateKey,
    adapter: &mut SignatureAdapter<B, H, R>,
) -> CvcResult<Vec<u8>> {
    if cvc.pubkey.is_none() {
        tracing::debug!("wrap: deriving public key from private key, pubkey was unset");
        cvc.pubkey = Some(adapter.calc_pubkey(priv_key)?);
    }

    crate::validators::check(cvc, &adapter.backend)?;

    let body_bytes = encode_body(cvc)?;
    let sig = adapter.sign(&body_bytes, priv_key)?;
    cvc.sig = Some(sig.clone());

    let mut outer_content = body_bytes;
    der::write_tlv(TAG_SIG, false, sig.as_bytes(), &mut outer_content);

    let mut out = Vec::new();
    der::write_tlv(TAG_OUTER, true, &outer_content, &mut out);
    Ok(out)
}

/// Computes the length `wrap` would produce without mutating `cvc` or
/// invoking the signer a second time — the Rust-native replacement for the
/// "null buffer = dry run" idiom (`spec.md` §9, `SPEC_FULL.md` §4.3). The
/// signature length depends only on `priv_key`'s size, so this can be
/// computed from `priv_key` alone plus the body's own length.
pub fn encoded_len(cvc: &Cvc, priv_size: KeySize) -> CvcResult<usize> {
    let body_len = body_encoded_len(cvc)?;
    let sig_len = priv_size.sig_len();
    // tag + length + content, for both the signature TLV and the outer SEQ.
    let sig_tlv_len = tlv_overhead(sig_len) + sig_len;
    let inner_len = body_len + sig_tlv_len;
    Ok(tlv_overhead(inner_len) + inner_len)
}

/// TAG_OUTER (33) and TAG_SIG (55) both exceed 30, so both always take the
/// two-octet high-tag-number form; the length's own encoding length is
/// computed by running the real `der::encode_length` into a scratch buffer,
/// so this can never drift out of sync with what `write_tlv` actually emits.
fn tlv_overhead(content_len: usize) -> usize {
    let mut len_buf = Vec::new();
    der::encode_length(content_len, &mut len_buf);
    2 + len_buf.len()
}

/// `unwrap(cert_bytes, pub?) -> cvc`, `spec.md` §4.4 steps 1-7.
pub fn unwrap<B: SignatureBackend, H: HashBackend, R: CvcRng>(
    cert_bytes: &[u8],
    pub_key: Option<&PublicKey>,
    adapter: &SignatureAdapter<B, H, R>,
) -> CvcResult<Cvc> {
    let mut outer = Cursor::new(cert_bytes);
    let outer_content = outer.expect_tlv(TAG_OUTER, true)?;

    let (decoded, body_len) = decode_body(outer_content)?;
    let body_bytes = &outer_content[..body_len];
    let mut rest = Cursor::new(&outer_content[body_len..]);

    let sig_bytes = rest.expect_tlv(TAG_SIG, false)?;
    if !rest.is_empty() {
        return Err(CvcError::BadFormat {
            offset: body_len + rest.position(),
            reason: "trailing bytes inside outer CVCertificate SEQ",
        });
    }

    let expected_len = match pub_key {
        Some(pub_key) => Some(pub_key.size().sig_len()),
        None => None,
    };
    // `spec.md` §4.4 step 4 describes inferring `sig_len` by trial-decoding
    // 48/72/96; since DER carries an explicit length, the signature TLV's
    // actual content length already *is* that trial's outcome — so the
    // trial collapses to checking the decoded length against the known (or
    // candidate) set, rather than attempting each candidate in turn.
    match expected_len {
        Some(expected) if sig_bytes.len() != expected => {
            return Err(CvcError::BadFormat {
                offset: body_len,
                reason: "signature length does not match the supplied public key",
            });
        }
        None if ![48, 72, 96].contains(&sig_bytes.len()) => {
            return Err(CvcError::BadFormat {
                offset: body_len,
                reason: "signature length is not 48, 72, or 96",
            });
        }
        _ => {}
    }
    let sig_len = sig_bytes.len();
    let sig = Signature::from_bytes(sig_bytes)?;

    if let Some(pub_key) = pub_key {
        adapter.verify(body_bytes, &sig, pub_key).map_err(|_| CvcError::BadSig)?;
        tracing::debug!("unwrap: signature verified against supplied public key");
    } else {
        tracing::debug!(sig_len, "unwrap: signature length inferred by trial, not verified");
    }

    let mut cvc = decoded.cvc;
    cvc.sig = Some(sig);

    crate::validators::check(&cvc, &adapter.backend)?;

    Ok(cvc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvc_crypto::stub::{StubBackend, StubHash};
    use cvc_crypto::NoRng;
    use cvc_types::{CvcDate, CvcName};

    fn adapter() -> SignatureAdapter<StubBackend, StubHash, NoRng> {
        SignatureAdapter::new(StubBackend, StubHash, NoRng)
    }

    fn sample_cvc() -> Cvc {
        Cvc::new(
            CvcName::new("authority", b"ISSUER0123").unwrap(),
            CvcName::new("holder", b"HOLDER0123").unwrap(),
            None,
            Some([1, 2, 3, 4, 5]),
            None,
            CvcDate::new("from", [1, 9, 0, 1, 0, 1]).unwrap(),
            CvcDate::new("until", [2, 9, 1, 2, 3, 1]).unwrap(),
        )
    }

    #[test]
    fn round_trip_property_1() {
        let mut a = adapter();
        let priv_key = PrivateKey::from_bytes(&[11u8; 32]).unwrap();
        let mut cvc = sample_cvc();
        let cert = wrap(&mut cvc, &priv_key, &mut a).unwrap();

        let pub_key = a.calc_pubkey(&priv_key).unwrap();
        let recovered = unwrap(&cert, Some(&pub_key), &a).unwrap();

        assert_eq!(recovered.authority, cvc.authority);
        assert_eq!(recovered.holder, cvc.holder);
        assert_eq!(recovered.pubkey, cvc.pubkey);
        assert_eq!(recovered.hat_eid, cvc.hat_eid);
        assert_eq!(recovered.hat_esign, cvc.hat_esign);
        assert_eq!(recovered.from, cvc.from);
        assert_eq!(recovered.until, cvc.until);
        assert_eq!(recovered.sig, cvc.sig);
    }

    #[test]
    fn length_determinism_property_2() {
        let mut a = adapter();
        let priv_key = PrivateKey::from_bytes(&[5u8; 32]).unwrap();
        let mut cvc = sample_cvc();
        let predicted = encoded_len(&cvc, priv_key.size()).unwrap();
        let cert = wrap(&mut cvc, &priv_key, &mut a).unwrap();
        assert_eq!(predicted, cert.len());
    }

    #[test]
    fn sig_len_inference_property_3_and_s5() {
        for seed in [32usize, 48, 64] {
            let priv_bytes = vec![(seed as u8).wrapping_add(1); seed];
            let priv_key = PrivateKey::from_bytes(&priv_bytes).unwrap();
            let mut a = adapter();
            let mut cvc = sample_cvc();
            let cert = wrap(&mut cvc, &priv_key, &mut a).unwrap();

            let pub_key = a.calc_pubkey(&priv_key).unwrap();
            let by_key = unwrap(&cert, Some(&pub_key), &a).unwrap();
            let by_inference = unwrap(&cert, None, &a).unwrap();

            assert_eq!(by_key.sig, by_inference.sig);
            assert_eq!(by_key.sig.unwrap().size().sig_len(), priv_key.size().sig_len());
        }
    }

    #[test]
    fn cross_key_reject_s6() {
        let mut a = adapter();
        let priv_a = PrivateKey::from_bytes(&[1u8; 32]).unwrap();
        let priv_b = PrivateKey::from_bytes(&[2u8; 32]).unwrap();
        let mut cvc = sample_cvc();
        let cert = wrap(&mut cvc, &priv_a, &mut a).unwrap();

        let pub_b = a.calc_pubkey(&priv_b).unwrap();
        assert!(matches!(unwrap(&cert, Some(&pub_b), &a), Err(CvcError::BadSig)));

        let pub_a = a.calc_pubkey(&priv_a).unwrap();
        assert!(unwrap(&cert, Some(&pub_a), &a).is_ok());
    }

    #[test]
    fn mutating_any_byte_never_yields_ok() {
        let mut a = adapter();
        let priv_key = PrivateKey::from_bytes(&[9u8; 32]).unwrap();
        let mut cvc = sample_cvc();
        let cert = wrap(&mut cvc, &priv_key, &mut a).unwrap();
        let pub_key = a.calc_pubkey(&priv_key).unwrap();

        for i in 0..cert.len() {
            let mut mutated = cert.clone();
            mutated[i] ^= 0xFF;
            let result = unwrap(&mutated, Some(&pub_key), &a);
            assert!(
                matches!(
                    result,
                    Err(CvcError::BadFormat { .. })
                        | Err(CvcError::BadPubkey(_))
                        | Err(CvcError::BadSig)
                        | Err(CvcError::BadName { .. })
                        | Err(CvcError::BadDate { .. })
                ),
                "byte {i} mutation unexpectedly produced {result:?}"
            );
        }
    }

    #[test]
    fn huge_long_form_length_is_rejected_not_a_panic() {
        let mut a = adapter();
        // Craft the outer SEQ tag with a long-form length claiming
        // usize::MAX octets of content: a single XOR mutation of a real
        // cert can never reach this (every real length there is short-form),
        // so this exercises the decoder's overflow guard directly rather
        // than relying on `mutating_any_byte_never_yields_ok`'s coverage.
        let mut cert = vec![0x7F, 0x21, 0x88];
        cert.extend_from_slice(&[0xFF; 8]);
        assert!(matches!(
            unwrap(&cert, None, &a),
            Err(CvcError::BadFormat { .. })
        ));

        let pub_key = {
            let priv_key = PrivateKey::from_bytes(&[1u8; 32]).unwrap();
            a.calc_pubkey(&priv_key).unwrap()
        };
        assert!(matches!(
            unwrap(&cert, Some(&pub_key), &a),
            Err(CvcError::BadFormat { .. })
        ));
    }
}
