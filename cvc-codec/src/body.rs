// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! `BodyCodec`: DER encode/decode of the inner `CertificateBody`
//! (`spec.md` §4.3), byte-for-byte.
//!
//! ```text
//! SEQ[APPLICATION 78]
//!   SIZE[APPLICATION 41] 0
//!   PSTR[APPLICATION 2]   authority
//!   SEQ[APPLICATION 73]
//!     OID  bign-pubkey
//!     BITS pubkey
//!   PSTR[APPLICATION 32]  holder
//!   [ SEQ[APPLICATION 76] OID id-eIdAccess / OCT hat_eid ]     OPTIONAL
//!   OCT[APPLICATION 37]   from
//!   OCT[APPLICATION 36]   until
//!   [ SEQ[APPLICATION 5] SEQ[APPLICATION 19] OID id-eSignAccess / OCT hat_esign ]  OPTIONAL
//! ```

use once_cell::sync::Lazy;

use crate::der::{
    self, Cursor, UNIVERSAL_BIT_STRING, UNIVERSAL_OCTET_STRING,
};
use cvc_types::name::{NAME_MAX_LEN, NAME_MIN_LEN};
use cvc_types::{oid, CvcDate, CvcError, CvcName, CvcResult, Cvc, PublicKey};

const TAG_BODY: u8 = 78;
const TAG_VERSION: u8 = 41;
const TAG_AUTHORITY: u8 = 2;
const TAG_PUBKEY_SEQ: u8 = 73;
const TAG_HOLDER: u8 = 32;
const TAG_EID_SEQ: u8 = 76;
const TAG_FROM: u8 = 37;
const TAG_UNTIL: u8 = 36;
const TAG_CVEXT_SEQ: u8 = 5;
const TAG_ESIGN_SEQ: u8 = 19;

/// Precomputed canonical DER encodings of the schema's fixed OIDs. Computed
/// once per process, the way `pkcs7.rs`'s `OIDS_TO_MIC_NAME` static `Lazy`
/// table avoids rebuilding a lookup structure on every call.
static BIGN_PUBKEY_OID_DER: Lazy<Vec<u8>> =
    Lazy::new(|| asn1::write_single(&oid::BIGN_PUBKEY_OID).expect("static OID always encodes"));
static ID_EID_ACCESS_OID_DER: Lazy<Vec<u8>> =
    Lazy::new(|| asn1::write_single(&oid::ID_EID_ACCESS_OID).expect("static OID always encodes"));
static ID_ESIGN_ACCESS_OID_DER: Lazy<Vec<u8>> = Lazy::new(|| {
    asn1::write_single(&oid::ID_ESIGN_ACCESS_OID).expect("static OID always encodes")
});

/// The fields `decode_body` recovers before `Validators::check` has had a
/// chance to run. Names and dates are stored unchecked (only the DER
/// structure's length bounds have been enforced); `Cvc` field types still
/// guarantee that bound but not the full semantic check (`spec.md` §4.3:
/// "enforce the numeric constraints ... " — printability and calendar
/// validity are `Validators::check`'s job, invoked by the outer codec).
pub struct DecodedBody {
    pub cvc: Cvc,
}

/// Encodes `cvc`'s body per the schema above. `cvc.pubkey` must already be
/// set (`OuterCodec::wrap` fills it before calling this).
pub fn encode_body(cvc: &Cvc) -> CvcResult<Vec<u8>> {
    let pubkey = cvc
        .pubkey
        .as_ref()
        .ok_or(CvcError::BadInput("pubkey must be set before encoding body"))?;

    let mut body = Vec::new();

    der::write_tlv(TAG_VERSION, false, &der::encode_integer(0), &mut body);
    der::write_tlv(TAG_AUTHORITY, false, cvc.authority.as_bytes(), &mut body);

    let mut pubkey_seq = Vec::new();
    pubkey_seq.extend_from_slice(&BIGN_PUBKEY_OID_DER);
    let mut bitstring_content = Vec::with_capacity(1 + pubkey.as_bytes().len());
    bitstring_content.push(0u8); // unused-bits octet, always zero (spec.md §4.3)
    bitstring_content.extend_from_slice(pubkey.as_bytes());
    der::write_universal_tlv(UNIVERSAL_BIT_STRING, &bitstring_content, &mut pubkey_seq);
    der::write_tlv(TAG_PUBKEY_SEQ, true, &pubkey_seq, &mut body);

    der::write_tlv(TAG_HOLDER, false, cvc.holder.as_bytes(), &mut body);

    if let Some(hat_eid) = &cvc.hat_eid {
        tracing::trace!("encoding present eID HAT extension");
        let mut eid_seq = Vec::new();
        eid_seq.extend_from_slice(&ID_EID_ACCESS_OID_DER);
        der::write_universal_tlv(UNIVERSAL_OCTET_STRING, hat_eid, &mut eid_seq);
        der::write_tlv(TAG_EID_SEQ, true, &eid_seq, &mut body);
    }

    der::write_tlv(TAG_FROM, false, &cvc.from.digits(), &mut body);
    der::write_tlv(TAG_UNTIL, false, &cvc.until.digits(), &mut body);

    if let Some(hat_esign) = &cvc.hat_esign {
        tracing::trace!("encoding present e-signature HAT extension");
        let mut esign_inner = Vec::new();
        esign_inner.extend_from_slice(&ID_ESIGN_ACCESS_OID_DER);
        der::write_universal_tlv(UNIVERSAL_OCTET_STRING, hat_esign, &mut esign_inner);
        let mut esign_outer = Vec::new();
        der::write_tlv(TAG_ESIGN_SEQ, true, &esign_inner, &mut esign_outer);
        der::write_tlv(TAG_CVEXT_SEQ, true, &esign_outer, &mut body);
    }

    let mut out = Vec::new();
    der::write_tlv(TAG_BODY, true, &body, &mut out);
    Ok(out)
}

/// Convenience wrapper per `SPEC_FULL.md` §4.3's Rust-native replacement for
/// the C "null buffer = dry run" idiom: callers who only need a length can
/// call this instead of discarding a real buffer.
pub fn encoded_len(cvc: &Cvc) -> CvcResult<usize> {
    Ok(encode_body(cvc)?.len())
}

/// Decodes a `CertificateBody` from the start of `data`. Returns the decoded
/// (unchecked) `Cvc` and the number of bytes consumed, so `OuterCodec` can
/// locate the trailing signature TLV.
pub fn decode_body(data: &[u8]) -> CvcResult<(DecodedBody, usize)> {
    let mut outer = Cursor::new(data);
    let body_content = outer.expect_tlv(TAG_BODY, true)?;
    let consumed = outer.position();

    let mut c = Cursor::new(body_content);

    let version_bytes = c.expect_tlv(TAG_VERSION, false)?;
    let version = der::decode_integer(version_bytes, c.position())?;
    if version != 0 {
        return Err(CvcError::BadFormat {
            offset: c.position(),
            reason: "version field must be 0",
        });
    }

    let authority_bytes = c.expect_tlv(TAG_AUTHORITY, false)?;
    check_name_len(authority_bytes, c.position())?;

    let pubkey_seq = c.expect_tlv(TAG_PUBKEY_SEQ, true)?;
    let mut pc = Cursor::new(pubkey_seq);
    pc.expect_exact(&BIGN_PUBKEY_OID_DER).map_err(|_| CvcError::BadFormat {
        offset: c.position(),
        reason: "unexpected public-key algorithm OID",
    })?;
    let bitstring_content = pc.expect_universal_tlv(UNIVERSAL_BIT_STRING)?;
    if !pc.is_empty() {
        return Err(CvcError::BadFormat {
            offset: c.position(),
            reason: "trailing bytes inside public-key SEQ",
        });
    }
    let (&unused_bits, key_bytes) = bitstring_content
        .split_first()
        .ok_or(CvcError::BadFormat {
            offset: c.position(),
            reason: "empty BIT STRING content",
        })?;
    if unused_bits != 0 {
        return Err(CvcError::BadFormat {
            offset: c.position(),
            reason: "BIT STRING must have zero unused bits",
        });
    }
    let pubkey = PublicKey::from_bytes(key_bytes).map_err(|_| CvcError::BadFormat {
        offset: c.position(),
        reason: "public key bit length must be 512, 768, or 1024",
    })?;

    let holder_bytes = c.expect_tlv(TAG_HOLDER, false)?;
    check_name_len(holder_bytes, c.position())?;

    let mut hat_eid = None;
    if c.peek_tag_number() == Some(TAG_EID_SEQ) {
        tracing::trace!("decoding present eID HAT extension");
        let eid_seq = c.expect_tlv(TAG_EID_SEQ, true)?;
        let mut ec = Cursor::new(eid_seq);
        ec.expect_exact(&ID_EID_ACCESS_OID_DER).map_err(|_| CvcError::BadFormat {
            offset: c.position(),
            reason: "unexpected eID-access OID",
        })?;
        let hat_bytes = ec.expect_universal_tlv(UNIVERSAL_OCTET_STRING)?;
        if hat_bytes.len() != 5 || !ec.is_empty() {
            return Err(CvcError::BadFormat {
                offset: c.position(),
                reason: "eID HAT must be exactly 5 octets",
            });
        }
        let mut arr = [0u8; 5];
        arr.copy_from_slice(hat_bytes);
        hat_eid = Some(arr);
    }

    let from_bytes = c.expect_tlv(TAG_FROM, false)?;
    let from_digits = fixed_len::<6>(from_bytes, c.position(), "from must be exactly 6 octets")?;
    let until_bytes = c.expect_tlv(TAG_UNTIL, false)?;
    let until_digits = fixed_len::<6>(until_bytes, c.position(), "until must be exactly 6 octets")?;

    let mut hat_esign = None;
    if c.peek_tag_number() == Some(TAG_CVEXT_SEQ) {
        tracing::trace!("decoding present e-signature HAT extension");
        let cvext_seq = c.expect_tlv(TAG_CVEXT_SEQ, true)?;
        let mut cc = Cursor::new(cvext_seq);
        let esign_seq = cc.expect_tlv(TAG_ESIGN_SEQ, true)?;
        if !cc.is_empty() {
            return Err(CvcError::BadFormat {
                offset: c.position(),
                reason: "trailing bytes inside CVExt SEQ",
            });
        }
        let mut ec = Cursor::new(esign_seq);
        ec.expect_exact(&ID_ESIGN_ACCESS_OID_DER).map_err(|_| CvcError::BadFormat {
            offset: c.position(),
            reason: "unexpected eSign-access OID",
        })?;
        let hat_bytes = ec.expect_universal_tlv(UNIVERSAL_OCTET_STRING)?;
        if hat_bytes.len() != 2 || !ec.is_empty() {
            return Err(CvcError::BadFormat {
                offset: c.position(),
                reason: "e-signature HAT must be exactly 2 octets",
            });
        }
        let mut arr = [0u8; 2];
        arr.copy_from_slice(hat_bytes);
        hat_esign = Some(arr);
    }

    if !c.is_empty() {
        return Err(CvcError::BadFormat {
            offset: c.position(),
            reason: "trailing bytes inside CertificateBody SEQ",
        });
    }

    let cvc = Cvc {
        authority: CvcName::from_wire(authority_bytes),
        holder: CvcName::from_wire(holder_bytes),
        pubkey: Some(pubkey),
        hat_eid,
        hat_esign,
        from: CvcDate::from_wire(from_digits),
        until: CvcDate::from_wire(until_digits),
        sig: None,
    };

    Ok((DecodedBody { cvc }, consumed))
}

fn check_name_len(bytes: &[u8], offset: usize) -> CvcResult<()> {
    if (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&bytes.len()) {
        Ok(())
    } else {
        Err(CvcError::BadFormat {
            offset,
            reason: "name must be 8..=12 octets",
        })
    }
}

fn fixed_len<const N: usize>(bytes: &[u8], offset: usize, reason: &'static str) -> CvcResult<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| CvcError::BadFormat { offset, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvc_types::{CvcDate, CvcName};

    fn sample_cvc(hat_eid: Option<[u8; 5]>, hat_esign: Option<[u8; 2]>) -> Cvc {
        Cvc::new(
            CvcName::new("authority", b"ISSUER0123").unwrap(),
            CvcName::new("holder", b"HOLDER0123").unwrap(),
            Some(PublicKey::from_bytes(&[7u8; 64]).unwrap()),
            hat_eid,
            hat_esign,
            CvcDate::new("from", [1, 9, 0, 1, 0, 1]).unwrap(),
            CvcDate::new("until", [2, 9, 1, 2, 3, 1]).unwrap(),
        )
    }

    #[test]
    fn round_trips_without_extensions() {
        let cvc = sample_cvc(None, None);
        let encoded = encode_body(&cvc).unwrap();
        let (decoded, consumed) = decode_body(&encoded).unwrap();
        assert_eq!(consumed, encoded.len());
        assert_eq!(decoded.cvc.authority, cvc.authority);
        assert_eq!(decoded.cvc.holder, cvc.holder);
        assert_eq!(decoded.cvc.pubkey, cvc.pubkey);
        assert_eq!(decoded.cvc.hat_eid, None);
        assert_eq!(decoded.cvc.hat_esign, None);
        assert_eq!(decoded.cvc.from, cvc.from);
        assert_eq!(decoded.cvc.until, cvc.until);
    }

    #[test]
    fn both_hats_present_round_trip_s4() {
        let cvc = sample_cvc(Some([1, 2, 3, 4, 5]), Some([0xAA, 0xBB]));
        let encoded = encode_body(&cvc).unwrap();
        let (decoded, _) = decode_body(&encoded).unwrap();
        assert_eq!(decoded.cvc.hat_eid, Some([1, 2, 3, 4, 5]));
        assert_eq!(decoded.cvc.hat_esign, Some([0xAA, 0xBB]));
    }

    #[test]
    fn dropping_an_extension_shrinks_the_encoding() {
        let with_esign = sample_cvc(None, Some([0xAA, 0xBB]));
        let without_esign = sample_cvc(None, None);
        let with_len = encoded_len(&with_esign).unwrap();
        let without_len = encoded_len(&without_esign).unwrap();
        assert!(with_len > without_len);
    }

    #[test]
    fn encoded_len_matches_a_real_encode() {
        let cvc = sample_cvc(Some([9, 9, 9, 9, 9]), None);
        assert_eq!(encoded_len(&cvc).unwrap(), encode_body(&cvc).unwrap().len());
    }

    #[test]
    fn rejects_non_zero_version() {
        let cvc = sample_cvc(None, None);
        let mut encoded = encode_body(&cvc).unwrap();
        // version content byte sits right after the body SEQ tag/length and
        // the version field's own tag/length (0x5F 0x29 0x01).
        let version_content_offset = encoded
            .windows(3)
            .position(|w| w == [0x5F, 0x29, 0x01])
            .unwrap()
            + 3;
        encoded[version_content_offset] = 0x01;
        assert!(matches!(decode_body(&encoded), Err(CvcError::BadFormat { .. })));
    }

    #[test]
    fn rejects_non_zero_unused_bits() {
        let cvc = sample_cvc(None, None);
        let mut encoded = encode_body(&cvc).unwrap();
        let bitstring_tag_offset = encoded.windows(1).position(|w| w == [0x03]).unwrap();
        // byte layout: [tag(0x03)][len][unused_bits][key...]
        encoded[bitstring_tag_offset + 2] = 0x01;
        assert!(matches!(decode_body(&encoded), Err(CvcError::BadFormat { .. })));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let cvc = sample_cvc(None, None);
        let encoded = encode_body(&cvc).unwrap();
        // Pull the body's inner content back out, append one junk byte, and
        // re-wrap it as a body SEQ with a correspondingly longer declared
        // length, so the junk byte sits inside the SEQ once every known
        // field has been consumed.
        let mut cursor = Cursor::new(&encoded);
        let content = cursor.expect_tlv(TAG_BODY, true).unwrap();
        let mut corrupted_content = content.to_vec();
        corrupted_content.push(0xFF);
        let mut corrupted = Vec::new();
        der::write_tlv(TAG_BODY, true, &corrupted_content, &mut corrupted);
        assert!(matches!(decode_body(&corrupted), Err(CvcError::BadFormat { .. })));
    }
}
