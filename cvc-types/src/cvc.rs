// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use crate::date::CvcDate;
use crate::key::{KeySize, PublicKey, Signature};
use crate::name::CvcName;

/// The central record, `spec.md` §3. Optional HAT fields are exposed as
/// `Option` to callers; the "all-zero means absent" translation happens only
/// at the wire boundary in `cvc-codec` (`spec.md` §9 design notes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cvc {
    pub authority: CvcName,
    pub holder: CvcName,
    /// `None` until `wrap`/`issue` derives it from the signer's private key.
    pub pubkey: Option<PublicKey>,
    pub hat_eid: Option<[u8; 5]>,
    pub hat_esign: Option<[u8; 2]>,
    pub from: CvcDate,
    pub until: CvcDate,
    /// `None` until `wrap`/`issue` has produced a signature.
    pub sig: Option<Signature>,
}

impl Cvc {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authority: CvcName,
        holder: CvcName,
        pubkey: Option<PublicKey>,
        hat_eid: Option<[u8; 5]>,
        hat_esign: Option<[u8; 2]>,
        from: CvcDate,
        until: CvcDate,
    ) -> Self {
        Cvc {
            authority,
            holder,
            pubkey,
            hat_eid: hat_eid.and_then(hat_from_wire),
            hat_esign: hat_esign.and_then(hat_from_wire),
            from,
            until,
            sig: None,
        }
    }

    pub fn pubkey_size(&self) -> Option<KeySize> {
        self.pubkey.as_ref().map(PublicKey::size)
    }
}

/// Translate a raw wire HAT octet string to the `Option` the data model
/// exposes: all-zero means absent (`spec.md` §3 invariant 6).
pub fn hat_from_wire<const N: usize>(bytes: [u8; N]) -> Option<[u8; N]> {
    if bytes.iter().all(|&b| b == 0) {
        None
    } else {
        Some(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_hat_is_absent() {
        assert_eq!(hat_from_wire([0u8; 5]), None);
        assert_eq!(hat_from_wire([0, 0, 0, 0, 1]), Some([0, 0, 0, 0, 1]));
    }
}
