// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! `Issuer`: cross-checks a child CVC against a parent CVC and delegates to
//! `OuterCodec::wrap` (`spec.md` §4.5).

use crate::outer::{unwrap, wrap};
use crate::validators::check2;
use cvc_crypto::{CvcRng, HashBackend, SignatureAdapter, SignatureBackend};
use cvc_types::{CvcError, CvcResult, Cvc, PrivateKey};

/// `issue(child_cvc, parent_cert_bytes, parent_priv) -> child_cert_bytes`.
///
/// 1. Unwrap `parent_cert` with no verification key (self-trusted input,
///    `spec.md` §4.5 step 1).
/// 2. Validate the parent keypair: `parent_priv` must derive
///    `parent_cvc.pubkey` (step 2).
/// 3. `check2(child, parent)` (step 3).
/// 4. Delegate to `wrap(child, parent_priv)` (step 4).
pub fn issue<B: SignatureBackend, H: HashBackend, R: CvcRng>(
    child: &mut Cvc,
    parent_cert: &[u8],
    parent_priv: &PrivateKey,
    adapter: &mut SignatureAdapter<B, H, R>,
) -> CvcResult<Vec<u8>> {
    let parent = unwrap(parent_cert, None, adapter)?;
    tracing::debug!("issue: parent certificate self-decoded");

    let parent_pubkey = parent
        .pubkey
        .as_ref()
        .ok_or(CvcError::BadKeypair("parent certificate has no public key"))?;
    adapter.val_keypair(parent_priv, parent_pubkey)?;

    check2(child, &parent, &adapter.backend)?;
    tracing::debug!("issue: parent-child coupling validated, delegating to wrap");

    wrap(child, parent_priv, adapter)
}
