// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! `Validators`: name/date/public-key well-formedness and the issuer-subject
//! coupling check, `spec.md` §4.1.

use cvc_crypto::SignatureBackend;
use cvc_types::date::{check_date, leq};
use cvc_types::name::check_name;
use cvc_types::{Cvc, CvcError, CvcResult};

/// `check(cvc)`: conjunction of name, date, ordering, and public-key group
/// checks. Public-key group membership is delegated to `backend`, since the
/// underlying elliptic-curve group is a `SignatureAdapter` collaborator, not
/// something `Validators` computes itself (`spec.md` §4.1: "bubbles up
/// `BadPubkey` from the signature adapter").
pub fn check<B: SignatureBackend>(cvc: &Cvc, backend: &B) -> CvcResult<()> {
    if !check_name(cvc.authority.as_bytes()) {
        return Err(CvcError::BadName {
            field: "authority",
            reason: "must be 8..=12 printable-string octets",
        });
    }
    if !check_name(cvc.holder.as_bytes()) {
        return Err(CvcError::BadName {
            field: "holder",
            reason: "must be 8..=12 printable-string octets",
        });
    }
    if !check_date(&cvc.from.digits()) {
        return Err(CvcError::BadDate {
            field: "from",
            reason: "not a valid YYMMDD date in 2019..=2099",
        });
    }
    if !check_date(&cvc.until.digits()) {
        return Err(CvcError::BadDate {
            field: "until",
            reason: "not a valid YYMMDD date in 2019..=2099",
        });
    }
    if !leq(&cvc.from, &cvc.until) {
        return Err(CvcError::BadDate {
            field: "from",
            reason: "from must be <= until",
        });
    }

    let pubkey = cvc
        .pubkey
        .as_ref()
        .ok_or(CvcError::BadInput("pubkey must be set before check"))?;
    backend.val_pubkey(pubkey.size(), pubkey)?;

    Ok(())
}

/// `check2(child, parent)`: `check(child)` plus the parent-child coupling
/// (`spec.md` §4.1/§4.5): `child.authority == parent.holder`, and
/// `parent.from <= child.from <= parent.until`.
pub fn check2<B: SignatureBackend>(child: &Cvc, parent: &Cvc, backend: &B) -> CvcResult<()> {
    check(child, backend)?;

    if child.authority != parent.holder {
        return Err(CvcError::BadName {
            field: "authority",
            reason: "child authority must equal parent holder",
        });
    }
    if !leq(&parent.from, &child.from) || !leq(&child.from, &parent.until) {
        return Err(CvcError::BadDate {
            field: "from",
            reason: "child validity start must fall within the parent's validity interval",
        });
    }

    Ok(())
}
