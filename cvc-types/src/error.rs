// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

/// The error taxonomy for the CVC engine.
///
/// Every operation short-circuits on the first failing check; no variant is
/// recovered silently and there is no retry built into the engine itself
/// (`spec.md` §7).
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum CvcError {
    #[error("bad input: {0}")]
    BadInput(&'static str),

    #[error("bad name {field}: {reason}")]
    BadName {
        field: &'static str,
        reason: &'static str,
    },

    #[error("bad date {field}: {reason}")]
    BadDate {
        field: &'static str,
        reason: &'static str,
    },

    #[error("bad format at offset {offset}: {reason}")]
    BadFormat {
        offset: usize,
        reason: &'static str,
    },

    #[error("bad public key: {0}")]
    BadPubkey(&'static str),

    #[error("bad keypair: {0}")]
    BadKeypair(&'static str),

    #[error("signature verification failed")]
    BadSig,

    #[error("out of memory")]
    OutOfMemory,
}

pub type CvcResult<T> = Result<T, CvcError>;
