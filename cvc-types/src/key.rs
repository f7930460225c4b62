// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use crate::error::CvcError;
use zeroize::Zeroize;

/// The three STB bign curve sizes supported by `spec.md` §4.2's
/// `priv_len`/`pub_len` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    Bign256,
    Bign384,
    Bign512,
}

impl KeySize {
    pub fn from_priv_len(len: usize) -> Option<Self> {
        match len {
            32 => Some(KeySize::Bign256),
            48 => Some(KeySize::Bign384),
            64 => Some(KeySize::Bign512),
            _ => None,
        }
    }

    pub fn from_pub_len(len: usize) -> Option<Self> {
        match len {
            64 => Some(KeySize::Bign256),
            96 => Some(KeySize::Bign384),
            128 => Some(KeySize::Bign512),
            _ => None,
        }
    }

    pub fn priv_len(self) -> usize {
        match self {
            KeySize::Bign256 => 32,
            KeySize::Bign384 => 48,
            KeySize::Bign512 => 64,
        }
    }

    pub fn pub_len(self) -> usize {
        self.priv_len() * 2
    }

    /// `sig_len = priv_len + priv_len/2`, equivalently `pub_len - pub_len/4`
    /// (`spec.md` §3 invariant 5, §4.4 step 4).
    pub fn sig_len(self) -> usize {
        self.priv_len() + self.priv_len() / 2
    }

    pub fn pubkey_bit_len(self) -> usize {
        self.pub_len() * 8
    }
}

/// A subject or issuer private key. Zeroized on every drop path, including
/// `?`-propagated errors, so no manual cleanup label is needed
/// (`SPEC_FULL.md` §5).
#[derive(Clone)]
pub enum PrivateKey {
    Bign256([u8; 32]),
    Bign384([u8; 48]),
    Bign512([u8; 64]),
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        match self {
            PrivateKey::Bign256(b) => b.zeroize(),
            PrivateKey::Bign384(b) => b.zeroize(),
            PrivateKey::Bign512(b) => b.zeroize(),
        }
    }
}

impl PrivateKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CvcError> {
        match bytes.len() {
            32 => {
                let mut a = [0u8; 32];
                a.copy_from_slice(bytes);
                Ok(PrivateKey::Bign256(a))
            }
            48 => {
                let mut a = [0u8; 48];
                a.copy_from_slice(bytes);
                Ok(PrivateKey::Bign384(a))
            }
            64 => {
                let mut a = [0u8; 64];
                a.copy_from_slice(bytes);
                Ok(PrivateKey::Bign512(a))
            }
            _ => Err(CvcError::BadInput("priv_len must be 32, 48, or 64")),
        }
    }

    pub fn size(&self) -> KeySize {
        match self {
            PrivateKey::Bign256(_) => KeySize::Bign256,
            PrivateKey::Bign384(_) => KeySize::Bign384,
            PrivateKey::Bign512(_) => KeySize::Bign512,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PrivateKey::Bign256(b) => b.as_slice(),
            PrivateKey::Bign384(b) => b.as_slice(),
            PrivateKey::Bign512(b) => b.as_slice(),
        }
    }
}

/// A subject public key, `spec.md` §3: opaque octets of length 64/96/128.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Bign256([u8; 64]),
    Bign384([u8; 96]),
    Bign512([u8; 128]),
}

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CvcError> {
        match bytes.len() {
            64 => {
                let mut a = [0u8; 64];
                a.copy_from_slice(bytes);
                Ok(PublicKey::Bign256(a))
            }
            96 => {
                let mut a = [0u8; 96];
                a.copy_from_slice(bytes);
                Ok(PublicKey::Bign384(a))
            }
            128 => {
                let mut a = [0u8; 128];
                a.copy_from_slice(bytes);
                Ok(PublicKey::Bign512(a))
            }
            _ => Err(CvcError::BadPubkey("pubkey_len must be 64, 96, or 128")),
        }
    }

    pub fn size(&self) -> KeySize {
        match self {
            PublicKey::Bign256(_) => KeySize::Bign256,
            PublicKey::Bign384(_) => KeySize::Bign384,
            PublicKey::Bign512(_) => KeySize::Bign512,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Bign256(b) => b.as_slice(),
            PublicKey::Bign384(b) => b.as_slice(),
            PublicKey::Bign512(b) => b.as_slice(),
        }
    }
}

/// A signature over an encoded `CertificateBody`, `spec.md` §3: 48/72/96
/// octets, `sig_len` uniquely determined by the signer's key length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Bign256(Box<[u8; 48]>),
    Bign384(Box<[u8; 72]>),
    Bign512(Box<[u8; 96]>),
}

impl Signature {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CvcError> {
        match bytes.len() {
            48 => {
                let mut a = [0u8; 48];
                a.copy_from_slice(bytes);
                Ok(Signature::Bign256(Box::new(a)))
            }
            72 => {
                let mut a = [0u8; 72];
                a.copy_from_slice(bytes);
                Ok(Signature::Bign384(Box::new(a)))
            }
            96 => {
                let mut a = [0u8; 96];
                a.copy_from_slice(bytes);
                Ok(Signature::Bign512(Box::new(a)))
            }
            _ => Err(CvcError::BadFormat {
                offset: 0,
                reason: "sig_len must be 48, 72, or 96",
            }),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Signature::Bign256(b) => b.as_slice(),
            Signature::Bign384(b) => b.as_slice(),
            Signature::Bign512(b) => b.as_slice(),
        }
    }

    pub fn size(&self) -> KeySize {
        match self {
            Signature::Bign256(_) => KeySize::Bign256,
            Signature::Bign384(_) => KeySize::Bign384,
            Signature::Bign512(_) => KeySize::Bign512,
        }
    }
}
