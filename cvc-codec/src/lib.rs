// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Validators, BodyCodec, OuterCodec, and Issuer for the STB 34.101.79
//! ("btok") Card-Verifiable Certificate engine (`spec.md` §4.1, §4.3-§4.5).

pub mod body;
pub mod der;
pub mod issuer;
pub mod outer;
pub mod validators;

pub use body::{decode_body, encode_body, encoded_len as body_encoded_len, DecodedBody};
pub use issuer::issue;
pub use outer::{encoded_len as cert_encoded_len, unwrap, wrap};
pub use validators::{check, check2};
