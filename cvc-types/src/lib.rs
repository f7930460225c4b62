// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

//! Data model, OIDs, and error taxonomy for the STB 34.101.79 ("btok")
//! Card-Verifiable Certificate engine.

pub mod cvc;
pub mod date;
pub mod error;
pub mod key;
pub mod name;
pub mod oid;

pub use cvc::Cvc;
pub use date::CvcDate;
pub use error::{CvcError, CvcResult};
pub use key::{KeySize, PrivateKey, PublicKey, Signature};
pub use name::CvcName;
