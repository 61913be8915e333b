// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Low level cryptographic building blocks for the protocol engine:
//! a reusable byte buffer, the RC4 stream-cipher pair with its MAC, and the
//! PBKDF2-based session key derivation. Nothing in this crate understands
//! the wire format; see `wasp-proto` for that.
use std::fmt;

mod buffer;
mod cipher;
mod kdf;

pub use buffer::RingBuffer;
pub use cipher::{DirectionalCipher, StreamCipherPair};
pub use kdf::{decode_password, derive_keys};

/// Errors produced by the cryptographic layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The HMAC tag attached to an inbound frame did not match.
    MacMismatch,
    /// The stored password did not base64-decode to a 20-byte secret.
    BadPassword,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MacMismatch => write!(f, "mac verification failed"),
            Error::BadPassword => write!(f, "stored password is not a valid 20-byte secret"),
        }
    }
}
