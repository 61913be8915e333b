// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// Errors raised while driving the connection. Except where noted, these
/// move the session to `Closed`.
#[derive(Debug)]
pub enum Error {
    /// `<failure>` was received while waiting for auth to complete.
    Auth(String),
    /// A tree failed to decode, a MAC failed to verify, or a plaintext
    /// frame arrived after ciphers were installed.
    Stream(wasp_proto::Error),
    /// The stored password did not decode to a usable secret.
    Crypto(wasp_crypto::Error),
    /// An HTTPS upload failed (bad status or unparseable JSON). Not fatal to
    /// the session: the affected upload is simply dropped.
    Upload(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Auth(reason) => write!(f, "authentication failed: {reason}"),
            Error::Stream(e) => write!(f, "stream error: {e}"),
            Error::Crypto(e) => write!(f, "crypto error: {e}"),
            Error::Upload(reason) => write!(f, "upload failed: {reason}"),
        }
    }
}

impl From<wasp_proto::Error> for Error {
    fn from(e: wasp_proto::Error) -> Self {
        Error::Stream(e)
    }
}

impl From<wasp_crypto::Error> for Error {
    fn from(e: wasp_crypto::Error) -> Self {
        Error::Crypto(e)
    }
}
