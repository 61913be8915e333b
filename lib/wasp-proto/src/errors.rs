// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// Errors produced while decoding a tree or a frame.
///
/// Unless the variant is [`Error::Incomplete`], the connection should be
/// considered broken and closed.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Not enough bytes are available yet; wait for more and retry.
    Incomplete,
    /// A list-size or token byte did not match any known encoding.
    Malformed(&'static str),
    /// The trailing MAC on an encrypted frame did not verify.
    Mac(wasp_crypto::Error),
    /// An unencrypted frame arrived after the session installed ciphers.
    UnexpectedPlaintext,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Incomplete => write!(f, "not enough bytes buffered yet"),
            Error::Malformed(what) => write!(f, "malformed tree: {what}"),
            Error::Mac(e) => write!(f, "frame mac error: {e}"),
            Error::UnexpectedPlaintext => {
                write!(f, "received an unencrypted frame after ciphers were installed")
            }
        }
    }
}

impl From<wasp_crypto::Error> for Error {
    fn from(e: wasp_crypto::Error) -> Self {
        Error::Mac(e)
    }
}
