// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Configuration required to create a [`crate::Connection`] instance.

/// The information needed to authenticate and identify a session.
///
/// [`Connection`]: crate::Connection
pub struct Config {
    /// The phone number used as the login identity, digits only.
    pub phone: String,

    /// The stored password secret, base64-encoded, exactly as persisted by
    /// the host's credential store.
    pub password_b64: String,

    /// Additional initialization parameters that can have sane defaults.
    pub params: InitParams,
}

/// Optional initialization parameters, required when establishing a
/// session with the server.
pub struct InitParams {
    pub nickname: String,
    pub server: String,
    pub group_server: String,
}

impl Default for InitParams {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            server: "s.whatsapp.net".to_string(),
            group_server: "g.us".to_string(),
        }
    }
}
