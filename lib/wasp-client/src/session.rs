// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Session state: `None → WaitingChallenge → WaitingAuthOK → Connected →
//! Closed`, plus the per-session counters and cached account info.
use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    None,
    WaitingChallenge,
    WaitingAuthOK,
    Connected,
    Closed,
}

#[derive(Clone, Debug, Default)]
pub struct AccountInfo {
    pub creation: Option<i64>,
    pub expiration: Option<i64>,
    pub status: Option<String>,
    pub kind: Option<String>,
}

pub struct Session {
    pub state: State,
    pub phone: String,
    pub nickname: String,
    pub server: String,
    pub group_server: String,
    pub presence: String,
    pub status_message: String,
    pub account_info: AccountInfo,
    next_iq_id: u64,
    next_msg_counter: u64,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            state: State::None,
            phone: config.phone.clone(),
            nickname: config.params.nickname.clone(),
            server: config.params.server.clone(),
            group_server: config.params.group_server.clone(),
            presence: "available".to_string(),
            status_message: String::new(),
            account_info: AccountInfo::default(),
            next_iq_id: 0,
            next_msg_counter: 0,
        }
    }

    /// Every IQ id emitted is unique within the session.
    pub fn next_iq_id(&mut self, epoch_seconds: i64) -> String {
        let id = wasp_model::outbound::message_id(epoch_seconds, self.next_iq_id);
        self.next_iq_id += 1;
        id
    }

    pub fn next_msg_id(&mut self, epoch_seconds: i64) -> String {
        let id = wasp_model::outbound::message_id(epoch_seconds, self.next_msg_counter);
        self.next_msg_counter += 1;
        id
    }

    pub fn own_jid(&self) -> String {
        format!("{}@{}", self.phone, self.server)
    }

    /// `sendRead` is true exactly when presence is `"available"`; any other
    /// value, including `"available-noread"`, yields a delivery receipt.
    pub fn send_read(&self) -> bool {
        self.presence == "available"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let config = Config {
            phone: "15551234".to_string(),
            password_b64: "".to_string(),
            params: crate::config::InitParams::default(),
        };
        Session::new(&config)
    }

    #[test]
    fn iq_ids_are_unique() {
        let mut s = session();
        let a = s.next_iq_id(1_700_000_000);
        let b = s.next_iq_id(1_700_000_000);
        assert_ne!(a, b);
    }

    #[test]
    fn send_read_follows_presence() {
        let mut s = session();
        assert!(s.send_read());
        s.presence = "available-noread".to_string();
        assert!(!s.send_read());
        s.presence = "unavailable".to_string();
        assert!(!s.send_read());
    }
}
