// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! The inbound message model: a tagged variant over the five message kinds
//! the handler can receive, replacing the original's inheritance hierarchy.

#[derive(Clone, Debug, PartialEq)]
pub struct MessageHeader {
    pub from: String,
    pub timestamp: i64,
    pub id: String,
    pub author: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaInfo {
    pub url: Option<String>,
    pub mimetype: Option<String>,
    pub size: Option<u64>,
    pub sha256_b64: Option<String>,
    pub encoding: Option<String>,
    pub preview: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PendingMessage {
    Chat {
        header: MessageHeader,
        text: String,
    },
    Image {
        header: MessageHeader,
        media: MediaInfo,
        width: Option<u32>,
        height: Option<u32>,
    },
    Location {
        header: MessageHeader,
        latitude: f64,
        longitude: f64,
        preview: Vec<u8>,
    },
    Audio {
        header: MessageHeader,
        media: MediaInfo,
        duration: Option<u32>,
    },
    Video {
        header: MessageHeader,
        media: MediaInfo,
    },
}

impl PendingMessage {
    pub fn header(&self) -> &MessageHeader {
        match self {
            PendingMessage::Chat { header, .. }
            | PendingMessage::Image { header, .. }
            | PendingMessage::Location { header, .. }
            | PendingMessage::Audio { header, .. }
            | PendingMessage::Video { header, .. } => header,
        }
    }

    /// A group jid contains a hyphen in its localpart, e.g. `123-456@g.us`;
    /// this mirrors the original engine's heuristic for `isgroup`.
    pub fn is_group_message(&self) -> bool {
        self.header()
            .from
            .split('@')
            .next()
            .map(|local| local.contains('-'))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(from: &str) -> MessageHeader {
        MessageHeader {
            from: from.to_string(),
            timestamp: 0,
            id: "M1".into(),
            author: None,
        }
    }

    #[test]
    fn group_jid_detected_by_hyphen() {
        let m = PendingMessage::Chat {
            header: header("123-456@g.us"),
            text: "hi".into(),
        };
        assert!(m.is_group_message());
    }

    #[test]
    fn plain_jid_is_not_a_group() {
        let m = PendingMessage::Chat {
            header: header("5551234@s.whatsapp.net"),
            text: "hi".into(),
        };
        assert!(!m.is_group_message());
    }
}
