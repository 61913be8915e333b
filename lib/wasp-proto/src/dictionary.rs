// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! The static token dictionary. Writers prefer a dictionary index over a
//! literal string whenever the token is present here; readers resolve a
//! dictionary byte (`< TOKENS.len()`) back into its string.
use std::collections::HashMap;
use std::sync::OnceLock;

/// Tokens are indexed by their position in this table. Index 0 is reserved
/// and never resolves to a token.
pub const TOKENS: &[&str] = &[
    "",
    "iq",
    "message",
    "presence",
    "receipt",
    "notification",
    "chatstate",
    "stream:error",
    "stream:features",
    "readreceipts",
    "auth",
    "mechanism",
    "WAUTH-2",
    "user",
    "challenge",
    "response",
    "success",
    "failure",
    "start",
    "config",
    "ack",
    "class",
    "type",
    "from",
    "to",
    "id",
    "t",
    "participant",
    "xmlns",
    "body",
    "media",
    "url",
    "size",
    "hash",
    "encoding",
    "mimetype",
    "width",
    "height",
    "latitude",
    "longitude",
    "duration",
    "seconds",
    "status",
    "query",
    "picture",
    "duplicate",
    "group",
    "subject",
    "owner",
    "creation",
    "expiration",
    "kind",
    "s.whatsapp.net",
    "g.us",
    "urn:xmpp:ping",
    "urn:xmpp:whatsapp:push",
    "w:m",
    "w:profile:picture",
    "composing",
    "paused",
    "available",
    "unavailable",
    "available-noread",
    "subscribe",
    "unsubscribe",
    "delivery",
    "read",
    "set",
    "get",
    "result",
    "error",
    "text",
    "image",
    "location",
    "audio",
    "video",
    "jid",
    "name",
    "filehash",
    "file",
    "preview",
    "full",
    "list",
    "item",
    "account",
    "last",
    "elapsed",
    "offline",
    "vcard",
    "notify",
    "add",
    "remove",
    "promote",
    "demote",
    "participants",
];

/// A dictionary index never exceeds one byte.
pub const MAX_INDEX: usize = u8::MAX as usize;

fn index_map() -> &'static HashMap<&'static str, u8> {
    static MAP: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();
    MAP.get_or_init(|| {
        TOKENS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &tok)| (tok, i as u8))
            .collect()
    })
}

/// Resolves a dictionary byte to its token string.
pub fn token_for(index: u8) -> Option<&'static str> {
    if index == 0 {
        return None;
    }
    TOKENS.get(index as usize).copied()
}

/// Resolves a string to its dictionary index, if present.
pub fn index_for(token: &str) -> Option<u8> {
    index_map().get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_round_trip() {
        for (i, &tok) in TOKENS.iter().enumerate().skip(1) {
            assert_eq!(index_for(tok), Some(i as u8));
            assert_eq!(token_for(i as u8), Some(tok));
        }
    }

    #[test]
    fn unknown_token_is_absent() {
        assert_eq!(index_for("not-a-real-token"), None);
    }

    #[test]
    fn index_zero_is_reserved() {
        assert_eq!(token_for(0), None);
    }
}
