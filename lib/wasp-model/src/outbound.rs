// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Serializes outbound chat/image/location/audio/video messages into
//! [`Node`] trees. Constructors take only the two integers they need
//! (message counter and epoch seconds) rather than a reference to the
//! session, so messages never hold a back-reference to the connection.
use wasp_proto::Node;

/// Formats a message id the way the host-facing API promises:
/// `"{epoch}-{counter}"`.
pub fn message_id(epoch_seconds: i64, counter: u64) -> String {
    format!("{epoch_seconds}-{counter}")
}

fn message_envelope(to: &str, id: &str, msg_type: &str) -> Node {
    Node::new("message")
        .with_attr("to", to)
        .with_attr("type", msg_type)
        .with_attr("id", id)
}

/// Builds a plain-text chat message, routed to `g.us` when `group` is set.
pub fn chat(id: &str, to: &str, text: &str, group: bool) -> Node {
    let to = if group && !to.ends_with("@g.us") {
        format!("{to}@g.us")
    } else {
        to.to_string()
    };
    message_envelope(&to, id, "text").with_child(Node::new("body").with_text(text))
}

/// Parameters shared by every media message kind.
pub struct MediaAttrs<'a> {
    pub url: &'a str,
    pub mimetype: &'a str,
    pub size: u64,
    pub sha256_b64: &'a str,
    pub preview: &'a [u8],
}

pub fn image(id: &str, to: &str, media: &MediaAttrs, width: u32, height: u32) -> Node {
    let media_node = Node::new("media")
        .with_attr("type", "image")
        .with_attr("url", media.url)
        .with_attr("mimetype", media.mimetype)
        .with_attr("size", media.size.to_string())
        .with_attr("hash", media.sha256_b64)
        .with_attr("width", width.to_string())
        .with_attr("height", height.to_string())
        .with_data(media.preview.to_vec());
    message_envelope(to, id, "media").with_child(media_node)
}

pub fn location(id: &str, to: &str, latitude: f64, longitude: f64, preview: &[u8]) -> Node {
    let media_node = Node::new("media")
        .with_attr("type", "location")
        .with_attr("latitude", latitude.to_string())
        .with_attr("longitude", longitude.to_string())
        .with_data(preview.to_vec());
    message_envelope(to, id, "media").with_child(media_node)
}

pub fn audio(id: &str, to: &str, media: &MediaAttrs, duration_secs: u32) -> Node {
    let media_node = Node::new("media")
        .with_attr("type", "audio")
        .with_attr("url", media.url)
        .with_attr("mimetype", media.mimetype)
        .with_attr("size", media.size.to_string())
        .with_attr("hash", media.sha256_b64)
        .with_attr("duration", duration_secs.to_string());
    message_envelope(to, id, "media").with_child(media_node)
}

pub fn video(id: &str, to: &str, media: &MediaAttrs) -> Node {
    let media_node = Node::new("media")
        .with_attr("type", "video")
        .with_attr("url", media.url)
        .with_attr("mimetype", media.mimetype)
        .with_attr("size", media.size.to_string())
        .with_attr("hash", media.sha256_b64)
        .with_data(media.preview.to_vec());
    message_envelope(to, id, "media").with_child(media_node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_matches_host_contract() {
        assert_eq!(message_id(1_700_000_000, 4), "1700000000-4");
    }

    #[test]
    fn group_chat_targets_g_us() {
        let n = chat("1-1", "123456", "hi", true);
        assert_eq!(n.attr("to"), Some("123456@g.us"));
    }

    #[test]
    fn direct_chat_keeps_jid_unchanged() {
        let n = chat("1-1", "123456@s.whatsapp.net", "hi", false);
        assert_eq!(n.attr("to"), Some("123456@s.whatsapp.net"));
    }

    #[test]
    fn image_message_carries_media_attrs() {
        let media = MediaAttrs {
            url: "https://u/f",
            mimetype: "image/jpeg",
            size: 1234,
            sha256_b64: "abc==",
            preview: b"thumb",
        };
        let n = image("1-2", "to@s.whatsapp.net", &media, 100, 80);
        let child = n.child("media").unwrap();
        assert_eq!(child.attr("url"), Some("https://u/f"));
        assert_eq!(child.attr("width"), Some("100"));
        assert_eq!(child.data.as_deref(), Some(&b"thumb"[..]));
    }
}
