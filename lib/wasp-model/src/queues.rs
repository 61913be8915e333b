// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! The per-type FIFO queues the host drains with a pull API, plus the
//! delayed-group-message holding pen.
use crate::pending_message::PendingMessage;
use crate::upload::PendingUpload;
use std::collections::VecDeque;

/// The kind of a receipt correlated against an outbound `ack`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiptKind {
    Ack,
    Delivered,
    Read,
}

/// A contact's presence, typing, or avatar change, as pulled by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactChange {
    pub jid: String,
}

/// An error event surfaced through the pull API. The original engine's
/// `notifyError` was a no-op; here it is an observable queue like any
/// other (see the REDESIGN note on `notifyError`).
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    Auth(String),
    Stream(String),
}

/// All FIFO surfaces the handler appends to and the host drains from.
#[derive(Default)]
pub struct Queues {
    pub recv_messages: VecDeque<PendingMessage>,
    pub recv_messages_delayed: VecDeque<PendingMessage>,
    pub received_acks: VecDeque<(String, ReceiptKind)>,
    pub user_changes: VecDeque<ContactChange>,
    pub user_typing: VecDeque<ContactChange>,
    pub user_icons: VecDeque<ContactChange>,
    pub upload_queue: VecDeque<PendingUpload>,
    pub errors: VecDeque<EngineError>,
}

impl Queues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves every delayed group message into `recv_messages`, preserving
    /// FIFO order, once the group-discovery phase completes.
    pub fn flush_delayed(&mut self) {
        while let Some(msg) = self.recv_messages_delayed.pop_front() {
            self.recv_messages.push_back(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pending_message::MessageHeader;

    fn msg(id: &str) -> PendingMessage {
        PendingMessage::Chat {
            header: MessageHeader {
                from: "123-456@g.us".into(),
                timestamp: 0,
                id: id.into(),
                author: None,
            },
            text: "hi".into(),
        }
    }

    #[test]
    fn flush_preserves_fifo_order() {
        let mut q = Queues::new();
        q.recv_messages_delayed.push_back(msg("1"));
        q.recv_messages_delayed.push_back(msg("2"));
        q.flush_delayed();

        let ids: Vec<_> = q
            .recv_messages
            .iter()
            .map(|m| m.header().id.clone())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(q.recv_messages_delayed.is_empty());
    }
}
