// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! [`Connection`]: the single-threaded, callback-driven public facade. The
//! host owns the actual sockets; this type only ever sees bytes in and bytes
//! out, plus the host's explicit `epoch_seconds` for every call that needs
//! wall-clock time (so the core never calls `SystemTime::now()` itself).
use crate::config::Config;
use crate::errors::Error;
use crate::handler::Handler;
use crate::session::State;
use log::{error, warn};
use std::collections::HashMap;
use wasp_crypto::RingBuffer;
use wasp_model::{ContactChange, PendingMessage, PendingUpload, ReceiptKind};
use wasp_proto::{FrameCodec, Node, HANDSHAKE_PREAMBLE};

/// Bytes reserved up front for each buffer; buffers grow past this freely,
/// it only avoids a reallocation on the first few frames.
const BUF_CAPACITY: usize = 512;

/// Drives the protocol engine for a single session. Not reentrant: the host
/// must let one call return before making the next.
pub struct Connection {
    frame: FrameCodec,
    handler: Handler,
    inbound_buf: RingBuffer<u8>,
    outbound_buf: RingBuffer<u8>,
    preamble_written: bool,
    upload_out: RingBuffer<u8>,
    pending_file_bytes: HashMap<String, Vec<u8>>,
}

impl Connection {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            frame: FrameCodec::new(),
            handler: Handler::new(config)?,
            inbound_buf: RingBuffer::with_capacity(BUF_CAPACITY, 0),
            outbound_buf: RingBuffer::with_capacity(BUF_CAPACITY, 0),
            preamble_written: false,
            upload_out: RingBuffer::with_capacity(BUF_CAPACITY, 0),
            pending_file_bytes: HashMap::new(),
        })
    }

    fn write_node(&mut self, node: &Node) -> Result<(), Error> {
        self.frame.write(node, &mut self.outbound_buf)?;
        Ok(())
    }

    fn drain_handler_outbound(&mut self) -> Result<(), Error> {
        for node in self.handler.take_outbound() {
            self.write_node(&node)?;
        }
        Ok(())
    }

    /// `None → WaitingChallenge`. Writes the handshake preamble once, then
    /// the `start`/`stream:features`/`auth` frames.
    pub fn login(&mut self) -> Result<(), Error> {
        if !self.preamble_written {
            self.outbound_buf.extend(HANDSHAKE_PREAMBLE);
            self.preamble_written = true;
        }
        self.handler.login();
        self.drain_handler_outbound()
    }

    /// Feeds bytes the host read off the main socket. May append to the
    /// outbound buffer (responses, receipts, acks) as a side effect.
    pub fn receive(&mut self, bytes: &[u8], epoch_seconds: i64) -> Result<(), Error> {
        self.inbound_buf.extend(bytes);

        loop {
            let node = match self.frame.try_read(&mut self.inbound_buf) {
                Ok(Some(node)) => node,
                Ok(None) => break,
                Err(e) => {
                    self.handler.session.state = State::Closed;
                    return Err(e.into());
                }
            };
            self.handle_node(node, epoch_seconds)?;
        }
        Ok(())
    }

    fn handle_node(&mut self, node: Node, epoch_seconds: i64) -> Result<(), Error> {
        match self.handler.session.state {
            State::WaitingChallenge if node.tag == "challenge" => {
                let keys = self.handler.on_challenge(&node, epoch_seconds)?;
                self.frame.install_ciphers(wasp_crypto::StreamCipherPair::new(keys));
                self.drain_handler_outbound()?;
            }
            State::WaitingAuthOK if node.tag == "success" => {
                self.handler.on_success(&node, epoch_seconds);
                self.drain_handler_outbound()?;
            }
            State::WaitingAuthOK if node.tag == "failure" => {
                let err = self.handler.on_failure(&node);
                return Err(err);
            }
            State::Connected => {
                self.handler.dispatch(&node, epoch_seconds)?;
                self.drain_handler_outbound()?;
            }
            _ => warn!("unexpected tag {} in state {:?}", node.tag, self.handler.session.state),
        }
        Ok(())
    }

    /// Bytes queued for the main socket; the host writes as many as it can
    /// and reports back via [`Connection::commit_sent`].
    pub fn pending_send(&self) -> &[u8] {
        self.outbound_buf.as_ref()
    }

    pub fn has_data_to_send(&self) -> bool {
        !self.outbound_buf.is_empty()
    }

    /// Call after the host has actually written `n` bytes from
    /// [`Connection::pending_send`] to the socket.
    pub fn commit_sent(&mut self, n: usize) {
        let n = n.min(self.outbound_buf.len());
        self.outbound_buf.skip(n);
        self.outbound_buf.reclaim_leading();
    }

    // ---- Upload side channel ----

    /// Starts an outbound image upload. The raw bytes are cached internally
    /// until the POST body is built; the host need not keep its own copy.
    pub fn send_image(&mut self, to: &str, local_path: &str, file_bytes: &[u8], epoch_seconds: i64) -> Result<String, Error> {
        let id = self.handler.send_image(to, local_path, file_bytes, epoch_seconds);
        self.pending_file_bytes.insert(id.clone(), file_bytes.to_vec());
        self.drain_handler_outbound()?;
        Ok(id)
    }

    /// If an upload is ready to POST and none is already in flight, builds
    /// the multipart body and returns `(host, port, headers)` for the host
    /// to dial. The body is also buffered internally; drain it with
    /// [`Connection::pending_upload_send`].
    pub fn pump_upload(&mut self) -> Option<(String, u16, String)> {
        let request_id = self.handler.upload_ready_request_id()?;
        let bytes = self.pending_file_bytes.remove(&request_id)?;
        let (host, port, headers, body) = self.handler.pump_upload(&bytes)?;
        self.upload_out.clear();
        self.upload_out.extend(body);
        Some((host, port, headers))
    }

    pub fn pending_upload_send(&self) -> &[u8] {
        self.upload_out.as_ref()
    }

    pub fn commit_upload_sent(&mut self, n: usize) {
        let n = n.min(self.upload_out.len());
        self.upload_out.skip(n);
        self.upload_out.reclaim_leading();
    }

    /// Feeds the full HTTPS response body once the host has read it to
    /// completion (e.g. by `Content-Length` or connection close).
    pub fn on_upload_response(&mut self, body: &[u8]) -> Result<(), Error> {
        self.handler.on_upload_response(body)
    }

    // ---- Pull API ----

    pub fn pull_message(&mut self) -> Option<PendingMessage> {
        self.handler.queues.recv_messages.pop_front()
    }

    pub fn pull_status_change(&mut self) -> Option<ContactChange> {
        self.handler.queues.user_changes.pop_front()
    }

    pub fn pull_typing_change(&mut self) -> Option<ContactChange> {
        self.handler.queues.user_typing.pop_front()
    }

    pub fn pull_icon_change(&mut self) -> Option<ContactChange> {
        self.handler.queues.user_icons.pop_front()
    }

    pub fn pull_ack(&mut self) -> Option<(String, ReceiptKind)> {
        self.handler.queues.received_acks.pop_front()
    }

    pub fn pull_error(&mut self) -> Option<wasp_model::EngineError> {
        self.handler.queues.errors.pop_front()
    }

    pub fn pending_upload_count(&self) -> usize {
        self.handler.queues.upload_queue.len()
    }

    // ---- Outbound operations ----

    pub fn send_chat(&mut self, to: &str, text: &str, epoch_seconds: i64) -> Result<String, Error> {
        let id = self.handler.send_chat(to, text, epoch_seconds);
        self.drain_handler_outbound()?;
        Ok(id)
    }

    pub fn send_group_chat(&mut self, to: &str, text: &str, epoch_seconds: i64) -> Result<String, Error> {
        let id = self.handler.send_group_chat(to, text, epoch_seconds);
        self.drain_handler_outbound()?;
        Ok(id)
    }

    pub fn add_contacts(&mut self, jids: &[String], epoch_seconds: i64) -> Result<(), Error> {
        self.handler.add_contacts(jids, epoch_seconds);
        self.drain_handler_outbound()
    }

    pub fn notify_typing(&mut self, to: &str, composing: bool) -> Result<(), Error> {
        self.handler.notify_typing(to, composing);
        self.drain_handler_outbound()
    }

    pub fn set_my_presence(&mut self, presence: &str, status_message: Option<&str>) -> Result<(), Error> {
        self.handler.set_my_presence(presence, status_message);
        self.drain_handler_outbound()
    }

    pub fn add_group(&mut self, subject: &str, epoch_seconds: i64) -> Result<(), Error> {
        self.handler.add_group(subject, epoch_seconds);
        self.drain_handler_outbound()
    }

    pub fn leave_group(&mut self, group_id: &str, epoch_seconds: i64) -> Result<(), Error> {
        self.handler.leave_group(group_id, epoch_seconds);
        self.drain_handler_outbound()
    }

    pub fn manage_participant(&mut self, group_id: &str, jid: &str, action: &str, epoch_seconds: i64) -> Result<(), Error> {
        self.handler.manage_participant(group_id, jid, action, epoch_seconds);
        self.drain_handler_outbound()
    }

    pub fn send_avatar(&mut self, bytes: &[u8], preview: &[u8], epoch_seconds: i64) -> Result<(), Error> {
        self.handler.send_avatar(bytes, preview, epoch_seconds);
        self.drain_handler_outbound()
    }

    pub fn account_info(&self) -> &crate::session::AccountInfo {
        &self.handler.session.account_info
    }

    pub fn state(&self) -> State {
        self.handler.session.state
    }

    pub fn pending_uploads(&self) -> impl Iterator<Item = &PendingUpload> {
        self.handler.queues.upload_queue.iter()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if self.handler.session.state != State::Closed {
            error!("connection dropped while state was {:?}", self.handler.session.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitParams;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn connection() -> Connection {
        let config = Config {
            phone: "15551234".to_string(),
            password_b64: STANDARD.encode([5u8; 20]),
            params: InitParams::default(),
        };
        Connection::new(&config).unwrap()
    }

    #[test]
    fn login_writes_preamble_once() {
        let mut conn = connection();
        conn.login().unwrap();
        assert!(conn.pending_send().starts_with(HANDSHAKE_PREAMBLE));
        let len_after_first = conn.pending_send().len();
        conn.commit_sent(len_after_first);
        conn.login().unwrap();
        assert!(!conn.pending_send().starts_with(HANDSHAKE_PREAMBLE));
    }

    #[test]
    fn full_handshake_reaches_connected() {
        let mut conn = connection();
        conn.login().unwrap();
        conn.commit_sent(conn.pending_send().len());

        let mut challenge_buf = RingBuffer::with_capacity(64, 0);
        let mut plain = FrameCodec::new();
        plain
            .write(&Node::new("challenge").with_data(b"DEADBEEFDEADBEEFDEADBEEF".to_vec()), &mut challenge_buf)
            .unwrap();
        conn.receive(challenge_buf.as_ref(), 1_700_000_000).unwrap();
        assert_eq!(conn.state(), State::WaitingAuthOK);
    }
}
