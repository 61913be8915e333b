// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Inbound dispatch and outbound operation builders. [`Handler`] owns every
//! piece of session state (`Session`, `Contacts`, `Groups`, `GroupPhase`,
//! `Queues`, `UploadCoordinator`) and is driven one [`Node`] at a time by
//! `Connection` in `client.rs`.
use crate::config::Config;
use crate::errors::Error;
use crate::session::{AccountInfo, Session, State};
use crate::upload_coordinator::{UploadCoordinator, UploadResult};
use log::{debug, warn};
use std::collections::HashMap;
use wasp_crypto::derive_keys;
use wasp_model::{
    outbound, Contacts, GroupPhase, Groups, MediaInfo, MessageHeader, PendingMessage,
    PendingUpload, Presence, Queues, ReceiptKind, Typing,
};
use wasp_proto::Node;

/// What an outstanding `iq` id was sent for, so the matching `result` can be
/// routed back to the right handler.
enum PendingIq {
    GroupOwning,
    GroupParticipating,
    GroupParticipants { group_id: String },
    LastSeen { jid: String },
    Picture { jid: String },
}

pub struct Handler {
    pub session: Session,
    pub contacts: Contacts,
    pub groups: Groups,
    pub group_phase: GroupPhase,
    pub queues: Queues,
    pub upload_coord: UploadCoordinator,
    password_secret: [u8; 20],
    pending_iqs: HashMap<String, PendingIq>,
    out: Vec<Node>,
}

impl Handler {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let password_secret = wasp_crypto::decode_password(&config.password_b64)?;
        Ok(Self {
            session: Session::new(config),
            contacts: Contacts::new(),
            groups: Groups::new(),
            group_phase: GroupPhase::new(),
            queues: Queues::new(),
            upload_coord: UploadCoordinator::new(),
            password_secret,
            pending_iqs: HashMap::new(),
            out: Vec::new(),
        })
    }

    /// Drains every node queued for the server since the last call.
    pub fn take_outbound(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.out)
    }

    fn push(&mut self, node: Node) {
        self.out.push(node);
    }

    fn queue_iq(&mut self, id: String, kind: PendingIq) {
        self.pending_iqs.insert(id, kind);
    }

    /// `None → WaitingChallenge`: emits `start`, `stream:features`, `auth`.
    /// The host is responsible for writing [`wasp_proto::HANDSHAKE_PREAMBLE`]
    /// ahead of these three frames exactly once, before anything else.
    pub fn login(&mut self) {
        self.session.state = State::WaitingChallenge;
        self.push(Node::new("start"));
        self.push(Node::new("stream:features").with_child(Node::new("readreceipts")));
        self.push(
            Node::new("auth")
                .with_attr("mechanism", "WAUTH-2")
                .with_attr("user", &self.session.phone)
                .with_data(Vec::new()),
        );
    }

    /// `WaitingChallenge → WaitingAuthOK`: derives the four session keys from
    /// the challenge nonce and builds the encrypted `response` node. Returns
    /// the derived keys so the caller can install them on the frame codec
    /// before writing the response (the response itself must go out
    /// encrypted).
    pub fn on_challenge(&mut self, challenge: &Node, epoch_seconds: i64) -> Result<[[u8; 20]; 4], Error> {
        let nonce = challenge.data.as_deref().unwrap_or(&[]);
        let keys = derive_keys(&self.password_secret, nonce);

        let mut plaintext = Vec::with_capacity(self.session.phone.len() + nonce.len() + 16);
        plaintext.extend_from_slice(self.session.phone.as_bytes());
        plaintext.extend_from_slice(nonce);
        plaintext.extend_from_slice(epoch_seconds.to_string().as_bytes());

        self.push(Node::new("response").with_data(plaintext));
        self.session.state = State::WaitingAuthOK;
        Ok(keys)
    }

    /// `WaitingAuthOK → Connected`: stores account info, then emits the
    /// initial presence, the push-config query, and both group-list queries.
    pub fn on_success(&mut self, success: &Node, epoch_seconds: i64) {
        self.session.state = State::Connected;
        self.session.account_info = AccountInfo {
            creation: success.attr("creation").and_then(|s| s.parse().ok()),
            expiration: success.attr("expiration").and_then(|s| s.parse().ok()),
            status: success.attr("status").map(|s| s.to_string()),
            kind: success.attr("kind").map(|s| s.to_string()),
        };

        self.push(
            Node::new("presence")
                .with_attr("name", self.session.nickname.clone())
                .with_attr("type", "available"),
        );
        self.push(
            Node::new("iq")
                .with_attr("type", "get")
                .with_attr("xmlns", "urn:xmpp:whatsapp:push")
                .with_attr("id", self.session.next_iq_id(epoch_seconds))
                .with_child(Node::new("config")),
        );
        self.emit_group_queries(epoch_seconds);
    }

    /// `WaitingAuthOK → Closed`.
    pub fn on_failure(&mut self, failure: &Node) -> Error {
        self.session.state = State::Closed;
        let reason = failure
            .attr("reason")
            .unwrap_or("authentication rejected")
            .to_string();
        self.queues
            .errors
            .push_back(wasp_model::EngineError::Auth(reason.clone()));
        Error::Auth(reason)
    }

    fn emit_group_queries(&mut self, epoch_seconds: i64) {
        let owning_id = self.session.next_iq_id(epoch_seconds);
        self.push(
            Node::new("iq")
                .with_attr("type", "get")
                .with_attr("xmlns", "w:g")
                .with_attr("id", owning_id.clone())
                .with_child(Node::new("owning")),
        );
        self.queue_iq(owning_id, PendingIq::GroupOwning);

        let participating_id = self.session.next_iq_id(epoch_seconds);
        self.push(
            Node::new("iq")
                .with_attr("type", "get")
                .with_attr("xmlns", "w:g")
                .with_attr("id", participating_id.clone())
                .with_child(Node::new("participating")),
        );
        self.queue_iq(participating_id, PendingIq::GroupParticipating);
    }

    /// Re-runs group discovery from scratch; triggered by a `participant` or
    /// `owner` notification.
    fn schedule_group_refresh(&mut self, epoch_seconds: i64) {
        self.group_phase = GroupPhase::new();
        self.emit_group_queries(epoch_seconds);
    }

    /// Main dispatch entry point for `Connected` traffic.
    pub fn dispatch(&mut self, node: &Node, epoch_seconds: i64) -> Result<(), Error> {
        match node.tag.as_str() {
            "notification" => self.on_notification(node, epoch_seconds),
            "ack" => self.on_ack(node),
            "receipt" => self.on_receipt(node, epoch_seconds),
            "chatstate" => self.on_chatstate(node),
            "message" => self.on_message(node, epoch_seconds),
            "presence" => self.on_presence(node),
            "iq" => self.on_iq(node, epoch_seconds),
            other => {
                debug!("ignoring unhandled tag {other}");
                Ok(())
            }
        }
    }

    fn on_notification(&mut self, node: &Node, epoch_seconds: i64) -> Result<(), Error> {
        if let (Some(from), Some(id)) = (node.attr("from"), node.attr("id")) {
            self.push(
                Node::new("receipt")
                    .with_attr("to", from)
                    .with_attr("id", id)
                    .with_attr("type", node.attr("type").unwrap_or("encrypt"))
                    .with_attr("t", "1"),
            );
        }
        if matches!(node.attr("type"), Some("participant") | Some("owner")) {
            self.schedule_group_refresh(epoch_seconds);
        }
        Ok(())
    }

    fn on_ack(&mut self, node: &Node) -> Result<(), Error> {
        if let Some(id) = node.attr("id") {
            self.queues
                .received_acks
                .push_back((id.to_string(), ReceiptKind::Ack));
        }
        Ok(())
    }

    fn on_receipt(&mut self, node: &Node, _epoch_seconds: i64) -> Result<(), Error> {
        if node.attr("from").is_none() {
            return Ok(());
        }
        let Some(id) = node.attr("id") else { return Ok(()) };
        let kind_attr = node.attr("type").unwrap_or("delivery");

        self.push(
            Node::new("ack")
                .with_attr("class", "receipt")
                .with_attr("type", kind_attr)
                .with_attr("id", id),
        );

        let kind = if kind_attr == "delivery" {
            ReceiptKind::Delivered
        } else {
            ReceiptKind::Read
        };
        self.queues.received_acks.push_back((id.to_string(), kind));
        Ok(())
    }

    fn on_chatstate(&mut self, node: &Node) -> Result<(), Error> {
        let Some(from) = node.attr("from") else { return Ok(()) };
        let typing = if node.child("composing").is_some() {
            Typing::Composing
        } else if node.child("paused").is_some() {
            Typing::Paused
        } else {
            Typing::None
        };
        self.contacts.entry(from).typing = typing;
        self.queues
            .user_typing
            .push_back(wasp_model::ContactChange { jid: from.to_string() });
        Ok(())
    }

    fn on_presence(&mut self, node: &Node) -> Result<(), Error> {
        let Some(from) = node.attr("from") else { return Ok(()) };
        let presence = match node.attr("type").unwrap_or("available") {
            "unavailable" => Presence::Unavailable,
            _ => Presence::Available,
        };
        self.contacts.entry(from).presence = Some(presence);
        self.queues
            .user_changes
            .push_back(wasp_model::ContactChange { jid: from.to_string() });
        Ok(())
    }

    fn on_message(&mut self, node: &Node, epoch_seconds: i64) -> Result<(), Error> {
        let msg_type = node.attr("type").unwrap_or("");
        if msg_type == "notification" {
            self.schedule_group_refresh(epoch_seconds);
            return Ok(());
        }

        let (Some(from), Some(id)) = (node.attr("from"), node.attr("id")) else {
            return Ok(());
        };
        let header = MessageHeader {
            from: from.to_string(),
            timestamp: node.attr("t").and_then(|s| s.parse().ok()).unwrap_or(0),
            id: id.to_string(),
            author: node.attr("participant").map(|s| s.to_string()),
        };

        let message = if let Some(body) = node.child("body") {
            Some(PendingMessage::Chat {
                header: header.clone(),
                text: body.text().unwrap_or("").to_string(),
            })
        } else {
            node.child("media").map(|media| build_media_message(header.clone(), media))
        };

        if let Some(message) = message {
            let is_group = message.is_group_message();
            if is_group && !self.group_phase.groups_updated() {
                self.queues.recv_messages_delayed.push_back(message);
            } else {
                self.queues.recv_messages.push_back(message);
            }
        }

        // Automatic receipt: every message carrying both `type` and `from`
        // gets one, per the ACK policy.
        let receipt_type = if self.session.send_read() { "read" } else { "delivery" };
        self.push(
            Node::new("receipt")
                .with_attr("to", from)
                .with_attr("id", id)
                .with_attr("type", receipt_type)
                .with_attr("t", "1"),
        );

        Ok(())
    }

    fn on_iq(&mut self, node: &Node, epoch_seconds: i64) -> Result<(), Error> {
        if node.attr("xmlns") == Some("urn:xmpp:ping") {
            if let (Some(from), Some(id)) = (node.attr("from"), node.attr("id")) {
                self.push(
                    Node::new("iq")
                        .with_attr("type", "result")
                        .with_attr("to", from)
                        .with_attr("id", id),
                );
            }
            return Ok(());
        }

        if node.attr("type") != Some("result") {
            return Ok(());
        }
        let Some(id) = node.attr("id").map(str::to_string) else { return Ok(()) };

        if let Some(media) = node.child("media") {
            if let Some(url) = media.attr("url") {
                self.upload_coord.on_url_assigned(&mut self.queues.upload_queue, &id, url);
            }
        }

        if let Some(dup) = node.child("duplicate") {
            self.on_upload_duplicate(&id, dup);
        }

        if let Some(query) = node.child("query") {
            if let Some(PendingIq::LastSeen { jid }) = self.pending_iqs.remove(&id) {
                if let Some(seconds) = query.attr("seconds").and_then(|s| s.parse::<i64>().ok()) {
                    self.contacts.entry(&jid).last_seen_epoch = Some(epoch_seconds - seconds);
                }
            }
        }

        if let Some(picture) = node.child("picture") {
            if let Some(PendingIq::Picture { jid }) = self.pending_iqs.remove(&id) {
                let bytes = picture.data.clone().unwrap_or_default();
                let contact = self.contacts.entry(&jid);
                if picture.attr("type") == Some("preview") {
                    contact.preview_picture = Some(bytes);
                    self.queues
                        .user_icons
                        .push_back(wasp_model::ContactChange { jid: jid.clone() });
                } else {
                    contact.full_picture = Some(bytes);
                }
            }
        }

        if let Some(status) = node.child("status") {
            for user in &status.children {
                if user.tag != "user" {
                    continue;
                }
                let Some(jid) = user.attr("jid").map(str::to_string) else { continue };
                let decoded = user
                    .text()
                    .and_then(|raw| serde_json::from_str::<String>(raw).ok())
                    .or_else(|| user.text().map(|s| s.to_string()));
                if let Some(text) = decoded {
                    self.contacts.entry(&jid).status_text = Some(text);
                }
            }
        }

        match self.pending_iqs.remove(&id) {
            Some(PendingIq::GroupOwning) => {
                self.group_phase.mark_owning_answered();
                self.ingest_group_list(node, epoch_seconds);
            }
            Some(PendingIq::GroupParticipating) => {
                self.group_phase.mark_participating_answered();
                self.ingest_group_list(node, epoch_seconds);
            }
            Some(PendingIq::GroupParticipants { group_id }) => {
                self.ingest_participants(&group_id, node);
            }
            _ => {}
        }

        if self.group_phase.groups_updated() {
            self.queues.flush_delayed();
        }

        Ok(())
    }

    fn ingest_group_list(&mut self, node: &Node, epoch_seconds: i64) {
        for group_node in node.children.iter().filter(|c| c.tag == "group") {
            let Some(gid) = group_node.attr("id").map(str::to_string) else { continue };
            {
                let group = self.groups.entry(&gid);
                group.subject = group_node.attr("subject").unwrap_or_default().to_string();
                group.owner = group_node.attr("owner").unwrap_or_default().to_string();
            }

            let participants_id = self.session.next_iq_id(epoch_seconds);
            self.push(
                Node::new("iq")
                    .with_attr("type", "get")
                    .with_attr("xmlns", "w:g")
                    .with_attr("id", participants_id.clone())
                    .with_attr("to", gid.clone())
                    .with_child(Node::new("list")),
            );
            self.group_phase.begin_participant_query();
            self.queue_iq(participants_id, PendingIq::GroupParticipants { group_id: gid });
        }
    }

    fn ingest_participants(&mut self, group_id: &str, node: &Node) {
        let participants = node.children.iter().filter(|c| c.tag == "participant");
        let mut saw_any = false;
        for participant in participants {
            saw_any = true;
            if let Some(jid) = participant.attr("jid") {
                if let Some(group) = self.groups.get_mut(group_id) {
                    if !group.participants.iter().any(|p| p == jid) {
                        group.participants.push(jid.to_string());
                    }
                }
            }
        }
        if saw_any {
            self.group_phase.complete_participant_query();
        } else {
            warn!("group {group_id} participant query returned no participants");
            self.group_phase.complete_participant_query();
        }
    }

    fn on_upload_duplicate(&mut self, id: &str, dup: &Node) {
        let result = UploadResult {
            url: dup.attr("url").unwrap_or_default().to_string(),
            media_type: dup.attr("type").unwrap_or("image").to_string(),
            size: dup.attr("size").and_then(|s| s.parse().ok()).unwrap_or(0),
            width: dup.attr("width").and_then(|s| s.parse().ok()),
            height: dup.attr("height").and_then(|s| s.parse().ok()),
            filehash: dup.attr("filehash").unwrap_or_default().to_string(),
            mimetype: dup.attr("mimetype").unwrap_or("application/octet-stream").to_string(),
        };
        if let Some(upload) = self
            .upload_coord
            .on_duplicate(&mut self.queues.upload_queue, id, result.clone())
        {
            self.emit_upload_message(&upload, &result);
        }
    }

    /// Called by the host once the side-channel HTTPS POST has a response.
    pub fn on_upload_response(&mut self, body: &[u8]) -> Result<(), Error> {
        let (upload, result) = self
            .upload_coord
            .on_https_response(&mut self.queues.upload_queue, body)
            .map_err(|_| Error::Upload("bad upload response".to_string()))?;
        self.emit_upload_message(&upload, &result);
        Ok(())
    }

    fn emit_upload_message(&mut self, upload: &PendingUpload, result: &UploadResult) {
        let media = outbound::MediaAttrs {
            url: &result.url,
            mimetype: &result.mimetype,
            size: result.size,
            sha256_b64: &upload.sha256_b64,
            preview: wasp_model::thumbnail::default_thumbnail(),
        };
        let id = upload.request_id.clone();
        let node = match upload.media_type {
            wasp_model::MediaType::Image => outbound::image(
                &id,
                &upload.recipient,
                &media,
                result.width.unwrap_or(0),
                result.height.unwrap_or(0),
            ),
            wasp_model::MediaType::Audio => outbound::audio(&id, &upload.recipient, &media, 0),
            wasp_model::MediaType::Video => outbound::video(&id, &upload.recipient, &media),
        };
        self.push(node);
    }

    // ---- Outbound operations (4.11) ----

    pub fn send_chat(&mut self, to: &str, text: &str, epoch_seconds: i64) -> String {
        let id = self.session.next_msg_id(epoch_seconds);
        self.push(outbound::chat(&id, to, text, false));
        id
    }

    pub fn send_group_chat(&mut self, to: &str, text: &str, epoch_seconds: i64) -> String {
        let id = self.session.next_msg_id(epoch_seconds);
        self.push(outbound::chat(&id, to, text, true));
        id
    }

    pub fn add_contacts(&mut self, jids: &[String], epoch_seconds: i64) {
        let mut newly_added = Vec::new();
        for jid in jids {
            if self.contacts.add_owned(jid) {
                newly_added.push(jid.clone());
            }
        }

        for jid in &newly_added {
            self.push(
                Node::new("presence")
                    .with_attr("type", "subscribe")
                    .with_attr("to", jid),
            );

            let picture_id = self.session.next_iq_id(epoch_seconds);
            self.push(
                Node::new("iq")
                    .with_attr("type", "get")
                    .with_attr("xmlns", "w:profile:picture")
                    .with_attr("to", jid)
                    .with_attr("id", picture_id.clone())
                    .with_child(Node::new("picture").with_attr("type", "preview")),
            );
            self.queue_iq(picture_id, PendingIq::Picture { jid: jid.clone() });

            let last_seen_id = self.session.next_iq_id(epoch_seconds);
            self.push(
                Node::new("iq")
                    .with_attr("type", "get")
                    .with_attr("xmlns", "jabber:iq:last")
                    .with_attr("to", jid)
                    .with_attr("id", last_seen_id.clone())
                    .with_child(Node::new("query")),
            );
            self.queue_iq(last_seen_id, PendingIq::LastSeen { jid: jid.clone() });
        }

        if !newly_added.is_empty() {
            let mut status_query = Node::new("status").with_attr("type", "get");
            for jid in self.contacts.jids().map(|s| s.to_string()).collect::<Vec<_>>() {
                status_query = status_query.with_child(Node::new("user").with_attr("jid", jid));
            }
            let id = self.session.next_iq_id(epoch_seconds);
            self.push(
                Node::new("iq")
                    .with_attr("type", "get")
                    .with_attr("xmlns", "jabber:iq:privacy")
                    .with_attr("id", id)
                    .with_child(status_query),
            );
        }
    }

    pub fn notify_typing(&mut self, to: &str, composing: bool) {
        let state_child = if composing { "composing" } else { "paused" };
        self.push(
            Node::new("chatstate")
                .with_attr("to", to)
                .with_child(Node::new(state_child)),
        );
    }

    pub fn set_my_presence(&mut self, presence: &str, status_message: Option<&str>) {
        if self.session.presence != presence {
            self.session.presence = presence.to_string();
            self.push(
                Node::new("presence")
                    .with_attr("name", self.session.nickname.clone())
                    .with_attr("type", presence),
            );
        }
        if let Some(status) = status_message {
            if self.session.status_message != status {
                self.session.status_message = status.to_string();
                self.push(
                    Node::new("iq")
                        .with_attr("type", "set")
                        .with_attr("xmlns", "status")
                        .with_child(Node::new("status").with_text(status)),
                );
            }
        }
    }

    pub fn add_group(&mut self, subject: &str, epoch_seconds: i64) {
        let id = self.session.next_iq_id(epoch_seconds);
        self.push(
            Node::new("iq")
                .with_attr("type", "set")
                .with_attr("xmlns", "w:g")
                .with_attr("id", id)
                .with_child(Node::new("group").with_attr("action", "create").with_attr("subject", subject)),
        );
    }

    pub fn leave_group(&mut self, group_id: &str, epoch_seconds: i64) {
        let id = self.session.next_iq_id(epoch_seconds);
        self.push(
            Node::new("iq")
                .with_attr("type", "set")
                .with_attr("xmlns", "w:g")
                .with_attr("id", id)
                .with_child(
                    Node::new("leave").with_child(Node::new("group").with_attr("id", group_id)),
                ),
        );
        self.groups.remove(group_id);
    }

    pub fn manage_participant(&mut self, group_id: &str, jid: &str, action: &str, epoch_seconds: i64) {
        let id = self.session.next_iq_id(epoch_seconds);
        self.push(
            Node::new("iq")
                .with_attr("type", "set")
                .with_attr("xmlns", "w:g")
                .with_attr("id", id)
                .with_attr("to", group_id)
                .with_child(Node::new(action.to_string()).with_child(Node::new("participant").with_attr("jid", jid))),
        );
    }

    /// Entry point for an outbound image/audio/video upload: hashes the
    /// file, enqueues a [`PendingUpload`], and emits the `iq{type=set}`
    /// media-request node. Returns the request id the upload is tracked by.
    pub fn send_image(
        &mut self,
        to: &str,
        local_path: &str,
        file_bytes: &[u8],
        epoch_seconds: i64,
    ) -> String {
        let sha256_b64 = crate::upload_coordinator::sha256_b64(file_bytes);
        let media_type = crate::upload_coordinator::media_type_for_extension(local_path);
        let id = self.session.next_iq_id(epoch_seconds);
        let sender = self.session.own_jid();

        self.queues.upload_queue.push_back(PendingUpload::new(
            id.clone(),
            to,
            sender,
            local_path,
            sha256_b64.clone(),
            media_type,
            file_bytes.len() as u64,
        ));

        self.push(
            Node::new("iq")
                .with_attr("type", "set")
                .with_attr("xmlns", "w:m")
                .with_attr("id", id.clone())
                .with_child(
                    Node::new("media")
                        .with_attr("type", "image")
                        .with_attr("hash", sha256_b64)
                        .with_attr("size", file_bytes.len().to_string()),
                ),
        );
        id
    }

    /// The request id of the next upload ready to be POSTed, if any and if
    /// no upload is already in flight.
    pub fn upload_ready_request_id(&self) -> Option<String> {
        if self.upload_coord.has_active_posting() {
            return None;
        }
        self.queues
            .upload_queue
            .iter()
            .find(|u| u.state == wasp_model::UploadState::UrlAssigned)
            .map(|u| u.request_id.clone())
    }

    pub fn pump_upload(&mut self, file_bytes: &[u8]) -> Option<(String, u16, String, Vec<u8>)> {
        self.upload_coord.pump(&mut self.queues.upload_queue, file_bytes)
    }

    pub fn send_avatar(&mut self, bytes: &[u8], preview: &[u8], epoch_seconds: i64) {
        let own = self.session.own_jid();
        let id = self.session.next_iq_id(epoch_seconds);
        self.push(
            Node::new("iq")
                .with_attr("type", "set")
                .with_attr("xmlns", "w:profile:picture")
                .with_attr("to", own)
                .with_attr("id", id)
                .with_child(Node::new("picture").with_attr("type", "full").with_data(bytes.to_vec()))
                .with_child(Node::new("picture").with_attr("type", "preview").with_data(preview.to_vec())),
        );
    }
}

fn build_media_message(header: MessageHeader, media: &Node) -> PendingMessage {
    let media_type = media.attr("type").unwrap_or("");
    let info = MediaInfo {
        url: media.attr("url").map(str::to_string),
        mimetype: media.attr("mimetype").map(str::to_string),
        size: media.attr("size").and_then(|s| s.parse().ok()),
        sha256_b64: media.attr("hash").map(str::to_string),
        encoding: media.attr("encoding").map(str::to_string),
        preview: media.data.clone().unwrap_or_default(),
    };

    match media_type {
        "location" => PendingMessage::Location {
            header,
            latitude: media.attr("latitude").and_then(|s| s.parse().ok()).unwrap_or(0.0),
            longitude: media.attr("longitude").and_then(|s| s.parse().ok()).unwrap_or(0.0),
            preview: info.preview,
        },
        "audio" => PendingMessage::Audio {
            header,
            media: info,
            duration: media.attr("duration").and_then(|s| s.parse().ok()),
        },
        "video" => PendingMessage::Video { header, media: info },
        _ => PendingMessage::Image {
            header,
            media: info,
            width: media.attr("width").and_then(|s| s.parse().ok()),
            height: media.attr("height").and_then(|s| s.parse().ok()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitParams;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn handler() -> Handler {
        let config = Config {
            phone: "15551234".to_string(),
            password_b64: STANDARD.encode([3u8; 20]),
            params: InitParams::default(),
        };
        Handler::new(&config).unwrap()
    }

    #[test]
    fn login_emits_handshake_sequence() {
        let mut h = handler();
        h.login();
        let out = h.take_outbound();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].tag, "start");
        assert_eq!(out[2].tag, "auth");
        assert_eq!(h.session.state, State::WaitingChallenge);
    }

    #[test]
    fn challenge_moves_to_waiting_auth_ok() {
        let mut h = handler();
        h.login();
        h.take_outbound();
        let challenge = Node::new("challenge").with_data(b"DEADBEEF".to_vec());
        h.on_challenge(&challenge, 1_700_000_000).unwrap();
        assert_eq!(h.session.state, State::WaitingAuthOK);
        let out = h.take_outbound();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag, "response");
    }

    #[test]
    fn success_populates_account_info_and_queries_groups() {
        let mut h = handler();
        let success = Node::new("success")
            .with_attr("kind", "paid")
            .with_attr("status", "active")
            .with_attr("expiration", "1700000000")
            .with_attr("creation", "1500000000");
        h.on_success(&success, 1_700_000_100);
        assert_eq!(h.session.state, State::Connected);
        assert_eq!(h.session.account_info.kind.as_deref(), Some("paid"));
        let out = h.take_outbound();
        assert_eq!(out[0].tag, "presence");
        assert_eq!(out[1].tag, "iq");
        assert_eq!(out[2].child("owning").is_some(), true);
        assert_eq!(out[3].child("participating").is_some(), true);
    }

    #[test]
    fn group_message_is_delayed_until_groups_resolved() {
        let mut h = handler();
        let msg = Node::new("message")
            .with_attr("from", "123-456@g.us")
            .with_attr("type", "text")
            .with_attr("t", "5")
            .with_attr("id", "M1")
            .with_child(Node::new("body").with_text("hi"));
        h.dispatch(&msg, 1_700_000_000).unwrap();
        assert_eq!(h.queues.recv_messages.len(), 0);
        assert_eq!(h.queues.recv_messages_delayed.len(), 1);
    }

    #[test]
    fn ping_iq_is_answered() {
        let mut h = handler();
        let ping = Node::new("iq")
            .with_attr("type", "get")
            .with_attr("from", "s.whatsapp.net")
            .with_attr("id", "PING-1")
            .with_attr("xmlns", "urn:xmpp:ping");
        h.dispatch(&ping, 1_700_000_000).unwrap();
        let out = h.take_outbound();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag, "iq");
        assert_eq!(out[0].attr("type"), Some("result"));
        assert_eq!(out[0].attr("id"), Some("PING-1"));
    }

    #[test]
    fn receipt_follows_presence() {
        let mut h = handler();
        h.session.presence = "available".to_string();
        let msg = Node::new("message")
            .with_attr("from", "a@s.whatsapp.net")
            .with_attr("type", "text")
            .with_attr("id", "M2")
            .with_attr("t", "5")
            .with_child(Node::new("body").with_text("x"));
        h.dispatch(&msg, 1_700_000_000).unwrap();
        let out = h.take_outbound();
        let receipt = out.iter().find(|n| n.tag == "receipt").unwrap();
        assert_eq!(receipt.attr("type"), Some("read"));
    }

    #[test]
    fn status_json_unescapes_unicode() {
        let mut h = handler();
        let status_result = Node::new("iq")
            .with_attr("type", "result")
            .with_attr("id", "S1")
            .with_child(
                Node::new("status").with_child(
                    Node::new("user")
                        .with_attr("jid", "a@s.whatsapp.net")
                        .with_text("\"h\\u00e9llo\""),
                ),
            );
        h.dispatch(&status_result, 1_700_000_000).unwrap();
        assert_eq!(
            h.contacts.get("a@s.whatsapp.net").unwrap().status_text.as_deref(),
            Some("héllo")
        );
    }
}
