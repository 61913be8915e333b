// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Audio,
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    Requested,
    UrlAssigned,
    Posting,
    Done,
}

/// A media file working its way through the upload side channel: request →
/// url assignment → POST → completion, or short-circuited by a server
/// `duplicate` response.
#[derive(Clone, Debug)]
pub struct PendingUpload {
    pub request_id: String,
    pub recipient: String,
    pub sender: String,
    pub local_path: String,
    pub sha256_b64: String,
    pub media_type: MediaType,
    pub total_size: u64,
    pub upload_url: Option<String>,
    pub host: Option<String>,
    pub state: UploadState,
}

impl PendingUpload {
    pub fn new(
        request_id: impl Into<String>,
        recipient: impl Into<String>,
        sender: impl Into<String>,
        local_path: impl Into<String>,
        sha256_b64: impl Into<String>,
        media_type: MediaType,
        total_size: u64,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            recipient: recipient.into(),
            sender: sender.into(),
            local_path: local_path.into(),
            sha256_b64: sha256_b64.into(),
            media_type,
            total_size,
            upload_url: None,
            host: None,
            state: UploadState::Requested,
        }
    }

    pub fn assign_url(&mut self, url: impl Into<String>, host: impl Into<String>) {
        self.upload_url = Some(url.into());
        self.host = Some(host.into());
        self.state = UploadState::UrlAssigned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_url_transitions_state() {
        let mut u = PendingUpload::new("iq1", "b@s", "a@s", "/tmp/f.jpg", "HASH==", MediaType::Image, 1024);
        assert_eq!(u.state, UploadState::Requested);
        u.assign_url("https://u/f", "u");
        assert_eq!(u.state, UploadState::UrlAssigned);
        assert_eq!(u.host.as_deref(), Some("u"));
    }
}
