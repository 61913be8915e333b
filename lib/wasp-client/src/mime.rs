// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! MIME type detection for outbound uploads: a magic-byte sniff first
//! (cheap, and correct even when the extension lies), falling back to the
//! file extension via `mime_guess`.

const JPEG: [u8; 3] = [0xFF, 0xD8, 0xFF];
const PNG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const GIF87: &[u8] = b"GIF87a";
const GIF89: &[u8] = b"GIF89a";

/// Detects the MIME type of `data`, preferring magic bytes over `path`'s
/// extension.
pub fn sniff(path: &str, data: &[u8]) -> String {
    if data.len() >= 3 && data[..3] == JPEG {
        return "image/jpeg".to_string();
    }
    if data.len() >= 8 && data[..8] == PNG {
        return "image/png".to_string();
    }
    if data.starts_with(GIF87) || data.starts_with(GIF89) {
        return "image/gif".to_string();
    }

    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_jpeg_by_magic() {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend_from_slice(&[0u8; 16]);
        assert_eq!(sniff("upload.bin", &data), "image/jpeg");
    }

    #[test]
    fn falls_back_to_extension() {
        assert_eq!(sniff("clip.mp4", b"not really a video"), "video/mp4");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(sniff("mystery", b"???"), "application/octet-stream");
    }
}
