// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! The 3-byte frame header `(flags:1, length:2)` that wraps every
//! serialized tree, and the encrypted/plaintext switch that rides on its
//! top flag bit.
use crate::codec;
use crate::errors::Error;
use crate::node::Node;
use wasp_crypto::{RingBuffer, StreamCipherPair};

/// High nibble of the flag byte signalling an encrypted payload.
const ENCRYPTED_FLAG: u8 = 0x80;

/// Packs and unpacks frames for a single connection, switching from
/// plaintext to encrypted once `install_ciphers` has been called.
#[derive(Default)]
pub struct FrameCodec {
    ciphers: Option<StreamCipherPair>,
}

impl FrameCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install_ciphers(&mut self, ciphers: StreamCipherPair) {
        self.ciphers = Some(ciphers);
    }

    pub fn has_ciphers(&self) -> bool {
        self.ciphers.is_some()
    }

    /// Serializes `node`, encrypting it if ciphers are installed, and
    /// appends the framed bytes to `out`.
    pub fn write(&mut self, node: &Node, out: &mut RingBuffer<u8>) -> Result<(), Error> {
        let mut payload = Vec::new();
        codec::encode(node, &mut payload)?;

        let mut flag = 0u8;
        if let Some(ciphers) = &mut self.ciphers {
            ciphers.outbound.encrypt(&mut payload);
            flag = ENCRYPTED_FLAG;
        }

        if payload.len() > u16::MAX as usize {
            return Err(Error::Malformed("framed payload exceeds 65535 bytes"));
        }

        out.push(flag);
        out.push((payload.len() >> 8) as u8);
        out.push(payload.len() as u8);
        out.extend(payload);
        Ok(())
    }

    /// Attempts to read one frame from the front of `buf`.
    ///
    /// On success, the consumed bytes are skipped off the front of `buf`
    /// and the decoded node is returned. On [`Error::Incomplete`], `buf` is
    /// left untouched so the caller can retry once more bytes arrive. Any
    /// other error means the connection is no longer trustworthy.
    pub fn try_read(&mut self, buf: &mut RingBuffer<u8>) -> Result<Option<Node>, Error> {
        if buf.len() < 3 {
            return Ok(None);
        }

        let flag = buf[0];
        let length = ((buf[1] as usize) << 8) | (buf[2] as usize);
        if length > buf.len() - 3 {
            return Ok(None);
        }

        let mut payload = buf[3..3 + length].to_vec();
        let encrypted = flag & ENCRYPTED_FLAG != 0;

        let node = if encrypted {
            let ciphers = self.ciphers.as_mut().ok_or(Error::Malformed(
                "received an encrypted frame before ciphers were installed",
            ))?;
            ciphers.inbound.decrypt(&mut payload)?;
            let (node, _) = codec::decode(&payload)?;
            node
        } else {
            if self.has_ciphers() {
                return Err(Error::UnexpectedPlaintext);
            }
            let (node, _) = codec::decode(&payload)?;
            node
        };

        buf.skip(3 + length);
        buf.reclaim_leading();
        Ok(Some(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasp_crypto::derive_keys;

    fn buf() -> RingBuffer<u8> {
        RingBuffer::with_capacity(64, 0)
    }

    fn ring(bytes: &[u8]) -> RingBuffer<u8> {
        let mut b = buf();
        b.extend(bytes.iter().copied());
        b
    }

    fn paired_codecs() -> (FrameCodec, FrameCodec) {
        let keys = derive_keys(&[1u8; 20], b"nonce-nonce-nonce-nonce");
        // Swap cipher/mac key halves so one side's outbound matches the
        // other's inbound, mirroring a real client/server key schedule.
        let mut writer = FrameCodec::new();
        writer.install_ciphers(StreamCipherPair::new(keys));
        let mut reader = FrameCodec::new();
        reader.install_ciphers(StreamCipherPair::new([keys[2], keys[3], keys[0], keys[1]]));
        (writer, reader)
    }

    #[test]
    fn plaintext_round_trips_before_ciphers() {
        let mut codec = FrameCodec::new();
        let mut buf = buf();
        let node = Node::new("start").with_attr("v", "1");
        codec.write(&node, &mut buf).unwrap();

        let decoded = codec.try_read(&mut buf).unwrap().unwrap();
        assert_eq!(decoded.tag, "start");
        assert!(buf.is_empty());
    }

    #[test]
    fn encrypted_round_trips() {
        let (mut writer, mut reader) = paired_codecs();
        let mut buf = buf();
        let node = Node::new("iq").with_attr("type", "get").with_attr("id", "1");
        writer.write(&node, &mut buf).unwrap();

        let decoded = reader.try_read(&mut buf).unwrap().unwrap();
        assert_eq!(decoded, node);
        assert!(buf.is_empty());
    }

    #[test]
    fn short_buffer_is_not_consumed() {
        let mut codec = FrameCodec::new();
        let mut buf = ring(&[0u8, 1]);
        assert_eq!(codec.try_read(&mut buf).unwrap(), None);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn partial_frame_is_not_consumed() {
        let mut codec = FrameCodec::new();
        let mut full = buf();
        codec
            .write(&Node::new("iq").with_attr("type", "get"), &mut full)
            .unwrap();
        let mut raw = full.as_ref().to_vec();
        raw.pop();

        let mut buf = ring(&raw);
        let before = buf.as_ref().to_vec();
        assert_eq!(codec.try_read(&mut buf).unwrap(), None);
        assert_eq!(buf.as_ref(), &before[..]);
    }

    #[test]
    fn plaintext_after_ciphers_is_rejected() {
        let (_writer, mut reader) = paired_codecs();
        let mut plain_writer = FrameCodec::new();
        let mut buf = buf();
        plain_writer
            .write(&Node::new("iq").with_attr("type", "get"), &mut buf)
            .unwrap();

        assert_eq!(reader.try_read(&mut buf), Err(Error::UnexpectedPlaintext));
    }
}
