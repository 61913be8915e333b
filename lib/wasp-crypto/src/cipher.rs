// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! RC4 stream ciphers and the per-frame HMAC-SHA-1 tag that rides along with
//! them. Each direction of the connection gets its own [`DirectionalCipher`];
//! the two never share state.
use crate::Error;
use hmac::{Hmac, Mac};
use rc4::{consts::U20, KeyInit, Rc4, StreamCipher};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Number of keystream bytes discarded before the cipher is considered warmed up.
const DROP_BYTES: usize = 768;

/// A single direction's RC4 keystream plus its MAC key and frame counter.
pub struct DirectionalCipher {
    rc4: Rc4<U20>,
    mac_key: [u8; 20],
    seq: u32,
}

impl DirectionalCipher {
    /// Builds a cipher from a 20-byte key, discarding the first
    /// [`DROP_BYTES`] bytes of keystream as the protocol requires.
    pub fn new(cipher_key: [u8; 20], mac_key: [u8; 20]) -> Self {
        let mut rc4 = Rc4::<U20>::new(&cipher_key.into());
        let mut drop = [0u8; DROP_BYTES];
        rc4.apply_keystream(&mut drop);
        Self {
            rc4,
            mac_key,
            seq: 0,
        }
    }

    /// XORs `payload` with the keystream in place and appends a 4-byte
    /// HMAC-SHA-1 tag computed over `seq || ciphertext`. Advances `seq`.
    pub fn encrypt(&mut self, payload: &mut Vec<u8>) {
        self.rc4.apply_keystream(payload);

        let mut mac = HmacSha1::new_from_slice(&self.mac_key).expect("hmac accepts any key size");
        mac.update(&self.seq.to_be_bytes());
        mac.update(payload);
        let tag = mac.finalize().into_bytes();
        payload.extend_from_slice(&tag[..4]);

        self.seq = self.seq.wrapping_add(1);
    }

    /// Verifies and strips the trailing 4-byte MAC, then XORs the remainder
    /// with the keystream in place, returning the plaintext length.
    /// Advances `seq` only on success.
    pub fn decrypt(&mut self, payload: &mut Vec<u8>) -> Result<(), Error> {
        if payload.len() < 4 {
            return Err(Error::MacMismatch);
        }
        let split = payload.len() - 4;
        let (body, tag) = payload.split_at(split);

        let mut mac = HmacSha1::new_from_slice(&self.mac_key).expect("hmac accepts any key size");
        mac.update(&self.seq.to_be_bytes());
        mac.update(body);
        let expected = mac.finalize().into_bytes();
        if &expected[..4] != tag {
            return Err(Error::MacMismatch);
        }

        payload.truncate(split);
        self.rc4.apply_keystream(payload);
        self.seq = self.seq.wrapping_add(1);
        Ok(())
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }
}

/// The pair of independent ciphers that guard a single connection: one for
/// data flowing out to the server, one for data coming back in.
pub struct StreamCipherPair {
    pub outbound: DirectionalCipher,
    pub inbound: DirectionalCipher,
}

impl StreamCipherPair {
    /// `keys` follows the key-derivation ordering:
    /// `[out_cipher, out_mac, in_cipher, in_mac]`.
    pub fn new(keys: [[u8; 20]; 4]) -> Self {
        Self {
            outbound: DirectionalCipher::new(keys[0], keys[1]),
            inbound: DirectionalCipher::new(keys[2], keys[3]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_then_decrypt_roundtrips() {
        let keys = [[1u8; 20], [2u8; 20], [1u8; 20], [2u8; 20]];
        let mut out = DirectionalCipher::new(keys[0], keys[1]);
        let mut inb = DirectionalCipher::new(keys[2], keys[3]);

        let original = b"<iq type='get'/>".to_vec();
        let mut buf = original.clone();
        out.encrypt(&mut buf);
        assert_eq!(buf.len(), original.len() + 4);

        inb.decrypt(&mut buf).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn tampered_ciphertext_fails_mac() {
        let keys = [[9u8; 20], [8u8; 20], [9u8; 20], [8u8; 20]];
        let mut out = DirectionalCipher::new(keys[0], keys[1]);
        let mut inb = DirectionalCipher::new(keys[2], keys[3]);

        let mut buf = b"hello".to_vec();
        out.encrypt(&mut buf);
        *buf.first_mut().unwrap() ^= 0xff;

        assert!(matches!(inb.decrypt(&mut buf), Err(Error::MacMismatch)));
    }

    #[test]
    fn seq_advances_only_on_success() {
        let keys = [[3u8; 20], [4u8; 20], [3u8; 20], [4u8; 20]];
        let mut out = DirectionalCipher::new(keys[0], keys[1]);
        let mut inb = DirectionalCipher::new(keys[2], keys[3]);

        let mut buf = b"abc".to_vec();
        out.encrypt(&mut buf);
        assert_eq!(inb.seq(), 0);
        inb.decrypt(&mut buf).unwrap();
        assert_eq!(inb.seq(), 1);
    }
}
