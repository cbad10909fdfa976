//======================================================================
// src/cofb.rs
// The COFB authenticated-encryption mode over GIFT-128.
//======================================================================

use crate::consts::{BLOCK_BYTES, ROUNDS};
use crate::gift::State;
use crate::mask;
use aead::{
    consts::{U0, U16},
    generic_array::GenericArray,
    AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The GIFT-COFB authenticated cipher.
///
/// Carries a 128-bit key; every call derives the per-message state from the
/// key and a 128-bit nonce, so one instance can encrypt any number of
/// messages as long as nonces never repeat.
#[derive(Clone, ZeroizeOnDrop)]
pub struct GiftCofb {
    key: [u8; BLOCK_BYTES],
}

impl KeySizeUser for GiftCofb {
    type KeySize = U16;
}

impl KeyInit for GiftCofb {
    fn new(key: &Key<Self>) -> Self {
        let mut k = [0u8; BLOCK_BYTES];
        k.copy_from_slice(key.as_slice());
        Self { key: k }
    }
}

impl AeadCore for GiftCofb {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for GiftCofb {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let (mut y, mut l) = self.init_state(nonce);

        self.absorb_data(&mut y, &mut l, associated_data, buffer.is_empty());

        if !buffer.is_empty() {
            let (head, tail) = buffer.split_at_mut(last_block_offset(buffer.len()));

            for chunk in head.chunks_exact_mut(BLOCK_BYTES) {
                l = mask::mul_alpha(l);
                let plain = load_block(chunk);
                store_block(xor_words(plain, y), chunk);
                self.advance(&mut y, plain, l);
            }

            l = final_mask(l, tail.len() == BLOCK_BYTES);
            let plain = load_padded_block(tail);
            store_trunc(xor_words(plain, y), tail);
            self.advance(&mut y, plain, l);
        }

        let tag = extract_tag(&y);
        y.zeroize();
        l.zeroize();

        Ok(GenericArray::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let (mut y, mut l) = self.init_state(nonce);

        self.absorb_data(&mut y, &mut l, associated_data, buffer.is_empty());

        if !buffer.is_empty() {
            let (head, tail) = buffer.split_at_mut(last_block_offset(buffer.len()));

            for chunk in head.chunks_exact_mut(BLOCK_BYTES) {
                l = mask::mul_alpha(l);
                let plain = xor_words(load_block(chunk), y);
                store_block(plain, chunk);
                self.advance(&mut y, plain, l);
            }

            l = final_mask(l, tail.len() == BLOCK_BYTES);
            store_trunc(xor_words(load_padded_block(tail), y), tail);
            // The state advances over the recovered plaintext, re-padded the
            // same way the encryption side padded its final block.
            let plain = load_padded_block(tail);
            self.advance(&mut y, plain, l);
        }

        let computed = extract_tag(&y);
        y.zeroize();
        l.zeroize();

        // Constant-time tag comparison.
        let diff = tag
            .iter()
            .zip(computed.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        if diff == 0 {
            Ok(())
        } else {
            Err(Error)
        }
    }
}

impl GiftCofb {
    /// Derives the initial (Y, L) pair: Y is the nonce encrypted under the
    /// key, L is the top 64 bits of Y.
    fn init_state(&self, nonce: &[u8]) -> ([u32; 4], [u32; 2]) {
        let mut st = State::new(nonce, &self.key);
        st.permute::<ROUNDS>();

        let y = st.cipher;
        (y, [y[0], y[1]])
    }

    /// Absorbs the associated data, including the mandatory block processed
    /// when the data is empty. The final block's mask separates the four
    /// (full/padded data, present/absent message) domains.
    fn absorb_data(&self, y: &mut [u32; 4], l: &mut [u32; 2], data: &[u8], msg_is_empty: bool) {
        let (head, tail) = data.split_at(last_block_offset(data.len()));

        for chunk in head.chunks_exact(BLOCK_BYTES) {
            *l = mask::mul_alpha(*l);
            self.advance(y, load_block(chunk), *l);
        }

        *l = final_mask(*l, tail.len() == BLOCK_BYTES);
        if msg_is_empty {
            *l = mask::mul_alpha_plus_1(mask::mul_alpha_plus_1(*l));
        }
        self.advance(y, load_padded_block(tail), *l);
    }

    /// One COFB state update: mask the block with G(Y) and L, run the block
    /// cipher over it under a fresh key schedule, and replace Y.
    fn advance(&self, y: &mut [u32; 4], block: [u32; 4], l: [u32; 2]) {
        let g = mask::feedback(*y);

        let mut masked = block;
        masked[0] ^= g[0] ^ l[0];
        masked[1] ^= g[1] ^ l[1];
        masked[2] ^= g[2];
        masked[3] ^= g[3];

        let mut st = State::from_words(masked, &self.key);
        st.permute::<ROUNDS>();
        *y = st.cipher;
    }
}

/// Offset of the final block: the trailing partial block, or the whole last
/// block when the length is a positive multiple of the block size.
fn last_block_offset(len: usize) -> usize {
    if len > 0 && len % BLOCK_BYTES == 0 {
        len - BLOCK_BYTES
    } else {
        len - len % BLOCK_BYTES
    }
}

/// Final-block mask separation: one α+1 multiplication for a full block,
/// two when padding was applied (or the input was empty).
fn final_mask(l: [u32; 2], full: bool) -> [u32; 2] {
    let once = mask::mul_alpha_plus_1(l);
    if full {
        once
    } else {
        mask::mul_alpha_plus_1(once)
    }
}

fn load_block(bytes: &[u8]) -> [u32; 4] {
    let mut blk = [0u32; 4];
    for (w, chunk) in blk.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    blk
}

/// Loads up to one block, zero-extended, with the 0x80 marker after the
/// last data byte whenever the block is short.
fn load_padded_block(bytes: &[u8]) -> [u32; 4] {
    debug_assert!(bytes.len() <= BLOCK_BYTES);

    let mut buf = [0u8; BLOCK_BYTES];
    buf[..bytes.len()].copy_from_slice(bytes);
    if bytes.len() < BLOCK_BYTES {
        buf[bytes.len()] = 0x80;
    }
    load_block(&buf)
}

fn store_block(words: [u32; 4], out: &mut [u8]) {
    for (w, chunk) in words.iter().zip(out.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&w.to_be_bytes());
    }
}

/// Writes the leading `out.len()` bytes of a block, big-endian.
fn store_trunc(words: [u32; 4], out: &mut [u8]) {
    for (i, b) in out.iter_mut().enumerate() {
        *b = (words[i >> 2] >> ((3 - (i & 3)) * 8)) as u8;
    }
}

fn xor_words(a: [u32; 4], b: [u32; 4]) -> [u32; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

fn extract_tag(y: &[u32; 4]) -> [u8; BLOCK_BYTES] {
    let mut tag = [0u8; BLOCK_BYTES];
    store_block(*y, &mut tag);
    tag
}
