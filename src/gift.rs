//======================================================================
// src/gift.rs
// The GIFT-128 block cipher state and permutation.
//======================================================================

use crate::backends;
use crate::consts::{RC, ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// GIFT-128 block cipher state.
///
/// `cipher` holds the 128-bit block as four big-endian 32-bit words (word 0
/// carries the most significant bits); `key` holds the 128-bit key state as
/// eight big-endian 16-bit words. Both evolve together under [`State::permute`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct State {
    pub(crate) cipher: [u32; 4],
    key: [u16; 8],
}

impl State {
    /// Loads a 16-byte block and a 16-byte key into a fresh cipher state.
    pub(crate) fn new(block: &[u8], key: &[u8]) -> Self {
        let mut cipher = [0u32; 4];
        for (w, chunk) in cipher.iter_mut().zip(block.chunks_exact(4)) {
            *w = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        Self {
            cipher,
            key: load_key(key),
        }
    }

    /// Re-keys from a block that is already assembled as four words. The
    /// COFB mode feeds each masked feedback block through this path.
    pub(crate) fn from_words(block: [u32; 4], key: &[u8]) -> Self {
        Self {
            cipher: block,
            key: load_key(key),
        }
    }

    /// Runs `R` rounds of the GIFT-128 permutation over the cipher and key
    /// state. Production callers use `R = ROUNDS`; smaller values exist only
    /// for round-reduced analysis.
    pub(crate) fn permute<const R: usize>(&mut self) {
        debug_assert!(R <= ROUNDS);
        for r in 0..R {
            self.sub_cells();
            backends::perm_bits(&mut self.cipher);
            self.add_round_key(r);
            self.update_key();
        }
    }

    /// The GIFT S-box, applied bitsliced across the four cipher words. The
    /// words are the four bit-planes of 32 nibbles, so the whole layer is a
    /// short branch-free sequence of word operations.
    fn sub_cells(&mut self) {
        let c = &mut self.cipher;
        c[1] ^= c[0] & c[2];
        c[0] ^= c[1] & c[3];
        c[2] ^= c[0] | c[1];
        c[3] ^= c[2];
        c[1] ^= c[3];
        c[3] = !c[3];
        c[2] ^= c[0] & c[1];
        c.swap(0, 3);
    }

    /// XORs the round key words U, V (drawn from the key state) and the
    /// round constant into the cipher state.
    fn add_round_key(&mut self, r: usize) {
        let u = (u32::from(self.key[2]) << 16) | u32::from(self.key[3]);
        let v = (u32::from(self.key[6]) << 16) | u32::from(self.key[7]);

        self.cipher[2] ^= u;
        self.cipher[1] ^= v;
        self.cipher[3] ^= (1 << 31) | RC[r];
    }

    /// Key state update: rotate the two low words and shift the state right
    /// by two 16-bit positions.
    fn update_key(&mut self) {
        let t0 = self.key[6].rotate_right(2);
        let t1 = self.key[7].rotate_right(12);

        self.key.copy_within(0..6, 2);
        self.key[0] = t0;
        self.key[1] = t1;
    }
}

fn load_key(key: &[u8]) -> [u16; 8] {
    let mut k = [0u16; 8];
    for (w, chunk) in k.iter_mut().zip(key.chunks_exact(2)) {
        *w = u16::from_be_bytes(chunk.try_into().unwrap());
    }
    k
}
