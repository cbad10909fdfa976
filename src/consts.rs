//======================================================================
// src/consts.rs
// GIFT-128 round constants and bit-permutation tables.
//======================================================================

/// GIFT-128 is a 40-round iterative block cipher.
pub const ROUNDS: usize = 40;

/// Block, key, nonce and tag are all 128 bits wide.
pub const BLOCK_BYTES: usize = 16;

/// Round constants, generated by the 6-bit affine LFSR of the GIFT-128
/// specification. One constant is injected per round into cipher word 3,
/// alongside the fixed bit 31 marker.
pub const RC: [u32; ROUNDS] = [
    0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3E, 0x3D, 0x3B, 0x37, 0x2F,
    0x1E, 0x3C, 0x39, 0x33, 0x27, 0x0E, 0x1D, 0x3A, 0x35, 0x2B,
    0x16, 0x2C, 0x18, 0x30, 0x21, 0x02, 0x05, 0x0B, 0x17, 0x2E,
    0x1C, 0x38, 0x31, 0x23, 0x06, 0x0D, 0x1B, 0x36, 0x2D, 0x1A,
];

/// Per-word 32-bit bit permutations (Table 2.2 of the GIFT-128
/// specification). Bit `i` of the permuted word is read from bit
/// `BIT_PERM[w][i]` of the source word.
pub const BIT_PERM: [[u32; 32]; 4] = [
    [
        0, 4, 8, 12, 16, 20, 24, 28, 3, 7, 11, 15, 19, 23, 27, 31,
        2, 6, 10, 14, 18, 22, 26, 30, 1, 5, 9, 13, 17, 21, 25, 29,
    ],
    [
        1, 5, 9, 13, 17, 21, 25, 29, 0, 4, 8, 12, 16, 20, 24, 28,
        3, 7, 11, 15, 19, 23, 27, 31, 2, 6, 10, 14, 18, 22, 26, 30,
    ],
    [
        2, 6, 10, 14, 18, 22, 26, 30, 1, 5, 9, 13, 17, 21, 25, 29,
        0, 4, 8, 12, 16, 20, 24, 28, 3, 7, 11, 15, 19, 23, 27, 31,
    ],
    [
        3, 7, 11, 15, 19, 23, 27, 31, 2, 6, 10, 14, 18, 22, 26, 30,
        1, 5, 9, 13, 17, 21, 25, 29, 0, 4, 8, 12, 16, 20, 24, 28,
    ],
];
