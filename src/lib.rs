//======================================================================
// src/lib.rs
// Crate entry point. Declares modules and the public API surface.
//======================================================================
#![no_std]
#![cfg_attr(feature = "simd", feature(portable_simd))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub use aead; // Re-export aead crate for downstream users

// --- Module declarations ---
mod backends;
mod consts;
mod gift;
mod mask;

mod cofb;
pub use cofb::GiftCofb;
