//! An implementation of the [MD2][1] cryptographic hash algorithm.
//!
//! MD2 is obsolete and broken; this crate exists for compatibility with
//! legacy formats only.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//!
//! // the whole message is hashed in one call
//! let result = md2::digest(b"hello world");
//!
//! // the output is a GenericArray, which in this case is
//! // equivalent to [u8; 16]
//! assert_eq!(result[..], hex!("d9cce882ee690a5c1ce70beff3a78c77"));
//! ```
//!
//! The individual steps of RFC 1319 are exposed as [`pad`],
//! [`append_checksum`] and [`compress_blocks`].
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD2_(hash_function)
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use ::digest;

use alloc::vec::Vec;
use block_padding::Padding;
use core::fmt;
use digest::{consts::U16, core_api::AlgorithmName, generic_array::GenericArray, OutputSizeUser};

mod compress;
mod consts;

use crate::compress::{compress, State};

/// Size of a message block and of the checksum, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One 16-byte message block.
pub type Block = GenericArray<u8, U16>;

/// MD2 digest value.
pub type Output = digest::Output<Md2>;

/// MD2 algorithm marker.
///
/// Carries the output size and name of the algorithm; hashing itself is
/// done by [`digest()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Md2;

impl OutputSizeUser for Md2 {
    type OutputSize = U16;
}

impl AlgorithmName for Md2 {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md2")
    }
}

/// Compute the MD2 digest of `input`.
pub fn digest(input: &[u8]) -> Output {
    let message = pad(input.to_vec());
    let message = append_checksum(message);
    compress_blocks(&message)
}

/// Append `k` bytes of value `k` so the length becomes a multiple of 16.
///
/// `k` is always in `1..=16`: aligned input gets a full block of padding.
pub fn pad(mut message: Vec<u8>) -> Vec<u8> {
    let pos = message.len() % BLOCK_SIZE;
    let mut block = Block::default();
    block_padding::Pkcs7::pad(&mut block, pos);
    message.extend_from_slice(&block[pos..]);
    message
}

/// Append the 16-byte MD2 checksum of a padded message.
///
/// Uses the corrected update from the RFC 1319 errata, where each checksum
/// byte is XORed into rather than overwritten.
///
/// # Panics
///
/// If the length of `message` is not a multiple of [`BLOCK_SIZE`].
pub fn append_checksum(mut message: Vec<u8>) -> Vec<u8> {
    assert_eq!(message.len() % BLOCK_SIZE, 0, "message is not padded");

    let mut checksum = Block::default();
    let mut l = 0u8;
    for block in blocks(&message) {
        for (c, &m) in checksum.iter_mut().zip(block.iter()) {
            *c ^= consts::S[(m ^ l) as usize];
            l = *c;
        }
    }

    message.extend_from_slice(&checksum);
    message
}

/// Run the 18-round mixing transform over every block of `message`.
///
/// `message` must already be padded and checksummed.
///
/// # Panics
///
/// If the length of `message` is not a multiple of [`BLOCK_SIZE`].
pub fn compress_blocks(message: &[u8]) -> Output {
    assert_eq!(message.len() % BLOCK_SIZE, 0, "message is not padded");

    let mut x: State = [0; 3 * BLOCK_SIZE];
    for block in blocks(message) {
        compress(&mut x, block);
    }
    Output::clone_from_slice(&x[..BLOCK_SIZE])
}

fn blocks(message: &[u8]) -> impl Iterator<Item = &Block> {
    message.chunks_exact(BLOCK_SIZE).map(Block::from_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use hex_literal::hex;

    #[test]
    fn pad_lengths() {
        for n in 0..=48 {
            let padded = pad(vec![0xFF; n]);
            let k = BLOCK_SIZE - n % BLOCK_SIZE;
            assert_eq!(padded.len(), n + k);
            assert!(padded[n..].iter().all(|&b| b as usize == k));
        }
    }

    #[test]
    fn pad_aligned_input_gets_full_block() {
        let padded = pad(b"16-characters---".to_vec());
        assert_eq!(padded.len(), 32);
        assert_eq!(padded[16..], [16u8; 16]);
    }

    #[test]
    fn pad_empty() {
        assert_eq!(pad(Vec::new()), vec![16u8; 16]);
    }

    #[test]
    fn checksum_appends_one_block() {
        let message = append_checksum(pad(b"abc".to_vec()));
        assert_eq!(message.len(), 32);
        assert_eq!(message[..3], *b"abc");
    }

    /// Checksum as literally written in RFC 1319, before the errata.
    fn append_uncorrected_checksum(mut message: Vec<u8>) -> Vec<u8> {
        let mut checksum = [0u8; BLOCK_SIZE];
        let mut l = 0u8;
        for block in message.chunks_exact(BLOCK_SIZE) {
            for (c, &m) in checksum.iter_mut().zip(block) {
                *c = consts::S[(m ^ l) as usize];
                l = *c;
            }
        }
        message.extend_from_slice(&checksum);
        message
    }

    #[test]
    fn checksum_errata_applies_past_one_block() {
        let input = b"16-characters---";
        let uncorrected = compress_blocks(&append_uncorrected_checksum(pad(input.to_vec())));
        assert_eq!(uncorrected[..], hex!("ced9802c7c67537ed9d4767903a5d74e"));
        assert_eq!(digest(input)[..], hex!("e8796ac22354cadc1642550d87eb2e0b"));
    }

    #[test]
    fn checksum_errata_is_invisible_on_one_block() {
        let input = b"message digest";
        let uncorrected = compress_blocks(&append_uncorrected_checksum(pad(input.to_vec())));
        assert_eq!(uncorrected, digest(input));
    }

    #[test]
    #[should_panic(expected = "message is not padded")]
    fn checksum_rejects_unpadded_message() {
        append_checksum(b"abc".to_vec());
    }

    #[test]
    #[should_panic(expected = "message is not padded")]
    fn compress_rejects_unaligned_message() {
        compress_blocks(&[0u8; 17]);
    }

    #[test]
    fn substitution_table_is_permutation() {
        let mut seen = [false; 256];
        for &v in consts::S.iter() {
            assert!(!seen[v as usize], "duplicate value {}", v);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn stages_compose_to_digest() {
        let input = b"abcdefghijklmnopqrstuvwxyz";
        let staged = compress_blocks(&append_checksum(pad(input.to_vec())));
        assert_eq!(staged, digest(input));
    }
}
