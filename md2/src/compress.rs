use crate::{consts::S, Block, BLOCK_SIZE};

/// Number of mixing rounds applied to every block.
const ROUNDS: u8 = 18;

/// Mixing buffer: block copy, derived XOR region and running digest state.
pub(crate) type State = [u8; 3 * BLOCK_SIZE];

/// Fold one 16-byte block into the mixing buffer.
///
/// `x[0..16]` carries the running digest across calls; the rolling value
/// `t` starts from zero on every block.
#[allow(clippy::needless_range_loop)]
pub(crate) fn compress(x: &mut State, block: &Block) {
    for j in 0..BLOCK_SIZE {
        x[16 + j] = block[j];
        x[32 + j] = x[16 + j] ^ x[j];
    }

    let mut t = 0u8;
    for round in 0..ROUNDS {
        for k in 0..48 {
            x[k] ^= S[t as usize];
            t = x[k];
        }
        t = t.wrapping_add(round);
    }
}
