//! Weighted prize selection.
//!
//! The draw is a cumulative-weight walk: pick `r` uniformly in `[0, total)`,
//! subtract each weight in table order and stop at the first prize where the
//! remainder drops to `<= 0`. Rounding at the upper boundary can leave the
//! remainder positive after the last prize; that case resolves to the last
//! prize rather than an error.

use crate::prize::{Prize, PrizeTable};

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// xorshift64* generator. Seeded from the platform RNG (`crypto.getRandomValues`
/// in the browser) by [`OsRandom::new`], or from a fixed seed for replays.
#[derive(Clone, Debug)]
pub struct OsRandom {
    state: u64,
}

impl OsRandom {
    pub fn new() -> Result<Self, getrandom::Error> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;
        Ok(Self::from_seed(u64::from_le_bytes(buf)))
    }

    pub fn from_seed(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl RandomSource for OsRandom {
    fn next_unit(&mut self) -> f64 {
        // Top 53 bits -> [0, 1) with full f64 mantissa precision.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Walk the table for a fixed `r` and return the chosen index.
pub fn draw_at(table: &PrizeTable, r: f64) -> usize {
    let mut remainder = r;
    for (index, prize) in table.iter().enumerate() {
        remainder -= prize.weight();
        if remainder <= 0.0 {
            return index;
        }
    }
    table.len() - 1
}

/// Draw an index with probability `weight_i / total`.
pub fn select_index<R: RandomSource + ?Sized>(table: &PrizeTable, rng: &mut R) -> usize {
    let r = rng.next_unit() * table.total_weight();
    let index = draw_at(table, r);
    log::debug!("weighted draw r={r:.4} total={} -> #{index}", table.total_weight());
    index
}

/// Draw a prize with probability `weight_i / total`.
pub fn select_prize<'t, R: RandomSource + ?Sized>(table: &'t PrizeTable, rng: &mut R) -> &'t Prize {
    let index = select_index(table, rng);
    &table.as_slice()[index]
}
