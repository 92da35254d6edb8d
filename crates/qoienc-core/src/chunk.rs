//! Chunk grammar of the encoded stream.
//!
//! The top two bits of a chunk's first byte select index/diff/luma/run,
//! except for the two full-byte literal tags `0xFE` and `0xFF`.

use crate::pixel::Pixel;

pub const TAG_INDEX: u8 = 0b0000_0000;
pub const TAG_DIFF: u8 = 0b0100_0000;
pub const TAG_LUMA: u8 = 0b1000_0000;
pub const TAG_RUN: u8 = 0b1100_0000;
pub const TAG_RGB: u8 = 0xFE;
pub const TAG_RGBA: u8 = 0xFF;

/// Mask selecting the 2-bit tag.
pub const TAG_MASK: u8 = 0b1100_0000;

/// Longest run a single run chunk can carry.
pub const MAX_RUN: u8 = 62;

/// Trailing bytes that terminate every stream.
pub const END_MARKER: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];

/// One chunk of the stream. Field values are stored already biased, exactly
/// as they are packed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// Color-cache slot, 0..=63.
    Index(u8),
    /// Per-channel deltas biased by 2, each 0..=3.
    Diff { dr: u8, dg: u8, db: u8 },
    /// Green delta biased by 32 (0..=63) and green-relative red/blue deltas
    /// biased by 8 (0..=15).
    Luma { dg: u8, dr_dg: u8, db_dg: u8 },
    /// Run length minus one, 0..=61.
    Run(u8),
    /// Literal color, alpha unchanged.
    Rgb(Pixel),
    /// Literal color and alpha.
    Rgba(Pixel),
}

impl Chunk {
    /// Run chunk for a run of `length` pixels (1..=62).
    #[inline]
    pub fn run(length: u8) -> Self {
        debug_assert!((1..=MAX_RUN).contains(&length));
        Chunk::Run(length - 1)
    }

    /// Diff chunk, if all three signed deltas fall in [-2, 1].
    #[inline]
    pub fn diff(dr: i8, dg: i8, db: i8) -> Option<Self> {
        let fits = |d: i8| (-2..=1).contains(&d);
        if fits(dr) && fits(dg) && fits(db) {
            Some(Chunk::Diff {
                dr: (dr + 2) as u8,
                dg: (dg + 2) as u8,
                db: (db + 2) as u8,
            })
        } else {
            None
        }
    }

    /// Luma chunk, if `dg` falls in [-32, 31] and the green-relative red and
    /// blue deltas fall in [-8, 7].
    #[inline]
    pub fn luma(dr: i8, dg: i8, db: i8) -> Option<Self> {
        // Widen so the green-relative deltas cannot overflow.
        let (dr, dg, db) = (dr as i16, dg as i16, db as i16);
        let dr_dg = dr - dg;
        let db_dg = db - dg;
        let fits = |d: i16| (-8..=7).contains(&d);
        if (-32..=31).contains(&dg) && fits(dr_dg) && fits(db_dg) {
            Some(Chunk::Luma {
                dg: (dg + 32) as u8,
                dr_dg: (dr_dg + 8) as u8,
                db_dg: (db_dg + 8) as u8,
            })
        } else {
            None
        }
    }

    /// Encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        match self {
            Chunk::Index(_) | Chunk::Diff { .. } | Chunk::Run(_) => 1,
            Chunk::Luma { .. } => 2,
            Chunk::Rgb(_) => 4,
            Chunk::Rgba(_) => 5,
        }
    }

    /// Append the chunk's bytes to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match *self {
            Chunk::Index(index) => out.push(TAG_INDEX | (index & 0b0011_1111)),
            Chunk::Diff { dr, dg, db } => {
                out.push(TAG_DIFF | ((dr & 0b11) << 4) | ((dg & 0b11) << 2) | (db & 0b11));
            }
            Chunk::Luma { dg, dr_dg, db_dg } => {
                out.push(TAG_LUMA | (dg & 0b0011_1111));
                out.push(((dr_dg & 0x0F) << 4) | (db_dg & 0x0F));
            }
            Chunk::Run(run) => out.push(TAG_RUN | (run & 0b0011_1111)),
            Chunk::Rgb(p) => out.extend_from_slice(&[TAG_RGB, p.r, p.g, p.b]),
            Chunk::Rgba(p) => out.extend_from_slice(&[TAG_RGBA, p.r, p.g, p.b, p.a]),
        }
    }
}
