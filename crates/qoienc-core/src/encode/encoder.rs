//! Per-call encoder state machine.
//!
//! Every encode owns a fresh [`EncoderState`]: previous pixel, color cache and
//! pending run length are carried from one pixel to the next and never shared
//! between calls.

use crate::chunk::{Chunk, MAX_RUN};
use crate::pixel::{Pixel, CACHE_SIZE};

/// Mutable state carried between consecutive pixels.
pub(crate) struct EncoderState {
    previous: Pixel,
    cache: [Pixel; CACHE_SIZE],
    run: u8,
}

impl EncoderState {
    pub fn new() -> Self {
        Self {
            previous: Pixel::rgb(0, 0, 0),
            cache: [Pixel::default(); CACHE_SIZE],
            run: 0,
        }
    }

    /// Encode one pixel, appending any chunks it completes to `out`.
    ///
    /// A pixel that continues a run emits nothing until the run is flushed.
    pub fn push(&mut self, pixel: Pixel, out: &mut Vec<u8>) {
        if pixel == self.previous {
            self.run += 1;
            if self.run == MAX_RUN {
                self.flush_run(out);
            }
            return;
        }

        self.flush_run(out);

        let index = pixel.cache_index();
        if self.cache[index] == pixel {
            Chunk::Index(index as u8).write_to(out);
            self.previous = pixel;
            return;
        }
        self.cache[index] = pixel;

        self.select_chunk(pixel).write_to(out);
        self.previous = pixel;
    }

    /// Flush the pending run, if any. Called once more after the last pixel.
    pub fn flush_run(&mut self, out: &mut Vec<u8>) {
        if self.run > 0 {
            Chunk::run(self.run).write_to(out);
            self.run = 0;
        }
    }

    /// Choose the most compact chunk relative to the previous pixel.
    fn select_chunk(&self, pixel: Pixel) -> Chunk {
        let prev = self.previous;
        if pixel.a != prev.a {
            return Chunk::Rgba(pixel);
        }

        let dr = pixel.r.wrapping_sub(prev.r) as i8;
        let dg = pixel.g.wrapping_sub(prev.g) as i8;
        let db = pixel.b.wrapping_sub(prev.b) as i8;

        Chunk::diff(dr, dg, db)
            .or_else(|| Chunk::luma(dr, dg, db))
            .unwrap_or(Chunk::Rgb(pixel))
    }
}
