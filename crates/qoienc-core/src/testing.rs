//! Test support: a reference decoder for checking that encoded streams are
//! lossless, plus small helpers shared by the test modules.

use crate::chunk::{END_MARKER, TAG_MASK, TAG_RGB, TAG_RGBA, TAG_RUN};
use crate::header::{HEADER_SIZE, MAGIC};
use crate::pixel::{Pixel, CACHE_SIZE};

/// A fully decoded stream.
#[derive(Debug)]
pub(crate) struct DecodedQoi {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub colorspace: u8,
    /// Interleaved pixels with `channels` bytes each.
    pub pixels: Vec<u8>,
}

/// Install `env_logger` once so `RUST_LOG=debug cargo test` shows encoder logs.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decode a complete stream, rejecting anything the encoder would never emit.
pub(crate) fn decode(bytes: &[u8]) -> Result<DecodedQoi, String> {
    if bytes.len() < HEADER_SIZE + END_MARKER.len() {
        return Err(format!("stream too short: {} bytes", bytes.len()));
    }
    if bytes[0..4] != MAGIC {
        return Err("bad magic".to_string());
    }
    if bytes[bytes.len() - END_MARKER.len()..] != END_MARKER {
        return Err("missing end marker".to_string());
    }

    let width = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let height = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    let channels = bytes[12];
    let colorspace = bytes[13];
    let pixel_count = width as usize * height as usize;

    let body = &bytes[HEADER_SIZE..bytes.len() - END_MARKER.len()];
    let mut cache = [Pixel::default(); CACHE_SIZE];
    let mut previous = Pixel::rgb(0, 0, 0);
    let mut decoded: Vec<Pixel> = Vec::with_capacity(pixel_count);
    let mut pos = 0;

    while pos < body.len() {
        let tag = take(body, &mut pos, 1)?[0];
        let pixel = match tag {
            TAG_RGB => {
                let c = take(body, &mut pos, 3)?;
                Pixel::new(c[0], c[1], c[2], previous.a)
            }
            TAG_RGBA => {
                let c = take(body, &mut pos, 4)?;
                Pixel::new(c[0], c[1], c[2], c[3])
            }
            _ => match tag & TAG_MASK {
                0b0000_0000 => {
                    let p = cache[(tag & 0x3F) as usize];
                    decoded.push(p);
                    previous = p;
                    continue;
                }
                0b0100_0000 => Pixel::new(
                    previous.r.wrapping_add((tag >> 4) & 0b11).wrapping_sub(2),
                    previous.g.wrapping_add((tag >> 2) & 0b11).wrapping_sub(2),
                    previous.b.wrapping_add(tag & 0b11).wrapping_sub(2),
                    previous.a,
                ),
                0b1000_0000 => {
                    let second = take(body, &mut pos, 1)?[0];
                    let dg = (tag & 0x3F).wrapping_sub(32);
                    let dr = dg.wrapping_add(second >> 4).wrapping_sub(8);
                    let db = dg.wrapping_add(second & 0x0F).wrapping_sub(8);
                    Pixel::new(
                        previous.r.wrapping_add(dr),
                        previous.g.wrapping_add(dg),
                        previous.b.wrapping_add(db),
                        previous.a,
                    )
                }
                _ => {
                    let run = (tag & 0x3F) as usize + 1;
                    decoded.extend(std::iter::repeat(previous).take(run));
                    continue;
                }
            },
        };
        cache[pixel.cache_index()] = pixel;
        decoded.push(pixel);
        previous = pixel;
    }

    if decoded.len() != pixel_count {
        return Err(format!(
            "decoded {} pixels, header says {}",
            decoded.len(),
            pixel_count
        ));
    }

    let pixels = decoded
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a].into_iter().take(channels as usize))
        .collect();

    Ok(DecodedQoi {
        width,
        height,
        channels,
        colorspace,
        pixels,
    })
}

fn take<'a>(body: &'a [u8], pos: &mut usize, n: usize) -> Result<&'a [u8], String> {
    let slice = body
        .get(*pos..*pos + n)
        .ok_or_else(|| format!("truncated chunk at offset {}", *pos))?;
    *pos += n;
    Ok(slice)
}

/// Lengths of a sequence made only of run chunks.
///
/// Panics on any non-run byte.
pub(crate) fn run_lengths(chunks: &[u8]) -> Vec<usize> {
    chunks
        .iter()
        .map(|&b| {
            assert_eq!(b & TAG_MASK, TAG_RUN, "expected run chunk, got {b:#04x}");
            (b & 0x3F) as usize + 1
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_short_stream() {
        assert!(decode(&[0u8; 10]).is_err());
    }

    #[test]
    fn test_decode_rejects_pixel_count_mismatch() {
        let mut stream = Vec::new();
        stream.extend_from_slice(b"qoif");
        stream.extend_from_slice(&2u32.to_be_bytes());
        stream.extend_from_slice(&1u32.to_be_bytes());
        stream.extend_from_slice(&[3, 0, 0xC0]);
        stream.extend_from_slice(&END_MARKER);
        assert!(decode(&stream).is_err());
    }

    #[test]
    fn test_run_lengths() {
        assert_eq!(run_lengths(&[0xC0, 0xFD]), vec![1, 62]);
    }
}
