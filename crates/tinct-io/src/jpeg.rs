//! JPEG format support.
//!
//! Provides in-memory decoding and encoding of JPEG images.
//!
//! # Decode behavior
//!
//! All supported pixel formats are normalized to a 3-channel
//! [`PixelBuffer<Rgb>`]:
//!
//! - `RGB24` passes through
//! - `L8` grayscale is expanded to RGB
//! - `L16` grayscale keeps the high byte and expands
//! - `CMYK32` uses the approximate `(1-c)(1-k)` conversion
//!
//! # Encode behavior
//!
//! Output is 8-bit RGB with a configurable quality (default 90).

use crate::{IoError, IoResult};
use tinct_core::{PixelBuffer, Rgb};
use std::io::{BufReader, Cursor};

/// Options for writing JPEG streams.
#[derive(Debug, Clone)]
pub struct JpegEncodeOptions {
    /// Quality level 1-100. Higher = better quality, larger output.
    /// Default: 90.
    pub quality: u8,
}

impl Default for JpegEncodeOptions {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

/// Decodes a JPEG byte stream into an RGB pixel buffer.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for corrupt or truncated streams.
pub fn decode(bytes: &[u8]) -> IoResult<PixelBuffer<Rgb>> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(Cursor::new(bytes)));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    // Convert to RGB based on input format
    let rgb: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks(2)
            .flat_map(|l16| {
                let g = l16[0]; // High byte
                [g, g, g]
            })
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks(4)
            .flat_map(|cmyk| {
                let c = cmyk[0] as f32 / 255.0;
                let m = cmyk[1] as f32 / 255.0;
                let y = cmyk[2] as f32 / 255.0;
                let k = cmyk[3] as f32 / 255.0;

                let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;

                [r, g, b]
            })
            .collect(),
    };

    PixelBuffer::from_u8(width, height, &rgb).map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Encodes an RGB pixel buffer as a JPEG byte stream with default options.
pub fn encode(buffer: &PixelBuffer<Rgb>) -> IoResult<Vec<u8>> {
    encode_with(buffer, &JpegEncodeOptions::default())
}

/// Encodes an RGB pixel buffer as a JPEG byte stream.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if either dimension exceeds the JPEG
/// limit of 65535 or the encoder rejects the buffer.
pub fn encode_with(buffer: &PixelBuffer<Rgb>, options: &JpegEncodeOptions) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    let (width, height) = buffer.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds JPEG dimension limit",
            width, height
        )));
    }

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, options.quality);
    encoder
        .encode(&buffer.to_u8(), width as u16, height as u16, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let src: PixelBuffer<Rgb> = PixelBuffer::filled(32, 32, [0.5, 0.25, 0.75]).unwrap();

        let bytes = encode(&src).expect("encode failed");
        let loaded = decode(&bytes).expect("decode failed");

        assert_eq!(loaded.dimensions(), (32, 32));
        // JPEG is lossy; a flat field survives within a generous tolerance
        for (got, want) in loaded.pixels().zip(src.pixels()) {
            for (g, w) in got.iter().zip(want) {
                assert!((g - w).abs() < 0.05, "got {}, want {}", g, w);
            }
        }
    }

    #[test]
    fn test_quality_affects_size() {
        let mut src: PixelBuffer<Rgb> = PixelBuffer::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                src.set_pixel(x, y, [(x as f32 / 31.0), (y as f32 / 31.0), 0.3]);
            }
        }

        let low = encode_with(&src, &JpegEncodeOptions { quality: 40 }).unwrap();
        let high = encode_with(&src, &JpegEncodeOptions { quality: 99 }).unwrap();
        assert!(high.len() >= low.len());
    }

    #[test]
    fn test_encoded_stream_has_jpeg_magic() {
        let src: PixelBuffer<Rgb> = PixelBuffer::filled(4, 4, [0.1, 0.2, 0.3]).unwrap();
        let bytes = encode(&src).unwrap();
        assert_eq!(&bytes[0..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode(&[0xFF, 0xD8, 0xFF, 0x00, 0x01, 0x02]).is_err());
    }
}
