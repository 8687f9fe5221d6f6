//! PNG format support.
//!
//! Provides in-memory decoding and encoding of PNG images with support for
//! 8-bit and 16-bit inputs, grayscale expansion, and alpha stripping.
//!
//! # Decode behavior
//!
//! Every supported input lands in a 3-channel normalized
//! [`PixelBuffer<Rgb>`]:
//!
//! - Grayscale is expanded to RGB
//! - Alpha is stripped (the pipeline's model is strictly 3-channel)
//! - 16-bit samples are scaled by 1/65535
//!
//! # Encode behavior
//!
//! Output is always 8-bit RGB with an sRGB chunk.

use crate::{IoError, IoResult};
use tinct_core::{PixelBuffer, Rgb};
use std::io::Cursor;

/// Decodes a PNG byte stream into an RGB pixel buffer.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for corrupt streams and
/// [`IoError::UnsupportedBitDepth`] for color-type/bit-depth combinations
/// outside the table above.
pub fn decode(bytes: &[u8]) -> IoResult<PixelBuffer<Rgb>> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let raw = &buf[..info.buffer_size()];

    let samples: Vec<f32> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            raw.iter().map(|&v| v as f32 / 255.0).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => raw
            .chunks(4)
            .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
            .map(|v| v as f32 / 255.0)
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => raw
            .iter()
            .flat_map(|&g| [g, g, g])
            .map(|v| v as f32 / 255.0)
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => raw
            .chunks(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0]])
            .map(|v| v as f32 / 255.0)
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            bytes_to_u16(raw).iter().map(|&v| v as f32 / 65535.0).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => bytes_to_u16(raw)
            .chunks(4)
            .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
            .map(|v| v as f32 / 65535.0)
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => bytes_to_u16(raw)
            .iter()
            .flat_map(|&g| [g, g, g])
            .map(|v| v as f32 / 65535.0)
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    PixelBuffer::from_data(width, height, samples)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Encodes an RGB pixel buffer as an 8-bit PNG byte stream.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder rejects the buffer.
pub fn encode(buffer: &PixelBuffer<Rgb>) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();

    let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    writer
        .write_image_data(&buffer.to_u8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    drop(writer);

    Ok(out)
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}
