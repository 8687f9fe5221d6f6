//! # tinct-io
//!
//! In-memory codec adapter for the tinct grading pipeline.
//!
//! This crate decodes an encoded image byte stream into a normalized
//! [`PixelBuffer<Rgb>`](tinct_core::PixelBuffer) and encodes such a buffer
//! back into bytes. The pipeline core never touches files or sockets; this
//! adapter is its only boundary with encoded data, and it works purely on
//! byte slices so the surrounding shell decides where bytes come from and
//! go to.
//!
//! # Supported Formats
//!
//! | Format | Decode | Encode | Notes |
//! |--------|--------|--------|-------|
//! | PNG | Yes | Yes | 8/16-bit, gray and alpha normalized to RGB |
//! | JPEG | Yes | Yes | RGB/L8/L16/CMYK in, quality-controlled out |
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_io::{decode, encode};
//!
//! # fn demo(bytes: &[u8]) -> tinct_io::IoResult<Vec<u8>> {
//! let decoded = decode(bytes)?;          // format auto-detected
//! encode(&decoded.buffer, decoded.format) // re-encode in the same format
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::Format;

use tinct_core::{PixelBuffer, Rgb};
use tracing::debug;

/// A decoded image: the pixel buffer plus the format it arrived in.
///
/// The format is retained so the pipeline can re-encode its outputs the
/// same way the input was encoded.
#[derive(Debug)]
pub struct DecodedImage {
    /// Normalized RGB pixel data.
    pub buffer: PixelBuffer<Rgb>,
    /// Detected source format.
    pub format: Format,
}

/// Decodes an image byte stream, auto-detecting the format.
///
/// The format is detected from magic bytes only; the adapter never sees a
/// file name.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when the bytes match no known
/// signature, or the format module's [`IoError::DecodeError`] when the
/// stream is recognized but corrupt.
///
/// # Example
///
/// ```rust,ignore
/// let decoded = tinct_io::decode(&upload)?;
/// println!("{}x{} {}", decoded.buffer.width(), decoded.buffer.height(),
///          decoded.format.mime_type());
/// ```
pub fn decode(bytes: &[u8]) -> IoResult<DecodedImage> {
    let format = Format::from_bytes(bytes);
    debug!(?format, len = bytes.len(), "decoding image bytes");

    let buffer = match format {
        #[cfg(feature = "png")]
        Format::Png => png::decode(bytes)?,

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::decode(bytes)?,

        _ => {
            return Err(IoError::UnsupportedFormat(
                "bytes match no supported image signature".into(),
            ));
        }
    };

    Ok(DecodedImage { buffer, format })
}

/// Encodes an RGB pixel buffer into the given format with default options.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for [`Format::Unknown`], or the
/// format module's [`IoError::EncodeError`].
pub fn encode(buffer: &PixelBuffer<Rgb>, format: Format) -> IoResult<Vec<u8>> {
    debug!(
        ?format,
        width = buffer.width(),
        height = buffer.height(),
        "encoding pixel buffer"
    );
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::encode(buffer),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::encode(buffer),

        _ => Err(IoError::UnsupportedFormat(
            "cannot encode to an unknown format".into(),
        )),
    }
}
