//! # tinct-core
//!
//! Core types for the tinct color-grading pipeline.
//!
//! This crate provides the foundational types used by the rest of the
//! workspace:
//!
//! - [`ColorModel`] - Trait and marker types for compile-time channel safety
//! - [`PixelBuffer`] - Owned, normalized pixel buffer tagged by color model
//! - [`Error`] / [`Result`] - Core error handling
//!
//! ## Design Philosophy
//!
//! The core principle is **compile-time channel safety**. A buffer holding
//! HSV samples cannot be accidentally treated as RGB without an explicit
//! conversion:
//!
//! ```ignore
//! let rgb: PixelBuffer<Rgb> = decode(bytes)?;
//! let hsv: PixelBuffer<Hsv> = to_hsv(rgb); // Explicit conversion
//! // encode(&hsv)?; // Compile error - encoders take PixelBuffer<Rgb>
//! ```
//!
//! All samples are `f32` normalized to `[0.0, 1.0]`; the 8-bit integer
//! representation exists only at the codec boundary
//! ([`PixelBuffer::from_u8`] / [`PixelBuffer::to_u8`]).
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. All other tinct crates depend on `tinct-core`:
//!
//! ```text
//! tinct-core (this crate)
//!    ^
//!    |
//!    +-- tinct-ops (resize, convert, adjust)
//!    +-- tinct-io (PNG/JPEG codec adapter)
//!    +-- tinct-pipeline (orchestrator)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod model;

// Re-exports for convenience
pub use buffer::*;
pub use error::*;
pub use model::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tinct_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::model::{ColorModel, Hsv, Rgb};
}
