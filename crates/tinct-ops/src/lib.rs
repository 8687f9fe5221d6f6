//! # tinct-ops
//!
//! Pixel operations for the tinct grading pipeline.
//!
//! This crate provides the three processing stages the pipeline sequences:
//!
//! - [`resize`] - Aspect-preserving scaling to a target width
//! - [`convert`] - Bidirectional RGB <-> HSV conversion
//! - [`adjust`] - Hue/saturation/value channel adjustment
//!
//! All operations are pure functions over exclusively owned
//! [`PixelBuffer`](tinct_core::PixelBuffer)s: no I/O, no shared state, no
//! suspension points. Per-pixel work has no cross-pixel dependency and is
//! parallelized across rows with rayon when the default `parallel` feature
//! is enabled; the feature changes throughput, never results.
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{PixelBuffer, Rgb};
//! use tinct_ops::{adjust, adjust::ColorAdjustment, convert, resize};
//!
//! let src: PixelBuffer<Rgb> = PixelBuffer::filled(200, 100, [1.0, 0.0, 0.0]).unwrap();
//! let small = resize::resize(&src, 100, resize::Filter::Bilinear).unwrap();
//!
//! let adjustment = ColorAdjustment::new(0.5, 1.0, 0.0);
//! let hsv = convert::to_hsv(small);
//! let graded = adjust::apply(hsv, &adjustment);
//! let out = convert::to_rgb(graded);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel processing via rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod convert;
pub mod resize;

pub use adjust::ColorAdjustment;
pub use error::{OpsError, OpsResult};
pub use resize::Filter;
