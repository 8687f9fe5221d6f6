//! # tinct-pipeline
//!
//! The request-scoped orchestrator for the tinct grading pipeline.
//!
//! One invocation of [`Pipeline::transform`] (or the free [`transform`])
//! runs the full sequence over exclusively owned buffers:
//!
//! ```text
//! bytes --decode--> RGB --resize--> RGB --to_hsv--> HSV
//!                     |                               |
//!                     v                             adjust
//!                  encode                             |
//!                 "original"                          v
//!                                  "transformed" <--encode<--to_rgb
//! ```
//!
//! Both outputs are re-encoded in the format the input bytes arrived in.
//! Every failure is terminal for the single request: no retries, no partial
//! output, no state carried between invocations. Concurrency across
//! requests is the caller's business; the pipeline itself is a pure
//! function of its inputs.
//!
//! # Example
//!
//! ```rust,ignore
//! use tinct_ops::ColorAdjustment;
//! use tinct_pipeline::transform;
//!
//! let out = transform(&upload, 100, &ColorAdjustment::new(0.5, 1.0, 0.0))?;
//! std::fs::write("original.png", &out.original)?;
//! std::fs::write("transformed.png", &out.transformed)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;
use tinct_io::{Format, IoError};
use tinct_ops::{ColorAdjustment, Filter, OpsError, adjust, convert, resize};
use tracing::debug;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors a pipeline invocation can surface.
///
/// All variants are deterministic functions of the input and terminal for
/// the request; the shell decides how to map them to protocol responses.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input bytes are not a valid or supported image.
    #[error("decode failed: {0}")]
    Decode(#[source] IoError),

    /// Requested or computed width/height was not positive.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// An output buffer could not be serialized to the target format.
    #[error("encode failed: {0}")]
    Encode(#[source] IoError),
}

impl From<OpsError> for PipelineError {
    fn from(err: OpsError) -> Self {
        match err {
            OpsError::InvalidDimensions(msg) => Self::InvalidDimension(msg),
        }
    }
}

/// Explicit process-wide configuration for pipeline invocations.
///
/// Replaces ambient globals: a shell constructs one of these (possibly from
/// its own config surface) and every default lives here, visible at the
/// call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Working width when the request specifies none. Default: 100.
    pub target_width: u32,
    /// Adjustment applied when the request specifies none. Default:
    /// identity.
    pub adjustment: ColorAdjustment,
    /// Resampling filter for the resize stage. Default: bilinear.
    pub filter: Filter,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_width: 100,
            adjustment: ColorAdjustment::default(),
            filter: Filter::default(),
        }
    }
}

/// The two encoded outputs of a successful invocation.
#[derive(Debug)]
pub struct TransformOutput {
    /// The resized but unadjusted image, re-encoded.
    pub original: Vec<u8>,
    /// The resized and color-adjusted image, re-encoded.
    pub transformed: Vec<u8>,
    /// Format both outputs are encoded in (the input's own format).
    pub format: Format,
}

/// A configured pipeline.
///
/// Holds only configuration; invocations share nothing else, so one
/// `Pipeline` value can serve any number of independent requests.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the full decode -> resize -> grade -> encode sequence using
    /// the configured defaults.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Decode`] if the bytes are not a recognized image
    /// - [`PipelineError::InvalidDimension`] if the target width is zero or
    ///   the derived height collapses to zero
    /// - [`PipelineError::Encode`] if an output cannot be serialized
    pub fn transform(&self, bytes: &[u8]) -> PipelineResult<TransformOutput> {
        self.transform_with(bytes, self.config.target_width, &self.config.adjustment)
    }

    /// Runs the sequence with per-request width and adjustment, falling
    /// back to the configured filter.
    pub fn transform_with(
        &self,
        bytes: &[u8],
        target_width: u32,
        adjustment: &ColorAdjustment,
    ) -> PipelineResult<TransformOutput> {
        let decoded = tinct_io::decode(bytes).map_err(PipelineError::Decode)?;
        let format = decoded.format;
        debug!(
            src_w = decoded.buffer.width(),
            src_h = decoded.buffer.height(),
            target_width,
            ?format,
            "pipeline start"
        );

        let resized = resize::resize(&decoded.buffer, target_width, self.config.filter)?;

        let original = tinct_io::encode(&resized, format).map_err(PipelineError::Encode)?;

        let graded = convert::to_rgb(adjust::apply(convert::to_hsv(resized), adjustment));

        let transformed = tinct_io::encode(&graded, format).map_err(PipelineError::Encode)?;
        debug!(
            original_len = original.len(),
            transformed_len = transformed.len(),
            "pipeline done"
        );

        Ok(TransformOutput {
            original,
            transformed,
            format,
        })
    }
}

/// Runs one pipeline invocation with default configuration for everything
/// but the explicit width and adjustment.
///
/// Convenience wrapper over [`Pipeline::transform_with`]; see there for the
/// error contract.
pub fn transform(
    bytes: &[u8],
    target_width: u32,
    adjustment: &ColorAdjustment,
) -> PipelineResult<TransformOutput> {
    Pipeline::default().transform_with(bytes, target_width, adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.target_width, 100);
        assert!(config.adjustment.is_identity());
        assert_eq!(config.filter, Filter::Bilinear);
    }

    #[test]
    fn test_garbage_bytes_surface_decode_error() {
        let result = transform(b"not an image", 100, &ColorAdjustment::default());
        assert!(matches!(result, Err(PipelineError::Decode(_))));
    }

    #[test]
    fn test_ops_error_maps_to_invalid_dimension() {
        let err: PipelineError = OpsError::InvalidDimensions("target width".into()).into();
        assert!(matches!(err, PipelineError::InvalidDimension(_)));
    }
}
