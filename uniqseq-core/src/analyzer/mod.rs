//! Word analysis pipeline.
//!
//! This module provides the per-word processing components:
//! - **Normalizer**: Trims, validates and lowercases raw dictionary lines
//! - **Sequence**: Extracts fixed-length windows from a normalized word

pub mod normalizer;
pub mod sequence;

pub use normalizer::{Normalized, WordNormalizer};
pub use sequence::{SequenceExtractor, SlidingWindowExtractor};
