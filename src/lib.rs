//! SKU Forge - vendor matrix to marketplace bulk-upload workbook
//!
//! Converts a phone-case product matrix (colors × sizes) into the rows of a
//! marketplace listing template.
//!
//! # Pipeline
//!
//! 1. [`matrix`] reads the vendor workbook into colors, sizes and factory codes
//! 2. [`synth`] expands them into one parent and one child record per pair
//! 3. [`excel`] projects the records onto the template and writes the result
//!
//! Every constant of a product line lives in a [`config::Profile`].
//!
//! # Example
//!
//! ```no_run
//! use sku_forge::clock::SystemClock;
//! use sku_forge::config::load_profile;
//! use sku_forge::matrix::read_matrix;
//! use sku_forge::synth::RecordSynthesizer;
//! use std::path::Path;
//!
//! let profile = load_profile("multi")?;
//! let matrix = read_matrix(Path::new("multi_source.xlsx"), profile.input_shape)?;
//! let records = RecordSynthesizer::new(&profile, &SystemClock).synthesize(&matrix);
//!
//! println!("Records: {}", records.len());
//! # Ok::<(), sku_forge::error::ListingError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod excel;
pub mod matrix;
pub mod pipeline;
pub mod synth;
pub mod types;

// Re-export commonly used types
pub use error::{ListingError, ListingResult};
pub use types::{FieldValue, RecordKind, SkuRecord};
