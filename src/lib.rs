/*!
 * # sliderconv - two-row slider markup converter
 *
 * A Rust library for rewriting static HTML slider controls from the legacy
 * two-row layout into the three-column layout.
 *
 * ## Features
 *
 * - Locate two-row slider blocks with a fixed structural pattern
 * - Rewrite each block into the equivalent three-column markup
 * - Copy everything outside matched blocks through verbatim
 * - One-shot file-to-file conversion with unconditional overwrite
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `slider_converter`: Pattern matching and markup rewriting
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod errors;
pub mod file_utils;
pub mod slider_converter;

// Re-export main types for easier usage
pub use errors::{AppError, ConversionError};
pub use file_utils::FileManager;
pub use slider_converter::{ConversionOutcome, SliderConverter};
