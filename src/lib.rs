//! Rambutan - A Rust library for file type detection from magic bytes
//!
//! This library reports the true type of a file by inspecting its leading
//! byte sequences (magic numbers) rather than trusting its extension. It is
//! built around a single pure matcher: a static, ordered table of signature
//! rules compared against a bounded prefix of the input.
//!
//! # Features
//!
//! - **Signature matcher**: classify any byte buffer with a first-match walk
//!   over a built-in rule table
//! - **Rich results**: display label, MIME type, and broad category per
//!   detected format
//! - **Bounded reads**: reader and path entry points inspect at most
//!   [`HEADER_LEN`] bytes
//! - **Total by design**: unmatched or empty input classifies as `"unknown"`
//!   instead of failing
//!
//! # Example - Classifying a byte buffer
//!
//! ```rust
//! use rambutan::classify;
//!
//! let result = classify(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR");
//! assert_eq!(result.label(), "PNG");
//! assert_eq!(result.mime_type(), "image/png");
//!
//! // Classification never fails; unknown content is a valid outcome
//! assert_eq!(classify(b"randomtext").label(), "unknown");
//! ```
//!
//! # Example - Detecting a file on disk
//!
//! ```no_run
//! use rambutan::classify_file;
//!
//! # fn main() -> rambutan::Result<()> {
//! let result = classify_file("upload.bin")?;
//! println!("detected: {} ({})", result.label(), result.mime_type());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Comparing against the claimed extension
//!
//! ```rust
//! use rambutan::{FileFormat, detect_format_from_bytes};
//!
//! let claimed = FileFormat::from_extension("png");
//! let detected = detect_format_from_bytes(b"\xFF\xD8\xFF\xE0..JFIF");
//! // The extension says PNG but the bytes say JPEG
//! assert_ne!(claimed, detected);
//! assert_eq!(detected, Some(FileFormat::Jpeg));
//! ```
//!
//! Container families that share one signature (ZIP for DOCX/XLSX/PPTX/JAR,
//! OLE2 for DOC/XLS/PPT) classify to explicitly ambiguous family labels;
//! telling their members apart would require parsing the container itself,
//! which is outside the scope of signature matching.

/// Classification result returned to callers
pub mod classification;

/// Core detection entry points for byte slices, readers, and paths
pub mod detect;

/// Unified error types
pub mod error;

/// Format taxonomy: detectable formats, categories, and MIME types
pub mod format;

/// Signature rules and the built-in rule table
pub mod signature;

// Re-export commonly used types for convenience
pub use classification::{Classification, UNKNOWN_LABEL, UNKNOWN_MIME};
pub use detect::{
    classify, classify_file, detect_file_format, detect_format_from_bytes,
    detect_format_from_reader,
};
pub use error::{Error, Result};
pub use format::{Category, FileFormat};
pub use signature::{HEADER_LEN, SIGNATURES, SignatureRule};
