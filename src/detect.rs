//! Core detection entry points.
//!
//! All detection funnels through [`detect_format_from_bytes`]: a pure walk
//! over the signature table in priority order, returning the first match.
//! The reader and path variants only read the bounded header a rule could
//! ever reach before delegating.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::classification::Classification;
use crate::error::Result;
use crate::format::FileFormat;
use crate::signature::{HEADER_LEN, SIGNATURES};

/// Detect file format from a byte slice.
///
/// This function analyzes the byte signature in memory without requiring
/// file I/O, making it ideal for uploaded data or in-memory processing.
/// Rules are tried in table order; the first one whose pattern appears at
/// its offset wins. Input that is empty or shorter than a rule's required
/// length simply skips that rule.
///
/// # Arguments
///
/// * `bytes` - The file data as bytes
///
/// # Returns
///
/// * `Some(FileFormat)` if a supported format is detected
/// * `None` if the format is not recognized
///
/// # Examples
///
/// ```rust
/// use rambutan::{FileFormat, detect_format_from_bytes};
///
/// assert_eq!(
///     detect_format_from_bytes(b"\xFF\xD8\xFF\xE0JFIF"),
///     Some(FileFormat::Jpeg)
/// );
/// assert_eq!(detect_format_from_bytes(b"random text"), None);
/// ```
pub fn detect_format_from_bytes(bytes: &[u8]) -> Option<FileFormat> {
    SIGNATURES
        .iter()
        .find(|rule| rule.matches(bytes))
        .map(|rule| rule.format)
}

/// Classify a byte buffer.
///
/// The [`Classification`] wrapper adds the display label, MIME type, and
/// category on top of [`detect_format_from_bytes`]. Classification is total:
/// unmatched input yields the `"unknown"` label rather than an error.
///
/// # Examples
///
/// ```rust
/// use rambutan::classify;
///
/// assert_eq!(classify(b"%PDF-1.4").label(), "PDF");
/// assert_eq!(classify(b"%PDF-1.4").mime_type(), "application/pdf");
/// assert_eq!(classify(b"").label(), "unknown");
/// ```
pub fn classify(bytes: &[u8]) -> Classification {
    Classification::new(detect_format_from_bytes(bytes))
}

/// Detect file format from any reader that implements Read + Seek.
///
/// Reads at most [`HEADER_LEN`] bytes, then resets the reader to the start
/// so the caller can consume the content afterwards.
///
/// # Arguments
///
/// * `reader` - A reader that can read and seek
///
/// # Returns
///
/// * `Some(FileFormat)` if a supported format is detected
/// * `None` if the format is not recognized or the reader fails
pub fn detect_format_from_reader<R: Read + Seek>(reader: &mut R) -> Option<FileFormat> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    reader
        .by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .ok()?;

    // Reset to beginning
    let _ = reader.seek(SeekFrom::Start(0));

    detect_format_from_bytes(&header)
}

/// Detect file format from a file path.
///
/// This function opens the file and reads only the bounded header needed
/// to determine the format.
///
/// # Arguments
///
/// * `path` - Path to the file to analyze
///
/// # Returns
///
/// * `Some(FileFormat)` if a supported format is detected
/// * `None` if the format is not recognized or the file cannot be read
pub fn detect_file_format<P: AsRef<Path>>(path: P) -> Option<FileFormat> {
    let mut file = File::open(path).ok()?;
    detect_format_from_reader(&mut file)
}

/// Classify the file at `path`.
///
/// Unlike [`detect_file_format`], a file that cannot be opened or read is
/// reported as an I/O error. Content that matches no signature is still a
/// valid outcome and classifies as `"unknown"`.
pub fn classify_file<P: AsRef<Path>>(path: P) -> Result<Classification> {
    let mut file = File::open(path)?;
    Ok(Classification::new(detect_format_from_reader(&mut file)))
}
