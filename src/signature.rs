//! Magic byte signature rules and the built-in rule table.
//!
//! Detection compares fixed byte patterns against a bounded prefix of the
//! input. Rules are consulted read-only and in table order: the first match
//! wins, so more specific (longer) patterns come first.

use crate::format::FileFormat;

/// How many leading bytes detection ever inspects.
///
/// Large enough for every rule in the table, including the tar `ustar`
/// magic at offset 257.
pub const HEADER_LEN: usize = 512;

/// A single signature rule: `pattern` must appear at `offset`.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRule {
    /// Bytes that must match exactly.
    pub pattern: &'static [u8],
    /// Position of the pattern within the file, usually 0.
    pub offset: usize,
    /// Format reported when the rule matches.
    pub format: FileFormat,
}

impl SignatureRule {
    /// Check whether `data` carries this rule's pattern at its offset.
    ///
    /// Input shorter than `offset + pattern.len()` never matches; a short
    /// buffer skips the rule instead of raising an error.
    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        match data.get(self.offset..self.offset + self.pattern.len()) {
            Some(window) => window == self.pattern,
            None => false,
        }
    }
}

const fn rule(pattern: &'static [u8], offset: usize, format: FileFormat) -> SignatureRule {
    SignatureRule {
        pattern,
        offset,
        format,
    }
}

/// The built-in signature table, in priority order.
///
/// Ordered most-specific first so that no short pattern can shadow a longer
/// one. The ZIP and OLE2 entries identify container families only; the
/// concrete formats inside them (DOCX vs XLSX, DOC vs XLS) are not
/// distinguishable from the signature.
pub const SIGNATURES: &[SignatureRule] = &[
    rule(b"\x89PNG\r\n\x1a\n", 0, FileFormat::Png),
    rule(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1], 0, FileFormat::Ole2),
    rule(b"Rar!\x1a\x07\x01\x00", 0, FileFormat::Rar),
    rule(b"Rar!\x1a\x07\x00", 0, FileFormat::Rar),
    rule(b"\xfd7zXZ\x00", 0, FileFormat::Xz),
    rule(b"7z\xbc\xaf\x27\x1c", 0, FileFormat::SevenZ),
    rule(b"GIF87a", 0, FileFormat::Gif),
    rule(b"GIF89a", 0, FileFormat::Gif),
    rule(b"%PDF-", 0, FileFormat::Pdf),
    // POSIX tar has no leading magic; "ustar" sits at offset 257
    rule(b"ustar", 257, FileFormat::Tar),
    rule(&[0x00, 0x00, 0x01, 0x00], 0, FileFormat::Ico),
    rule(&[0x00, 0x00, 0x02, 0x00], 0, FileFormat::Cur),
    rule(b"II*\x00", 0, FileFormat::Tiff),
    rule(b"MM\x00*", 0, FileFormat::Tiff),
    rule(b"PK\x03\x04", 0, FileFormat::Zip),
    rule(&[0xFF, 0xD8, 0xFF], 0, FileFormat::Jpeg),
    rule(&[0x1F, 0x8B, 0x08], 0, FileFormat::Gzip),
    rule(b"BZh", 0, FileFormat::Bzip2),
    rule(b"BM", 0, FileFormat::Bmp),
];
