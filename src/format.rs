//! File format taxonomy: detectable formats, categories, MIME types, and
//! extension lookups.

use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};

/// Broad category a detected format belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Raster image formats
    Image,
    /// Document formats
    Document,
    /// Archive and compressed container formats
    Archive,
}

/// Supported file formats that can be detected by signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    /// JPEG image (.jpg, .jpeg)
    Jpeg,
    /// Portable Network Graphics image (.png)
    Png,
    /// Graphics Interchange Format image (.gif, both 87a and 89a)
    Gif,
    /// Windows Bitmap image (.bmp)
    Bmp,
    /// Tagged Image File Format image (.tif, .tiff, either endianness)
    Tiff,
    /// Windows Icon (.ico)
    Ico,
    /// Windows Cursor (.cur)
    Cur,
    /// Portable Document Format (.pdf)
    Pdf,
    /// OLE2 compound file, the container shared by legacy Office formats
    /// (.doc, .xls, .ppt). Telling those apart requires reading the
    /// container's directory streams, which signature matching cannot do.
    Ole2,
    /// ZIP archive, also the container for OOXML documents (.docx, .xlsx,
    /// .pptx) and JAR files. Ambiguous by signature alone.
    Zip,
    /// RAR archive (.rar, v4 or v5)
    Rar,
    /// Gzip compressed data (.gz)
    Gzip,
    /// Bzip2 compressed data (.bz2)
    Bzip2,
    /// XZ compressed data (.xz)
    Xz,
    /// 7-Zip archive (.7z)
    SevenZ,
    /// POSIX ustar tape archive (.tar)
    Tar,
}

/// File extension to claimed format mapping (compile-time perfect hash map)
static EXTENSION_FORMATS: Map<&'static str, FileFormat> = phf_map! {
    "jpg" => FileFormat::Jpeg,
    "jpeg" => FileFormat::Jpeg,
    "png" => FileFormat::Png,
    "gif" => FileFormat::Gif,
    "bmp" => FileFormat::Bmp,
    "tif" => FileFormat::Tiff,
    "tiff" => FileFormat::Tiff,
    "ico" => FileFormat::Ico,
    "cur" => FileFormat::Cur,
    "pdf" => FileFormat::Pdf,
    "doc" => FileFormat::Ole2,
    "xls" => FileFormat::Ole2,
    "ppt" => FileFormat::Ole2,
    "zip" => FileFormat::Zip,
    "docx" => FileFormat::Zip,
    "xlsx" => FileFormat::Zip,
    "pptx" => FileFormat::Zip,
    "jar" => FileFormat::Zip,
    "rar" => FileFormat::Rar,
    "gz" => FileFormat::Gzip,
    "bz2" => FileFormat::Bzip2,
    "xz" => FileFormat::Xz,
    "7z" => FileFormat::SevenZ,
    "tar" => FileFormat::Tar,
};

impl FileFormat {
    /// Human-readable display label.
    ///
    /// Container families that several concrete formats share carry an
    /// explicitly ambiguous label rather than a guess.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Tiff => "TIFF",
            Self::Ico => "ICO",
            Self::Cur => "CUR",
            Self::Pdf => "PDF",
            Self::Ole2 => "OLE2-based (DOC/XLS/PPT)",
            Self::Zip => "ZIP-based (DOCX/XLSX/ZIP)",
            Self::Rar => "RAR",
            Self::Gzip => "GZIP",
            Self::Bzip2 => "BZIP2",
            Self::Xz => "XZ",
            Self::SevenZ => "7Z",
            Self::Tar => "TAR",
        }
    }

    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Ico => "image/x-icon",
            Self::Cur => "image/x-icon",
            Self::Pdf => "application/pdf",
            Self::Ole2 => "application/x-ole-storage",
            Self::Zip => "application/zip",
            Self::Rar => "application/x-rar-compressed",
            Self::Gzip => "application/gzip",
            Self::Bzip2 => "application/x-bzip2",
            Self::Xz => "application/x-xz",
            Self::SevenZ => "application/x-7z-compressed",
            Self::Tar => "application/x-tar",
        }
    }

    /// Get the broad category this format belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Jpeg | Self::Png | Self::Gif | Self::Bmp | Self::Tiff | Self::Ico
            | Self::Cur => Category::Image,
            Self::Pdf | Self::Ole2 => Category::Document,
            Self::Zip | Self::Rar | Self::Gzip | Self::Bzip2 | Self::Xz | Self::SevenZ
            | Self::Tar => Category::Archive,
        }
    }

    /// Look up the format a file extension claims.
    ///
    /// Case-insensitive; a leading dot is accepted. Useful for comparing a
    /// file's claimed type against what detection actually found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rambutan::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_extension("pdf"), Some(FileFormat::Pdf));
    /// assert_eq!(FileFormat::from_extension(".JPG"), Some(FileFormat::Jpeg));
    /// // Extensions only claim the container for ZIP-based Office formats
    /// assert_eq!(FileFormat::from_extension("docx"), Some(FileFormat::Zip));
    /// assert_eq!(FileFormat::from_extension("webm"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        EXTENSION_FORMATS.get(ext.to_ascii_lowercase().as_str()).copied()
    }
}
