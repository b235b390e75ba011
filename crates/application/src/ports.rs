use std::path::{Path, PathBuf};

use fotobox_domain::{ContentRef, Raster};

use crate::ApplicationError;

/// Flat key-value namespace holding one ordered string list per key. The
/// store is injected; nothing in the core reaches for ambient global state.
pub trait KeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn get_list(&self, key: &str) -> Result<Option<Vec<String>>, ApplicationError>;

    fn set_list(&self, key: &str, values: &[String]) -> Result<(), ApplicationError>;

    fn remove(&self, key: &str) -> Result<(), ApplicationError>;
}

/// Durable image content. Every persist writes a fresh uniquely named file,
/// so two writes can never race on the same reference.
pub trait ContentStorage {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn persist(&self, image: &Raster) -> Result<ContentRef, ApplicationError>;

    fn read(&self, entry: &ContentRef) -> Result<Raster, ApplicationError>;
}

pub trait ImageDecoder {
    fn decode_file(&self, path: &Path) -> Result<Raster, ApplicationError>;
}

#[derive(Debug, Clone, Default)]
pub struct FileScanSummary {
    pub scanned_files: usize,
    pub files: Vec<PathBuf>,
}

pub trait FileScanner {
    fn scan_supported(&self, folder: &str) -> Result<FileScanSummary, ApplicationError>;
}

/// Remote image host: bytes go up, a stable URL comes back. No automatic
/// retry on either direction.
pub trait ImageHost {
    fn upload(&self, image: &Raster) -> Result<String, ApplicationError>;

    fn download(&self, url: &str) -> Result<Raster, ApplicationError>;
}

/// Platform photo library writer; may refuse with `PermissionDenied`.
pub trait PhotoLibrary {
    fn save(&self, image: &Raster) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub scanned_files: usize,
    pub imported: usize,
    pub skipped: usize,
}
