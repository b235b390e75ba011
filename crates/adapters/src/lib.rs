mod codec;
pub mod fs;
pub mod http;
pub mod presenters;
pub mod sqlite;

pub use fs::{FsContentStorage, FsPhotoLibrary, WalkdirFileScanner};
pub use http::HttpImageHost;
pub use presenters::{present_import_report, present_index_row};
pub use sqlite::SqliteKeyValueStore;

use std::path::Path;

use fotobox_application::{ApplicationError, ImageDecoder};
use fotobox_domain::Raster;

#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode_file(&self, path: &Path) -> Result<Raster, ApplicationError> {
        let decoded = image::io::Reader::open(path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?
            .decode()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        codec::rgba_to_raster(&decoded.to_rgba8())
    }
}
