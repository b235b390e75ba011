use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use fotobox_application::{ApplicationError, ContentStorage};
use fotobox_domain::{ContentRef, Raster};

use crate::codec;

/// Content directory of uniquely named JPEG files. Each persist writes a
/// fresh file, so a reference never changes once handed out.
#[derive(Debug)]
pub struct FsContentStorage {
    root: PathBuf,
    next_id: AtomicU64,
}

impl FsContentStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_id: AtomicU64::new(0),
        }
    }

    fn next_file_name(&self) -> String {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis())
            .unwrap_or_default();
        let sequence = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("img-{stamp}-{sequence}.jpg")
    }
}

impl ContentStorage for FsContentStorage {
    fn initialize(&self) -> Result<(), ApplicationError> {
        fs::create_dir_all(&self.root).map_err(|error| ApplicationError::Io(error.to_string()))
    }

    fn persist(&self, image: &Raster) -> Result<ContentRef, ApplicationError> {
        let bytes = codec::encode_jpeg(image)?;
        let path = self.root.join(self.next_file_name());
        fs::write(&path, bytes).map_err(|error| ApplicationError::Io(error.to_string()))?;
        Ok(ContentRef::new(path.to_string_lossy()))
    }

    fn read(&self, entry: &ContentRef) -> Result<Raster, ApplicationError> {
        let bytes = fs::read(Path::new(entry.as_str()))
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        codec::decode_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn persist_then_read_round_trips_dimensions() {
        let dir = TempDir::new().expect("tempdir");
        let storage = FsContentStorage::new(dir.path());
        storage.initialize().expect("initialize");

        let entry = storage
            .persist(&Raster::filled(6, 4, [120, 80, 40, 255]))
            .expect("persist");
        let loaded = storage.read(&entry).expect("read");
        assert_eq!((loaded.width(), loaded.height()), (6, 4));
    }

    #[test]
    fn each_persist_gets_a_fresh_reference() {
        let dir = TempDir::new().expect("tempdir");
        let storage = FsContentStorage::new(dir.path());
        storage.initialize().expect("initialize");

        let image = Raster::filled(2, 2, [1, 2, 3, 255]);
        let first = storage.persist(&image).expect("persist");
        let second = storage.persist(&image).expect("persist");
        assert_ne!(first, second);
    }

    #[test]
    fn reading_a_missing_entry_is_an_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let storage = FsContentStorage::new(dir.path());
        let result = storage.read(&ContentRef::new("/nowhere/missing.jpg"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }

    #[test]
    fn persisting_into_a_missing_root_fails() {
        let storage = FsContentStorage::new("/nonexistent/fotobox-content");
        let result = storage.persist(&Raster::filled(2, 2, [0, 0, 0, 255]));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
