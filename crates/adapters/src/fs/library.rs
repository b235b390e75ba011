use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use fotobox_application::{ApplicationError, PhotoLibrary};
use fotobox_domain::Raster;

use crate::codec;

/// Photo-library writer over a directory. A root that does not exist or is
/// not a directory reads as refused access, the desktop analog of a denied
/// platform permission.
#[derive(Debug)]
pub struct FsPhotoLibrary {
    root: PathBuf,
    next_id: AtomicU64,
}

impl FsPhotoLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_id: AtomicU64::new(0),
        }
    }
}

impl PhotoLibrary for FsPhotoLibrary {
    fn save(&self, image: &Raster) -> Result<(), ApplicationError> {
        if !self.root.is_dir() {
            return Err(ApplicationError::PermissionDenied(format!(
                "photo library is not accessible at {}",
                self.root.display()
            )));
        }

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis())
            .unwrap_or_default();
        let sequence = self.next_id.fetch_add(1, Ordering::Relaxed);
        let path = self.root.join(format!("export-{stamp}-{sequence}.jpg"));

        let bytes = codec::encode_jpeg(image)?;
        fs::write(path, bytes).map_err(|error| ApplicationError::Io(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_writes_a_jpeg_into_the_library() {
        let dir = TempDir::new().expect("tempdir");
        let library = FsPhotoLibrary::new(dir.path());
        library
            .save(&Raster::filled(3, 3, [9, 9, 9, 255]))
            .expect("save");

        let written: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(written.len(), 1);
    }

    #[test]
    fn missing_root_reads_as_permission_denied() {
        let library = FsPhotoLibrary::new("/nonexistent/fotobox-library");
        let result = library.save(&Raster::filled(1, 1, [0, 0, 0, 255]));
        assert!(matches!(
            result,
            Err(ApplicationError::PermissionDenied(_))
        ));
    }
}
