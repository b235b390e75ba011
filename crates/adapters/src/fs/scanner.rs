use std::path::Path;

use fotobox_application::{ApplicationError, FileScanSummary, FileScanner};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct WalkdirFileScanner;

fn is_supported(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png")
}

impl FileScanner for WalkdirFileScanner {
    fn scan_supported(&self, folder: &str) -> Result<FileScanSummary, ApplicationError> {
        let folder_path = Path::new(folder);
        if !folder_path.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "folder does not exist or is not a directory: {folder}"
            )));
        }

        let mut summary = FileScanSummary::default();
        for entry in WalkDir::new(folder_path).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            summary.scanned_files += 1;
            if is_supported(entry.path()) {
                summary.files.push(entry.path().to_path_buf());
            }
        }
        summary.files.sort();

        Ok(summary)
    }
}
