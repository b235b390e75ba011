mod content;
mod library;
mod scanner;

pub use content::FsContentStorage;
pub use library::FsPhotoLibrary;
pub use scanner::WalkdirFileScanner;
