mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    ContentStorage, FileScanSummary, FileScanner, ImageDecoder, ImageHost, ImportReport,
    KeyValueStore, PhotoLibrary,
};
pub use service::ApplicationService;
pub use use_cases::{
    BootstrapCommand, EditEntryCommand, ImportFileCommand, ImportFolderCommand, LoadImagesCommand,
    LoadIndexCommand, LoadIndexPageCommand, MoveEntryCommand, PersistImageCommand, RemoveEntryCommand,
    RenderEditCommand, ResetCollectionCommand, SaveFromCloudCommand, SaveIndexCommand,
    SaveToLibraryCommand, UploadImageCommand,
};
