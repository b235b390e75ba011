use fotobox_domain::{
    apply_filter, apply_rotation, page_slice, CollectionName, ContentRef, Raster,
};

use crate::{
    ApplicationError, BootstrapCommand, ContentStorage, EditEntryCommand, FileScanner,
    ImageDecoder, ImageHost, ImportFileCommand, ImportFolderCommand, ImportReport, KeyValueStore,
    LoadImagesCommand, LoadIndexCommand, LoadIndexPageCommand, MoveEntryCommand,
    PersistImageCommand, PhotoLibrary,
    RemoveEntryCommand, RenderEditCommand, ResetCollectionCommand, SaveFromCloudCommand,
    SaveIndexCommand, SaveToLibraryCommand, UploadImageCommand,
};

pub struct ApplicationService {
    indices: Box<dyn KeyValueStore>,
    content: Box<dyn ContentStorage>,
    decoder: Box<dyn ImageDecoder>,
    scanner: Box<dyn FileScanner>,
    host: Box<dyn ImageHost>,
    library: Box<dyn PhotoLibrary>,
}

impl ApplicationService {
    pub fn new(
        indices: Box<dyn KeyValueStore>,
        content: Box<dyn ContentStorage>,
        decoder: Box<dyn ImageDecoder>,
        scanner: Box<dyn FileScanner>,
        host: Box<dyn ImageHost>,
        library: Box<dyn PhotoLibrary>,
    ) -> Self {
        Self {
            indices,
            content,
            decoder,
            scanner,
            host,
            library,
        }
    }

    pub fn bootstrap(&self, _command: BootstrapCommand) -> Result<(), ApplicationError> {
        self.indices.initialize()?;
        self.content.initialize()
    }

    pub fn persist_image(
        &self,
        command: PersistImageCommand,
    ) -> Result<ContentRef, ApplicationError> {
        self.content.persist(&command.image)
    }

    /// Replace-whole-list semantics: the stored index becomes exactly the
    /// given sequence.
    pub fn save_index(&self, command: SaveIndexCommand) -> Result<(), ApplicationError> {
        let values: Vec<String> = command
            .entries
            .iter()
            .map(|entry| entry.as_str().to_string())
            .collect();
        self.indices.set_list(command.collection.key(), &values)
    }

    /// An absent key reads as an empty index, never an error.
    pub fn load_index(
        &self,
        command: LoadIndexCommand,
    ) -> Result<Vec<ContentRef>, ApplicationError> {
        self.read_index(command.collection)
    }

    pub fn load_index_page(
        &self,
        command: LoadIndexPageCommand,
    ) -> Result<Vec<ContentRef>, ApplicationError> {
        if command.page == 0 {
            return Err(ApplicationError::InvalidInput(
                "page numbers start at 1".to_string(),
            ));
        }
        if command.page_size == 0 {
            return Err(ApplicationError::InvalidInput(
                "page size must be at least 1".to_string(),
            ));
        }
        let entries = self.read_index(command.collection)?;
        Ok(page_slice(&entries, command.page, command.page_size).to_vec())
    }

    /// Lenient load: entries whose backing content is missing or corrupt are
    /// skipped, so the result may be shorter than the index.
    pub fn load_images(&self, command: LoadImagesCommand) -> Result<Vec<Raster>, ApplicationError> {
        let entries = self.read_index(command.collection)?;
        let mut images = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.content.read(&entry) {
                Ok(image) => images.push(image),
                Err(error) => {
                    log::warn!("skipping unreadable entry {entry}: {error}");
                }
            }
        }
        Ok(images)
    }

    /// Remove the first occurrence from `from` and append to `to`. A missing
    /// entry is a no-op, which makes the operation idempotent under retry.
    pub fn move_entry(&self, command: MoveEntryCommand) -> Result<(), ApplicationError> {
        let mut from_entries = self.read_index(command.from)?;
        let Some(position) = from_entries
            .iter()
            .position(|candidate| candidate == &command.entry)
        else {
            return Ok(());
        };
        let entry = from_entries.remove(position);
        self.write_index(command.from, &from_entries)?;

        let mut to_entries = self.read_index(command.to)?;
        to_entries.push(entry);
        self.write_index(command.to, &to_entries)
    }

    /// Index-only removal; the underlying content bytes stay on disk.
    pub fn remove_entry(&self, command: RemoveEntryCommand) -> Result<(), ApplicationError> {
        let mut entries = self.read_index(command.collection)?;
        let Some(position) = entries
            .iter()
            .position(|candidate| candidate == &command.entry)
        else {
            return Ok(());
        };
        entries.remove(position);
        self.write_index(command.collection, &entries)
    }

    pub fn reset_collection(&self, command: ResetCollectionCommand) -> Result<(), ApplicationError> {
        self.indices.remove(command.collection.key())
    }

    /// Filter first, then rotation. A filter failure degrades to the
    /// unfiltered image; rotation is total, so the whole edit is too.
    pub fn render_edit(&self, command: RenderEditCommand) -> Raster {
        let filtered = match apply_filter(&command.image, command.filter) {
            Ok(filtered) => filtered,
            Err(error) => {
                log::warn!("filter {:?} skipped: {error}", command.filter);
                command.image.clone()
            }
        };
        apply_rotation(&filtered, command.angle)
    }

    /// Edit persisted content and store the result as a new entry at the
    /// front of `recent`. The source entry and its bytes are untouched.
    pub fn edit_entry(&self, command: EditEntryCommand) -> Result<ContentRef, ApplicationError> {
        let image = self.content.read(&command.entry)?;
        let rendered = self.render_edit(RenderEditCommand {
            image,
            filter: command.filter,
            angle: command.angle,
        });
        let entry = self.content.persist(&rendered)?;
        self.prepend_to_index(CollectionName::Recent, entry.clone())?;
        Ok(entry)
    }

    pub fn import_file(&self, command: ImportFileCommand) -> Result<ContentRef, ApplicationError> {
        if command.path.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "file path must not be empty".to_string(),
            ));
        }
        let image = self
            .decoder
            .decode_file(std::path::Path::new(&command.path))?;
        let entry = self.content.persist(&image)?;
        self.prepend_to_index(CollectionName::Recent, entry.clone())?;
        Ok(entry)
    }

    /// Decode failures are skipped leniently, mirroring a picker that simply
    /// omits unreadable photos; persistence failures still propagate.
    pub fn import_folder(
        &self,
        command: ImportFolderCommand,
    ) -> Result<ImportReport, ApplicationError> {
        if command.folder.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "folder path must not be empty".to_string(),
            ));
        }

        let summary = self.scanner.scan_supported(&command.folder)?;
        let mut report = ImportReport {
            scanned_files: summary.scanned_files,
            imported: 0,
            skipped: 0,
        };

        let mut imported = Vec::new();
        for path in summary.files {
            match self.decoder.decode_file(&path) {
                Ok(image) => {
                    imported.push(self.content.persist(&image)?);
                    report.imported += 1;
                }
                Err(error) => {
                    log::warn!("skipping {}: {error}", path.display());
                    report.skipped += 1;
                }
            }
        }

        if !imported.is_empty() {
            let mut entries = imported;
            entries.extend(self.read_index(CollectionName::Recent)?);
            self.write_index(CollectionName::Recent, &entries)?;
        }

        Ok(report)
    }

    /// Upload persisted content and record the returned URL at the front of
    /// the cloud index (most-recent-first).
    pub fn upload_image(&self, command: UploadImageCommand) -> Result<String, ApplicationError> {
        let image = self.content.read(&command.entry)?;
        let url = self.host.upload(&image)?;
        self.prepend_to_index(CollectionName::Cloud, ContentRef::new(url.clone()))?;
        log::info!("uploaded {} as {url}", command.entry);
        Ok(url)
    }

    pub fn save_from_cloud(
        &self,
        command: SaveFromCloudCommand,
    ) -> Result<ContentRef, ApplicationError> {
        let image = self.host.download(&command.url)?;
        let entry = self.content.persist(&image)?;
        self.prepend_to_index(CollectionName::Recent, entry.clone())?;
        Ok(entry)
    }

    pub fn save_to_library(&self, command: SaveToLibraryCommand) -> Result<(), ApplicationError> {
        let image = self.content.read(&command.entry)?;
        self.library.save(&image)
    }

    fn read_index(&self, collection: CollectionName) -> Result<Vec<ContentRef>, ApplicationError> {
        let values = self
            .indices
            .get_list(collection.key())?
            .unwrap_or_default();
        Ok(values.into_iter().map(ContentRef::new).collect())
    }

    fn write_index(
        &self,
        collection: CollectionName,
        entries: &[ContentRef],
    ) -> Result<(), ApplicationError> {
        let values: Vec<String> = entries
            .iter()
            .map(|entry| entry.as_str().to_string())
            .collect();
        self.indices.set_list(collection.key(), &values)
    }

    fn prepend_to_index(
        &self,
        collection: CollectionName,
        entry: ContentRef,
    ) -> Result<(), ApplicationError> {
        let mut entries = self.read_index(collection)?;
        entries.insert(0, entry);
        self.write_index(collection, &entries)
    }
}
