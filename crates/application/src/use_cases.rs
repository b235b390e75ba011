use fotobox_domain::{CollectionName, ContentRef, FilterKind, Raster, RotationAngle};

#[derive(Debug, Clone, Default)]
pub struct BootstrapCommand;

#[derive(Debug, Clone)]
pub struct PersistImageCommand {
    pub image: Raster,
}

#[derive(Debug, Clone)]
pub struct SaveIndexCommand {
    pub collection: CollectionName,
    pub entries: Vec<ContentRef>,
}

#[derive(Debug, Clone, Copy)]
pub struct LoadIndexCommand {
    pub collection: CollectionName,
}

#[derive(Debug, Clone, Copy)]
pub struct LoadIndexPageCommand {
    pub collection: CollectionName,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct LoadImagesCommand {
    pub collection: CollectionName,
}

#[derive(Debug, Clone)]
pub struct MoveEntryCommand {
    pub entry: ContentRef,
    pub from: CollectionName,
    pub to: CollectionName,
}

#[derive(Debug, Clone)]
pub struct RemoveEntryCommand {
    pub entry: ContentRef,
    pub collection: CollectionName,
}

#[derive(Debug, Clone, Copy)]
pub struct ResetCollectionCommand {
    pub collection: CollectionName,
}

#[derive(Debug, Clone)]
pub struct RenderEditCommand {
    pub image: Raster,
    pub filter: FilterKind,
    pub angle: RotationAngle,
}

#[derive(Debug, Clone)]
pub struct EditEntryCommand {
    pub entry: ContentRef,
    pub filter: FilterKind,
    pub angle: RotationAngle,
}

#[derive(Debug, Clone)]
pub struct ImportFileCommand {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct ImportFolderCommand {
    pub folder: String,
}

#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub entry: ContentRef,
}

#[derive(Debug, Clone)]
pub struct SaveFromCloudCommand {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct SaveToLibraryCommand {
    pub entry: ContentRef,
}
