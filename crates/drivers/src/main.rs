mod config;
mod logging;

use std::process::ExitCode;

use config::AppConfig;
use fotobox_adapters::{
    present_import_report, present_index_row, FsContentStorage, FsPhotoLibrary, HttpImageHost,
    ImageCrateDecoder, SqliteKeyValueStore, WalkdirFileScanner,
};
use fotobox_application::{
    ApplicationService, BootstrapCommand, EditEntryCommand, ImportFileCommand,
    ImportFolderCommand, LoadIndexCommand, LoadIndexPageCommand, MoveEntryCommand,
    ResetCollectionCommand, SaveFromCloudCommand, SaveToLibraryCommand, UploadImageCommand,
};
use fotobox_domain::{CollectionName, ContentRef, FilterKind, RotationAngle};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::from_env();

    let service = build_application_service(&config);
    if let Err(error) = service.bootstrap(BootstrapCommand) {
        eprintln!("failed to bootstrap fotobox: {error}");
        return ExitCode::from(1);
    }

    let command = parse_command(&args);
    match run_command(command, &service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> ApplicationService {
    ApplicationService::new(
        Box::new(SqliteKeyValueStore::new(config.index_store_path.clone())),
        Box::new(FsContentStorage::new(config.content_dir.clone())),
        Box::new(ImageCrateDecoder),
        Box::new(WalkdirFileScanner),
        Box::new(HttpImageHost::new(
            config.upload_endpoint.clone(),
            config.upload_preset.clone(),
        )),
        Box::new(FsPhotoLibrary::new(config.library_dir.clone())),
    )
}

#[derive(Debug, Clone)]
enum Command {
    Import { path: String },
    ImportFolder { folder: String },
    Edit { entry: String, filter: FilterKind, angle: f32 },
    List { collection: CollectionName },
    Page { collection: CollectionName, page: usize, page_size: usize },
    Trash { entry: String },
    Restore { entry: String },
    TrashCloud { url: String },
    RestoreCloud { url: String },
    Upload { entry: String },
    Fetch { url: String },
    Export { entry: String },
    Reset { collection: CollectionName },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_collection(value: &str) -> Result<CollectionName, CommandError> {
    match value {
        "recent" => Ok(CollectionName::Recent),
        "trashed" => Ok(CollectionName::Trashed),
        "cloud" => Ok(CollectionName::Cloud),
        "trashed-cloud" => Ok(CollectionName::TrashedCloud),
        other => Err(CommandError::Usage(format!("unknown collection: {other}"))),
    }
}

fn parse_filter(value: &str) -> Result<FilterKind, CommandError> {
    match value {
        "original" => Ok(FilterKind::Original),
        "cold" => Ok(FilterKind::Cold),
        "warm" => Ok(FilterKind::Warm),
        other => Err(CommandError::Usage(format!("unknown filter: {other}"))),
    }
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Err(CommandError::Usage("missing command".to_string()));
    }

    let arg = |index: usize, what: &str| -> Result<String, CommandError> {
        args.get(index)
            .cloned()
            .ok_or_else(|| CommandError::Usage(format!("missing {what}")))
    };

    match args[1].as_str() {
        "import" => Ok(Command::Import {
            path: arg(2, "file path")?,
        }),
        "import-folder" => Ok(Command::ImportFolder {
            folder: arg(2, "folder path")?,
        }),
        "edit" => {
            let entry = arg(2, "entry")?;
            let filter = parse_filter(&arg(3, "filter")?)?;
            let raw_angle = arg(4, "angle")?;
            let angle = raw_angle
                .parse::<f32>()
                .map_err(|_| CommandError::Usage(format!("invalid angle: {raw_angle}")))?;
            Ok(Command::Edit {
                entry,
                filter,
                angle,
            })
        }
        "list" => Ok(Command::List {
            collection: parse_collection(&arg(2, "collection")?)?,
        }),
        "page" => {
            let collection = parse_collection(&arg(2, "collection")?)?;
            let page = parse_count(&arg(3, "page number")?)?;
            let page_size = parse_count(&arg(4, "page size")?)?;
            Ok(Command::Page {
                collection,
                page,
                page_size,
            })
        }
        "trash" => Ok(Command::Trash {
            entry: arg(2, "entry")?,
        }),
        "restore" => Ok(Command::Restore {
            entry: arg(2, "entry")?,
        }),
        "trash-cloud" => Ok(Command::TrashCloud {
            url: arg(2, "url")?,
        }),
        "restore-cloud" => Ok(Command::RestoreCloud {
            url: arg(2, "url")?,
        }),
        "upload" => Ok(Command::Upload {
            entry: arg(2, "entry")?,
        }),
        "fetch" => Ok(Command::Fetch {
            url: arg(2, "url")?,
        }),
        "export" => Ok(Command::Export {
            entry: arg(2, "entry")?,
        }),
        "reset" => Ok(Command::Reset {
            collection: parse_collection(&arg(2, "collection")?)?,
        }),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_count(value: &str) -> Result<usize, CommandError> {
    value
        .parse::<usize>()
        .map_err(|_| CommandError::Usage(format!("invalid number: {value}")))
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &ApplicationService,
) -> Result<(), CommandError> {
    let runtime = |error: fotobox_application::ApplicationError| -> CommandError {
        CommandError::Runtime(error.to_string())
    };

    match command? {
        Command::Import { path } => {
            let entry = service
                .import_file(ImportFileCommand { path })
                .map_err(runtime)?;
            println!("imported {entry}");
            Ok(())
        }
        Command::ImportFolder { folder } => {
            let report = service
                .import_folder(ImportFolderCommand { folder })
                .map_err(runtime)?;
            println!("{}", present_import_report(&report));
            Ok(())
        }
        Command::Edit {
            entry,
            filter,
            angle,
        } => {
            let edited = service
                .edit_entry(EditEntryCommand {
                    entry: ContentRef::new(entry.clone()),
                    filter,
                    angle: RotationAngle::new(angle),
                })
                .map_err(runtime)?;
            println!("edited {entry} -> {edited}");
            Ok(())
        }
        Command::List { collection } => {
            let entries = service
                .load_index(LoadIndexCommand { collection })
                .map_err(runtime)?;
            print_entries(collection, &entries);
            Ok(())
        }
        Command::Page {
            collection,
            page,
            page_size,
        } => {
            let entries = service
                .load_index_page(LoadIndexPageCommand {
                    collection,
                    page,
                    page_size,
                })
                .map_err(runtime)?;
            print_entries(collection, &entries);
            Ok(())
        }
        Command::Trash { entry } => move_between(
            service,
            entry,
            CollectionName::Recent,
            CollectionName::Trashed,
        ),
        Command::Restore { entry } => move_between(
            service,
            entry,
            CollectionName::Trashed,
            CollectionName::Recent,
        ),
        Command::TrashCloud { url } => move_between(
            service,
            url,
            CollectionName::Cloud,
            CollectionName::TrashedCloud,
        ),
        Command::RestoreCloud { url } => move_between(
            service,
            url,
            CollectionName::TrashedCloud,
            CollectionName::Cloud,
        ),
        Command::Upload { entry } => {
            let url = service
                .upload_image(UploadImageCommand {
                    entry: ContentRef::new(entry),
                })
                .map_err(runtime)?;
            println!("{url}");
            Ok(())
        }
        Command::Fetch { url } => {
            let entry = service
                .save_from_cloud(SaveFromCloudCommand { url })
                .map_err(runtime)?;
            println!("fetched {entry}");
            Ok(())
        }
        Command::Export { entry } => {
            service
                .save_to_library(SaveToLibraryCommand {
                    entry: ContentRef::new(entry.clone()),
                })
                .map_err(runtime)?;
            println!("exported {entry}");
            Ok(())
        }
        Command::Reset { collection } => {
            service
                .reset_collection(ResetCollectionCommand { collection })
                .map_err(runtime)?;
            println!("reset {collection}");
            Ok(())
        }
    }
}

fn move_between(
    service: &ApplicationService,
    entry: String,
    from: CollectionName,
    to: CollectionName,
) -> Result<(), CommandError> {
    service
        .move_entry(MoveEntryCommand {
            entry: ContentRef::new(entry.clone()),
            from,
            to,
        })
        .map_err(|error| CommandError::Runtime(error.to_string()))?;
    println!("moved {entry}: {from} -> {to}");
    Ok(())
}

fn print_entries(collection: CollectionName, entries: &[ContentRef]) {
    if entries.is_empty() {
        println!("{collection} is empty");
        return;
    }
    for (index, entry) in entries.iter().enumerate() {
        println!("{}", present_index_row(index + 1, entry));
    }
}

fn print_usage() {
    println!("usage:");
    println!("  fotobox import <file>");
    println!("  fotobox import-folder <dir>");
    println!("  fotobox edit <entry> <original|cold|warm> <angle>");
    println!("  fotobox list <recent|trashed|cloud|trashed-cloud>");
    println!("  fotobox page <collection> <page> <page-size>");
    println!("  fotobox trash <entry>");
    println!("  fotobox restore <entry>");
    println!("  fotobox trash-cloud <url>");
    println!("  fotobox restore-cloud <url>");
    println!("  fotobox upload <entry>");
    println!("  fotobox fetch <url>");
    println!("  fotobox export <entry>");
    println!("  fotobox reset <collection>");
}
