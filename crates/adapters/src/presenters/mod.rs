use fotobox_application::ImportReport;
use fotobox_domain::ContentRef;

pub fn present_index_row(position: usize, entry: &ContentRef) -> String {
    format!("{position}\t{entry}")
}

pub fn present_import_report(report: &ImportReport) -> String {
    format!(
        "import finished: scanned={}, imported={}, skipped={}",
        report.scanned_files, report.imported, report.skipped
    )
}
