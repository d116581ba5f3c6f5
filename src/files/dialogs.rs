//! Native file dialogs using the rfd crate.

use crate::export::ExportFormat;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Opens a native save dialog for a download, pre-filled with the format's
/// default file name.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_export_dialog(format: ExportFormat, initial_dir: Option<&Path>) -> Option<PathBuf> {
    let (filter_name, extensions) = format.filter();
    let mut dialog = FileDialog::new()
        .set_title(format!("Save {}", format.file_name()))
        .add_filter(filter_name, extensions)
        .add_filter("All Files", &["*"])
        .set_file_name(format.file_name());

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}
