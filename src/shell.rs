//! Interactive folder selection and the completion notice.
//!
//! Thin wrappers over the native dialogs; the core pipeline takes plain
//! paths and never calls into this module.

use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

/// Asks for the directory to scan. `None` when the dialog is cancelled.
pub fn pick_input_root() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Please select start directory")
        .pick_folder()
}

/// Asks for the directory the deck is written into. `None` when cancelled.
pub fn pick_output_root() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Please select target directory")
        .pick_folder()
}

/// Shows the completion notice for a generated deck.
pub fn notify_done(output: &Path) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("dir-to-pptx")
        .set_description(format!(
            "PowerPoint file '{}' created successfully.",
            output.display()
        ))
        .show();
}
