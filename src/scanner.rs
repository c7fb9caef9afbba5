use crate::constants::METADATA_EXCEPTION_FILE;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Immediate contents of one visited folder.
///
/// Only direct children are recorded; descendants get records of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub path: PathBuf,
    pub subfolder_names: Vec<String>,
    pub file_names: Vec<String>,
}

impl DirectoryRecord {
    /// Last path component, or the empty string for paths like `/`.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Result of one directory tree scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// One record per visited folder, in pre-order. The first record is the
    /// scan root.
    pub folders: Vec<DirectoryRecord>,
    /// Flat list of every file name across all folders. Kept for downstream
    /// consumers; slide layout iterates `folders` directly.
    pub all_files: Vec<String>,
}

/// Recursively enumerates `root` into a [`ScanResult`].
///
/// A folder is visited before its children (pre-order). Sibling names are
/// sorted byte-wise so rescans of an unchanged tree are reproducible; the
/// OS enumeration order is not part of the contract. `desktop.ini` is
/// excluded from file lists, case-sensitively.
///
/// # Errors
///
/// The first unreadable directory aborts the scan with the underlying
/// [`std::io::Error`]; no partial result is returned.
pub fn scan_tree(root: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    visit(root, &mut result)?;
    Ok(result)
}

fn visit(dir: &Path, result: &mut ScanResult) -> Result<()> {
    let mut subfolder_names = Vec::new();
    let mut file_names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type()?.is_dir() {
            subfolder_names.push(name);
        } else {
            if name == METADATA_EXCEPTION_FILE {
                continue;
            }
            file_names.push(name);
        }
    }

    subfolder_names.sort();
    file_names.sort();

    result.all_files.extend(file_names.iter().cloned());
    result.folders.push(DirectoryRecord {
        path: dir.to_path_buf(),
        subfolder_names: subfolder_names.clone(),
        file_names,
    });

    for name in &subfolder_names {
        visit(&dir.join(name), result)?;
    }

    Ok(())
}
