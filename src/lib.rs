mod assembly;
mod constants;
mod deck_config;
mod layout;
mod package;
mod paginate;
mod parse_rels;
mod scanner;
pub mod shell;
mod slide_xml;
mod types;

pub use assembly::{default_output_name, generate_report};
pub use deck_config::{DeckConfig, DeckConfigBuilder};
pub use layout::{LayoutInfo, PlaceholderRef};
pub use package::PptxPackage;
pub use paginate::plan_slides;
pub use scanner::{scan_tree, DirectoryRecord, ScanResult};
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slide layout at position {0} not found in template")]
    LayoutNotFound(usize),

    #[error("Placeholder {placeholder} not found in layout {layout}")]
    PlaceholderNotFound { layout: String, placeholder: String },

    #[error("Malformed package: {0}")]
    Package(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
