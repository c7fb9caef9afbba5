use crate::types::{LayoutSlot, RgbColor};

/// Configuration for deck generation.
///
/// Use [`DeckConfig::builder()`] to override individual fields while keeping
/// the defaults for the rest.
///
/// # Configuration Options
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `title_layout` | `0` | Positional index of the title layout in the template |
/// | `folder_start_layout` | `1` | Positional index of the folder-start layout |
/// | `default_folder_layout` | `2` | Positional index of the default folder layout |
/// | `closing_layout` | `3` | Positional index of the closing layout |
/// | `big_placeholder_idx` | `2` | `ph` idx of the folder-start slide's single large region |
/// | `left_placeholder_idx` | `1` | `ph` idx of the left column on default folder slides |
/// | `right_placeholder_idx` | `2` | `ph` idx of the right column on default folder slides |
/// | `folder_font_size` | `11` | Point size for folder entries |
/// | `file_font_size` | `9` | Point size for file entries |
/// | `folder_color` | `008EAA` | Accent color for folder entries |
/// | `file_color` | `424548` | Neutral color for file entries |
/// | `max_items_per_slide` | `40` | Entry cap before an overflow slide is started |
/// | `folder_label` | `"Folder"` | Prefix label for folder entries and slide titles |
/// | `file_label` | `"File"` | Prefix label for file entries |
#[derive(Debug, Clone)]
pub struct DeckConfig {
    pub title_layout: usize,
    pub folder_start_layout: usize,
    pub default_folder_layout: usize,
    pub closing_layout: usize,
    pub big_placeholder_idx: u32,
    pub left_placeholder_idx: u32,
    pub right_placeholder_idx: u32,
    pub folder_font_size: u32,
    pub file_font_size: u32,
    pub folder_color: RgbColor,
    pub file_color: RgbColor,
    pub max_items_per_slide: usize,
    pub folder_label: String,
    pub file_label: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title_layout: 0,
            folder_start_layout: 1,
            default_folder_layout: 2,
            closing_layout: 3,
            big_placeholder_idx: 2,
            left_placeholder_idx: 1,
            right_placeholder_idx: 2,
            folder_font_size: 11,
            file_font_size: 9,
            folder_color: RgbColor::new(0, 142, 170),
            file_color: RgbColor::new(66, 69, 72),
            max_items_per_slide: 40,
            folder_label: "Folder".to_string(),
            file_label: "File".to_string(),
        }
    }
}

impl DeckConfig {
    pub fn builder() -> DeckConfigBuilder {
        DeckConfigBuilder::default()
    }

    /// Resolves a layout role to its positional index in the template.
    pub fn layout_position(&self, slot: LayoutSlot) -> usize {
        match slot {
            LayoutSlot::Title => self.title_layout,
            LayoutSlot::FolderStart => self.folder_start_layout,
            LayoutSlot::DefaultFolder => self.default_folder_layout,
            LayoutSlot::Closing => self.closing_layout,
        }
    }
}

/// Builder for [`DeckConfig`].
///
/// Starts from the defaults; every setter overrides one field.
#[derive(Debug, Default)]
pub struct DeckConfigBuilder {
    config: DeckConfig,
}

impl DeckConfigBuilder {
    /// Positional layout indices for the four slide roles.
    pub fn layouts(mut self, title: usize, folder_start: usize, default_folder: usize, closing: usize) -> Self {
        self.config.title_layout = title;
        self.config.folder_start_layout = folder_start;
        self.config.default_folder_layout = default_folder;
        self.config.closing_layout = closing;
        self
    }

    /// `ph` idx values for the big region and the two alternating columns.
    pub fn placeholders(mut self, big: u32, left: u32, right: u32) -> Self {
        self.config.big_placeholder_idx = big;
        self.config.left_placeholder_idx = left;
        self.config.right_placeholder_idx = right;
        self
    }

    pub fn folder_style(mut self, font_size: u32, color: RgbColor) -> Self {
        self.config.folder_font_size = font_size;
        self.config.folder_color = color;
        self
    }

    pub fn file_style(mut self, font_size: u32, color: RgbColor) -> Self {
        self.config.file_font_size = font_size;
        self.config.file_color = color;
        self
    }

    pub fn max_items_per_slide(mut self, value: usize) -> Self {
        self.config.max_items_per_slide = value;
        self
    }

    pub fn labels(mut self, folder: &str, file: &str) -> Self {
        self.config.folder_label = folder.to_string();
        self.config.file_label = file.to_string();
        self
    }

    pub fn build(self) -> DeckConfig {
        self.config
    }
}
