/// A single display line on a slide, tagged by what it names.
///
/// The tag decides the rendered prefix label, the font size and the color,
/// independent of which placeholder the entry lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideEntry {
    Folder(String),
    File(String),
}

impl SlideEntry {
    pub fn name(&self) -> &str {
        match self {
            SlideEntry::Folder(name) | SlideEntry::File(name) => name,
        }
    }
}

/// An RGB color written as `srgbClr` into run properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form used by the `val` attribute, e.g. `008EAA`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The four template layout roles a slide can be built from.
///
/// Which positional layout index each role maps to is decided by
/// [`crate::DeckConfig`], not hardcoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSlot {
    Title,
    FolderStart,
    DefaultFolder,
    Closing,
}

/// One placeholder region of a planned slide and the entries assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// `idx` attribute of the target `p:ph` in the slide layout.
    pub placeholder_idx: u32,
    pub entries: Vec<SlideEntry>,
}

impl Region {
    pub fn new(placeholder_idx: u32) -> Self {
        Self { placeholder_idx, entries: Vec::new() }
    }
}

/// A fully planned slide, renderable against any template whose layout
/// exposes the referenced placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePlan {
    pub layout: LayoutSlot,
    /// Title text; `None` leaves the slide without a title shape
    /// (title/closing slides, overflow continuation slides).
    pub title: Option<String>,
    pub regions: Vec<Region>,
}

impl SlidePlan {
    pub fn bare(layout: LayoutSlot) -> Self {
        Self { layout, title: None, regions: Vec::new() }
    }

    /// Total number of entries across all regions.
    pub fn entry_count(&self) -> usize {
        self.regions.iter().map(|r| r.entries.len()).sum()
    }
}
