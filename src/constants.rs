/// XML namespace of the PresentationML schema (`p:` prefix in practice).
pub const P_NAMESPACE: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// XML namespace of the DrawingML schema (`a:` prefix in practice).
pub const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// XML namespace used for relationship id attributes (`r:id`).
pub const R_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const SLIDE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const SLIDE_MASTER_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
pub const SLIDE_LAYOUT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

pub const SLIDE_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PRESENTATION_PART: &str = "ppt/presentation.xml";
pub const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";

/// Windows folder-customization file, always excluded from scan results.
pub const METADATA_EXCEPTION_FILE: &str = "desktop.ini";

/// Lowest slide id PowerPoint accepts in `p:sldIdLst`.
pub const FIRST_SLIDE_ID: u32 = 256;
