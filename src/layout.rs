use crate::constants::P_NAMESPACE;
use crate::{Error, Result};
use roxmltree::Document;

/// A placeholder declared by a slide layout (`p:ph` inside a `p:sp`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRef {
    /// `type` attribute (`title`, `ctrTitle`, `body`, ...), absent on plain
    /// body placeholders.
    pub ph_type: Option<String>,
    /// `idx` attribute; absent on title placeholders (implicitly 0).
    pub idx: Option<u32>,
}

impl PlaceholderRef {
    pub fn is_title(&self) -> bool {
        matches!(self.ph_type.as_deref(), Some("title") | Some("ctrTitle"))
    }
}

/// The placeholders one slide layout part exposes.
#[derive(Debug, Clone)]
pub struct LayoutInfo {
    /// Package path of the layout part, e.g. `ppt/slideLayouts/slideLayout3.xml`.
    pub part_path: String,
    pub placeholders: Vec<PlaceholderRef>,
}

impl LayoutInfo {
    pub fn title_placeholder(&self) -> Option<&PlaceholderRef> {
        self.placeholders.iter().find(|ph| ph.is_title())
    }

    /// The non-title placeholder with the given `idx` attribute. This is the
    /// lookup slide plans use to address their regions.
    pub fn body_placeholder(&self, idx: u32) -> Option<&PlaceholderRef> {
        self.placeholders
            .iter()
            .find(|ph| !ph.is_title() && ph.idx == Some(idx))
    }
}

/// Extracts the placeholder declarations from slide layout XML.
///
/// Walks the layout's `p:cSld`/`p:spTree` and records the `p:ph` of every
/// shape that carries one. Shapes without a `p:ph` are not addressable from
/// a slide and are skipped.
///
/// # Errors
///
/// Fails if the XML is not valid UTF-8, not well-formed, or missing the
/// `p:cSld`/`p:spTree` skeleton every layout part must have.
pub fn parse_layout_placeholders(xml_data: &[u8]) -> Result<Vec<PlaceholderRef>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();
    let ns = root.tag_name().namespace();

    let c_sld = root
        .children()
        .find(|n| n.tag_name().name() == "cSld" && n.tag_name().namespace() == ns)
        .ok_or(Error::Package("layout has no <p:cSld>"))?;

    let sp_tree = c_sld
        .children()
        .find(|n| n.tag_name().name() == "spTree" && n.tag_name().namespace() == ns)
        .ok_or(Error::Package("layout has no <p:spTree>"))?;

    let mut placeholders = Vec::new();
    for sp_node in sp_tree.children().filter(|n| {
        n.is_element()
            && n.tag_name().name() == "sp"
            && n.tag_name().namespace() == Some(P_NAMESPACE)
    }) {
        let ph_node = sp_node.descendants().find(|n| {
            n.is_element()
                && n.tag_name().name() == "ph"
                && n.tag_name().namespace() == Some(P_NAMESPACE)
        });

        if let Some(ph) = ph_node {
            let idx = ph.attribute("idx").and_then(|v| v.parse::<u32>().ok());
            placeholders.push(PlaceholderRef {
                ph_type: ph.attribute("type").map(str::to_string),
                idx,
            });
        }
    }

    Ok(placeholders)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>
        <p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="3" name="Content 2"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>
        <p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="4" name="Content 3"/><p:cNvSpPr/><p:nvPr><p:ph idx="2"/></p:nvPr></p:nvSpPr>
        <p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
</p:sldLayout>"#;

    fn layout() -> LayoutInfo {
        LayoutInfo {
            part_path: "ppt/slideLayouts/slideLayout3.xml".to_string(),
            placeholders: parse_layout_placeholders(LAYOUT_XML.as_bytes()).unwrap(),
        }
    }

    #[test]
    fn finds_every_placeholder_shape() {
        let info = layout();
        assert_eq!(info.placeholders.len(), 3);
    }

    #[test]
    fn title_lookup_matches_title_and_ctr_title() {
        let info = layout();
        let title = info.title_placeholder().unwrap();
        assert_eq!(title.ph_type.as_deref(), Some("title"));
        assert!(title.idx.is_none());
    }

    #[test]
    fn body_lookup_is_by_idx_attribute() {
        let info = layout();
        assert_eq!(info.body_placeholder(1).unwrap().ph_type.as_deref(), Some("body"));
        assert!(info.body_placeholder(2).unwrap().ph_type.is_none());
        assert!(info.body_placeholder(7).is_none());
    }

    #[test]
    fn malformed_layout_is_rejected() {
        let err = parse_layout_placeholders(b"<p:sldLayout xmlns:p=\"x\"/>");
        assert!(err.is_err());
    }
}
