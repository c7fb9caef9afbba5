use crate::constants::{
    CONTENT_TYPES_PART, FIRST_SLIDE_ID, PRESENTATION_PART, PRESENTATION_RELS_PART, P_NAMESPACE,
    R_NAMESPACE, SLIDE_CONTENT_TYPE, SLIDE_LAYOUT_REL_TYPE, SLIDE_MASTER_REL_TYPE, SLIDE_REL_TYPE,
};
use crate::deck_config::DeckConfig;
use crate::layout::{parse_layout_placeholders, LayoutInfo};
use crate::parse_rels::{next_relationship_id, parse_relationships, target_of};
use crate::slide_xml::render_slide;
use crate::types::SlidePlan;
use crate::{Error, Result};
use roxmltree::Document;
use std::io::{Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

/// In-memory representation of a loaded presentation template.
///
/// `PptxPackage` reads the whole template archive up front, resolves the
/// ordered slide-layout list through the first slide master, and appends
/// slides by rewriting the affected package parts. Nothing touches disk
/// until [`PptxPackage::save`].
pub struct PptxPackage {
    /// Archive entries in original order; rewritten parts are replaced in
    /// place, new parts appended.
    parts: Vec<(String, Vec<u8>)>,
    /// Layout part paths in the order the first slide master lists them.
    /// Positional layout indices resolve against this.
    layout_paths: Vec<String>,
    /// Highest `ppt/slides/slideN.xml` part number already present.
    slide_number: u32,
    /// Next free `p:sldId` value.
    next_slide_id: u32,
}

impl PptxPackage {
    /// Opens a template pptx file and initializes a `PptxPackage`.
    ///
    /// Reads every archive entry into memory, numbers past any slides the
    /// template already contains, and resolves the layout order:
    /// `presentation.xml` names the first slide master, whose
    /// `p:sldLayoutIdLst` lists the layouts in positional order.
    ///
    /// # Errors
    ///
    /// Errors are returned on file access problems, unzip failures, or when
    /// the template is missing the presentation/master parts every pptx has.
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut parts = Vec::with_capacity(archive.len());
        let mut slide_number = 0;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();

            if let Some(number) = slide_part_number(&name) {
                slide_number = slide_number.max(number);
            }

            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;
            parts.push((name, content));
        }

        let mut package = Self {
            parts,
            layout_paths: Vec::new(),
            slide_number,
            next_slide_id: FIRST_SLIDE_ID,
        };
        package.layout_paths = package.resolve_layout_paths()?;
        package.next_slide_id = package.next_free_slide_id()?;
        Ok(package)
    }

    /// The layout at a positional index, with its placeholders parsed.
    pub fn layout(&self, position: usize) -> Result<LayoutInfo> {
        let part_path = self
            .layout_paths
            .get(position)
            .ok_or(Error::LayoutNotFound(position))?
            .clone();
        let placeholders = parse_layout_placeholders(self.part(&part_path)?)?;
        Ok(LayoutInfo { part_path, placeholders })
    }

    /// Number of slide parts currently in the package.
    pub fn slide_count(&self) -> u32 {
        self.slide_number
    }

    /// Renders a slide plan against the layout at `layout_position` and
    /// appends it to the presentation.
    ///
    /// Adds the slide part and its `.rels`, registers the content type, a
    /// fresh presentation relationship, and a fresh `p:sldId` entry.
    pub fn append_slide(
        &mut self,
        layout_position: usize,
        plan: &SlidePlan,
        config: &DeckConfig,
    ) -> Result<()> {
        let layout = self.layout(layout_position)?;
        let slide_xml = render_slide(plan, &layout, config)?;

        let number = self.slide_number + 1;
        let slide_part = format!("ppt/slides/slide{}.xml", number);

        // the slide's own rels: a single relationship to its layout
        let layout_target = format!(
            "../{}",
            layout.part_path.strip_prefix("ppt/").unwrap_or(&layout.part_path)
        );
        let slide_rels = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
             <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
             <Relationship Id=\"rId1\" Type=\"{SLIDE_LAYOUT_REL_TYPE}\" Target=\"{layout_target}\"/>\
             </Relationships>"
        );

        self.register_content_type(&slide_part)?;
        let rel_id = self.register_presentation_relationship(&slide_part)?;
        self.register_slide_id(&rel_id)?;

        self.parts.push((slide_part.clone(), slide_xml.into_bytes()));
        self.parts.push((rels_path_for(&slide_part), slide_rels.into_bytes()));
        self.slide_number = number;
        Ok(())
    }

    /// Writes all parts to `path`, overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for (name, content) in &self.parts {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(content)?;
        }
        writer.finish()?;
        Ok(())
    }

    fn part(&self, name: &str) -> Result<&[u8]> {
        self.parts
            .iter()
            .find(|(part_name, _)| part_name == name)
            .map(|(_, content)| content.as_slice())
            .ok_or(Error::Package("required part missing from template"))
    }

    fn part_str(&self, name: &str) -> Result<&str> {
        Ok(std::str::from_utf8(self.part(name)?)?)
    }

    fn set_part(&mut self, name: &str, content: Vec<u8>) {
        if let Some(slot) = self.parts.iter_mut().find(|(part_name, _)| part_name == name) {
            slot.1 = content;
        } else {
            self.parts.push((name.to_string(), content));
        }
    }

    /// presentation.xml → first master (via the presentation rels) → the
    /// master's `p:sldLayoutIdLst` in document order (via the master rels).
    fn resolve_layout_paths(&self) -> Result<Vec<String>> {
        let pres_rels = parse_relationships(self.part(PRESENTATION_RELS_PART)?)?;

        let pres_xml = self.part_str(PRESENTATION_PART)?;
        let doc = Document::parse(pres_xml)?;
        let master_id = doc
            .root_element()
            .descendants()
            .find(|n| {
                n.tag_name().name() == "sldMasterId"
                    && n.tag_name().namespace() == Some(P_NAMESPACE)
            })
            .and_then(|n| n.attribute((R_NAMESPACE, "id")))
            .ok_or(Error::Package("presentation.xml lists no slide master"))?;

        let master_rel = pres_rels
            .iter()
            .find(|rel| rel.id == master_id && rel.rel_type == SLIDE_MASTER_REL_TYPE)
            .ok_or(Error::Package("slide master relationship missing"))?;
        let master_part = resolve_target(PRESENTATION_PART, &master_rel.target);

        let master_rels = parse_relationships(self.part(&rels_path_for(&master_part))?)?;
        let master_doc_src = self.part_str(&master_part)?;
        let master_doc = Document::parse(master_doc_src)?;

        let mut layout_paths = Vec::new();
        for layout_id in master_doc.root_element().descendants().filter(|n| {
            n.tag_name().name() == "sldLayoutId" && n.tag_name().namespace() == Some(P_NAMESPACE)
        }) {
            let rel_id = layout_id
                .attribute((R_NAMESPACE, "id"))
                .ok_or(Error::Package("sldLayoutId without r:id"))?;
            let target = target_of(&master_rels, rel_id)?;
            layout_paths.push(resolve_target(&master_part, target));
        }

        Ok(layout_paths)
    }

    fn next_free_slide_id(&self) -> Result<u32> {
        let pres_xml = self.part_str(PRESENTATION_PART)?;
        let doc = Document::parse(pres_xml)?;
        let max_existing = doc
            .root_element()
            .descendants()
            .filter(|n| {
                n.tag_name().name() == "sldId" && n.tag_name().namespace() == Some(P_NAMESPACE)
            })
            .filter_map(|n| n.attribute("id").and_then(|v| v.parse::<u32>().ok()))
            .max()
            .unwrap_or(FIRST_SLIDE_ID - 1);
        Ok(max_existing.max(FIRST_SLIDE_ID - 1) + 1)
    }

    fn register_content_type(&mut self, slide_part: &str) -> Result<()> {
        let xml = self.part_str(CONTENT_TYPES_PART)?;
        let insert = format!(
            "<Override PartName=\"/{slide_part}\" ContentType=\"{SLIDE_CONTENT_TYPE}\"/>"
        );
        let updated = splice_before(xml, "</Types>", &insert)
            .ok_or(Error::Package("[Content_Types].xml has no closing Types tag"))?;
        self.set_part(CONTENT_TYPES_PART, updated.into_bytes());
        Ok(())
    }

    fn register_presentation_relationship(&mut self, slide_part: &str) -> Result<String> {
        let rels = parse_relationships(self.part(PRESENTATION_RELS_PART)?)?;
        let rel_id = next_relationship_id(&rels);

        let target = slide_part.strip_prefix("ppt/").unwrap_or(slide_part);
        let xml = self.part_str(PRESENTATION_RELS_PART)?;
        let insert = format!(
            "<Relationship Id=\"{rel_id}\" Type=\"{SLIDE_REL_TYPE}\" Target=\"{target}\"/>"
        );
        let updated = splice_before(xml, "</Relationships>", &insert)
            .ok_or(Error::Package("presentation rels has no closing tag"))?;
        self.set_part(PRESENTATION_RELS_PART, updated.into_bytes());
        Ok(rel_id)
    }

    /// Appends a `p:sldId` for the new slide, creating the `p:sldIdLst`
    /// after the master list when the template has none.
    fn register_slide_id(&mut self, rel_id: &str) -> Result<()> {
        let pres_xml = self.part_str(PRESENTATION_PART)?;
        let doc = Document::parse(pres_xml)?;
        let root = doc.root_element();

        let p = prefix_for(&root, P_NAMESPACE)
            .ok_or(Error::Package("presentation.xml does not declare the presentationml namespace"))?;
        let r = prefix_for(&root, R_NAMESPACE)
            .ok_or(Error::Package("presentation.xml does not declare the relationships namespace"))?;

        let entry = format!(
            "<{p}:sldId id=\"{id}\" {r}:id=\"{rel_id}\"/>",
            id = self.next_slide_id
        );

        let close_list = format!("</{p}:sldIdLst>");
        let empty_list = format!("<{p}:sldIdLst/>");
        let close_masters = format!("</{p}:sldMasterIdLst>");

        let updated = if let Some(result) = splice_before(pres_xml, &close_list, &entry) {
            result
        } else if pres_xml.contains(&empty_list) {
            pres_xml.replacen(
                &empty_list,
                &format!("<{p}:sldIdLst>{entry}</{p}:sldIdLst>"),
                1,
            )
        } else if let Some(pos) = pres_xml.find(&close_masters) {
            let mut result = pres_xml.to_string();
            result.insert_str(
                pos + close_masters.len(),
                &format!("<{p}:sldIdLst>{entry}</{p}:sldIdLst>"),
            );
            result
        } else {
            return Err(Error::Package("presentation.xml has no slide or master id list"));
        };

        self.set_part(PRESENTATION_PART, updated.into_bytes());
        self.next_slide_id += 1;
        Ok(())
    }
}

/// Part number of `ppt/slides/slideN.xml` names, `None` for everything else.
fn slide_part_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")
        .and_then(|rest| rest.strip_suffix(".xml"))
        .and_then(|number| number.parse::<u32>().ok())
}

/// Path of the `.rels` part belonging to a package part.
///
/// For `ppt/slides/slide1.xml` this is `ppt/slides/_rels/slide1.xml.rels`.
fn rels_path_for(part: &str) -> String {
    let mut rels_path = part.to_string();
    if let Some(pos) = rels_path.rfind('/') {
        rels_path.insert_str(pos + 1, "_rels/");
    } else {
        rels_path.insert_str(0, "_rels/");
    }
    rels_path.push_str(".rels");
    rels_path
}

/// Resolves a relationship target relative to the part that declared it.
fn resolve_target(base_part: &str, target: &str) -> String {
    if let Some(stripped) = target.strip_prefix("../") {
        let parent = base_part
            .rsplit_once('/')
            .and_then(|(dir, _)| dir.rsplit_once('/'))
            .map(|(grandparent, _)| grandparent)
            .unwrap_or("");
        if parent.is_empty() {
            stripped.to_string()
        } else {
            format!("{}/{}", parent, stripped)
        }
    } else {
        let dir = base_part.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
        if dir.is_empty() {
            target.to_string()
        } else {
            format!("{}/{}", dir, target)
        }
    }
}

fn splice_before(xml: &str, marker: &str, insert: &str) -> Option<String> {
    let pos = xml.rfind(marker)?;
    let mut result = String::with_capacity(xml.len() + insert.len());
    result.push_str(&xml[..pos]);
    result.push_str(insert);
    result.push_str(&xml[pos..]);
    Some(result)
}

fn prefix_for(root: &roxmltree::Node, uri: &str) -> Option<String> {
    root.namespaces()
        .find(|ns| ns.uri() == uri)
        .and_then(|ns| ns.name())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_part_numbers() {
        assert_eq!(slide_part_number("ppt/slides/slide12.xml"), Some(12));
        assert_eq!(slide_part_number("ppt/slides/_rels/slide12.xml.rels"), None);
        assert_eq!(slide_part_number("ppt/slideLayouts/slideLayout1.xml"), None);
    }

    #[test]
    fn rels_path_sits_next_to_the_part() {
        assert_eq!(rels_path_for("ppt/slides/slide1.xml"), "ppt/slides/_rels/slide1.xml.rels");
        assert_eq!(rels_path_for("ppt/presentation.xml"), "ppt/_rels/presentation.xml.rels");
        assert_eq!(rels_path_for("[Content_Types].xml"), "_rels/[Content_Types].xml.rels");
    }

    #[test]
    fn targets_resolve_relative_to_the_declaring_part() {
        assert_eq!(
            resolve_target("ppt/presentation.xml", "slideMasters/slideMaster1.xml"),
            "ppt/slideMasters/slideMaster1.xml"
        );
        assert_eq!(
            resolve_target("ppt/slideMasters/slideMaster1.xml", "../slideLayouts/slideLayout3.xml"),
            "ppt/slideLayouts/slideLayout3.xml"
        );
    }

    #[test]
    fn splice_inserts_before_the_last_marker() {
        let spliced = splice_before("<Types><Override/></Types>", "</Types>", "<New/>").unwrap();
        assert_eq!(spliced, "<Types><Override/><New/></Types>");
        assert!(splice_before("<Types/>", "</Types>", "<New/>").is_none());
    }
}
