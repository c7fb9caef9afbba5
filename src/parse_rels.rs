use crate::{Error, Result};
use roxmltree::Document;

/// One entry of an OPC relationships (`.rels`) part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// Parses relationship (`.rels`) XML data into its entries.
///
/// Relationship parts map `rId` identifiers to target parts; the template's
/// presentation and master rels are resolved through this, and new slide
/// relationships are numbered past the existing ones.
///
/// # Errors
///
/// An error is returned if the XML data is not valid UTF-8 or the XML
/// structure is malformed.
pub fn parse_relationships(xml_data: &[u8]) -> Result<Vec<Relationship>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let mut relationships = Vec::new();
    for rel in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
    {
        let id = rel.attribute("Id");
        let rel_type = rel.attribute("Type");
        let target = rel.attribute("Target");
        if let (Some(id), Some(rel_type), Some(target)) = (id, rel_type, target) {
            relationships.push(Relationship {
                id: id.to_string(),
                rel_type: rel_type.to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(relationships)
}

/// Looks up the target of a relationship by its id.
pub fn target_of<'a>(relationships: &'a [Relationship], id: &str) -> Result<&'a str> {
    relationships
        .iter()
        .find(|rel| rel.id == id)
        .map(|rel| rel.target.as_str())
        .ok_or(Error::Package("relationship id not found"))
}

/// The first free `rIdN` identifier, numbering past every existing entry.
pub fn next_relationship_id(relationships: &[Relationship]) -> String {
    let max = relationships
        .iter()
        .filter_map(|rel| rel.id.strip_prefix("rId").and_then(|n| n.parse::<u32>().ok()))
        .max()
        .unwrap_or(0);
    format!("rId{}", max + 1)
}
