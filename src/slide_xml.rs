use crate::constants::{A_NAMESPACE, P_NAMESPACE, R_NAMESPACE};
use crate::deck_config::DeckConfig;
use crate::layout::{LayoutInfo, PlaceholderRef};
use crate::types::{Region, SlideEntry, SlidePlan};
use crate::{Error, Result};

/// Escapes the five XML special characters in text content.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders one slide plan into a complete `p:sld` part.
///
/// Each region becomes a shape whose `p:ph` mirrors the layout's placeholder
/// of the same idx, so position and size are inherited from the layout. The
/// title shape is only emitted when the plan has title text.
///
/// # Errors
///
/// Returns [`Error::PlaceholderNotFound`] when the plan addresses a
/// placeholder (or needs a title) the layout does not expose.
pub fn render_slide(plan: &SlidePlan, layout: &LayoutInfo, config: &DeckConfig) -> Result<String> {
    let mut shapes = String::new();
    let mut shape_id = 2u32;

    if let Some(title) = &plan.title {
        let ph = layout
            .title_placeholder()
            .ok_or_else(|| Error::PlaceholderNotFound {
                layout: layout.part_path.clone(),
                placeholder: "title".to_string(),
            })?;
        shapes.push_str(&title_shape(shape_id, ph, title));
        shape_id += 1;
    }

    for region in &plan.regions {
        let ph = layout
            .body_placeholder(region.placeholder_idx)
            .ok_or_else(|| Error::PlaceholderNotFound {
                layout: layout.part_path.clone(),
                placeholder: format!("idx {}", region.placeholder_idx),
            })?;
        shapes.push_str(&body_shape(shape_id, ph, region, config));
        shape_id += 1;
    }

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
         <p:sld xmlns:a=\"{A_NAMESPACE}\" xmlns:r=\"{R_NAMESPACE}\" xmlns:p=\"{P_NAMESPACE}\">\
         <p:cSld><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr/>\
         {shapes}\
         </p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sld>"
    ))
}

/// The `p:ph` element of a slide shape, copying type/idx from the layout so
/// PowerPoint binds the shape to the right placeholder.
fn ph_element(ph: &PlaceholderRef) -> String {
    let mut attrs = String::new();
    if let Some(ph_type) = &ph.ph_type {
        attrs.push_str(&format!(" type=\"{}\"", ph_type));
    }
    if let Some(idx) = ph.idx {
        attrs.push_str(&format!(" idx=\"{}\"", idx));
    }
    format!("<p:ph{}/>", attrs)
}

fn title_shape(shape_id: u32, ph: &PlaceholderRef, title: &str) -> String {
    format!(
        "<p:sp><p:nvSpPr>\
         <p:cNvPr id=\"{shape_id}\" name=\"Title {shape_id}\"/>\
         <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
         <p:nvPr>{ph}</p:nvPr>\
         </p:nvSpPr><p:spPr/>\
         <p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody>\
         </p:sp>",
        ph = ph_element(ph),
        text = escape_xml(title),
    )
}

fn body_shape(shape_id: u32, ph: &PlaceholderRef, region: &Region, config: &DeckConfig) -> String {
    // The placeholder's default first paragraph stays empty; entries are
    // appended after it, one paragraph each.
    let mut paragraphs = String::from("<a:p/>");
    for entry in &region.entries {
        paragraphs.push_str(&entry_paragraph(entry, config));
    }

    format!(
        "<p:sp><p:nvSpPr>\
         <p:cNvPr id=\"{shape_id}\" name=\"Placeholder {shape_id}\"/>\
         <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
         <p:nvPr>{ph}</p:nvPr>\
         </p:nvSpPr><p:spPr/>\
         <p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody>\
         </p:sp>",
        ph = ph_element(ph),
    )
}

/// One styled paragraph per entry. Size and color come from the entry's tag,
/// not from the region it landed in.
fn entry_paragraph(entry: &SlideEntry, config: &DeckConfig) -> String {
    let (label, font_size, color) = match entry {
        SlideEntry::Folder(_) => (&config.folder_label, config.folder_font_size, config.folder_color),
        SlideEntry::File(_) => (&config.file_label, config.file_font_size, config.file_color),
    };

    // run property sizes are in hundredths of a point
    format!(
        "<a:p><a:r>\
         <a:rPr lang=\"en-US\" sz=\"{sz}\" dirty=\"0\"><a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill></a:rPr>\
         <a:t>{text}</a:t>\
         </a:r></a:p>",
        sz = font_size * 100,
        color = color.to_hex(),
        text = escape_xml(&format!("{}: {}", label, entry.name())),
    )
}
