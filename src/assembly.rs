use crate::deck_config::DeckConfig;
use crate::package::PptxPackage;
use crate::paginate::plan_slides;
use crate::scanner::scan_tree;
use crate::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Output file name for a given report date, e.g.
/// `Reporting-Bauakte 25-08-2026.pptx`.
pub fn default_output_name(date: NaiveDate) -> String {
    format!("Reporting-Bauakte {}.pptx", date.format("%d-%m-%Y"))
}

/// Scans `input_root`, renders the deck against `template`, and saves it
/// into `output_dir` under the dated default name.
///
/// Runs the full pipeline in sequence: scan, plan, render, save. Any
/// existing file under the output name is overwritten without confirmation.
///
/// # Errors
///
/// Fails on an unreadable directory during the scan, a missing or malformed
/// template, or an unwritable output path. No partial output is cleaned up.
pub fn generate_report(
    input_root: &Path,
    template: &Path,
    output_dir: &Path,
    config: &DeckConfig,
) -> Result<PathBuf> {
    let scan = scan_tree(input_root)?;
    let plans = plan_slides(&scan, config);

    let mut package = PptxPackage::open(template)?;
    for plan in &plans {
        package.append_slide(config.layout_position(plan.layout), plan, config)?;
    }

    let output = output_dir.join(default_output_name(chrono::Local::now().date_naive()));
    package.save(&output)?;
    Ok(output)
}
