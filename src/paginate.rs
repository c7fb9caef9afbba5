use crate::deck_config::DeckConfig;
use crate::scanner::{DirectoryRecord, ScanResult};
use crate::types::{LayoutSlot, Region, SlideEntry, SlidePlan};

/// Turns a scan result into an ordered list of slide plans.
///
/// The plan sequence is: one blank title slide, one folder-start slide for
/// the scan root (all entries in a single unpaginated region), a run of
/// default folder slides per remaining record (paginated at
/// `max_items_per_slide`), and one blank closing slide.
///
/// This is a pure planning pass; nothing here knows about templates or the
/// package format, so the pagination rules are testable on their own.
pub fn plan_slides(scan: &ScanResult, config: &DeckConfig) -> Vec<SlidePlan> {
    let mut plans = vec![SlidePlan::bare(LayoutSlot::Title)];

    if let Some(root) = scan.folders.first() {
        plans.push(folder_start_plan(root, config));
    }

    for record in scan.folders.iter().skip(1) {
        paginate_record(record, config, &mut plans);
    }

    plans.push(SlidePlan::bare(LayoutSlot::Closing));
    plans
}

/// All folder entries before all file entries, each group in scan order.
fn record_entries(record: &DirectoryRecord) -> Vec<SlideEntry> {
    let mut entries: Vec<SlideEntry> = record
        .subfolder_names
        .iter()
        .map(|name| SlideEntry::Folder(name.clone()))
        .collect();
    entries.extend(record.file_names.iter().map(|name| SlideEntry::File(name.clone())));
    entries
}

/// The scan root's slide: bare folder name as title, every entry in the one
/// big region. No pagination applies here, whatever the entry count.
fn folder_start_plan(root: &DirectoryRecord, config: &DeckConfig) -> SlidePlan {
    let mut region = Region::new(config.big_placeholder_idx);
    region.entries = record_entries(root);

    SlidePlan {
        layout: LayoutSlot::FolderStart,
        title: Some(root.base_name()),
        regions: vec![region],
    }
}

fn default_folder_slide(title: Option<String>, config: &DeckConfig) -> SlidePlan {
    SlidePlan {
        layout: LayoutSlot::DefaultFolder,
        title,
        regions: vec![
            Region::new(config.left_placeholder_idx),
            Region::new(config.right_placeholder_idx),
        ],
    }
}

fn paginate_record(record: &DirectoryRecord, config: &DeckConfig, plans: &mut Vec<SlidePlan>) {
    let entries = record_entries(record);
    let total = entries.len();

    let title = format!("{}: {}", config.folder_label, record.base_name());
    let mut slide = default_folder_slide(Some(title), config);
    let mut items_on_slide = 0usize;

    for (pos, entry) in entries.into_iter().enumerate() {
        // One counter drives both the column parity and the overflow check,
        // so every fresh slide restarts in the left column.
        let region = items_on_slide % 2;
        slide.regions[region].entries.push(entry);
        items_on_slide += 1;

        // Overflow only when entries remain; an exact multiple of the cap
        // must not leave a trailing empty slide. Continuation slides carry
        // no title.
        if items_on_slide >= config.max_items_per_slide && pos + 1 < total {
            plans.push(std::mem::replace(&mut slide, default_folder_slide(None, config)));
            items_on_slide = 0;
        }
    }

    plans.push(slide);
}
