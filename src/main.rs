use dir_to_pptx::{generate_report, shell, DeckConfig, Result};
use std::path::{Path, PathBuf};

/// Template bundled alongside the executable; must expose the four layouts
/// (title, folder-start, default folder, closing) at positions 0-3.
const TEMPLATE_PATH: &str = "resources/Reporting-Bauakte-Template.pptx";

fn main() {
    let result = run(shell::pick_input_root, shell::pick_output_root);
    match result {
        Ok(Some(output)) => {
            println!("PowerPoint file '{}' created successfully.", output.display());
            shell::notify_done(&output);
        }
        Ok(None) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// The two-step configuration gathering followed by generation.
///
/// Both pickers are passed in so the flow is testable without dialogs.
/// `Ok(None)` means a picker was cancelled: an abort notice is printed and
/// no file is produced. The output picker only opens once the input picker
/// succeeded.
fn run<I, O>(pick_input: I, pick_output: O) -> Result<Option<PathBuf>>
where
    I: FnOnce() -> Option<PathBuf>,
    O: FnOnce() -> Option<PathBuf>,
{
    let Some(input_root) = pick_input() else {
        println!("No folder selected -> abort");
        return Ok(None);
    };
    let Some(output_dir) = pick_output() else {
        println!("No target directory selected -> abort");
        return Ok(None);
    };

    let config = DeckConfig::default();
    generate_report(&input_root, Path::new(TEMPLATE_PATH), &output_dir, &config).map(Some)
}
