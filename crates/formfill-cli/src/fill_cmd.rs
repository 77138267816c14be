use std::path::{Path, PathBuf};

use formfill::{FillRequest, FormLibrary, filled_filename};
use tracing::debug;

use crate::shared::{open_form, report};

pub fn run(
    library: &FormLibrary,
    form: &str,
    text: &[(String, String)],
    check: &[(String, bool)],
    request: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), i32> {
    let mut fill = match request {
        Some(path) => read_request(path)?,
        None => FillRequest::new(),
    };
    // Command-line values override the request file.
    fill.merge(FillRequest {
        fields: text.iter().cloned().collect(),
        checkboxes: check.iter().cloned().collect(),
    });
    debug!(values = fill.len(), "built fill request");

    let bytes = open_form(library, form)
        .and_then(|mut doc| doc.fill(&fill.into()))
        .map_err(report)?;
    let path = output.map_or_else(|| PathBuf::from(filled_filename(form)), Path::to_path_buf);

    std::fs::write(&path, &bytes).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", path.display());
        1
    })?;
    println!("{}", path.display());
    Ok(())
}

fn read_request(path: &Path) -> Result<FillRequest, i32> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", path.display());
        1
    })?;
    serde_json::from_str(&data).map_err(|e| {
        eprintln!("Error: invalid fill request {}: {e}", path.display());
        1
    })
}
