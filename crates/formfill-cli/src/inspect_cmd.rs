use formfill::FormLibrary;

use crate::shared::{open_form, report};

pub fn run(library: &FormLibrary, form: &str, name: &str) -> Result<(), i32> {
    let debug = open_form(library, form)
        .and_then(|doc| doc.inspect_field(name))
        .map_err(report)?;
    let json_str = serde_json::to_string_pretty(&debug).map_err(|e| {
        eprintln!("Error: failed to serialize field: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}
