use std::path::Path;

use formfill::{Form, FormError, FormLibrary, is_pdf_path};

/// Print a form error to stderr and return the process exit code.
pub fn report(err: FormError) -> i32 {
    eprintln!("Error: {err}");
    1
}

/// Open a form named on the command line.
///
/// An argument ending in `.pdf` is a file path; anything else is a slug
/// resolved inside the library's forms directory.
pub fn open_form(library: &FormLibrary, form: &str) -> Result<Form, FormError> {
    if !is_pdf_path(form) {
        return library.open(form);
    }
    let path = Path::new(form);
    if !path.is_file() {
        return Err(FormError::ResourceNotFound(path.to_path_buf()));
    }
    Form::open_file(path)
}

/// Parse a `NAME=VALUE` text assignment. The value may itself contain `=`.
pub fn parse_text_assignment(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))?;
    if name.is_empty() {
        return Err(format!("empty field name in '{arg}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Parse a `NAME=BOOL` checkbox assignment.
///
/// Accepts `true/false`, `yes/no`, `on/off`, and `1/0`, case-insensitively.
pub fn parse_checkbox_assignment(arg: &str) -> Result<(String, bool), String> {
    let (name, value) = parse_text_assignment(arg)?;
    let checked = match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => return Err(format!("expected a boolean for '{name}', got '{value}'")),
    };
    Ok((name, checked))
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
