use formfill::{FieldRecord, FormLibrary};

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, open_form, report};

pub fn run(library: &FormLibrary, form: &str, format: &OutputFormat) -> Result<(), i32> {
    let fields = open_form(library, form).map_err(report)?.fields();

    match format {
        OutputFormat::Text => write_text(&fields),
        OutputFormat::Json => write_json(&fields),
        OutputFormat::Csv => write_csv(&fields),
    }
}

fn kind_str(field: &FieldRecord) -> String {
    field.kind().map(|k| k.to_string()).unwrap_or_default()
}

fn write_text(fields: &[FieldRecord]) -> Result<(), i32> {
    println!("name\ttype\tkind");
    for field in fields {
        println!("{}\t{}\t{}", field.name, field.field_type, kind_str(field));
    }
    Ok(())
}

fn write_json(fields: &[FieldRecord]) -> Result<(), i32> {
    let json_str = serde_json::to_string(&serde_json::json!({ "fields": fields })).map_err(|e| {
        eprintln!("Error: failed to serialize fields: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(fields: &[FieldRecord]) -> Result<(), i32> {
    println!("name,type");
    for field in fields {
        println!("{},{}", csv_escape(&field.name), csv_escape(&field.field_type));
    }
    Ok(())
}
