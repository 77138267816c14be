use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use formfill::DEFAULT_FORMS_DIR;

use crate::shared::{parse_checkbox_assignment, parse_text_assignment};

/// List, fill, and inspect PDF AcroForm fields.
#[derive(Debug, Parser)]
#[command(name = "formfill", about, version)]
pub struct Cli {
    /// Directory searched for `<FORM>.pdf` when FORM is a slug
    #[arg(
        long,
        global = true,
        env = "FORMFILL_FORMS_DIR",
        value_name = "DIR",
        default_value = DEFAULT_FORMS_DIR
    )]
    pub forms_dir: PathBuf,

    /// Log filter used when RUST_LOG is unset (e.g. 'debug', 'formfill=trace')
    #[arg(long, global = true, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the terminal fields of a form
    Fields {
        /// Form slug (resolved in --forms-dir) or path to a PDF file
        #[arg(value_name = "FORM")]
        form: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Fill a form and write the result
    Fill {
        /// Form slug (resolved in --forms-dir) or path to a PDF file
        #[arg(value_name = "FORM")]
        form: String,

        /// Set a text field (repeatable)
        #[arg(long = "text", value_name = "NAME=VALUE", value_parser = parse_text_assignment)]
        text: Vec<(String, String)>,

        /// Set a checkbox or checkbox group, e.g. 'form1.Agree=true' (repeatable)
        #[arg(long = "check", value_name = "NAME=BOOL", value_parser = parse_checkbox_assignment)]
        check: Vec<(String, bool)>,

        /// JSON fill request: {"fields": {...}, "checkboxes": {...}}
        #[arg(long, value_name = "FILE")]
        request: Option<PathBuf>,

        /// Output path. Default: <slug>-filled.pdf in the current directory
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Dump the structure of one field as JSON
    Inspect {
        /// Form slug (resolved in --forms-dir) or path to a PDF file
        #[arg(value_name = "FORM")]
        form: String,

        /// Fully-qualified field name, e.g. 'form1.Pt1Line1_FamilyName[0]'
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Output format for the fields subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
