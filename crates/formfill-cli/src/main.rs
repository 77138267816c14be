mod cli;
mod fields_cmd;
mod fill_cmd;
mod inspect_cmd;
mod shared;

use clap::Parser;
use cli::Cli;
use formfill::FormLibrary;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let library = FormLibrary::new(&cli.forms_dir);

    let result = match cli.command {
        cli::Commands::Fields {
            ref form,
            ref format,
        } => fields_cmd::run(&library, form, format),
        cli::Commands::Fill {
            ref form,
            ref text,
            ref check,
            ref request,
            ref output,
        } => fill_cmd::run(
            &library,
            form,
            text,
            check,
            request.as_deref(),
            output.as_deref(),
        ),
        cli::Commands::Inspect { ref form, ref name } => inspect_cmd::run(&library, form, name),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
