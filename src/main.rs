mod cli;

use cli::Args;
use sbom_refine::adapters::outbound::console::StderrProgressReporter;
use sbom_refine::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use sbom_refine::application::dto::RefineRequest;
use sbom_refine::application::use_cases::RefineBomUseCase;
use sbom_refine::config;
use sbom_refine::ports::outbound::OutputPresenter;
use sbom_refine::refinement::domain::RefineOptions;
use sbom_refine::shared::error::ExitCode;
use sbom_refine::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with ExitCode::InvalidArguments on its own
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Merge config file toggles with CLI flags
    let options = resolve_options(&args)?;

    // Create adapters (Dependency Injection)
    let bom_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RefineBomUseCase::new(bom_reader, progress_reporter);

    let request = RefineRequest::new(args.input.clone(), options, args.dry_run);
    let response = use_case.execute(request)?;

    if response.dry_run {
        return Ok(());
    }

    let output = response.document.to_json_string()?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&output)?;

    Ok(())
}

/// CLI flags OR-combined with the explicit or discovered config file
fn resolve_options(args: &Args) -> Result<RefineOptions> {
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(input_directory(&args.input))?,
    };

    let cli_options = args.refine_options();
    Ok(match config {
        Some(config) => config.merge_into(cli_options),
        None => cli_options,
    })
}

fn input_directory(input: &Path) -> &Path {
    match input.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    }
}
