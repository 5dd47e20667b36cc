mod cli;

use cli::Args;
use deptrace::adapters::outbound::console::StderrProgressReporter;
use deptrace::application::factories::{
    FormatterFactory, MetadataReaderFactory, PresenterFactory, PresenterType,
};
use deptrace::application::read_models::ResolutionReadModelBuilder;
use deptrace::application::use_cases::ResolveDependenciesUseCase;
use deptrace::config::load_resolver_config;
use deptrace::ports::outbound::ProgressReporter;
use deptrace::shared::error::ExitCode;
use deptrace::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    // Clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = StderrProgressReporter::new();

    // Load configuration, CLI flags take precedence
    let (config, unknown_fields) = load_resolver_config(&args.config, &args.overrides())?;
    for key in unknown_fields {
        progress_reporter.report_error(&format!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        ));
    }

    // Create adapters (Dependency Injection)
    let metadata_reader = MetadataReaderFactory::create(config.mode)?;
    let use_case = ResolveDependenciesUseCase::new(metadata_reader, progress_reporter);

    let response = use_case.execute(config.to_request())?;
    let exit_code = if response.has_cycle() {
        ExitCode::CycleDetected
    } else {
        ExitCode::Success
    };

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let read_model = ResolutionReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(args.format).format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(exit_code)
}
