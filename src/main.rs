use clap::Parser;
use restcrud::utils::{logger, validation::Validate};
use restcrud::{
    CliConfig, DryRunFilesystem, LocalFilesystem, LogFormat, ScaffoldError, ScaffoldEvent,
    Scaffolder,
};

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match settings.log_format {
        LogFormat::Compact => logger::init_cli_logger(settings.verbose),
        LogFormat::Json => logger::init_json_logger(settings.verbose),
    }

    tracing::info!("Starting restcrud");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let print_progress = |event: &ScaffoldEvent| println!("{}", event);
    let root = settings.root_path();

    let result = if settings.dry_run {
        let fs = DryRunFilesystem::new();
        let result = Scaffolder::new(&fs).generate_with(root, print_progress);
        tracing::info!(
            "Dry run finished, {} operations planned, nothing written",
            fs.planned().len()
        );
        result
    } else {
        Scaffolder::new(LocalFilesystem::new()).generate_with(root, print_progress)
    };

    match result {
        Ok(report) => tracing::debug!("Report: {:?}", report),
        Err(e) => fail(&e),
    }
}

fn fail(e: &ScaffoldError) -> ! {
    tracing::error!(
        "Scaffolding failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
