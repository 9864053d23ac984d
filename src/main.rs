use base_converter::app::input::read_number_lines;
use base_converter::app::report::render_report;
use base_converter::core::ConfigProvider;
use base_converter::utils::{logger, validation::Validate};
use base_converter::{AppError, CliConfig, ConversionEngine, FormError, Settings, TomlConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting base-converter");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c));
            match config {
                Ok(config) => Some(config),
                Err(e) => exit_with(&e),
            }
        }
        None => None,
    };

    let settings = Settings::resolve((&cli).into(), file_config.as_ref());
    tracing::debug!("Effective settings: {:?}", settings);

    let engine = match ConversionEngine::new(settings.source_base(), settings.target_base()) {
        Ok(engine) => engine.with_steps(settings.show_steps()),
        Err(e) => exit_with(&e.into()),
    };

    let inputs = if cli.digits.is_empty() {
        match read_number_lines(std::io::stdin().lock()) {
            Ok(lines) => lines,
            Err(e) => exit_with(&e),
        }
    } else {
        cli.digits.clone()
    };

    if inputs.is_empty() {
        exit_with(&FormError::EmptyInput.into());
    }

    let report = engine.run_batch(inputs.as_slice());
    let rendered = render_report(
        &report,
        settings.output_format(),
        settings.show_procedure(),
    );
    match rendered {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => exit_with(&e),
    }

    let exit_code = report.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn exit_with(e: &AppError) -> ! {
    tracing::error!("Aborting: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
