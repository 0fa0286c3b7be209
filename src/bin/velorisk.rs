use clap::{CommandFactory, Parser};
use velorisk::config::{CliConfig, Config};
use velorisk::core::constants::output_formats;
use velorisk::data::DataStore;
use velorisk::reporting::PerformanceProfiler;
use velorisk::reporting::logging;
use velorisk::ui::pages::{self, Page, PredictionArgs, RenderOptions};
use velorisk::ui::{Cli, Commands, cli_to_config, print_completions, run_shell};

fn main() {
    let cli = Cli::parse();

    // Completions write to stdout and involve no configuration
    if let Some(Commands::CompletionGenerate { shell }) = &cli.command {
        let mut app = Cli::command();
        print_completions(*shell, &mut app);
        std::process::exit(0);
    }

    match run_velorisk_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main dashboard logic extracted from main() for testing
pub fn run_velorisk_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(
        config.verbose.unwrap_or(false),
        cli_config.quiet,
    );
    logging::log_config_info(&config);

    let store = DataStore::from_config(&config);
    let options = build_render_options(&cli_config, &config);

    let Some(command) = &cli.command else {
        run_shell(&store, &options)?;
        return Ok(0);
    };

    let mut profiler = if config.show_performance.unwrap_or(false) {
        Some(PerformanceProfiler::new())
    } else {
        None
    };

    let (title, result) = run_page_command(command, &store, &options, profiler.as_mut());

    if let Some(profiler) = profiler {
        profiler.display_summary();
    }

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            logging::log_error(&format!("Could not render '{title}'"), Some(&e));
            eprintln!("Error: {e}");
            Ok(1)
        }
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Derive the per-render display settings
pub fn build_render_options(cli_config: &CliConfig, config: &Config) -> RenderOptions {
    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();
    let show_progress = !cli_config.quiet && !cli_config.no_progress;

    RenderOptions {
        format,
        show_progress,
        risk_window: config.risk_window(),
    }
}

/// Render the page named by a subcommand, timing it when profiling
fn run_page_command(
    command: &Commands,
    store: &DataStore,
    options: &RenderOptions,
    mut profiler: Option<&mut PerformanceProfiler>,
) -> (&'static str, velorisk::Result<()>) {
    let started = std::time::Instant::now();
    let title = command_page_title(command);
    let timer = profiler.as_mut().map(|p| p.start_operation(title));

    let result = match command {
        Commands::Summary => pages::render_page(Page::Summary, store, options),
        Commands::Hypotheses => pages::render_page(Page::Hypotheses, store, options),
        Commands::Correlation => pages::render_page(Page::Correlation, store, options),
        Commands::Predict {
            bike_type,
            district,
            hour,
        } => {
            let args = PredictionArgs {
                bike_type: bike_type.clone(),
                district: district.clone(),
                hour: *hour,
            };
            pages::render_prediction(store, options, &args)
        }
        Commands::Performance => pages::render_page(Page::Performance, store, options),
        Commands::Conclusions => pages::render_page(Page::Conclusions, store, options),
        Commands::CompletionGenerate { .. } => unreachable!("handled before config loading"),
    };

    if let (Some(profiler), Some(timer)) = (profiler, timer) {
        profiler.finish_operation(timer, 0);
    }
    if result.is_ok() {
        logging::log_page_complete(title, started.elapsed().as_millis());
    }

    (title, result)
}

fn command_page_title(command: &Commands) -> &'static str {
    match command {
        Commands::Summary => Page::Summary.title(),
        Commands::Hypotheses => Page::Hypotheses.title(),
        Commands::Correlation => Page::Correlation.title(),
        Commands::Predict { .. } => Page::Prediction.title(),
        Commands::Performance => Page::Performance.title(),
        Commands::Conclusions => Page::Conclusions.title(),
        Commands::CompletionGenerate { .. } => "Completions",
    }
}
