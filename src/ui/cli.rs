// Command-line interface definitions and parsing for velorisk

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to render directly; without one the interactive shell starts
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Data
    /// Directory holding the dataset files
    #[arg(long, value_name = "DIR", help_heading = "Data")]
    pub data_dir: Option<String>,

    /// Half-width of the high-risk hour window
    #[arg(long, value_name = "HOURS", help_heading = "Data")]
    pub risk_window: Option<u8>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,

    // Performance Analysis
    /// Show render timing and memory usage
    #[arg(long, help_heading = "Performance Analysis")]
    pub show_performance: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project summary with a dataset preview
    Summary,
    /// Project hypotheses and findings
    Hypotheses,
    /// Pearson correlation study of the cleaned dataset
    Correlation,
    /// Theft-risk lookup for a district, bicycle type and hour
    Predict {
        /// Bicycle type to assess (prompted for when omitted)
        #[arg(long, value_name = "TYPE")]
        bike_type: Option<String>,

        /// District name or LOR location code (prompted for when omitted)
        #[arg(long, value_name = "NAME_OR_CODE")]
        district: Option<String>,

        /// Hour of day to assess, 0-23 (prompted for when omitted)
        #[arg(long, value_name = "HOUR", value_parser = clap::value_parser!(u8).range(0..=23))]
        hour: Option<u8>,
    },
    /// Offline model-performance metrics
    Performance,
    /// Project conclusions and recommendations
    Conclusions,
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Collect the configuration-relevant CLI arguments
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        config_file: cli.config.clone(),
        no_config: cli.no_config,
        data_dir: cli.data_dir.clone(),
        risk_window: cli.risk_window,
        output_format: cli.format.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        show_performance: cli.show_performance,
    }
}
