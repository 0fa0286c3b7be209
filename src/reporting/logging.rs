use crate::config::Config;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: data_dir={}, risk_window={}, format={}",
        config.data_dir.as_deref().unwrap_or("data"),
        config.risk_window(),
        config.output_format.as_deref().unwrap_or("text")
    );
    info!(
        "District properties: id={}, name={}",
        config.district_id_property(),
        config.district_name_property()
    );
}

/// Log a dataset load
pub fn log_load_info(file: &str, rows: usize, skipped: usize) {
    if skipped == 0 {
        info!("Loaded {rows} row(s) from {file}");
    } else {
        warn!("Loaded {rows} row(s) from {file}, skipped {skipped} unusable row(s)");
    }
}

/// Log a page selection in the interactive shell
pub fn log_page_selected(title: &str) {
    info!("Rendering page: {title}");
}

/// Log a completed page render
pub fn log_page_complete(title: &str, duration_ms: u128) {
    info!("✅ Rendered '{title}' in {duration_ms}ms");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        log_config_info(&Config::default());
        log_load_info("thefts.csv", 100, 0);
        log_load_info("thefts.csv", 100, 3);
        log_page_selected("Project Summary");
        log_page_complete("Project Summary", 12);
        log_warning("a warning");
        log_error("an error", None);

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        log_error("an error with source", Some(&io_error));
    }
}
