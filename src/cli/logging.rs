use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging with the specified level.
///
/// Log lines go to stderr so that rendered markup on stdout stays clean.
pub fn init_logging(debug: bool) -> LevelFilter {
    let level = log_level(debug);

    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    level
}

/// Level used for a run, `Info` unless debugging
pub fn log_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
