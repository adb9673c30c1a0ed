pub mod cli;
pub mod config;
pub mod event;
pub mod inference;
pub mod summary;
pub mod teams;

use env_logger::Env;
use std::io::Write;

// Re-export commonly used types
pub use config::Config;
pub use event::Event;
pub use inference::{infer_names, NameDictionary};
pub use teams::TeamRoster;

/// Filter used when `RUST_LOG` is not set
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the process logger.
///
/// Verbose mode logs every inference stage without timestamps; otherwise
/// records carry a local timestamp.
pub fn init_logger(verbose: bool) {
    let env = Env::default().default_filter_or(default_log_filter(verbose));
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    } else {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        });
    }
    builder.init();
}
