use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter.
pub const LOG_ENV: &str = "CLANG_VERSION_LOG";

/// Install a stderr subscriber when `CLANG_VERSION_LOG` holds a valid filter.
///
/// Nothing is installed otherwise, so stdout and stderr carry only the
/// program's own output.
pub fn init() {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return;
    };
    let filter = match EnvFilter::try_new(&directives) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Warning: ignoring invalid {}: {}", LOG_ENV, e);
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
