//! Report the installed clang's version number.
//!
//! The binary runs `clang --version`, scans the banner for the word
//! `version ` and prints the numeric token that follows it. The pieces are
//! exposed here so build scripts and tests can drive them directly.

pub mod cli;
pub mod error;
pub mod extract;
pub mod logging;
pub mod query;

pub use cli::{parse_args, Action, USAGE};
pub use error::Error;
pub use extract::{extract_version, MarkerNotFound, Mode, MARKER};
pub use query::{Compiler, DEFAULT_PROGRAM, PROGRAM_ENV};

/// Run the compiler and extract its version in the requested mode.
pub fn compiler_version(compiler: &Compiler, mode: Mode) -> Result<String, Error> {
    let banner = compiler.query()?;
    let token = extract_version(&banner, mode).map_err(|_| Error::MarkerNotFound {
        command: compiler.command_line(),
    })?;
    tracing::debug!(?mode, token, "extracted version");
    Ok(token.to_string())
}
