use crate::error::Error;
use std::env;
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Compiler program queried when no override is configured.
pub const DEFAULT_PROGRAM: &str = "clang";

/// Environment variable naming the compiler program to query.
pub const PROGRAM_ENV: &str = "CLANG_VERSION_CLANG";

const VERSION_FLAG: &str = "--version";

/// The compiler executable whose banner is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    program: OsString,
}

impl Compiler {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `CLANG_VERSION_CLANG` if set and non-empty, otherwise `clang`.
    pub fn from_env() -> Self {
        let program = env::var_os(PROGRAM_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_PROGRAM));
        Self::new(program)
    }

    /// Command line as shown in diagnostics, e.g. `clang --version`.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program.to_string_lossy(), VERSION_FLAG)
    }

    /// Run `<program> --version` and return everything it wrote to stdout.
    ///
    /// Blocks until the output stream is exhausted and the child has been
    /// reaped. The child's stderr is passed through untouched and its exit
    /// status does not affect the result.
    pub fn query(&self) -> Result<String, Error> {
        tracing::debug!(command = %self.command_line(), "spawning compiler");

        let output = Command::new(&self.program)
            .arg(VERSION_FLAG)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| Error::Spawn {
                command: self.command_line(),
                source,
            })?;

        tracing::debug!(
            status = %output.status,
            bytes = output.stdout.len(),
            "compiler exited"
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

