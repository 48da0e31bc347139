use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error piping '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find Clang version in '{command}' output.")]
    MarkerNotFound { command: String },
}

impl Error {
    /// Render the message printed on stderr, prefixed the way each failure
    /// has always been reported.
    pub fn report(&self, program: &str) -> String {
        match self {
            Error::Spawn { .. } => format!("*** {}: {}", program, self),
            Error::MarkerNotFound { .. } => format!("*** ERROR: {} {}", program, self),
        }
    }
}
