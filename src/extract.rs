/// Anchor text that precedes the version number in a compiler banner.
pub const MARKER: &str = "version ";

/// Which part of the version number to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Dotted version such as `16.0.0`.
    #[default]
    Full,
    /// Leading digit run only, such as `16`.
    Major,
}

impl Mode {
    fn allows(self, c: char) -> bool {
        match self {
            Mode::Full => c.is_ascii_digit() || c == '.',
            Mode::Major => c.is_ascii_digit(),
        }
    }
}

/// The banner did not contain [`MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("marker {:?} not found", MARKER)]
pub struct MarkerNotFound;

/// Extract the version token following the first occurrence of [`MARKER`].
///
/// The token is the run of allowed characters (`0-9.` in full mode, `0-9`
/// in major mode) starting right after the marker. If the run reaches the
/// end of `text`, everything after the marker is returned. A marker followed
/// directly by a disallowed character yields an empty token.
pub fn extract_version(text: &str, mode: Mode) -> Result<&str, MarkerNotFound> {
    let start = text.find(MARKER).ok_or(MarkerNotFound)? + MARKER.len();
    let rest = &text[start..];

    match rest.find(|c: char| !mode.allows(c)) {
        Some(end) => Ok(&rest[..end]),
        None => Ok(rest),
    }
}

