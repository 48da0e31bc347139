use crate::extract::Mode;
use std::ffi::OsStr;

/// Help text printed for `-h` and `--help`.
pub const USAGE: &str = "\
clang-version: print clang version on stdout.
   USAGES:
    - clang-version -h|--help
       Print this help.

    - clang-version [--major]
       Print clang version number on stdout.
       Something like: 16.0.0
       - with -major option: only print major number.

   ENVIRONMENT:
    - CLANG_VERSION_CLANG
       Compiler program to query (default: clang).
    - CLANG_VERSION_LOG
       Diagnostic log filter written to stderr, e.g. debug.

   BUGS: minimal parsing; does not report invalid arguments.";

/// What the invocation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Report(Mode),
}

/// Decide the action from the arguments following the program name.
///
/// Only the first argument is looked at. Anything unrecognised, including
/// arguments that are not valid Unicode, falls back to reporting the full
/// version without complaint.
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Action {
    match args.first().and_then(|arg| arg.as_ref().to_str()) {
        Some("-h" | "--help") => Action::Help,
        Some("--major") => Action::Report(Mode::Major),
        _ => Action::Report(Mode::Full),
    }
}
