use clang_version::{compiler_version, parse_args, Action, Compiler, USAGE};
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args_os();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let args: Vec<OsString> = args.collect();

    let mode = match parse_args(&args) {
        Action::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Action::Report(mode) => mode,
    };

    clang_version::logging::init();

    let compiler = Compiler::from_env();
    match compiler_version(&compiler, mode) {
        Ok(version) => {
            println!("{}", version);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.report(&program));
            ExitCode::FAILURE
        }
    }
}
