//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::VaultDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(VaultDirectory),
    Fullscreen,
    SetPassword,
}

/// Parse command-line arguments.
///
/// `args` includes the program name at index 0. `--version` and `--help`
/// print to stderr and exit the process.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("vault-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of vault datadir
    --fullscreen        Display the unlock dialog over the whole window
    --set-password      Read a new password from stdin, store its hash and exit.
                        The input is echoed, pipe it in to keep it off screen
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut args = args.iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--datadir" => {
                if let Some(a) = args.next() {
                    res.push(Arg::DatadirPath(VaultDirectory::new(PathBuf::from(a))));
                } else {
                    return Err("missing arg to --datadir".into());
                }
            }
            "--fullscreen" => res.push(Arg::Fullscreen),
            "--set-password" => res.push(Arg::SetPassword),
            a => return Err(format!("unknown argument '{}'", a).into()),
        }
    }

    Ok(res)
}
