//! CLI Adapter.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;

use crate::app::api;
use crate::domain::AppError;

const DETAILS: &str = "\
Given an instance home directory <home> and an optional [host:]port
(default 9999), create the following:

  <home>/etc/zeo.conf     -- ZEO config file
  <home>/var/             -- Directory for data files: Data.fs etc.
  <home>/log/             -- Directory for log files: zeo.log and zeoctl.log
  <home>/bin/runzeo       -- the zeo server runner
  <home>/bin/zeoctl       -- start/stop script (a shim for zeoctl.py)

Existing files are never overwritten; a warning is printed for an existing
file that differs from the file that would be written.";

#[derive(Parser, Debug)]
#[command(name = "mkzeoinstance")]
#[command(version)]
#[command(about = "Create a ZEO instance home", long_about = None)]
#[command(override_usage = "mkzeoinstance [OPTIONS] <home> [[host:]port]")]
#[command(after_help = DETAILS)]
struct Cli {
    /// Instance home directory, then an optional [host:]port to listen on
    #[arg(value_name = "ARGS")]
    args: Vec<OsString>,

    /// Directories searched for the ZODB and zdaemon packages (falls back to PYTHONPATH)
    #[arg(long, env = "MKZEOINSTANCE_SEARCH_PATH", value_name = "PATHS")]
    search_path: Option<OsString>,

    /// Installation root of zdaemon (the directory containing `zdaemon/`)
    #[arg(long, env = "ZDAEMON_HOME", value_name = "DIR")]
    zdaemon_home: Option<PathBuf>,

    /// Interpreter written into the generated scripts (defaults to python3 on PATH)
    #[arg(long, env = "MKZEOINSTANCE_PYTHON", value_name = "PATH")]
    python: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let program = program_name();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                print!("{}", e.render());
                std::process::exit(2);
            }
        },
    };

    if !(1..=2).contains(&cli.args.len()) {
        println!("{}", usage_line(&program));
        std::process::exit(2);
    }

    match run_create(cli) {
        Ok(()) => println!("All done."),
        Err(e) if e.is_anticipated() => {
            println!("{}", e);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run_create(cli: Cli) -> Result<(), AppError> {
    let mut args = cli.args.into_iter();
    let home = args.next().map(PathBuf::from).ok_or_else(|| AppError::usage("missing home"))?;
    let address = args
        .next()
        .map(|arg| {
            arg.into_string().map_err(|raw| {
                AppError::usage(format!("address is not valid UTF-8: {}", raw.to_string_lossy()))
            })
        })
        .transpose()?;

    let search_path = search_path(cli.search_path.as_deref(), std::env::var_os("PYTHONPATH"));
    let inputs = api::default_inputs(search_path, cli.zdaemon_home, cli.python)?;
    api::create_instance(&inputs, &home, address.as_deref())?;
    Ok(())
}

/// Split the configured search path, falling back to `PYTHONPATH` when unset or empty.
fn search_path(configured: Option<&OsStr>, pythonpath: Option<OsString>) -> Vec<PathBuf> {
    let raw = configured
        .filter(|value| !value.is_empty())
        .map(OsStr::to_os_string)
        .or(pythonpath);
    raw.map(|value| std::env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default()
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mkzeoinstance".to_string())
}

fn usage_line(program: &str) -> String {
    format!("Usage: {} home [[host:]port]", program)
}
