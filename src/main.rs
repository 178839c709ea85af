// Clickmap: resolve mouse clicks against a scripted screen layout

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser as ClapParser, ValueEnum};
use tracing_subscriber::EnvFilter;

use clickmap::interpreter::engine::run_session;
use clickmap::screen::AddPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// New regions displace covered icons; icons inside a region are dropped
    Overlay,
    /// Regions and icons never affect each other
    Static,
}

impl From<PolicyArg> for AddPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Overlay => AddPolicy::Overlay,
            PolicyArg::Static => AddPolicy::Static,
        }
    }
}

#[derive(ClapParser, Debug)]
#[command(
    name = "clickmap",
    version,
    about = "Interprets a screen-layout command stream and resolves mouse clicks"
)]
struct Args {
    /// Script file to execute; reads standard input when omitted
    script: Option<PathBuf>,

    /// Policy applied when regions and icons overlap at insert time
    #[arg(long, value_enum, default_value_t = PolicyArg::Overlay)]
    policy: PolicyArg,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(err) = run_session(&source, args.policy.into(), stdout.lock()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn read_source(args: &Args) -> io::Result<String> {
    match &args.script {
        Some(path) => {
            if !path.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File '{}' not found", path.display()),
                ));
            }
            fs::read_to_string(path)
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
