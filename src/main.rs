use std::fs;
use std::path::PathBuf;
use std::process;

use adf::{Config, Error};
use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser)]
#[command(name = "adf")]
#[command(version)]
#[command(about = "Convert a plain-text description to Atlassian Document Format JSON")]
struct Cli {
    /// Input text file
    input: PathBuf,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to the built-in settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON on a single line
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(e) => {
            // Argument errors exit with 1 rather than clap's default 2
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::compiled_default(),
    };
    if cli.compact {
        config.output.compact = true;
    }

    log::debug!("Converting {}", cli.input.display());
    let json = adf::convert_file(&cli.input, &config)?;

    match cli.output {
        Some(output) => {
            log::debug!("Writing {}", output.display());
            fs::write(&output, format!("{json}\n")).map_err(|source| Error::Write {
                path: output,
                source,
            })?;
        }
        None => println!("{json}"),
    }

    Ok(())
}
