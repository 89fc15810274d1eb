use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use algoviz::config::Config;
use algoviz::services::Session;
use algoviz::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Algoviz Contributors")]
enum Cli {
    /// Execute session commands from a script file, or stdin when omitted
    Run {
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short, long)]
        script: Option<PathBuf>,
    },
    /// Print the default configuration as TOML
    Config {
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Run { config, script } => {
            let config = match config {
                Some(path) => Config::load(path)?,
                None => Config::default(),
            };
            logging::init(&config.log)?;

            let result = run(&config, script);
            logging::shutdown();
            result?;
        }
        Cli::Config { output } => {
            let config = Config::default();
            match output {
                Some(path) => {
                    config.save(&path)?;
                    println!("Default configuration written to {}", path.display());
                }
                None => print!("{}", config.to_toml()?),
            }
        }
    }

    Ok(())
}

fn run(config: &Config, script: Option<PathBuf>) -> Result<()> {
    let mut session = Session::new(config.limits.clone());
    let input: Box<dyn BufRead> = match script {
        Some(path) => Box::new(io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in input.lines() {
        let line = line?;
        match session.execute_line(&line) {
            Ok(Some(output)) => writeln!(out, "{}", output)?,
            Ok(None) => {}
            Err(err) => {
                log::warn!("command '{}' failed: {}", line.trim(), err);
                writeln!(out, "error: {}", err)?;
            }
        }
    }

    Ok(())
}
