use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "csvgraph-desktop",
    version,
    about = "Render CSV columns as a scatter plot and print the result as JSON",
    long_about = None
)]
struct Cli {
    /// CSV file to plot (`-` reads stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    csv: PathBuf,

    /// Plot options as inline JSON, e.g. '{"columns":["a"],"xdata":true}'
    #[arg(long, conflicts_with = "options_file", required_unless_present = "options_file")]
    options: Option<String>,

    /// Read plot options JSON from a file instead
    #[arg(long, value_hint = ValueHint::FilePath)]
    options_file: Option<PathBuf>,
}

impl Cli {
    fn options_json(&self) -> Result<String> {
        match (&self.options, &self.options_file) {
            (Some(inline), _) => Ok(inline.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("failed to read options file {}", path.display())),
            // clap enforces one of the two
            (None, None) => Ok(String::from("{}")),
        }
    }
}

fn read_csv(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read CSV from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read CSV file {}", path.display()))
}

fn run(cli: &Cli) -> Result<plot::PlotResponse> {
    let csv = read_csv(&cli.csv)?;
    let options = cli.options_json()?;
    debug!(bytes = csv.len(), "loaded CSV input");
    Ok(plot::handle_request(&csv, &options))
}

fn main() -> ExitCode {
    plot::logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(response) => {
            println!("{}", response.to_json());
            if response.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_options_are_used_verbatim() {
        let cli = Cli::try_parse_from(["csvgraph-desktop", "data.csv", "--options", "{\"columns\":[\"a\"]}"])
            .unwrap();
        assert_eq!(cli.csv, PathBuf::from("data.csv"));
        assert_eq!(cli.options_json().unwrap(), "{\"columns\":[\"a\"]}");
    }

    #[test]
    fn options_source_is_required() {
        assert!(Cli::try_parse_from(["csvgraph-desktop", "data.csv"]).is_err());
    }

    #[test]
    fn both_option_sources_conflict() {
        let parsed = Cli::try_parse_from([
            "csvgraph-desktop",
            "data.csv",
            "--options",
            "{}",
            "--options-file",
            "opts.json",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_csv_file_is_an_io_error() {
        let cli = Cli::try_parse_from([
            "csvgraph-desktop",
            "/definitely/not/here.csv",
            "--options",
            "{}",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read CSV file"));
    }
}
