use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use flames_core::Reading;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "flames", about = "FLAMES relationship game")]
struct Cli {
    /// First name (prompted for when omitted)
    first: Option<String>,
    /// Second name (prompted for when omitted)
    second: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Show leftover letters and each elimination step
    #[arg(long)]
    explain: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    first: &'a str,
    second: &'a str,
    #[serde(flatten)]
    reading: &'a Reading,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_flags(cli.json, cli.explain);
    tracing::debug!(?config, "flames starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    if cli.first.is_none() || cli.second.is_none() {
        writeln!(out, "Welcome to the FLAMES Game!")?;
    }
    let first = match cli.first {
        Some(name) => name,
        None => prompt(&mut input, &mut out, "first")?,
    };
    let second = match cli.second {
        Some(name) => name,
        None => prompt(&mut input, &mut out, "second")?,
    };

    let reading = flames_core::read(&first, &second);

    match config.format {
        OutputFormat::Json => {
            let report = Report { first: &first, second: &second, reading: &reading };
            let json = serde_json::to_string(&report).context("failed to encode result")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            write!(out, "{}", render_text(&first, &second, &reading, config.explain))?;
        }
    }

    out.flush().context("failed to write result")?;
    Ok(())
}

/// Ask for one name and read a line, trimming only the line terminator.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, which: &str) -> Result<String> {
    write!(out, "Enter the {which} name: ")?;
    out.flush().context("failed to write prompt")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read the {which} name"))?;
    if n == 0 {
        bail!("input closed before the {which} name was entered");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn render_text(first: &str, second: &str, reading: &Reading, explain: bool) -> String {
    let mut text = format!(
        "According to FLAMES, the relationship between {first} and {second} is: {}\n",
        reading.relationship
    );
    if !explain {
        return text;
    }

    text.push_str(&format!(
        "Leftover letters: \"{}\" + \"{}\" = {}\n",
        reading.leftover_first, reading.leftover_second, reading.remaining
    ));
    for step in &reading.steps {
        let landed = step.index.map_or(0, |i| i + 1);
        text.push_str(&format!(
            "  {} in circle, {} mod {} = {landed}: remove {}\n",
            step.length, reading.remaining, step.length, step.removed
        ));
    }
    text
}
