use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use tmplparse::{
    config::{Config, DEFAULT_TEMPLATE},
    Error, InternalResult, LineParser, ParsedLine,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file with parser options and templates
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template to validate each line against
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Lines to parse; read from stdin when none are given
    lines: Vec<String>,
}

fn report(line: &str, parsed: &ParsedLine) {
    if parsed.is_success() {
        println!("Successful parse of {}", line);
        for (idx, obj) in parsed.objects.iter().enumerate() {
            println!("{} {} {}", idx, obj.kind, obj.value);
        }
    } else {
        println!("Failed parse of {}", line);
        println!("{}", parsed.error_message());
    }
}

fn run(cli: &Cli) -> InternalResult<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    info!("config loaded.");
    debug!("config: {:?}", config);

    let template = config.template(&cli.template)?;
    let parser = LineParser::new(config.parser.clone());

    if cli.lines.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line =
                line.map_err(|e| Error::internal(format!("Failed to read stdin: {}", e)))?;
            report(&line, &parser.parse_line(&line, template));
        }
    } else {
        for line in &cli.lines {
            report(line, &parser.parse_line(line, template));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
