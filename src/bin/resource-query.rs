use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use resource_db::{EngineConfig, QueryParams, ResourceQueryEngine};

/// Run one resource query and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "resource-query", version, about)]
struct Cli {
    /// JSON config file (source, page_size, tag_column).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file to read, overriding the config.
    #[arg(long, value_name = "CSV")]
    source: Option<PathBuf>,

    /// Rows per page, overriding the config.
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Print only the tag vocabulary.
    #[arg(long)]
    tags_only: bool,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,

    /// URL query string, e.g. `kw=food&tags[]=crisis&pg=2`.
    #[arg(default_value = "")]
    query: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            // Only the outermost message is meant for end users.
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = EngineConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(size) = cli.page_size {
        config.page_size = size;
    }
    config.validate()?;

    let engine = ResourceQueryEngine::from_config(config);
    let json = if cli.tags_only {
        let tags = engine.tags()?;
        to_json(&tags, cli.pretty)?
    } else {
        let params = QueryParams::from_query_string(&cli.query);
        let result = engine.run(&params)?;
        to_json(&result, cli.pretty)?
    };
    println!("{json}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("serializing result")
}
