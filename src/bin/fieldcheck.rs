use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::Value;

use fieldcheck::config::Config;
use fieldcheck::report;
use fieldcheck::{RuleRegistry, RuleSpec, summarize, validate_document};

fn main() -> ExitCode {
    match run() {
        // A completed run that found failures is a normal exit path,
        // distinct from "the validation could not run".
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("fieldcheck: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let document = load_document(&config)?;
    let spec = RuleSpec::load(&config.rules)?;
    let registry = RuleRegistry::with_builtins();

    let results = validate_document(&document, &spec, &registry)?;
    let summary = summarize(&results);

    if config.json_output {
        println!("{}", report::render_json(&results, &summary)?);
    } else {
        print!("{}", report::render_text(&results, &summary));
    }

    Ok(summary.success)
}

fn load_document(config: &Config) -> Result<Value> {
    let text = if config.document.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read document from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&config.document).with_context(|| {
            format!("failed to read document file {}", config.document.display())
        })?
    };

    serde_json::from_str(&text).context("document is not valid JSON")
}
