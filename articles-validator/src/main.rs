// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::sync::Arc;

use articles::MetadataSchema;
use articles_validator::{ValidatorConfig, validate_articles};

/// Default metadata schema, embedded at compile time.
const ARTICLE_DATA_SCHEMA: &str = include_str!("../schemas/article-data.schema.json");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let schema = MetadataSchema::from_json_str(ARTICLE_DATA_SCHEMA)?;
    let config = ValidatorConfig::default();

    let report = validate_articles(&config, Arc::new(schema)).await?;
    println!("{}", report.summary_line());
    Ok(())
}
