//! cliprank CLI entrypoint.
//!
//! Reads a question/answers document from a file argument (or stdin), runs
//! the annotation chain, and prints the resulting container as pretty JSON.
//! With `--resume` the input is treated as a serialized container and the
//! remaining stages run from wherever it left off.

use std::fs;
use std::io::Read;

use anyhow::Context;

use cliprank::pipeline::Pipeline;
use cliprank::score::ScoreConfig;

const USAGE: &str = "usage: cliprank [--resume] [FILE]

Reads raw text (or, with --resume, a serialized container) from FILE or
stdin, runs the annotation pipeline, and prints the annotated container as
JSON. Set CLIPRANK_SCORE_ORDER to choose the scoring n-gram order.";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut resume = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--resume" => resume = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }

    let input = match &path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let config = ScoreConfig::from_env().context("invalid configuration")?;
    tracing::info!(order = config.order, resume, "running annotation pipeline");

    let pipeline = Pipeline::new(config);
    let document = if resume {
        pipeline.resume_json(&input)?
    } else {
        pipeline.run(input)?
    };

    println!("{}", document.to_json_pretty()?);
    Ok(())
}
