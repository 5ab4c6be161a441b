use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rewrite_terms::output::{FormFormatter, JsonFormatter, PlainFormatter, ResultsFormatter};
use rewrite_terms::rewriting::{RewriteConfig, RewriteEngine, RewriteRequest, TermOrder};
use rewrite_terms::utils::json::load_json;

/// Rewrites a term with a set of rules and prints every distinct result.
///
/// The request is a term of the form `(rewrite [repeat] (-> pattern replacement)* target)`.
/// Variables in patterns are leaves starting with an uppercase letter or `_`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The request; read from `--file` or standard input when absent
    request: Option<String>,

    /// File containing the request
    #[arg(short, long, conflicts_with = "request")]
    file: Option<PathBuf>,

    /// JSON file with the engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rounds, overriding the request and the configuration
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    repeat: Option<u64>,

    /// Order used to sort and deduplicate results
    #[arg(short, long, value_enum)]
    order: Option<TermOrder>,

    /// Print the results of every round, not only the last
    #[arg(long)]
    rounds: bool,

    /// Print results as a `(results ...)` term
    #[arg(long, conflicts_with = "json")]
    form: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// With `--json`, also print each result as a serialized tree
    #[arg(long, requires = "json")]
    trees: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn read_request(args: &Args) -> anyhow::Result<String> {
    if let Some(request) = &args.request {
        return Ok(request.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()));
    }

    let mut request = String::new();
    std::io::stdin()
        .read_to_string(&mut request)
        .context("reading request from standard input")?;
    Ok(request)
}

fn load_config(args: &Args) -> anyhow::Result<RewriteConfig> {
    let mut config = match &args.config {
        Some(path) => load_json(path)?,
        None => RewriteConfig::default(),
    };
    if let Some(order) = args.order {
        config.order = order;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let text = read_request(&args)?;
    if text.trim().is_empty() {
        bail!("empty rewrite request");
    }
    let mut request: RewriteRequest = text.parse().context("invalid rewrite request")?;
    if let Some(repeat) = args.repeat {
        request.set_repeat(usize::try_from(repeat).context("too many rounds")?);
    }

    let engine = RewriteEngine::new(config);
    let rounds = request.rounds(&engine);
    info!(
        rules = request.rules().len(),
        rounds,
        term = %request.target(),
        "rewriting"
    );

    let results = if args.rounds {
        let engine = RewriteEngine::new(RewriteConfig {
            repeat: rounds,
            ..engine.config().clone()
        });
        engine.trace(request.rules(), request.target())
    } else {
        vec![request.evaluate(&engine)]
    };
    debug!(
        results = results.last().map_or(0, |r| r.len()),
        "rewriting finished"
    );

    let formatter: Box<dyn ResultsFormatter> = if args.json {
        Box::new(JsonFormatter { trees: args.trees })
    } else if args.form {
        Box::new(FormFormatter)
    } else {
        Box::new(PlainFormatter {
            color: !args.no_color,
        })
    };
    print!("{}", formatter.format_rounds(&results)?);

    Ok(())
}
