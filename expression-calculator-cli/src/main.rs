use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_calculator::calculator::{calculate, lexer, parser, tokens_to_string};
use log::{debug, log_enabled, Level};

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate
    expression: String,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let result = calculate(&args.expression)
        .with_context(|| format!("Failed to evaluate expression: {}", args.expression))?;

    if log_enabled!(Level::Debug) {
        let tokens = lexer::tokenize(&args.expression)?;
        let postfix_tokens = parser::convert(tokens)?;
        debug!("postfix form: {}", tokens_to_string(postfix_tokens)?);
    }

    println!("{}", result);

    Ok(())
}
