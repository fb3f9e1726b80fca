use std::{
    fs,
    io::{self, BufRead, Write},
};

use anyhow::Context as _;
use clap::{Parser, builder::RangedU64ValueParser};
use rlisp::{
    config::{Config, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING},
    eval_source,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// rlisp evaluates integer arithmetic written in prefix notation, such as
/// `(+ 1 (* 2 3))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rlisp to treat the argument as a file and evaluate each of its
    /// lines.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Also print the syntax tree and the value tree of every input.
    #[arg(short, long)]
    tree: bool,

    /// Deepest permitted nesting of parentheses, at most 1024.
    #[arg(long,
          default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_CEILING as u64))]
    max_depth: usize,

    /// An expression to evaluate, or a file path with `--file`. Without it,
    /// rlisp starts an interactive prompt.
    contents: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let config = Config::default().with_max_depth(args.max_depth)
                                  .with_show_tree(args.tree);

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).with_context(|| {
                             format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                         })?;
            for line in script.lines().filter(|l| !l.trim().is_empty()) {
                print_line(line, &config);
            }
        },
        Some(expression) => print_line(&expression, &config),
        None => repl(&config)?,
    }

    Ok(())
}

/// Evaluates one line and prints the result, or the parse diagnostic.
fn print_line(line: &str, config: &Config) {
    match eval_source(line, config) {
        Ok(evaluation) => {
            if let Some(tree) = evaluation.syntax_tree {
                print!("{tree}");
            }
            if let Some(tree) = evaluation.value_tree {
                println!("{tree}");
            }
            println!("{}", evaluation.output);
        },
        Err(e) => println!("{e}"),
    }
}

/// Reads lines from standard input until end of input, evaluating each one.
fn repl(config: &Config) -> anyhow::Result<()> {
    println!("rlisp Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C to Exit\n");
    info!(max_depth = config.max_depth, "starting interactive session");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        print!("rlisp> ");
        stdout.flush()?;

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let line = input.trim();
                if !line.is_empty() {
                    print_line(line, config);
                }
            },
            Err(e) => {
                warn!(error = %e, "could not read input line");
                break;
            },
        }
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_depth_above_the_ceiling_is_rejected() {
        assert!(Args::try_parse_from(["rlisp", "--max-depth", "1000000", "(+ 1 2)"]).is_err());
        assert!(Args::try_parse_from(["rlisp", "--max-depth", "0", "(+ 1 2)"]).is_err());

        let args = Args::try_parse_from(["rlisp", "--max-depth", "1024", "(+ 1 2)"]).unwrap();
        assert_eq!(args.max_depth, MAX_DEPTH_CEILING);
    }

    #[test]
    fn max_depth_defaults_to_the_library_default() {
        let args = Args::try_parse_from(["rlisp", "(+ 1 2)"]).unwrap();
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
    }
}
