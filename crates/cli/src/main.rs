//! kodeks CLI — BM25 search over parsed legal-code articles.
//!
//! Three modes:
//! - **Shell mode**: `kodeks -d file.json... QUERY` — one query, exit
//! - **REPL mode**: `kodeks -d file.json...` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "запит" | kodeks -d file.json...` — line-by-line from stdin

mod format;
mod loader;
mod repl;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use kodeks_core::{EngineConfig, TokenizeMode};
use kodeks_engine::Engine;

use format::{format_results, OutputMode};

fn build_cli() -> Command {
    Command::new("kodeks")
        .about("BM25 full-text search over legal-code articles")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .required(true)
                .help("Parsed-article JSON file (repeatable)"),
        )
        .arg(
            Arg::new("limit")
                .short('n')
                .long("limit")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("5")
                .help("Maximum results per query"),
        )
        .arg(
            Arg::new("stemming")
                .long("stemming")
                .action(ArgAction::SetTrue)
                .help("Strip inflectional suffixes when indexing and querying"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit results as JSON instead of result cards"),
        )
        .arg(
            Arg::new("query")
                .value_name("QUERY")
                .num_args(0..)
                .help("Query words; omit to enter interactive mode"),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("data")
        .expect("required")
        .cloned()
        .collect();
    let limit = *matches.get_one::<usize>("limit").expect("defaulted");
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let records = match loader::load_articles(&paths, &loader::default_source_tags()) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(1);
        }
    };

    let config = EngineConfig::default().with_mode(if matches.get_flag("stemming") {
        TokenizeMode::Stemmed
    } else {
        TokenizeMode::Plain
    });
    let engine = match Engine::build(records, config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to build index: {err}");
            process::exit(1);
        }
    };

    let query_words: Vec<String> = matches
        .get_many::<String>("query")
        .map(|words| words.cloned().collect())
        .unwrap_or_default();

    if !query_words.is_empty() {
        // Shell mode: one query, exit
        let query = query_words.join(" ");
        let results = engine.search(&query, limit);
        println!("{}", format_results(&engine, &query, &results, mode));
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&engine, limit, mode);
    } else {
        process::exit(repl::run_pipe(&engine, limit, mode));
    }
}
