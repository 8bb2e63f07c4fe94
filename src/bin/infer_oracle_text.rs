use std::io::{self, Read};

use clap::Parser;
use oracle_infer::{
    Action, AbilityKind, ChosenType, OracleParser, ParseOptions, action_lines,
    error::CardTextError,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Infers actions from oracle text blocks read on stdin.
///
/// Blocks are separated by a `---` line; a leading `Name: ` line is optional.
#[derive(Debug, Parser)]
#[command(name = "infer_oracle_text")]
struct Args {
    /// Print the detection bundle and inferred actions as JSON.
    #[arg(long)]
    json: bool,

    /// Print totals after processing all blocks.
    #[arg(long)]
    summary: bool,

    /// Creature type substituted into "of the chosen type" text.
    #[arg(long, value_name = "TYPE")]
    chosen_type: Option<String>,

    /// Longest accepted block, in bytes.
    #[arg(
        long,
        env = "ORACLE_INFER_MAX_INPUT",
        default_value_t = oracle_infer::parser::DEFAULT_MAX_INPUT_LEN
    )]
    max_input: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    detected: oracle_infer::DetectAllResult,
    actions: Vec<Vec<Action>>,
}

#[derive(Debug, Default)]
struct Summary {
    blocks: usize,
    rejected: usize,
    activated: usize,
    triggered: usize,
    static_clauses: usize,
    unrecognized_blocks: usize,
}

fn split_block(block: &str) -> (&str, &str) {
    match block.split_once('\n') {
        Some((first, rest)) if first.starts_with("Name: ") => {
            (first.trim_start_matches("Name: ").trim(), rest.trim())
        }
        _ => match block.strip_prefix("Name: ") {
            Some(name) => (name.trim(), ""),
            None => ("", block),
        },
    }
}

fn main() -> Result<(), CardTextError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let parser = OracleParser::new(ParseOptions {
        max_input_len: args.max_input,
    });
    let chosen = args
        .chosen_type
        .clone()
        .map(ChosenType::new)
        .unwrap_or_default();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut summary = Summary::default();
    for block in input.split("\n---\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        summary.blocks += 1;
        let (name, text) = split_block(block);

        let detected = match parser.detect_all(text) {
            Ok(detected) => detected,
            Err(err) => {
                summary.rejected += 1;
                tracing::warn!(name, %err, "skipping block");
                continue;
            }
        };

        for ability in &detected.abilities {
            match ability.kind {
                AbilityKind::Activated => summary.activated += 1,
                AbilityKind::Triggered => summary.triggered += 1,
                AbilityKind::Static => summary.static_clauses += 1,
            }
        }

        let actions: Vec<Vec<Action>> = detected
            .abilities_only
            .iter()
            .map(|ability| ability.actions())
            .collect();
        if !actions.is_empty()
            && actions
                .iter()
                .flatten()
                .all(|action| action.is_fallback_note())
        {
            summary.unrecognized_blocks += 1;
        }

        if args.json {
            let report = BlockReport {
                name,
                detected,
                actions,
            };
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        if !name.is_empty() {
            println!("Name: {name}");
        }
        for (ability, ability_actions) in detected.abilities_only.iter().zip(&actions) {
            println!("{:?}: {}", ability.kind, ability.raw);
            for line in action_lines(ability_actions, &chosen) {
                println!("  {line}");
            }
        }
        for token in &detected.innate_tokens {
            println!("Token {}: {}: {}", token.token, token.cost, token.effect);
        }
        println!("---");
    }

    if args.summary {
        println!("Blocks: {}", summary.blocks);
        println!("Rejected: {}", summary.rejected);
        println!(
            "Clauses: {} activated, {} triggered, {} static",
            summary.activated, summary.triggered, summary.static_clauses
        );
        println!("Blocks with no recognized action: {}", summary.unrecognized_blocks);
    }

    Ok(())
}
