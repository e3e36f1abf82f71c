//! wikifact - Wikipedia infobox chatbot.

mod table;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use wikifact_infobox::Client;
use wikifact_patact::{ActionError, PatternTable};

/// Wikipedia infobox chatbot.
///
/// Answers natural-language questions ("when was marie curie born?") by
/// matching them against wildcard templates and scraping the answer out
/// of the relevant Wikipedia infobox.
#[derive(Parser, Debug)]
#[command(name = "wikifact")]
#[command(about = "Wikipedia infobox chatbot")]
struct Args {
    /// MediaWiki API endpoint (default: English Wikipedia)
    #[arg(long)]
    endpoint: Option<String>,

    /// Answer a single query and exit
    #[arg(short = 'q', long)]
    query: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    let client = match &args.endpoint {
        Some(endpoint) => Client::with_endpoint(endpoint),
        None => Client::new(),
    };
    let table = table::build_table(&client);

    match &args.query {
        Some(query) => run_once(&table, query),
        None => run_loop(&table),
    }
}

/// Answers one query and exits, for scripting.
fn run_once(table: &PatternTable, query: &str) -> Result<()> {
    match table.dispatch(&normalize(query)) {
        Ok(answers) => {
            for answer in answers {
                println!("{answer}");
            }
            Ok(())
        }
        Err(ActionError::Terminate) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// The interactive query loop. Ends on `bye` or end of input; a lookup
/// failure propagates out as an error report.
fn run_loop(table: &PatternTable) -> Result<()> {
    println!("Welcome to the Wikipedia chatbot!");

    let stdin = io::stdin();
    loop {
        print!("\nYour query? ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match table.dispatch(&normalize(&line)) {
            Ok(answers) => {
                for answer in answers {
                    println!("{answer}");
                }
            }
            Err(ActionError::Terminate) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("\nSo long!\n");
    Ok(())
}

/// Turns raw input into query words: '?' stripped, lowercased, split on
/// whitespace.
fn normalize(line: &str) -> Vec<String> {
    line.replace('?', "")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
