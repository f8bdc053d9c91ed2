//! Ledger - a worked example of sifter-based record filtering.
//!
//! Filters a small transaction ledger with a composite predicate
//! (`to u3, OR sent between timestamps 109 and 111`), sorts by ascending
//! amount, and prints the result page by page.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use sifter::{Dir, Predicate, RecordProcessor, Value};

/// A single money transfer between two users.
#[derive(Debug, Clone, Deserialize)]
struct Transaction {
    id: u32,
    from_id: String,
    to_id: String,
    amount: i64,
    timestamp: i64,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.id, self.from_id, self.to_id, self.amount, self.timestamp
        )
    }
}

/// Ledger - filter, sort, and page a transaction ledger
#[derive(Parser)]
#[command(name = "ledger")]
#[command(about = "Filter, sort, and page a transaction ledger")]
struct Cli {
    /// Read transactions from a JSON file instead of the built-in samples
    #[arg(long)]
    input: Option<PathBuf>,
}

fn sample_transactions() -> Vec<Transaction> {
    let rows = [
        (1, "u1", "u2", 10, 108),
        (2, "u2", "u3", 120, 109),
        (3, "u3", "u2", 30, 110),
        (4, "u3", "u1", 10, 111),
        (5, "u1", "u2", 50, 112),
        (6, "u1", "u3", 60, 113),
    ];
    rows.into_iter()
        .map(|(id, from_id, to_id, amount, timestamp)| Transaction {
            id,
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            amount,
            timestamp,
        })
        .collect()
}

fn load_transactions(path: &PathBuf) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid ledger file {}", path.display()))
}

fn print_page(title: &str, page: &[Transaction]) {
    println!("{title}");
    for transaction in page {
        println!("{transaction}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let transactions = match &cli.input {
        Some(path) => load_transactions(path)?,
        None => sample_transactions(),
    };

    let to_u3 = Predicate::new(|t: &Transaction| t.to_id == "u3");
    let from_109 = Predicate::new(|t: &Transaction| t.timestamp >= 109);
    let until_111 = Predicate::new(|t: &Transaction| t.timestamp <= 111);
    let interesting = to_u3.or(&from_109.and(&until_111));

    let mut processor = RecordProcessor::new(transactions);
    processor
        .filter_records(&interesting)
        .sort_by_key(|t| Value::Int(t.amount), Dir::Asc);

    print_page("First Page:", processor.get_page(3, 0));
    print_page("Second Page:", processor.get_page(2, 2));

    Ok(())
}
