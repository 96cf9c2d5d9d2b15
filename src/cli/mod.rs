// src/cli/mod.rs - CLI definition (clap derive)

pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infra::errors::DrillError;
use crate::io::output::OutputFormat;
use crate::tasks::registry::Family;

#[derive(Parser)]
#[command(name = "drillbook", about = "Textbook algorithm drills", version)]
pub struct Cli {
    /// Read input from a file instead of stdin
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Lists start with their length ("n, then n values")
    #[arg(long, global = true)]
    pub counted: bool,

    /// Output format (defaults to the config file, then plain)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every drill
    List {
        /// Only drills from this family
        #[arg(long, value_enum)]
        family: Option<Family>,
    },

    // ── Numbers ──
    /// Is n prime?
    Prime {
        /// Read from input when omitted
        n: Option<u64>,
    },
    /// Divisors of n, ascending
    Divisors { n: Option<u64> },
    /// Recursive digit sum
    Digits {
        #[arg(allow_negative_numbers = true)]
        n: Option<i64>,
        /// Sum the digits once instead of down to one digit
        #[arg(long)]
        once: bool,
    },
    /// Ways to climb n stairs
    Stairs {
        n: Option<u64>,
        /// Allowed step sizes (defaults to the config, then 1,2)
        #[arg(long, value_delimiter = ',')]
        steps: Option<Vec<u64>>,
    },

    // ── Text ──
    /// Word frequencies
    Words {
        /// Print the number of words instead
        #[arg(long)]
        total: bool,
        /// Fold case before counting
        #[arg(long)]
        ignore_case: bool,
        /// Trim punctuation around words
        #[arg(long)]
        strip_punctuation: bool,
    },
    /// Character frequencies
    Chars,
    /// Caesar cipher
    Caesar {
        /// Places to shift (defaults to the config, then 3)
        #[arg(short, long, allow_negative_numbers = true)]
        shift: Option<i64>,
        /// Shift backwards
        #[arg(long)]
        decode: bool,
    },

    // ── Sequences ──
    /// Drop repeated values, keeping first occurrences
    Dedup,
    /// Running totals
    PrefixSum,
    /// Largest value strictly below the maximum
    SecondLargest,
    /// First value that appears twice
    Duplicate,
    /// Maximum subarray sum (Kadane)
    MaxSubarray {
        /// Also print the inclusive start and end index
        #[arg(long)]
        bounds: bool,
    },
    /// Longest increasing subsequence
    Lis {
        /// Print the subsequence instead of its length
        #[arg(long)]
        sequence: bool,
    },
    /// Insertion sort
    Sort,
    /// Flatten a nested JSON list
    Flatten,

    // ── Matrix ──
    /// Transpose a matrix
    Transpose,
    /// Diagonal sum of a square matrix
    Diagonal {
        /// Add the anti-diagonal, counting the centre once
        #[arg(long)]
        both: bool,
    },

    // ── Combinatorics ──
    /// All permutations
    Permutations {
        /// Keep generation order instead of sorting rows
        #[arg(long)]
        unsorted: bool,
    },
    /// All k-element combinations
    Combinations {
        #[arg(short, long)]
        k: usize,
    },
    /// All subsets
    Subsets,

    // ── Coins ──
    /// Greedy coin change
    Coins {
        amount: Option<u64>,
        /// Coin system (defaults to the config, then 25,10,5,1)
        #[arg(long, value_delimiter = ',')]
        denominations: Option<Vec<u64>>,
        /// Print each denomination with its count
        #[arg(long)]
        breakdown: bool,
        /// Report whether greedy is optimal for this coin system
        #[arg(long)]
        check: bool,
    },
}

impl Commands {
    /// Whether the command reads stdin / `--input` at all.
    pub fn needs_input(&self) -> bool {
        match self {
            Commands::List { .. } => false,
            Commands::Prime { n } | Commands::Divisors { n } => n.is_none(),
            Commands::Digits { n, .. } => n.is_none(),
            Commands::Stairs { n, .. } => n.is_none(),
            Commands::Coins { amount, check, .. } => amount.is_none() && !check,
            _ => true,
        }
    }
}

/// Follow-up advice printed under an error caused by the drill input.
pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<DrillError>()
        .filter(|e| e.is_input_error())
        .map(|_| "run `drillbook list` to see the input each drill expects")
}
