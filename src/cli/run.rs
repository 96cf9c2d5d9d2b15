// src/cli/run.rs - Dispatch a drill: input in, one Output back

use std::collections::BTreeMap;

use crate::cli::Commands;
use crate::infra::config::{Config, WordsConfig};
use crate::infra::errors::Result;
use crate::io::input::Input;
use crate::io::output::Output;
use crate::tasks::{coins, combinatorics, matrix, numbers, registry, sequences, text};

/// Run one drill against `input`.
pub fn execute(command: &Commands, input: &mut Input<'_>, config: &Config) -> Result<Output> {
    tracing::debug!(?command, "executing drill");
    let limit = u128::from(config.limits.max_rows);

    let output: Output = match command {
        Commands::List { family } => Output::Tasks(match family {
            Some(family) => registry::get_by_family(*family).into_iter().copied().collect(),
            None => registry::TASKS.to_vec(),
        }),

        Commands::Prime { n } => {
            let n = input.or_next(*n, "a non-negative integer")?;
            Output::Bool(numbers::is_prime(n))
        }
        Commands::Divisors { n } => {
            let n = input.or_next(*n, "a positive integer")?;
            Output::list(&numbers::divisors(n)?)
        }
        Commands::Digits { n, once } => {
            let n = input.or_next(*n, "an integer")?;
            let sum = if *once {
                numbers::digit_sum(n)
            } else {
                numbers::digital_root(n)
            };
            Output::Int(sum.into())
        }
        Commands::Stairs { n, steps } => {
            let n = input.or_next(*n, "a non-negative integer")?;
            let steps = steps.as_deref().unwrap_or(config.stairs.steps.as_slice());
            let ways = if steps == [1, 2] {
                numbers::climb_stairs(n)?
            } else {
                numbers::climb_stairs_with(n, steps)?
            };
            // u128 counts beyond i128::MAX fall back to text
            match i128::try_from(ways) {
                Ok(ways) => Output::Int(ways),
                Err(_) => Output::Text(ways.to_string()),
            }
        }

        Commands::Words {
            total,
            ignore_case,
            strip_punctuation,
        } => {
            if *total {
                Output::Int(text::word_count(input.raw()) as i128)
            } else {
                let opts = WordsConfig {
                    case_sensitive: config.words.case_sensitive && !ignore_case,
                    strip_punctuation: config.words.strip_punctuation || *strip_punctuation,
                };
                Output::Counts(text::word_frequencies(input.raw(), &opts))
            }
        }
        Commands::Chars => {
            let counts: BTreeMap<String, usize> = text::char_frequencies(input.raw())
                .into_iter()
                .map(|(c, n)| (c.to_string(), n))
                .collect();
            Output::Counts(counts)
        }
        Commands::Caesar { shift, decode } => {
            let shift = shift.unwrap_or(config.caesar.shift);
            // rem_euclid first so negating i64::MIN can't overflow
            let shift = if *decode {
                -shift.rem_euclid(26)
            } else {
                shift
            };
            Output::Text(text::caesar(input.text(), shift))
        }

        Commands::Dedup => Output::list(&sequences::dedup_preserving_order(&input.ints()?)),
        Commands::PrefixSum => Output::list(&sequences::prefix_sums(&input.ints()?)?),
        Commands::SecondLargest => sequences::second_largest(&input.ints()?).into(),
        Commands::Duplicate => sequences::first_duplicate(&input.ints()?).into(),
        Commands::MaxSubarray { bounds } => {
            let best = sequences::max_subarray(&input.ints()?)?;
            if *bounds {
                Output::List(vec![best.sum, best.start as i128, best.end as i128])
            } else {
                Output::Int(best.sum)
            }
        }
        Commands::Lis { sequence } => {
            let lis = sequences::longest_increasing_subsequence(&input.ints()?);
            if *sequence {
                Output::list(&lis)
            } else {
                Output::Int(lis.len() as i128)
            }
        }
        Commands::Sort => {
            let mut values = input.ints()?;
            sequences::insertion_sort(&mut values);
            Output::list(&values)
        }
        Commands::Flatten => Output::list(&sequences::flatten(&input.nested()?)),

        Commands::Transpose => Output::rows(&matrix::transpose(&input.matrix()?)?),
        Commands::Diagonal { both } => {
            let m = input.matrix()?;
            let sum = if *both {
                matrix::both_diagonals_sum(&m)?
            } else {
                matrix::diagonal_sum(&m)?
            };
            Output::Int(sum.into())
        }

        Commands::Permutations { unsorted } => {
            Output::rows(&combinatorics::permutations(&input.ints()?, !unsorted, limit)?)
        }
        Commands::Combinations { k } => {
            Output::rows(&combinatorics::combinations(&input.ints()?, *k, limit)?)
        }
        Commands::Subsets => Output::rows(&combinatorics::subsets(&input.ints()?, limit)?),

        Commands::Coins {
            amount,
            denominations,
            breakdown,
            check,
        } => {
            let denominations = denominations
                .as_deref()
                .unwrap_or(config.coins.denominations.as_slice());
            if *check {
                Output::Bool(coins::is_canonical(denominations)?)
            } else {
                let amount = input.or_next(*amount, "a non-negative amount")?;
                let change = coins::greedy_change(amount, denominations)?;
                if *breakdown {
                    let rows: Vec<Vec<u64>> = change
                        .coins
                        .iter()
                        .map(|c| vec![c.denomination, c.count])
                        .collect();
                    Output::rows(&rows)
                } else {
                    Output::Int(change.coin_count().into())
                }
            }
        }
    };

    Ok(output)
}
