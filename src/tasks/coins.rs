// src/tasks/coins.rs - Coin change: greedy, optimal reference, canonical check

use serde::Serialize;

use crate::infra::errors::{DrillError, Result};

/// Largest amount the DP reference will tabulate.
pub const MAX_TABLE_AMOUNT: u64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinUse {
    pub denomination: u64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub amount: u64,
    /// Largest denomination first; unused denominations are omitted.
    pub coins: Vec<CoinUse>,
}

impl Change {
    pub fn coin_count(&self) -> u64 {
        self.coins.iter().map(|c| c.count).sum()
    }
}

/// Deduplicated, largest first. Rejects empty systems and zero coins.
pub fn normalize(denominations: &[u64]) -> Result<Vec<u64>> {
    if denominations.is_empty() {
        return Err(DrillError::InvalidArgument("no denominations given".into()));
    }
    if denominations.contains(&0) {
        return Err(DrillError::InvalidArgument(
            "denominations must be >= 1".into(),
        ));
    }
    let mut coins = denominations.to_vec();
    coins.sort_unstable_by(|a, b| b.cmp(a));
    coins.dedup();
    Ok(coins)
}

/// Repeatedly take the largest coin that still fits.
pub fn greedy_change(amount: u64, denominations: &[u64]) -> Result<Change> {
    let coins = normalize(denominations)?;
    let mut remainder = amount;
    let mut used = Vec::new();
    for &denomination in &coins {
        let count = remainder / denomination;
        if count > 0 {
            used.push(CoinUse {
                denomination,
                count,
            });
            remainder -= count * denomination;
        }
    }
    if remainder != 0 {
        return Err(DrillError::Unpayable {
            amount,
            remainder,
            denominations: coins,
        });
    }
    tracing::debug!(amount, coins = used.len(), "greedy change");
    Ok(Change {
        amount,
        coins: used,
    })
}

fn greedy_count(amount: u64, coins: &[u64]) -> Option<u64> {
    let mut remainder = amount;
    let mut count = 0;
    for &c in coins {
        count += remainder / c;
        remainder %= c;
    }
    (remainder == 0).then_some(count)
}

/// `table[a]` is the fewest coins paying `a`, `None` when unpayable.
fn min_coin_table(limit: u64, coins: &[u64]) -> Result<Vec<Option<u64>>> {
    if limit > MAX_TABLE_AMOUNT {
        return Err(DrillError::InvalidArgument(format!(
            "optimal change is only tabulated up to {MAX_TABLE_AMOUNT}, got {limit}"
        )));
    }
    let size = limit as usize + 1;
    let mut table: Vec<Option<u64>> = vec![None; size];
    table[0] = Some(0);
    for a in 1..size {
        let best = coins
            .iter()
            .filter(|&&c| c as usize <= a)
            .filter_map(|&c| table[a - c as usize])
            .min();
        table[a] = best.map(|fewest| fewest + 1);
    }
    Ok(table)
}

/// Fewest coins paying `amount`, by dynamic programming.
pub fn optimal_change(amount: u64, denominations: &[u64]) -> Result<Option<u64>> {
    let coins = normalize(denominations)?;
    let table = min_coin_table(amount, &coins)?;
    Ok(table[amount as usize])
}

/// Whether greedy change is optimal for every amount in this coin system.
///
/// A counterexample, if one exists, is below the sum of the two largest
/// coins (Kozen and Zaks), so only that range is checked.
pub fn is_canonical(denominations: &[u64]) -> Result<bool> {
    let coins = normalize(denominations)?;
    if coins.len() < 2 {
        return Ok(true);
    }
    let bound = coins[0].saturating_add(coins[1]);
    let table = min_coin_table(bound, &coins)?;
    for amount in 1..bound {
        if greedy_count(amount, &coins) != table[amount as usize] {
            tracing::debug!(amount, "greedy differs from optimal");
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const US: [u64; 4] = [25, 10, 5, 1];

    #[test]
    fn test_greedy_us_coins() {
        let change = greedy_change(63, &US).unwrap();
        assert_eq!(
            change.coins,
            vec![
                CoinUse {
                    denomination: 25,
                    count: 2
                },
                CoinUse {
                    denomination: 10,
                    count: 1
                },
                CoinUse {
                    denomination: 1,
                    count: 3
                },
            ]
        );
        assert_eq!(change.coin_count(), 6);
    }

    #[test]
    fn test_greedy_zero_amount() {
        let change = greedy_change(0, &US).unwrap();
        assert!(change.coins.is_empty());
        assert_eq!(change.coin_count(), 0);
    }

    #[test]
    fn test_greedy_unsorted_input() {
        assert_eq!(greedy_change(30, &[1, 25, 10, 10]).unwrap().coin_count(), 6);
    }

    #[test]
    fn test_greedy_unpayable() {
        let err = greedy_change(7, &[4, 2]).unwrap_err();
        assert!(matches!(err, DrillError::Unpayable { remainder: 1, .. }));
    }

    #[test]
    fn test_greedy_misses_solution_optimal_finds() {
        // greedy takes 5, then is stuck at 1; 3 + 3 works
        assert!(greedy_change(6, &[5, 3]).is_err());
        assert_eq!(optimal_change(6, &[5, 3]).unwrap(), Some(2));
    }

    #[test]
    fn test_bad_denominations() {
        assert!(greedy_change(5, &[]).is_err());
        assert!(greedy_change(5, &[0, 1]).is_err());
    }

    #[test]
    fn test_optimal() {
        assert_eq!(optimal_change(30, &[25, 10, 1]).unwrap(), Some(3));
        assert_eq!(optimal_change(0, &US).unwrap(), Some(0));
        assert_eq!(optimal_change(3, &[2]).unwrap(), None);
        assert!(optimal_change(MAX_TABLE_AMOUNT + 1, &US).is_err());
    }

    #[test]
    fn test_canonical() {
        assert!(is_canonical(&US).unwrap());
        assert!(is_canonical(&[1]).unwrap());
        assert!(is_canonical(&[100, 50, 20, 10, 5, 2, 1]).unwrap());
        // 30 = 25 + 5x1 greedily, but 10 + 10 + 10 is better
        assert!(!is_canonical(&[25, 10, 1]).unwrap());
        assert!(!is_canonical(&[4, 3, 1]).unwrap());
    }
}
