// src/tasks/numbers.rs - Number drills: primality, divisors, digit sums, staircases

use crate::infra::errors::{DrillError, Result};

/// Trial division up to √n.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// All positive divisors of `n`, ascending.
pub fn divisors(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(DrillError::InvalidArgument(
            "every integer divides 0; pass n >= 1".into(),
        ));
    }
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1;
    while d <= n / d {
        if n % d == 0 {
            low.push(d);
            if d != n / d {
                high.push(n / d);
            }
        }
        d += 1;
    }
    low.extend(high.into_iter().rev());
    Ok(low)
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i64) -> u64 {
    let mut n = n.unsigned_abs();
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeat `digit_sum` until a single digit remains.
pub fn digital_root(n: i64) -> u64 {
    let mut value = digit_sum(n);
    while value >= 10 {
        // digit_sum of a u64 never exceeds 9 * 20, so this cast is lossless
        value = digit_sum(value as i64);
    }
    value
}

/// Ways to climb `n` stairs taking one or two steps at a time.
pub fn climb_stairs(n: u64) -> Result<u128> {
    let (mut prev, mut cur) = (1u128, 1u128);
    for _ in 1..n {
        let next = prev
            .checked_add(cur)
            .ok_or(DrillError::Overflow("stair count"))?;
        prev = cur;
        cur = next;
    }
    Ok(cur)
}

/// Largest memo window `climb_stairs_with` will allocate.
pub const MAX_STAIR_WINDOW: u64 = 10_000_000;

/// Ways to climb `n` stairs with an arbitrary set of step sizes.
///
/// Keeps a rolling memo table as long as the largest usable step. Steps
/// longer than `n` can never be taken and are dropped up front.
pub fn climb_stairs_with(n: u64, steps: &[u64]) -> Result<u128> {
    if steps.is_empty() {
        return Err(DrillError::InvalidArgument("no step sizes given".into()));
    }
    if steps.contains(&0) {
        return Err(DrillError::InvalidArgument("step sizes must be >= 1".into()));
    }
    let mut steps: Vec<u64> = steps.iter().copied().filter(|&s| s <= n).collect();
    steps.sort_unstable();
    steps.dedup();

    let span = steps.last().copied().unwrap_or(0);
    if span >= MAX_STAIR_WINDOW {
        return Err(DrillError::InvalidArgument(format!(
            "step size {span} exceeds the memo limit of {MAX_STAIR_WINDOW}"
        )));
    }
    // span < MAX_STAIR_WINDOW, so neither the +1 nor the casts can overflow
    let window = span + 1;

    let mut memo = vec![0u128; window as usize];
    memo[0] = 1;
    for i in 1..=n {
        let mut ways = 0u128;
        for &step in steps.iter().take_while(|&&s| s <= i) {
            let earlier = memo[((i - step) % window) as usize];
            ways = ways
                .checked_add(earlier)
                .ok_or(DrillError::Overflow("stair count"))?;
        }
        memo[(i % window) as usize] = ways;
    }
    Ok(memo[(n % window) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_small_primes() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_large_prime_and_square() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        // square of a prime is only caught at d == √n
        assert!(!is_prime(49));
        assert!(!is_prime(4_294_967_291 * 2));
        assert!(is_prime(4_294_967_291));
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(1).unwrap(), vec![1]);
        assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(36).unwrap(), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(divisors(13).unwrap(), vec![1, 13]);
    }

    #[test]
    fn test_divisors_zero() {
        assert!(matches!(divisors(0), Err(DrillError::InvalidArgument(_))));
    }

    #[test]
    fn test_digit_sum_and_root() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(9875), 29);
        assert_eq!(digit_sum(-123), 6);
        assert_eq!(digital_root(9875), 2);
        assert_eq!(digital_root(0), 0);
        assert_eq!(digital_root(9), 9);
        assert_eq!(digit_sum(i64::MIN), 89);
        assert_eq!(digital_root(i64::MIN), 8);
    }

    #[test]
    fn test_climb_stairs() {
        let ways: Vec<u128> = (0..8).map(|n| climb_stairs(n).unwrap()).collect();
        assert_eq!(ways, vec![1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn test_climb_stairs_overflow() {
        assert!(climb_stairs(185).is_ok());
        assert!(matches!(climb_stairs(200), Err(DrillError::Overflow(_))));
    }

    #[test]
    fn test_memo_variant_matches_iterative() {
        for n in 0..120 {
            assert_eq!(climb_stairs_with(n, &[1, 2]).unwrap(), climb_stairs(n).unwrap());
        }
    }

    #[test]
    fn test_three_steps() {
        // tribonacci-style: 1, 1, 2, 4, 7, 13
        let ways: Vec<u128> = (0..6).map(|n| climb_stairs_with(n, &[3, 1, 2]).unwrap()).collect();
        assert_eq!(ways, vec![1, 1, 2, 4, 7, 13]);
    }

    #[test]
    fn test_unreachable_counts() {
        assert_eq!(climb_stairs_with(5, &[2]).unwrap(), 0);
        assert_eq!(climb_stairs_with(6, &[2]).unwrap(), 1);
    }

    #[test]
    fn test_steps_longer_than_n_are_ignored() {
        assert_eq!(climb_stairs_with(3, &[1, u64::MAX]).unwrap(), 1);
        assert_eq!(climb_stairs_with(3, &[1, 1 << 40]).unwrap(), 1);
        assert_eq!(climb_stairs_with(3, &[5]).unwrap(), 0);
        assert_eq!(climb_stairs_with(0, &[5]).unwrap(), 1);
    }

    #[test]
    fn test_window_limit() {
        let n = MAX_STAIR_WINDOW + 5;
        assert!(matches!(
            climb_stairs_with(n, &[MAX_STAIR_WINDOW]),
            Err(DrillError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_steps() {
        assert!(climb_stairs_with(3, &[]).is_err());
        assert!(climb_stairs_with(3, &[0, 1]).is_err());
    }
}
