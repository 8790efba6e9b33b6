//! Integer Partition Functions
//!
//! This module provides functions for computing integer partitions:
//! - Unrestricted partitions: p(n)
//! - Restricted partitions: partitions with constraints
//! - Partition generation

use std::collections::HashMap;

/// Compute the partition function p(n) - the number of ways to write n as a sum of positive integers
/// Uses dynamic programming with memoization
pub fn partition_count(n: u64) -> u64 {
    let mut memo = HashMap::new();
    partition_count_memo(n, &mut memo)
}

fn partition_count_memo(n: u64, memo: &mut HashMap<u64, u64>) -> u64 {
    if n == 0 {
        return 1;
    }
    if n == 1 {
        return 1;
    }

    if let Some(&cached) = memo.get(&n) {
        return cached;
    }

    // Use Euler's pentagonal number theorem for efficient computation
    // p(n) = p(n-1) + p(n-2) - p(n-5) - p(n-7) + p(n-12) + p(n-15) - ...
    // where the indices are generalized pentagonal numbers: k(3k-1)/2 for k = ±1, ±2, ±3, ...

    let mut result = 0i64;
    let mut k = 1i64;

    loop {
        // Positive k
        let pent_pos = (k * (3 * k - 1)) / 2;
        if pent_pos > n as i64 {
            break;
        }
        let sign = if k % 2 == 1 { 1 } else { -1 };
        result += sign * partition_count_memo((n as i64 - pent_pos) as u64, memo) as i64;

        // Negative k
        let pent_neg = (k * (3 * k + 1)) / 2;
        if pent_neg > n as i64 {
            break;
        }
        result += sign * partition_count_memo((n as i64 - pent_neg) as u64, memo) as i64;

        k += 1;
    }

    let final_result = result as u64;
    memo.insert(n, final_result);
    final_result
}

/// Generate all partitions of n
/// Returns a vector of partitions, where each partition is a vector of parts in descending order
pub fn generate_partitions(n: u64) -> Vec<Vec<u64>> {
    if n == 0 {
        return vec![vec![]];
    }

    let mut result = Vec::new();
    generate_partitions_helper(n, n, &mut vec![], &mut result);
    result
}

fn generate_partitions_helper(
    n: u64,
    max_part: u64,
    current: &mut Vec<u64>,
    result: &mut Vec<Vec<u64>>,
) {
    if n == 0 {
        result.push(current.clone());
        return;
    }

    for part in (1..=max_part.min(n)).rev() {
        current.push(part);
        generate_partitions_helper(n - part, part, current, result);
        current.pop();
    }
}

/// Count partitions of n into exactly k parts
pub fn partition_count_k_parts(n: u64, k: u64) -> u64 {
    if k == 0 {
        return if n == 0 { 1 } else { 0 };
    }
    if n == 0 || k > n {
        return 0;
    }
    if k == 1 {
        return 1;
    }

    // Use dynamic programming: p(n, k) = p(n-1, k-1) + p(n-k, k)
    // p(n-1, k-1): partitions where smallest part is 1
    // p(n-k, k): partitions where all parts are ≥ 2 (subtract 1 from each part)
    let mut dp = vec![vec![0u64; (k + 1) as usize]; (n + 1) as usize];

    // Base cases
    for (i, row) in dp.iter_mut().enumerate().take(n as usize + 1) {
        row[0] = if i == 0 { 1 } else { 0 };
    }
    for row in dp.iter_mut().take(n as usize + 1).skip(1) {
        row[1] = 1;
    }

    // Fill DP table
    for i in 2..=n as usize {
        for j in 2..=k.min(i as u64) as usize {
            dp[i][j] = dp[i - 1][j - 1];
            if i >= j {
                dp[i][j] += dp[i - j][j];
            }
        }
    }

    dp[n as usize][k as usize]
}

/// Count partitions of n into distinct parts (no repeated parts)
pub fn partition_count_distinct(n: u64) -> u64 {
    if n == 0 {
        return 1;
    }

    // Use DP: q(n, k) = number of partitions of n using parts ≤ k
    let mut dp = vec![0u64; (n + 1) as usize];
    dp[0] = 1;

    for part in 1..=n {
        // Process in reverse to avoid using the same part twice
        for i in (part..=n).rev() {
            dp[i as usize] += dp[(i - part) as usize];
        }
    }

    dp[n as usize]
}

/// Count partitions of n into odd parts only
pub fn partition_count_odd_parts(n: u64) -> u64 {
    if n == 0 {
        return 1;
    }

    let mut dp = vec![0u64; (n + 1) as usize];
    dp[0] = 1;

    // Only use odd parts
    let mut part = 1u64;
    while part <= n {
        for i in part..=n {
            dp[i as usize] += dp[(i - part) as usize];
        }
        part += 2; // Next odd number
    }

    dp[n as usize]
}
