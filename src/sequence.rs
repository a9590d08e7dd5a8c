//! Fibonacci sequence generation.
//!
//! The sequence supplies the harmonic weights for wave synthesis: element `i`
//! becomes the amplitude of the harmonic at frequency `i * frequency_scale`.

use crate::error::ExplorerError;

/// Longest sequence whose values all fit in an i64.
///
/// The 93rd element (fib(92) = 7_540_113_804_746_346_429) is the largest
/// Fibonacci number representable as i64; asking for a 94th overflows.
pub const MAX_ITERATIONS: usize = 93;

/// Generate the Fibonacci sequence of exactly `iterations` elements.
///
/// Seeded `[0, 1]` and extended by summation. The result is monotonically
/// non-decreasing. Requests outside `2..=MAX_ITERATIONS` are rejected with
/// [`ExplorerError::InvalidParameter`] before any computation happens.
pub fn generate_sequence(iterations: usize) -> Result<Vec<i64>, ExplorerError> {
    if iterations < 2 {
        return Err(ExplorerError::InvalidParameter(format!(
            "iterations must be at least 2, got {}",
            iterations
        )));
    }
    if iterations > MAX_ITERATIONS {
        return Err(ExplorerError::InvalidParameter(format!(
            "iterations must be at most {} to keep sequence values within i64, got {}",
            MAX_ITERATIONS, iterations
        )));
    }

    let mut sequence = Vec::with_capacity(iterations);
    sequence.push(0i64);
    sequence.push(1i64);
    while sequence.len() < iterations {
        let next = sequence[sequence.len() - 1]
            .checked_add(sequence[sequence.len() - 2])
            .ok_or_else(|| {
                ExplorerError::InvalidParameter(format!(
                    "Fibonacci value overflowed i64 at index {}",
                    sequence.len()
                ))
            })?;
        sequence.push(next);
    }

    Ok(sequence)
}
