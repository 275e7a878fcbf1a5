//! Binomial coefficients and Pascal's triangle.
//!
//! Row `n` of the triangle holds `C(n, 0)` through `C(n, n)`. Every entry is the sum of the two
//! entries above it, which is how whole rows are built here. Single coefficients use the
//! multiplicative formula instead so they don't need the rows before them.
//!
//! Everything is computed in `u64`. The largest complete row that fits is row 67, and asking for
//! anything larger is an [`Overflow`] error rather than a wrapped value.
//!
//! # Examples
//!
//! ```
//! use dslab::pascal;
//!
//! assert_eq!(pascal::binomial(4, 2), Ok(6));
//! assert_eq!(pascal::row(4), Ok(vec![1, 4, 6, 4, 1]));
//!
//! let mut out = Vec::new();
//! pascal::draw(2, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1\n1 1\n1 2 1\n");
//! ```

use std::io::Write;

use crate::error::{DrawError, Overflow};

/// Computes `C(n, k)`, the number of ways to choose `k` elements out of `n`. This is 0 when
/// `k > n`.
pub fn binomial(n: u64, k: u64) -> Result<u64, Overflow> {
    if k > n {
        return Ok(0);
    }

    // After step `i` the running value is `C(n, i + 1)`, so the division is always exact. Those
    // values only grow up to `min(k, n - k)` so if the result fits, they all do.
    let mut coefficient: u128 = 1;
    for i in 0..k.min(n - k) {
        coefficient = coefficient * u128::from(n - i) / u128::from(i + 1);
        if coefficient > u128::from(u64::MAX) {
            return Err(Overflow { n, k });
        }
    }

    u64::try_from(coefficient).map_err(|_| Overflow { n, k })
}

/// Row `n` of Pascal's triangle, `n + 1` entries summing to `2^n`.
pub fn row(n: u64) -> Result<Vec<u64>, Overflow> {
    let mut row = Vec::new();
    for i in 0..=n {
        next_row(&mut row, i)?;
    }
    Ok(row)
}

/// Rows `0..=n` of Pascal's triangle.
pub fn triangle(n: u64) -> Result<Vec<Vec<u64>>, Overflow> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    for i in 0..=n {
        next_row(&mut row, i)?;
        rows.push(row.clone());
    }
    Ok(rows)
}

/// Writes rows `0..=n` of Pascal's triangle to `out`, one row per line with the entries separated
/// by single spaces.
///
/// Rows are written as they are computed, so if a row overflows the rows before it have already
/// been written.
pub fn draw<W: Write>(n: u64, out: &mut W) -> Result<(), DrawError> {
    let mut row = Vec::new();
    for i in 0..=n {
        next_row(&mut row, i)?;
        write_row(out, &row)?;
    }
    Ok(())
}

/// Turns row `n - 1` into row `n` in place. Starting from an empty `row` gives row 0.
fn next_row(row: &mut Vec<u64>, n: u64) -> Result<(), Overflow> {
    // Right to left so each entry still sees the old value to its left.
    for k in (1..row.len()).rev() {
        row[k] = row[k]
            .checked_add(row[k - 1])
            .ok_or(Overflow { n, k: k as u64 })?;
    }
    row.push(1);
    Ok(())
}

fn write_row<W: Write>(out: &mut W, row: &[u64]) -> std::io::Result<()> {
    let mut entries = row.iter();
    if let Some(first) = entries.next() {
        write!(out, "{}", first)?;
    }
    for entry in entries {
        write!(out, " {}", entry)?;
    }
    writeln!(out)
}
