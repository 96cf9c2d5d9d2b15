// src/tasks/matrix.rs - Matrix drills: transpose and diagonal sums

use crate::infra::errors::{DrillError, Result};

pub type Matrix = Vec<Vec<i64>>;

/// `(rows, cols)` of a rectangular matrix.
pub fn dimensions(m: &[Vec<i64>]) -> Result<(usize, usize)> {
    let cols = m.first().map_or(0, Vec::len);
    for (row, values) in m.iter().enumerate() {
        if values.len() != cols {
            return Err(DrillError::Ragged {
                row,
                found: values.len(),
                expected: cols,
            });
        }
    }
    Ok((m.len(), cols))
}

pub fn transpose(m: &[Vec<i64>]) -> Result<Matrix> {
    let (rows, cols) = dimensions(m)?;
    Ok((0..cols)
        .map(|c| (0..rows).map(|r| m[r][c]).collect())
        .collect())
}

fn square_size(m: &[Vec<i64>]) -> Result<usize> {
    let (rows, cols) = dimensions(m)?;
    if rows != cols {
        return Err(DrillError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Sum of the primary diagonal.
pub fn diagonal_sum(m: &[Vec<i64>]) -> Result<i64> {
    let n = square_size(m)?;
    (0..n).try_fold(0i64, |acc, i| {
        acc.checked_add(m[i][i])
            .ok_or(DrillError::Overflow("diagonal sum"))
    })
}

/// Primary plus secondary diagonal; the centre of an odd matrix counts once.
pub fn both_diagonals_sum(m: &[Vec<i64>]) -> Result<i64> {
    let n = square_size(m)?;
    (0..n).try_fold(0i64, |acc, i| {
        let j = n - 1 - i;
        let cells = if i == j {
            m[i][i]
        } else {
            m[i][i]
                .checked_add(m[i][j])
                .ok_or(DrillError::Overflow("diagonal sum"))?
        };
        acc.checked_add(cells)
            .ok_or(DrillError::Overflow("diagonal sum"))
    })
}
