// src/io/input.rs - Tokenizing drill input
//
// Every drill reads from one text blob (stdin or a file). Lists come either
// as bare whitespace-separated values or, in counted mode, as a length
// followed by exactly that many values.

use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::infra::errors::{DrillError, Result};
use crate::tasks::matrix::Matrix;
use crate::tasks::sequences::Nested;

pub struct Input<'a> {
    raw: &'a str,
    tokens: SplitWhitespace<'a>,
    counted: bool,
}

impl<'a> Input<'a> {
    pub fn new(raw: &'a str, counted: bool) -> Self {
        Self {
            raw,
            tokens: raw.split_whitespace(),
            counted,
        }
    }

    /// The untouched input text.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Input text with trailing newlines removed, for drills that echo text back.
    pub fn text(&self) -> &'a str {
        self.raw.trim_end_matches(['\n', '\r'])
    }

    pub fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.tokens.next().ok_or_else(|| DrillError::MissingInput {
            expected: expected.to_string(),
        })?;
        parse_token(token, expected)
    }

    /// Use `explicit` when given, otherwise read the next token.
    pub fn or_next<T: FromStr>(&mut self, explicit: Option<T>, expected: &'static str) -> Result<T> {
        match explicit {
            Some(value) => Ok(value),
            None => self.next(expected),
        }
    }

    /// Read a list of integers, honouring counted mode.
    pub fn ints(&mut self) -> Result<Vec<i64>> {
        if self.counted {
            let n: usize = self.next("a list length")?;
            // counts are untrusted; grow as values actually arrive
            let mut values = Vec::new();
            for i in 0..n {
                let token = self.tokens.next().ok_or_else(|| DrillError::MissingInput {
                    expected: format!("{n} integers, got {i}"),
                })?;
                values.push(parse_token(token, "an integer")?);
            }
            Ok(values)
        } else {
            self.tokens
                .by_ref()
                .map(|token| parse_token(token, "an integer"))
                .collect()
        }
    }

    /// Read a matrix. Counted mode expects `rows cols` followed by
    /// `rows * cols` values; otherwise every non-blank line is a row.
    pub fn matrix(&mut self) -> Result<Matrix> {
        if self.counted {
            let rows: usize = self.next("a row count")?;
            let cols: usize = self.next("a column count")?;
            let mut matrix = Vec::new();
            for r in 0..rows {
                let mut row = Vec::new();
                for _ in 0..cols {
                    let token = self.tokens.next().ok_or_else(|| DrillError::MissingInput {
                        expected: format!("{cols} values in row {r}"),
                    })?;
                    row.push(parse_token(token, "an integer")?);
                }
                matrix.push(row);
            }
            return Ok(matrix);
        }

        let mut matrix: Matrix = Vec::new();
        for line in self.raw.lines().filter(|l| !l.trim().is_empty()) {
            let row = line
                .split_whitespace()
                .map(|token| parse_token(token, "an integer"))
                .collect::<Result<Vec<i64>>>()?;
            if let Some(first) = matrix.first() {
                if row.len() != first.len() {
                    return Err(DrillError::Ragged {
                        row: matrix.len(),
                        found: row.len(),
                        expected: first.len(),
                    });
                }
            }
            matrix.push(row);
        }
        Ok(matrix)
    }

    /// Parse the whole input as a JSON array nested to any depth.
    pub fn nested(&self) -> Result<Nested<i64>> {
        Ok(serde_json::from_str(self.raw.trim())?)
    }
}

/// Read the whole input from `path`, or from stdin when none is given.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = raw.len(), "read input");
    Ok(raw)
}

fn parse_token<T: FromStr>(token: &str, expected: &'static str) -> Result<T> {
    token.parse().map_err(|_| DrillError::Parse {
        token: token.to_string(),
        expected,
    })
}
