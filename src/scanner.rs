//! Positional reader over a textual input instance.
//!
//! Judge inputs are whitespace-delimited tokens read in a fixed order; a few
//! formats are line-oriented. The scanner serves both views over one cursor,
//! and every read carries the name of the schema field being read so a
//! failure points at the offending field.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::InputError;
use crate::grid::Grid;

/// Cursor over an input instance.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        rest.split_whitespace().next()
    }

    /// True if at least one more token remains.
    pub fn has_more(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Consume the next whitespace-delimited token.
    pub fn token(&mut self, field: &'static str) -> Result<&'a str, InputError> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            return Err(InputError::Missing { field });
        }
        self.pos += end;
        Ok(&rest[..end])
    }

    /// Consume and parse the next token.
    pub fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        let token = self.token(field)?;
        token.parse::<T>().map_err(|_| InputError::Invalid {
            field,
            token: token.to_string(),
        })
    }

    /// Consume and parse the next token, requiring it to lie in `range`.
    pub fn next_in<T>(&mut self, field: &'static str, range: RangeInclusive<T>) -> Result<T, InputError>
    where
        T: FromStr + PartialOrd + Display,
    {
        let value: T = self.next(field)?;
        check_range(field, value, &range)
    }

    /// Read `n` values of the same field.
    pub fn values<T: FromStr>(&mut self, field: &'static str, n: usize) -> Result<Vec<T>, InputError> {
        (0..n).map(|_| self.next(field)).collect()
    }

    /// Read `n` values of the same field, each within `range`.
    pub fn values_in<T>(
        &mut self,
        field: &'static str,
        n: usize,
        range: RangeInclusive<T>,
    ) -> Result<Vec<T>, InputError>
    where
        T: FromStr + PartialOrd + Display + Clone,
    {
        (0..n)
            .map(|_| self.next_in(field, range.clone()))
            .collect()
    }

    /// Read a `rows × cols` grid of values, each within `range`.
    pub fn grid_in<T>(
        &mut self,
        field: &'static str,
        rows: usize,
        cols: usize,
        range: RangeInclusive<T>,
    ) -> Result<Grid<T>, InputError>
    where
        T: FromStr + PartialOrd + Display + Clone,
    {
        let cells = self.values_in(field, rows * cols, range)?;
        Grid::from_vec(rows, cols, cells).ok_or(InputError::Missing { field })
    }

    /// Read `rows` words of exactly `cols` bytes as a byte grid.
    pub fn byte_grid(&mut self, field: &'static str, rows: usize, cols: usize) -> Result<Grid<u8>, InputError> {
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows {
            cells.extend_from_slice(self.word_of_len(field, cols)?.as_bytes());
        }
        Grid::from_vec(rows, cols, cells).ok_or(InputError::Missing { field })
    }

    /// Consume a token whose length in bytes must be exactly `len`.
    pub fn word_of_len(&mut self, field: &'static str, len: usize) -> Result<&'a str, InputError> {
        let word = self.token(field)?;
        if word.len() != len {
            return Err(InputError::constraint(
                field,
                format!("expected {len} characters, got {}", word.len()),
            ));
        }
        Ok(word)
    }

    /// Consume a token made only of bytes accepted by `allowed`.
    pub fn word_of(&mut self, field: &'static str, allowed: impl Fn(u8) -> bool) -> Result<&'a str, InputError> {
        let word = self.token(field)?;
        if let Some(bad) = word.bytes().find(|&b| !allowed(b)) {
            return Err(InputError::constraint(
                field,
                format!("unexpected character {:?}", bad as char),
            ));
        }
        Ok(word)
    }

    /// Consume the rest of the current line (without the line terminator).
    ///
    /// Lines are never skipped: an empty line yields `""`.
    pub fn line(&mut self, field: &'static str) -> Result<&'a str, InputError> {
        if self.pos >= self.input.len() {
            return Err(InputError::Missing { field });
        }
        let rest = &self.input[self.pos..];
        let (line, advance) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        Ok(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Require that only whitespace remains.
    pub fn finish(&mut self) -> Result<(), InputError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(InputError::Trailing {
                token: token.to_string(),
            }),
        }
    }
}

/// Range check shared by the scanner and by templates validating derived values.
pub fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<T, InputError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            field,
            value: value.to_string(),
            expected: format!("{}..={}", range.start(), range.end()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tokens_across_lines() {
        let mut sc = Scanner::new("3\n 10 -2\t7\n");
        assert_eq!(sc.next::<usize>("n").unwrap(), 3);
        assert_eq!(sc.values::<i64>("a", 3).unwrap(), vec![10, -2, 7]);
        assert!(sc.finish().is_ok());
    }

    #[test]
    fn missing_token_names_field() {
        let mut sc = Scanner::new("1 ");
        sc.next::<u32>("n").unwrap();
        assert_eq!(sc.next::<u32>("m"), Err(InputError::Missing { field: "m" }));
    }

    #[test]
    fn invalid_and_out_of_range() {
        let mut sc = Scanner::new("x 500");
        assert!(matches!(sc.next::<i32>("n"), Err(InputError::Invalid { field: "n", .. })));
        let err = sc.next_in::<i32>("k", 1..=100).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: "k",
                value: "500".into(),
                expected: "1..=100".into()
            }
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let mut sc = Scanner::new("1 2");
        sc.next::<u8>("a").unwrap();
        assert_eq!(sc.finish(), Err(InputError::Trailing { token: "2".into() }));
    }

    #[test]
    fn lines_keep_inner_spaces() {
        let mut sc = Scanner::new("So when I die (the [first] I will see in (heaven) a score list).\r\n.\n");
        assert_eq!(
            sc.line("text").unwrap(),
            "So when I die (the [first] I will see in (heaven) a score list)."
        );
        assert_eq!(sc.line("text").unwrap(), ".");
        assert!(sc.line("text").is_err());
    }

    #[test]
    fn word_checks() {
        let mut sc = Scanner::new("0110 01a1");
        assert_eq!(sc.word_of_len("row", 4).unwrap(), "0110");
        assert!(matches!(
            sc.word_of("row", |b| b == b'0' || b == b'1'),
            Err(InputError::Constraint { field: "row", .. })
        ));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut sc = Scanner::new("  abc def");
        assert_eq!(sc.peek(), Some("abc"));
        assert_eq!(sc.token("w").unwrap(), "abc");
        assert!(sc.has_more());
        assert_eq!(sc.token("w").unwrap(), "def");
        assert!(!sc.has_more());
    }

    #[test]
    fn grids_in_row_major_order() {
        let mut sc = Scanner::new("1 0 2\n0 1 1\nAB\nCD\n");
        let g = sc.grid_in("cell", 2, 3, 0..=2u8).unwrap();
        assert_eq!(g[(0, 2)], 2);
        assert_eq!(g.row(1), &[0, 1, 1]);
        let b = sc.byte_grid("row", 2, 2).unwrap();
        assert_eq!(b[(1, 0)], b'C');
        assert!(sc.finish().is_ok());
    }
}
