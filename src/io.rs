//! Text adapters around [`FixedSet`]: reading keys and queries, printing answers.
//!
//! Input is two blocks of whitespace-separated integers, each a count followed
//! by that many values: first the keys, then the queries. Output is one `Yes`
//! or `No` line per query.

use std::io::{BufRead, Write};
use std::str::SplitWhitespace;

use crate::config::FixedSetConfig;
use crate::error::{FixedSetError, Result};
use crate::fixed_set::FixedSet;
use crate::types::Key;

/// Reads one counted block of integers from a token stream.
pub fn read_numbers(tokens: &mut SplitWhitespace<'_>) -> Result<Vec<Key>> {
    let count: usize = next_token(tokens, "count")?;
    let mut numbers = Vec::with_capacity(count);
    for _ in 0..count {
        numbers.push(next_token(tokens, "integer")?);
    }
    Ok(numbers)
}

/// Reads the key block and the query block from `reader`.
pub fn read_input<R: BufRead>(mut reader: R) -> Result<(Vec<Key>, Vec<Key>)> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut tokens = content.split_whitespace();
    let keys = read_numbers(&mut tokens)?;
    let queries = read_numbers(&mut tokens)?;
    Ok((keys, queries))
}

/// Builds a set from `keys` and answers `queries` in order.
pub fn process_queries(keys: &[Key], queries: &[Key], config: &FixedSetConfig) -> Result<Vec<bool>> {
    let set = FixedSet::build_with_config(keys, config)?;
    Ok(set.contains_all(queries))
}

/// Writes one `Yes`/`No` line per answer.
pub fn write_answers<W: Write>(writer: &mut W, answers: &[bool]) -> Result<()> {
    for &answer in answers {
        writeln!(writer, "{}", if answer { "Yes" } else { "No" })?;
    }
    writer.flush()?;
    Ok(())
}

fn next_token<T: std::str::FromStr>(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<T> {
    let token = tokens
        .next()
        .ok_or_else(|| FixedSetError::Parse(format!("expected {}, found end of input", what)))?;
    token
        .parse()
        .map_err(|_| FixedSetError::Parse(format!("expected {}, found {:?}", what, token)))
}
