//! Selection-line parsing.
//!
//! One line of comma-separated numbers is either accepted as a whole or
//! rejected as a whole: a single malformed token discards the entire
//! line and the caller re-prompts. Out-of-range numbers are not errors;
//! they are silently dropped while the rest of the line stands.

use thiserror::Error;

/// A selection line that failed to parse.
///
/// Recoverable: the caller reports it and re-prompts rather than
/// aborting the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A token was neither empty nor an integer.
    #[error("invalid number '{token}'")]
    InvalidToken { token: String },
}

/// Parse one selection line into zero-based catalog indices.
///
/// Tokens are split on commas and whitespace-trimmed. Empty tokens
/// (e.g. a trailing comma) are skipped. Each remaining token must be an
/// integer; the displayed 1-based number is mapped to `value - 1` and
/// kept only when it falls within `[0, catalog_len)`. Order and
/// multiplicity of the surviving tokens are preserved, so `"1,1"`
/// selects the first entry twice.
pub fn parse_selection(line: &str, catalog_len: usize) -> Result<Vec<usize>, SelectionError> {
    let mut indices = Vec::new();

    for raw in line.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        match token.parse::<i64>() {
            Ok(value) => {
                let index = value - 1;
                if index >= 0 && (index as usize) < catalog_len {
                    indices.push(index as usize);
                }
            }
            // An integer too large for i64 can never be in range.
            Err(_) if is_integer_literal(token) => {}
            Err(_) => {
                return Err(SelectionError::InvalidToken {
                    token: token.to_string(),
                })
            }
        }
    }

    Ok(indices)
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
