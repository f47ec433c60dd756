//! Raw field parsing. Inputs arrive as whatever the user typed.

use std::num::IntErrorKind;

use crate::error::{Operation, SequenceError, SequenceResult};

/// Trimmed value, or `MissingInput` if blank.
pub fn require_value(op: Operation, raw: &str) -> SequenceResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SequenceError::MissingInput { op });
    }
    Ok(value.to_string())
}

/// Parse an index field and check it against `0..=max_inclusive`.
///
/// A blank field is `MissingInput`, anything that is not a base-10 integer
/// (fractions, words, hex) is `InvalidIndex`, and integers outside the
/// range (negative included, or too large for `i64`) are
/// `IndexOutOfRange`. `max_inclusive` is `None` when no index is valid at
/// all (delete on an empty sequence).
///
/// Stricter than a numeric coercion: `1.5`, `2.0` and `1e1` are rejected
/// as `InvalidIndex` rather than reported against the range.
pub fn parse_index(
    op: Operation,
    raw: &str,
    max_inclusive: Option<usize>,
) -> SequenceResult<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SequenceError::MissingInput { op });
    }
    let index = match trimmed.parse::<i64>() {
        Ok(i) => i,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(SequenceError::InvalidIndex {
                    raw: trimmed.to_string(),
                })
            }
        },
    };
    let out_of_range = SequenceError::IndexOutOfRange {
        op,
        index,
        max: max_inclusive.unwrap_or(0),
    };
    let Some(max) = max_inclusive else {
        return Err(out_of_range);
    };
    match usize::try_from(index) {
        Ok(i) if i <= max => Ok(i),
        _ => Err(out_of_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_trimmed() {
        assert_eq!(require_value(Operation::Insert, "  a b ").unwrap(), "a b");
    }

    #[test]
    fn blank_value_is_missing() {
        let err = require_value(Operation::Search, " \t ").unwrap_err();
        assert_eq!(err, SequenceError::MissingInput { op: Operation::Search });
    }

    #[test]
    fn index_accepts_padded_integer() {
        assert_eq!(parse_index(Operation::Insert, " 2 ", Some(3)).unwrap(), 2);
        assert_eq!(parse_index(Operation::Insert, "+1", Some(3)).unwrap(), 1);
    }

    #[test]
    fn index_rejects_non_integers() {
        for raw in ["abc", "1.5", "2.0", "0x1", "1e1", "--1"] {
            let err = parse_index(Operation::Update, raw, Some(5)).unwrap_err();
            assert!(
                matches!(err, SequenceError::InvalidIndex { .. }),
                "{raw} gave {err:?}"
            );
        }
    }

    #[test]
    fn index_rejects_out_of_range() {
        let err = parse_index(Operation::Insert, "4", Some(3)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid index for insert. Allowed: 0 to 3");
        let err = parse_index(Operation::Insert, "-1", Some(3)).unwrap_err();
        assert!(matches!(err, SequenceError::IndexOutOfRange { index: -1, .. }));
    }

    #[test]
    fn oversized_integer_is_out_of_range() {
        let err = parse_index(Operation::Delete, "99999999999999999999", Some(2)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid index for delete. Allowed: 0 to 2");
        let err = parse_index(Operation::Delete, "-99999999999999999999", Some(2)).unwrap_err();
        assert!(matches!(err, SequenceError::IndexOutOfRange { index: i64::MIN, .. }));
    }

    #[test]
    fn no_valid_index_reports_zero_bound() {
        let err = parse_index(Operation::Delete, "0", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid index for delete. Allowed: 0 to 0");
    }

    #[test]
    fn blank_index_is_missing() {
        let err = parse_index(Operation::Delete, "  ", Some(1)).unwrap_err();
        assert_eq!(err, SequenceError::MissingInput { op: Operation::Delete });
    }
}
