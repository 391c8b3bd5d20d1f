//! Readable printing for values and sequences.

use crate::value::DynValue;

/// Print a single value, quoting and escaping strings when asked to print
/// readably.
pub fn pr_value(value: &DynValue, print_readably: bool) -> String {
    match value {
        DynValue::Str(s) if print_readably => format!(
            "\"{}\"",
            s.chars()
                .map(|c| match c {
                    '"' => "\\\"".to_string(),
                    '\n' => "\\n".to_string(),
                    '\\' => "\\\\".to_string(),
                    _ => c.to_string(),
                })
                .collect::<Vec<String>>()
                .join("")
        ),
        other => other.to_string(),
    }
}

/// Print a sequence as a bracketed, comma-separated list.
pub fn pr_seq(values: &[DynValue], print_readably: bool) -> String {
    format!(
        "[{}]",
        values
            .iter()
            .map(|v| pr_value(v, print_readably))
            .collect::<Vec<_>>()
            .join(", ")
    )
}
