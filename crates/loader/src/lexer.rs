//! Line splitting for the P-code text format.

use crate::error::LoadError;

/// One significant input line with all whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    /// 1-based position in the original input.
    pub number: usize,
    pub text: String,
}

/// Strip whitespace from every line and drop blank and `#` comment lines.
pub(crate) fn significant_lines(text: &str) -> Vec<Line> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            if stripped.is_empty() || stripped.starts_with('#') {
                None
            } else {
                Some(Line {
                    number: idx + 1,
                    text: stripped,
                })
            }
        })
        .collect()
}

/// Split an instruction line into its opcode, level and address fields.
pub(crate) fn split_fields(line: &Line, separator: char) -> Result<[&str; 3], LoadError> {
    let mut parts = line.text.split(separator);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(op), Some(level), Some(address), None) => Ok([op, level, address]),
        _ => Err(LoadError::MalformedInstruction {
            line: line.number,
            separator,
            text: line.text.clone(),
        }),
    }
}
