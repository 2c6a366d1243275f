use crate::domain::model::RosterEntry;

/// Split textarea-style input into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse roster lines into entries, preserving input order. Lenient: a
/// missing or non-numeric count resolves to 0; a batch never fails. No
/// deduplication, no I/O.
pub fn parse_roster<S: AsRef<str>>(lines: &[S]) -> Vec<RosterEntry> {
    lines.iter().map(|line| parse_line(line.as_ref())).collect()
}

fn parse_line(line: &str) -> RosterEntry {
    let mut fields = line.split(',').map(str::trim);
    let name = fields.next().unwrap_or_default().to_string();
    let grade = fields.next().unwrap_or_default().to_string();
    let requested = fields
        .next()
        .and_then(|count| count.parse().ok())
        .unwrap_or(0);
    RosterEntry {
        name,
        grade,
        requested,
    }
}
