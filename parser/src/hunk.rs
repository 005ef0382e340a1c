/// Splits a line range into hunks at blank lines.
///
/// The final hunk is appended explicitly since no trailing blank line
/// follows it, so a range with N blank-separated blocks yields N hunks
/// (N + 1 when a trailing block follows the last blank line).
pub fn split_hunks(lines: &[String]) -> Vec<&[String]> {
    let mut hunks = Vec::new();
    let mut prev = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            hunks.push(&lines[prev..i]);
            prev = i + 1;
        }
    }
    hunks.push(&lines[prev..]);
    hunks
}

/// As `split_hunks`, with empty hunks stripped out.
pub fn split_non_empty(lines: &[String]) -> Vec<&[String]> {
    split_hunks(lines)
        .into_iter()
        .filter(|hunk| !hunk.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_blocks_between_blank_lines() {
        let lines = lines(&["a", "b", "", "c", "", "d", "e"]);
        let hunks = split_hunks(&lines);
        assert_eq!(hunks.len(), 3);
        assert_eq!(hunks[0], ["a", "b"]);
        assert_eq!(hunks[1], ["c"]);
        assert_eq!(hunks[2], ["d", "e"]);
    }

    #[test]
    fn test_trailing_blank_line_yields_extra_hunk() {
        let lines = lines(&["a", "", "b", ""]);
        let hunks = split_hunks(&lines);
        assert_eq!(hunks.len(), 3);
        assert!(hunks[2].is_empty());
        assert_eq!(split_non_empty(&lines).len(), 2);
    }

    #[test]
    fn test_no_blank_lines() {
        let lines = lines(&["only", "block"]);
        let hunks = split_hunks(&lines);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0], ["only", "block"]);
    }
}
