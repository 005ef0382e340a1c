use crate::ParseError;

/// Anchor patterns locating a section of the rulebook.
///
/// Each pattern is an ordered list of literal line prefixes; a position
/// matches when consecutive lines match the prefixes in order. An empty
/// prefix matches a blank line.
#[derive(Debug, Clone, Copy)]
pub struct Anchor {
    pub section: &'static str,
    pub start: &'static [&'static str],
    pub end: &'static [&'static str],
}

fn matches_at(lines: &[String], at: usize, pattern: &[&str]) -> bool {
    pattern.iter().enumerate().all(|(offset, prefix)| {
        lines.get(at + offset).map_or(false, |line| {
            if prefix.is_empty() {
                line.is_empty()
            } else {
                line.starts_with(prefix)
            }
        })
    })
}

/// Scans for the first positions matching the start and end patterns and
/// returns both offsets. The end offset points at the last line of the
/// end pattern, so `lines[start..=end]` is the whole section.
pub fn locate(lines: &[String], anchor: &Anchor) -> Result<(usize, usize), ParseError> {
    let mut start_idx = None;
    let mut end_idx = None;
    for i in 0..lines.len() {
        if start_idx.is_none() && matches_at(lines, i, anchor.start) {
            start_idx = Some(i);
        }
        if end_idx.is_none() && matches_at(lines, i, anchor.end) {
            end_idx = Some(i + anchor.end.len() - 1);
        }
        if let (Some(start), Some(end)) = (start_idx, end_idx) {
            return Ok((start, end));
        }
    }
    Err(ParseError::SectionNotFound {
        section: anchor.section,
        start: start_idx.map_or(-1, |i| i as i64),
        end: end_idx.map_or(-1, |i| i as i64),
    })
}

/// Convenience wrapper returning the located section as a slice.
pub fn section_slice<'a>(
    lines: &'a [String],
    anchor: &Anchor,
) -> Result<(usize, usize, &'a [String]), ParseError> {
    let (start, end) = locate(lines, anchor)?;
    Ok((start, end, &lines[start..=end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    const ANCHOR: Anchor = Anchor {
        section: "test",
        start: &["ALPHA", "first line of alpha"],
        end: &["OMEGA", "last line"],
    };

    #[test]
    fn test_locate_start_and_end() {
        let lines = lines(&[
            "preamble",
            "ALPHA",
            "first line of alpha text",
            "body",
            "OMEGA",
            "last line of all",
            "trailer",
        ]);
        let (start, end) = locate(&lines, &ANCHOR).unwrap();
        assert_eq!(start, 1);
        assert_eq!(end, 5);
    }

    #[test]
    fn test_locate_missing_end_reports_positions() {
        let lines = lines(&["ALPHA", "first line of alpha"]);
        let err = locate(&lines, &ANCHOR).unwrap_err();
        assert_eq!(
            err,
            ParseError::SectionNotFound {
                section: "test",
                start: 0,
                end: -1,
            }
        );
    }

    #[test]
    fn test_empty_prefix_matches_blank_line() {
        let anchor = Anchor {
            section: "test",
            start: &["ALPHA"],
            end: &["OMEGA", ""],
        };
        let lines = lines(&["ALPHA", "body", "OMEGA", "", "rest"]);
        let (start, end) = locate(&lines, &anchor).unwrap();
        assert_eq!(start, 0);
        assert_eq!(end, 3);
    }
}
