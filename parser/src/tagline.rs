use compendium_common::TagRef;

/// The parsed pieces of a tag line: an optional leading `N SP` cost,
/// the tag references, and a `Limited N` uses count when present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub sp: u32,
    pub uses: u32,
    pub tags: Vec<TagRef>,
}

/// Parses a comma-separated tag line (`2 SP, Limited 3, Unique`).
///
/// Tokens that are `-` placeholders or the `Active (1CP)` marker are
/// skipped. A trailing number on a token becomes the tag's `val`.
/// Duplicate tag ids are suppressed.
pub fn parse_tag_line(line: &str) -> TagLine {
    let mut result = TagLine::default();
    let mut rest = line.trim();

    // Take an "N SP" cost off the front.
    let head = rest.split(',').next().unwrap_or(rest);
    let head_words: Vec<&str> = head.split_whitespace().collect();
    if head_words.len() == 2 && head_words[1] == "SP" {
        if let Ok(sp) = head_words[0].parse() {
            result.sp = sp;
            rest = rest[head.len()..].trim_start_matches(',').trim();
        }
    }

    for token in rest.split(',') {
        let token = token.trim();
        if token.is_empty() || token == "-" || token.ends_with("(1CP)") {
            continue;
        }
        let words: Vec<&str> = token.split_whitespace().collect();
        let tag = match words.last().and_then(|w| w.parse::<u32>().ok()) {
            Some(val) => {
                let name = words[..words.len() - 1].join(" ");
                if name == "Limited" {
                    result.uses = val;
                }
                TagRef::with_val(&name, val)
            }
            None => TagRef::from_name(token),
        };
        if !tag.is_duplicate(&result.tags) {
            result.tags.push(tag);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sp_prefix_and_tags() {
        let parsed = parse_tag_line("2 SP, Limited 3, Unique");
        assert_eq!(parsed.sp, 2);
        assert_eq!(parsed.uses, 3);
        assert_eq!(parsed.tags.len(), 2);
        assert_eq!(parsed.tags[0].id, "tg_limited");
        assert_eq!(parsed.tags[0].val, Some(3));
        assert_eq!(parsed.tags[1].id, "tg_unique");
    }

    #[test]
    fn test_placeholder_line_has_no_tags() {
        assert_eq!(parse_tag_line("-"), TagLine::default());
    }

    #[test]
    fn test_skips_active_cost_marker() {
        let parsed = parse_tag_line("Active (1CP), Quick Action");
        assert_eq!(parsed.tags.len(), 1);
        assert_eq!(parsed.tags[0].id, "tg_quick_action");
    }

    #[test]
    fn test_duplicate_tags_suppressed() {
        let parsed = parse_tag_line("Unique, Unique");
        assert_eq!(parsed.tags.len(), 1);
    }

    #[test]
    fn test_bare_sp_line() {
        let parsed = parse_tag_line("3 SP");
        assert_eq!(parsed.sp, 3);
        assert!(parsed.tags.is_empty());
    }
}
