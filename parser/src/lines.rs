/// Whether a line reads as all caps: at least one cased character and no
/// lowercase ones. Landmark names and entity headers are written this
/// way in the rulebook.
pub fn is_all_caps(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Joins hard-wrapped lines into one string. Bulleted lines (`- `) keep
/// their break as `<br>`, everything else joins with a space.
pub fn combine_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if out.is_empty() {
            out.push_str(trimmed);
        } else if line.starts_with("- ") {
            out.push_str("<br>");
            out.push_str(trimmed);
        } else {
            out.push(' ');
            out.push_str(trimmed);
        }
    }
    out
}

/// Variant for flavor text. Hunks that contain a fully-uppercase line
/// keep every line break, so HORUS-style chant formatting survives.
pub fn combine_flavor_lines(lines: &[String]) -> String {
    if lines.iter().any(|line| is_all_caps(line)) {
        let parts: Vec<&str> = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        parts.join("<br>")
    } else {
        combine_lines(lines)
    }
}

/// Joins lines with `<br>` separators, the format used for gear
/// description and effect text.
pub fn join_lines_br(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str("<br>");
        }
        out.push_str(trimmed);
    }
    out
}

/// Capitalizes the first letter of each word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Whether a string is a die roll: `[#]d#[+#]`, each `#` an integer and
/// the bracketed parts optional.
pub fn is_die_roll(check_str: &str) -> bool {
    let d_ind = match check_str.find('d') {
        Some(i) => i,
        None => return false,
    };
    let num_dice = if d_ind == 0 { "1" } else { &check_str[..d_ind] };
    let (size_dice, flat_bonus) = match check_str.find('+') {
        Some(p) if p > d_ind => (&check_str[d_ind + 1..p], &check_str[p + 1..]),
        _ => (&check_str[d_ind + 1..], "0"),
    };
    is_decimal(num_dice) && is_decimal(size_dice) && is_decimal(flat_bonus)
}
