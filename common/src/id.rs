/// Generates an item id from its name.
///
/// Ids take the form `<prefix><slug>`, where the slug is the lowercased
/// name with spaces, slashes and dashes replaced by underscores and
/// quote/parenthesis punctuation stripped. The same name always produces
/// the same id.
pub fn gen_id(prefix: &str, name: &str) -> String {
    let mut id = String::with_capacity(prefix.len() + name.len());
    id.push_str(prefix);
    for c in name.trim().to_lowercase().chars() {
        match c {
            ' ' | '/' | '-' => id.push('_'),
            '\'' | '\u{2019}' | '"' | '(' | ')' => {}
            _ => id.push(c),
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_id_basic() {
        assert_eq!(gen_id("mf_", "ATLAS"), "mf_atlas");
        assert_eq!(gen_id("t_", "Combined Arms"), "t_combined_arms");
    }

    #[test]
    fn test_gen_id_punctuation() {
        assert_eq!(gen_id("mw_", "D/D 288"), "mw_d_d_288");
        assert_eq!(gen_id("pg_", "A/C Unit"), "pg_a_c_unit");
        assert_eq!(gen_id("cb_", "Titanomachy Mesh"), "cb_titanomachy_mesh");
        assert_eq!(gen_id("ms_", "Aegis Shield (Prototype)"), "ms_aegis_shield_prototype");
        assert_eq!(gen_id("sts_", "Hunter's Mark"), "sts_hunters_mark");
        assert_eq!(gen_id("sts_", "Hunter\u{2019}s Mark"), "sts_hunters_mark");
    }

    #[test]
    fn test_gen_id_deterministic() {
        assert_eq!(gen_id("t_", "Ace"), gen_id("t_", "Ace"));
        assert_ne!(gen_id("t_", "Ace"), gen_id("t_", "Vanguard"));
    }

    #[test]
    fn test_gen_id_trims_whitespace() {
        assert_eq!(gen_id("sk_", "  WORD ON THE STREET "), "sk_word_on_the_street");
    }
}
