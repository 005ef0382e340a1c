use std::io;
use std::path::Path;

/// The cp1252 0x80..0xA0 block. Unmapped positions keep their Latin-1
/// interpretation, matching how lenient decoders treat them.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}',
    '\u{2021}', '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}',
    '\u{017D}', '\u{008F}', '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}',
    '\u{2022}', '\u{2013}', '\u{2014}', '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}',
    '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

fn decode_cp1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
            _ => b as char,
        })
        .collect()
}

/// Reads a rulebook file into an ordered line list. Input is UTF-8 when
/// valid, with a cp1252 fallback for legacy text exports. Line endings
/// are stripped.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => decode_cp1252(err.as_bytes()),
    };
    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cp1252_smart_quotes() {
        // "it\x92s \x93fine\x94" in cp1252.
        let bytes = [0x69, 0x74, 0x92, 0x73, 0x20, 0x93, 0x66, 0x69, 0x6E, 0x65, 0x94];
        assert_eq!(decode_cp1252(&bytes), "it\u{2019}s \u{201C}fine\u{201D}");
    }

    #[test]
    fn test_decode_cp1252_latin1_passthrough() {
        assert_eq!(decode_cp1252(&[0xE9]), "\u{E9}");
    }
}
