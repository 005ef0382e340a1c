use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Re-breaks lines where PDF extraction jammed the next entry against a
/// sentence end (`...end.NEXT`), writing the repaired text to `out`.
pub fn write_fixed(lines: &[String], out: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(out)?);
    for line in lines {
        match split_jammed(line) {
            Some((head, tail)) => {
                println!("Fixing newline on: {}", line);
                writeln!(writer, "{}", head)?;
                writeln!(writer, "{}", tail)?;
            }
            None => writeln!(writer, "{}", line)?,
        }
    }
    writer.flush()
}

/// A line needs a break when a letter immediately follows its last
/// period.
fn split_jammed(line: &str) -> Option<(&str, &str)> {
    let period = line.rfind('.')?;
    let tail = &line[period + 1..];
    let next = tail.chars().next()?;
    if next.is_alphabetic() {
        Some((&line[..=period], tail))
    } else {
        None
    }
}
