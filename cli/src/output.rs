use std::path::PathBuf;

/// Handles output to either a file or the console.
#[derive(Debug)]
pub struct DataOutput {
    target: Target,
}

#[derive(Debug)]
enum Target {
    Stdout,
    File(PathBuf),
}

impl DataOutput {
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    pub fn file(path: PathBuf) -> Self {
        Self {
            target: Target::File(path),
        }
    }

    /// Where the data goes, for the console summary line.
    pub fn target(&self) -> String {
        match &self.target {
            Target::Stdout => "stdout".to_string(),
            Target::File(path) => path.display().to_string(),
        }
    }

    pub fn write(&self, data: &str) -> std::io::Result<()> {
        match &self.target {
            Target::Stdout => {
                println!("{}", data);
                Ok(())
            }
            Target::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                std::fs::write(path, data)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_names() {
        assert_eq!(DataOutput::stdout().target(), "stdout");
        assert_eq!(
            DataOutput::file(PathBuf::from("output/talents.json")).target(),
            "output/talents.json"
        );
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("compendium-out-{}", std::process::id()));
        let path = dir.join("nested").join("tags.json");
        DataOutput::file(path.clone()).write("[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
