use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A captured `--version` banner and what should be extracted from it.
///
/// `full` and `major` are omitted when the banner has no version marker.
#[derive(Debug, Deserialize, Clone)]
pub struct BannerTest {
    pub name: String,
    pub description: String,
    pub banner: String,
    pub full: Option<String>,
    pub major: Option<String>,
}

impl BannerTest {
    /// Load a test fixture from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let test: BannerTest = toml::from_str(&content)?;
        Ok(test)
    }

    /// Load all test fixtures from a directory
    pub fn load_from_directory<P: AsRef<Path>>(
        dir: P,
    ) -> Result<Vec<Self>, Box<dyn std::error::Error>> {
        let mut tests = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("toml") {
                tests.push(Self::load_from_file(&path)?);
            }
        }

        tests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tests)
    }
}
