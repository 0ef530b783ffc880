//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads corpus files and names their outputs
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// File name without its extension; output files are named after it
    pub fn stem(path: &Path) -> Result<String> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .with_context(|| format!("No usable file name: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("trees.txt");

        let content = "A,1\t(IP-MAT (N kind))\n";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let err_msg = FileReader::read_text(Path::new("/nonexistent/file.psd"))
            .unwrap_err()
            .to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_stem() {
        assert_eq!(
            FileReader::stem(Path::new("corpus/1947e-royte-pomerantsn.psd")).unwrap(),
            "1947e-royte-pomerantsn"
        );
        assert!(FileReader::stem(Path::new("/")).is_err());
    }
}
