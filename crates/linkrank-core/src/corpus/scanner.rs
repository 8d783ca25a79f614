//! Page scanning for corpus loading

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// A page found during a corpus scan.
#[derive(Debug, Clone)]
pub struct ScannedPage {
    pub path: PathBuf,
    /// Corpus-relative name, used as the graph node identifier.
    pub name: String,
}

/// Scan options
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub pattern: String,
    pub follow_symlinks: bool,
    pub exclude_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: "*.html".to_string(),
            follow_symlinks: true,
            exclude_hidden: true,
        }
    }
}

/// Scan `root` for pages whose corpus-relative name matches the pattern.
pub fn scan_pages(root: &Path, options: &ScanOptions) -> Result<Vec<ScannedPage>> {
    let pattern = Pattern::new(&options.pattern)?;
    let mut results = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(|e| !should_skip(e, options));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if pattern.matches(&name) {
            results.push(ScannedPage {
                path: path.to_path_buf(),
                name,
            });
        }
    }

    Ok(results)
}

fn should_skip(entry: &DirEntry, options: &ScanOptions) -> bool {
    // depth 0 is the scan root itself; its name never filters the scan
    if entry.depth() == 0 {
        return false;
    }
    options.exclude_hidden && entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let opts = ScanOptions::default();
        assert_eq!(opts.pattern, "*.html");
        assert!(opts.exclude_hidden);
    }

    #[test]
    fn test_scan_matches_pattern_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "x").unwrap();
        fs::write(dir.path().join("b.html"), "x").unwrap();
        fs::write(dir.path().join("c.txt"), "x").unwrap();

        let pages = scan_pages(dir.path(), &ScanOptions::default()).unwrap();
        let mut names: Vec<String> = pages.into_iter().map(|p| p.name).collect();
        names.sort();
        assert_eq!(names, ["a.html", "b.html"]);
    }

    #[test]
    fn test_scan_skips_hidden_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "x").unwrap();
        fs::write(dir.path().join(".hidden.html"), "x").unwrap();

        let pages = scan_pages(dir.path(), &ScanOptions::default()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "a.html");
    }
}
