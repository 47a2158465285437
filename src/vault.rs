//! Document provider: scans a vault directory for Markdown notes.

use std::io;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::Error;
use crate::model::Document;

/// Resolves a name filter to the matching documents, already sorted.
pub trait DocumentProvider {
    /// Documents whose file names contain `filter` (case-sensitive),
    /// ordered lexicographically by name. An empty result is not an error.
    fn documents(&self, filter: &str) -> Result<Vec<Document>, Error>;
}

/// Directory-backed provider. Scans the vault root and its subdirectories
/// for `.md` files.
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentProvider for Vault {
    fn documents(&self, filter: &str) -> Result<Vec<Document>, Error> {
        let mut paths = Vec::new();
        collect_notes(&self.root, &mut paths)?;

        let mut matches: Vec<(String, PathBuf)> = paths
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                name.contains(filter).then_some((name, path))
            })
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        Ok(matches
            .into_iter()
            .map(|(name, path)| Document {
                name,
                content: read_note(&path),
            })
            .collect())
    }
}

fn collect_notes(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            // Configuration directories (.obsidian and friends) are not
            // part of the vault's note set.
            continue;
        }
        if path.is_dir() {
            collect_notes(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            out.push(path);
        }
    }
    Ok(())
}

/// Read one note's text. A note that cannot be opened, mapped, or decoded is
/// logged and carried with empty content, so its column still exists but
/// holds no nodes.
fn read_note(path: &Path) -> String {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("could not open {}: {e}", path.display());
            return String::new();
        }
    };
    let data = match unsafe { Mmap::map(&file) } {
        Ok(data) => data,
        Err(e) => {
            log::warn!("could not read {}: {e}", path.display());
            return String::new();
        }
    };
    match std::str::from_utf8(&data) {
        Ok(text) => text.to_string(),
        Err(_) => {
            log::warn!("skipping {}: not valid UTF-8", path.display());
            String::new()
        }
    }
}
