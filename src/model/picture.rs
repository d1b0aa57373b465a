use std::fmt;
use std::path::{Path, PathBuf};

/// an uploaded picture after it's been written to disk
#[derive(Debug, PartialEq, Clone)]
pub struct StoredPicture {
    pub path: PathBuf,
}

impl StoredPicture {
    /// `<dir>/<timestamp><extension>`.
    ///
    /// There is no uniqueness check here: two uploads in the same second with the same extension
    /// get the same path, and whichever finishes writing last wins
    pub fn new(dir: &Path, timestamp: u64, extension: &str) -> StoredPicture {
        StoredPicture {
            path: dir.join(format!("{timestamp}{extension}")),
        }
    }

    /// the line printed to stdout after a successful upload, meant to be pasted into a markdown document
    pub fn markdown_reference(&self) -> String {
        format!("![]({})", self.path.display())
    }
}

impl fmt::Display for StoredPicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// returns the extension of the last path segment of `file_name`, leading dot included.
///
/// The extension is kept verbatim (no case folding, no allow-list). Files without a dot have no extension,
/// and dot files like `.bashrc` are all extension
pub fn extension_of(file_name: &str) -> &str {
    let base = file_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);
    match base.rfind('.') {
        Some(index) => &base[index..],
        None => "",
    }
}
