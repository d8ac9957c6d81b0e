//! Content-addressed file names.
//!
//! A [`ContentKey`] is the SHA-256 of the file bytes in lowercase hex, followed
//! by the original extension. It doubles as the storage object name and as the
//! identifier embedded in the placeholder marker, so identical content always
//! lands on the same path. Digest collisions are not guarded against.

use sha2::{Digest, Sha256};

/// Digest-derived file name, e.g. `9f86d0...0f00a08.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey(String);

impl ContentKey {
    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digest without the extension.
    #[must_use]
    pub fn digest(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(digest, _)| digest)
    }

    /// The extension carried over from the original name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, ext)| ext)
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute the content key for a file.
///
/// The extension is the text after the last `.` of `original_name`, kept as-is.
/// A name without an extension yields a bare digest with no trailing dot.
#[must_use]
pub fn fingerprint(bytes: &[u8], original_name: &str) -> ContentKey {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = format!("{:x}", hasher.finalize());

    match extension(original_name) {
        Some(ext) => ContentKey(format!("{digest}.{ext}")),
        None => ContentKey(digest),
    }
}

fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}
