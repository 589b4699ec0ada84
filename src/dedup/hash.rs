//! Content hashing for in-run deduplication.

use md5::{Digest, Md5};

/// Incremental MD5 over a download as its chunks arrive.
#[derive(Default)]
pub struct ContentHasher {
    hasher: Md5,
    bytes: u64,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk.
    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.bytes += chunk.len() as u64;
    }

    /// Number of bytes hashed so far.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Finish and return the lowercase hex digest.
    pub fn finalize(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        let mut hasher = ContentHasher::new();
        hasher.update(b"abc");
        assert_eq!(hasher.finalize(), "900150983cd24fb0d6963f7d28e17f72");

        assert_eq!(
            ContentHasher::new().finalize(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_chunked_matches_whole() {
        let mut hasher = ContentHasher::new();
        for chunk in [&b"a"[..], b"b", b"c"] {
            hasher.update(chunk);
        }
        assert_eq!(hasher.bytes(), 3);
        assert_eq!(hasher.finalize(), "900150983cd24fb0d6963f7d28e17f72");
    }
}
