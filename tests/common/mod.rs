#![allow(dead_code)]

use lexiforge::TextCorpus;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_TEXT: &str = "It was the best of times, it was the worst of times, \
it was the age of wisdom, it was the age of foolishness.\n\
Call me Ishmael.  Some years ago - never mind how long precisely - I went to sea.";

/// A corpus file living in its own temp directory.
pub struct TestContext {
    pub dir: TempDir,
    pub corpus_path: PathBuf,
}

impl TestContext {
    pub fn new(text: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let corpus_path = dir.path().join("corpus.txt");
        let mut file = File::create(&corpus_path).unwrap();
        file.write_all(text.as_bytes()).unwrap();
        Self { dir, corpus_path }
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let corpus_path = dir.path().join("corpus.txt");
        File::create(&corpus_path).unwrap().write_all(bytes).unwrap();
        Self { dir, corpus_path }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn corpus(&self) -> TextCorpus {
        TextCorpus::from_file(&self.corpus_path).expect("corpus should load")
    }
}

pub fn rows(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(k, c)| (k.to_string(), *c)).collect()
}
