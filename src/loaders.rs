use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PipelineError, Result};

/// The data files the pipelines are configured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    /// Function words never treated as aspects.
    Stopwords,
    /// Sentiment and filler words never treated as aspects.
    Blacklist,
    /// Canonical aspect categories and their member terms.
    Synonyms,
    /// Word to candidate Penn tags.
    PosLexicon,
    /// Irregular inflections and their base forms.
    LemmaExceptions,
    /// Word valences, boosters and negators for sentiment scoring.
    Valence,
    /// Summary sentence templates.
    Templates,
}

impl DataFile {
    /// Name of the file inside a data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            DataFile::Stopwords => "stopwords.json",
            DataFile::Blacklist => "blacklist.json",
            DataFile::Synonyms => "synonyms.json",
            DataFile::PosLexicon => "pos_lexicon.json",
            DataFile::LemmaExceptions => "lemma_exceptions.json",
            DataFile::Valence => "valence.json",
            DataFile::Templates => "templates.json",
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            DataFile::Stopwords => include_str!("../data/stopwords.json"),
            DataFile::Blacklist => include_str!("../data/blacklist.json"),
            DataFile::Synonyms => include_str!("../data/synonyms.json"),
            DataFile::PosLexicon => include_str!("../data/pos_lexicon.json"),
            DataFile::LemmaExceptions => include_str!("../data/lemma_exceptions.json"),
            DataFile::Valence => include_str!("../data/valence.json"),
            DataFile::Templates => include_str!("../data/templates.json"),
        }
    }
}

/// Where data files are read from.
///
/// `Embedded` uses the copies compiled into the binary. `Directory` reads
/// every file from the given directory; a file missing there is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Copies compiled into the crate.
    #[default]
    Embedded,
    /// A directory holding every file under its [`DataFile::file_name`].
    Directory(PathBuf),
}

impl DataSource {
    /// Shorthand for [`DataSource::Directory`].
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        DataSource::Directory(path.into())
    }

    /// Raw contents of `file`.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Io`] with the full path when the file cannot be read.
    pub fn read(&self, file: DataFile) -> Result<Cow<'static, str>> {
        match self {
            DataSource::Embedded => Ok(Cow::Borrowed(file.embedded())),
            DataSource::Directory(dir) => {
                let path = dir.join(file.file_name());
                debug!(path = %path.display(), "Reading data file");
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|e| PipelineError::io(path, e))
            }
        }
    }

    /// Reads `file` and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// I/O errors from [`DataSource::read`], or
    /// [`PipelineError::InvalidConfig`] naming the file when it is not valid
    /// JSON for `T`.
    pub fn load_json<T: DeserializeOwned>(&self, file: DataFile) -> Result<T> {
        let content = self.read(file)?;
        serde_json::from_str(&content).map_err(|e| {
            PipelineError::InvalidConfig(format!("Failed to parse '{}': {e}", file.file_name()))
        })
    }
}

/// Reads a review file: one review per line, trimmed, blank lines dropped.
#[derive(Debug, Clone)]
pub struct ReviewLoader {
    pub path: PathBuf,
}

impl ReviewLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| PipelineError::io(&self.path, e))?;

        let reviews: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        debug!(path = %self.path.display(), reviews = reviews.len(), "Loaded reviews");
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_trimmed_non_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Great battery life  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "Camera struggles in low light").unwrap();

        let reviews = ReviewLoader::new(file.path()).load().unwrap();
        assert_eq!(
            reviews,
            vec!["Great battery life", "Camera struggles in low light"]
        );
    }

    #[test]
    fn missing_review_file_reports_path() {
        let err = ReviewLoader::new("does/not/exist.txt").load().unwrap_err();
        match err {
            PipelineError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("does/not/exist.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn embedded_data_files_parse() {
        let source = DataSource::Embedded;
        let stopwords: Vec<String> = source.load_json(DataFile::Stopwords).unwrap();
        assert!(stopwords.iter().any(|w| w == "the"));
        let synonyms: std::collections::BTreeMap<String, Vec<String>> =
            source.load_json(DataFile::Synonyms).unwrap();
        assert!(synonyms.contains_key("battery"));
    }

    #[test]
    fn directory_source_requires_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::directory(dir.path());
        assert!(matches!(
            source.read(DataFile::Blacklist),
            Err(PipelineError::Io { .. })
        ));

        std::fs::write(dir.path().join("blacklist.json"), r#"["thing"]"#).unwrap();
        let blacklist: Vec<String> = source.load_json(DataFile::Blacklist).unwrap();
        assert_eq!(blacklist, vec!["thing"]);
    }
}
