//! Corpus loading.

use super::format::Corpus;
use std::path::Path;
use symbpe_core::{BpeError, Line, Result, Token};

/// Loads ground-truth files of `line_id tok tok ...` lines.
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load a corpus from a ground-truth file.
    pub fn load(path: &Path) -> Result<Corpus> {
        let content = std::fs::read_to_string(path).map_err(|e| BpeError::io(path, e))?;
        let corpus = Self::parse(&content);

        log::info!(
            "Loaded {} lines ({} tokens) from {}",
            corpus.len(),
            corpus.token_count(),
            path.display()
        );

        Ok(corpus)
    }

    /// Parse ground-truth text.
    ///
    /// The first whitespace-separated field of each line is its id, the rest
    /// are tokens. Blank lines are kept with an empty id and no tokens so the
    /// written text stays line-aligned with the input.
    pub fn parse(content: &str) -> Corpus {
        let mut corpus = Corpus::new();

        for raw in content.lines() {
            let mut fields = raw.split_whitespace();
            let id = fields.next().unwrap_or("");
            let tokens: Line = fields.map(Token::from).collect();
            corpus.push(id, tokens);
        }

        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let corpus = CorpusLoader::parse("s1 c1 a b #\ns2 a  b\r\n\n   \ns3\n");

        assert_eq!(corpus.ids, vec!["s1", "s2", "", "", "s3"]);
        assert_eq!(corpus.lines[0], vec![Token::from("c1"), "a".into(), "b".into(), "#".into()]);
        assert_eq!(corpus.lines[1], vec![Token::from("a"), "b".into()]);
        assert!(corpus.lines[2].is_empty());
        assert!(corpus.lines[3].is_empty());
        assert!(corpus.lines[4].is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("symbpe_test_missing").join("gt.txt");
        let err = CorpusLoader::load(&path).unwrap_err();
        assert!(matches!(err, BpeError::Io { .. }));
    }

    #[test]
    fn test_load_file() {
        let temp_dir = std::env::temp_dir().join("symbpe_test_load");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let path = temp_dir.join("gt.txt");
        std::fs::write(&path, "001 a b a b c\n002 x y\n").unwrap();

        let corpus = CorpusLoader::load(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.token_count(), 7);

        std::fs::remove_dir_all(temp_dir).ok();
    }
}
