//! symbpe-corpus - Corpus IO for symbpe
//!
//! Loads ground-truth transcription files (`line_id tok tok ...`) and writes
//! the vocabulary, merged text and merge list produced by training.
//!
//! # Example
//!
//! ```rust
//! use symbpe_core::Vocabulary;
//! use symbpe_corpus::{write_vocabulary_to, CorpusLoader};
//!
//! let corpus = CorpusLoader::parse("001 a b a\n002 b\n");
//! let vocab = Vocabulary::from_corpus(&corpus.lines);
//!
//! let mut out = Vec::new();
//! write_vocabulary_to(&mut out, &vocab).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a 2\nb 2\n");
//! ```

pub use symbpe_core::{BpeError, Result};

pub mod io;
pub use io::{
    write_merges, write_merges_to, write_ranked_vocabulary, write_ranked_vocabulary_to, write_text,
    write_text_to, write_vocabulary, write_vocabulary_to, Corpus, CorpusLoader,
};
