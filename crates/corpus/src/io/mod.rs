//! Reading ground-truth corpora and writing training results.

pub mod format;
pub mod load;
pub mod save;

pub use format::Corpus;
pub use load::CorpusLoader;
pub use save::{
    write_merges, write_merges_to, write_ranked_vocabulary, write_ranked_vocabulary_to, write_text,
    write_text_to, write_vocabulary, write_vocabulary_to,
};
