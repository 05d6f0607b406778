//! Writers for training results.
//!
//! All outputs are plain text: the vocabulary as `token count` lines (or
//! `rank token count` when ranked), the merged corpus as
//! `line_id tok tok ...` lines and the merge list as `left right` lines in
//! acceptance order.

use super::format::Corpus;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use symbpe_core::{BpeError, MergeHistory, Result, Vocabulary};

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BpeError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| BpeError::io(path, e))?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| BpeError::io(path, e))
}

/// Write `token count` lines in first-occurrence order.
pub fn write_vocabulary(path: &Path, vocab: &Vocabulary) -> Result<()> {
    let mut writer = create(path)?;
    write_vocabulary_to(&mut writer, vocab).map_err(|e| BpeError::io(path, e))?;
    finish(writer, path)?;

    log::info!("Wrote {} vocabulary entries to {}", vocab.len(), path.display());
    Ok(())
}

/// Write `rank token count` lines, most frequent first.
pub fn write_ranked_vocabulary(path: &Path, vocab: &Vocabulary) -> Result<()> {
    let mut writer = create(path)?;
    write_ranked_vocabulary_to(&mut writer, vocab).map_err(|e| BpeError::io(path, e))?;
    finish(writer, path)
}

/// Write `line_id tok tok ...` lines.
pub fn write_text(path: &Path, corpus: &Corpus) -> Result<()> {
    let mut writer = create(path)?;
    write_text_to(&mut writer, corpus).map_err(|e| BpeError::io(path, e))?;
    finish(writer, path)?;

    log::info!("Wrote {} lines to {}", corpus.len(), path.display());
    Ok(())
}

/// Write `left right` lines in acceptance order.
pub fn write_merges(path: &Path, merges: &MergeHistory) -> Result<()> {
    let mut writer = create(path)?;
    write_merges_to(&mut writer, merges).map_err(|e| BpeError::io(path, e))?;
    finish(writer, path)?;

    log::info!("Wrote {} merges to {}", merges.len(), path.display());
    Ok(())
}

pub fn write_vocabulary_to<W: Write>(writer: &mut W, vocab: &Vocabulary) -> std::io::Result<()> {
    for (token, count) in vocab.iter() {
        writeln!(writer, "{} {}", token, count)?;
    }
    Ok(())
}

pub fn write_ranked_vocabulary_to<W: Write>(
    writer: &mut W,
    vocab: &Vocabulary,
) -> std::io::Result<()> {
    for (rank, (token, count)) in vocab.ranked().into_iter().enumerate() {
        writeln!(writer, "{} {} {}", rank + 1, token, count)?;
    }
    Ok(())
}

pub fn write_text_to<W: Write>(writer: &mut W, corpus: &Corpus) -> std::io::Result<()> {
    for (id, tokens) in corpus.iter() {
        writeln!(writer, "{}", Corpus::format_line(id, tokens))?;
    }
    Ok(())
}

pub fn write_merges_to<W: Write>(writer: &mut W, merges: &MergeHistory) -> std::io::Result<()> {
    for (left, right) in merges.iter() {
        writeln!(writer, "{} {}", left, right)?;
    }
    Ok(())
}
