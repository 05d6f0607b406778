//! Train command implementation.

use clap::Parser;

/// Tokens protected from merging when no other set is configured.
pub const DEFAULT_PROTECTED: [&str; 11] = [
    "c1", "c2", "c3", "c4", "c5", "f1", "f2", "f3", "f4", "f5", "#",
];

/// Train command arguments.
#[derive(Parser, Debug)]
pub struct TrainCommand {
    /// Ground-truth file: one `line_id tok tok ...` transcription per line
    #[arg(short = 'g', long = "ground-truth")]
    pub ground_truth: String,

    /// JSON training configuration; flags below override its fields
    #[arg(short, long)]
    pub config: Option<String>,

    /// Minimum number of occurrences for a pair to be merged
    #[arg(short, long)]
    pub min_occ: Option<u64>,

    /// Maximum merged token length, in atomic tokens
    #[arg(short = 'x', long = "max-len")]
    pub max_len: Option<usize>,

    /// Separator placed between merged tokens
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Comma-separated protected tokens
    #[arg(short, long, value_delimiter = ',')]
    pub protected: Option<Vec<String>>,

    /// Output vocabulary file
    #[arg(long, default_value = "./vocab.txt")]
    pub vocab_path: String,

    /// Output merged text file
    #[arg(long, default_value = "./text.txt")]
    pub text_path: String,

    /// Output merges file (not written if omitted)
    #[arg(long)]
    pub merges_path: Option<String>,

    /// Output `rank token count` file for `symbpe metrics` (not written if omitted)
    #[arg(long)]
    pub ranked_path: Option<String>,
}

use anyhow::{Context, Result as AnyhowResult};
use std::path::Path;
use std::time::Instant;
use symbpe_corpus::{
    write_merges, write_ranked_vocabulary, write_text, write_vocabulary, CorpusLoader,
};
use symbpe_training::{BpeTrainer, MergeEvent, TrainingConfig};

/// Resolve the training configuration from the config file and flags.
pub fn resolve_config(cmd: &TrainCommand) -> AnyhowResult<TrainingConfig> {
    let mut config = match &cmd.config {
        Some(path) => TrainingConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load training config {}", path))?,
        None => TrainingConfig::default(),
    };

    if let Some(min_occ) = cmd.min_occ {
        config.min_occ = min_occ;
    }
    if let Some(max_len) = cmd.max_len {
        config.max_tknlen = max_len;
    }
    if let Some(separator) = &cmd.separator {
        config.separator = separator.clone();
    }
    if let Some(protected) = &cmd.protected {
        config.protected_tokens = Some(
            protected
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        );
    }
    config
        .protected_tokens
        .get_or_insert_with(|| DEFAULT_PROTECTED.iter().map(|t| t.to_string()).collect());

    config.validate()?;
    Ok(config)
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let config = resolve_config(&cmd)?;
    log::info!(
        "Training with separator {:?}, min_occ {}, max_tknlen {}, {} protected tokens",
        config.separator,
        config.min_occ,
        config.max_tknlen,
        config.protected().len()
    );

    let mut corpus = CorpusLoader::load(Path::new(&cmd.ground_truth))
        .with_context(|| format!("Failed to load ground truth {}", cmd.ground_truth))?;

    println!("Applying BPE...");
    let start = Instant::now();
    let trainer = BpeTrainer::new(config)?;
    let mut report = |event: &MergeEvent| {
        log::info!(
            "Merge {}: ({}, {}) -> {} (occurrences: {})",
            event.index,
            event.pair.0,
            event.pair.1,
            event.token,
            event.occurrences
        );
    };
    let output = trainer.train_with(corpus.lines_mut(), &mut report);

    println!("Total merges: {}", output.merge_count);
    println!("Time taken: {:.2} seconds", start.elapsed().as_secs_f64());

    write_vocabulary(Path::new(&cmd.vocab_path), &output.vocabulary)?;
    write_text(Path::new(&cmd.text_path), &corpus)?;
    if let Some(merges_path) = &cmd.merges_path {
        write_merges(Path::new(merges_path), &output.merges)?;
    }
    if let Some(ranked_path) = &cmd.ranked_path {
        write_ranked_vocabulary(Path::new(ranked_path), &output.vocabulary)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(dir: &Path) -> TrainCommand {
        TrainCommand {
            ground_truth: dir.join("gt.txt").display().to_string(),
            config: None,
            min_occ: Some(2),
            max_len: Some(4),
            separator: Some("_".to_string()),
            protected: None,
            vocab_path: dir.join("vocab.txt").display().to_string(),
            text_path: dir.join("text.txt").display().to_string(),
            merges_path: Some(dir.join("merges.txt").display().to_string()),
            ranked_path: Some(dir.join("ranked.txt").display().to_string()),
        }
    }

    #[test]
    fn test_resolve_config_defaults_protected() {
        let dir = std::env::temp_dir();
        let config = resolve_config(&command(&dir)).unwrap();

        assert_eq!(config.min_occ, 2);
        assert_eq!(config.max_tknlen, 4);
        assert_eq!(config.separator, "_");
        assert_eq!(config.protected().len(), DEFAULT_PROTECTED.len());
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        let temp_dir = std::env::temp_dir().join("symbpe_test_cli_config");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let config_path = temp_dir.join("config.json");
        std::fs::write(
            &config_path,
            r##"{"separator": "+", "min_occ": 7, "protected_tokens": ["#"]}"##,
        )
        .unwrap();

        let mut cmd = command(&temp_dir);
        cmd.config = Some(config_path.display().to_string());
        cmd.separator = None;
        cmd.protected = Some(vec!["x".to_string(), " ".to_string()]);

        let config = resolve_config(&cmd).unwrap();
        assert_eq!(config.separator, "+");
        assert_eq!(config.min_occ, 2);
        assert_eq!(config.protected_tokens, Some(vec!["x".to_string()]));

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_config_file_without_protected_uses_defaults() {
        let temp_dir = std::env::temp_dir().join("symbpe_test_cli_config_defaults");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let config_path = temp_dir.join("config.json");
        std::fs::write(&config_path, r#"{"min_occ": 3}"#).unwrap();

        let mut cmd = command(&temp_dir);
        cmd.config = Some(config_path.display().to_string());
        cmd.min_occ = None;

        let config = resolve_config(&cmd).unwrap();
        assert_eq!(config.min_occ, 3);
        assert_eq!(config.protected().len(), DEFAULT_PROTECTED.len());
        assert!(config.protected().contains("#"));
        assert!(config.protected().contains("c1"));

        // An explicit empty list in the file disables protection
        std::fs::write(&config_path, r#"{"protected_tokens": []}"#).unwrap();
        let config = resolve_config(&cmd).unwrap();
        assert!(config.protected().is_empty());

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_rejects_invalid_flags() {
        let mut cmd = command(&std::env::temp_dir());
        cmd.max_len = Some(0);
        assert!(resolve_config(&cmd).is_err());
    }

    #[test]
    fn test_run_writes_outputs() {
        let temp_dir = std::env::temp_dir().join("symbpe_test_cli_train");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(temp_dir.join("gt.txt"), "001 a b a b c\n002 # a b\n").unwrap();

        run(command(&temp_dir)).unwrap();

        let vocab = std::fs::read_to_string(temp_dir.join("vocab.txt")).unwrap();
        assert_eq!(vocab, "a_b 3\nc 1\n# 1\n");
        let text = std::fs::read_to_string(temp_dir.join("text.txt")).unwrap();
        assert_eq!(text, "001 a_b a_b c\n002 # a_b\n");
        let merges = std::fs::read_to_string(temp_dir.join("merges.txt")).unwrap();
        assert_eq!(merges, "a b\n");
        let ranked = std::fs::read_to_string(temp_dir.join("ranked.txt")).unwrap();
        assert_eq!(ranked, "1 a_b 3\n2 c 1\n3 # 1\n");

        std::fs::remove_dir_all(temp_dir).ok();
    }
}
