use std::io;
use std::path::{Path, PathBuf};
use tokenizers::{Tokenizer, TruncationParams};

pub const CONFIG_FILE: &str = "config.json";
pub const WEIGHTS_FILE: &str = "model.safetensors";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// The three files a Hugging Face style model directory must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub weights: PathBuf,
    pub tokenizer: PathBuf,
}

impl ModelFiles {
    /// Resolves the expected file paths inside `model_dir` (no filesystem access).
    pub fn in_dir(model_dir: &Path) -> Self {
        Self {
            config: model_dir.join(CONFIG_FILE),
            weights: model_dir.join(WEIGHTS_FILE),
            tokenizer: model_dir.join(TOKENIZER_FILE),
        }
    }

    /// Returns the first missing file, if any.
    pub fn first_missing(&self) -> Option<&Path> {
        [&self.config, &self.weights, &self.tokenizer]
            .into_iter()
            .find(|p| !p.exists())
            .map(PathBuf::as_path)
    }
}

/// Loads `tokenizer.json` with truncation to `max_len` tokens.
///
/// BERT-family checkpoints have a fixed position-embedding table, so anything
/// longer than `max_len` must be cut before it reaches the model.
pub fn load_tokenizer_with_truncation(path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    Ok(tokenizer)
}

/// Reads and parses a JSON file into `T`.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse {}: {}", path.display(), e),
        )
    })
}
