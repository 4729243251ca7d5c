use std::path::Path;

use super::error::PairsError;

/// One (query, URL) pair to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrlPair {
    pub query: String,
    pub url: String,
}

impl QueryUrlPair {
    pub fn new(query: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            url: url.into(),
        }
    }
}

/// Parses `query<TAB>url` lines. Blank lines and `#` comments are skipped.
///
/// The query may be empty; the URL may not. Line numbers in errors are 1-based.
pub fn parse_pairs(input: &str) -> Result<Vec<QueryUrlPair>, PairsError> {
    let mut pairs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let Some((query, url)) = line.split_once('\t') else {
            return Err(PairsError::Malformed {
                line: line_no,
                reason: "expected 'query<TAB>url'".to_string(),
            });
        };

        let url = url.trim();
        if url.is_empty() {
            return Err(PairsError::Malformed {
                line: line_no,
                reason: "URL is empty".to_string(),
            });
        }

        pairs.push(QueryUrlPair::new(query.trim(), url));
    }

    Ok(pairs)
}

pub fn read_pairs(path: &Path) -> Result<Vec<QueryUrlPair>, PairsError> {
    let input = std::fs::read_to_string(path).map_err(|e| PairsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_pairs(&input)
}
