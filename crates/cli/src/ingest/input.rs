use anyhow::Context;
use reconflux_domain::{AsnRecord, ResolvedQuery};
use serde::Deserialize;
use tokio::io::{AsyncBufRead, BufReader};

/// One line of JSON-lines input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputRecord {
    Dns(ResolvedQuery),
    Asn(AsnRecord),
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<InputRecord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let record = serde_json::from_str(line).context("malformed input line")?;
    Ok(Some(record))
}

/// Opens `path` for line reading; `-` means stdin.
pub async fn open(path: &str) -> anyhow::Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("failed to open input {}", path))?;
    Ok(Box::new(BufReader::new(file)))
}
