//! JSON report persistence.

use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Pretty JSON with four-space indentation.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, value)?;
    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` to `path` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::FrequencyTable;

    #[test]
    fn test_four_space_indent() {
        let table = FrequencyTable::from_lemmas(["dog", "dog", "cat"]);
        assert_eq!(
            to_json_string(&table).unwrap(),
            "{\n    \"dog\": 2,\n    \"cat\": 1\n}"
        );
    }

    #[test]
    fn test_write_json_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/word_count.json");
        write_json(&path, &serde_json::json!({ "a": 1 })).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n    \"a\": 1\n}\n");
    }
}
