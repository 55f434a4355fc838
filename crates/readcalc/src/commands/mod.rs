//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read standard input, stopping one byte past the limit.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), "stdin", max_bytes)
}

fn read_limited<R: Read>(
    mut reader: R,
    name: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            reader
                .take(max as u64 + 1)
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {name}"))?;
            if content.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_input_file_respects_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        fs::write(&path, "x".repeat(64)).unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        assert!(read_input_file(&path, Some(128)).is_ok());
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn read_limited_stops_past_limit() {
        let data = "abcdefghij".as_bytes();
        assert_eq!(read_limited(data, "test", Some(10)).unwrap(), "abcdefghij");
        assert!(read_limited(data, "test", Some(9)).is_err());
        assert_eq!(read_limited(data, "test", None).unwrap().len(), 10);
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_input_file(Utf8Path::new("/nonexistent/input.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
