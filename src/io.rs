use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::constants::PAGE_COUNT;
use crate::translation::TranslationResult;

/// File-level failures in the CLI driver. Engine validation lives in
/// [`crate::error::ValidationError`]; this covers only reading, writing,
/// and the shape of the table file.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("table file has {got} lines, expected at most {expected}")]
    TableShape { got: usize, expected: usize },
}

/// Read a page table file: one cell per line, up to [`PAGE_COUNT`] lines.
///
/// A blank line means the page is not loaded; missing trailing lines are
/// treated the same way. Cell contents are returned as raw text, the
/// engine owns the per-cell validation.
pub fn read_table_cells<P: AsRef<Path>>(path: P) -> Result<Vec<String>, IoError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|source| IoError::Read {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    parse_table_cells(&content)
}

pub fn parse_table_cells(content: &str) -> Result<Vec<String>, IoError> {
    let mut cells: Vec<String> = content.lines().map(|line| line.trim().to_string()).collect();
    if cells.len() > PAGE_COUNT {
        return Err(IoError::TableShape {
            got: cells.len(),
            expected: PAGE_COUNT,
        });
    }
    cells.resize(PAGE_COUNT, String::new());
    Ok(cells)
}

/// Read logical address tokens, whitespace-separated.
///
/// Tokens stay as raw text so the engine can classify a bad one as
/// `InvalidAddress` instead of this layer guessing.
pub fn read_address_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>, IoError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|source| IoError::Read {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Write physical addresses space-separated, -1 for any fault.
pub fn write_results<P: AsRef<Path>>(path: P, results: &[TranslationResult]) -> Result<(), IoError> {
    let output: Vec<String> = results
        .iter()
        .map(|result| match result.physical_address {
            Some(physical) => physical.to_string(),
            None => "-1".to_string(),
        })
        .collect();
    fs::write(path.as_ref(), output.join(" ")).map_err(|source| IoError::Write {
        path: path.as_ref().display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::table::PageTable;
    use crate::translation::translate_batch;

    #[test]
    fn test_parse_table_cells_full_file() {
        let cells = parse_table_cells("0\n1\n-1\n3\n2\n-1\n-1\n-1").unwrap();
        assert_eq!(cells.len(), PAGE_COUNT);
        assert_eq!(cells[0], "0");
        assert_eq!(cells[7], "-1");
    }

    #[test]
    fn test_parse_table_cells_blank_and_missing_lines() {
        let cells = parse_table_cells("0\n\n2\n").unwrap();
        assert_eq!(cells.len(), PAGE_COUNT);
        assert_eq!(cells[1], "");
        assert_eq!(cells[2], "2");
        assert_eq!(cells[3], ""); // padded
    }

    #[test]
    fn test_parse_table_cells_too_many_lines() {
        let content = "0\n1\n2\n3\n0\n1\n2\n3\n0";
        let err = parse_table_cells(content).unwrap_err();
        assert!(matches!(err, IoError::TableShape { got: 9, expected: 8 }));
    }

    #[test]
    fn test_write_results_marks_faults() {
        let config = Configuration::default();
        let table = PageTable::sample();
        let results = translate_batch(&config, &table, &[3073, 2048]);

        let dir = std::env::temp_dir().join("ptt-io-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("results.txt");
        write_results(&path, &results).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "3073 -1");
        fs::remove_file(&path).unwrap();
    }
}
