//! Batch input file
//!
//! One password per line; surrounding whitespace is trimmed.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use secrecy::SecretString;

use crate::error::BatchError;

const SAMPLE_PASSWORDS: [&str; 3] = ["password", "123456", "Password123!"];

/// Reads every line of `path` as a password.
///
/// Lines are trimmed; blank lines are kept and score as empty passwords.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
pub fn read_passwords<P: AsRef<Path>>(path: P) -> Result<Vec<SecretString>, BatchError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Batch file not found: {:?}", path);
        return Err(BatchError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let passwords: Vec<SecretString> = content
        .lines()
        .map(|line| SecretString::new(line.trim().to_string().into()))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Loaded {} passwords from {:?}", passwords.len(), path);

    Ok(passwords)
}

/// Writes a small sample batch file unless `path` already exists.
///
/// Returns `true` if the file was created.
pub fn ensure_sample_file<P: AsRef<Path>>(path: P) -> Result<bool, BatchError> {
    let path = path.as_ref();
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    for pwd in SAMPLE_PASSWORDS {
        writeln!(file, "{}", pwd)?;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Created sample batch file {:?}", path);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    fn exposed(passwords: &[SecretString]) -> Vec<&str> {
        passwords.iter().map(|p| p.expose_secret()).collect()
    }

    #[test]
    fn test_read_passwords_trims_lines() {
        let temp_file = setup_with_tempfile(&["  password  ", "\t123456", "Password123!\r"]);
        let passwords = read_passwords(temp_file.path()).unwrap();
        assert_eq!(exposed(&passwords), vec!["password", "123456", "Password123!"]);
    }

    #[test]
    fn test_read_passwords_keeps_blank_lines() {
        let temp_file = setup_with_tempfile(&["first", "   ", "last"]);
        let passwords = read_passwords(temp_file.path()).unwrap();
        assert_eq!(exposed(&passwords), vec!["first", "", "last"]);
    }

    #[test]
    fn test_read_passwords_file_not_found() {
        let result = read_passwords("/nonexistent/path/passwords.txt");
        match result {
            Err(BatchError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_ensure_sample_file_creates_once() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("passwords.txt");

        assert!(ensure_sample_file(&path).unwrap());
        assert!(!ensure_sample_file(&path).unwrap());

        let passwords = read_passwords(&path).unwrap();
        assert_eq!(exposed(&passwords), SAMPLE_PASSWORDS.to_vec());
    }

    #[test]
    fn test_ensure_sample_file_keeps_existing_content() {
        let temp_file = setup_with_tempfile(&["mine"]);
        assert!(!ensure_sample_file(temp_file.path()).unwrap());
        let passwords = read_passwords(temp_file.path()).unwrap();
        assert_eq!(exposed(&passwords), vec!["mine"]);
    }
}
