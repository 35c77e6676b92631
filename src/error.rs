// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use thiserror::Error;

fn extras(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

fn show_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join("/")
    }
}

/// The main error type for FoamFile lexing, parsing and editing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoamError {
    #[error("[FOAM] Syntax Error at {line}:{column}: {message}{}", extras(.hint, .code))]
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[FOAM] Invalid Token '{token}' at {line}:{column}{}", extras(.hint, .code))]
    InvalidToken {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[FOAM] Unexpected EOF at {line}:{column}: {message}{}", extras(.hint, .code))]
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a quoted string is not closed.
    #[error("[FOAM] Unclosed string starting with '{quote}' at {line}:{column}{}", extras(.hint, .code))]
    UnclosedString {
        quote: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[FOAM] Unexpected character '{character}' at {line}:{column}{}", extras(.hint, .code))]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },

    #[error("[FOAM] Key '{key}' not found in {}", show_path(.path))]
    KeyNotFound { key: String, path: Vec<String> },
    #[error("[FOAM] Duplicate key '{key}' in {}", show_path(.path))]
    DuplicateKey { key: String, path: Vec<String> },
    #[error("[FOAM] Entry at {} is not a dictionary", show_path(.path))]
    NotADictionary { path: Vec<String> },

    #[error("[FOAM] Path '{}' does not exist", .path.display())]
    PathNotFound { path: PathBuf },
    #[error("[FOAM] Path '{}' already exists", .path.display())]
    AlreadyExists { path: PathBuf },
    #[error("[FOAM] File Error '{path}': {message}{}", extras(.hint, .code))]
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[FOAM] Invalid settings: {message}{}", extras(.hint, .code))]
    InvalidSettings {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[FOAM] Case directory is missing subdirectories: {}", .missing.join(", "))]
    MissingSubdirectories { missing: Vec<String> },

    /// A cached tree location that no longer names a live node.
    #[error("[FOAM] Invalid location {}: {message}", show_path(.path))]
    InvalidLocation { path: Vec<String>, message: String },
}

impl FoamError {
    /// True for every failure produced while turning text into a tree.
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            FoamError::SyntaxError { .. }
                | FoamError::InvalidToken { .. }
                | FoamError::UnexpectedEof { .. }
                | FoamError::UnclosedString { .. }
                | FoamError::UnexpectedCharacter { .. }
        )
    }

    pub(crate) fn key_not_found(key: &str, path: &[String]) -> Self {
        FoamError::KeyNotFound {
            key: key.to_string(),
            path: path.to_vec(),
        }
    }

    pub(crate) fn duplicate_key(key: &str, path: &[String]) -> Self {
        FoamError::DuplicateKey {
            key: key.to_string(),
            path: path.to_vec(),
        }
    }

    pub(crate) fn io(err: std::io::Error, path: &std::path::Path, code: u32) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return FoamError::PathNotFound {
                path: path.to_path_buf(),
            };
        }
        FoamError::FileError {
            message: err.to_string(),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file is accessible".into()),
            code: Some(code),
        }
    }
}
