// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ast::Header;
use crate::writer::Writer;
use crate::FoamError;

/// Host-tunable defaults for reading, creating and writing case files.
///
/// Every field has a default, so a JSON override only needs the keys it changes:
///
/// ```
/// use foamdict::Settings;
///
/// let settings = Settings::from_json(r#"{ "indent": "    " }"#).unwrap();
/// assert_eq!(settings.indent, "    ");
/// assert_eq!(settings.header_version, "2.0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Subdirectories every case is expected to carry, in tree order.
    pub case_subdirs: Vec<String>,
    pub header_version: String,
    pub header_format: String,
    /// `class` written into the header of newly created files.
    pub default_class: String,
    /// One indentation step of the serializer.
    pub indent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            case_subdirs: vec!["0".into(), "system".into(), "constant".into()],
            header_version: "2.0".into(),
            header_format: "ascii".into(),
            default_class: "dictionary".into(),
            indent: "\t".into(),
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, FoamError> {
        serde_json::from_str(text).map_err(|e| FoamError::InvalidSettings {
            message: e.to_string(),
            hint: Some("Settings are a JSON object; unknown keys are ignored".into()),
            code: Some(310),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FoamError> {
        let path = Self::expand_path(&path.as_ref().to_string_lossy())?;
        let text = fs::read_to_string(&path).map_err(|e| FoamError::io(e, &path, 311))?;
        Self::from_json(&text)
    }

    /// Expand a leading `~/` to the home directory. Other paths are returned as given.
    pub fn expand_path(raw: &str) -> Result<PathBuf, FoamError> {
        match raw.strip_prefix("~/") {
            Some(rest) => {
                let home = dirs::home_dir().ok_or_else(|| FoamError::FileError {
                    message: "Could not determine home directory for ~ expansion".into(),
                    path: raw.to_string(),
                    hint: Some("Set HOME or use an absolute path".into()),
                    code: Some(300),
                })?;
                Ok(home.join(rest))
            }
            None => Ok(PathBuf::from(raw)),
        }
    }

    /// Check that `dir` exists and holds every expected case subdirectory.
    pub fn validate_case_dir(&self, dir: &Path) -> Result<(), FoamError> {
        if !dir.is_dir() {
            return Err(FoamError::PathNotFound {
                path: dir.to_path_buf(),
            });
        }
        let missing: Vec<String> = self
            .case_subdirs
            .iter()
            .filter(|sub| !dir.join(sub.as_str()).is_dir())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(FoamError::MissingSubdirectories { missing });
        }
        Ok(())
    }

    /// Header for a new file named `object`.
    pub fn header_for(&self, object: &str, class: Option<&str>) -> Header {
        Header::new(
            object,
            &self.header_version,
            &self.header_format,
            class.unwrap_or(&self.default_class),
        )
    }

    pub fn writer(&self) -> Writer {
        Writer::new(self.indent.clone())
    }
}
