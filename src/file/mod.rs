// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Header;
use crate::dict::OrderedDict;
use crate::parser;
use crate::settings::Settings;
use crate::writer::Writer;
use crate::FoamError;

/// Where a [`FoamFile`] is in its read/write cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// Path known, nothing read yet.
    Unbound,
    /// Body mirrors the last successful read or write.
    Loaded,
}

/// One dictionary file on disk: its path, `FoamFile` header, leading banner
/// and body.
#[derive(Debug, Clone)]
pub struct FoamFile {
    path: PathBuf,
    header: Header,
    banner: Option<String>,
    body: OrderedDict,
    state: FileState,
    writer: Writer,
}

impl FoamFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_settings(path, &Settings::default(), None)
    }

    /// A file whose default header and layout come from `settings`.
    pub fn with_settings<P: AsRef<Path>>(path: P, settings: &Settings, class: Option<&str>) -> Self {
        let path = path.as_ref().to_path_buf();
        let object = file_name(&path);
        FoamFile {
            header: settings.header_for(&object, class),
            path,
            banner: None,
            body: OrderedDict::new(),
            state: FileState::Unbound,
            writer: settings.writer(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> String {
        file_name(&self.path)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The banner read from disk, if the file had one.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn body(&self) -> &OrderedDict {
        &self.body
    }

    pub fn state(&self) -> FileState {
        self.state
    }

    /// Read and parse the file. The header and banner are replaced only if
    /// the file carries them.
    ///
    /// # Errors
    /// `PathNotFound` when the file is absent, any codec error when the text
    /// does not parse. Nothing is changed on error.
    pub fn read(&mut self) -> Result<&OrderedDict, FoamError> {
        let text = fs::read_to_string(&self.path).map_err(|e| FoamError::io(e, &self.path, 301))?;
        let parsed = parser::parse_file_text(&text)?;

        if let Some(header) = parsed.header {
            self.header = header;
        }
        if parsed.banner.is_some() {
            self.banner = parsed.banner;
        }
        self.body = parsed.body;
        self.state = FileState::Loaded;

        tracing::debug!(path = %self.path.display(), entries = self.body.len(), "read foam file");
        Ok(&self.body)
    }

    /// Serialize `content` under this file's banner and header and write it,
    /// creating parent directories as needed.
    pub fn write(&mut self, content: &OrderedDict) -> Result<(), FoamError> {
        let text = self.writer.render_file(self.banner(), &self.header, content);
        self.write_text(&text)?;
        self.body = content.clone();
        self.state = FileState::Loaded;
        Ok(())
    }

    /// Write `text` verbatim.
    pub(crate) fn write_text(&self, text: &str) -> Result<(), FoamError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| FoamError::io(e, parent, 302))?;
        }
        fs::write(&self.path, text).map_err(|e| FoamError::io(e, &self.path, 303))?;
        tracing::info!(path = %self.path.display(), bytes = text.len(), "wrote foam file");
        Ok(())
    }

    /// Full text the file would have on disk right now.
    pub fn render(&self) -> String {
        self.writer.render_file(self.banner(), &self.header, &self.body)
    }

    /// Replace the header metadata; the body is untouched.
    pub fn set_header(&mut self, name: &str, version: &str, format: &str, class: &str) {
        self.header = Header::new(name, version, format, class);
    }

    /// Remove the file from disk.
    pub(crate) fn remove(&self) -> Result<(), FoamError> {
        fs::remove_file(&self.path).map_err(|e| FoamError::io(e, &self.path, 304))?;
        tracing::info!(path = %self.path.display(), "deleted foam file");
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
