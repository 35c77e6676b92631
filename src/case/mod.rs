// Author: Dustin Pilgrim
// License: MIT

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;

use crate::ast::Value;
use crate::dict::{owned, KeyPath, OrderedDict, Position};
use crate::file::FoamFile;
use crate::settings::Settings;
use crate::FoamError;

mod edit;

/// What an edit touched, for the UI to refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub message: String,
    /// Key path of the node that changed (or of its parent when it was removed).
    pub path: KeyPath,
}

impl Change {
    pub(crate) fn new(message: impl Into<String>, path: KeyPath) -> Self {
        Change {
            message: message.into(),
            path,
        }
    }
}

/// A UI-side handle to a node: its parent's key path, its row and its key.
///
/// Rows go stale when siblings are inserted or removed; [`Case::resolve`]
/// falls back to the key in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub parent: KeyPath,
    pub row: usize,
    pub key: String,
}

impl Location {
    pub fn new<S: AsRef<str>>(parent: &[S], row: usize, key: &str) -> Self {
        Location {
            parent: owned(parent),
            row,
            key: key.to_string(),
        }
    }

    pub fn key_path(&self) -> KeyPath {
        child(&self.parent, &self.key)
    }
}

/// A deleted file as captured for restoring it later.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedFile {
    pub name: String,
    /// The file's full text at the time it was deleted.
    pub text: String,
    pub row: usize,
}

/// One case directory: the tree of every mounted file and the file units
/// that persist it.
///
/// The first level of the tree holds the case subdirectories, the level
/// below holds file names, and each file name maps to that file's body.
/// Every edit is written through to the owning file before it is committed
/// to the tree.
#[derive(Debug)]
pub struct Case {
    dir: PathBuf,
    settings: Settings,
    tree: OrderedDict,
    files: IndexMap<KeyPath, FoamFile>,
}

impl Case {
    /// An empty case rooted at `dir`, with one empty node per case subdirectory.
    pub fn new<P: AsRef<Path>>(dir: P, settings: Settings) -> Self {
        let tree = settings
            .case_subdirs
            .iter()
            .map(|sub| (sub.clone(), Value::Dict(OrderedDict::new())))
            .collect();
        Case {
            dir: dir.as_ref().to_path_buf(),
            settings,
            tree,
            files: IndexMap::new(),
        }
    }

    /// Read every file in `files` (paths relative to `dir`, or absolute
    /// paths under it) and mount it in the tree.
    pub fn open<P: AsRef<Path>, F: AsRef<Path>>(dir: P, files: &[F]) -> Result<Self, FoamError> {
        Self::open_with(dir, files, Settings::default())
    }

    pub fn open_with<P: AsRef<Path>, F: AsRef<Path>>(
        dir: P,
        files: &[F],
        settings: Settings,
    ) -> Result<Self, FoamError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(FoamError::PathNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut case = Case::new(dir, settings);
        for file in files {
            case.mount(file.as_ref())?;
        }

        tracing::info!(dir = %dir.display(), files = case.files.len(), "opened case");
        Ok(case)
    }

    fn mount(&mut self, file: &Path) -> Result<KeyPath, FoamError> {
        let rel = if file.is_absolute() {
            file.strip_prefix(&self.dir).map_err(|_| FoamError::FileError {
                message: "File is outside the case directory".into(),
                path: file.to_string_lossy().to_string(),
                hint: Some(format!("Expected a path under {}", self.dir.display())),
                code: Some(305),
            })?
        } else {
            file
        };

        let key_path: KeyPath = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();
        let Some((name, dirs)) = key_path.split_last() else {
            return Err(FoamError::FileError {
                message: "Empty file path".into(),
                path: file.to_string_lossy().to_string(),
                hint: None,
                code: Some(305),
            });
        };
        if dirs.is_empty() {
            return Err(FoamError::FileError {
                message: "Files are mounted below a case subdirectory".into(),
                path: file.to_string_lossy().to_string(),
                hint: Some("Pass paths such as 'system/controlDict'".into()),
                code: Some(305),
            });
        }

        let mut unit = FoamFile::with_settings(self.dir.join(rel), &self.settings, None);
        let body = unit.read()?.clone();

        self.ensure_dirs(dirs)?;
        self.tree.put(dirs, name, Value::Dict(body))?;
        self.files.insert(key_path.clone(), unit);
        Ok(key_path)
    }

    fn ensure_dirs(&mut self, dirs: &[String]) -> Result<(), FoamError> {
        for i in 0..dirs.len() {
            if !self.tree.contains(&dirs[..=i]) {
                self.tree.put(&dirs[..i], &dirs[i], Value::Dict(OrderedDict::new()))?;
            }
        }
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tree(&self) -> &OrderedDict {
        &self.tree
    }

    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<&Value, FoamError> {
        self.tree.get(path)
    }

    /// The file unit mounted exactly at `key_path`.
    pub fn file<S: AsRef<str>>(&self, key_path: &[S]) -> Option<&FoamFile> {
        self.files.get(&owned(key_path))
    }

    pub fn files(&self) -> impl Iterator<Item = (&KeyPath, &FoamFile)> {
        self.files.iter()
    }

    pub fn is_file<S: AsRef<str>>(&self, key_path: &[S]) -> bool {
        self.files.contains_key(&owned(key_path))
    }

    /// Key path of the file that contains `path` (the longest mounted prefix).
    pub fn owning_file<S: AsRef<str>>(&self, path: &[S]) -> Result<KeyPath, FoamError> {
        self.files
            .keys()
            .filter(|key| {
                key.len() <= path.len() && key.iter().zip(path).all(|(k, p)| k.as_str() == p.as_ref())
            })
            .max_by_key(|key| key.len())
            .cloned()
            .ok_or_else(|| FoamError::InvalidLocation {
                path: owned(path),
                message: "not inside a mounted file".into(),
            })
    }

    /// The live key path for a UI location.
    ///
    /// The row is trusted when it still holds `key`; otherwise the key is looked
    /// up again under the same parent.
    ///
    /// # Errors
    /// `InvalidLocation` when the parent is gone or no longer holds the key.
    pub fn resolve(&self, location: &Location) -> Result<KeyPath, FoamError> {
        let invalid = |message: &str| FoamError::InvalidLocation {
            path: location.key_path(),
            message: message.into(),
        };

        let at_row = self
            .tree
            .key_at(&location.parent, location.row)
            .map_err(|_| invalid("parent no longer exists"))?;
        if at_row == Some(&location.key) {
            return Ok(location.key_path());
        }

        match self.tree.index_of(&location.parent, &location.key) {
            Ok(row) => {
                tracing::debug!(key = %location.key, from = location.row, to = row, "location re-resolved by key");
                Ok(location.key_path())
            }
            Err(_) => Err(invalid("key no longer exists under its parent")),
        }
    }

    /// A location for the node at `path`, as the UI would hold it.
    pub fn locate<S: AsRef<str>>(&self, path: &[S]) -> Result<Location, FoamError> {
        let Some((key, parent)) = path.split_last() else {
            return Err(FoamError::InvalidLocation {
                path: Vec::new(),
                message: "the root has no location".into(),
            });
        };
        let row = self.tree.index_of(parent, key.as_ref())?;
        Ok(Location::new(parent, row, key.as_ref()))
    }

    /// Insert position that puts a new key at `row` under `parent`: before the
    /// key now at that row, or at the end when the row is past the last key.
    pub fn position_for_row<S: AsRef<str>>(&self, parent: &[S], row: usize) -> Result<Position, FoamError> {
        Ok(match self.tree.key_at(parent, row)? {
            Some(key) => Position::before(key.clone()),
            None => Position::End,
        })
    }
}

pub(crate) fn child<S: AsRef<str>>(parent: &[S], key: &str) -> KeyPath {
    let mut path = owned(parent);
    path.push(key.to_string());
    path
}
