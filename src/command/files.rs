use super::*;
use crate::case::DeletedFile;
use crate::dict::{owned, KeyPath, OrderedDict, Position};

/// Create an empty file in a case directory node.
#[derive(Debug, Clone)]
pub struct CreateFile {
    parent: KeyPath,
    name: String,
    class: Option<String>,
    created: Option<KeyPath>,
}

impl CreateFile {
    pub fn new<S: AsRef<str>>(parent: &[S], name: &str) -> Self {
        CreateFile {
            parent: owned(parent),
            name: name.to_string(),
            class: None,
            created: None,
        }
    }

    /// Header `class` for the new file instead of the configured default.
    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

impl Command for CreateFile {
    fn name(&self) -> &'static str {
        "CreateFile"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let change = case.create_file(
            &self.parent,
            &self.name,
            &OrderedDict::new(),
            self.class.as_deref(),
            Position::End,
        )?;
        self.created = Some(change.path.clone());
        Ok(change)
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let created = self.created.as_ref().ok_or_else(|| not_applied(self.name()))?;
        let (change, _) = case.delete_file(created)?;
        Ok(change)
    }
}

/// Delete a mounted file; undo writes its captured text back at its old row.
#[derive(Debug, Clone)]
pub struct DeleteFile {
    path: KeyPath,
    deleted: Option<DeletedFile>,
}

impl DeleteFile {
    pub fn new<S: AsRef<str>>(path: &[S]) -> Self {
        DeleteFile {
            path: owned(path),
            deleted: None,
        }
    }
}

impl Command for DeleteFile {
    fn name(&self) -> &'static str {
        "DeleteFile"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let (change, deleted) = case.delete_file(&self.path)?;
        self.deleted = Some(deleted);
        Ok(change)
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let deleted = self.deleted.as_ref().ok_or_else(|| not_applied(self.name()))?;
        let parent = &self.path[..self.path.len().saturating_sub(1)];
        case.restore_file(parent, deleted)
    }
}
