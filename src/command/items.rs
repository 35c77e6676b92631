use super::*;
use crate::ast::Value;
use crate::dict::{owned, KeyPath, OrderedDict, Position};

fn split(path: &[String]) -> (KeyPath, String) {
    match path.split_last() {
        Some((key, parent)) => (parent.to_vec(), key.clone()),
        None => (Vec::new(), String::new()),
    }
}

/// Insert a new entry before or after a sibling, or as the last child of a
/// dictionary.
#[derive(Debug, Clone)]
pub struct CreateItem {
    parent: KeyPath,
    key: String,
    value: Value,
    position: Position,
    allow_duplicate: bool,
    replaced: Option<(usize, Value)>,
}

impl CreateItem {
    pub fn new<S: AsRef<str>>(parent: &[S], key: &str, value: Value, position: Position) -> Self {
        CreateItem {
            parent: owned(parent),
            key: key.to_string(),
            value,
            position,
            allow_duplicate: false,
            replaced: None,
        }
    }

    /// Insert next to the entry at `target`, before it.
    pub fn before<S: AsRef<str>>(target: &[S], key: &str, value: Value) -> Self {
        let (parent, anchor) = split(&owned(target));
        Self::new(&parent, key, value, Position::Before(anchor))
    }

    pub fn after<S: AsRef<str>>(target: &[S], key: &str, value: Value) -> Self {
        let (parent, anchor) = split(&owned(target));
        Self::new(&parent, key, value, Position::After(anchor))
    }

    /// Append inside the dictionary at `dict`.
    pub fn child<S: AsRef<str>>(dict: &[S], key: &str, value: Value) -> Self {
        Self::new(dict, key, value, Position::End)
    }

    /// Replace an existing entry with the same key instead of failing.
    pub fn allow_duplicate(mut self) -> Self {
        self.allow_duplicate = true;
        self
    }
}

impl Command for CreateItem {
    fn name(&self) -> &'static str {
        "CreateItem"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let value = self.value.clone();
        let position = self.position.clone();
        if self.allow_duplicate {
            let (change, _, replaced) = case.insert_or_replace_entry(&self.parent, &self.key, value, position)?;
            self.replaced = replaced;
            Ok(change)
        } else {
            let (change, _) = case.insert_entry(&self.parent, &self.key, value, position)?;
            self.replaced = None;
            Ok(change)
        }
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let (change, _, _) = case.remove_entry(&self.parent, &self.key)?;
        if let Some((row, value)) = &self.replaced {
            let position = case.position_for_row(&self.parent, *row)?;
            case.insert_entry(&self.parent, &self.key, value.clone(), position)?;
        }
        Ok(change)
    }
}

/// Remove one entry; undo puts it back at its old row.
#[derive(Debug, Clone)]
pub struct DeleteItem {
    parent: KeyPath,
    key: String,
    deleted: Option<(usize, Value)>,
}

impl DeleteItem {
    /// Delete the entry at `path`.
    pub fn new<S: AsRef<str>>(path: &[S]) -> Self {
        let (parent, key) = split(&owned(path));
        DeleteItem {
            parent,
            key,
            deleted: None,
        }
    }
}

impl Command for DeleteItem {
    fn name(&self) -> &'static str {
        "DeleteItem"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let (change, row, value) = case.remove_entry(&self.parent, &self.key)?;
        self.deleted = Some((row, value));
        Ok(change)
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let (row, value) = self.deleted.as_ref().ok_or_else(|| not_applied(self.name()))?;
        let position = case.position_for_row(&self.parent, *row)?;
        let (mut change, _) = case.insert_entry(&self.parent, &self.key, value.clone(), position)?;
        change.message = format!("Item with key '{}' restored.", self.key);
        Ok(change)
    }
}

/// Empty a dictionary; undo restores everything it held.
#[derive(Debug, Clone)]
pub struct ClearDict {
    path: KeyPath,
    removed: Option<OrderedDict>,
}

impl ClearDict {
    pub fn new<S: AsRef<str>>(path: &[S]) -> Self {
        ClearDict {
            path: owned(path),
            removed: None,
        }
    }
}

impl Command for ClearDict {
    fn name(&self) -> &'static str {
        "ClearDict"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let (change, removed) = case.clear_dict(&self.path)?;
        self.removed = Some(removed);
        Ok(change)
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let removed = self.removed.as_ref().ok_or_else(|| not_applied(self.name()))?;
        let (change, _) = case.replace_dict(&self.path, removed.clone())?;
        Ok(change)
    }
}

/// The part of an entry an [`UpdateItem`] changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Key(String),
    Value(Value),
}

/// Change an entry's key or value in place.
#[derive(Debug, Clone)]
pub struct UpdateItem {
    parent: KeyPath,
    key: String,
    new: Update,
    old: Option<Update>,
}

impl UpdateItem {
    /// Rename the entry at `path` to `new_key`.
    pub fn key<S: AsRef<str>>(path: &[S], new_key: &str) -> Self {
        Self::new(path, Update::Key(new_key.to_string()))
    }

    /// Give the entry at `path` a new value.
    pub fn value<S: AsRef<str>>(path: &[S], new_value: Value) -> Self {
        Self::new(path, Update::Value(new_value))
    }

    fn new<S: AsRef<str>>(path: &[S], new: Update) -> Self {
        let (parent, key) = split(&owned(path));
        UpdateItem {
            parent,
            key,
            new,
            old: None,
        }
    }
}

impl Command for UpdateItem {
    fn name(&self) -> &'static str {
        "UpdateItem"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        match &self.new {
            Update::Key(new_key) => {
                let change = case.rename_entry(&self.parent, &self.key, new_key)?;
                self.old = Some(Update::Key(self.key.clone()));
                Ok(change)
            }
            Update::Value(new_value) => {
                let (change, old) = case.update_entry(&self.parent, &self.key, new_value.clone())?;
                self.old = Some(Update::Value(old));
                Ok(change)
            }
        }
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        match (&self.new, &self.old) {
            (Update::Key(new_key), Some(Update::Key(old_key))) => case.rename_entry(&self.parent, new_key, old_key),
            (Update::Value(_), Some(Update::Value(old))) => {
                let (change, _) = case.update_entry(&self.parent, &self.key, old.clone())?;
                Ok(change)
            }
            _ => Err(not_applied(self.name())),
        }
    }
}

/// Standardise one first-level field across every file of its directory;
/// undo restores each rewritten field.
#[derive(Debug, Clone)]
pub struct StandardiseField {
    template: KeyPath,
    previous: Option<Vec<(KeyPath, Value)>>,
}

impl StandardiseField {
    pub fn new<S: AsRef<str>>(template: &[S]) -> Self {
        StandardiseField {
            template: owned(template),
            previous: None,
        }
    }
}

impl Command for StandardiseField {
    fn name(&self) -> &'static str {
        "StandardiseField"
    }

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let (change, previous) = case.standardise(&self.template)?;
        self.previous = Some(previous);
        Ok(change)
    }

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError> {
        let previous = self.previous.as_ref().ok_or_else(|| not_applied(self.name()))?;
        for (path, value) in previous {
            let (parent, key) = split(path);
            case.update_entry(&parent, &key, value.clone())?;
        }
        let dir = self.template.get(..self.template.len().saturating_sub(2)).unwrap_or_default();
        Ok(Change::new("Original fields restored.", dir.to_vec()))
    }
}
