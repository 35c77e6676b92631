use super::*;
use crate::dict::map_keys_onto;

impl Case {
    /// Apply `op` to a copy of the body of the file owning `path`, write the
    /// result, then commit it to the tree. `op` receives `path` relative to
    /// that body. The tree is unchanged when `op` or the write fails.
    fn edit_in_file<S, T, F>(&mut self, path: &[S], op: F) -> Result<T, FoamError>
    where
        S: AsRef<str>,
        F: FnOnce(&mut OrderedDict, &[String]) -> Result<T, FoamError>,
    {
        let path = owned(path);
        let file_key = self.owning_file(&path)?;
        let mut body = self.tree.get_dict(&file_key)?.clone();
        let out = op(&mut body, &path[file_key.len()..])?;

        let unit = self.files.get_mut(&file_key).ok_or_else(|| FoamError::InvalidLocation {
            path: file_key.clone(),
            message: "file is not mounted".into(),
        })?;
        unit.write(&body)?;
        self.tree.replace_dict(&file_key, body)?;

        tracing::debug!(file = %file_key.join("/"), path = %path.join("/"), "applied edit");
        Ok(out)
    }

    /// Insert `key` under `parent` at `position`. Returns the new row.
    pub fn insert_entry<S: AsRef<str>>(
        &mut self,
        parent: &[S],
        key: &str,
        value: Value,
        position: Position,
    ) -> Result<(Change, usize), FoamError> {
        let row = self.edit_in_file(parent, |body, inner| body.insert(inner, key, value, position))?;
        Ok((Change::new(format!("Item '{}' created.", key), child(parent, key)), row))
    }

    /// Insert `key`, replacing an existing entry of the same key. Returns the
    /// new row and the replaced entry's former row and value.
    pub fn insert_or_replace_entry<S: AsRef<str>>(
        &mut self,
        parent: &[S],
        key: &str,
        value: Value,
        position: Position,
    ) -> Result<(Change, usize, Option<(usize, Value)>), FoamError> {
        let (row, replaced) =
            self.edit_in_file(parent, |body, inner| body.insert_or_replace(inner, key, value, position))?;
        Ok((Change::new(format!("Item '{}' created.", key), child(parent, key)), row, replaced))
    }

    /// Remove `key` from `parent`. Returns its former row and value.
    pub fn remove_entry<S: AsRef<str>>(&mut self, parent: &[S], key: &str) -> Result<(Change, usize, Value), FoamError> {
        let (row, value) = self.edit_in_file(parent, |body, inner| body.remove(inner, key))?;
        Ok((Change::new(format!("Item with key '{}' deleted.", key), owned(parent)), row, value))
    }

    pub fn rename_entry<S: AsRef<str>>(&mut self, parent: &[S], old_key: &str, new_key: &str) -> Result<Change, FoamError> {
        self.edit_in_file(parent, |body, inner| body.rename(inner, old_key, new_key))?;
        Ok(Change::new(
            format!("Item key has been updated from '{}' to '{}'.", old_key, new_key),
            child(parent, new_key),
        ))
    }

    /// Replace the value of `key`. Returns the previous value.
    pub fn update_entry<S: AsRef<str>>(
        &mut self,
        parent: &[S],
        key: &str,
        value: Value,
    ) -> Result<(Change, Value), FoamError> {
        let shown = value.to_string();
        let old = self.edit_in_file(parent, |body, inner| body.update_value(inner, key, value))?;
        let message = format!("Item value has been updated from '{}' to '{}'.", old, shown);
        Ok((Change::new(message, child(parent, key)), old))
    }

    /// Empty the dictionary at `path`. Returns what it held.
    pub fn clear_dict<S: AsRef<str>>(&mut self, path: &[S]) -> Result<(Change, OrderedDict), FoamError> {
        let removed = self.edit_in_file(path, |body, inner| body.clear(inner))?;
        let name = path.last().map(|k| k.as_ref().to_string()).unwrap_or_default();
        Ok((
            Change::new(format!("Dictionary with key '{}' cleared.", name), owned(path)),
            removed,
        ))
    }

    /// Swap the dictionary at `path` for `content`. Returns the old content.
    pub fn replace_dict<S: AsRef<str>>(
        &mut self,
        path: &[S],
        content: OrderedDict,
    ) -> Result<(Change, OrderedDict), FoamError> {
        let old = self.edit_in_file(path, |body, inner| body.replace_dict(inner, content))?;
        let name = path.last().map(|k| k.as_ref().to_string()).unwrap_or_default();
        Ok((
            Change::new(format!("Dictionary with key '{}' restored.", name), owned(path)),
            old,
        ))
    }

    fn file_path(&self, key_path: &[String]) -> PathBuf {
        key_path.iter().fold(self.dir.clone(), |p, part| p.join(part))
    }

    // New files live directly in a directory node, never inside another file.
    fn check_new_file<S: AsRef<str>>(&self, parent: &[S], name: &str, position: &Position) -> Result<KeyPath, FoamError> {
        if self.owning_file(parent).is_ok() {
            return Err(FoamError::InvalidLocation {
                path: owned(parent),
                message: "files can only be created in a case directory".into(),
            });
        }
        let dir = self.tree.get_dict(parent)?;
        let key_path = child(parent, name);
        let disk_path = self.file_path(&key_path);
        if dir.entry(name).is_some() || disk_path.exists() {
            return Err(FoamError::AlreadyExists { path: disk_path });
        }
        if let Position::Before(anchor) | Position::After(anchor) = position {
            if dir.entry(anchor).is_none() {
                return Err(FoamError::key_not_found(anchor, &owned(parent)));
            }
        }
        Ok(key_path)
    }

    /// Create the file `name` under the directory node `parent`, write
    /// `content` to it and mount it at `position`.
    pub fn create_file<S: AsRef<str>>(
        &mut self,
        parent: &[S],
        name: &str,
        content: &OrderedDict,
        class: Option<&str>,
        position: Position,
    ) -> Result<Change, FoamError> {
        let key_path = self.check_new_file(parent, name, &position)?;
        let mut unit = FoamFile::with_settings(self.file_path(&key_path), &self.settings, class);
        unit.write(content)?;

        self.tree.insert(parent, name, Value::Dict(content.clone()), position)?;
        self.files.insert(key_path.clone(), unit);
        Ok(Change::new(format!("File '{}' created.", name), key_path))
    }

    /// Delete the mounted file at `key_path` from disk and from the tree,
    /// capturing its text and row.
    pub fn delete_file<S: AsRef<str>>(&mut self, key_path: &[S]) -> Result<(Change, DeletedFile), FoamError> {
        let key_path = owned(key_path);
        let Some((name, parent)) = key_path.split_last() else {
            return Err(FoamError::InvalidLocation {
                path: Vec::new(),
                message: "the root is not a file".into(),
            });
        };
        let unit = self.files.get(&key_path).ok_or_else(|| FoamError::InvalidLocation {
            path: key_path.clone(),
            message: "not a mounted file".into(),
        })?;

        let text = unit.render();
        unit.remove()?;
        let (row, _) = self.tree.remove(parent, name)?;
        self.files.shift_remove(&key_path);

        let deleted = DeletedFile {
            name: name.clone(),
            text,
            row,
        };
        Ok((Change::new(format!("File '{}' deleted.", name), parent.to_vec()), deleted))
    }

    /// Write a deleted file back with its captured text and mount it at its
    /// former row under `parent`.
    pub fn restore_file<S: AsRef<str>>(&mut self, parent: &[S], deleted: &DeletedFile) -> Result<Change, FoamError> {
        let position = self.position_for_row(parent, deleted.row)?;
        let key_path = self.check_new_file(parent, &deleted.name, &position)?;

        let mut unit = FoamFile::with_settings(self.file_path(&key_path), &self.settings, None);
        unit.write_text(&deleted.text)?;
        let body = unit.read()?.clone();

        self.tree.insert(parent, &deleted.name, Value::Dict(body), position)?;
        self.files.insert(key_path.clone(), unit);
        Ok(Change::new(format!("File '{}' restored.", deleted.name), key_path))
    }

    /// Standardise the first-level field at `template` across every file in
    /// the same directory: each sibling's field becomes
    /// [`map_keys_onto`]`(template, sibling)`. A sibling field that is not a
    /// dictionary is treated as empty.
    ///
    /// Returns the previous value of every field that was rewritten.
    ///
    /// # Errors
    /// `NotADictionary` when the template is a leaf, `KeyNotFound` when any
    /// sibling lacks the field. Both are checked before anything is written.
    /// When writing a sibling fails, the siblings already rewritten are put
    /// back before the error is returned.
    pub fn standardise<S: AsRef<str>>(&mut self, template: &[S]) -> Result<(Change, Vec<(KeyPath, Value)>), FoamError> {
        let template = owned(template);
        let file_key = self.owning_file(&template)?;
        if template.len() != file_key.len() + 1 {
            return Err(FoamError::InvalidLocation {
                path: template,
                message: "only a first-level field of a file can be standardised".into(),
            });
        }
        let field = &template[file_key.len()];
        let dir = &file_key[..file_key.len() - 1];

        let template_dict = match self.tree.get(&template)? {
            Value::Dict(d) => d.clone(),
            _ => return Err(FoamError::NotADictionary { path: template.clone() }),
        };

        let siblings: Vec<KeyPath> = self
            .tree
            .get_dict(dir)?
            .level_keys()
            .map(|name| child(dir, name))
            .filter(|key| self.files.contains_key(key))
            .collect();
        for sibling in &siblings {
            if self.tree.get_dict(sibling)?.entry(field).is_none() {
                return Err(FoamError::key_not_found(field, sibling));
            }
        }

        let empty = OrderedDict::new();
        let mut previous: Vec<(KeyPath, Value)> = Vec::new();
        for sibling in siblings.iter().filter(|s| **s != file_key) {
            let field_path = child(sibling, field);
            let old = self.tree.get(&field_path)?.clone();
            let merged = map_keys_onto(&template_dict, old.as_dict().unwrap_or(&empty));
            if let Err(e) = self.update_entry(sibling, field, Value::Dict(merged)) {
                self.roll_back_fields(&previous);
                return Err(e);
            }
            previous.push((field_path, old));
        }

        tracing::debug!(field = %field, files = previous.len(), "standardised field");
        Ok((Change::new("Fields standardised successfully.", dir.to_vec()), previous))
    }

    // Put back fields a failed standardise already rewrote, latest first.
    fn roll_back_fields(&mut self, previous: &[(KeyPath, Value)]) {
        for (path, value) in previous.iter().rev() {
            let Some((key, parent)) = path.split_last() else {
                continue;
            };
            if let Err(e) = self.update_entry(parent, key, value.clone()) {
                tracing::warn!(path = %path.join("/"), error = %e, "could not roll back standardised field");
            }
        }
    }
}
