use super::*;

impl OrderedDict {
    /// Append `key` at the end of the dictionary at `path`. Returns the new row.
    ///
    /// # Errors
    /// `DuplicateKey` when `key` already exists at that level.
    pub fn put<S: AsRef<str>>(&mut self, path: &[S], key: &str, value: Value) -> Result<usize, FoamError> {
        self.insert(path, key, value, Position::End)
    }

    /// Insert `key` before/after an anchor key, or at the end. All other keys
    /// keep their relative order. Returns the new row.
    ///
    /// # Errors
    /// `DuplicateKey` when `key` exists, `KeyNotFound` when the anchor is absent.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        path: &[S],
        key: &str,
        value: Value,
        position: Position,
    ) -> Result<usize, FoamError> {
        let target = self.get_dict_mut(path)?;
        if target.entries.contains_key(key) {
            return Err(FoamError::duplicate_key(key, &owned(path)));
        }
        let index = target
            .anchor_index(&position)
            .map_err(|anchor| FoamError::key_not_found(anchor, &owned(path)))?;
        target.entries.shift_insert(index, key.to_string(), value);
        Ok(index)
    }

    /// Like [`insert`](Self::insert) but an existing entry with the same key is
    /// replaced. Returns the new row and, if an entry was replaced, its former
    /// row and value.
    pub fn insert_or_replace<S: AsRef<str>>(
        &mut self,
        path: &[S],
        key: &str,
        value: Value,
        position: Position,
    ) -> Result<(usize, Option<(usize, Value)>), FoamError> {
        let target = self.get_dict_mut(path)?;

        // Anchoring on the replaced key itself keeps it where it is.
        let self_anchored = matches!(&position, Position::Before(a) | Position::After(a) if a == key);
        if self_anchored {
            if let Some(slot) = target.entries.get_full_mut(key) {
                let (index, _, existing) = slot;
                let old = std::mem::replace(existing, value);
                return Ok((index, Some((index, old))));
            }
        }

        if let Position::Before(anchor) | Position::After(anchor) = &position {
            if !target.entries.contains_key(anchor.as_str()) {
                return Err(FoamError::key_not_found(anchor, &owned(path)));
            }
        }
        let replaced = target
            .entries
            .shift_remove_full(key)
            .map(|(index, _, old)| (index, old));
        let index = target
            .anchor_index(&position)
            .map_err(|anchor| FoamError::key_not_found(anchor, &owned(path)))?;
        target.entries.shift_insert(index, key.to_string(), value);
        Ok((index, replaced))
    }

    /// Rename `old_key` in place. Returns its row.
    ///
    /// # Errors
    /// `KeyNotFound` when `old_key` is absent, `DuplicateKey` when `new_key`
    /// already exists. The dictionary is unchanged on error.
    pub fn rename<S: AsRef<str>>(&mut self, path: &[S], old_key: &str, new_key: &str) -> Result<usize, FoamError> {
        let target = self.get_dict_mut(path)?;
        let index = target
            .entries
            .get_index_of(old_key)
            .ok_or_else(|| FoamError::key_not_found(old_key, &owned(path)))?;
        if old_key == new_key {
            return Ok(index);
        }
        if target.entries.contains_key(new_key) {
            return Err(FoamError::duplicate_key(new_key, &owned(path)));
        }
        if let Some((index, _, value)) = target.entries.shift_remove_full(old_key) {
            target.entries.shift_insert(index, new_key.to_string(), value);
        }
        Ok(index)
    }

    /// Replace the value of `key`, keeping its row. Returns the previous value.
    pub fn update_value<S: AsRef<str>>(&mut self, path: &[S], key: &str, new_value: Value) -> Result<Value, FoamError> {
        let target = self.get_dict_mut(path)?;
        match target.entries.get_mut(key) {
            Some(slot) => Ok(std::mem::replace(slot, new_value)),
            None => Err(FoamError::key_not_found(key, &owned(path))),
        }
    }

    /// Delete `key`. Returns the row it occupied and its value.
    pub fn remove<S: AsRef<str>>(&mut self, path: &[S], key: &str) -> Result<(usize, Value), FoamError> {
        let target = self.get_dict_mut(path)?;
        target
            .entries
            .shift_remove_full(key)
            .map(|(index, _, value)| (index, value))
            .ok_or_else(|| FoamError::key_not_found(key, &owned(path)))
    }

    /// Empty the dictionary at `path`, returning what was removed.
    pub fn clear<S: AsRef<str>>(&mut self, path: &[S]) -> Result<OrderedDict, FoamError> {
        let target = self.get_dict_mut(path)?;
        Ok(std::mem::take(target))
    }

    /// Swap the whole dictionary at `path` for `content`, returning the old one.
    pub fn replace_dict<S: AsRef<str>>(&mut self, path: &[S], content: OrderedDict) -> Result<OrderedDict, FoamError> {
        let target = self.get_dict_mut(path)?;
        Ok(std::mem::replace(target, content))
    }
}
