use super::*;

impl OrderedDict {
    /// Resolve the dictionary at `path`. The empty path is this dictionary.
    ///
    /// # Errors
    /// `KeyNotFound` if a segment is absent, `NotADictionary` if a segment
    /// names a leaf value.
    pub fn get_dict<S: AsRef<str>>(&self, path: &[S]) -> Result<&OrderedDict, FoamError> {
        let mut current = self;
        for (i, seg) in path.iter().enumerate() {
            let seg = seg.as_ref();
            current = match current.entries.get(seg) {
                Some(Value::Dict(d)) => d,
                Some(_) => {
                    return Err(FoamError::NotADictionary {
                        path: owned(&path[..=i]),
                    });
                }
                None => return Err(FoamError::key_not_found(seg, &owned(&path[..i]))),
            };
        }
        Ok(current)
    }

    pub fn get_dict_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Result<&mut OrderedDict, FoamError> {
        let mut current = self;
        for (i, seg) in path.iter().enumerate() {
            let seg = seg.as_ref();
            current = match current.entries.get_mut(seg) {
                Some(Value::Dict(d)) => d,
                Some(_) => {
                    return Err(FoamError::NotADictionary {
                        path: owned(&path[..=i]),
                    });
                }
                None => return Err(FoamError::key_not_found(seg, &owned(&path[..i]))),
            };
        }
        Ok(current)
    }

    /// Resolve the node (sub-dictionary or leaf) at `path`.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<&Value, FoamError> {
        let (last, parent) = split_last(path)?;
        let dict = self.get_dict(parent)?;
        dict.entries
            .get(last)
            .ok_or_else(|| FoamError::key_not_found(last, &owned(parent)))
    }

    pub fn get_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Result<&mut Value, FoamError> {
        let (last, parent) = split_last(path)?;
        let dict = self.get_dict_mut(parent)?;
        dict.entries
            .get_mut(last)
            .ok_or_else(|| FoamError::key_not_found(last, &owned(parent)))
    }

    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.get(path).is_ok()
    }

    /// Keys of the dictionary at `path`, in order.
    pub fn keys<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<String>, FoamError> {
        Ok(self.get_dict(path)?.entries.keys().cloned().collect())
    }

    /// Row of `key` inside the dictionary at `path`.
    pub fn index_of<S: AsRef<str>>(&self, path: &[S], key: &str) -> Result<usize, FoamError> {
        self.get_dict(path)?
            .entries
            .get_index_of(key)
            .ok_or_else(|| FoamError::key_not_found(key, &owned(path)))
    }

    /// Key at `row` inside the dictionary at `path`, if the row exists.
    pub fn key_at<S: AsRef<str>>(&self, path: &[S], row: usize) -> Result<Option<&String>, FoamError> {
        Ok(self.get_dict(path)?.entries.get_index(row).map(|(k, _)| k))
    }
}

fn split_last<S: AsRef<str>>(path: &[S]) -> Result<(&str, &[S]), FoamError> {
    match path.split_last() {
        Some((last, parent)) => Ok((last.as_ref(), parent)),
        None => Err(FoamError::InvalidLocation {
            path: Vec::new(),
            message: "empty key path does not name an entry".into(),
        }),
    }
}
