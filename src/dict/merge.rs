use super::*;

/// Standardise `target` against `template`: the result has the template's
/// keys in the template's order, taking the target's value where the target
/// has the key and the template's value otherwise. Keys only the target has
/// are dropped.
pub fn map_keys_onto(template: &OrderedDict, target: &OrderedDict) -> OrderedDict {
    template
        .entries
        .iter()
        .map(|(key, template_value)| {
            let value = target.entries.get(key).unwrap_or(template_value).clone();
            (key.clone(), value)
        })
        .collect()
}
