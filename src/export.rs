// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use serde_json::json;

use crate::FoamError;
use crate::ast::{List, Scalar, Value};
use crate::dict::OrderedDict;
use crate::file::FoamFile;

fn scalar_to_json(s: &Scalar) -> serde_json::Value {
    if let Ok(i) = s.as_str().parse::<i64>() {
        return json!(i);
    }
    s.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
        .unwrap_or_else(|| json!(s.as_str()))
}

fn list_to_json(list: &List) -> serde_json::Value {
    let items = list.items.iter().map(value_to_json).collect::<Vec<_>>();
    if list.tag.is_none() && list.count.is_none() {
        return json!(items);
    }
    json!({
        "tag": list.tag,
        "count": list.count,
        "items": items,
    })
}

fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Dict(d) => dict_to_json(d),
        Value::List(list) => list_to_json(list),
        Value::Scalar(s) => scalar_to_json(s),
        Value::Vector(xyz) => json!(xyz.iter().map(scalar_to_json).collect::<Vec<_>>()),
        Value::Dimensions(dims) => {
            json!({ "dimensions": dims.0.iter().map(scalar_to_json).collect::<Vec<_>>() })
        }
        Value::Uniform { uniform, value } => {
            let key = if *uniform { "uniform" } else { "nonuniform" };
            json!({ key: value_to_json(value) })
        }
        Value::Flag => serde_json::Value::Null,
        Value::Str(s) => json!(s),
        Value::NamedDict(name, d) => json!({ name.as_str(): dict_to_json(d) }),
    }
}

fn dict_to_json(dict: &OrderedDict) -> serde_json::Value {
    let map = dict
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

fn to_pretty(value: &serde_json::Value) -> Result<String, FoamError> {
    serde_json::to_string_pretty(value).map_err(|e| FoamError::FileError {
        message: format!("Failed to encode JSON: {}", e),
        path: String::new(),
        hint: None,
        code: Some(320),
    })
}

/// Export a dictionary to pretty JSON, keeping key order.
///
/// Numbers that parse become JSON numbers, everything else keeps its
/// spelling as a string:
/// - vectors → arrays
/// - dimension sets → `{"dimensions": [..]}`
/// - `uniform v` → `{"uniform": v}`
/// - counted or tagged lists → `{"tag", "count", "items"}`
/// - flags → `null`
pub fn export_dict_to_json(dict: &OrderedDict) -> Result<String, FoamError> {
    to_pretty(&dict_to_json(dict))
}

/// Read a FoamFile and export it to JSON. The header, when the file has one,
/// is the leading `FoamFile` object.
///
/// # Examples
/// ```no_run
/// use foamdict::export::export_file_to_json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_file_to_json("case/0/U")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// `PathNotFound` when the file is missing, a codec error when it does not parse.
pub fn export_file_to_json<P: AsRef<Path>>(path: P) -> Result<String, FoamError> {
    let mut file = FoamFile::new(path.as_ref());
    file.read()?;

    let mut top = serde_json::Map::new();
    let header = file
        .header()
        .iter()
        .map(|(k, v)| (k.clone(), json!(v)))
        .collect::<serde_json::Map<_, _>>();
    if !header.is_empty() {
        top.insert("FoamFile".into(), serde_json::Value::Object(header));
    }
    for (k, v) in file.body().iter() {
        top.insert(k.clone(), value_to_json(v));
    }

    to_pretty(&serde_json::Value::Object(top))
}
