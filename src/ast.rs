// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::dict::OrderedDict;

/// A numeric literal kept in the spelling it was read with (`1e-06`, `0.0`, `+7.8E+12`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scalar(pub String);

impl Scalar {
    pub fn new(raw: impl Into<String>) -> Self {
        Scalar(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok()
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar(n.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar(n.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Physical units as exponents of the seven SI base quantities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DimensionSet(pub [Scalar; 7]);

impl DimensionSet {
    pub fn mass(&self) -> &Scalar {
        &self.0[0]
    }

    pub fn length(&self) -> &Scalar {
        &self.0[1]
    }

    pub fn time(&self) -> &Scalar {
        &self.0[2]
    }

    pub fn temperature(&self) -> &Scalar {
        &self.0[3]
    }

    pub fn quantity(&self) -> &Scalar {
        &self.0[4]
    }

    pub fn current(&self) -> &Scalar {
        &self.0[5]
    }

    pub fn luminous_intensity(&self) -> &Scalar {
        &self.0[6]
    }
}

impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join(&self.0))
    }
}

/// A parenthesised list, optionally preceded by a type tag and an element count
/// (`List<scalar> 3(1 2 3)`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct List {
    pub tag: Option<String>,
    pub count: Option<usize>,
    pub items: Vec<Value>,
}

impl List {
    pub fn new(items: Vec<Value>) -> Self {
        List {
            tag: None,
            count: None,
            items,
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{} ", tag)?;
        }
        if let Some(count) = self.count {
            write!(f, "{}", count)?;
        }
        write!(f, "({})", join(&self.items))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Dict(OrderedDict),
    List(List),
    Scalar(Scalar),
    Vector([Scalar; 3]),
    Dimensions(DimensionSet),
    Uniform { uniform: bool, value: Box<Value> },
    /// Valueless key, written as `key;`.
    Flag,
    /// Quoted strings, `$var` references, words and joined token runs, kept verbatim.
    Str(String),
    /// `name { ... }` appearing as a list element.
    NamedDict(String, OrderedDict),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn scalar(raw: impl Into<String>) -> Self {
        Value::Scalar(Scalar::new(raw))
    }

    pub fn vector(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Value::Vector([Scalar::new(x), Scalar::new(y), Scalar::new(z)])
    }

    pub fn uniform(value: Value) -> Self {
        Value::Uniform {
            uniform: true,
            value: Box::new(value),
        }
    }

    pub fn nonuniform(value: Value) -> Self {
        Value::Uniform {
            uniform: false,
            value: Box::new(value),
        }
    }

    pub fn as_dict(&self) -> Option<&OrderedDict> {
        if let Value::Dict(d) = self {
            Some(d)
        } else {
            None
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut OrderedDict> {
        if let Value::Dict(d) = self {
            Some(d)
        } else {
            None
        }
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Value::Flag)
    }
}

impl From<OrderedDict> for Value {
    fn from(d: OrderedDict) -> Self {
        Value::Dict(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

// Inline rendering. Dictionaries only appear inline inside lists; the writer
// lays out dictionary entries itself.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Dict(d) => write_inline_dict(f, None, d),
            Value::NamedDict(name, d) => write_inline_dict(f, Some(name), d),
            Value::List(l) => write!(f, "{}", l),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Vector(v) => write!(f, "({})", join(v)),
            Value::Dimensions(d) => write!(f, "{}", d),
            Value::Uniform { uniform, value } => {
                let prefix = if *uniform { "uniform" } else { "nonuniform" };
                write!(f, "{} {}", prefix, value)
            }
            Value::Flag => Ok(()),
            Value::Str(s) => f.write_str(s),
        }
    }
}

fn write_inline_dict(f: &mut fmt::Formatter<'_>, name: Option<&str>, d: &OrderedDict) -> fmt::Result {
    if let Some(name) = name {
        write!(f, "{} ", name)?;
    }
    f.write_str("{")?;
    for (k, v) in d.iter() {
        match v {
            Value::Flag => write!(f, " {};", k)?,
            Value::Dict(inner) => {
                f.write_str(" ")?;
                write_inline_dict(f, Some(k), inner)?;
            }
            other => write!(f, " {} {};", k, other)?,
        }
    }
    f.write_str(" }")
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}

/// The `FoamFile { ... }` block. Entry order is kept as read; a fresh header
/// is ordered `version`, `format`, `object`, `class`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    entries: IndexMap<String, String>,
}

impl Header {
    pub fn new(object: &str, version: &str, format: &str, class: &str) -> Self {
        let mut entries = IndexMap::new();
        entries.insert("version".to_string(), version.to_string());
        entries.insert("format".to_string(), format.to_string());
        entries.insert("object".to_string(), object.to_string());
        entries.insert("class".to_string(), class.to_string());
        Header { entries }
    }

    pub(crate) fn from_entries(entries: IndexMap<String, String>) -> Self {
        Header { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn version(&self) -> Option<&str> {
        self.get("version")
    }

    pub fn format(&self) -> Option<&str> {
        self.get("format")
    }

    pub fn class(&self) -> Option<&str> {
        self.get("class")
    }

    pub fn object(&self) -> Option<&str> {
        self.get("object")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub(crate) fn to_dict(&self) -> OrderedDict {
        let mut dict = OrderedDict::new();
        for (k, v) in &self.entries {
            let value = if v.is_empty() {
                Value::Flag
            } else {
                Value::Str(v.clone())
            };
            dict.push(k.clone(), value);
        }
        dict
    }
}
