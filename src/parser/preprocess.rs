use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::*;

// /*----*- C++ -*----*\ ... \*----*/ at the very top of the file.
static BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A\s*(/\*-+\*-.*?-\*-+\*\\.*?\\\*-+\*/)").expect("banner pattern is valid")
});

// Quoted strings are matched first so comment markers inside them survive.
static COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)"(?:[^"\\]|\\.)*"|/\*.*?\*/|//[^\n]*"#).expect("comment pattern is valid")
});

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)FoamFile\s*\{(.*?)\}").expect("header pattern is valid"));

/// The leading OpenFOAM banner, if the file opens with one.
pub fn extract_banner(text: &str) -> Option<String> {
    BANNER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Remove every `/* ... */` and `// ...` comment outside quoted strings.
pub fn strip_comments(text: &str) -> String {
    COMMENT
        .replace_all(text, |caps: &regex::Captures| {
            let m = &caps[0];
            if m.starts_with('"') { m.to_string() } else { String::new() }
        })
        .into_owned()
}

/// Split the `FoamFile { ... }` block out of `text`, returning the header
/// (if present) and the remaining body text.
pub(super) fn extract_header(text: &str) -> Result<(Option<Header>, String), FoamError> {
    let Some(caps) = HEADER.captures(text) else {
        return Ok((None, text.to_string()));
    };
    let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
        return Ok((None, text.to_string()));
    };

    let fields = parse_body(inner.as_str())?;
    let mut entries = IndexMap::new();
    for (key, value) in fields.iter() {
        let text = match value {
            Value::Flag => String::new(),
            other => other.to_string(),
        };
        entries.insert(key.clone(), text);
    }

    let mut rest = String::with_capacity(text.len());
    rest.push_str(&text[..whole.start()]);
    rest.push_str(&text[whole.end()..]);
    Ok((Some(Header::from_entries(entries)), rest))
}
