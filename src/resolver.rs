// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Value;
use crate::dict::{KeyPath, OrderedDict};

/// Where a `$` reference starts its lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// `$name`: the scope, then every enclosing dictionary up to the root.
    Search,
    /// `$:a.b`: the root only.
    Root,
    /// `$.name`, `$..name`: the scope, or that many levels above it, only.
    Up(usize),
}

/// A parsed `$` reference token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub anchor: Anchor,
    pub path: KeyPath,
}

fn is_name_char(ch: char) -> bool {
    !(ch.is_whitespace() || matches!(ch, '.' | '{' | '}' | ';' | '$'))
}

/// Parse `$name`, `${name}`, `$a.b`, `$:a.b` and `$..a`. `None` for anything
/// that is not a reference.
pub fn parse_reference(token: &str) -> Option<Reference> {
    let rest = token.strip_prefix('$')?;
    let body = match rest.strip_prefix('{') {
        Some(inner) => inner.strip_suffix('}')?,
        None => rest,
    };

    let mut chars = body.chars().peekable();
    let anchor = match chars.peek() {
        Some(':') => {
            chars.next();
            Anchor::Root
        }
        Some('.') => {
            let mut dots = 0;
            while chars.peek() == Some(&'.') {
                dots += 1;
                chars.next();
            }
            Anchor::Up(dots - 1)
        }
        _ => Anchor::Search,
    };

    let mut path = Vec::new();
    loop {
        let mut seg = String::new();
        while let Some(&ch) = chars.peek() {
            if is_name_char(ch) {
                seg.push(ch);
                chars.next();
            } else {
                break;
            }
        }
        if seg.is_empty() {
            return None;
        }
        path.push(seg);

        match chars.next() {
            Some('.') => continue,
            None => break,
            Some(_) => return None,
        }
    }

    Some(Reference { anchor, path })
}

fn lookup<'a>(dict: &'a OrderedDict, path: &[String]) -> Option<&'a Value> {
    dict.get(path).ok()
}

/// Look up the value a `$` token refers to, starting from the dictionary at
/// `scope`. Returns `None` when the token is not a reference or names nothing.
///
/// ```
/// use foamdict::{parser, resolver};
///
/// let body = parser::parse_body("nu 1e-05;\ninlet { value $nu; }\n").unwrap();
/// let value = resolver::resolve_reference(&body, &["inlet"], "$nu").unwrap();
/// assert_eq!(value.to_string(), "1e-05");
/// ```
pub fn resolve_reference<'a, S: AsRef<str>>(root: &'a OrderedDict, scope: &[S], token: &str) -> Option<&'a Value> {
    let reference = parse_reference(token)?;
    let scope: Vec<&str> = scope.iter().map(|s| s.as_ref()).collect();

    let found = match reference.anchor {
        Anchor::Root => lookup(root, &reference.path),
        Anchor::Up(levels) => {
            let depth = scope.len().checked_sub(levels)?;
            let dict = root.get_dict(&scope[..depth]).ok()?;
            lookup(dict, &reference.path)
        }
        Anchor::Search => (0..=scope.len())
            .rev()
            .filter_map(|depth| root.get_dict(&scope[..depth]).ok())
            .find_map(|dict| lookup(dict, &reference.path)),
    };

    if found.is_none() {
        tracing::debug!(token, scope = %scope.join("/"), "unresolved reference");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_body;

    const BODY: &str = "\
nu 1e-05;
U 10;
inlet
{
    U 1;
    value uniform $U;
    nested { probe $U; }
}
outlet { value $:inlet.U; }
";

    fn body() -> OrderedDict {
        parse_body(BODY).unwrap()
    }

    #[test]
    fn test_parse_plain_and_braced() {
        let plain = parse_reference("$nu").unwrap();
        assert_eq!(plain.anchor, Anchor::Search);
        assert_eq!(plain.path, vec!["nu"]);

        let braced = parse_reference("${inlet.U}").unwrap();
        assert_eq!(braced.path, vec!["inlet", "U"]);
    }

    #[test]
    fn test_parse_anchors() {
        assert_eq!(parse_reference("$:a.b").unwrap().anchor, Anchor::Root);
        assert_eq!(parse_reference("$.a").unwrap().anchor, Anchor::Up(0));
        assert_eq!(parse_reference("$..a").unwrap().anchor, Anchor::Up(1));
    }

    #[test]
    fn test_parse_rejects_non_references() {
        assert!(parse_reference("nu").is_none());
        assert!(parse_reference("$").is_none());
        assert!(parse_reference("$a.").is_none());
        assert!(parse_reference("${a").is_none());
        assert!(parse_reference("$a b").is_none());
    }

    #[test]
    fn test_search_prefers_nearest_scope() {
        let root = body();
        assert_eq!(resolve_reference(&root, &["inlet"], "$U"), Some(&Value::scalar("1")));
        assert_eq!(resolve_reference(&root, &["inlet", "nested"], "$U"), Some(&Value::scalar("1")));
        assert_eq!(resolve_reference(&root, &["outlet"], "$U"), Some(&Value::scalar("10")));
    }

    #[test]
    fn test_search_walks_up_to_root() {
        let root = body();
        assert_eq!(resolve_reference(&root, &["inlet", "nested"], "$nu"), Some(&Value::scalar("1e-05")));
    }

    #[test]
    fn test_root_anchor_and_dotted_path() {
        let root = body();
        assert_eq!(resolve_reference(&root, &["outlet"], "$:inlet.U"), Some(&Value::scalar("1")));
        assert_eq!(resolve_reference(&root, &["outlet"], "$inlet.U"), Some(&Value::scalar("1")));
    }

    #[test]
    fn test_relative_anchor_does_not_search() {
        let root = body();
        assert_eq!(resolve_reference(&root, &["outlet"], "$.U"), None);
        assert_eq!(resolve_reference(&root, &["inlet", "nested"], "$..U"), Some(&Value::scalar("1")));
        assert_eq!(resolve_reference(&root, &["inlet"], "$...U"), None);
    }

    #[test]
    fn test_unresolved() {
        let root = body();
        assert_eq!(resolve_reference(&root, &["inlet"], "$missing"), None);
        assert_eq!(resolve_reference(&root, &["nowhere"], "$nu"), Some(&Value::scalar("1e-05")));
    }
}
