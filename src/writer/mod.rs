// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Header, List, Value};
use crate::dict::OrderedDict;
use crate::utils::{is_directive, ljust};

/// Banner written when a file has none of its own.
pub const DEFAULT_BANNER: &str = concat!(
    "/*--------------------------------*- C++ -*----------------------------------*\\\n",
    "  =========                   |\n",
    "  \\\\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox\n",
    "   \\\\    /   O peration     | Website:  https://openfoam.org\n",
    "    \\\\  /    A nd           | Version:  6\n",
    "     \\\\/     M anipulation  |\n",
    "\\*---------------------------------------------------------------------------*/",
);

/// Separates the header block from the body.
pub const SPACER: &str = "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //";

/// Closes every file.
pub const FOOTER: &str = "// ************************************************************************* //";

/// Pretty-printer for dictionaries and whole files.
///
/// Keys at one level are padded to the longest key at that level plus one
/// space, so values line up in a column. Nesting is indented with `indent`
/// once per level.
#[derive(Debug, Clone)]
pub struct Writer {
    indent: String,
}

impl Default for Writer {
    fn default() -> Self {
        Writer::new("\t")
    }
}

impl Writer {
    pub fn new(indent: impl Into<String>) -> Self {
        Writer { indent: indent.into() }
    }

    fn pad(&self, level: usize) -> String {
        self.indent.repeat(level)
    }

    /// Lines for every entry of `dict`, indented to `level`.
    pub fn dict_lines(&self, dict: &OrderedDict, level: usize) -> Vec<String> {
        let mut lines = Vec::new();
        if dict.is_empty() {
            return lines;
        }

        let width = dict.level_keys().map(|k| k.chars().count()).max().unwrap_or(0) + 1;
        let ind = self.pad(level);

        for (key, value) in dict.iter() {
            match value {
                Value::Dict(inner) => {
                    lines.push(format!("{}{}", ind, key));
                    lines.push(format!("{}{{", ind));
                    lines.extend(self.dict_lines(inner, level + 1));
                    lines.push(format!("{}}}", ind));
                }
                Value::List(list) => {
                    lines.push(format!("{}{}", ind, key));
                    lines.extend(self.list_lines(list, level));
                }
                _ if is_directive(key) => {
                    if value.is_flag() {
                        lines.push(format!("{}{};", ind, key));
                    } else {
                        lines.push(format!("{}{}{}", ind, ljust(key, width), value));
                    }
                }
                Value::Flag => lines.push(format!("{}{};", ind, key)),
                Value::Str(s) if s.is_empty() => lines.push(format!("{}{};", ind, key)),
                other => lines.push(format!("{}{}{};", ind, ljust(key, width), other)),
            }
        }
        lines
    }

    // Tag and count sit on their own lines before the opening paren.
    fn list_lines(&self, list: &List, level: usize) -> Vec<String> {
        let ind = self.pad(level);
        let mut lines = Vec::new();
        if let Some(tag) = &list.tag {
            lines.push(format!("{}{}", ind, tag));
        }
        if let Some(count) = list.count {
            lines.push(format!("{}{}", ind, count));
        }
        lines.push(format!("{}(", ind));
        lines.extend(self.element_lines(&list.items, level + 1));
        lines.push(format!("{});", ind));
        lines
    }

    fn element_lines(&self, items: &[Value], level: usize) -> Vec<String> {
        let ind = self.pad(level);
        let mut lines = Vec::new();
        for item in items {
            match item {
                Value::Dict(inner) => {
                    lines.push(format!("{}{{", ind));
                    lines.extend(self.dict_lines(inner, level + 1));
                    lines.push(format!("{}}}", ind));
                }
                Value::NamedDict(name, inner) => {
                    lines.push(format!("{}{}", ind, name));
                    lines.push(format!("{}{{", ind));
                    lines.extend(self.dict_lines(inner, level + 1));
                    lines.push(format!("{}}}", ind));
                }
                other => lines.push(format!("{}{}", ind, other)),
            }
        }
        lines
    }

    /// Body text of `dict` at the top level, one entry per line.
    pub fn render_body(&self, dict: &OrderedDict) -> String {
        let lines = self.dict_lines(dict, 0);
        tracing::debug!(entries = dict.len(), lines = lines.len(), "serialized foam dictionary");
        lines.join("\n")
    }

    /// Full file text: banner, `FoamFile` header, spacer, body, footer.
    pub fn render_file(&self, banner: Option<&str>, header: &Header, body: &OrderedDict) -> String {
        let header_block = OrderedDict::new().with("FoamFile", header.to_dict());

        let mut lines = vec![format!("{}\n", banner.unwrap_or(DEFAULT_BANNER))];
        lines.extend(self.dict_lines(&header_block, 0));
        lines.push(format!("\n{}\n", SPACER));
        lines.extend(self.dict_lines(body, 0));
        lines.push(format!("\n{}\n", FOOTER));

        tracing::debug!(
            object = header.object().unwrap_or_default(),
            entries = body.len(),
            "rendered foam file"
        );
        lines.join("\n")
    }
}

/// Serialize `dict` with tab indentation.
pub fn to_foam(dict: &OrderedDict) -> String {
    Writer::default().render_body(dict)
}

#[cfg(test)]
mod tests;
