use super::*;
use crate::ast::DimensionSet;
use crate::utils::{is_integer_literal, is_numeric_literal, is_type_tag};

/// The value part of an ordinary entry: a run of items ending at `;`.
///
/// A single item keeps its structure; a longer run (`nu [0 2 -1 0 0 0 0] 1e-06`)
/// collapses to one string of the items joined by spaces.
pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, FoamError> {
    let mut items = Vec::new();

    loop {
        match parser.peek() {
            Some(Token::Semicolon) => {
                parser.bump()?;
                break;
            }
            Some(Token::Word(_)) | Some(Token::Quoted(_)) | Some(Token::LBracket) => {
                items.push(parse_item(parser)?);
            }
            Some(Token::LParen) => {
                let list = parse_list(parser)?;
                push_list(&mut items, list);
            }
            Some(tok) => {
                return Err(FoamError::SyntaxError {
                    message: format!("Expected ';' after value, got {:?}", tok),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Terminate the entry with ';'".into()),
                    code: Some(207),
                });
            }
            None => {
                return Err(FoamError::UnexpectedEof {
                    message: "Value is missing its ';'".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: None,
                    code: Some(208),
                });
            }
        }
    }

    let mut items = apply_uniform(items);
    match items.len() {
        0 => Ok(Value::Flag),
        1 => Ok(items.remove(0)),
        _ => Ok(Value::Str(
            items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" "),
        )),
    }
}

/// One syntactic item: a word, a quoted string, a dimension set or a list.
pub(super) fn parse_item(parser: &mut Parser) -> Result<Value, FoamError> {
    match parser.bump()? {
        Token::Word(w) => Ok(classify_word(w)),
        Token::Quoted(q) => Ok(Value::Str(q)),
        Token::LBracket => parse_dimensions(parser),
        Token::LParen => {
            let list = parse_list_body(parser)?;
            Ok(vector_or_list(list))
        }
        other => Err(FoamError::InvalidToken {
            token: format!("{:?}", other),
            line: parser.line(),
            column: parser.column(),
            hint: Some("Unexpected token in value position".into()),
            code: Some(209),
        }),
    }
}

fn classify_word(w: String) -> Value {
    if is_numeric_literal(&w) {
        Value::Scalar(Scalar(w))
    } else {
        Value::Str(w)
    }
}

fn parse_list(parser: &mut Parser) -> Result<List, FoamError> {
    parser.expect(Token::LParen)?;
    parse_list_body(parser)
}

/// Elements up to the closing `)`; the `(` is already consumed.
fn parse_list_body(parser: &mut Parser) -> Result<List, FoamError> {
    let mut items = Vec::new();

    loop {
        match parser.peek() {
            Some(Token::RParen) => {
                parser.bump()?;
                break;
            }
            Some(Token::LBrace) => {
                parser.bump()?;
                let dict = super::document::parse_entries(parser, Token::RBrace)?;
                // `name { ... }` inside a list.
                match items.pop() {
                    Some(Value::Str(name)) => items.push(Value::NamedDict(name, dict)),
                    Some(other) => {
                        items.push(other);
                        items.push(Value::Dict(dict));
                    }
                    None => items.push(Value::Dict(dict)),
                }
            }
            Some(Token::LParen) => {
                let list = parse_list(parser)?;
                push_list(&mut items, list);
            }
            Some(Token::Word(_)) | Some(Token::Quoted(_)) | Some(Token::LBracket) => {
                items.push(parse_item(parser)?);
            }
            Some(Token::Eof) | None => {
                return Err(FoamError::UnexpectedEof {
                    message: "List is missing its closing ')'".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Check that every '(' has a matching ')'".into()),
                    code: Some(210),
                });
            }
            Some(tok) => {
                return Err(FoamError::InvalidToken {
                    token: format!("{:?}", tok),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Unexpected token inside list".into()),
                    code: Some(211),
                });
            }
        }
    }

    Ok(List::new(items))
}

/// Fold a preceding count (and type tag) into `list`, then push it. An
/// integer only counts when it equals the list's length, so `arc 0 1 (..)`
/// keeps its vertex labels.
fn push_list(items: &mut Vec<Value>, mut list: List) {
    if let Some(Value::Scalar(s)) = items.last() {
        if is_integer_literal(s.as_str()) && s.as_str().parse::<usize>().ok() == Some(list.items.len()) {
            list.count = Some(list.items.len());
            items.pop();
        }
    }
    if list.count.is_some() {
        if let Some(Value::Str(tag)) = items.last() {
            if is_type_tag(tag) {
                list.tag = Some(tag.clone());
                items.pop();
            }
        }
    }
    items.push(vector_or_list(list));
}

fn vector_or_list(list: List) -> Value {
    if list.tag.is_none() && list.count.is_none() {
        if let [Value::Scalar(x), Value::Scalar(y), Value::Scalar(z)] = list.items.as_slice() {
            return Value::Vector([x.clone(), y.clone(), z.clone()]);
        }
    }
    Value::List(list)
}

/// `[` already consumed. Seven numbers make a dimension set; any other
/// bracketed content is kept verbatim.
fn parse_dimensions(parser: &mut Parser) -> Result<Value, FoamError> {
    let mut parts = Vec::new();
    loop {
        match parser.bump()? {
            Token::RBracket => break,
            Token::Word(w) => parts.push(w),
            Token::Eof => {
                return Err(FoamError::UnexpectedEof {
                    message: "Dimension set is missing its closing ']'".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: None,
                    code: Some(212),
                });
            }
            other => {
                return Err(FoamError::InvalidToken {
                    token: format!("{:?}", other),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Dimension sets hold plain numbers".into()),
                    code: Some(213),
                });
            }
        }
    }

    if parts.iter().all(|p| is_numeric_literal(p)) {
        let scalars: Vec<Scalar> = parts.iter().cloned().map(Scalar).collect();
        if let Ok(dims) = <[Scalar; 7]>::try_from(scalars) {
            return Ok(Value::Dimensions(DimensionSet(dims)));
        }
    }
    Ok(Value::Str(format!("[{}]", parts.join(" "))))
}

/// `uniform` / `nonuniform` followed by an item wraps that item.
fn apply_uniform(items: Vec<Value>) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    let mut iter = items.into_iter().peekable();
    while let Some(item) = iter.next() {
        let flag = match &item {
            Value::Str(s) if s == "uniform" => Some(true),
            Value::Str(s) if s == "nonuniform" => Some(false),
            _ => None,
        };
        match (flag, iter.peek()) {
            (Some(uniform), Some(_)) => {
                if let Some(inner) = iter.next() {
                    out.push(Value::Uniform {
                        uniform,
                        value: Box::new(inner),
                    });
                }
            }
            _ => out.push(item),
        }
    }
    out
}
