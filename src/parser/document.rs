use super::*;

/// Entries up to `terminator` (`}` for nested dictionaries, EOF at top level).
pub(super) fn parse_entries(parser: &mut Parser, terminator: Token) -> Result<OrderedDict, FoamError> {
    let mut dict = OrderedDict::new();

    loop {
        match parser.peek() {
            Some(Token::Eof) | None => {
                if terminator == Token::Eof {
                    break;
                }
                return Err(FoamError::UnexpectedEof {
                    message: "Dictionary is missing its closing '}'".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Check that every '{' has a matching '}'".into()),
                    code: Some(203),
                });
            }
            Some(Token::RBrace) => {
                if terminator == Token::RBrace {
                    parser.bump()?;
                    break;
                }
                return Err(FoamError::InvalidToken {
                    token: "}".into(),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Unmatched '}'".into()),
                    code: Some(204),
                });
            }
            Some(Token::Semicolon) => {
                parser.bump()?;
            }
            Some(Token::Word(_)) | Some(Token::Quoted(_)) => {
                let (key, value) = parse_entry(parser)?;
                if dict.entry(&key).is_some() {
                    tracing::warn!(key = %key, "duplicate key in input, later value wins");
                }
                dict.push(key, value);
            }
            Some(tok) => {
                return Err(FoamError::InvalidToken {
                    token: format!("{:?}", tok),
                    line: parser.line(),
                    column: parser.column(),
                    hint: Some("Expected a dictionary key".into()),
                    code: Some(205),
                });
            }
        }
    }

    Ok(dict)
}

fn parse_entry(parser: &mut Parser) -> Result<(String, Value), FoamError> {
    let key = match parser.bump()? {
        Token::Word(k) | Token::Quoted(k) => k,
        other => {
            return Err(FoamError::SyntaxError {
                message: format!("Expected key, got {:?}", other),
                line: parser.line(),
                column: parser.column(),
                hint: None,
                code: Some(206),
            });
        }
    };

    let value = match parser.peek() {
        Some(Token::Semicolon) => {
            parser.bump()?;
            Value::Flag
        }
        Some(Token::RBrace) | Some(Token::Eof) | None => Value::Flag,
        Some(Token::LBrace) => {
            parser.bump()?;
            let dict = parse_entries(parser, Token::RBrace)?;
            parser.skip_semicolon()?;
            Value::Dict(dict)
        }
        _ if key.starts_with('#') => {
            // Directives take one item and need no `;`.
            let value = value::parse_item(parser)?;
            parser.skip_semicolon()?;
            value
        }
        _ => value::parse_value(parser)?,
    };

    Ok((key, value))
}
