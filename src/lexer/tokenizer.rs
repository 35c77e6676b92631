use super::*;
use super::scanner::{bump, is_delimiter, skip_whitespace};

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, FoamError> {
    skip_whitespace(lexer);

    match lexer.peek {
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some('(') => tokenize_symbol(lexer, Token::LParen),
        Some(')') => tokenize_symbol(lexer, Token::RParen),
        Some('[') => tokenize_symbol(lexer, Token::LBracket),
        Some(']') => tokenize_symbol(lexer, Token::RBracket),
        Some(';') => tokenize_symbol(lexer, Token::Semicolon),
        Some('"') => tokenize_quoted(lexer),
        Some(c) if c.is_control() => tokenize_unexpected_char(lexer, c),
        Some(_) => tokenize_word(lexer),
        None => Ok(Token::Eof),
    }
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Result<Token, FoamError> {
    bump(lexer);
    Ok(token)
}

fn tokenize_quoted(lexer: &mut Lexer) -> Result<Token, FoamError> {
    let (line, column) = (lexer.line, lexer.column);
    let mut content = String::new();
    if let Some(quote) = bump(lexer) {
        content.push(quote);
    }

    loop {
        match bump(lexer) {
            Some('"') => {
                content.push('"');
                return Ok(Token::Quoted(content));
            }
            Some('\\') => {
                // Escapes stay verbatim; only the quote they may protect matters here.
                content.push('\\');
                match bump(lexer) {
                    Some(next) => content.push(next),
                    None => break,
                }
            }
            Some(ch) => content.push(ch),
            None => break,
        }
    }

    Err(FoamError::UnclosedString {
        quote: '"',
        line,
        column,
        hint: Some("String literal not closed".into()),
        code: Some(103),
    })
}

fn tokenize_word(lexer: &mut Lexer) -> Result<Token, FoamError> {
    let mut word = String::new();

    while let Some(ch) = lexer.peek {
        if is_delimiter(ch) {
            break;
        }
        word.push(ch);
        bump(lexer);
    }

    if lexer.peek == Some('(') && opens_function_call(&word) {
        absorb_arguments(lexer, &mut word)?;
    }

    Ok(Token::Word(word))
}

/// `div(phi,U)` style tokens: a word glued to `(` that does not start like a
/// number (so `3(1 2 3)` stays a counted list) and is not a field prefix.
fn opens_function_call(word: &str) -> bool {
    match word.chars().next() {
        Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => false,
        Some(_) => !matches!(word, "uniform" | "nonuniform"),
        None => false,
    }
}

fn absorb_arguments(lexer: &mut Lexer, word: &mut String) -> Result<(), FoamError> {
    let (line, column) = (lexer.line, lexer.column);
    let mut depth = 0usize;

    while let Some(ch) = bump(lexer) {
        word.push(ch);
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    // `grad(U)Final`-style suffixes belong to the same token.
                    while let Some(next) = lexer.peek {
                        if is_delimiter(next) {
                            break;
                        }
                        word.push(next);
                        bump(lexer);
                    }
                    return Ok(());
                }
            }
            _ => {}
        }
    }

    Err(FoamError::UnexpectedEof {
        message: format!("Unbalanced parentheses in '{}'", word),
        line,
        column,
        hint: Some("Close every '(' of a function-style key".into()),
        code: Some(105),
    })
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char) -> Result<Token, FoamError> {
    bump(lexer);
    Err(FoamError::UnexpectedCharacter {
        character: ch,
        line: lexer.line,
        column: lexer.column,
        hint: Some("Unexpected character in input".into()),
        code: Some(104),
    })
}
