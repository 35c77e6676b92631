// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Header, List, Scalar, Value};
use crate::dict::OrderedDict;
use crate::lexer::{Lexer, Token};
use crate::FoamError;

mod document;
mod preprocess;
mod value;

pub use preprocess::{extract_banner, strip_comments};

/// Everything recovered from one file's text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub banner: Option<String>,
    pub header: Option<Header>,
    pub body: OrderedDict,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, FoamError> {
        let mut lexer = Lexer::new(input);
        let peek = Some(lexer.next_token()?);
        Ok(Self { lexer, peek })
    }

    pub(crate) fn bump(&mut self) -> Result<Token, FoamError> {
        let curr = self.peek.take().ok_or(FoamError::UnexpectedEof {
            message: "Unexpected end of input".into(),
            line: self.lexer.line(),
            column: self.lexer.column(),
            hint: None,
            code: Some(201),
        })?;
        self.peek = Some(self.lexer.next_token()?);
        Ok(curr)
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.peek.as_ref()
    }

    pub(crate) fn expect(&mut self, expected: Token) -> Result<Token, FoamError> {
        let token = self.bump()?;
        if token != expected {
            return Err(FoamError::SyntaxError {
                message: format!("Expected {:?}, got {:?}", expected, token),
                line: self.lexer.line(),
                column: self.lexer.column(),
                hint: Some("Check your delimiters".into()),
                code: Some(202),
            });
        }
        Ok(token)
    }

    /// Consume a `;` if one is next.
    pub(crate) fn skip_semicolon(&mut self) -> Result<(), FoamError> {
        if let Some(Token::Semicolon) = self.peek() {
            self.bump()?;
        }
        Ok(())
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    pub(crate) fn column(&self) -> usize {
        self.lexer.column()
    }

    /// Parse the whole input as a sequence of dictionary entries.
    pub fn parse_entries(&mut self) -> Result<OrderedDict, FoamError> {
        document::parse_entries(self, Token::Eof)
    }
}

/// Parse comment-free body text (no `FoamFile` header) into a dictionary.
pub fn parse_body(text: &str) -> Result<OrderedDict, FoamError> {
    let mut parser = Parser::new(text)?;
    parser.parse_entries()
}

/// Full read pipeline: keep the banner, drop comments, lift the header out,
/// then parse what remains.
pub fn parse_file_text(text: &str) -> Result<ParsedFile, FoamError> {
    let banner = extract_banner(text);
    let stripped = strip_comments(text);
    let (header, rest) = preprocess::extract_header(&stripped)?;
    let body = parse_body(&rest)?;

    tracing::debug!(
        entries = body.len(),
        has_banner = banner.is_some(),
        has_header = header.is_some(),
        "parsed foam text"
    );

    Ok(ParsedFile { banner, header, body })
}
