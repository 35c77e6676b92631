// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;
use crate::FoamError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    /// Bare word: numbers, identifiers, `$var`, `#include`, `div(phi,U)`.
    Word(String),
    /// Quoted string including its quotes, kept verbatim.
    Quoted(String),

    // --- structure ---
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,

    Eof,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn next_token(&mut self) -> Result<Token, FoamError> {
        tokenizer::next_token(self)
    }
}

#[cfg(test)]
mod tests;
