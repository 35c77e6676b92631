#[cfg(test)]
use super::*;

fn tokens(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token().expect("lexing should succeed");
        if tok == Token::Eof {
            break;
        }
        out.push(tok);
    }
    out
}

fn word(s: &str) -> Token {
    Token::Word(s.into())
}

#[test]
fn test_dictionary_entry_tokens() {
    let input = "U\n{\n  dimensions [0 1 -1 0 0 0 0];\n  internalField uniform (1 0 0);\n}";
    let expected = vec![
        word("U"),
        Token::LBrace,
        word("dimensions"),
        Token::LBracket,
        word("0"),
        word("1"),
        word("-1"),
        word("0"),
        word("0"),
        word("0"),
        word("0"),
        Token::RBracket,
        Token::Semicolon,
        word("internalField"),
        word("uniform"),
        Token::LParen,
        word("1"),
        word("0"),
        word("0"),
        Token::RParen,
        Token::Semicolon,
        Token::RBrace,
    ];
    assert_eq!(tokens(input), expected);
}

#[test]
fn test_scientific_literals_stay_verbatim() {
    assert_eq!(
        tokens("1.23e-4 +7.8E+12 9e6"),
        vec![word("1.23e-4"), word("+7.8E+12"), word("9e6")]
    );
}

#[test]
fn test_function_call_key_is_one_token() {
    assert_eq!(
        tokens("div(phi,U) Gauss linearUpwind grad(U);"),
        vec![
            word("div(phi,U)"),
            word("Gauss"),
            word("linearUpwind"),
            word("grad(U)"),
            Token::Semicolon
        ]
    );
    assert_eq!(
        tokens("div((nuEff*dev2(T(grad(U))))) Gauss linear;")[0],
        word("div((nuEff*dev2(T(grad(U)))))")
    );
}

#[test]
fn test_counted_list_is_not_a_function() {
    assert_eq!(
        tokens("3(1 2 3)"),
        vec![word("3"), Token::LParen, word("1"), word("2"), word("3"), Token::RParen]
    );
    assert_eq!(tokens("uniform(0 0 0)")[..2], [word("uniform"), Token::LParen]);
}

#[test]
fn test_quoted_strings_keep_quotes() {
    assert_eq!(
        tokens(r#""(U|k|epsilon).*" "a \"b\"""#),
        vec![
            Token::Quoted(r#""(U|k|epsilon).*""#.into()),
            Token::Quoted(r#""a \"b\"""#.into())
        ]
    );
}

#[test]
fn test_special_word_characters() {
    assert_eq!(
        tokens("#include $internalField List<scalar> a:b|c,d"),
        vec![
            word("#include"),
            word("$internalField"),
            word("List<scalar>"),
            word("a:b|c,d")
        ]
    );
}

#[test]
fn test_unclosed_string_error() {
    let mut lexer = Lexer::new("value \"never closed;");
    assert_eq!(lexer.next_token(), Ok(word("value")));
    assert!(matches!(
        lexer.next_token(),
        Err(FoamError::UnclosedString { quote: '"', line: 1, .. })
    ));
}

#[test]
fn test_unbalanced_function_call_error() {
    let mut lexer = Lexer::new("div(phi,U Gauss linear;");
    assert!(matches!(lexer.next_token(), Err(FoamError::UnexpectedEof { .. })));
}

#[test]
fn test_line_tracking() {
    let mut lexer = Lexer::new("a\nb\n  c");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.line(), 3);
    assert_eq!(lexer.column(), 3);
}
