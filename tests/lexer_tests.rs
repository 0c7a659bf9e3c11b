// tests/lexer_tests.rs

use varlet::syntax::{tokenize, Token, TokenKind};
use varlet::ErrorType;

// ---
// Whitespace and empty input
// ---

#[test]
fn test_empty_input_yields_no_tokens() {
    assert_eq!(tokenize("").unwrap(), vec![]);
}

#[test]
fn test_whitespace_only_input_yields_no_tokens() {
    for source in [" ", "   ", "\n", "\t\t", " \n \r\n \t "] {
        assert_eq!(tokenize(source).unwrap(), vec![], "{source:?}");
    }
}

// ---
// Token classification
// ---

#[test]
fn test_declaration_tokenizes_in_source_order() {
    let tokens = tokenize("var x = 1").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::keyword("var"),
            Token::identifier("x"),
            Token::punctuator("="),
            Token::numeric("1"),
        ]
    );
}

#[test]
fn test_all_declaration_keywords_classify_as_keywords() {
    for word in ["var", "let", "const"] {
        let tokens = tokenize(word).unwrap();
        assert_eq!(tokens, vec![Token::keyword(word)], "{word}");
    }
}

#[test]
fn test_reserved_but_unparsed_keywords_still_classify() {
    // The lexer recognizes these; the parser never implements their
    // statement forms.
    for word in ["function", "return", "if", "for"] {
        let tokens = tokenize(word).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword, "{word}");
    }
}

#[test]
fn test_digit_run_accumulates_into_one_token() {
    let tokens = tokenize("12345").unwrap();
    assert_eq!(tokens, vec![Token::numeric("12345")]);
}

#[test]
fn test_punctuator_breaks_identifier_run() {
    // The punctuator check precedes the letter check, so symbols are never
    // absorbed into a word.
    let tokens = tokenize("a+b").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::identifier("a"),
            Token::punctuator("+"),
            Token::identifier("b"),
        ]
    );
}

#[test]
fn test_arrow_marker_is_a_single_two_character_token() {
    let tokens = tokenize("=>").unwrap();
    assert_eq!(tokens, vec![Token::punctuator("=>")]);
}

// ---
// Failure mode
// ---

#[test]
fn test_unknown_character_fails_the_scan() {
    let err = tokenize("#").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Lex);
    assert!(err.to_string().contains('#'));
}

#[test]
fn test_unknown_character_mid_input_names_the_character() {
    let err = tokenize("var x = §5").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Lex);
    assert!(err.to_string().contains('§'));
}
