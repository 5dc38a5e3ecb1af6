//! Edge case tests for micac-lex

use crate::token::{Identifier, Literal, Operator, Separator, TokenValue};
use crate::{lex, lex_with_diagnostics, LexerConfig, Token};
use micac_util::Location;

fn lex_all(source: &str) -> Vec<Token> {
    lex_with_diagnostics(source, &LexerConfig::default()).tokens
}

fn messages(source: &str) -> Vec<String> {
    lex_with_diagnostics(source, &LexerConfig::default())
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert_eq!(lex(""), Ok(Vec::new()));
}

#[test]
fn test_edge_single_char_ident() {
    let t = lex_all("x");
    assert_eq!(t[0].value(), &TokenValue::Identifier(Identifier::new("x")));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("{} = 1;", name));
    assert_eq!(t.len(), 4);
    assert_eq!(t[0].value(), &TokenValue::Identifier(Identifier::new(name)));
}

#[test]
fn test_edge_hex_bounds() {
    let t = lex_all("0x0 0xFF");
    assert_eq!(t[0].value(), &TokenValue::Literal(Literal::Signed(0)));
    assert_eq!(t[1].value(), &TokenValue::Literal(Literal::Signed(255)));
}

#[test]
fn test_edge_number_then_identifier() {
    // `g` ends the numeric span
    let t = lex_all("12g");
    assert_eq!(t.len(), 2);
    assert_eq!(t[1].value(), &TokenValue::Identifier(Identifier::new("g")));
}

#[test]
fn test_edge_number_with_hex_letters() {
    assert_eq!(messages("12ab"), vec!["Invalid integer literal: 12ab"]);
}

#[test]
fn test_edge_unary_minus_is_operator() {
    let t = lex_all("-5");
    assert_eq!(t[0].value(), &TokenValue::Operator(Operator::Minus));
    assert_eq!(t[1].value(), &TokenValue::Literal(Literal::Signed(5)));
}

#[test]
fn test_edge_carriage_return_is_not_newline() {
    let t = lex_all("a\r\nb");
    assert_eq!(t[1].location(), Location::new(2, 1));
    let t = lex_all("a\rb");
    assert_eq!(t[1].location(), Location::new(1, 3));
}

#[test]
fn test_edge_tab_counts_one_column() {
    let t = lex_all("\ta");
    assert_eq!(t[0].location(), Location::new(1, 2));
}

#[test]
fn test_edge_many_blank_lines() {
    let source = format!("{}x", "\n".repeat(1000));
    let t = lex_all(&source);
    assert_eq!(t[0].location(), Location::new(1001, 1));
}

#[test]
fn test_edge_nul_inside_string_is_data() {
    let t = lex_all("\"a\0b\" c");
    assert_eq!(t.len(), 2);
    assert_eq!(
        t[0].value(),
        &TokenValue::Literal(Literal::String("a\0b".to_string()))
    );
}

#[test]
fn test_edge_nul_after_tokens() {
    let config = LexerConfig {
        end_of_program: true,
        ..LexerConfig::default()
    };
    let output = lex_with_diagnostics("a;\0junk #", &config);
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.tokens.len(), 3);
    assert_eq!(output.tokens[2].span().start, 2);
    assert_eq!(
        output.tokens[2].value(),
        &TokenValue::Separator(Separator::EndOfProgram)
    );
}

#[test]
fn test_edge_end_of_program_on_empty_input() {
    let config = LexerConfig {
        end_of_program: true,
        ..LexerConfig::default()
    };
    let output = lex_with_diagnostics("", &config);
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].location(), Location::START);
}

#[test]
fn test_edge_backslash_at_end_of_string() {
    assert_eq!(messages("\"abc\\"), vec!["Unexpected end of string literal"]);
}

#[test]
fn test_edge_short_hex_escape_at_end() {
    assert_eq!(
        messages("\"\\x4"),
        vec![
            "Invalid hex escape sequence: \\x4",
            "Unexpected end of string literal",
        ]
    );
}

#[test]
fn test_edge_pathological_strings_terminate() {
    let source = "\"\\q".repeat(500);
    let output = lex_with_diagnostics(&source, &LexerConfig::default());
    assert!(!output.diagnostics.is_empty());
    assert!(output.tokens.iter().all(|t| t.span().end <= source.len()));
}

#[test]
fn test_edge_unexpected_characters_each_reported() {
    assert_eq!(messages("@@").len(), 2);
}

#[test]
fn test_edge_multiple_errors_keep_order() {
    let diags = lex_with_diagnostics("#\n  $", &LexerConfig::default()).diagnostics;
    assert_eq!(diags[0].span.location, Location::new(1, 1));
    assert_eq!(diags[1].span.location, Location::new(2, 3));
}

#[test]
fn test_edge_only_whitespace_and_nul() {
    assert_eq!(lex(" \t\n\0"), Ok(Vec::new()));
}

// ==================== PROPERTY-BASED TESTS ====================

#[test]
fn test_property_decimal_integers() {
    use proptest::prelude::*;

    proptest!(|(input in "[0-9]{1,18}")| {
        let tokens = lex_all(&input);
        assert_eq!(tokens.len(), 1);
        let expected: i64 = input.parse().unwrap();
        assert_eq!(tokens[0].value(), &TokenValue::Literal(Literal::Signed(expected)));
    });
}

#[test]
fn test_property_hex_integers() {
    use proptest::prelude::*;

    proptest!(|(digits in "[0-9a-fA-F]{1,15}")| {
        let tokens = lex_all(&format!("0x{}", digits));
        assert_eq!(tokens.len(), 1);
        let expected = i64::from_str_radix(&digits, 16).unwrap();
        assert_eq!(tokens[0].value(), &TokenValue::Literal(Literal::Signed(expected)));
    });
}

#[test]
fn test_property_plain_string_literals() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z0-9 ,.;+*()]{0,100}")| {
        let tokens = lex_all(&format!("\"{}\"", input));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value(), &TokenValue::Literal(Literal::String(input.clone())));
    });
}

#[test]
fn test_property_identifiers() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,50}")| {
        let tokens = lex_all(&input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span().len(), input.len());
    });
}

#[test]
fn test_property_lexing_is_deterministic() {
    use proptest::prelude::*;

    proptest!(|(input in "[ -~\n]{0,200}")| {
        let first = lex_with_diagnostics(&input, &LexerConfig::default());
        let second = lex_with_diagnostics(&input, &LexerConfig::default());
        assert_eq!(first, second);
    });
}

#[test]
fn test_property_locations_match_offsets() {
    use proptest::prelude::*;

    proptest!(|(input in "[ -~\n]{0,200}")| {
        let tokens = lex_all(&input);
        let mut previous_end = 0;
        for token in &tokens {
            let span = token.span();
            assert!(span.start >= previous_end);
            assert!(span.end <= input.len());
            previous_end = span.end;

            let before = &input[..span.start];
            let line = before.matches('\n').count() as u32 + 1;
            let line_begin = before.rfind('\n').map_or(0, |i| i + 1);
            let column = (span.start - line_begin) as u32 + 1;
            assert_eq!(token.location(), Location::new(line, column));
        }
    });
}

#[test]
fn test_property_whitespace_is_ignored() {
    use proptest::prelude::*;

    proptest!(|(spaces in 0..100usize)| {
        let whitespace = " \t".repeat(spaces);
        let tokens = lex_all(&format!("{}if{}", whitespace, whitespace));
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_keyword(crate::token::Keyword::If));
    });
}
