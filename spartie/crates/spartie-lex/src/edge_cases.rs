//! Edge case tests for spartie-lex

#[cfg(test)]
mod tests {
    use crate::{scan, ScanError, Scanner, Token, TokenType, KEYWORDS};
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenType> {
        scan(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        scan(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        assert!(scan("  \n\t \r\n ").unwrap().is_empty());
    }

    #[test]
    fn test_edge_comments_only() {
        assert!(scan("// one\n// two\n//").unwrap().is_empty());
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        assert_eq!(kinds("x // trailing"), [TokenType::Identifier]);
    }

    #[test]
    fn test_edge_divide_vs_comment() {
        assert_eq!(
            kinds("a / b // c / d"),
            [TokenType::Identifier, TokenType::Divide, TokenType::Identifier]
        );
    }

    #[test]
    fn test_edge_adjacent_operators() {
        assert_eq!(
            kinds("<=>==<"),
            [
                TokenType::LessEqual,
                TokenType::GreaterEqual,
                TokenType::Assign,
                TokenType::LessThan,
            ]
        );
    }

    #[test]
    fn test_edge_triple_equals() {
        assert_eq!(texts("==="), ["==", "="]);
    }

    #[test]
    fn test_edge_operator_at_end_of_input() {
        assert_eq!(kinds("x <"), [TokenType::Identifier, TokenType::LessThan]);
        assert_eq!(kinds("x ="), [TokenType::Identifier, TokenType::Assign]);
    }

    #[test]
    fn test_edge_no_space_needed() {
        assert_eq!(texts("x=1;y=x*2"), ["x", "=", "1", ";", "y", "=", "x", "*", "2"]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("12abc"), [TokenType::Number, TokenType::Identifier]);
    }

    #[test]
    fn test_edge_single_decimal_forms() {
        assert_eq!(texts("0.5 5. 10"), ["0.5", "5.", "10"]);
    }

    #[test]
    fn test_edge_leading_dot_is_not_a_number() {
        let err = scan(".5").unwrap_err();
        assert!(matches!(err, ScanError::UnexpectedCharacter { character: '.', .. }));
    }

    #[test]
    fn test_edge_too_many_decimals_reports_line() {
        let err = scan("var a = 1;\nvar b = 1.2.3;").unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(err.position(), 19);
    }

    #[test]
    fn test_edge_string_with_comment_marker() {
        assert_eq!(texts("\"// not a comment\""), ["// not a comment"]);
    }

    #[test]
    fn test_edge_string_line_is_opening_line() {
        let tokens = scan("\"a\nb\" c").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_edge_unicode_inside_string_and_comment() {
        assert_eq!(texts("\"héllo ✓\" // ünïcode\nx"), ["héllo ✓", "x"]);
    }

    #[test]
    fn test_edge_unexpected_characters() {
        for source in ["#", "!", "&", "[", ",", "_x", "%"] {
            let err = scan(source).unwrap_err();
            assert!(
                matches!(err, ScanError::UnexpectedCharacter { .. }),
                "expected error for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_edge_first_error_wins() {
        let err = scan("# \"open").unwrap_err();
        assert!(matches!(err, ScanError::UnexpectedCharacter { .. }));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = scan(&format!("var {} = 1;", name)).unwrap();
        assert_eq!(tokens[1].text, name);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("Var var"), [TokenType::Identifier, TokenType::Var]);
    }

    #[test]
    fn test_edge_every_keyword() {
        for (word, kind) in KEYWORDS {
            assert_eq!(kinds(word), [kind]);
        }
    }

    #[test]
    fn test_edge_crlf_counts_once() {
        let tokens = scan("a\r\nb\r\nc").unwrap();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 2, 3]);
    }

    // ==================== PROPERTIES ====================

    /// Whitespace and line comments only.
    fn trivia() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just(" ".to_string()),
                Just("\t".to_string()),
                Just("\r".to_string()),
                Just("\n".to_string()),
                "//[ -~]{0,20}\n",
            ],
            0..20,
        )
        .prop_map(|parts| parts.concat())
    }

    /// Lexemes that always scan cleanly on their own.
    fn lexeme() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z][a-zA-Z0-9]{0,8}",
            "[0-9]{1,5}(\\.[0-9]{0,3})?",
            "\"[^\"]{0,10}\"",
            prop::sample::select(vec![
                "+", "-", "*", "/", ";", "(", ")", "{", "}", "|", "<", "<=", ">", ">=", "=",
                "==",
            ])
            .prop_map(str::to_string),
        ]
    }

    /// Valid programs: lexemes separated by at least one whitespace char.
    fn program() -> impl Strategy<Value = String> {
        prop::collection::vec(
            (lexeme(), prop::sample::select(vec![" ", "\n", "\t", " \n "])),
            0..30,
        )
        .prop_map(|parts| {
            parts
                .into_iter()
                .map(|(lexeme, sep)| format!("{}{}", lexeme, sep))
                .collect::<String>()
        })
    }

    fn shift_lines(tokens: Vec<Token>, by: u32) -> Vec<(TokenType, String, u32)> {
        tokens
            .into_iter()
            .map(|t| (t.kind, t.text, t.line + by))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_trivia_scans_to_nothing(source in trivia()) {
            prop_assert!(scan(&source).unwrap().is_empty());
        }

        #[test]
        fn prop_every_byte_accounted_for(source in program()) {
            let mut scanner = Scanner::new(&source);
            let mut expected_start = 0;
            while let Some(token) = scanner.next_token() {
                let token = token.unwrap();
                prop_assert_eq!(token.span.start, expected_start);
                expected_start = token.span.end;
            }
            prop_assert_eq!(expected_start, source.len());
        }

        #[test]
        fn prop_lines_match_preceding_newlines(source in program()) {
            let tokens = scan(&source).unwrap();
            let mut previous = 1;
            for token in &tokens {
                let newlines = source[..token.span.start].matches('\n').count() as u32;
                prop_assert_eq!(token.line, newlines + 1);
                prop_assert!(token.line >= previous);
                previous = token.line;
            }
        }

        #[test]
        fn prop_never_emits_ignore(source in program()) {
            let tokens = scan(&source).unwrap();
            prop_assert!(tokens.iter().all(|t| t.kind != TokenType::Ignore));
            prop_assert!(tokens.iter().all(|t| t.kind != TokenType::Undefined));
        }

        #[test]
        fn prop_identifier_shaped_words(word in "[a-zA-Z][a-zA-Z0-9]{0,10}") {
            let tokens = scan(&word).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            let expected = KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == word)
                .map(|&(_, kind)| kind)
                .unwrap_or(TokenType::Identifier);
            prop_assert_eq!(tokens[0].kind, expected);
        }

        #[test]
        fn prop_concatenation(first in program(), second in program()) {
            let joined = format!("{}\n{}", first, second);
            let first_lines = first.matches('\n').count() as u32 + 1;

            let mut expected = shift_lines(scan(&first).unwrap(), 0);
            expected.extend(shift_lines(scan(&second).unwrap(), first_lines));

            prop_assert_eq!(shift_lines(scan(&joined).unwrap(), 0), expected);
        }

        #[test]
        fn prop_numbers_with_two_dots_fail(a in "[0-9]{1,3}", b in "[0-9]{0,3}", c in "[0-9]{0,3}") {
            let source = format!("{}.{}.{}", a, b, c);
            let is_too_many_decimals = matches!(scan(&source), Err(ScanError::TooManyDecimals { .. }));
            prop_assert!(is_too_many_decimals);
        }
    }
}
