#![no_main]

use apib::lexer::{self, Lexer};
use apib::parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lexer::lex(s);

        // Lexemes must be exact source slices and the error token, if any, must be last
        for (i, token) in tokens.iter().enumerate() {
            if token.is_error() {
                assert_eq!(i, tokens.len() - 1);
            } else {
                assert_eq!(token.text, s[token.span.start..token.span.end]);
            }
        }

        let _ = parser::parse(Lexer::new(s));
    }
});
