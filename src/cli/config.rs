//! Options shared by the CLI commands.

use clap::ValueEnum;

use apib_syntax::lexer::LexerConfig;

/// How `apib parse` prints the assembled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rust pretty debug output
    #[default]
    Debug,
    /// Pretty-printed JSON
    Json,
}

/// How a command obtains its tokens.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Lex on a producer thread instead of pulling tokens inline.
    pub threaded: bool,
    pub lexer: LexerConfig,
}

impl SessionOptions {
    pub fn from_flags(threaded: bool, capacity: Option<usize>) -> Self {
        let mut lexer = LexerConfig::default();
        if let Some(capacity) = capacity {
            lexer = lexer.with_channel_capacity(capacity);
        }
        Self { threaded, lexer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apib_syntax::lexer::DEFAULT_CHANNEL_CAPACITY;

    #[test]
    fn test_from_flags_defaults() {
        let opts = SessionOptions::from_flags(false, None);
        assert!(!opts.threaded);
        assert_eq!(opts.lexer.channel_capacity(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_from_flags_clamps_capacity() {
        let opts = SessionOptions::from_flags(true, Some(0));
        assert_eq!(opts.lexer.channel_capacity(), 1);
    }
}
