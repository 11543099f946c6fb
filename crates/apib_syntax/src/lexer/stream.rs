//! Threaded token stream: the state machine runs on a producer thread and hands tokens over a bounded
//! channel.
//!
//! ## Notes
//! - The channel bound gives backpressure: the producer blocks once it is `channel_capacity` tokens ahead.
//! - Dropping the sender closes the stream; that happens exactly once, after the last state returned `None`
//!   (clean end of input or right after the error token).
//! - If the consumer drops the stream early, the producer's next send fails and the thread exits.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use super::{Lexer, LexerConfig, Token};

/// Consumer end of a lexing session running on its own thread.
pub struct TokenStream {
    receiver: Receiver<Token>,
    producer: Option<JoinHandle<()>>,
}

/// Start lexing `source` on a producer thread.
///
/// ## Errors
/// Returns the OS error if the thread cannot be spawned.
pub fn spawn(source: String, config: &LexerConfig) -> io::Result<TokenStream> {
    let (sender, receiver) = mpsc::sync_channel(config.channel_capacity());
    let producer = thread::Builder::new()
        .name("apib-lexer".to_string())
        .spawn(move || {
            for token in Lexer::new(&source) {
                if sender.send(token).is_err() {
                    tracing::debug!("token stream consumer hung up");
                    break;
                }
            }
        })?;

    Ok(TokenStream {
        receiver,
        producer: Some(producer),
    })
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.receiver.recv() {
            Ok(token) => Some(token),
            Err(_) => {
                // Closed: reap the producer. Lexing never panics, so the join result carries nothing.
                if let Some(producer) = self.producer.take() {
                    let _ = producer.join();
                }
                None
            }
        }
    }
}

impl std::iter::FusedIterator for TokenStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{self, TokenKind};

    const DOC: &str = "Version: 1A9\n\n# Simple API\nOverview\n\n## Data Structures\n\n### Dimension\n+ radius (number)\n+ length (number)\n";

    #[test]
    fn test_stream_matches_pull_lexer() {
        let streamed: Vec<Token> = spawn(DOC.to_string(), &LexerConfig::default()).unwrap().collect();
        assert_eq!(streamed, lexer::lex(DOC));
    }

    #[test]
    fn test_stream_closes_after_error_token() {
        let source = "Version: 1A9\n\n## Data Structures\n### A\n+ email* \n+ name (string)\n";
        let mut stream = spawn(source.to_string(), &LexerConfig::new().with_channel_capacity(1)).unwrap();

        let error = stream.by_ref().find(|t| t.kind == TokenKind::Error).unwrap();
        assert!(error.text.contains("'*'"));
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_dropping_stream_early_releases_producer() {
        let mut stream = spawn(DOC.repeat(50), &LexerConfig::default()).unwrap();
        assert_eq!(stream.next().map(|t| t.kind), Some(TokenKind::MetaKey));
        drop(stream);
    }
}
