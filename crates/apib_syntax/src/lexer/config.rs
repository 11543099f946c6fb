//! Lexer session configuration.

/// Default bound of the producer-to-consumer token channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 2;

/// Configuration for a lexing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Number of tokens the producer thread may run ahead of the consumer (at least 1)
    channel_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl LexerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel bound. Zero is raised to 1.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_shallow() {
        assert_eq!(LexerConfig::default().channel_capacity(), 2);
        assert_eq!(LexerConfig::new(), LexerConfig::default());
    }

    #[test]
    fn test_with_channel_capacity() {
        assert_eq!(LexerConfig::new().with_channel_capacity(16).channel_capacity(), 16);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        assert_eq!(LexerConfig::new().with_channel_capacity(0).channel_capacity(), 1);
    }
}
