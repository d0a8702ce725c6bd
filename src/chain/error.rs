use core::fmt;

/// Failures detected while running a forwarding chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The source was queried after it relinquished its value.
    SourceSpent,
    /// A chain needs at least one sink.
    NoSinks,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChainError::SourceSpent => "source was queried after relinquishing its value",
            ChainError::NoSinks => "a forwarding chain needs at least one sink",
        })
    }
}

impl std::error::Error for ChainError {}
