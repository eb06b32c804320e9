//! Error type definitions for signature operations

/// Primary error type for signature operations
///
/// Every variant carries a static context string naming the operation that
/// rejected its input. Forged or corrupted signatures are not errors: the
/// verification entry points report them as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A buffer did not have the fixed size its role requires
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid key error
    InvalidKey { context: &'static str },

    /// Invalid signature error
    InvalidSignature { context: &'static str },

    /// Invalid parameter error
    InvalidParameter { context: &'static str },

    /// The caller-supplied random generator failed
    RandomGenerationError { context: &'static str },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { .. } => Self::InvalidKey { context },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidKey { context }
            | Self::InvalidSignature { context }
            | Self::InvalidParameter { context }
            | Self::RandomGenerationError { context } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidKey { context } => write!(f, "Invalid key: {}", context),
            Self::InvalidSignature { context } => write!(f, "Invalid signature: {}", context),
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
        }
    }
}
