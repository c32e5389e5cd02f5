//! Per-operation settings.

/// How to treat the 4-byte tag at the start of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagicPolicy {
    /// Reject anything other than `vawt`.
    #[default]
    Strict,
    /// Accept any 4-byte prefix.
    Lenient,
}

/// Options for operations that read a container.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Magic tag handling.
    pub magic: MagicPolicy,
}

impl ReadOptions {
    /// Options that accept any magic tag.
    pub fn lenient() -> Self {
        Self {
            magic: MagicPolicy::Lenient,
        }
    }
}

/// Options for [`crate::pack()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PackOptions {
    /// Check every input against the first file's shape, not only the first
    /// file against the required format.
    pub validate_all: bool,
}
