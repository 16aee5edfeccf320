use sealed_common::{Result, verify_arg};

/// Configuration for [`SequenceBuilder`](crate::SequenceBuilder) construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuilderConfig {
    /// Number of default-valued elements the builder starts with.
    pub length: usize,
    /// Initial reserved capacity. Must not be smaller than `length`.
    pub capacity: usize,
    /// Release spare capacity when the buffer is sealed.
    pub shrink_on_seal: bool,
}

impl SequenceBuilderConfig {
    pub fn with_capacity(capacity: usize) -> SequenceBuilderConfig {
        SequenceBuilderConfig {
            capacity,
            ..Default::default()
        }
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(capacity, self.capacity >= self.length);
        Ok(())
    }
}
