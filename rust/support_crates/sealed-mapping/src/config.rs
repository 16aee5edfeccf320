use sealed_common::{Result, verify_arg};

/// Configuration for [`MapBuilder`](crate::MapBuilder) construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapBuilderConfig {
    /// Number of entries the table can hold before it first grows.
    pub capacity: usize,
    /// Release spare table capacity when the builder is sealed.
    pub shrink_on_seal: bool,
}

impl MapBuilderConfig {
    pub fn with_capacity(capacity: usize) -> MapBuilderConfig {
        MapBuilderConfig {
            capacity,
            ..Default::default()
        }
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// A capacity that passes validation may still be rejected when the table
    /// is reserved, since the bucket count depends on the entry size.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(capacity, self.capacity <= isize::MAX as usize);
        Ok(())
    }
}
