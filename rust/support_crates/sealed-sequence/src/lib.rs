//! Build-then-seal ordered sequences.
//!
//! A [`SequenceBuilder`] accumulates elements through chained mutation. Sealing it
//! moves the backing buffer into a [`Sequence`], which exposes read-only access
//! only. The builder is left empty and unallocated, so the sealed buffer is never
//! reachable from two live owners.
//!
//! ```
//! use sealed_sequence::SequenceBuilder;
//!
//! let mut builder = SequenceBuilder::new();
//! builder.append([2, 1, 3]).push(0).sort();
//! let seq = builder.seal();
//!
//! assert_eq!(seq.as_slice(), &[0, 1, 2, 3]);
//! assert!(builder.is_empty());
//! assert_eq!(builder.capacity(), 0);
//! ```

pub mod config;
pub mod sequence;
pub mod sequence_builder;
#[cfg(test)]
mod tests;

pub use config::SequenceBuilderConfig;
pub use sequence::Sequence;
pub use sequence_builder::SequenceBuilder;
