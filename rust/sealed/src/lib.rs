//! # Sealed: build-then-seal immutable collections
//!
//! Collections in this crate are assembled through a mutable builder and then
//! *sealed* into an immutable view. Sealing moves the backing storage out of the
//! builder, so once a collection is sealed nothing else can reach its buffer,
//! let alone mutate it.
//!
//! ## Module Organization
//!
//! * [`common`] - Error and result types shared across components
//! * [`sequence`] - [`SequenceBuilder`] and the ordered [`Sequence`] it seals into
//! * [`mapping`] - [`MapBuilder`] and the associative [`Mapping`] it seals into
//!
//! ## Example
//!
//! ```
//! use sealed::{MapBuilder, SequenceBuilder};
//!
//! let mut names = SequenceBuilder::new();
//! names.append(["carol", "alice", "bob"]).sort();
//! let names = names.seal();
//!
//! let mut lengths = MapBuilder::new();
//! lengths.collect_from(names.values().map(|name| (*name, name.len())));
//! let lengths = lengths.seal();
//!
//! assert_eq!(names.first(), Some(&"alice"));
//! assert_eq!(lengths.get("carol"), Some(&5));
//! ```

pub use sealed_common as common;
pub use sealed_mapping as mapping;
pub use sealed_sequence as sequence;

pub use sealed_common::{Error, ErrorKind, Result};
pub use sealed_mapping::{MapBuilder, MapBuilderConfig, Mapping};
pub use sealed_sequence::{Sequence, SequenceBuilder, SequenceBuilderConfig};
