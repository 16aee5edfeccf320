//! Build-then-seal key-value mappings.
//!
//! A [`MapBuilder`] accumulates entries with last-write-wins semantics. Sealing it
//! moves the hash table into a [`Mapping`], which has no mutation path at all.
//!
//! Both types default to `ahash::RandomState` for hashing; any `BuildHasher`
//! can be supplied through the `S` parameter.
//!
//! ```
//! use sealed_mapping::MapBuilder;
//!
//! let mut builder = MapBuilder::new();
//! builder.put("k", 1).put("j", 2).put("k", 3);
//! let map = builder.seal();
//!
//! assert_eq!(map.get("k"), Some(&3));
//! assert_eq!(*map.get_or("missing", &0), 0);
//! assert!(builder.is_empty());
//! ```

pub mod config;
pub mod map_builder;
pub mod mapping;
#[cfg(test)]
mod tests;

pub use config::MapBuilderConfig;
pub use map_builder::MapBuilder;
pub use mapping::Mapping;
