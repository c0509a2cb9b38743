//! Core dynamic dictionary implementation
//!
//! A [`DynamicDict`] is an insertion-ordered map with one addition: an
//! optional default factory that creates values for missing keys in terms
//! of the key. Accessing an absent key through [`DynamicDict::resolve`]
//! calls the factory with the key, stores the produced value, and returns
//! it; present keys are never derived twice.
//!
//! The crate is organized as:
//!
//! - `dict`: the [`DynamicDict`] container and its missing-key protocol
//! - `factory`: the named default-factory abstraction
//! - `shared`: a cloneable thread-safe handle for cross-thread use
//!
//! # Example
//!
//! ```
//! use dynamicdict_core::{DynamicDict, Factory};
//!
//! let mut squares = DynamicDict::with_factory(Factory::new("square", |k: &i64| k * k));
//!
//! assert_eq!(squares.resolve(7)?, &49);
//! // The derived value is stored; later lookups see it directly.
//! assert_eq!(squares.get(&7), Some(&49));
//! # Ok::<(), dynamicdict_errors::DictError>(())
//! ```

pub mod dict;
pub mod factory;
pub mod shared;

pub use dict::DynamicDict;
pub use factory::{Factory, FactoryFn};
pub use shared::SharedDict;
