//! A dict-like type that creates values for missing keys in terms of the key
//!
//! `dynamicdict` is the key-aware sibling of a defaulting map: instead of a
//! zero-argument default, its factory receives the missing key and derives
//! the value from it. The derived value is stored before it is returned, so
//! every key is derived at most once.
//!
//! - [`DynamicDict`]: the insertion-ordered container and its
//!   missing-key protocol
//! - [`Factory`]: the named default factory, infallible or fallible
//! - [`SharedDict`]: a cloneable thread-safe handle
//! - [`DictError`]/[`DictResult`]: the failure modes of derivation
//!
//! # Example
//!
//! ```
//! use dynamicdict::{DynamicDict, Factory};
//!
//! let mut greetings = DynamicDict::with_factory(Factory::new("greet", |name: &String| {
//!     format!("hello, {name}")
//! }));
//!
//! let value = greetings.resolve("world".to_string())?;
//! assert_eq!(value, "hello, world");
//!
//! // Present keys are returned as-is, without touching the factory.
//! greetings.insert("bob".to_string(), "hi bob".to_string());
//! assert_eq!(greetings.resolve("bob".to_string())?, "hi bob");
//! # Ok::<(), dynamicdict::DictError>(())
//! ```

// Re-export all public APIs from internal crates
pub use dynamicdict_core as container;
pub use dynamicdict_errors as errors;

// Convenience re-exports
pub use dynamicdict_core::{DynamicDict, Factory, FactoryFn, SharedDict};
pub use dynamicdict_errors::{DictError, DictResult};
