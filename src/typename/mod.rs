//! Clean type-name derivation for logger names.
//!
//! Looking a logger up by type instead of by string needs a readable name
//! for the type. This module derives one in two steps:
//!
//! - [`descriptor_of`] parses the output of [`std::any::type_name`] into a
//!   structural [`TypeDescriptor`] (namespace, simple name, generic
//!   arguments)
//! - [`clean_name`] formats a descriptor into a dotted display name,
//!   collapsing namespace segments that would repeat their enclosing scope
//!
//! [`clean_type_name`] composes the two:
//!
//! ```
//! use loghub::typename::clean_type_name;
//!
//! assert_eq!(clean_type_name::<u8>(), "u8");
//! assert_eq!(
//!     clean_type_name::<Vec<u8>>(),
//!     "alloc.vec.Vec<u8>"
//! );
//! ```
//!
//! Descriptors can also be built by hand, which additionally supports
//! nested (declaring) types and unbound generic parameters.

mod descriptor;
mod format;
mod parse;

pub use descriptor::TypeDescriptor;
pub use format::clean_name;
pub use parse::descriptor_of;

/// Derive the cleaned display name for `T`.
pub fn clean_type_name<T: ?Sized>() -> String {
    clean_name(&descriptor_of::<T>())
}
