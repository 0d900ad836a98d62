//! The attribute layer: value containers, the accessor capability
//! interface, and the binding resolver.
//!
//! An attribute is a named, typed property of an object, accessed
//! generically through base-trait references. The pieces here:
//!
//! - [`value`] holds the [`AttributeValue`] base trait for boxed value
//!   containers and the [`ValueConversion`] seam between a container
//!   and the plain type of the storage it is bound to.
//! - [`scalar`] supplies the stock containers (`BoolValue`,
//!   `IntegerValue`, `UnsignedValue`, `DoubleValue`, `StringValue`).
//! - [`accessor`] defines [`AttributeAccessor`], the uniform
//!   get/set/has-getter/has-setter contract every bound attribute
//!   implements.
//! - [`binding`] resolves a binding descriptor (a field reference, a
//!   getter, a setter, or a getter/setter pair) into the matching
//!   accessor variant, once, at construction time.
//!
//! A registry (external to this crate) typically calls
//! [`make_accessor`] once per attribute at schema-construction time and
//! stores the returned `Arc` under the attribute's name. Every later
//! read or write goes through [`AttributeAccessor`] alone; failures of
//! any kind surface as `false`, never as a panic or an error value.

pub mod accessor;
pub mod binding;
pub mod error;
pub mod scalar;
pub mod value;

pub use accessor::{AttributeAccessor, SharedAccessor};
pub use binding::{make_accessor, BindAttribute, FieldRef};
pub use error::ValueError;
pub use scalar::{BoolValue, DoubleValue, IntegerValue, StringValue, UnsignedValue};
pub use value::{AttributeValue, ValueConversion};
