//! # attrkit
//!
//! A typed attribute-binding layer for polymorphic objects.
//!
//! A generic, string-addressed attribute on an object is read and
//! written through one uniform interface, [`AttributeAccessor`], while
//! the actual storage shape stays hidden: a plain data field, a
//! get-only accessor fn, a set-only accessor fn (with or without a
//! success result), or a get/set pair. The shape is resolved once, at
//! construction time, by [`make_accessor`]; after that every call runs
//! the same narrowing discipline and reports every mismatch (wrong
//! object type, wrong container type, unconvertible payload, absent
//! capability) as a plain `false`, never a panic.
//!
//! Registration tables, attribute naming, and schema composition live
//! in higher layers; this crate only defines how one bound attribute
//! is read and written.
//!
//! # Example
//!
//! ```
//! use attrkit::{field_ref, make_accessor, DoubleValue, Object, SharedAccessor};
//!
//! #[derive(Debug, Default)]
//! struct Car {
//!     speed: f64,
//! }
//! impl Object for Car {}
//!
//! // Resolved once at schema-construction time, shared thereafter.
//! let speed: SharedAccessor = make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed));
//!
//! let mut car = Car::default();
//! assert!(speed.set(&mut car, &DoubleValue::new(42.5)));
//!
//! let mut out = DoubleValue::default();
//! assert!(speed.get(&car, &mut out));
//! assert_eq!(out, DoubleValue::new(42.5));
//! ```

pub mod attribute;
pub mod object;

pub use attribute::accessor::{AttributeAccessor, SharedAccessor};
pub use attribute::binding::{make_accessor, BindAttribute, FieldRef};
pub use attribute::error::ValueError;
pub use attribute::scalar::{BoolValue, DoubleValue, IntegerValue, StringValue, UnsignedValue};
pub use attribute::value::{AttributeValue, ValueConversion};
pub use object::Object;

/// Library version.
pub const VERSION: &str = "0.1.0";
