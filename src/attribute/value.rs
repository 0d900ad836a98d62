//! Value container base trait and the container/plain-value conversion
//! seam.
//!
//! A value container is the boxed, generic representation of one
//! attribute's value. Accessors receive `&dyn AttributeValue` (or
//! `&mut dyn AttributeValue`), narrow it to the container type they
//! were bound with, and report a failed narrowing as `false`.

use std::any::Any;
use std::fmt;

// ---------------------------------------------------------------------------
// AttributeValue
// ---------------------------------------------------------------------------

/// Base trait for boxed attribute values.
///
/// Containers are plain data holders: cloning one clones its payload,
/// and the accessor layer never keeps a container alive beyond the call
/// it was passed into.
pub trait AttributeValue: Any + Send + Sync + fmt::Debug {
    /// Clone into a new boxed container.
    fn clone_boxed(&self) -> Box<dyn AttributeValue>;
}

impl Clone for Box<dyn AttributeValue> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

// ---------------------------------------------------------------------------
// ValueConversion
// ---------------------------------------------------------------------------

/// Conversion between a value container and the plain type `U` of the
/// storage it is bound to.
///
/// Extraction may fail (out of range, lossy narrowing); storing always
/// succeeds. One container commonly implements this for several plain
/// types, e.g. an integer container for every signed width it can
/// round-trip through.
pub trait ValueConversion<U>: AttributeValue {
    /// Attempt to produce a plain `U` from the container's payload.
    fn extract(&self) -> Option<U>;

    /// Replace the container's payload with `value`.
    fn store(&mut self, value: U);
}

/// Implement [`AttributeValue`] for a `Clone` container type.
#[macro_export]
macro_rules! impl_attribute_value {
    ($ty:ty) => {
        impl $crate::attribute::value::AttributeValue for $ty {
            fn clone_boxed(&self) -> Box<dyn $crate::attribute::value::AttributeValue> {
                Box::new(self.clone())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
