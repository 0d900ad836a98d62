//! Object base trait: the polymorphic root for attribute-bearing types.
//!
//! Accessors never see the concrete type of the object they operate on.
//! They receive a `&dyn Object` (or `&mut dyn Object`), narrow it to the
//! concrete type they were bound with through a checked downcast, and
//! treat a failed narrowing as a normal, non-fatal outcome reported as
//! `false` by the calling accessor.

use std::any::Any;
use std::fmt;

/// Base trait for every type whose attributes can be bound.
///
/// A marker on top of [`Any`]: it adds the `Send + Sync + Debug` bounds
/// the rest of the crate expects plus the upcast path to `dyn Any` used
/// for narrowing. Implement it with an empty block.
///
/// An accessor holds no reference to any object implementing this
/// trait. It is invoked against whatever object the caller passes in,
/// every call.
///
/// # Example
///
/// ```
/// use attrkit::Object;
///
/// #[derive(Debug, Default)]
/// struct Car {
///     speed: f64,
/// }
///
/// impl Object for Car {}
///
/// let car = Car { speed: 42.5 };
/// assert_eq!(car.speed, 42.5);
/// ```
pub trait Object: Any + Send + Sync + fmt::Debug {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Car {
        speed: f64,
    }
    impl Object for Car {}

    #[derive(Debug)]
    struct Boat;
    impl Object for Boat {}

    #[test]
    fn test_narrowing_succeeds_for_exact_type() {
        let car = Car { speed: 3.0 };
        let object: &dyn Object = &car;
        let any: &dyn Any = object;
        assert_eq!(any.downcast_ref::<Car>().unwrap().speed, 3.0);
    }

    #[test]
    fn test_narrowing_fails_softly_for_unrelated_type() {
        let boat = Boat;
        let object: &dyn Object = &boat;
        let any: &dyn Any = object;
        assert!(any.downcast_ref::<Car>().is_none());
    }

    #[test]
    fn test_narrowing_mutable() {
        let mut car = Car { speed: 0.0 };
        let object: &mut dyn Object = &mut car;
        let any: &mut dyn Any = object;
        any.downcast_mut::<Car>().unwrap().speed = 88.0;
        assert_eq!(car.speed, 88.0);
    }
}
