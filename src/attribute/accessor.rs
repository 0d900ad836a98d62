//! The accessor capability interface.

use std::sync::Arc;

use crate::attribute::value::AttributeValue;
use crate::object::Object;

/// Uniform get/set contract implemented by every bound attribute.
///
/// An accessor is produced once by
/// [`make_accessor`](crate::attribute::binding::make_accessor) and
/// invoked repeatedly through this trait alone. It is immutable: `set`
/// and `get` only touch the object and the container passed in, never
/// the accessor itself, so one instance can be shared by any number of
/// holders and invoked concurrently against different objects. Access
/// to one object through several accessors at once is the caller's
/// discipline, not this crate's.
///
/// Every failure (wrong object type, wrong container type, payload not
/// convertible, capability absent) is reported as `false`. Nothing in
/// this interface panics or returns an error value; callers treat
/// `false` as "attribute not applicable here".
pub trait AttributeAccessor: Send + Sync {
    /// Write `value` into the bound storage of `object`.
    ///
    /// Narrows `value` and then `object` to the bound types, converts
    /// the container payload to the storage's plain type, and installs
    /// it. Returns `false` if any step fails or the binding has no
    /// setter. The storage is never touched on a narrowing or
    /// conversion failure.
    fn set(&self, object: &mut dyn Object, value: &dyn AttributeValue) -> bool;

    /// Read the bound storage of `object` into `value`.
    ///
    /// Narrows both references, reads the plain value, and stores it in
    /// the container. Returns `false` if either narrowing fails or the
    /// binding has no getter; the container is then left untouched.
    fn get(&self, object: &dyn Object, value: &mut dyn AttributeValue) -> bool;

    /// Whether this binding can be read. Fixed at construction.
    fn has_getter(&self) -> bool;

    /// Whether this binding can be written. Fixed at construction.
    fn has_setter(&self) -> bool;
}

/// Shared handle to an accessor, as held by registries.
///
/// Cloning the handle shares the single immutable accessor; it is
/// dropped when the last holder releases it.
pub type SharedAccessor = Arc<dyn AttributeAccessor>;
