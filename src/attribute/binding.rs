//! Binding resolver: from a binding descriptor to an accessor.
//!
//! A binding descriptor names where an attribute's value physically
//! lives on its owning type: a field, a getter, a setter, or a
//! getter/setter pair. [`make_accessor`] inspects the shape of the
//! descriptor at construction time, through trait resolution rather
//! than a runtime tag, and wraps the matching storage variant behind an
//! `Arc<dyn AttributeAccessor>`. The hot get/set path performs no shape
//! dispatch: every call runs the narrowing pair shared by all variants
//! and then the variant's own storage access, nothing else.

use std::any::{type_name, Any};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::attribute::accessor::{AttributeAccessor, SharedAccessor};
use crate::attribute::value::{AttributeValue, ValueConversion};
use crate::object::Object;

// ---------------------------------------------------------------------------
// Narrowing wrapper
// ---------------------------------------------------------------------------

/// Storage behavior of one accessor variant, invoked only after both
/// narrowings succeed.
trait BoundStorage<T, V>: Send + Sync + 'static {
    /// Capability flags, fixed per variant.
    const READABLE: bool;
    const WRITABLE: bool;

    fn write(&self, object: &mut T, value: &V) -> bool;
    fn read(&self, object: &T, value: &mut V) -> bool;
}

/// Narrowing front shared by every variant.
///
/// Downcasts the value container first, then the object, from their
/// base traits to the bound concrete types. Either failure returns
/// `false` before any storage access. Both checks run on every call:
/// passing an unrelated object or container is a normal outcome, not a
/// bug.
struct Narrowed<T, V, S> {
    storage: S,
    bound: PhantomData<fn(T) -> V>,
}

impl<T, V, S> AttributeAccessor for Narrowed<T, V, S>
where
    T: Object,
    V: AttributeValue,
    S: BoundStorage<T, V>,
{
    fn set(&self, object: &mut dyn Object, value: &dyn AttributeValue) -> bool {
        let value: &dyn Any = value;
        let Some(value) = value.downcast_ref::<V>() else {
            return false;
        };
        let object: &mut dyn Any = object;
        let Some(object) = object.downcast_mut::<T>() else {
            return false;
        };
        self.storage.write(object, value)
    }

    fn get(&self, object: &dyn Object, value: &mut dyn AttributeValue) -> bool {
        let value: &mut dyn Any = value;
        let Some(value) = value.downcast_mut::<V>() else {
            return false;
        };
        let object: &dyn Any = object;
        let Some(object) = object.downcast_ref::<T>() else {
            return false;
        };
        self.storage.read(object, value)
    }

    fn has_getter(&self) -> bool {
        S::READABLE
    }

    fn has_setter(&self) -> bool {
        S::WRITABLE
    }
}

// ---------------------------------------------------------------------------
// Field descriptor
// ---------------------------------------------------------------------------

/// Descriptor for a direct field binding.
///
/// Rust has no member pointers, so a field is named by a pair of
/// projection fn pointers reading and writing the same field.
/// [`field_ref!`](crate::field_ref) builds both from a single field
/// name; the projections are plain fn pointers and carry no reference
/// into any object.
pub struct FieldRef<T, U> {
    read: fn(&T) -> &U,
    write: fn(&mut T) -> &mut U,
}

impl<T, U> FieldRef<T, U> {
    /// Build a descriptor from explicit projections.
    ///
    /// Both projections must name the same field;
    /// [`field_ref!`](crate::field_ref) guarantees that.
    pub fn new(read: fn(&T) -> &U, write: fn(&mut T) -> &mut U) -> Self {
        Self { read, write }
    }
}

/// Name a field binding once: `field_ref!(Car, speed)`.
#[macro_export]
macro_rules! field_ref {
    ($owner:ty, $field:ident) => {
        $crate::attribute::binding::FieldRef::<$owner, _>::new(
            |object| &object.$field,
            |object| &mut object.$field,
        )
    };
}

// ---------------------------------------------------------------------------
// Storage variants
// ---------------------------------------------------------------------------

/// Field binding: reads and writes through the captured projections.
struct FieldStorage<T, U> {
    field: FieldRef<T, U>,
}

impl<T, U, V> BoundStorage<T, V> for FieldStorage<T, U>
where
    T: Object,
    U: Clone + 'static,
    V: ValueConversion<U>,
{
    const READABLE: bool = true;
    const WRITABLE: bool = true;

    fn write(&self, object: &mut T, value: &V) -> bool {
        let Some(plain) = value.extract() else {
            return false;
        };
        *(self.field.write)(object) = plain;
        true
    }

    fn read(&self, object: &T, value: &mut V) -> bool {
        value.store((self.field.read)(object).clone());
        true
    }
}

/// Get-only binding: writing always fails, after the narrowing pair
/// and before any payload conversion is attempted.
struct GetterStorage<G, U> {
    getter: G,
    plain: PhantomData<fn() -> U>,
}

impl<T, U, V, G> BoundStorage<T, V> for GetterStorage<G, U>
where
    T: Object,
    U: 'static,
    V: ValueConversion<U>,
    G: Fn(&T) -> U + Send + Sync + 'static,
{
    const READABLE: bool = true;
    const WRITABLE: bool = false;

    fn write(&self, _object: &mut T, _value: &V) -> bool {
        false
    }

    fn read(&self, object: &T, value: &mut V) -> bool {
        value.store((self.getter)(object));
        true
    }
}

/// Set-only binding through a setter with no result. Conversion is the
/// only step that can fail, so a successful conversion reports success.
struct SetterStorage<S, U> {
    setter: S,
    plain: PhantomData<fn(U)>,
}

impl<T, U, V, S> BoundStorage<T, V> for SetterStorage<S, U>
where
    T: Object,
    U: 'static,
    V: ValueConversion<U>,
    S: Fn(&mut T, U) + Send + Sync + 'static,
{
    const READABLE: bool = false;
    const WRITABLE: bool = true;

    fn write(&self, object: &mut T, value: &V) -> bool {
        let Some(plain) = value.extract() else {
            return false;
        };
        (self.setter)(object, plain);
        true
    }

    fn read(&self, _object: &T, _value: &mut V) -> bool {
        false
    }
}

/// Set-only binding through a setter that reports success itself. The
/// result mirrors the setter's; whatever the setter mutated before
/// reporting failure is kept, not rolled back.
struct CheckedSetterStorage<S, U> {
    setter: S,
    plain: PhantomData<fn(U)>,
}

impl<T, U, V, S> BoundStorage<T, V> for CheckedSetterStorage<S, U>
where
    T: Object,
    U: 'static,
    V: ValueConversion<U>,
    S: Fn(&mut T, U) -> bool + Send + Sync + 'static,
{
    const READABLE: bool = false;
    const WRITABLE: bool = true;

    fn write(&self, object: &mut T, value: &V) -> bool {
        let Some(plain) = value.extract() else {
            return false;
        };
        (self.setter)(object, plain)
    }

    fn read(&self, _object: &T, _value: &mut V) -> bool {
        false
    }
}

/// Getter/setter pair with a result-less setter. The setter's argument
/// type and the getter's return type may differ; the container must
/// convert with both.
struct PairStorage<S, G, U, W> {
    setter: S,
    getter: G,
    plain: PhantomData<fn(U) -> W>,
}

impl<T, U, W, V, S, G> BoundStorage<T, V> for PairStorage<S, G, U, W>
where
    T: Object,
    U: 'static,
    W: 'static,
    V: ValueConversion<U> + ValueConversion<W>,
    S: Fn(&mut T, U) + Send + Sync + 'static,
    G: Fn(&T) -> W + Send + Sync + 'static,
{
    const READABLE: bool = true;
    const WRITABLE: bool = true;

    fn write(&self, object: &mut T, value: &V) -> bool {
        let Some(plain) = <V as ValueConversion<U>>::extract(value) else {
            return false;
        };
        (self.setter)(object, plain);
        true
    }

    fn read(&self, object: &T, value: &mut V) -> bool {
        <V as ValueConversion<W>>::store(value, (self.getter)(object));
        true
    }
}

/// Getter/setter pair with a success-reporting setter.
struct CheckedPairStorage<S, G, U, W> {
    setter: S,
    getter: G,
    plain: PhantomData<fn(U) -> W>,
}

impl<T, U, W, V, S, G> BoundStorage<T, V> for CheckedPairStorage<S, G, U, W>
where
    T: Object,
    U: 'static,
    W: 'static,
    V: ValueConversion<U> + ValueConversion<W>,
    S: Fn(&mut T, U) -> bool + Send + Sync + 'static,
    G: Fn(&T) -> W + Send + Sync + 'static,
{
    const READABLE: bool = true;
    const WRITABLE: bool = true;

    fn write(&self, object: &mut T, value: &V) -> bool {
        let Some(plain) = <V as ValueConversion<U>>::extract(value) else {
            return false;
        };
        (self.setter)(object, plain)
    }

    fn read(&self, object: &T, value: &mut V) -> bool {
        <V as ValueConversion<W>>::store(value, (self.getter)(object));
        true
    }
}

// ---------------------------------------------------------------------------
// Shape markers
// ---------------------------------------------------------------------------

/// Marker types naming the resolvable descriptor shapes.
///
/// These only ever appear as the inferred `M` parameter of
/// [`BindAttribute`]; they keep the function-shaped impls from
/// overlapping, the same job overload resolution does in languages
/// that have it. They are never constructed.
pub mod shape {
    use std::marker::PhantomData;

    /// One field reference.
    pub struct Field;

    /// One read-only, value-returning accessor fn.
    pub struct GetOnly<U>(PhantomData<U>);

    /// One result-less setter fn.
    pub struct SetOnly<U>(PhantomData<U>);

    /// One success-reporting setter fn.
    pub struct SetOnlyChecked<U>(PhantomData<U>);

    /// A `(setter, getter)` tuple, result-less setter.
    pub struct SetThenGet<U, W>(PhantomData<(U, W)>);

    /// A `(getter, setter)` tuple, result-less setter.
    pub struct GetThenSet<U, W>(PhantomData<(U, W)>);

    /// A `(setter, getter)` tuple, success-reporting setter.
    pub struct SetThenGetChecked<U, W>(PhantomData<(U, W)>);

    /// A `(getter, setter)` tuple, success-reporting setter.
    pub struct GetThenSetChecked<U, W>(PhantomData<(U, W)>);
}

// ---------------------------------------------------------------------------
// Shape dispatch
// ---------------------------------------------------------------------------

/// Construction-time dispatch from a descriptor's shape to the
/// matching accessor variant.
///
/// `T` is the owning object type, `V` the value container the binding
/// speaks, and `M` a [`shape`] marker inferred from the descriptor
/// itself. A descriptor with no resolvable shape (two getters, two
/// setters, a three-tuple) implements this for no `M`, so the mistake
/// is a compile error; no runtime path can produce a non-functional
/// accessor.
pub trait BindAttribute<T, V, M>: Sized {
    /// Wrap this descriptor in its accessor variant.
    fn bind(self) -> SharedAccessor;
}

impl<T, U, V> BindAttribute<T, V, shape::Field> for FieldRef<T, U>
where
    T: Object,
    U: Clone + 'static,
    V: ValueConversion<U>,
{
    fn bind(self) -> SharedAccessor {
        Arc::new(Narrowed::<T, V, _> {
            storage: FieldStorage { field: self },
            bound: PhantomData,
        })
    }
}

impl<T, U, V, G> BindAttribute<T, V, shape::GetOnly<U>> for G
where
    T: Object,
    U: 'static,
    V: ValueConversion<U>,
    G: Fn(&T) -> U + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        Arc::new(Narrowed::<T, V, _> {
            storage: GetterStorage {
                getter: self,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

impl<T, U, V, S> BindAttribute<T, V, shape::SetOnly<U>> for S
where
    T: Object,
    U: 'static,
    V: ValueConversion<U>,
    S: Fn(&mut T, U) + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        Arc::new(Narrowed::<T, V, _> {
            storage: SetterStorage {
                setter: self,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

impl<T, U, V, S> BindAttribute<T, V, shape::SetOnlyChecked<U>> for S
where
    T: Object,
    U: 'static,
    V: ValueConversion<U>,
    S: Fn(&mut T, U) -> bool + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        Arc::new(Narrowed::<T, V, _> {
            storage: CheckedSetterStorage {
                setter: self,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

impl<T, U, W, V, S, G> BindAttribute<T, V, shape::SetThenGet<U, W>> for (S, G)
where
    T: Object,
    U: 'static,
    W: 'static,
    V: ValueConversion<U> + ValueConversion<W>,
    S: Fn(&mut T, U) + Send + Sync + 'static,
    G: Fn(&T) -> W + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        let (setter, getter) = self;
        Arc::new(Narrowed::<T, V, _> {
            storage: PairStorage {
                setter,
                getter,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

impl<T, U, W, V, S, G> BindAttribute<T, V, shape::GetThenSet<U, W>> for (G, S)
where
    T: Object,
    U: 'static,
    W: 'static,
    V: ValueConversion<U> + ValueConversion<W>,
    S: Fn(&mut T, U) + Send + Sync + 'static,
    G: Fn(&T) -> W + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        let (getter, setter) = self;
        Arc::new(Narrowed::<T, V, _> {
            storage: PairStorage {
                setter,
                getter,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

impl<T, U, W, V, S, G> BindAttribute<T, V, shape::SetThenGetChecked<U, W>> for (S, G)
where
    T: Object,
    U: 'static,
    W: 'static,
    V: ValueConversion<U> + ValueConversion<W>,
    S: Fn(&mut T, U) -> bool + Send + Sync + 'static,
    G: Fn(&T) -> W + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        let (setter, getter) = self;
        Arc::new(Narrowed::<T, V, _> {
            storage: CheckedPairStorage {
                setter,
                getter,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

impl<T, U, W, V, S, G> BindAttribute<T, V, shape::GetThenSetChecked<U, W>> for (G, S)
where
    T: Object,
    U: 'static,
    W: 'static,
    V: ValueConversion<U> + ValueConversion<W>,
    S: Fn(&mut T, U) -> bool + Send + Sync + 'static,
    G: Fn(&T) -> W + Send + Sync + 'static,
{
    fn bind(self) -> SharedAccessor {
        let (getter, setter) = self;
        Arc::new(Narrowed::<T, V, _> {
            storage: CheckedPairStorage {
                setter,
                getter,
                plain: PhantomData,
            },
            bound: PhantomData,
        })
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Build the accessor for one binding descriptor.
///
/// `V` is the value container the binding speaks; everything else is
/// inferred from the descriptor's shape:
///
/// - a [`FieldRef`] binds a field, readable and writable;
/// - a `Fn(&T) -> U` binds a getter; writing always fails;
/// - a `Fn(&mut T, U)` binds a result-less setter; reading always
///   fails, writing succeeds once conversion does;
/// - a `Fn(&mut T, U) -> bool` binds a setter whose result is passed
///   through;
/// - a two-tuple of one getter and one setter, in either order, binds
///   both directions.
///
/// The result is shared and immutable: registries clone the `Arc` and
/// the accessor lives as long as any holder.
///
/// # Example
///
/// ```
/// use attrkit::{field_ref, make_accessor, DoubleValue, StringValue};
/// use attrkit::Object;
///
/// #[derive(Debug, Default)]
/// struct Car {
///     speed: f64,
/// }
/// impl Object for Car {}
///
/// let speed = make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed));
/// let mut car = Car::default();
///
/// assert!(speed.set(&mut car, &DoubleValue::new(42.5)));
/// let mut out = DoubleValue::default();
/// assert!(speed.get(&car, &mut out));
/// assert_eq!(out, DoubleValue::new(42.5));
///
/// // Wrong container representation: refused, nothing written.
/// assert!(!speed.set(&mut car, &StringValue::new("x")));
/// assert_eq!(car.speed, 42.5);
/// ```
pub fn make_accessor<V, T, M, B>(descriptor: B) -> SharedAccessor
where
    V: AttributeValue,
    T: Object,
    B: BindAttribute<T, V, M>,
{
    log::trace!(
        "binding {} storage on {}",
        type_name::<V>(),
        type_name::<T>()
    );
    descriptor.bind()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::attribute::scalar::{DoubleValue, IntegerValue, StringValue};

    #[derive(Debug, Default)]
    struct Car {
        speed: f64,
        gear: i8,
        label: String,
    }

    impl Car {
        fn current_speed(&self) -> f64 {
            self.speed
        }

        fn set_speed(&mut self, speed: f64) {
            self.speed = speed;
        }

        fn current_gear(&self) -> i8 {
            self.gear
        }

        /// Rejects gears outside -1..=6, but clobbers the gear first.
        fn shift(&mut self, gear: i8) -> bool {
            if (-1..=6).contains(&gear) {
                self.gear = gear;
                true
            } else {
                self.gear = 0;
                false
            }
        }
    }

    impl Object for Car {}

    #[derive(Debug, Default)]
    struct Boat {
        speed: f64,
    }
    impl Object for Boat {}

    /// Container that counts payload extraction attempts.
    #[derive(Debug, Default)]
    struct CountingValue {
        value: f64,
        extracts: AtomicUsize,
    }

    impl AttributeValue for CountingValue {
        fn clone_boxed(&self) -> Box<dyn AttributeValue> {
            Box::new(CountingValue {
                value: self.value,
                extracts: AtomicUsize::new(self.extracts.load(Ordering::Relaxed)),
            })
        }
    }

    impl ValueConversion<f64> for CountingValue {
        fn extract(&self) -> Option<f64> {
            self.extracts.fetch_add(1, Ordering::Relaxed);
            Some(self.value)
        }

        fn store(&mut self, value: f64) {
            self.value = value;
        }
    }

    // -- field shape --------------------------------------------------------

    #[test]
    fn test_field_accessor_capabilities_and_round_trip() {
        let speed = make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed));
        assert!(speed.has_getter());
        assert!(speed.has_setter());

        let mut car = Car::default();
        assert!(speed.set(&mut car, &DoubleValue::new(42.5)));
        assert_eq!(car.speed, 42.5);

        let mut out = DoubleValue::default();
        assert!(speed.get(&car, &mut out));
        assert_eq!(out, DoubleValue::new(42.5));
    }

    #[test]
    fn test_field_accessor_for_string_field() {
        let label = make_accessor::<StringValue, _, _, _>(field_ref!(Car, label));
        let mut car = Car::default();
        assert!(label.set(&mut car, &StringValue::new("fast")));
        assert_eq!(car.label, "fast");

        let mut out = StringValue::default();
        assert!(label.get(&car, &mut out));
        assert_eq!(out, StringValue::new("fast"));
    }

    // -- get-only shape -----------------------------------------------------

    #[test]
    fn test_get_only_accessor() {
        let speed = make_accessor::<DoubleValue, _, _, _>(Car::current_speed);
        assert!(speed.has_getter());
        assert!(!speed.has_setter());

        let mut car = Car {
            speed: 7.0,
            ..Car::default()
        };
        let mut out = DoubleValue::default();
        assert!(speed.get(&car, &mut out));
        assert_eq!(out, DoubleValue::new(7.0));

        // Writing fails even with perfectly valid inputs.
        assert!(!speed.set(&mut car, &DoubleValue::new(1.0)));
        assert_eq!(car.speed, 7.0);
    }

    #[test]
    fn test_get_only_set_never_attempts_conversion() {
        let speed = make_accessor::<CountingValue, _, _, _>(Car::current_speed);
        let mut car = Car::default();
        let value = CountingValue {
            value: 3.0,
            extracts: AtomicUsize::new(0),
        };
        assert!(!speed.set(&mut car, &value));
        assert_eq!(value.extracts.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_capturing_closure_as_getter() {
        let offset = 100.0;
        let boosted =
            make_accessor::<DoubleValue, _, _, _>(move |car: &Car| car.speed + offset);
        let car = Car {
            speed: 1.5,
            ..Car::default()
        };
        let mut out = DoubleValue::default();
        assert!(boosted.get(&car, &mut out));
        assert_eq!(out, DoubleValue::new(101.5));
    }

    // -- set-only shapes ----------------------------------------------------

    #[test]
    fn test_set_only_void_reports_success_after_conversion() {
        let speed = make_accessor::<DoubleValue, _, _, _>(Car::set_speed);
        assert!(!speed.has_getter());
        assert!(speed.has_setter());

        let mut car = Car::default();
        assert!(speed.set(&mut car, &DoubleValue::new(3.25)));
        assert_eq!(car.speed, 3.25);

        // Reading fails even with perfectly valid inputs.
        let mut out = DoubleValue::new(9.0);
        assert!(!speed.get(&car, &mut out));
        assert_eq!(out, DoubleValue::new(9.0));
    }

    #[test]
    fn test_set_only_bool_mirrors_setter_result() {
        let gear = make_accessor::<IntegerValue, _, _, _>(Car::shift);
        let mut car = Car::default();

        assert!(gear.set(&mut car, &IntegerValue::new(4)));
        assert_eq!(car.gear, 4);

        // 9 converts to i8 fine, but the setter rejects it. Its partial
        // mutation is kept, not rolled back.
        assert!(!gear.set(&mut car, &IntegerValue::new(9)));
        assert_eq!(car.gear, 0);
    }

    #[test]
    fn test_set_only_conversion_failure_skips_storage() {
        #[derive(Debug, Default)]
        struct Throttle {
            level: i8,
            writes: usize,
        }
        impl Throttle {
            fn set_level(&mut self, level: i8) {
                self.level = level;
                self.writes += 1;
            }
        }
        impl Object for Throttle {}

        let level = make_accessor::<IntegerValue, _, _, _>(Throttle::set_level);
        let mut throttle = Throttle::default();

        // 1000 does not fit an i8; the setter must never run.
        assert!(!level.set(&mut throttle, &IntegerValue::new(1000)));
        assert_eq!(throttle.writes, 0);
        assert_eq!(throttle.level, 0);

        assert!(level.set(&mut throttle, &IntegerValue::new(5)));
        assert_eq!(throttle.writes, 1);
        assert_eq!(throttle.level, 5);
    }

    // -- pair shapes --------------------------------------------------------

    #[test]
    fn test_pair_void_round_trip_in_both_argument_orders() {
        let a = make_accessor::<DoubleValue, _, _, _>((Car::set_speed, Car::current_speed));
        let b = make_accessor::<DoubleValue, _, _, _>((Car::current_speed, Car::set_speed));

        for accessor in [a, b] {
            assert!(accessor.has_getter());
            assert!(accessor.has_setter());

            let mut car = Car::default();
            assert!(accessor.set(&mut car, &DoubleValue::new(55.0)));
            let mut out = DoubleValue::default();
            assert!(accessor.get(&car, &mut out));
            assert_eq!(out, DoubleValue::new(55.0));
        }
    }

    #[test]
    fn test_pair_checked_mirrors_setter_result() {
        let a = make_accessor::<IntegerValue, _, _, _>((Car::shift, Car::current_gear));
        let b = make_accessor::<IntegerValue, _, _, _>((Car::current_gear, Car::shift));

        for accessor in [a, b] {
            let mut car = Car::default();
            assert!(accessor.set(&mut car, &IntegerValue::new(3)));
            assert!(!accessor.set(&mut car, &IntegerValue::new(42)));

            let mut out = IntegerValue::default();
            assert!(accessor.get(&car, &mut out));
            assert_eq!(out, IntegerValue::new(0));
        }
    }

    // -- narrowing ----------------------------------------------------------

    #[test]
    fn test_wrong_object_leaves_container_untouched() {
        let speed = make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed));
        let mut boat = Boat::default();

        assert!(!speed.set(&mut boat, &DoubleValue::new(1.0)));
        assert_eq!(boat.speed, 0.0);

        let mut out = DoubleValue::new(7.25);
        assert!(!speed.get(&boat, &mut out));
        assert_eq!(out, DoubleValue::new(7.25));
    }

    #[test]
    fn test_wrong_container_leaves_field_untouched() {
        let speed = make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed));
        let mut car = Car {
            speed: 42.5,
            ..Car::default()
        };

        assert!(!speed.set(&mut car, &StringValue::new("x")));
        assert_eq!(car.speed, 42.5);

        let mut wrong = StringValue::new("untouched");
        assert!(!speed.get(&car, &mut wrong));
        assert_eq!(wrong, StringValue::new("untouched"));
    }

    #[test]
    fn test_field_conversion_failure_skips_write() {
        let gear = make_accessor::<IntegerValue, _, _, _>(field_ref!(Car, gear));
        let mut car = Car {
            gear: 2,
            ..Car::default()
        };

        // 300 does not fit the i8 field.
        assert!(!gear.set(&mut car, &IntegerValue::new(300)));
        assert_eq!(car.gear, 2);

        assert!(gear.set(&mut car, &IntegerValue::new(-1)));
        assert_eq!(car.gear, -1);
    }

    // -- sharing and generic use -------------------------------------------

    #[test]
    fn test_accessor_shared_by_multiple_holders() {
        let speed = make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed));
        let holder_a = Arc::clone(&speed);
        let holder_b = Arc::clone(&speed);
        drop(speed);

        let mut car = Car::default();
        assert!(holder_a.set(&mut car, &DoubleValue::new(10.0)));
        let mut out = DoubleValue::default();
        assert!(holder_b.get(&car, &mut out));
        assert_eq!(out, DoubleValue::new(10.0));
    }

    #[test]
    fn test_registry_style_generic_access() {
        let mut registry: HashMap<&str, SharedAccessor> = HashMap::new();
        registry.insert(
            "Speed",
            make_accessor::<DoubleValue, _, _, _>(field_ref!(Car, speed)),
        );
        registry.insert(
            "Gear",
            make_accessor::<IntegerValue, _, _, _>((Car::shift, Car::current_gear)),
        );

        let mut car = Car::default();
        assert!(registry["Speed"].set(&mut car, &DoubleValue::new(30.0)));
        assert!(registry["Gear"].set(&mut car, &IntegerValue::new(2)));

        // A caller probing blindly gets soft refusals, never a crash.
        assert!(!registry["Speed"].set(&mut car, &IntegerValue::new(1)));
        assert!(!registry["Gear"].set(&mut car, &IntegerValue::new(1000)));

        assert_eq!(car.speed, 30.0);
        assert_eq!(car.gear, 2);
    }
}
