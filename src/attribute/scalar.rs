//! Stock scalar value containers.
//!
//! Each container holds one widest-of-kind payload (`i64`, `u64`,
//! `f64`, `bool`, `String`) and converts to the narrower plain types a
//! binding may require, with range checks on every narrowing path.
//! Unit, enum, and collection wrappers belong to higher layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attribute::error::ValueError;
use crate::attribute::value::ValueConversion;
use crate::impl_attribute_value;

// ---------------------------------------------------------------------------
// Impl helpers
// ---------------------------------------------------------------------------

/// `Display` and `FromStr` over the container's `value` field.
macro_rules! impl_textual {
    ($ty:ty, $target:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl FromStr for $ty {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse()
                    .map(|value| Self { value })
                    .map_err(|_| ValueError::Parse {
                        input: s.to_string(),
                        target: $target,
                    })
            }
        }
    };
}

/// Range-checked [`ValueConversion`] impls from an integer container to
/// each plain width it can hold. Extraction fails outside the target
/// range; storing widens losslessly.
macro_rules! impl_integer_conversions {
    ($container:ty => $($plain:ty),+ $(,)?) => {
        $(
            impl ValueConversion<$plain> for $container {
                fn extract(&self) -> Option<$plain> {
                    <$plain>::try_from(self.value).ok()
                }

                fn store(&mut self, value: $plain) {
                    self.value = value.into();
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// BoolValue
// ---------------------------------------------------------------------------

/// Boolean container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolValue {
    /// The payload.
    pub value: bool,
}

impl BoolValue {
    /// Create a container holding `value`.
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl_attribute_value!(BoolValue);
impl_textual!(BoolValue, "BoolValue");

impl ValueConversion<bool> for BoolValue {
    fn extract(&self) -> Option<bool> {
        Some(self.value)
    }

    fn store(&mut self, value: bool) {
        self.value = value;
    }
}

// ---------------------------------------------------------------------------
// IntegerValue
// ---------------------------------------------------------------------------

/// Signed integer container, widest width.
///
/// Converts to any signed plain width; extraction to a narrower width
/// fails when the payload is out of that width's range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegerValue {
    /// The payload.
    pub value: i64,
}

impl IntegerValue {
    /// Create a container holding `value`.
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl_attribute_value!(IntegerValue);
impl_textual!(IntegerValue, "IntegerValue");
impl_integer_conversions!(IntegerValue => i8, i16, i32, i64);

// ---------------------------------------------------------------------------
// UnsignedValue
// ---------------------------------------------------------------------------

/// Unsigned integer container, widest width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsignedValue {
    /// The payload.
    pub value: u64,
}

impl UnsignedValue {
    /// Create a container holding `value`.
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl_attribute_value!(UnsignedValue);
impl_textual!(UnsignedValue, "UnsignedValue");
impl_integer_conversions!(UnsignedValue => u8, u16, u32, u64);

// ---------------------------------------------------------------------------
// DoubleValue
// ---------------------------------------------------------------------------

/// Floating-point container, `f64` payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DoubleValue {
    /// The payload.
    pub value: f64,
}

impl DoubleValue {
    /// Create a container holding `value`.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl_attribute_value!(DoubleValue);
impl_textual!(DoubleValue, "DoubleValue");

impl ValueConversion<f64> for DoubleValue {
    fn extract(&self) -> Option<f64> {
        Some(self.value)
    }

    fn store(&mut self, value: f64) {
        self.value = value;
    }
}

impl ValueConversion<f32> for DoubleValue {
    /// Extraction fails for finite payloads beyond `f32` range.
    /// Non-finite payloads pass through unchanged.
    fn extract(&self) -> Option<f32> {
        if self.value.is_finite() && self.value.abs() > f64::from(f32::MAX) {
            return None;
        }
        Some(self.value as f32)
    }

    fn store(&mut self, value: f32) {
        self.value = f64::from(value);
    }
}

// ---------------------------------------------------------------------------
// StringValue
// ---------------------------------------------------------------------------

/// String container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringValue {
    /// The payload.
    pub value: String,
}

impl StringValue {
    /// Create a container holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl_attribute_value!(StringValue);
impl_textual!(StringValue, "StringValue");

impl ValueConversion<String> for StringValue {
    fn extract(&self) -> Option<String> {
        Some(self.value.clone())
    }

    fn store(&mut self, value: String) {
        self.value = value;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
