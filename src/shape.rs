//! Shapes of orderable values.
//!
//! The [`Shape`] of a value determines which comparison and score functions apply to it. Shapes
//! are resolved from a `&dyn Orderable` in a fixed priority order and the first match wins:
//!
//! 1. [`Shape::Scored`] if the value exposes [`Scored`] via [`Orderable::as_scored`].
//! 2. [`Shape::Ordinal`] if the value exposes [`Ordinal`] via [`Orderable::as_ordinal`].
//! 3. [`Shape::Bytes`] for `Vec<u8>`, `Box<[u8]>`, and `&'static [u8]`.
//! 4. [`Shape::Text`] for `String`, `Box<str>`, and `&'static str`.
//! 5. A numeric shape for primitive integers and floats.
//!
//! Any other value cannot be ordered and resolution fails with a [`ShapeError`].
//!
//! [`Ordinal`]: crate::Ordinal
//! [`Orderable::as_ordinal`]: crate::Orderable::as_ordinal
//! [`Orderable::as_scored`]: crate::Orderable::as_scored
//! [`Scored`]: crate::Scored

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
#[cfg(not(feature = "std"))]
use core::fmt::Formatter;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "std")]
use thiserror::Error;

use crate::direction::Direction;
use crate::Orderable;

pub(crate) trait Description {
    const DESCRIPTION: &'static str;
}

/// The value has no ordering capability and is not a supported primitive.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(
    feature = "std",
    error("cannot order type `{}`: {}", .type_name, ShapeError::DESCRIPTION)
)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShapeError {
    type_name: &'static str,
}

impl ShapeError {
    pub(crate) fn unsupported(value: &dyn Orderable) -> Self {
        ShapeError {
            type_name: value.type_name(),
        }
    }

    /// Name of the type that could not be ordered.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Description for ShapeError {
    const DESCRIPTION: &'static str =
        "no `Ordinal` or `Scored` capability and not a supported primitive";
}

#[cfg(not(feature = "std"))]
impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot order type `{}`: {}",
            self.type_name,
            ShapeError::DESCRIPTION
        )
    }
}

pub(crate) trait ExpectShape<T>: Sized {
    fn expect_shape(self) -> T;
}

impl<T> ExpectShape<T> for Result<T, ShapeError> {
    #[track_caller]
    fn expect_shape(self) -> T {
        match self {
            Ok(output) => output,
            Err(error) => {
                log::error!("{}", error);
                panic!("{}", error)
            }
        }
    }
}

/// Runtime category of an orderable value.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// A user type with a strict-less relation and a native score.
    Scored,
    /// A user type with a strict-less relation only. Its score is always zero.
    Ordinal,
    Bytes,
    Text,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl Shape {
    /// Resolves the shape of a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exposes no ordering capability and is not a supported
    /// primitive.
    pub fn of(value: &dyn Orderable) -> Result<Self, ShapeError> {
        if value.as_scored().is_some() {
            Ok(Shape::Scored)
        }
        else if value.as_ordinal().is_some() {
            Ok(Shape::Ordinal)
        }
        else if as_bytes(value).is_some() {
            Ok(Shape::Bytes)
        }
        else if as_text(value).is_some() {
            Ok(Shape::Text)
        }
        else {
            numeric(value.as_any()).ok_or_else(|| ShapeError::unsupported(value))
        }
    }

    /// Short name of the shape, such as `"bytes"` or `"i32"`.
    ///
    /// This is also the serialized form of the shape.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Scored => "scored",
            Shape::Ordinal => "ordinal",
            Shape::Bytes => "bytes",
            Shape::Text => "text",
            Shape::I8 => "i8",
            Shape::I16 => "i16",
            Shape::I32 => "i32",
            Shape::I64 => "i64",
            Shape::Isize => "isize",
            Shape::U8 => "u8",
            Shape::U16 => "u16",
            Shape::U32 => "u32",
            Shape::U64 => "u64",
            Shape::Usize => "usize",
            Shape::F32 => "f32",
            Shape::F64 => "f64",
        }
    }

    /// Returns `true` if distinct values of this shape never share a score.
    ///
    /// Sequences only score their leading bytes and [`Shape::Ordinal`] scores everything as
    /// zero. Numeric shapes are exact, though integers beyond 2<sup>53</sup> in magnitude lose
    /// precision. [`Shape::Scored`] is as exact as its implementation.
    pub fn is_exact(self) -> bool {
        !matches!(self, Shape::Ordinal | Shape::Bytes | Shape::Text)
    }

    /// Scores a value of this shape in the given direction.
    ///
    /// # Panics
    ///
    /// Panics if the value is not of this shape.
    pub fn score<D>(self, value: &dyn Orderable) -> f64
    where
        D: Direction,
    {
        (self.score_fn::<D>())(value)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub(crate) fn as_bytes(value: &dyn Orderable) -> Option<&[u8]> {
    let any = value.as_any();
    if let Some(bytes) = any.downcast_ref::<Vec<u8>>() {
        Some(bytes.as_slice())
    }
    else if let Some(bytes) = any.downcast_ref::<Box<[u8]>>() {
        Some(&bytes[..])
    }
    else {
        any.downcast_ref::<&'static [u8]>().copied()
    }
}

pub(crate) fn as_text(value: &dyn Orderable) -> Option<&str> {
    let any = value.as_any();
    if let Some(text) = any.downcast_ref::<String>() {
        Some(text.as_str())
    }
    else if let Some(text) = any.downcast_ref::<Box<str>>() {
        Some(&text[..])
    }
    else {
        any.downcast_ref::<&'static str>().copied()
    }
}

fn numeric(any: &dyn Any) -> Option<Shape> {
    macro_rules! numeric {
        ($any:ident => { $($t:ty => $shape:ident),* $(,)? }) => {
            $(
                if $any.is::<$t>() {
                    return Some(Shape::$shape);
                }
            )*
        };
    }
    numeric!(any => {
        i8 => I8,
        i16 => I16,
        i32 => I32,
        i64 => I64,
        isize => Isize,
        u8 => U8,
        u16 => U16,
        u32 => U32,
        u64 => U64,
        usize => Usize,
        f32 => F32,
        f64 => F64,
    });
    None
}
