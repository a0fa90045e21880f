//! Comparison and scoring functions that let generic ordered containers (heaps, sorted sets,
//! priority queues) order values of arbitrary type.
//!
//! Given a value behind a `&dyn Orderable`, this crate resolves the value's [`Shape`] and returns
//! a [`Less`] function that orders two values of that shape and either a [`Score`] function or
//! an immediate score. Scores are `f64` proxies for a value's rank and never contradict [`Less`]:
//! if `less(a, b)`, then `score(a) <= score(b)`.
//!
//! | Shape                    | Ordering                 | Score                         |
//! |--------------------------|--------------------------|-------------------------------|
//! | [`Scored`]               | [`Ordinal::less`]        | [`Scored::score`]             |
//! | [`Ordinal`]              | [`Ordinal::less`]        | `0.0`                         |
//! | `Vec<u8>`, `[u8]`, ...   | lexicographic            | first six bytes, big-endian   |
//! | `String`, `str`, ...     | lexicographic            | first six UTF-8 bytes         |
//! | integers and floats      | numeric (IEEE for float) | the value as `f64`            |
//!
//! Integers wider than 53 bits may lose precision when scored.
//!
//! # Examples
//!
//! Ordering primitive values:
//!
//! ```rust
//! let (less, score) = ordinate::resolve(&0u32);
//! assert!(less(&1u32, &2u32));
//! assert_eq!(score(&7u32), 7.0);
//!
//! let (less, score) = ordinate::resolve_reversed(&"");
//! assert!(less(&"b", &"a"));
//! assert!(score(&"b") < score(&"a"));
//! ```
//!
//! Ordering a user type by exposing the [`Scored`] capability:
//!
//! ```rust
//! use ordinate::{Orderable, Ordinal, Scored};
//!
//! struct Job {
//!     priority: u32,
//! }
//!
//! impl Orderable for Job {
//!     fn as_scored(&self) -> Option<&dyn Scored> {
//!         Some(self)
//!     }
//! }
//!
//! impl Ordinal for Job {
//!     fn less(&self, other: &dyn Orderable) -> bool {
//!         other
//!             .downcast_ref::<Job>()
//!             .map_or(false, |other| self.priority < other.priority)
//!     }
//! }
//!
//! impl Scored for Job {
//!     fn score(&self) -> f64 {
//!         f64::from(self.priority)
//!     }
//! }
//!
//! let (less, score) = ordinate::resolve_with_score_reversed(&Job { priority: 5 });
//! assert!(less(&Job { priority: 9 }, &Job { priority: 1 }));
//! assert_eq!(score, -5.0);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{self, Any};

pub mod direction;
mod dispatch;
mod score;
pub mod shape;

pub use crate::direction::{Ascending, Descending, Direction};
pub use crate::dispatch::{
    resolve, resolve_in, resolve_reversed, resolve_with_score, resolve_with_score_in,
    resolve_with_score_reversed, try_resolve, try_resolve_in, try_resolve_reversed,
    try_resolve_with_score, try_resolve_with_score_in, try_resolve_with_score_reversed,
};
pub use crate::score::score_bytes;
pub use crate::shape::{Shape, ShapeError};

mod sealed {
    pub trait Sealed {}
}

/// Strict-less relation over two values of the same shape.
///
/// Panics if the values are not of the shape the function was resolved for.
pub type Less = fn(&dyn Orderable, &dyn Orderable) -> bool;

/// Monotonic `f64` proxy for the rank of a value.
///
/// Panics if the value is not of the shape the function was resolved for.
pub type Score = fn(&dyn Orderable) -> f64;

/// Access to the dynamic type of a value.
///
/// This is implemented for all `'static` types and is used to recover concrete types from
/// `dyn Orderable`.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;
}

impl<T> AsAny for T
where
    T: Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// A value that can be given to the dispatcher.
///
/// Primitive integers, floats, byte sequences, and text implement this trait with no
/// capabilities. User types implement it and expose either the [`Scored`] or the [`Ordinal`]
/// capability. A type that exposes neither and is not a supported primitive cannot be ordered:
/// resolution fails with a [`ShapeError`].
pub trait Orderable: AsAny + 'static {
    fn as_scored(&self) -> Option<&dyn Scored> {
        None
    }

    fn as_ordinal(&self) -> Option<&dyn Ordinal> {
        None
    }
}

impl dyn Orderable {
    pub fn is<T>(&self) -> bool
    where
        T: Any,
    {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Any,
    {
        self.as_any().downcast_ref::<T>()
    }
}

/// Strict-less relation over values of a user type.
///
/// The relation must be deterministic, transitive, and irreflexive. `other` is always of the
/// shape resolved for `self` when used through this crate, so implementations typically downcast
/// it to `Self`.
pub trait Ordinal {
    fn less(&self, other: &dyn Orderable) -> bool;
}

/// Strict-less relation with a native score.
///
/// The score must agree with [`Ordinal::less`]: if `a.less(b)`, then
/// `a.score() <= b.score()`.
pub trait Scored: Ordinal {
    fn score(&self) -> f64;
}

macro_rules! impl_orderable {
    (primitive => $t:ty) => {
        impl Orderable for $t {}
    };
}
impl_orderable!(primitive => i8);
impl_orderable!(primitive => i16);
impl_orderable!(primitive => i32);
impl_orderable!(primitive => i64);
impl_orderable!(primitive => isize);
impl_orderable!(primitive => u8);
impl_orderable!(primitive => u16);
impl_orderable!(primitive => u32);
impl_orderable!(primitive => u64);
impl_orderable!(primitive => usize);
impl_orderable!(primitive => f32);
impl_orderable!(primitive => f64);
impl_orderable!(primitive => Vec<u8>);
impl_orderable!(primitive => Box<[u8]>);
impl_orderable!(primitive => &'static [u8]);
impl_orderable!(primitive => String);
impl_orderable!(primitive => Box<str>);
impl_orderable!(primitive => &'static str);
