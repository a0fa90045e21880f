//! Order directions.
//!
//! A [`Direction`] determines whether resolved functions order values in their natural order or
//! in reverse:
//!
//! | Direction      | `less(a, b)`             | Score       |
//! |----------------|--------------------------|-------------|
//! | [`Ascending`]  | `a` precedes `b`         | `score`     |
//! | [`Descending`] | `b` precedes `a`         | `-score`    |
//!
//! Directions are uninhabited types used only as type parameters, so the functions resolved for
//! each direction are distinct monomorphized functions that capture no state.
//!
//! # Examples
//!
//! ```rust
//! use ordinate::{Descending, Direction};
//!
//! assert!(Descending::less(&2, &1, |a, b| a < b));
//! assert_eq!(Descending::score(5.0), -5.0);
//! ```

use core::fmt::Debug;

use crate::sealed::Sealed;

pub trait Direction: Debug + Sealed {
    const NAME: &'static str;

    /// Applies the direction to a strict-less relation in natural order.
    fn less<T, F>(a: &T, b: &T, f: F) -> bool
    where
        T: ?Sized,
        F: FnOnce(&T, &T) -> bool;

    /// Applies the direction to a score in natural order.
    fn score(score: f64) -> f64;
}

/// Natural order.
#[derive(Debug)]
pub enum Ascending {}

impl Direction for Ascending {
    const NAME: &'static str = "ascending";

    fn less<T, F>(a: &T, b: &T, f: F) -> bool
    where
        T: ?Sized,
        F: FnOnce(&T, &T) -> bool,
    {
        f(a, b)
    }

    fn score(score: f64) -> f64 {
        score
    }
}

impl Sealed for Ascending {}

/// Reverse order.
///
/// Scores are negated, so a constant score of zero becomes `-0.0`, which compares equal to
/// `0.0`.
#[derive(Debug)]
pub enum Descending {}

impl Direction for Descending {
    const NAME: &'static str = "descending";

    fn less<T, F>(a: &T, b: &T, f: F) -> bool
    where
        T: ?Sized,
        F: FnOnce(&T, &T) -> bool,
    {
        f(b, a)
    }

    fn score(score: f64) -> f64 {
        -score
    }
}

impl Sealed for Descending {}
