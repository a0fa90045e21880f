//! Resolution of comparison and score functions.
//!
//! The entry points form a matrix of output and direction:
//!
//! | Output                    | Ascending                  | Descending                          |
//! |---------------------------|----------------------------|-------------------------------------|
//! | [`Less`] and [`Score`]    | [`resolve`]                | [`resolve_reversed`]                |
//! | [`Less`] and `f64`        | [`resolve_with_score`]     | [`resolve_with_score_reversed`]     |
//!
//! These functions panic if the value has no supported shape. Each has a `try_` counterpart that
//! returns a [`ShapeError`] instead and an `_in` counterpart that is generic over the
//! [`Direction`].
//!
//! [`Less`]: crate::Less
//! [`Score`]: crate::Score

use core::any::{self, Any};
use num_traits::AsPrimitive;

use crate::direction::{Ascending, Descending, Direction};
use crate::score::score_bytes;
use crate::shape::{self, ExpectShape as _, Shape, ShapeError};
use crate::{Less, Orderable, Ordinal, Score, Scored};

impl Shape {
    /// Gets the strict-less relation of this shape in the given direction.
    pub fn less_fn<D>(self) -> Less
    where
        D: Direction,
    {
        match self {
            Shape::Scored => scored_less::<D>,
            Shape::Ordinal => ordinal_less::<D>,
            Shape::Bytes => bytes_less::<D>,
            Shape::Text => text_less::<D>,
            Shape::I8 => numeric_less::<i8, D>,
            Shape::I16 => numeric_less::<i16, D>,
            Shape::I32 => numeric_less::<i32, D>,
            Shape::I64 => numeric_less::<i64, D>,
            Shape::Isize => numeric_less::<isize, D>,
            Shape::U8 => numeric_less::<u8, D>,
            Shape::U16 => numeric_less::<u16, D>,
            Shape::U32 => numeric_less::<u32, D>,
            Shape::U64 => numeric_less::<u64, D>,
            Shape::Usize => numeric_less::<usize, D>,
            Shape::F32 => numeric_less::<f32, D>,
            Shape::F64 => numeric_less::<f64, D>,
        }
    }

    /// Gets the score function of this shape in the given direction.
    pub fn score_fn<D>(self) -> Score
    where
        D: Direction,
    {
        match self {
            Shape::Scored => scored_score::<D>,
            Shape::Ordinal => ordinal_score::<D>,
            Shape::Bytes => bytes_score::<D>,
            Shape::Text => text_score::<D>,
            Shape::I8 => numeric_score::<i8, D>,
            Shape::I16 => numeric_score::<i16, D>,
            Shape::I32 => numeric_score::<i32, D>,
            Shape::I64 => numeric_score::<i64, D>,
            Shape::Isize => numeric_score::<isize, D>,
            Shape::U8 => numeric_score::<u8, D>,
            Shape::U16 => numeric_score::<u16, D>,
            Shape::U32 => numeric_score::<u32, D>,
            Shape::U64 => numeric_score::<u64, D>,
            Shape::Usize => numeric_score::<usize, D>,
            Shape::F32 => numeric_score::<f32, D>,
            Shape::F64 => numeric_score::<f64, D>,
        }
    }
}

/// Resolves comparison and score functions for the shape of `sample`.
///
/// `sample` is only used to determine the shape. The returned functions can be used with any
/// value of that shape.
///
/// # Errors
///
/// Returns an error if `sample` has no supported shape.
pub fn try_resolve_in<D>(sample: &dyn Orderable) -> Result<(Less, Score), ShapeError>
where
    D: Direction,
{
    let shape = Shape::of(sample)?;
    log::trace!(
        "resolved {} functions for shape `{}` of type `{}`",
        D::NAME,
        shape,
        sample.type_name(),
    );
    Ok((shape.less_fn::<D>(), shape.score_fn::<D>()))
}

/// Resolves a comparison function for the shape of `value` and the score of `value`.
///
/// # Errors
///
/// Returns an error if `value` has no supported shape.
pub fn try_resolve_with_score_in<D>(value: &dyn Orderable) -> Result<(Less, f64), ShapeError>
where
    D: Direction,
{
    let shape = Shape::of(value)?;
    log::trace!(
        "resolved {} function for shape `{}` of type `{}`",
        D::NAME,
        shape,
        value.type_name(),
    );
    Ok((shape.less_fn::<D>(), shape.score::<D>(value)))
}

/// # Panics
///
/// Panics if `sample` has no supported shape.
#[track_caller]
pub fn resolve_in<D>(sample: &dyn Orderable) -> (Less, Score)
where
    D: Direction,
{
    try_resolve_in::<D>(sample).expect_shape()
}

/// # Panics
///
/// Panics if `value` has no supported shape.
#[track_caller]
pub fn resolve_with_score_in<D>(value: &dyn Orderable) -> (Less, f64)
where
    D: Direction,
{
    try_resolve_with_score_in::<D>(value).expect_shape()
}

/// Fallible form of [`resolve`].
///
/// # Errors
///
/// Returns an error if `sample` has no supported shape.
pub fn try_resolve(sample: &dyn Orderable) -> Result<(Less, Score), ShapeError> {
    try_resolve_in::<Ascending>(sample)
}

/// Fallible form of [`resolve_reversed`].
///
/// # Errors
///
/// Returns an error if `sample` has no supported shape.
pub fn try_resolve_reversed(sample: &dyn Orderable) -> Result<(Less, Score), ShapeError> {
    try_resolve_in::<Descending>(sample)
}

/// Fallible form of [`resolve_with_score`].
///
/// # Errors
///
/// Returns an error if `value` has no supported shape.
pub fn try_resolve_with_score(value: &dyn Orderable) -> Result<(Less, f64), ShapeError> {
    try_resolve_with_score_in::<Ascending>(value)
}

/// Fallible form of [`resolve_with_score_reversed`].
///
/// # Errors
///
/// Returns an error if `value` has no supported shape.
pub fn try_resolve_with_score_reversed(value: &dyn Orderable) -> Result<(Less, f64), ShapeError> {
    try_resolve_with_score_in::<Descending>(value)
}

/// Resolves functions that order values of the shape of `sample` in increasing order.
///
/// If a container cannot conveniently keep the score function, consider
/// [`resolve_with_score`] instead.
///
/// # Panics
///
/// Panics if `sample` has no supported shape.
#[track_caller]
pub fn resolve(sample: &dyn Orderable) -> (Less, Score) {
    resolve_in::<Ascending>(sample)
}

/// Like [`resolve`], but orders values in decreasing order.
///
/// # Panics
///
/// Panics if `sample` has no supported shape.
#[track_caller]
pub fn resolve_reversed(sample: &dyn Orderable) -> (Less, Score) {
    resolve_in::<Descending>(sample)
}

/// Resolves a function that orders values of the shape of `value` in increasing order along with
/// the score of `value`.
///
/// # Panics
///
/// Panics if `value` has no supported shape.
#[track_caller]
pub fn resolve_with_score(value: &dyn Orderable) -> (Less, f64) {
    resolve_with_score_in::<Ascending>(value)
}

/// Like [`resolve_with_score`], but orders values in decreasing order and negates the score.
///
/// # Panics
///
/// Panics if `value` has no supported shape.
#[track_caller]
pub fn resolve_with_score_reversed(value: &dyn Orderable) -> (Less, f64) {
    resolve_with_score_in::<Descending>(value)
}

#[cold]
#[track_caller]
fn mismatch(shape: Shape, value: &dyn Orderable) -> ! {
    panic!(
        "expected a value of shape `{}`, found `{}`",
        shape,
        value.type_name()
    )
}

#[track_caller]
fn scored(value: &dyn Orderable) -> &dyn Scored {
    match value.as_scored() {
        Some(scored) => scored,
        None => mismatch(Shape::Scored, value),
    }
}

#[track_caller]
fn ordinal(value: &dyn Orderable) -> &dyn Ordinal {
    match value.as_ordinal() {
        Some(ordinal) => ordinal,
        None => mismatch(Shape::Ordinal, value),
    }
}

#[track_caller]
fn bytes(value: &dyn Orderable) -> &[u8] {
    match shape::as_bytes(value) {
        Some(bytes) => bytes,
        None => mismatch(Shape::Bytes, value),
    }
}

#[track_caller]
fn text(value: &dyn Orderable) -> &str {
    match shape::as_text(value) {
        Some(text) => text,
        None => mismatch(Shape::Text, value),
    }
}

#[track_caller]
fn numeric<T>(value: &dyn Orderable) -> T
where
    T: Any + Copy,
{
    match value.as_any().downcast_ref::<T>() {
        Some(number) => *number,
        None => panic!(
            "expected a value of type `{}`, found `{}`",
            any::type_name::<T>(),
            value.type_name()
        ),
    }
}

fn scored_less<D>(a: &dyn Orderable, b: &dyn Orderable) -> bool
where
    D: Direction,
{
    D::less(a, b, |a, b| {
        let a = scored(a);
        scored(b);
        a.less(b)
    })
}

fn scored_score<D>(value: &dyn Orderable) -> f64
where
    D: Direction,
{
    D::score(scored(value).score())
}

fn ordinal_less<D>(a: &dyn Orderable, b: &dyn Orderable) -> bool
where
    D: Direction,
{
    D::less(a, b, |a, b| {
        let a = ordinal(a);
        ordinal(b);
        a.less(b)
    })
}

// Values with only a strict-less relation all share the same score.
fn ordinal_score<D>(value: &dyn Orderable) -> f64
where
    D: Direction,
{
    ordinal(value);
    D::score(0.0)
}

fn bytes_less<D>(a: &dyn Orderable, b: &dyn Orderable) -> bool
where
    D: Direction,
{
    D::less(a, b, |a, b| bytes(a) < bytes(b))
}

fn bytes_score<D>(value: &dyn Orderable) -> f64
where
    D: Direction,
{
    D::score(score_bytes(bytes(value)))
}

fn text_less<D>(a: &dyn Orderable, b: &dyn Orderable) -> bool
where
    D: Direction,
{
    D::less(a, b, |a, b| text(a) < text(b))
}

fn text_score<D>(value: &dyn Orderable) -> f64
where
    D: Direction,
{
    D::score(score_bytes(text(value).as_bytes()))
}

fn numeric_less<T, D>(a: &dyn Orderable, b: &dyn Orderable) -> bool
where
    T: Any + Copy + PartialOrd,
    D: Direction,
{
    D::less(a, b, |a, b| numeric::<T>(a) < numeric::<T>(b))
}

fn numeric_score<T, D>(value: &dyn Orderable) -> f64
where
    T: Any + AsPrimitive<f64>,
    D: Direction,
{
    D::score(numeric::<T>(value).as_())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::direction::Descending;
    use crate::dispatch::{
        resolve, resolve_reversed, resolve_with_score, resolve_with_score_reversed, try_resolve,
        try_resolve_reversed, try_resolve_with_score, try_resolve_with_score_reversed,
    };
    use crate::shape::Shape;
    use crate::{AsAny, Orderable, Ordinal, Scored};

    // Has only a strict-less relation, so all values tie on score.
    #[derive(Debug)]
    struct Rank(i32);

    impl Orderable for Rank {
        fn as_ordinal(&self) -> Option<&dyn Ordinal> {
            Some(self)
        }
    }

    impl Ordinal for Rank {
        fn less(&self, other: &dyn Orderable) -> bool {
            other
                .downcast_ref::<Rank>()
                .map_or(false, |other| self.0 < other.0)
        }
    }

    #[derive(Debug)]
    struct Priority(i32);

    impl Orderable for Priority {
        fn as_scored(&self) -> Option<&dyn Scored> {
            Some(self)
        }
    }

    impl Ordinal for Priority {
        fn less(&self, other: &dyn Orderable) -> bool {
            other
                .downcast_ref::<Priority>()
                .map_or(false, |other| self.0 < other.0)
        }
    }

    impl Scored for Priority {
        fn score(&self) -> f64 {
            f64::from(self.0)
        }
    }

    struct Point {
        _x: i32,
        _y: i32,
    }

    impl Orderable for Point {}

    type Pair = (Box<dyn Orderable>, Box<dyn Orderable>);

    fn pair<T>(a: T, b: T) -> Pair
    where
        T: Orderable + 'static,
    {
        (Box::new(a), Box::new(b))
    }

    // Pairs `(a, b)` where `a` is strictly less than `b`.
    fn pairs() -> Vec<Pair> {
        let low: &'static [u8] = b"abcdef";
        let high: &'static [u8] = b"abcdeg";
        vec![
            pair(Rank(0), Rank(1)),
            pair(Priority(0), Priority(1)),
            pair(b"abcdef".to_vec(), b"abcdeg".to_vec()),
            pair(Box::<[u8]>::from(low), Box::<[u8]>::from(high)),
            pair(low, high),
            pair(String::from("abcdef"), String::from("abcdei")),
            pair(Box::<str>::from("abcdef"), Box::<str>::from("abcdei")),
            pair("abcdef", "abcdei"),
            pair(0i8, 1i8),
            pair(0i16, 1i16),
            pair(0i32, 1i32),
            pair(0i64, 1i64),
            pair(0isize, 1isize),
            pair(0u8, 1u8),
            pair(0u16, 1u16),
            pair(0u32, 1u32),
            pair(0u64, 1u64),
            pair(0usize, 1usize),
            pair(0f32, 1f32),
            pair(0f64, 1f64),
        ]
    }

    fn ties(value: &dyn Orderable) -> bool {
        Shape::of(value) == Ok(Shape::Ordinal)
    }

    #[test]
    fn resolve_orders_pairs() {
        for (a, b) in pairs().iter() {
            let (a, b) = (&**a, &**b);
            let name = a.type_name();
            let (less, score) = resolve(a);
            assert!(!less(b, a), "{}", name);
            assert!(!less(a, a), "{}", name);
            assert!(less(a, b), "{}", name);
            assert_eq!(score(a), score(a), "{}", name);
            if ties(a) {
                assert_eq!(score(a), score(b), "{}", name);
            }
            else {
                assert!(score(a) < score(b), "{}", name);
            }
        }
    }

    #[test]
    fn resolve_reversed_orders_pairs() {
        for (b, a) in pairs().iter() {
            let (a, b) = (&**a, &**b);
            let name = a.type_name();
            let (less, score) = resolve_reversed(a);
            assert!(!less(b, a), "{}", name);
            assert!(!less(a, a), "{}", name);
            assert!(less(a, b), "{}", name);
            assert_eq!(score(a), score(a), "{}", name);
            if ties(a) {
                assert_eq!(score(a), score(b), "{}", name);
            }
            else {
                assert!(score(a) < score(b), "{}", name);
            }
        }
    }

    #[test]
    fn resolve_with_score_orders_pairs() {
        for (a, b) in pairs().iter() {
            let (a, b) = (&**a, &**b);
            let name = a.type_name();
            let (less, a_score) = resolve_with_score(a);
            let (other, b_score) = resolve_with_score(b);
            for less in [less, other] {
                assert!(!less(b, a), "{}", name);
                assert!(!less(a, a), "{}", name);
                assert!(less(a, b), "{}", name);
            }
            if ties(a) {
                assert_eq!(a_score, b_score, "{}", name);
            }
            else {
                assert!(a_score < b_score, "{}", name);
            }
        }
    }

    #[test]
    fn resolve_with_score_reversed_orders_pairs() {
        for (b, a) in pairs().iter() {
            let (a, b) = (&**a, &**b);
            let name = a.type_name();
            let (less, a_score) = resolve_with_score_reversed(a);
            let (other, b_score) = resolve_with_score_reversed(b);
            for less in [less, other] {
                assert!(!less(b, a), "{}", name);
                assert!(!less(a, a), "{}", name);
                assert!(less(a, b), "{}", name);
            }
            if ties(a) {
                assert_eq!(a_score, b_score, "{}", name);
            }
            else {
                assert!(a_score < b_score, "{}", name);
            }
        }
    }

    #[test]
    fn immediate_score_agrees_with_score_fn() {
        for (a, _) in pairs().iter() {
            let a = &**a;
            let (_, score) = resolve(a);
            let (_, immediate) = resolve_with_score(a);
            assert_eq!(score(a), immediate, "{}", a.type_name());
            let (_, score) = resolve_reversed(a);
            let (_, immediate) = resolve_with_score_reversed(a);
            assert_eq!(score(a), immediate, "{}", a.type_name());
        }
    }

    #[test]
    fn integer_scores() {
        let (less, score) = resolve(&0u16);
        assert!(less(&0u16, &1u16));
        assert_eq!(score(&0u16), 0.0);
        assert_eq!(score(&1u16), 1.0);

        let (_, score) = resolve(&0i64);
        assert_eq!(score(&-3i64), -3.0);
        assert_eq!(score(&(1i64 << 53)), 9_007_199_254_740_992.0);
    }

    #[test]
    fn sequence_scores_differ_at_sixth_byte() {
        let (_, low) = resolve_with_score(&b"abcdef".to_vec());
        let (_, high) = resolve_with_score(&b"abcdeg".to_vec());
        assert_eq!(high - low, 1.0);

        let (_, low) = resolve_with_score(&"abcdef");
        let (_, high) = resolve_with_score(&"abcdei");
        assert_eq!(high - low, 3.0);
    }

    #[test]
    fn sequences_tie_beyond_sixth_byte() {
        let (less, score) = resolve(&"");
        assert!(less(&"abcdefa", &"abcdefb"));
        assert_eq!(score(&"abcdefa"), score(&"abcdefb"));
    }

    #[test]
    fn byte_representations_compare() {
        let (less, score) = resolve(&Vec::<u8>::new());
        let boxed = Box::<[u8]>::from(&b"abd"[..]);
        assert!(less(&b"abc".to_vec(), &boxed));
        assert_eq!(score(&b"abd".to_vec()), score(&boxed));
    }

    #[test]
    fn text_compares_by_code_point() {
        let (less, _) = resolve(&"");
        assert!(less(&"Z", &"a"));
        assert!(less(&"a", &"é"));
        assert!(less(&String::from("ab"), &"abc"));
    }

    #[test]
    fn ordinal_scores_zero() {
        let (less, score) = resolve(&Rank(0));
        assert!(less(&Rank(3), &Rank(4)));
        assert_eq!(score(&Rank(3)), 0.0);
        assert_eq!(score(&Rank(4)), 0.0);

        let (_, score) = resolve_with_score_reversed(&Rank(9));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn scored_reversed_negates_score() {
        let (_, score) = resolve_with_score(&Priority(5));
        assert_eq!(score, 5.0);
        let (_, score) = resolve_with_score_reversed(&Priority(5));
        assert_eq!(score, -5.0);
        let (_, score) = resolve_reversed(&Priority(0));
        assert_eq!(score(&Priority(5)), -5.0);
    }

    #[test]
    fn float_uses_ieee_order() {
        let (less, _) = resolve(&0f64);
        assert!(less(&f64::NEG_INFINITY, &-1.0f64));
        assert!(!less(&f64::NAN, &0.0f64));
        assert!(!less(&0.0f64, &f64::NAN));
        assert!(!less(&-0.0f64, &0.0f64));
        let (less, _) = resolve_reversed(&0f64);
        assert!(!less(&f64::NAN, &0.0f64));
    }

    #[test]
    fn shape_rebuilds_functions() {
        let shape = Shape::of(&0i32).unwrap();
        let less = shape.less_fn::<Descending>();
        let score = shape.score_fn::<Descending>();
        assert!(less(&2i32, &1i32));
        assert_eq!(score(&2i32), -2.0);
        assert_eq!(shape.score::<Descending>(&2i32), -2.0);
    }

    #[test]
    fn try_resolve_unsupported() {
        let point = Point { _x: 0, _y: 0 };
        for error in [
            try_resolve(&point).err(),
            try_resolve_reversed(&point).err(),
        ] {
            assert!(error.unwrap().type_name().ends_with("Point"));
        }
        for error in [
            try_resolve_with_score(&point).err(),
            try_resolve_with_score_reversed(&point).err(),
        ] {
            assert!(error.unwrap().type_name().ends_with("Point"));
        }
    }

    #[test]
    fn try_resolve_supported() {
        assert!(try_resolve(&1u8).is_ok());
        let (less, score) = try_resolve_with_score_reversed(&1u8).unwrap();
        assert!(less(&2u8, &1u8));
        assert_eq!(score, -1.0);
    }

    #[test]
    #[should_panic(expected = "Point")]
    fn resolve_unsupported_panics() {
        let _ = resolve(&Point { _x: 0, _y: 0 });
    }

    #[test]
    #[should_panic(expected = "cannot order type")]
    fn resolve_with_score_unsupported_panics() {
        let _ = resolve_with_score_reversed(&Point { _x: 0, _y: 0 });
    }

    #[test]
    #[should_panic(expected = "expected a value of type `i32`, found `i64`")]
    fn mismatched_numeric_panics() {
        let (less, _) = resolve(&0i32);
        let _ = less(&0i64, &1i64);
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `text`")]
    fn mismatched_sequence_panics() {
        let (_, score) = resolve(&"");
        let _ = score(&b"bytes".to_vec());
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `scored`, found `u8`")]
    fn mismatched_scored_second_operand_panics() {
        let (less, _) = resolve(&Priority(0));
        let _ = less(&Priority(0), &7u8);
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `scored`, found `u8`")]
    fn mismatched_scored_first_operand_panics() {
        let (less, _) = resolve(&Priority(0));
        let _ = less(&7u8, &Priority(0));
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `scored`, found `u8`")]
    fn mismatched_scored_reversed_panics() {
        let (less, _) = resolve_reversed(&Priority(0));
        let _ = less(&Priority(1), &7u8);
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `ordinal`, found `u8`")]
    fn mismatched_ordinal_second_operand_panics() {
        let (less, _) = resolve(&Rank(0));
        let _ = less(&Rank(0), &7u8);
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `ordinal`, found `u8`")]
    fn mismatched_ordinal_reversed_first_operand_panics() {
        let (less, _) = resolve_reversed(&Rank(0));
        let _ = less(&7u8, &Rank(1));
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `ordinal`, found `u8`")]
    fn mismatched_ordinal_reversed_second_operand_panics() {
        let (less, _) = resolve_reversed(&Rank(0));
        let _ = less(&Rank(1), &7u8);
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `ordinal`, found `&str`")]
    fn mismatched_ordinal_score_panics() {
        let (_, score) = resolve(&Rank(0));
        let _ = score(&"not a rank");
    }

    #[test]
    #[should_panic(expected = "expected a value of shape `scored`, found `&str`")]
    fn mismatched_scored_score_panics() {
        let (_, score) = resolve_reversed(&Priority(0));
        let _ = score(&"not a priority");
    }

    #[test]
    fn functions_are_shareable() {
        fn assert_send_sync<T>(_: &T)
        where
            T: Send + Sync,
        {
        }

        let (less, score) = resolve(&0u32);
        assert_send_sync(&less);
        assert_send_sync(&score);
    }
}
