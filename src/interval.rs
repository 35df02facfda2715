use std::{fmt, str::FromStr};

use crate::{
    cursor::{Cursor, Step, StepBack},
    error::RangeError,
    log::{LogLevel, logger},
    sequence::Sequence,
};

/// Numeric value an [`Interval`] can step over
///
/// Stepping is checked: integer overflow ends the sequence instead of wrapping around.
pub trait Scalar: Copy + PartialOrd + fmt::Debug {
    const ZERO: Self;
    const ONE: Self;

    /// `self + by`, or `None` if the result does not fit
    fn step_up(self, by: Self) -> Option<Self>;

    /// `self - by`, or `None` if the result does not fit
    fn step_down(self, by: Self) -> Option<Self>;
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn step_up(self, by: Self) -> Option<Self> {
                    self.checked_add(by)
                }

                #[inline]
                fn step_down(self, by: Self) -> Option<Self> {
                    self.checked_sub(by)
                }
            }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn step_up(self, by: Self) -> Option<Self> {
                    Some(self + by)
                }

                #[inline]
                fn step_down(self, by: Self) -> Option<Self> {
                    Some(self - by)
                }
            }
        )*
    };
}

integer_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_scalar!(f32, f64);

/// Inclusive arithmetic progression `from, from + step, ...` up to and including `to`.
///
/// Empty when `from > to`. A non-positive `step` is accepted as given and produces a sequence that
/// never reaches `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    from: T,
    to: T,
    step: T,
}

/// Stepping logic of [`Interval`] cursors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalStep<T> {
    from: T,
    to: T,
    step: T,
}

impl<T: Scalar> Interval<T> {
    /// `from..=to` with a step of one
    pub fn new(from: T, to: T) -> Self {
        Self::with_step(from, to, T::ONE)
    }

    pub fn with_step(from: T, to: T, step: T) -> Self {
        if !(step > T::ZERO) {
            logger().log(
                LogLevel::Warn,
                format_args!("Interval {from:?}..={to:?} built with non-positive step {step:?}"),
            );
        }

        Self { from, to, step }
    }

    /// an interval holding no values
    pub fn empty() -> Self {
        Self {
            from: T::ONE,
            to: T::ZERO,
            step: T::ONE,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.from <= self.to)
    }

    fn stepper(&self) -> IntervalStep<T> {
        IntervalStep {
            from: self.from,
            to: self.to,
            step: self.step,
        }
    }
}

impl<T: Scalar> Step for IntervalStep<T> {
    type State = T;
    type Item = T;

    fn get(&self, state: &T) -> T {
        *state
    }

    fn forward(&self, state: &mut T) -> bool {
        match state.step_up(self.step) {
            Some(next) if next <= self.to => {
                *state = next;
                true
            }
            _ => false,
        }
    }

    fn same(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

impl<T: Scalar> StepBack for IntervalStep<T> {
    fn backward(&self, state: &mut T) -> bool {
        match state.step_down(self.step) {
            Some(prev) if prev >= self.from => {
                *state = prev;
                true
            }
            _ => false,
        }
    }
}

impl<T: Scalar> Sequence for Interval<T> {
    type Step = IntervalStep<T>;

    fn begin(&self) -> Cursor<Self::Step> {
        Cursor::new((!self.is_empty()).then_some(self.from), self.stepper())
    }

    fn end(&self) -> Cursor<Self::Step> {
        Cursor::exhausted(self.stepper())
    }
}

/// Formats as `from..=to`, with a `:step` suffix when the step is not one
impl<T: Scalar + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)?;
        if self.step != T::ONE {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

/// Parses `from..=to` or `from..=to:step`
impl<T: Scalar + FromStr> FromStr for Interval<T> {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (bounds, step) = match s.split_once(':') {
            Some((bounds, step)) => (bounds, Some(step)),
            None => (s, None),
        };

        let (from, to) = bounds
            .split_once("..=")
            .ok_or_else(|| RangeError::Parse(s.into(), "expected `from..=to`"))?;

        let from = from
            .trim()
            .parse::<T>()
            .map_err(|_| RangeError::Parse(s.into(), "invalid lower bound"))?;

        let to = to
            .trim()
            .parse::<T>()
            .map_err(|_| RangeError::Parse(s.into(), "invalid upper bound"))?;

        match step {
            Some(step) => {
                let step = step
                    .trim()
                    .parse::<T>()
                    .map_err(|_| RangeError::Parse(s.into(), "invalid step"))?;
                Ok(Self::with_step(from, to, step))
            }
            None => Ok(Self::new(from, to)),
        }
    }
}

/// `from..=to` with a step of one
pub fn interval<T: Scalar>(from: T, to: T) -> Interval<T> {
    Interval::new(from, to)
}

/// `from..=to` advancing by `step`
pub fn interval_by<T: Scalar>(from: T, to: T, step: T) -> Interval<T> {
    Interval::with_step(from, to, step)
}

/// Every valid index of `collection`, i.e. `0..=len - 1`
///
/// Pass the collection by reference, any collection whose borrowed iterator knows its length works.
/// An empty collection gives an empty interval.
pub fn indexes<C>(collection: C) -> Interval<usize>
where
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
{
    indexes_of(collection.into_iter().len())
}

/// Every valid index of a collection holding `len` elements
pub fn indexes_of(len: usize) -> Interval<usize> {
    match len.checked_sub(1) {
        Some(last) => Interval::new(0, last),
        None => Interval::empty(),
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::{
        Sequence,
        interval::{Interval, indexes, indexes_of, interval, interval_by},
    };

    #[test]
    fn yields_every_value() {
        for from in -3..3 {
            for to in from..5 {
                let values = interval(from, to).begin().collect::<Vec<i32>>();
                assert!(values.len() == (to - from + 1) as usize, "Wrong count for {from}..={to}");
                assert_eq!(values, (from..=to).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn reversed_bounds_are_empty() {
        let seq = interval(5, 3);

        assert!(seq.is_empty());
        assert!(seq.begin() == seq.end(), "begin() was not end() on an empty interval");
        assert_eq!(seq.begin().count(), 0);
    }

    #[test]
    fn single_value() {
        let mut cursor = interval(7u8, 7).begin();
        assert!(cursor.get() == 7);
        assert!(cursor.advance().is_none());
    }

    #[test]
    fn steps_stop_at_or_before_upper_bound() {
        let values = interval_by(0, 10, 3).begin().collect::<Vec<_>>();
        assert_eq!(values, vec![0, 3, 6, 9]);

        let values = interval_by(0, 9, 3).begin().collect::<Vec<_>>();
        assert_eq!(values, vec![0, 3, 6, 9]);
    }

    #[test]
    fn floats_step() {
        let values = interval_by(0.0, 2.0, 0.5).begin().collect::<Vec<f64>>();
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn upper_bound_at_type_max_terminates() {
        assert_eq!(interval(250u8, u8::MAX).begin().count(), 6);
        assert_eq!(interval(i64::MAX - 1, i64::MAX).begin().count(), 2);
    }

    #[test]
    fn retreats_to_lower_bound() {
        let mut cursor = interval(1, 3).begin().shifted(2);
        assert!(cursor.get() == 3);
        assert!(cursor.retreat() == Some(2));
        assert!(cursor.retreat() == Some(1));
        assert!(cursor.retreat().is_none());
        assert!(cursor.is_exhausted());

        let mut cursor = interval(0u32, 0).begin();
        assert!(cursor.retreat().is_none(), "Retreated below zero");
    }

    #[test]
    #[should_panic(expected = "retreat")]
    fn retreat_from_end_panics() {
        interval(1, 3).end().retreat();
    }

    #[test]
    fn zero_step_is_kept_as_given() {
        let seq = interval_by(0, 3, 0);
        assert!(!seq.is_empty());

        let mut cursor = seq.begin();
        assert!(cursor.get() == 0);
        assert!(cursor.advance() == Some(0), "Zero step was corrected");
        assert_eq!(seq.begin().take(5).count(), 5);
    }

    #[test]
    fn negative_step_walks_down_to_the_type_bound() {
        let values = interval_by(0i8, 3, -1).begin().collect::<Vec<_>>();

        assert!(values.len() == 129);
        assert!(values[..3] == [0, -1, -2]);
        assert!(values.last() == Some(&i8::MIN));
    }

    #[test]
    fn cursors_are_independent() {
        let seq = interval(0, 4);
        let mut a = seq.begin();
        let mut b = seq.begin();

        a.advance();
        a.advance();

        assert!(a.get() == 2);
        assert!(b.get() == 0);
        assert!(b.advance() == Some(1));
        assert!(a.get() == 2);
    }

    #[test]
    fn end_cursors_of_different_intervals_are_equal() {
        let mut ran_out = interval(0, 1).begin();
        while ran_out.forward() {}

        assert!(ran_out == interval(0, 1).end());
        assert!(ran_out == interval(10, 20).end());
        assert!(interval(3, 3).begin() == interval(1, 9).begin().shifted(2));
    }

    #[test]
    fn indexes_of_collections() {
        let empty: Vec<String> = Vec::new();
        assert!(indexes(&empty).begin().next().is_none());
        assert!(indexes(&empty).is_empty());

        let values = indexes(&[10, 20, 30]).begin().collect::<Vec<_>>();
        assert_eq!(values, vec![0, 1, 2]);

        let map = HashMap::from([("a", 1), ("b", 2)]);
        assert_eq!(indexes(&map).begin().count(), 2);

        assert!(indexes_of(0) == Interval::empty());
        assert_eq!(indexes_of(1).begin().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn parses() {
        let plain = "2..=5".parse::<Interval<i32>>().unwrap();
        assert!(plain == interval(2, 5));
        assert_eq!(plain.to_string(), "2..=5");

        let stepped = " -4 ..= 4 : 2".parse::<Interval<i32>>().unwrap();
        assert_eq!(stepped.begin().collect::<Vec<_>>(), vec![-4, -2, 0, 2, 4]);
        assert_eq!(stepped.to_string(), "-4..=4:2");

        assert!("2..5".parse::<Interval<i32>>().is_err());
        assert!("a..=5".parse::<Interval<i32>>().is_err());
        assert!("1..=5:x".parse::<Interval<i32>>().is_err());
    }
}
