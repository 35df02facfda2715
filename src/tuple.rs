//! Adapters bridging the tuples produced by [`crate::join`] into other shapes, meant to be passed as
//! the transform of [`crate::map`].

/// A function callable with its arguments packed into a tuple
///
/// Implemented for every `Fn` of one to eight arguments, including tuple struct and enum variant
/// constructors.
pub trait Unpack<Args> {
    type Output;

    fn call_unpacked(&self, args: Args) -> Self::Output;
}

macro_rules! unpack {
    ($($arg:ident $val:ident),+) => {
        impl<Func, Out, $($arg),+> Unpack<($($arg,)+)> for Func
        where
            Func: Fn($($arg),+) -> Out,
        {
            type Output = Out;

            #[inline]
            fn call_unpacked(&self, ($($val,)+): ($($arg,)+)) -> Out {
                self($($val),+)
            }
        }
    };
}

unpack!(A a);
unpack!(A a, B b);
unpack!(A a, B b, C c);
unpack!(A a, B b, C c, D d);
unpack!(A a, B b, C c, D d, E e);
unpack!(A a, B b, C c, D d, E e, F f);
unpack!(A a, B b, C c, D d, E e, F f, G g);
unpack!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Turn an N-argument function into one taking a single N-tuple
///
/// ```
/// use rangekit::{Sequence, interval, join, tuple::unpack};
///
/// #[derive(Debug, PartialEq)]
/// struct Cell(u32, u32);
///
/// let cells = join((interval(0, 1), interval(0, 1))).map(unpack(Cell));
/// assert_eq!(cells.begin().last(), Some(Cell(1, 1)));
/// ```
pub fn unpack<F, Args>(f: F) -> impl Fn(Args) -> F::Output + Clone
where
    F: Unpack<Args> + Clone,
{
    move |args: Args| f.call_unpacked(args)
}

/// Numeric conversion with `as` semantics: truncating, saturating on float to int
pub trait Cast<T> {
    fn cast(self) -> T;
}

macro_rules! cast_from {
    ($from:ty => $($to:ty),*) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

macro_rules! cast_all {
    ($($from:ty),*) => {
        $(
            cast_from!($from => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };
}

cast_all!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// A tuple whose components can all be [`Cast`] to `T`
pub trait CastTuple<T> {
    /// The same arity tuple with every component of type `T`
    type Output;

    fn cast_all(self) -> Self::Output;
}

macro_rules! replace {
    ($_t:tt, $with:ty) => {
        $with
    };
}

macro_rules! cast_tuple {
    ($($arg:ident $val:ident),+) => {
        impl<T, $($arg: Cast<T>),+> CastTuple<T> for ($($arg,)+) {
            type Output = ($(replace!($arg, T),)+);

            #[inline]
            fn cast_all(self) -> Self::Output {
                let ($($val,)+) = self;
                ($($val.cast(),)+)
            }
        }
    };
}

cast_tuple!(A a);
cast_tuple!(A a, B b);
cast_tuple!(A a, B b, C c);
cast_tuple!(A a, B b, C c, D d);
cast_tuple!(A a, B b, C c, D d, E e);
cast_tuple!(A a, B b, C c, D d, E e, F f);
cast_tuple!(A a, B b, C c, D d, E e, F f, G g);
cast_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Element-wise cast of every tuple component to `T`
pub fn cast_tuple<T, Tup>() -> impl Fn(Tup) -> Tup::Output + Clone
where
    Tup: CastTuple<T>,
{
    |tuple: Tup| tuple.cast_all()
}

/// Cast a single value to `T`
pub fn cast<T, U>() -> impl Fn(U) -> T + Clone
where
    U: Cast<T>,
{
    |value: U| value.cast()
}

#[cfg(test)]
mod test {
    use crate::{
        Sequence, interval, join, map,
        tuple::{Cast, CastTuple, Unpack, cast, cast_tuple, unpack},
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Slot {
        row: usize,
        col: usize,
    }

    impl Slot {
        fn new(row: usize, col: usize) -> Self {
            Self { row, col }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Shape {
        Square(i32, i32, i32),
    }

    #[test]
    fn unpack_calls_positionally() {
        assert!(Slot::new.call_unpacked((1, 2)) == Slot { row: 1, col: 2 });
        assert!(i32::pow.call_unpacked((2, 5)) == 32);
    }

    #[test]
    fn unpack_builds_structs_from_join() {
        let slots = map(join((interval(0, 1), interval(0, 1))), unpack(Slot::new))
            .begin()
            .collect::<Vec<_>>();

        assert_eq!(
            slots,
            vec![
                Slot::new(0, 0),
                Slot::new(0, 1),
                Slot::new(1, 0),
                Slot::new(1, 1)
            ]
        );
    }

    #[test]
    fn unpack_enum_variants() {
        let squares = join((interval(0, 0), interval(1, 2), interval(3, 3)))
            .map(unpack(Shape::Square))
            .begin()
            .collect::<Vec<_>>();

        assert_eq!(squares, vec![Shape::Square(0, 1, 3), Shape::Square(0, 2, 3)]);
    }

    #[test]
    fn casts_components() {
        assert!(CastTuple::<f64>::cast_all((3u8, -1i64, 2.9f32)) == (3.0, -1.0, 2.9f32 as f64));
        assert!(Cast::<u8>::cast(300i32) == 44);

        let values = join((interval(0u8, 1), interval(-1i16, 0)))
            .map(cast_tuple::<i64, _>())
            .begin()
            .collect::<Vec<_>>();

        assert_eq!(values, vec![(0i64, -1i64), (0, 0), (1, -1), (1, 0)]);
    }

    #[test]
    fn casts_scalars() {
        let halves = interval(0u32, 2)
            .map(cast::<f64, _>())
            .map(|x| x / 2.0)
            .begin()
            .collect::<Vec<_>>();

        assert_eq!(halves, vec![0.0, 0.5, 1.0]);
    }
}
