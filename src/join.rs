use crate::{
    cursor::{Cursor, Step},
    log::logger,
    sequence::{Item, Sequence},
};

/// A tuple of sequences which can be enumerated as a Cartesian product.
///
/// Implemented for tuples of one to eight [`Sequence`]s. Dimension `0` is the most significant and
/// the last dimension varies fastest.
pub trait Components: Clone {
    /// One cursor per dimension
    type Cursors: Clone + PartialEq;

    /// Step of the dimension `0` sequence, whose end terminates the product
    type Head: Step;

    /// One value per dimension
    type Item;

    /// get the first cursor of every dimension
    fn starts(&self) -> Self::Cursors;

    /// get the end sentinel of dimension `0`
    fn head_end(&self) -> Cursor<Self::Head>;

    /// whether any dimension has no values at all
    fn any_empty(cursors: &Self::Cursors) -> bool;

    fn values(cursors: &Self::Cursors) -> Self::Item;

    /// move `cursors` to the next combination in odometer order, returning `false` once dimension
    /// `0` reaches `end`
    ///
    /// An exhausted dimension is rewound to the position of its entry in `start` and carries into the
    /// dimension before it. Only the position is copied, the dimension keeps its own stepping logic.
    fn odometer(cursors: &mut Self::Cursors, start: &Self::Cursors, end: &Cursor<Self::Head>)
    -> bool;
}

/// Stepping logic of [`Join`] cursors
///
/// Holds the captured start of every dimension, which wrapped dimensions reset to, and the end
/// sentinel of dimension `0`.
pub struct JoinStep<T: Components> {
    start: T::Cursors,
    end: Cursor<T::Head>,
}

impl<T: Components> Clone for JoinStep<T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl<T: Components> Step for JoinStep<T> {
    type State = T::Cursors;
    type Item = T::Item;

    fn get(&self, state: &Self::State) -> Self::Item {
        T::values(state)
    }

    fn forward(&self, state: &mut Self::State) -> bool {
        T::odometer(state, &self.start, &self.end)
    }

    fn same(&self, lhs: &Self::State, rhs: &Self::State) -> bool {
        lhs == rhs
    }
}

/// Cartesian product of a tuple of sequences, yielding tuples of their values.
///
/// Joining joins nests: `join((join((a, b)), c))` yields `((a, b), c)`, values are never
/// flattened.
pub struct Join<T: Components> {
    step: JoinStep<T>,
}

impl<T: Components> Clone for Join<T> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
        }
    }
}

impl<T: Components> Join<T> {
    pub fn new(sequences: T) -> Self {
        let start = sequences.starts();
        let end = sequences.head_end();

        if T::any_empty(&start) {
            logger().debug("Join has an empty component, no tuples will be produced");
        }

        Self {
            step: JoinStep { start, end },
        }
    }

    /// whether the product holds no tuples, i.e. any component sequence is empty
    pub fn is_empty(&self) -> bool {
        T::any_empty(&self.step.start)
    }
}

impl<T: Components> Sequence for Join<T> {
    type Step = JoinStep<T>;

    fn begin(&self) -> Cursor<Self::Step> {
        let start = (!self.is_empty()).then(|| self.step.start.clone());
        Cursor::new(start, self.step.clone())
    }

    fn end(&self) -> Cursor<Self::Step> {
        Cursor::exhausted(self.step.clone())
    }
}

macro_rules! components {
    ($head:ident $($seq:ident $idx:tt)* ; carry $($rev:tt)*) => {
        impl<$head: Sequence $(, $seq: Sequence)*> Components for ($head, $($seq,)*) {
            type Cursors = (Cursor<<$head as Sequence>::Step>, $(Cursor<<$seq as Sequence>::Step>,)*);
            type Head = <$head as Sequence>::Step;
            type Item = (Item<$head>, $(Item<$seq>,)*);

            fn starts(&self) -> Self::Cursors {
                (self.0.begin(), $(self.$idx.begin(),)*)
            }

            fn head_end(&self) -> Cursor<Self::Head> {
                self.0.end()
            }

            fn any_empty(cursors: &Self::Cursors) -> bool {
                cursors.0.is_exhausted() $(|| cursors.$idx.is_exhausted())*
            }

            fn values(cursors: &Self::Cursors) -> Self::Item {
                (cursors.0.get(), $(cursors.$idx.get(),)*)
            }

            // `start` goes unused for a single dimension, which never wraps
            #[allow(unused_variables)]
            fn odometer(
                cursors: &mut Self::Cursors,
                start: &Self::Cursors,
                end: &Cursor<Self::Head>,
            ) -> bool {
                $(
                    if cursors.$rev.forward() {
                        return true;
                    }
                    cursors.$rev.rewind_to(&start.$rev);
                )*

                cursors.0.forward();
                cursors.0 != *end
            }
        }
    };
}

components!(S0; carry);
components!(S0 S1 1; carry 1);
components!(S0 S1 1 S2 2; carry 2 1);
components!(S0 S1 1 S2 2 S3 3; carry 3 2 1);
components!(S0 S1 1 S2 2 S3 3 S4 4; carry 4 3 2 1);
components!(S0 S1 1 S2 2 S3 3 S4 4 S5 5; carry 5 4 3 2 1);
components!(S0 S1 1 S2 2 S3 3 S4 4 S5 5 S6 6; carry 6 5 4 3 2 1);
components!(S0 S1 1 S2 2 S3 3 S4 4 S5 5 S6 6 S7 7; carry 7 6 5 4 3 2 1);

/// Cartesian product of a tuple of sequences, enumerated in odometer order
///
/// ```
/// use rangekit::{Sequence, interval, join};
///
/// let pairs = join((interval(0, 1), interval(0, 2))).begin().collect::<Vec<_>>();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
/// ```
pub fn join<T: Components>(sequences: T) -> Join<T> {
    Join::new(sequences)
}

/// [`join`] taking each sequence as a separate argument
///
/// ```
/// use rangekit::{Sequence, interval};
///
/// let seq = rangekit::join!(interval(0, 1), interval(5, 5));
/// assert_eq!(seq.begin().count(), 2);
/// ```
#[macro_export]
macro_rules! join {
    ($($seq:expr),+ $(,)?) => {
        $crate::join::join(($($seq,)+))
    };
}
