use crate::{
    cursor::{Cursor, Step},
    join::Join,
    map::Map,
};

/// Value type produced by a [`Sequence`]
pub type Item<S> = <<S as Sequence>::Step as Step>::Item;

/// A restartable, lazily evaluated enumeration of values.
///
/// A sequence is an immutable descriptor. Iterating never consumes or mutates it: every call to
/// [`Sequence::begin`] produces a fresh, independent [`Cursor`] at the first position.
pub trait Sequence: Clone {
    type Step: Step;

    /// get a cursor at the first position, exhausted if the sequence is empty
    fn begin(&self) -> Cursor<Self::Step>;

    /// get the exhausted cursor marking the end of this sequence
    ///
    /// It is never dereferenced, and exists so that `begin() == end()` holds for empty sequences and
    /// a cursor compares equal to it once run off the end.
    fn end(&self) -> Cursor<Self::Step>;

    /// wrap this sequence so each value passes through `f`, see [`crate::map`]
    fn map<F, O>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Item<Self>) -> O + Clone,
    {
        crate::map::map(self, f)
    }

    /// the Cartesian product of `self` and `other`, see [`crate::join`]
    fn join<O: Sequence>(self, other: O) -> Join<(Self, O)> {
        crate::join::join((self, other))
    }
}
