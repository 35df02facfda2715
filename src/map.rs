use crate::{
    cursor::{Cursor, Step},
    sequence::{Item, Sequence},
};

/// Stepping logic of [`Map`] cursors
///
/// The cursor state is the inner sequence's state, moved and compared by the inner step. Nothing is
/// cached, `f` runs again on every dereference.
#[derive(Clone)]
pub struct MapStep<S, F> {
    inner: S,
    f: F,
}

impl<S, F, O> Step for MapStep<S, F>
where
    S: Step,
    F: Fn(S::Item) -> O + Clone,
{
    type State = S::State;
    type Item = O;

    fn get(&self, state: &Self::State) -> O {
        (self.f)(self.inner.get(state))
    }

    fn forward(&self, state: &mut Self::State) -> bool {
        self.inner.forward(state)
    }

    fn same(&self, lhs: &Self::State, rhs: &Self::State) -> bool {
        self.inner.same(lhs, rhs)
    }
}

/// A sequence passing every value of an inner sequence through `f`
///
/// `f` should be a pure function of its input. It is invoked anew each time a cursor is
/// dereferenced, so repeated reads of one position call it repeatedly.
#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, O> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(Item<S>) -> O + Clone,
{
    type Step = MapStep<S::Step, F>;

    fn begin(&self) -> Cursor<Self::Step> {
        let (state, inner) = self.inner.begin().into_parts();
        Cursor::new(
            state,
            MapStep {
                inner,
                f: self.f.clone(),
            },
        )
    }

    fn end(&self) -> Cursor<Self::Step> {
        let (_, inner) = self.inner.end().into_parts();
        Cursor::exhausted(MapStep {
            inner,
            f: self.f.clone(),
        })
    }
}

/// Sequence of `f` applied to each value of `sequence`
pub fn map<S, F, O>(sequence: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(Item<S>) -> O + Clone,
{
    Map::new(sequence, f)
}
