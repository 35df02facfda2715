use std::{fmt, iter::FusedIterator};

use crate::error::RangeError;

/// Sequence specific stepping logic carried by every [`Cursor`] a sequence hands out.
///
/// A [`Step`] never stores a position itself. The owning [`Cursor`] keeps the current `State` and
/// passes it back in on every call, so one step object describes every position of a sequence and
/// cloning a cursor never shares mutable data with the original.
pub trait Step: Clone {
    /// Position data held while the cursor is not exhausted
    type State: Clone;

    /// Value produced when a cursor is dereferenced
    type Item;

    /// resolve the value at `state`
    ///
    /// No caching happens above this call, every [`Cursor::get`] lands here again
    fn get(&self, state: &Self::State) -> Self::Item;

    /// move `state` to the position immediately following it, returning `false` if `state` was the
    /// final position of the sequence
    ///
    /// `state` is discarded by the owning [`Cursor`] once this returns `false`
    fn forward(&self, state: &mut Self::State) -> bool;

    /// compare two positions by value
    ///
    /// Only ever called with two held states, exhaustion is compared by [`Cursor`] itself
    fn same(&self, lhs: &Self::State, rhs: &Self::State) -> bool;
}

/// [`Step`] which can also walk towards the start of its sequence
pub trait StepBack: Step {
    /// move `state` to the position immediately preceding it, returning `false` if `state` was the
    /// first position
    fn backward(&self, state: &mut Self::State) -> bool;
}

/// A position within a sequence: either holding a value or exhausted.
///
/// Exhaustion is terminal. Once [`Cursor::forward`] runs off the end, no further movement brings the
/// cursor back.
///
/// [`PartialEq`] compares by value only: two exhausted cursors are always equal, and two holding
/// cursors are equal when their states are, regardless of the sequence either one came from.
pub struct Cursor<S: Step> {
    state: Option<S::State>,
    step: S,
}

impl<S: Step> Clone for Cursor<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            step: self.step.clone(),
        }
    }
}

impl<S: Step> PartialEq for Cursor<S> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => self.step.same(lhs, rhs),
            _ => false,
        }
    }
}

impl<S: Step> fmt::Debug for Cursor<S>
where
    S::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => f.debug_tuple("Holding").field(state).finish(),
            None => f.write_str("Exhausted"),
        }
    }
}

impl<S: Step> Cursor<S> {
    /// create a cursor at `state`, or an exhausted one when `state` is `None`
    pub fn new(state: Option<S::State>, step: S) -> Self {
        Self { state, step }
    }

    /// create an exhausted cursor, typically used as the end sentinel of a sequence
    pub fn exhausted(step: S) -> Self {
        Self { state: None, step }
    }

    pub fn is_holding(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_none()
    }

    /// split into the position, if any, and the stepping logic
    pub fn into_parts(self) -> (Option<S::State>, S) {
        (self.state, self.step)
    }

    /// move to the position held by `start` without touching the stepping logic
    ///
    /// `start` must come from the same sequence as `self`
    pub(crate) fn rewind_to(&mut self, start: &Self) {
        self.state.clone_from(&start.state);
    }

    /// get the value this cursor refers to, or [`RangeError::InvalidState`] if it is exhausted
    pub fn try_get(&self) -> Result<S::Item, RangeError> {
        self.state
            .as_ref()
            .map(|state| self.step.get(state))
            .ok_or(RangeError::InvalidState("cannot dereference an exhausted cursor"))
    }

    /// get the value this cursor refers to
    ///
    /// Panics if the cursor is exhausted. Reading past the end is caller misuse, use
    /// [`Cursor::try_get`] where exhaustion is an expected outcome.
    pub fn get(&self) -> S::Item {
        match self.try_get() {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }

    /// move to the next position without dereferencing, returning whether a value is still held
    ///
    /// Calling this on an exhausted cursor is a no-op which keeps returning `false`
    pub fn forward(&mut self) -> bool {
        let held = match &mut self.state {
            Some(state) => self.step.forward(state),
            None => false,
        };

        if !held {
            self.state = None;
        }
        held
    }

    /// move to the next position and get its value, or `None` once the sequence has run out
    pub fn advance(&mut self) -> Option<S::Item> {
        if self.forward() {
            Some(self.get())
        } else {
            None
        }
    }

    /// get a copy of this cursor moved `n` positions forward
    ///
    /// Panics if this cursor is already exhausted
    pub fn shifted(&self, n: usize) -> Self {
        if self.is_exhausted() {
            panic!(
                "{}",
                RangeError::InvalidState("cannot shift an exhausted cursor")
            );
        }

        let mut out = self.clone();
        for _ in 0..n {
            if !out.forward() {
                break;
            }
        }
        out
    }
}

impl<S: StepBack> Cursor<S> {
    /// move to the previous position without dereferencing, returning whether a value is still held
    ///
    /// Stepping back from the first position exhausts the cursor. Panics if the cursor is already
    /// exhausted, since there is no position to step back from.
    pub fn backward(&mut self) -> bool {
        let held = match &mut self.state {
            Some(state) => self.step.backward(state),
            None => panic!(
                "{}",
                RangeError::InvalidState("cannot retreat an exhausted cursor")
            ),
        };

        if !held {
            self.state = None;
        }
        held
    }

    /// move to the previous position and get its value, or `None` if the start was passed
    pub fn retreat(&mut self) -> Option<S::Item> {
        if self.backward() {
            Some(self.get())
        } else {
            None
        }
    }
}

/// Yields the current value, then moves forward
impl<S: Step> Iterator for Cursor<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.try_get().ok()?;
        self.forward();
        Some(item)
    }
}

impl<S: Step> FusedIterator for Cursor<S> {}
