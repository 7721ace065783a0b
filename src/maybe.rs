// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! The optional-value type and its eager operations

use std::fmt;

use enum_as_inner::EnumAsInner;

/// An optional value: either a wrapped payload or the confirmed absence of one.
///
/// Equality is structural, so freshly built instances compare equal and
/// `Nothing` is a singleton by value, not by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumAsInner)]
pub enum Maybe<T> {
    /// A present payload
    Just(T),
    /// The absence of one
    Nothing,
}

pub use Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    /// Folds the native absence marker into the algebra: `None` becomes
    /// `Nothing`, `Some(value)` becomes `Just(value)`. An absence marker is
    /// thus never wrapped as a payload.
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Just(value),
            None => Nothing,
        }
    }

    /// Applies `f` to the payload, if any. `f` is not invoked on `Nothing`.
    pub fn map<B>(self, f: impl FnOnce(T) -> B) -> Maybe<B> {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// Chains an operation that may itself produce absence. The result of `f`
    /// is returned as is, and `Nothing` short-circuits without invoking `f`,
    /// so once a chain step yields absence every later step is skipped.
    pub fn and_then<B>(self, f: impl FnOnce(T) -> Maybe<B>) -> Maybe<B> {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    /// Leaves the algebra: the payload if present, `default` otherwise.
    pub fn with_default(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    /// As [`Self::with_default`], but builds the fallback lazily.
    pub fn with_default_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Just(value) => value,
            Nothing => default(),
        }
    }

    /// Applies a wrapped function to a wrapped value. `Nothing` if either
    /// side is absent; the function is invoked only when both are present.
    pub fn ap<B, F: FnOnce(T) -> B>(self, f: Maybe<F>) -> Maybe<B> {
        match (f, self) {
            (Just(f), Just(value)) => Just(f(value)),
            _ => Nothing,
        }
    }

    /// The first present value of the two.
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Just(value) => Just(value),
            Nothing => other,
        }
    }

    /// As [`Self::or`], but builds the alternative lazily.
    pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
        match self {
            Just(value) => Just(value),
            Nothing => f(),
        }
    }

    /// Keeps the payload only if `pred` holds for it.
    pub fn filter(self, pred: impl FnOnce(&T) -> bool) -> Maybe<T> {
        match self {
            Just(value) if pred(&value) => Just(value),
            _ => Nothing,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

/// Combines two independently-obtained optional values with a binary
/// function, without nested chaining.
pub fn map2<A, B, C>(f: impl FnOnce(A, B) -> C, a: Maybe<A>, b: Maybe<B>) -> Maybe<C> {
    match (a, b) {
        (Just(a), Just(b)) => Just(f(a, b)),
        _ => Nothing,
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(value) => write!(f, "Just({value})"),
            Nothing => write!(f, "Nothing"),
        }
    }
}

/// An iterator over the zero or one payload of a [`Maybe`]
#[derive(Clone, Debug)]
pub struct IntoIter<T>(Option<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.is_some() as usize;
        (len, Some(len))
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.into())
    }
}

/// Collects a sequence of maybes into a maybe of a collection, the first
/// `Nothing` collapsing the whole result to `Nothing`.
impl<T, C: FromIterator<T>> FromIterator<Maybe<T>> for Maybe<C> {
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(|maybe| match maybe {
                Just(value) => Some(value),
                Nothing => None,
            })
            .collect::<Option<C>>()
            .into()
    }
}
