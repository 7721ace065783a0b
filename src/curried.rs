// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Data-last, partially-applied forms of the [`Maybe`] operations
//!
//! Each function here takes everything but the subject optional value and
//! returns a reusable closure awaiting it, so operations can be staged and
//! composed (see [`compose!`](crate::compose)) before any subject exists.
//! Construction is already unary and needs no curried form.

use crate::maybe::{self, Maybe};

/// Partially-applied [`Maybe::map`].
pub fn map<A, B>(f: impl Fn(A) -> B) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |subject| subject.map(&f)
}

/// Partially-applied [`Maybe::and_then`].
pub fn and_then<A, B>(f: impl Fn(A) -> Maybe<B>) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |subject| subject.and_then(&f)
}

/// Partially-applied [`Maybe::with_default`]. The default is cloned into
/// each application so the closure stays reusable.
pub fn with_default<T: Clone>(default: T) -> impl Fn(Maybe<T>) -> T {
    move |subject| subject.with_default(default.clone())
}

/// Partially-applied [`Maybe::ap`].
pub fn ap<A, B, F>(f: Maybe<F>) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> B + Clone,
{
    move |subject| subject.ap(f.clone())
}

/// Partially-applied [`maybe::map2`].
pub fn map2<A, B, C>(f: impl Fn(A, B) -> C) -> impl Fn(Maybe<A>, Maybe<B>) -> Maybe<C> {
    move |a, b| maybe::map2(&f, a, b)
}

/// Right-to-left function composition: `compose!(f, g, h)(x)` is `f(g(h(x)))`.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => { $f };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        move |x| ($f)($crate::compose!($($rest),+)(x))
    };
}
