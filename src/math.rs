// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Checked arithmetic that folds failure into absence

use num_traits::{CheckedDiv, CheckedSub};

use crate::maybe::Maybe;

/// Division where a zero divisor (or overflow) yields `Nothing` rather than
/// panicking or producing infinity.
pub fn safe_div<T: CheckedDiv>(numerator: T, denominator: T) -> Maybe<T> {
    numerator.checked_div(&denominator).into()
}

/// Subtraction where underflow or overflow yields `Nothing`.
pub fn safe_sub<T: CheckedSub>(a: T, b: T) -> Maybe<T> {
    a.checked_sub(&b).into()
}

/// Division by a fixed divisor, divisor-first for use in chains.
pub fn div_by<T: CheckedDiv>(divisor: T) -> impl Fn(T) -> Maybe<T> {
    move |value| value.checked_div(&divisor).into()
}
