// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use test_log::test;

use maybe::{map2, math::div_by, Just, Maybe, Nothing};

fn inc(x: i64) -> i64 {
    x + 1
}

fn double(x: i64) -> i64 {
    x * 2
}

#[test]
fn functor_identity() {
    for subject in [Just(3i64), Nothing] {
        assert_eq!(subject.map(|x| x), subject);
    }
}

#[test]
fn functor_composition() {
    for subject in [Just(3i64), Nothing] {
        assert_eq!(subject.map(inc).map(double), subject.map(|x| double(inc(x))));
    }
}

#[test]
fn monad_left_identity() {
    // binding a pure value into a step is the same as running the step on it,
    // for steps that succeed as well as steps that produce absence
    let quarter = div_by(4i64);
    assert_eq!(Just(32).and_then(&quarter), quarter(32));
    let crash = div_by(0i64);
    assert_eq!(Just(32).and_then(&crash), crash(32));
}

#[test]
fn monad_right_identity() {
    for subject in [Just(32i64), Nothing] {
        assert_eq!(subject.and_then(Just), subject);
    }
}

#[test]
fn monad_associativity() {
    let half = div_by(2i64);
    let crash = div_by(0i64);
    let third = div_by(3i64);
    for subject in [Just(32i64), Just(0), Nothing] {
        for (f, g) in [(&half, &third), (&half, &crash), (&crash, &third)] {
            let grouped_left = subject.and_then(f).and_then(g);
            let grouped_right = subject.and_then(|x| f(x).and_then(g));
            assert_eq!(grouped_left, grouped_right);
        }
    }
}

#[test]
fn applicative_identity_and_homomorphism() {
    assert_eq!(Just(3i64).ap(Just(|x: i64| x)), Just(3));
    assert_eq!(Just(3i64).ap(Just(inc)), Just(inc(3)));
    let absent: Maybe<i64> = Nothing;
    assert_eq!(absent.ap(Just(inc)), Nothing);
}

#[test]
fn map2_agrees_with_ap() {
    let add = |a: i64| move |b: i64| a + b;
    let cases = [
        (Just(1i64), Just(2i64)),
        (Just(1), Nothing),
        (Nothing, Just(2)),
        (Nothing, Nothing),
    ];
    for (a, b) in cases {
        assert_eq!(map2(|x, y| x + y, a, b), b.ap(a.map(add)));
    }
}
