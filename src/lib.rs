// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! An optional-value algebra: absence as a first-class value, so that
//! pipelines compose without null checks and any absent step short-circuits
//! the rest.

pub mod curried;
pub mod math;
pub mod maybe;

pub use maybe::{map2, Just, Maybe, Nothing};
