// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! An arbitrary-precision signed integer stored as a sign and a vector of
//! 32-bit limbs.
//!
//! The `ll` module holds the limb-level algorithms (carry propagation,
//! schoolbook multiplication, Knuth's Algorithm D, two's-complement
//! emulation and radix conversion). `BigInt` wraps them into an ordinary
//! value type.

#![crate_type = "lib"]
#![crate_name = "bigint"]

extern crate num_integer;
extern crate num_traits;
extern crate rand;

pub mod ll;

pub mod int;
pub mod random;
pub mod traits;

// Re-exports

pub use int::{BigInt, BigIntErrorKind, DivisionByZero, ParseBigIntError};
pub use random::RandomBigInt;
pub use traits::DivRem;
