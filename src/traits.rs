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

/*!
 * Operator-style traits that have no counterpart in `std::ops`.
 */

/**
 * Division that yields the quotient and the remainder in one pass.
 *
 * ```
 * # use bigint::{BigInt, DivRem};
 * let (q, r) = BigInt::from(-7).divrem(BigInt::from(2));
 * assert_eq!(q, -3);
 * assert_eq!(r, -1);
 * ```
 *
 * Like `/` and `%` this panics on a zero divisor; use `BigInt::divmod` to
 * get an error instead.
 */
pub trait DivRem<RHS=Self> {
    type Output;
    fn divrem(self, rhs: RHS) -> Self::Output;
}
