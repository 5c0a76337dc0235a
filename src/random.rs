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

use rand::Rng;

use crate::int::BigInt;
use crate::ll::limb::Limb;

/// Trait for generating random `BigInt`s.
///
/// # Example
///
/// Generate a random `BigInt` of size `256` bits:
///
/// ```
/// use bigint::RandomBigInt;
///
/// let mut rng = rand::thread_rng();
/// let big_i = rng.gen_int(256);
/// assert!(big_i.bit_length() <= 256);
/// ```
pub trait RandomBigInt {
    /// Generate a random unsigned `BigInt` of given bit size.
    fn gen_uint(&mut self, bits: usize) -> BigInt;
    /// Generate a random `BigInt` of given bit size.
    fn gen_int(&mut self, bits: usize) -> BigInt;
    /// Generate a random unsigned `BigInt` less than the given bound.
    /// Fails when the bound is zero or negative.
    fn gen_uint_below(&mut self, bound: &BigInt) -> BigInt;
    /// Generate a random `BigInt` within the given range.
    /// The lower bound is inclusive; the upper bound is exclusive.
    /// Fails when the upper bound is not greater than the lower bound.
    fn gen_int_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

impl<R: Rng> RandomBigInt for R {
    fn gen_uint(&mut self, bits: usize) -> BigInt {
        assert!(bits > 0);

        let n = bits / Limb::BITS;
        let rem = bits % Limb::BITS;

        let mut limbs = Vec::with_capacity(n + 1);
        for _ in 0..n {
            limbs.push(Limb(self.gen()));
        }

        if rem > 0 {
            let final_limb = Limb(self.gen());
            limbs.push(final_limb >> (Limb::BITS - rem));
        }

        BigInt::from_limbs(limbs, false)
    }

    fn gen_int(&mut self, bits: usize) -> BigInt {
        let i = self.gen_uint(bits);

        if i.is_zero() {
            // Zero has no negative twin, so without a second draw it would
            // come up twice as often as any other value.
            if self.gen() {
                self.gen_uint(bits)
            } else {
                i
            }
        } else if self.gen() {
            -i
        } else {
            i
        }
    }

    fn gen_uint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(bound.sign() > 0);
        // Each draw succeeds with probability above one half, so running out
        // of tries means the generator is broken.
        const ITER_LIMIT : usize = 10000;

        let bits = bound.bit_length() as usize;

        for _ in 0..ITER_LIMIT {
            let n = self.gen_uint(bits);
            if n < *bound { return n; }
        }

        panic!("No valid number generated in {} iterations.", ITER_LIMIT);
    }

    fn gen_int_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(*lbound < *ubound);
        lbound + self.gen_uint_below(&(ubound - lbound))
    }
}
