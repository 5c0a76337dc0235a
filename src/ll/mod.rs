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

//! Low-level routines over little-endian limb slices.
//!
//! Functions here work on magnitudes only. They never look at a sign and
//! never allocate unless stated; output slices are sized by the caller.

use std::cmp::Ordering;

mod addsub;
mod mul;
mod div;
mod bit;

pub mod base;
pub mod limb;
use self::limb::Limb;

pub use self::bit::{shl, shr, bitop, twos_complement, Filler};
pub use self::addsub::{add_n, sub_n, add, sub, add_1, sub_1, incr, decr};
pub use self::mul::{addmul_1, submul_1, mul_1, mul};
pub use self::div::{divrem_1, divrem};

/**
 * Called when a divide by zero occurs.
 *
 * Mirrors primitive integer division: the operator forms have no way to
 * report the failure other than unwinding.
 */
#[cold]
#[inline(never)]
pub fn divide_by_zero() -> ! {
    panic!("divide by zero")
}

/**
 * Checks that all limbs in `xs` are zero
 */
pub fn is_zero(xs: &[Limb]) -> bool {
    xs.iter().all(|&l| l == 0)
}

/**
 * Returns the length of `xs` once the most-significant zero limbs are
 * dropped. The result is at least one, so zero keeps a single limb.
 */
pub fn normalized_len(xs: &[Limb]) -> usize {
    let mut n = xs.len();
    while n > 1 && xs[n - 1] == 0 {
        n -= 1;
    }
    n
}

/**
 * Compares the equal-length magnitudes `xs` and `ys`, returning whether xs
 * is less than, equal to or greater than ys
 */
pub fn cmp(xs: &[Limb], ys: &[Limb]) -> Ordering {
    debug_assert!(xs.len() == ys.len());

    for (x, y) in xs.iter().rev().zip(ys.iter().rev()) {
        if x != y {
            return if x > y {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
    }

    Ordering::Equal
}

/**
 * Compares two normalized magnitudes of possibly different lengths.
 */
pub fn cmp_mag(xs: &[Limb], ys: &[Limb]) -> Ordering {
    match xs.len().cmp(&ys.len()) {
        Ordering::Equal => cmp(xs, ys),
        ord => ord,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::limb::Limb;

    macro_rules! limbs {
        ($($d:expr),*) => ([$(Limb($d)),*]);
    }

    #[test]
    fn test_add() {
        let a = limbs!(1);
        let b = limbs!(2);
        let mut c = limbs!(0);
        assert_eq!(add(&mut c, &a, &b), 0);
        assert_eq!(c[0], 3);

        let a = limbs!(!0);
        let b = limbs!(5);
        let mut c = limbs!(0);
        assert_eq!(add(&mut c, &a, &b), 1);
        assert_eq!(c[0], 4);

        let a = limbs!(!0, 0);
        let b = limbs!(5);
        let mut c = limbs!(0, 0);
        assert_eq!(add(&mut c, &a, &b), 0);
        assert_eq!(c, limbs!(4, 1));

        let a = limbs!(!0, !9);
        let b = limbs!(5, 10);
        let mut c = limbs!(0, 0);
        assert_eq!(add(&mut c, &a, &b), 1);
        assert_eq!(c, limbs!(4, 1));
    }

    #[test]
    fn test_sub() {
        let a = limbs!(2);
        let b = limbs!(1);
        let mut c = limbs!(0);
        assert_eq!(sub(&mut c, &a, &b), 0);
        assert_eq!(c[0], 1);

        let a = limbs!(0, 2);
        let b = limbs!(1);
        let mut c = limbs!(0, 0);
        assert_eq!(sub(&mut c, &a, &b), 0);
        assert_eq!(c, limbs!(!0, 1));

        let a = limbs!(0, 2);
        let b = limbs!(2, 1);
        let mut c = limbs!(0, 0);
        assert_eq!(sub(&mut c, &a, &b), 0);
        assert_eq!(c, limbs!(!1, 0));

        let a = limbs!(0, 1);
        let b = limbs!(1, 1);
        let mut c = limbs!(0, 0);
        assert_eq!(sub(&mut c, &a, &b), 1);
        assert_eq!(c, limbs!(!0, !0));
    }

    #[test]
    fn test_mul_1() {
        let a = limbs!(10);
        let mut b = limbs!(0);
        assert_eq!(mul_1(&mut b, &a, Limb(20)), 0);
        assert_eq!(b, limbs!(200));

        let a = limbs!(!1);
        let mut b = limbs!(0);
        assert_eq!(mul_1(&mut b, &a, Limb(2)), 1);
        assert_eq!(b, limbs!(!3));

        let a = limbs!(10, 10);
        let mut b = limbs!(0, 0);
        assert_eq!(mul_1(&mut b, &a, Limb(2)), 0);
        assert_eq!(b, limbs!(20, 20));
    }

    #[test]
    fn test_mul() {
        let mut c = limbs!(0, 0);
        mul(&mut c, &limbs!(2), &limbs!(2));
        assert_eq!(c, limbs!(4, 0));

        let mut c = limbs!(0, 0);
        mul(&mut c, &limbs!(!1), &limbs!(2));
        assert_eq!(c, limbs!(!3, 1));

        let mut c = limbs!(0, 0, 0);
        mul(&mut c, &limbs!(!1, 1), &limbs!(4));
        assert_eq!(c, limbs!(!7, 7, 0));

        let mut c = limbs!(0, 0, 0, 0);
        mul(&mut c, &limbs!(!1, 1), &limbs!(0, 1));
        assert_eq!(c, limbs!(0, !1, 1, 0));
    }

    #[test]
    fn test_divrem_1() {
        let mut q = limbs!(0);
        assert_eq!(divrem_1(&mut q, &limbs!(2), Limb(2)), 0);
        assert_eq!(q, limbs!(1));

        let mut q = limbs!(0);
        assert_eq!(divrem_1(&mut q, &limbs!(7), Limb(1)), 0);
        assert_eq!(q, limbs!(7));

        let mut q = limbs!(0);
        assert_eq!(divrem_1(&mut q, &limbs!(7), Limb(2)), 1);
        assert_eq!(q, limbs!(3));

        let mut q = limbs!(0, 0);
        assert_eq!(divrem_1(&mut q, &limbs!(0, 1), Limb(4)), 0);
        assert_eq!(q, limbs!(1 << (Limb::BITS - 2), 0));

        let mut q = limbs!(0, 0);
        assert_eq!(divrem_1(&mut q, &limbs!(5, 3), Limb(3)), 2);
        assert_eq!(q, limbs!(1, 1));
    }

    #[test]
    fn test_divrem() {
        let mut q = limbs!(0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(4, 3, 4), &limbs!(1, !0));
        assert_eq!(q, limbs!(4, 0));
        assert_eq!(r, limbs!(0, 7));

        let mut q = limbs!(0, 0, 0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(0, 4, 3, 4, 2), &limbs!(0, !1));
        assert_eq!(q, limbs!(19, 8, 2, 0));
        assert_eq!(r, limbs!(0, 42));

        let mut q = limbs!(0, 0, 0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(8, 1, 3, 4, 1), &limbs!(0, 1));
        assert_eq!(q, limbs!(1, 3, 4, 1));
        assert_eq!(r, limbs!(8, 0));

        {
            // (B^4 - 1)(B^8 - 1)
            let a = limbs!(1, 0, 0, 0, !0, !0, !0, !0, !1, !0, !0, !0);
            // (B^4 - 1)
            let b = limbs!(!0, !0, !0, !0);
            let mut q = [Limb(0); 9];
            let mut r = [Limb(0); 4];
            divrem(&mut q, &mut r, &a, &b);

            // q = (B^8 - 1)
            assert_eq!(q, limbs!(!0, !0, !0, !0, !0, !0, !0, !0, 0));
            assert_eq!(r, limbs!(0, 0, 0, 0));
        }
    }

    #[test]
    fn test_divrem_small_top_limb() {
        // Divisor top limb of 1 forces the largest scale factor.
        // (3B^2 + 2B + 1) / (B + 1) = 3B - 1, remainder 2
        let mut q = limbs!(0, 0);
        let mut r = limbs!(0, 0);
        divrem(&mut q, &mut r, &limbs!(1, 2, 3), &limbs!(1, 1));
        assert_eq!(q, limbs!(!0, 2));
        assert_eq!(r, limbs!(2, 0));
    }

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(&limbs!(1, 2), &limbs!(2, 1)), Ordering::Greater);
        assert_eq!(cmp(&limbs!(3, 1), &limbs!(2, 1)), Ordering::Greater);
        assert_eq!(cmp(&limbs!(2, 1), &limbs!(2, 1)), Ordering::Equal);
        assert_eq!(cmp_mag(&limbs!(0, 1), &limbs!(!0)), Ordering::Greater);
        assert_eq!(cmp_mag(&limbs!(5), &limbs!(0, 1)), Ordering::Less);
    }

    #[test]
    fn test_normalized_len() {
        assert_eq!(normalized_len(&limbs!(0)), 1);
        assert_eq!(normalized_len(&limbs!(0, 0, 0)), 1);
        assert_eq!(normalized_len(&limbs!(1, 0, 0)), 1);
        assert_eq!(normalized_len(&limbs!(0, 1, 0)), 2);
        assert!(is_zero(&limbs!(0, 0)));
        assert!(!is_zero(&limbs!(0, 1)));
    }
}
