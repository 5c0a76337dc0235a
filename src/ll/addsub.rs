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

use crate::ll::limb::Limb;

/**
 * Adds the limbs of `xp` and `yp`, storing the result in `wp`. All three slices
 * have the same length. If there was a carry, it is returned.
 */
pub fn add_n(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() == xp.len());
    debug_assert!(xp.len() == yp.len());

    let mut carry = Limb(0);

    for ((w, &xl), &yl) in wp.iter_mut().zip(xp).zip(yp) {
        let (sl, c1) = xl.add_overflow(yl);
        let (rl, c2) = sl.add_overflow(carry);

        carry = if c1 || c2 { Limb(1) } else { Limb(0) };
        *w = rl;
    }

    carry
}

/**
 * Subtracts the limbs of `yp` from `xp`, storing the result in `wp`. All three
 * slices have the same length. If there was a borrow from a higher-limb (i.e.,
 * the result would be negative), it is returned.
 */
pub fn sub_n(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() == xp.len());
    debug_assert!(xp.len() == yp.len());

    let mut carry = Limb(0);

    for ((w, &xl), &yl) in wp.iter_mut().zip(xp).zip(yp) {
        let (sl, c1) = xl.sub_overflow(yl);
        let (rl, c2) = sl.sub_overflow(carry);

        carry = if c1 || c2 { Limb(1) } else { Limb(0) };
        *w = rl;
    }

    carry
}

macro_rules! aors {
    ($op:ident, $lop:ident, $f:ident, $doc:expr) => {
        #[doc = $doc]
        #[inline]
        pub fn $op(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
            let xs = xp.len();
            let ys = yp.len();
            debug_assert!(xs >= ys);
            debug_assert!(wp.len() == xs);

            let mut carry = $f(&mut wp[..ys], &xp[..ys], yp) == 1;

            for i in ys..xs {
                if carry {
                    let (x, c) = Limb::$lop(xp[i], Limb(1));
                    wp[i] = x;
                    carry = c;
                } else {
                    wp[i] = xp[i];
                }
            }

            if carry { Limb(1) } else { Limb(0) }
        }
    }
}

aors!(add, add_overflow, add_n,
      "Adds `{yp}` to the longer-or-equal `{xp}`, storing `xp.len()` limbs in `wp`. \
       Returns the carry out of the top limb.");
aors!(sub, sub_overflow, sub_n,
      "Subtracts `{yp}` from the longer-or-equal `{xp}`, storing `xp.len()` limbs in `wp`. \
       Returns the borrow out of the top limb.");

macro_rules! aors_1 {
    ($op:ident, $f:ident) => {
        #[inline]
        pub fn $op(wp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
            debug_assert!(wp.len() == xp.len());

            let mut carry = y;
            for (w, &x) in wp.iter_mut().zip(xp) {
                let (v, c) = Limb::$f(x, carry);
                *w = v;
                carry = if c { Limb(1) } else { Limb(0) };
            }

            carry
        }
    }
}

aors_1!(add_1, add_overflow);
aors_1!(sub_1, sub_overflow);

/**
 * Adds `incr` to `{wp}` in place, returning the carry out of the top limb.
 */
#[inline]
pub fn incr(wp: &mut [Limb], incr: Limb) -> Limb {
    let mut carry = incr;
    for w in wp.iter_mut() {
        if carry == 0 { break; }
        let (x, c) = w.add_overflow(carry);
        *w = x;
        carry = if c { Limb(1) } else { Limb(0) };
    }

    carry
}

/**
 * Subtracts `decr` from `{wp}` in place, returning the borrow out of the top limb.
 */
#[inline]
pub fn decr(wp: &mut [Limb], decr: Limb) -> Limb {
    let mut borrow = decr;
    for w in wp.iter_mut() {
        if borrow == 0 { break; }
        let (x, c) = w.sub_overflow(borrow);
        *w = x;
        borrow = if c { Limb(1) } else { Limb(0) };
    }

    borrow
}
