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

use std::cmp::Ordering;

use crate::ll;
use crate::ll::limb::{self, BaseInt, DoubleInt, Limb};

/**
 * Divides the limbs of `xp` by `d`, storing the quotient in `qp` (which has
 * the same length as `xp`). The remainder is returned.
 *
 * Walks from the most-significant limb down keeping a running remainder `r`,
 * so every step is an exact two-limb by one-limb division.
 */
pub fn divrem_1(qp: &mut [Limb], xp: &[Limb], d: Limb) -> Limb {
    debug_assert!(d != 0);
    debug_assert!(qp.len() == xp.len());

    let mut r = Limb(0);
    for (q, &x) in qp.iter_mut().zip(xp).rev() {
        let (qi, ri) = limb::div(r, x, d);
        *q = qi;
        r = ri;
    }

    r
}

/**
 * Divides `{np}` by `{dp}`. If `ns < ds`, the quotient is stored in `{qp, 1}`,
 * otherwise the quotient is stored to `{qp, (ns - ds) + 1}`. The remainder is
 * always stored to `{rp, ds}`.
 *
 * The divisor must be normalized (its top limb is non-zero).
 */
pub fn divrem(qp: &mut [Limb], rp: &mut [Limb], np: &[Limb], dp: &[Limb]) {
    let ns = np.len();
    let ds = dp.len();

    debug_assert!(ds >= 1);
    debug_assert!(dp[ds - 1] != 0);
    debug_assert!(rp.len() == ds);
    debug_assert!(qp.len() == if ns < ds { 1 } else { ns - ds + 1 });

    let small = ns < ds || (ns == ds && ll::cmp(np, dp) == Ordering::Less);
    if small {
        for q in qp.iter_mut() {
            *q = Limb(0);
        }
        rp[..ns].copy_from_slice(np);
        for r in rp[ns..].iter_mut() {
            *r = Limb(0);
        }
        return;
    }

    if ds == 1 {
        rp[0] = divrem_1(qp, np, dp[0]);
        return;
    }

    // Scale both operands by f = B / (d_top + 1) so the divisor's top limb
    // is at least B/2. The dividend gains one extra limb for the overflow.
    let dh = dp[ds - 1];
    let f = Limb((Limb::BASE / (dh.0 as DoubleInt + 1)) as BaseInt);

    let mut np_tmp = vec![Limb(0); ns + 1];
    np_tmp[ns] = ll::mul_1(&mut np_tmp[..ns], np, f);

    let mut dp_tmp = vec![Limb(0); ds];
    let c = ll::mul_1(&mut dp_tmp, dp, f);
    debug_assert!(c == 0);
    debug_assert!(dp_tmp[ds - 1].high_bit_set());

    sb_div(qp, &mut np_tmp, &dp_tmp);

    let r = divrem_1(rp, &np_tmp[..ds], f);
    debug_assert!(r == 0);
}

/**
 * Computes the trial quotient digit `min((n2*B + n1) / d1, B - 1)` and
 * refines it against the second divisor limb `d0` and the next numerator
 * limb `n0`. The result is either exact or one too large.
 */
#[inline]
fn trial_digit(n2: Limb, n1: Limb, n0: Limb, d1: Limb, d0: Limb) -> Limb {
    let num = Limb::join(n2, n1);
    let d1 = d1.0 as DoubleInt;

    let mut qhat = num / d1;
    let mut rhat = num % d1;
    if qhat >= Limb::BASE {
        qhat = Limb::BASE - 1;
        rhat = num - qhat * d1;
    }

    // At most two corrections are needed once the divisor is normalized.
    while rhat < Limb::BASE
        && qhat * (d0.0 as DoubleInt) > ((rhat << Limb::BITS) | n0.0 as DoubleInt)
    {
        qhat -= 1;
        rhat += d1;
    }

    Limb(qhat as BaseInt)
}

/**
 * "Schoolbook" division of two unsigned integers, N, D, producing Q = floor(N/D)
 * (Knuth, TAOCP vol. 2, 4.3.1, Algorithm D). `np` holds `ns - ds + 1` quotient
 * positions plus one headroom limb on top; `ns - ds + 1` quotient limbs are
 * written to `qp`.
 *
 * The limbs stored in `np` are modified and the lowest `ds` limbs contain the
 * remainder of the division.
 *
 * The denominator is assumed to conform to the follow restrictions (where B is the base):
 *
 *   1. It has at least two limbs.
 *   2. Most significant limb of D is >= floor(B/2).
 */
fn sb_div(qp: &mut [Limb], np: &mut [Limb], dp: &[Limb]) {
    let ds = dp.len();
    let ns = np.len();

    debug_assert!(ds >= 2);
    debug_assert!(ns > ds);
    debug_assert!(qp.len() == ns - ds);
    debug_assert!(dp[ds - 1].high_bit_set());

    let d1 = dp[ds - 1];
    let d0 = dp[ds - 2];

    for j in (0..ns - ds).rev() {
        let n2 = np[j + ds];
        let n1 = np[j + ds - 1];
        let n0 = np[j + ds - 2];

        let mut q = trial_digit(n2, n1, n0, d1, d0);

        let cy = ll::submul_1(&mut np[j..j + ds], dp, q);
        let (top, borrow) = n2.sub_overflow(cy);
        np[j + ds] = top;

        if borrow {
            // q was one too large: add the divisor back. The carry out of
            // the top limb cancels the borrow.
            q = q - 1;
            let c = ll::addmul_1(&mut np[j..j + ds], dp, Limb(1));
            np[j + ds] = np[j + ds] + c;
        }
        debug_assert!(np[j + ds] == 0);

        qp[j] = q;
    }
}
