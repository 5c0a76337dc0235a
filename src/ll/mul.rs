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
 * Multiplies the limbs of `xp` by `vl` storing the low `xp.len()` limbs of the
 * product in `wp`.
 *
 * Returns the highest limb of the product
 */
#[inline]
pub fn mul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() == xp.len());

    let mut cl = Limb(0);
    for (w, &xl) in wp.iter_mut().zip(xp) {
        let (hpl, lpl) = xl.mul_hilo(vl);
        let (lpl, carry) = lpl.add_overflow(cl);
        cl = hpl + carry;

        *w = lpl;
    }

    cl
}

/**
 * Multiplies the limbs of `xp` by `vl` and adds them to the low `xp.len()`
 * limbs of `wp`. Returns the highest limb of the result.
 */
#[inline]
pub fn addmul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());

    let mut cl = Limb(0);
    for (w, &xl) in wp.iter_mut().zip(xp) {
        let (hpl, lpl) = xl.mul_hilo(vl);
        let (lpl, carry) = lpl.add_overflow(cl);
        cl = hpl + carry;

        let (lpl, carry) = w.add_overflow(lpl);
        cl = cl + carry;

        *w = lpl;
    }

    cl
}

/**
 * Multiplies the limbs of `xp` by `vl` and subtracts them from the low
 * `xp.len()` limbs of `wp`. Returns the highest limb of the product, adjusted
 * for the borrow.
 */
#[inline]
pub fn submul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());

    let mut cl = Limb(0);
    for (w, &xl) in wp.iter_mut().zip(xp) {
        let (hpl, lpl) = xl.mul_hilo(vl);
        let (lpl, carry) = lpl.add_overflow(cl);
        cl = hpl + carry;

        let (lpl, carry) = w.sub_overflow(lpl);
        cl = cl + carry;

        *w = lpl;
    }

    cl
}

/**
 * Multiplies `{xp}` by `{yp}`, storing the result to `{wp, xs + ys}`.
 *
 * Schoolbook multiplication: the first row is written by `mul_1`, every
 * following row is accumulated one limb further up by `addmul_1`.
 */
pub fn mul(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let (xp, yp) = if xp.len() >= yp.len() { (xp, yp) } else { (yp, xp) };
    let xs = xp.len();
    let ys = yp.len();

    debug_assert!(ys > 0);
    debug_assert!(wp.len() == xs + ys);

    wp[xs] = mul_1(&mut wp[..xs], xp, yp[0]);

    for (i, &yl) in yp.iter().enumerate().skip(1) {
        wp[i + xs] = addmul_1(&mut wp[i..i + xs], xp, yl);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_addmul_submul() {
        // w = 5 + (B - 1) * 3
        let mut w = [Limb(5), Limb(0)];
        let c = addmul_1(&mut w[..1], &[Limb(!0)], Limb(3));
        assert_eq!(c, 3);
        assert_eq!(w[0], 2);

        // (B + 2) - 1 * 3 = B - 1
        let mut w = [Limb(2), Limb(1)];
        let c = submul_1(&mut w[..1], &[Limb(1)], Limb(3));
        assert_eq!(c, 1);
        assert_eq!(w[0], !0);
    }

    #[test]
    fn test_mul_short_first() {
        let mut w = [Limb(0); 3];
        mul(&mut w, &[Limb(3)], &[Limb(!0), Limb(1)]);
        // 3 * (2B - 1) = 6B - 3 = 5B + (B - 3)
        assert_eq!(w, [Limb(!2), Limb(5), Limb(0)]);
    }
}
