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

use std::cmp;

use crate::ll::limb::Limb;

/**
 * Performs a bit-shift of the limbs in `xp`, left by `cnt` bits storing the result in `rp`.
 * The top-most shifted bits are returned.
 *
 * `cnt` must be between 1 and `Limb::BITS - 1`.
 */
pub fn shl(rp: &mut [Limb], xp: &[Limb], cnt: u32) -> Limb {
    debug_assert!(!xp.is_empty());
    debug_assert!(rp.len() == xp.len());
    debug_assert!(cnt >= 1);
    debug_assert!(cnt < Limb::BITS as u32);

    let inv_cnt = Limb::BITS as u32 - cnt;

    let mut low = Limb(0);
    for (r, &x) in rp.iter_mut().zip(xp) {
        *r = (x << cnt) | low;
        low = x >> inv_cnt;
    }

    low
}

/**
 * Performs a bit-shift of the limbs in `xp`, right by `cnt` bits storing the result in `rp`.
 * The bottom-most shifted bits are returned in the high bits of the result.
 *
 * `cnt` must be between 1 and `Limb::BITS - 1`.
 */
pub fn shr(rp: &mut [Limb], xp: &[Limb], cnt: u32) -> Limb {
    debug_assert!(!xp.is_empty());
    debug_assert!(rp.len() == xp.len());
    debug_assert!(cnt >= 1);
    debug_assert!(cnt < Limb::BITS as u32);

    let inv_cnt = Limb::BITS as u32 - cnt;

    let mut high = Limb(0);
    for (r, &x) in rp.iter_mut().zip(xp).rev() {
        *r = (x >> cnt) | high;
        high = x << inv_cnt;
    }

    high
}

/**
 * Computes the two's complement of the limbs of `wp` in place. A carry is
 * returned if there is one, which only happens when every limb was zero.
 */
pub fn twos_complement(wp: &mut [Limb]) -> Limb {
    let mut carry = Limb(1);

    for w in wp.iter_mut() {
        let flipped = !*w;
        let (v, c) = flipped.add_overflow(carry);
        *w = v;
        carry = if c { Limb(1) } else { Limb(0) };
    }

    carry
}

/**
 * The limb an infinitely sign-extended two's complement number reads as past
 * the end of its stored limbs: all zeros for non-negative values, all ones
 * for negative ones.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Filler(Limb);

impl Filler {
    pub const ZERO : Filler = Filler(Limb(0));
    pub const ONES : Filler = Filler(Limb::MAX);

    #[inline]
    pub fn of(negative: bool) -> Filler {
        if negative { Filler::ONES } else { Filler::ZERO }
    }

    #[inline]
    pub fn limb(self) -> Limb {
        self.0
    }

    /// Whether a number with this filler is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Filler::ONES
    }

    /// Reads limb `i` of `xs`, falling back to the filler past the end.
    #[inline]
    pub fn limb_at(self, xs: &[Limb], i: usize) -> Limb {
        xs.get(i).copied().unwrap_or(self.0)
    }
}

/**
 * Applies `op` limb-wise to two two's complement numbers, extending the
 * shorter one with its filler. Returns the result limbs and the filler of the
 * result, `op(x_fill, y_fill)`.
 *
 * `op` must map any pair of fillers to a filler, which holds for every
 * bitwise operator.
 */
pub fn bitop<F>(xp: &[Limb], x_fill: Filler, yp: &[Limb], y_fill: Filler, op: F) -> (Vec<Limb>, Filler)
    where F: Fn(Limb, Limb) -> Limb
{
    let n = cmp::max(xp.len(), yp.len());

    let wp = (0..n)
        .map(|i| op(x_fill.limb_at(xp, i), y_fill.limb_at(yp, i)))
        .collect();

    let fill = op(x_fill.limb(), y_fill.limb());
    debug_assert!(fill == 0 || fill == Limb::MAX);

    (wp, Filler(fill))
}
