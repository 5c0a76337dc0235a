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

use crate::ll;
use crate::ll::limb::{BaseInt, DoubleInt, Limb};

/// Information for converting to/from a given base, B.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Base {
    /// Number of digits a limb can hold in a given base.
    pub digits_per_limb: u32,
    /// The "big base", the largest B^m that will fit in a limb.
    /// Always equal to B^digits_per_limb
    pub big_base: Limb,
}

impl Base {
    /// Decimal: nine digits per limb, big base 10^9.
    pub const DECIMAL : Base = Base::new(10);

    /// Computes the table entry for `base`, which must be in `2..=36`.
    pub const fn new(base: u32) -> Base {
        assert!(base >= 2 && base <= 36);

        let mut digits_per_limb = 1;
        let mut big_base = base as DoubleInt;
        while big_base * (base as DoubleInt) <= BaseInt::MAX as DoubleInt {
            big_base *= base as DoubleInt;
            digits_per_limb += 1;
        }

        Base { digits_per_limb, big_base: Limb(big_base as BaseInt) }
    }
}

/**
 * Returns an upper bound on the number of base-`base` digits needed to write
 * out `{xp}`.
 */
pub fn num_base_digits(xp: &[Limb], base: u32) -> usize {
    debug_assert!(base >= 2);

    let n = ll::normalized_len(xp);
    let cnt = xp[n - 1].leading_zeros() as usize;
    let total_bits = Limb::BITS * n - cnt;
    if total_bits == 0 { return 1; }

    // A value below 2^bits has at most ceil(bits / log2(base)) digits. The
    // result only sizes buffers, so f64 rounding may leave it one high.
    let lg2b = (base as f64).log2();
    (total_bits as f64 / lg2b).ceil() as usize
}

/**
 * Converts the limbs of `xp` to the given base, calling `out_byte` with each
 * digit from most-significant to least. Zero is written as a single `0`.
 *
 * The values passed to `out_byte` are the raw values of the base. Conversion
 * for output should be done as a second step.
 */
pub fn to_base<F: FnMut(u8)>(base: u32, xp: &[Limb], mut out_byte: F) {
    let info = Base::new(base);

    let mut n = ll::normalized_len(xp);
    if n == 1 && xp[0] == 0 {
        out_byte(0);
        return;
    }

    // Peel off big-base chunks from the bottom, least-significant first.
    let mut num = xp[..n].to_vec();
    let mut quot = vec![Limb(0); n];
    let mut chunks = Vec::with_capacity(num_base_digits(xp, base) / info.digits_per_limb as usize + 1);
    loop {
        let r = ll::divrem_1(&mut quot[..n], &num[..n], info.big_base);
        chunks.push(r);
        std::mem::swap(&mut num, &mut quot);

        n = ll::normalized_len(&num[..n]);
        if n == 1 && num[0] == 0 { break; }
    }

    let mut digits = [0u8; 32];
    for (i, chunk) in chunks.iter().rev().enumerate() {
        let mut c = chunk.0;
        let mut len = 0;
        while c > 0 {
            digits[len] = (c % base) as u8;
            c /= base;
            len += 1;
        }

        // Every chunk but the most-significant one is zero-padded.
        if i > 0 {
            while len < info.digits_per_limb as usize {
                digits[len] = 0;
                len += 1;
            }
        }

        for &d in digits[..len].iter().rev() {
            out_byte(d);
        }
    }
}

/**
 * Converts the base `base` digit values in `bp` (most-significant first) to
 * limbs. The digits are consumed in big-base chunks; the first chunk takes
 * whatever is left over so every later chunk is full.
 *
 * The result is normalized.
 */
pub fn from_base(bp: &[u8], base: u32) -> Vec<Limb> {
    let info = Base::new(base);
    let per = info.digits_per_limb as usize;

    let mut out: Vec<Limb> = Vec::with_capacity(bp.len() / per + 1);
    out.push(Limb(0));
    let mut scaled: Vec<Limb> = Vec::with_capacity(out.capacity());

    let first = match bp.len() % per {
        0 => per,
        n => n,
    };

    let mut start = 0;
    let mut end = if bp.is_empty() { 0 } else { first };
    while start < end {
        let mut res_digit = Limb(0);
        for &b in &bp[start..end] {
            res_digit = res_digit * base + b as BaseInt;
        }

        // out = out * big_base + res_digit
        scaled.clear();
        scaled.resize(out.len(), Limb(0));
        let hi = ll::mul_1(&mut scaled, &out, info.big_base);
        let carry = ll::add_1(&mut out, &scaled, res_digit);
        let top = hi + carry;
        if top != 0 {
            out.push(top);
        }

        start = end;
        end = std::cmp::min(end + per, bp.len());
    }

    let n = ll::normalized_len(&out);
    out.truncate(n);
    out
}
