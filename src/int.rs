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
use std::error::Error;
use std::{fmt, io};
use std::hash::{self, Hash};
use std::ops::{
    Add, Sub, Mul, Div, Rem, Neg, Not,
    AddAssign, SubAssign, MulAssign, DivAssign, RemAssign,
    Shl, Shr, BitAnd, BitOr, BitXor,
    ShlAssign, ShrAssign, BitAndAssign, BitOrAssign, BitXorAssign,
};
use std::str::FromStr;

use num_integer::Integer;
use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::ll;
use crate::ll::Filler;
use crate::ll::limb::{BaseInt, Limb};

use crate::traits::DivRem;

/**
 * An arbitrary-precision signed integer.
 *
 * This type grows to the size it needs to in order to store the result of any operation.
 *
 * ## Creation
 *
 * A `BigInt` can be constructed in a number of ways:
 *
 * - `BigInt::zero` and `BigInt::one` construct a zero- and one-valued `BigInt` respectively.
 *
 * - `BigInt::from` will convert from any primitive integer type to a `BigInt` of the same value
 *
 *   ```
 *   # use bigint::BigInt;
 *   let four = BigInt::from(4);
 *   ```
 *
 * - `BigInt::from_str` (or `str::parse`) will attempt to convert from a string to a `BigInt`
 *
 *   ```
 *   # use bigint::BigInt;
 *   # use std::str::FromStr;
 *   let i = BigInt::from_str("123456789").unwrap();
 *   ```
 *
 * ## Output
 *
 * `BigInt` supports all the formatting traits, allowing it to be used just like a regular
 * integer when used in `format!` and similar macros. Conversion back to primitive integers goes
 * through `num_traits::ToPrimitive`, which returns `None` when the value does not fit:
 *
 *   ```
 *   # use bigint::BigInt;
 *   use num_traits::ToPrimitive;
 *   let big_i = BigInt::from(123456789);
 *   assert_eq!(big_i.to_i32(), Some(123456789));
 *   ```
 *
 * ## Usage
 *
 * `BigInt` has a number of operator overloads to make working with them as painless as
 * possible. `a + b`, `&a + &b`, `a + &b` and `&a + b` all work; every form produces a fresh,
 * normalized value.
 *
 * There are also overloads for the primitive integer types `i32`, `i64`, `u32`, `u64` and
 * `usize`, on either side of the operator. Values that fit in a single limb take a fast path.
 * Comparison with these integer types is also possible:
 *
 *   ```
 *   # use bigint::BigInt;
 *   let big_i = BigInt::from(123456789);
 *   assert!(big_i == 123456789);
 *   assert!(big_i + 1 > 123456789);
 *   ```
 *
 * ### Semantics
 *
 * Addition, subtraction and multiplication follow the expected rules for integers. Division of
 * two integers, `N / D` is defined as producing two values: a quotient, `Q`, and a remainder,
 * `R`, such that the following equation holds: `N = Q*D + R`. The quotient is truncated toward
 * zero and `R` takes the sign of `N`, matching the primitive integer types.
 *
 * Shift-left is multiplication by a power of two. Shift-right is floored division by a power
 * of two, so negative numbers shift like their two's complement form would.
 *
 * The remaining bitwise operands act as if the numbers are stored in two's complement format
 * and as if the two inputs have the same number of bits.
 */
#[derive(Clone)]
pub struct BigInt {
    // Least-significant limb first. Never empty; zero is `[0]`.
    limbs: Vec<Limb>,
    // Never set for zero.
    negative: bool,
}

impl BigInt {
    pub fn zero() -> BigInt {
        BigInt { limbs: vec![Limb(0)], negative: false }
    }

    pub fn one() -> BigInt {
        BigInt::from_single_limb(Limb(1))
    }

    /// Creates a new BigInt from the given Limb.
    pub fn from_single_limb(limb: Limb) -> BigInt {
        BigInt { limbs: vec![limb], negative: false }
    }

    /// Creates a new BigInt from the given `i64`.
    pub fn from_i64(v: i64) -> BigInt {
        BigInt::from(v)
    }

    /**
     * Creates a BigInt from little-endian limbs and a sign. The limbs do not
     * have to be normalized; an empty vector is zero.
     */
    pub fn from_limbs(limbs: Vec<Limb>, negative: bool) -> BigInt {
        let mut i = BigInt { limbs, negative };
        i.normalize();
        i
    }

    fn from_mag_u128(mut mag: u128, negative: bool) -> BigInt {
        let mut limbs = Vec::with_capacity(4);
        loop {
            limbs.push(Limb(mag as BaseInt));
            mag >>= Limb::BITS;
            if mag == 0 { break; }
        }

        BigInt::from_limbs(limbs, negative)
    }

    /**
     * Returns the limbs of the magnitude, least-significant first.
     */
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /**
     * Returns the sign of the BigInt as either -1, 0 or 1 for self being negative, zero
     * or positive, respectively.
     */
    #[inline(always)]
    pub fn sign(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /**
     * Consumes self and returns the absolute value
     */
    #[inline]
    pub fn abs(mut self) -> BigInt {
        self.negative = false;
        self
    }

    /**
     * Returns the least-significant limb of self.
     */
    #[inline]
    pub fn to_single_limb(&self) -> Limb {
        self.limbs[0]
    }

    /**
     * Compare the absolute value of self to the absolute value of other,
     * returning an Ordering with the result.
     */
    pub fn abs_cmp(&self, other: &BigInt) -> Ordering {
        ll::cmp_mag(&self.limbs, &other.limbs)
    }

    /**
     * Returns the equality of the absolute values of self and
     * other.
     */
    pub fn abs_eq(&self, other: &BigInt) -> bool {
        self.abs_cmp(other) == Ordering::Equal
    }

    /**
     * Negates `self` in-place
     */
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /**
     * Strips most-significant zero limbs (keeping one for zero) and clears
     * the sign of zero.
     */
    fn normalize(&mut self) {
        if self.limbs.is_empty() {
            self.limbs.push(Limb(0));
        }
        let n = ll::normalized_len(&self.limbs);
        self.limbs.truncate(n);
        if ll::is_zero(&self.limbs) {
            self.negative = false;
        }
    }

    /**
     * Make sure the BigInt is "well-formed", i.e. that it has a top limb that
     * is non-zero unless it is zero, and that zero is not negative.
     */
    fn well_formed(&self) -> bool {
        match self.limbs.last() {
            None => false,
            Some(&top) => {
                if self.limbs.len() == 1 {
                    !(top == 0 && self.negative)
                } else {
                    top != 0
                }
            }
        }
    }

    /**
     * Returns a string containing the value of self in base `base`. For bases greater than
     * ten, if `upper` is true, upper-case letters are used, otherwise lower-case ones are used.
     *
     * Panics if `base` is less than two or greater than 36.
     */
    pub fn to_str_radix(&self, base: u32, upper: bool) -> String {
        debug_assert!(self.well_formed());
        check_radix(base);

        let mut s = String::with_capacity(ll::base::num_base_digits(&self.limbs, base) + 1);
        if self.negative {
            s.push('-');
        }
        self.push_abs_digits(&mut s, base, upper);

        s
    }

    /**
     * Writes the value of self in base `base` to `w`, with the same digits as
     * `to_str_radix`. Digits are streamed through a small buffer rather than
     * collected into a `String` first.
     *
     * Panics if `base` is less than two or greater than 36.
     */
    pub fn write_radix<W: io::Write>(&self, w: &mut W, base: u32, upper: bool) -> io::Result<()> {
        debug_assert!(self.well_formed());
        check_radix(base);

        if self.negative {
            w.write_all(b"-")?;
        }

        let letter = if upper { b'A' } else { b'a' };
        let mut buf = [0u8; 256];
        let mut len = 0;
        // The digit callback can't fail, so the first error is kept and
        // later digits are dropped.
        let mut result = Ok(());
        ll::base::to_base(base, &self.limbs, |b| {
            if result.is_err() {
                return;
            }
            buf[len] = if b < 10 { b + b'0' } else { (b - 10) + letter };
            len += 1;
            if len == buf.len() {
                result = w.write_all(&buf);
                len = 0;
            }
        });
        result?;

        w.write_all(&buf[..len])
    }

    fn push_abs_digits(&self, s: &mut String, base: u32, upper: bool) {
        let letter = if upper { b'A' } else { b'a' };
        ll::base::to_base(base, &self.limbs, |b| {
            let c = if b < 10 { b + b'0' } else { (b - 10) + letter };
            s.push(c as char);
        });
    }

    /**
     * Creates a new BigInt from the given string in base `base`. The string is an optional
     * `-` followed by at least one digit valid in `base`.
     *
     * Panics if `base` is less than two or greater than 36.
     */
    pub fn from_str_radix(src: &str, base: u32) -> Result<BigInt, ParseBigIntError> {
        check_radix(base);

        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };

        if digits.is_empty() {
            return Err(ParseBigIntError { kind: BigIntErrorKind::Empty });
        }

        let mut buf = Vec::with_capacity(digits.len());
        for c in digits.chars() {
            match c.to_digit(base) {
                Some(d) => buf.push(d as u8),
                None => return Err(ParseBigIntError { kind: BigIntErrorKind::InvalidDigit }),
            }
        }

        Ok(BigInt::from_limbs(ll::base::from_base(&buf, base), negative))
    }

    /**
     * Divide self by other, returning the quotient, Q, and remainder, R as (Q, R).
     *
     * With N = self, D = other, Q and R satisfy: `N = QD + R` and `|R| < |D|`.
     * Q is truncated toward zero and R has the sign of N.
     *
     * Returns `Err(DivisionByZero)` if `other` is zero.
     */
    pub fn divmod(&self, other: &BigInt) -> Result<(BigInt, BigInt), DivisionByZero> {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());
        if other.is_zero() {
            return Err(DivisionByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }

        let ns = self.limbs.len();
        let ds = other.limbs.len();
        let qs = if ns < ds { 1 } else { ns - ds + 1 };

        let mut q = vec![Limb(0); qs];
        let mut r = vec![Limb(0); ds];
        ll::divrem(&mut q, &mut r, &self.limbs, &other.limbs);

        Ok((BigInt::from_limbs(q, self.negative != other.negative),
            BigInt::from_limbs(r, self.negative)))
    }

    // The operator forms have nowhere to report a zero divisor.
    fn divmod_or_panic(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.divmod(other) {
            Ok(qr) => qr,
            Err(DivisionByZero) => ll::divide_by_zero(),
        }
    }

    /// Returns `self / other`, or `None` if `other` is zero.
    pub fn checked_div(&self, other: &BigInt) -> Option<BigInt> {
        self.divmod(other).ok().map(|(q, _)| q)
    }

    /// Returns `self % other`, or `None` if `other` is zero.
    pub fn checked_rem(&self, other: &BigInt) -> Option<BigInt> {
        self.divmod(other).ok().map(|(_, r)| r)
    }

    /**
     * Raises self to the power of exp
     */
    pub fn pow(&self, exp: usize) -> BigInt {
        debug_assert!(self.well_formed());
        match exp {
            0 => BigInt::one(),
            1 => self.clone(),
            2 => self.square(),
            _ => {
                let mut base = self.clone();
                let mut ret = BigInt::one();
                let mut exp = exp;
                while exp > 0 {
                    if exp & 1 == 1 {
                        ret = &ret * &base;
                    }
                    exp >>= 1;
                    if exp > 0 {
                        base = base.square();
                    }
                }

                ret
            }
        }
    }

    /**
     * Returns the square of `self`.
     */
    pub fn square(&self) -> BigInt {
        self.mul_impl(self)
    }

    /**
     * Returns whether or not this number is even.
     */
    #[inline]
    pub fn is_even(&self) -> bool {
        debug_assert!(self.well_formed());
        (self.to_single_limb().0 & 1) == 0
    }

    /**
     * Returns the number of trailing zero bits in this number
     *
     * Returns 0 if `self == 0`
     */
    #[inline]
    pub fn trailing_zeros(&self) -> u32 {
        debug_assert!(self.well_formed());
        match self.limbs.iter().position(|&l| l != 0) {
            None => 0,
            Some(i) => (i * Limb::BITS) as u32 + self.limbs[i].trailing_zeros(),
        }
    }

    /**
     * Returns the number of ones (the population count) in this number
     *
     * If this number is negative, it has infinitely many ones (in
     * two's complement), so this returns `None`.
     */
    pub fn count_ones(&self) -> Option<u32> {
        debug_assert!(self.well_formed());
        if self.negative {
            None
        } else {
            Some(self.limbs.iter().map(|l| l.count_ones()).sum())
        }
    }

    /**
     * Returns the number of bits required to represent (the absolute
     * value of) this number, that is, `floor(log2(abs(self))) + 1`.
     *
     * Returns 1 if `self == 0`.
     */
    #[inline]
    pub fn bit_length(&self) -> u32 {
        if self.is_zero() {
            1
        } else {
            let top = self.limbs[self.limbs.len() - 1];
            (self.limbs.len() * Limb::BITS) as u32 - top.leading_zeros()
        }
    }

    /**
     * Returns the value of the `bit`th bit in this number, as if it
     * were represented in two's complement.
     */
    #[inline]
    pub fn bit(&self, bit: u32) -> bool {
        let word = bit as usize / Limb::BITS;
        let subbit = bit as usize % Limb::BITS;
        if word < self.limbs.len() {
            let b = self.limbs[word].0 & (1 << subbit) != 0;
            if !self.negative {
                b
            } else {
                // Bits up to and including the lowest set bit match the
                // magnitude, everything above it is complemented.
                b ^ (bit > self.trailing_zeros())
            }
        } else {
            // Past the stored limbs every bit is the filler's.
            self.negative
        }
    }

    /**
     * Shifts left by `n` bits, or right by `-n` bits when `n` is negative.
     */
    pub fn shift(&self, n: i64) -> BigInt {
        let cnt = n.unsigned_abs() as usize;
        if n >= 0 {
            self.shl_impl(cnt)
        } else {
            self.shr_impl(cnt)
        }
    }

    /**
     * Adds `other` to `self` with `other` taking the sign `other_negative`, so
     * subtraction is the same routine with the sign flipped.
     */
    fn add_signed(&self, other: &BigInt, other_negative: bool) -> BigInt {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        if self.negative == other_negative {
            let (xs, ys) = if self.limbs.len() >= other.limbs.len() {
                (&self.limbs, &other.limbs)
            } else {
                (&other.limbs, &self.limbs)
            };

            let n = xs.len();
            let mut w = vec![Limb(0); n + 1];
            w[n] = ll::add(&mut w[..n], xs, ys);

            return BigInt::from_limbs(w, self.negative);
        }

        // Signs differ: subtract the smaller magnitude from the larger and
        // keep the sign of the larger.
        let (xs, ys, negative) = match self.abs_cmp(other) {
            Ordering::Equal => return BigInt::zero(),
            Ordering::Greater => (&self.limbs, &other.limbs, self.negative),
            Ordering::Less => (&other.limbs, &self.limbs, other_negative),
        };

        let mut w = vec![Limb(0); xs.len()];
        let borrow = ll::sub(&mut w, xs, ys);
        debug_assert!(borrow == 0);

        BigInt::from_limbs(w, negative)
    }

    fn add_impl(&self, other: &BigInt) -> BigInt {
        self.add_signed(other, other.negative)
    }

    fn sub_impl(&self, other: &BigInt) -> BigInt {
        self.add_signed(other, !other.negative)
    }

    /**
     * Single-limb version of `add_signed`.
     */
    fn add_limb(&self, l: Limb, l_negative: bool) -> BigInt {
        debug_assert!(self.well_formed());

        let n = self.limbs.len();
        if self.negative == l_negative {
            let mut w = vec![Limb(0); n + 1];
            w[n] = ll::add_1(&mut w[..n], &self.limbs, l);
            return BigInt::from_limbs(w, self.negative);
        }

        if n > 1 || self.limbs[0] >= l {
            let mut w = vec![Limb(0); n];
            let borrow = ll::sub_1(&mut w, &self.limbs, l);
            debug_assert!(borrow == 0);
            BigInt::from_limbs(w, self.negative)
        } else {
            BigInt::from_limbs(vec![l - self.limbs[0]], l_negative)
        }
    }

    fn mul_impl(&self, other: &BigInt) -> BigInt {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }

        let mut w = vec![Limb(0); self.limbs.len() + other.limbs.len()];
        ll::mul(&mut w, &self.limbs, &other.limbs);

        BigInt::from_limbs(w, self.negative != other.negative)
    }

    fn mul_limb(&self, l: Limb, l_negative: bool) -> BigInt {
        if l == 0 || self.is_zero() {
            return BigInt::zero();
        }

        let n = self.limbs.len();
        let mut w = vec![Limb(0); n + 1];
        w[n] = ll::mul_1(&mut w[..n], &self.limbs, l);

        BigInt::from_limbs(w, self.negative != l_negative)
    }

    fn divrem_limb(&self, d: Limb, d_negative: bool) -> (BigInt, BigInt) {
        if d == 0 {
            ll::divide_by_zero();
        }

        let mut q = vec![Limb(0); self.limbs.len()];
        let r = ll::divrem_1(&mut q, &self.limbs, d);

        (BigInt::from_limbs(q, self.negative != d_negative),
         BigInt::from_limbs(vec![r], self.negative))
    }

    fn div_impl(&self, other: &BigInt) -> BigInt {
        self.divmod_or_panic(other).0
    }

    fn rem_impl(&self, other: &BigInt) -> BigInt {
        self.divmod_or_panic(other).1
    }

    fn shl_impl(&self, cnt: usize) -> BigInt {
        debug_assert!(self.well_formed());
        if cnt == 0 || self.is_zero() {
            return self.clone();
        }

        BigInt::from_limbs(shl_mag(&self.limbs, cnt), self.negative)
    }

    fn shr_impl(&self, cnt: usize) -> BigInt {
        debug_assert!(self.well_formed());
        if cnt == 0 || self.is_zero() {
            return self.clone();
        }

        if !self.negative {
            return BigInt::from_limbs(shr_mag(&self.limbs, cnt), false);
        }

        // Rounds toward negative infinity: -(((|a| - 1) >> cnt) + 1)
        let mut m = self.limbs.clone();
        ll::decr(&mut m, Limb(1));
        let mut w = shr_mag(&m, cnt);
        let c = ll::incr(&mut w, Limb(1));
        if c != 0 {
            w.push(c);
        }

        BigInt::from_limbs(w, true)
    }

    /**
     * The limbs of `self` in two's complement form. Together with
     * `Filler::of(self.negative)` this is the infinite bit pattern of self.
     */
    fn twos_complement_limbs(&self) -> Vec<Limb> {
        let mut limbs = self.limbs.clone();
        if self.negative {
            ll::twos_complement(&mut limbs);
        }
        limbs
    }

    fn bitop<F>(&self, other: &BigInt, op: F) -> BigInt
        where F: Fn(Limb, Limb) -> Limb
    {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        let xs = self.twos_complement_limbs();
        let ys = other.twos_complement_limbs();

        let (mut w, fill) = ll::bitop(&xs, Filler::of(self.negative),
                                      &ys, Filler::of(other.negative), op);

        if fill.is_negative() {
            // Back to sign-magnitude. All-zero limbs under an all-ones filler
            // are -B^n, which needs one more limb.
            if ll::twos_complement(&mut w) != 0 {
                w.push(Limb(1));
            }
            BigInt::from_limbs(w, true)
        } else {
            BigInt::from_limbs(w, false)
        }
    }

    fn bitand_impl(&self, other: &BigInt) -> BigInt {
        self.bitop(other, |x, y| x & y)
    }

    fn bitor_impl(&self, other: &BigInt) -> BigInt {
        self.bitop(other, |x, y| x | y)
    }

    fn bitxor_impl(&self, other: &BigInt) -> BigInt {
        self.bitop(other, |x, y| x ^ y)
    }

    /**
     * Three-way comparison against a value small enough for an `i128`.
     */
    fn cmp_i128(&self, v: i128) -> Ordering {
        // Three limbs stay below 2^96, which any 64-bit primitive is too.
        if self.limbs.len() > 3 {
            return if self.negative { Ordering::Less } else { Ordering::Greater };
        }

        let mag = self.limbs.iter().rev()
            .fold(0i128, |acc, l| (acc << Limb::BITS) | l.0 as i128);
        let x = if self.negative { -mag } else { mag };

        x.cmp(&v)
    }

    fn abs_to_u128(&self) -> Option<u128> {
        if self.limbs.len() * Limb::BITS > 128 {
            return None;
        }

        Some(self.limbs.iter().rev()
             .fold(0u128, |acc, l| (acc << Limb::BITS) | l.0 as u128))
    }
}

fn check_radix(base: u32) {
    if base < 2 || base > 36 {
        panic!("invalid radix: {}", base);
    }
}

fn shl_mag(xs: &[Limb], cnt: usize) -> Vec<Limb> {
    let whole = cnt / Limb::BITS;
    let bits = (cnt % Limb::BITS) as u32;
    let n = xs.len();

    let mut w = vec![Limb(0); whole + n + 1];
    if bits == 0 {
        w[whole..whole + n].copy_from_slice(xs);
    } else {
        w[whole + n] = ll::shl(&mut w[whole..whole + n], xs, bits);
    }

    w
}

fn shr_mag(xs: &[Limb], cnt: usize) -> Vec<Limb> {
    let whole = cnt / Limb::BITS;
    let bits = (cnt % Limb::BITS) as u32;
    if whole >= xs.len() {
        return vec![Limb(0)];
    }

    let src = &xs[whole..];
    let mut w = vec![Limb(0); src.len()];
    if bits == 0 {
        w.copy_from_slice(src);
    } else {
        ll::shr(&mut w, src, bits);
    }

    w
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl PartialEq<BigInt> for BigInt {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt { }

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());

        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.abs_cmp(other),
            (true, true) => other.abs_cmp(self),
        }
    }
}

impl PartialOrd<BigInt> for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H>(&self, state: &mut H) where H: hash::Hasher {
        debug_assert!(self.well_formed());
        self.negative.hash(state);
        self.limbs.hash(state);
    }
}

// BigInt op BigInt for every mix of owned and borrowed operands. The
// by-reference form does the work.
macro_rules! impl_binop (
    ($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident, $imp:ident) => {
        impl<'a, 'b> $tr<&'a BigInt> for &'b BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'a BigInt) -> BigInt {
                self.$imp(other)
            }
        }

        impl<'a> $tr<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'a BigInt) -> BigInt {
                self.$imp(other)
            }
        }

        impl<'a> $tr<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                self.$imp(&other)
            }
        }

        impl $tr<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                self.$imp(&other)
            }
        }

        impl<'a> $tr_assign<&'a BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, other: &'a BigInt) {
                *self = self.$imp(other);
            }
        }

        impl $tr_assign<BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, other: BigInt) {
                *self = self.$imp(&other);
            }
        }
    }
);

impl_binop!(Add,    add,    AddAssign,    add_assign,    add_impl);
impl_binop!(Sub,    sub,    SubAssign,    sub_assign,    sub_impl);
impl_binop!(Mul,    mul,    MulAssign,    mul_assign,    mul_impl);
impl_binop!(Div,    div,    DivAssign,    div_assign,    div_impl);
impl_binop!(Rem,    rem,    RemAssign,    rem_assign,    rem_impl);
impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_impl);
impl_binop!(BitOr,  bitor,  BitOrAssign,  bitor_assign,  bitor_impl);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_impl);

impl<'a, 'b> DivRem<&'a BigInt> for &'b BigInt {
    type Output = (BigInt, BigInt);

    #[inline]
    fn divrem(self, other: &'a BigInt) -> (BigInt, BigInt) {
        self.divmod_or_panic(other)
    }
}

impl DivRem<BigInt> for BigInt {
    type Output = (BigInt, BigInt);

    #[inline]
    fn divrem(self, other: BigInt) -> (BigInt, BigInt) {
        self.divmod_or_panic(&other)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        debug_assert!(self.well_formed());
        self.negate();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// In two's complement `!x == -x - 1`.
impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        -self.add_limb(Limb(1), false)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        !&self
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, cnt: usize) -> BigInt {
        self.shl_impl(cnt)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, cnt: usize) -> BigInt {
        self.shl_impl(cnt)
    }
}

impl ShlAssign<usize> for BigInt {
    #[inline]
    fn shl_assign(&mut self, cnt: usize) {
        *self = self.shl_impl(cnt);
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, cnt: usize) -> BigInt {
        self.shr_impl(cnt)
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, cnt: usize) -> BigInt {
        self.shr_impl(cnt)
    }
}

impl ShrAssign<usize> for BigInt {
    #[inline]
    fn shr_assign(&mut self, cnt: usize) {
        *self = self.shr_impl(cnt);
    }
}

// Arithmetic with primitive integers. Anything whose magnitude fits in a limb
// uses the single-limb routines; larger values are widened to a BigInt.

enum Operand {
    Small(Limb, bool),
    Big(BigInt),
}

trait Primitive: Copy + Into<BigInt> {
    fn operand(self) -> Operand;
}

macro_rules! impl_primitive (
    (signed $($t:ty),*) => (
        $(impl Primitive for $t {
            #[inline]
            fn operand(self) -> Operand {
                let mag = self.unsigned_abs();
                if mag as u128 <= BaseInt::MAX as u128 {
                    Operand::Small(Limb(mag as BaseInt), self < 0)
                } else {
                    Operand::Big(BigInt::from(self))
                }
            }
        })*
    );
    (unsigned $($t:ty),*) => (
        $(impl Primitive for $t {
            #[inline]
            fn operand(self) -> Operand {
                if self as u128 <= BaseInt::MAX as u128 {
                    Operand::Small(Limb(self as BaseInt), false)
                } else {
                    Operand::Big(BigInt::from(self))
                }
            }
        })*
    );
);

impl_primitive!(signed   i32, i64);
impl_primitive!(unsigned u32, u64, usize);

fn prim_add<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    match b.operand() {
        Operand::Small(l, neg) => a.add_limb(l, neg),
        Operand::Big(b) => a.add_impl(&b),
    }
}

fn prim_sub<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    match b.operand() {
        Operand::Small(l, neg) => a.add_limb(l, !neg),
        Operand::Big(b) => a.sub_impl(&b),
    }
}

fn prim_mul<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    match b.operand() {
        Operand::Small(l, neg) => a.mul_limb(l, neg),
        Operand::Big(b) => a.mul_impl(&b),
    }
}

fn prim_div<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    match b.operand() {
        Operand::Small(l, neg) => a.divrem_limb(l, neg).0,
        Operand::Big(b) => a.div_impl(&b),
    }
}

fn prim_rem<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    match b.operand() {
        Operand::Small(l, neg) => a.divrem_limb(l, neg).1,
        Operand::Big(b) => a.rem_impl(&b),
    }
}

fn prim_bitand<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    a.bitand_impl(&b.into())
}

fn prim_bitor<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    a.bitor_impl(&b.into())
}

fn prim_bitxor<T: Primitive>(a: &BigInt, b: T) -> BigInt {
    a.bitxor_impl(&b.into())
}

macro_rules! impl_arith_prim (
    ($t:ty: $(($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident, $f:ident)),*) => (
        $(
            impl $tr<$t> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: $t) -> BigInt {
                    $f(&self, other)
                }
            }

            impl<'a> $tr<$t> for &'a BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: $t) -> BigInt {
                    $f(self, other)
                }
            }

            impl $tr_assign<$t> for BigInt {
                #[inline]
                fn $method_assign(&mut self, other: $t) {
                    *self = $f(self, other);
                }
            }

            impl $tr<BigInt> for $t {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: BigInt) -> BigInt {
                    BigInt::from(self).$method(&other)
                }
            }

            impl<'a> $tr<&'a BigInt> for $t {
                type Output = BigInt;

                #[inline]
                fn $method(self, other: &'a BigInt) -> BigInt {
                    BigInt::from(self).$method(other)
                }
            }
        )*
    );
    ($($t:ty),*) => (
        $(impl_arith_prim!($t:
            (Add,    add,    AddAssign,    add_assign,    prim_add),
            (Sub,    sub,    SubAssign,    sub_assign,    prim_sub),
            (Mul,    mul,    MulAssign,    mul_assign,    prim_mul),
            (Div,    div,    DivAssign,    div_assign,    prim_div),
            (Rem,    rem,    RemAssign,    rem_assign,    prim_rem),
            (BitAnd, bitand, BitAndAssign, bitand_assign, prim_bitand),
            (BitOr,  bitor,  BitOrAssign,  bitor_assign,  prim_bitor),
            (BitXor, bitxor, BitXorAssign, bitxor_assign, prim_bitxor)
        );)*
    );
);

impl_arith_prim!(i32, i64, u32, u64, usize);

macro_rules! impl_cmp_prim (
    ($($t:ty),*) => (
        $(
            impl PartialEq<$t> for BigInt {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.cmp_i128(*other as i128) == Ordering::Equal
                }
            }

            impl PartialEq<BigInt> for $t {
                #[inline]
                fn eq(&self, other: &BigInt) -> bool {
                    other.eq(self)
                }
            }

            impl PartialOrd<$t> for BigInt {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp_i128(*other as i128))
                }
            }

            impl PartialOrd<BigInt> for $t {
                #[inline]
                fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                    Some(other.cmp_i128(*self as i128).reverse())
                }
            }
        )*
    );
);

impl_cmp_prim!(i32, i64, u32, u64, usize);

macro_rules! impl_from_prim (
    (signed $($t:ty),*) => {
        $(impl ::std::convert::From<$t> for BigInt {
            #[inline]
            fn from(val: $t) -> BigInt {
                BigInt::from_mag_u128(val.unsigned_abs() as u128, val < 0)
            }
        })*
    };
    (unsigned $($t:ty),*) => {
        $(impl ::std::convert::From<$t> for BigInt {
            #[inline]
            fn from(val: $t) -> BigInt {
                BigInt::from_mag_u128(val as u128, false)
            }
        })*
    };
);

impl_from_prim!(signed   i8, i16, i32, i64, i128, isize);
impl_from_prim!(unsigned u8, u16, u32, u64, u128, usize);

// Number formatting - There's not much difference between the impls,
// hence the macro

macro_rules! impl_fmt (
    ($t:path, $radix:expr, $upper:expr, $prefix:expr) => {
        impl $t for BigInt {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                // pad_integral adds its own sign
                let mut s = String::new();
                self.push_abs_digits(&mut s, $radix, $upper);
                f.pad_integral(!self.negative, $prefix, &s)
            }
        }
    };

    ($t:path, $radix:expr, $prefix:expr) => {
        impl_fmt!($t, $radix, false, $prefix);
    }
);

impl_fmt!(fmt::Binary,    2, "0b");
impl_fmt!(fmt::Octal,     8, "0o");
impl_fmt!(fmt::Display,  10, "");
impl_fmt!(fmt::Debug,    10, "");
impl_fmt!(fmt::LowerHex, 16, false, "0x");
impl_fmt!(fmt::UpperHex, 16, true, "0x");

// String parsing

/// The error returned when parsing a `BigInt` from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError { kind: BigIntErrorKind }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntErrorKind {
    /// No digits: the input was empty or just a sign.
    Empty,
    InvalidDigit
}

impl ParseBigIntError {
    pub fn kind(&self) -> &BigIntErrorKind {
        &self.kind
    }

    fn message(&self) -> &str {
        match self.kind {
            BigIntErrorKind::Empty => "cannot parse integer from empty string",
            BigIntErrorKind::InvalidDigit => "invalid digit found in string"
        }
    }
}

impl Error for ParseBigIntError { }

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message().fmt(f)
    }
}

/// The error returned by `BigInt::divmod` for a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl Error for DivisionByZero { }

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("divide by zero")
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(src: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(src, 10)
    }
}

// num-traits / num-integer

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    #[inline]
    fn from_str_radix(src: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(src, radix)
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        self.clone().abs()
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if *self <= *other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        BigInt::from(self.sign())
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let mag = self.abs_to_u128()?;
        if self.negative {
            if mag <= 1 << 127 {
                Some(0i128.wrapping_sub(mag as i128))
            } else {
                None
            }
        } else {
            i128::try_from(mag).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            None
        } else {
            self.abs_to_u128()
        }
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

impl Integer for BigInt {
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        self.divmod_or_panic(other)
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        self.div_mod_floor(other).0
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        self.div_mod_floor(other).1
    }

    fn div_mod_floor(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (q, r) = self.divmod_or_panic(other);
        // A non-zero remainder must take the divisor's sign.
        if !r.is_zero() && r.negative != other.negative {
            (q.add_limb(Limb(1), true), r + other)
        } else {
            (q, r)
        }
    }

    /**
     * Calculates the greatest common divisor of `self` and `other`. The
     * result is never negative, and `gcd(0, 0) == 0`.
     */
    fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.clone().abs();
        let mut b = other.clone().abs();
        while !b.is_zero() {
            let r = a.rem_impl(&b);
            a = b;
            b = r;
        }

        a
    }

    /**
     * Calculates the lowest common multiple of `self` and `other`. The
     * result is never negative.
     */
    fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }

        let g = self.gcd(other);
        (self.div_impl(&g) * other).abs()
    }

    #[inline]
    fn divides(&self, other: &BigInt) -> bool {
        self.is_multiple_of(other)
    }

    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        self.rem_impl(other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        BigInt::is_even(self)
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !BigInt::is_even(self)
    }
}
