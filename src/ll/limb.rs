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
use std::fmt;
use std::ops::{
    Add, Sub, Mul,
    Shl, Shr, Not, BitAnd, BitOr, BitXor
};

/// The primitive type stored in a limb.
pub type BaseInt = u32;

/// An integer twice as wide as `BaseInt`, used for carries and the
/// two-limb by one-limb division step.
pub type DoubleInt = u64;

/**
 * Helper newtype for operations.
 *
 * A "Limb" is a single digit in base 2^32.
 */
#[derive(Copy, Clone, Default, Eq, Ord, Hash)]
pub struct Limb(pub BaseInt);

impl Limb {
    pub const BITS : usize = 32;

    /// The largest value a limb can hold, `B - 1`.
    pub const MAX : Limb = Limb(BaseInt::MAX);

    /// The limb base `B = 2^32` as a double-width integer.
    pub const BASE : DoubleInt = 1 << Limb::BITS;

    /**
     * Performs `self + other`, returning the result and whether or not the addition overflowed
     */
    #[inline(always)]
    pub fn add_overflow(self, other: Limb) -> (Limb, bool) {
        let (val, c) = self.0.overflowing_add(other.0);
        (Limb(val), c)
    }

    /**
     * Performs `self - other`, returning the result and whether or not the subtraction overflowed
     */
    #[inline(always)]
    pub fn sub_overflow(self, other: Limb) -> (Limb, bool) {
        let (val, c) = self.0.overflowing_sub(other.0);
        (Limb(val), c)
    }

    /**
     * Performs `self * other` returning the two-limb result as (high, low).
     */
    #[inline(always)]
    pub fn mul_hilo(self, other: Limb) -> (Limb, Limb) {
        mul(self, other)
    }

    /**
     * Returns whether or not the highest bit in the limb is set.
     *
     * Algorithm D wants the top limb of the divisor to be `d >= BASE/2`.
     */
    #[inline(always)]
    pub fn high_bit_set(self) -> bool {
        (self & Limb(1 << (Limb::BITS - 1))) != 0
    }

    /**
     * Returns the number of leading zeros in the limb
     */
    #[inline(always)]
    pub fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /**
     * Returns the number of trailing zeros in the limb
     */
    #[inline(always)]
    pub fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    #[inline(always)]
    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Joins `(high, low)` into a single double-width value.
    #[inline(always)]
    pub fn join(high: Limb, low: Limb) -> DoubleInt {
        ((high.0 as DoubleInt) << Limb::BITS) | low.0 as DoubleInt
    }

    /// Splits a double-width value into `(high, low)`.
    #[inline(always)]
    pub fn split(n: DoubleInt) -> (Limb, Limb) {
        (Limb((n >> Limb::BITS) as BaseInt), Limb(n as BaseInt))
    }
}

/**
 * Performs the full multiplication `u * v`, returning the two-limb product as (high, low).
 */
#[inline(always)]
pub fn mul(u: Limb, v: Limb) -> (Limb, Limb) {
    Limb::split(u.0 as DoubleInt * v.0 as DoubleInt)
}

/**
 * Performs the two-word addition (ah, al) + (bh, bl), ignoring any overflow.
 */
#[inline(always)]
pub fn add_2(ah: Limb, al: Limb, bh: Limb, bl: Limb) -> (Limb, Limb) {
    let (low, carry) = al.add_overflow(bl);
    let high = ah + bh + carry;

    (high, low)
}

/**
 * Performs the two-word subtraction (ah, al) - (bh, bl), ignoring any borrow.
 */
#[inline(always)]
pub fn sub_2(ah: Limb, al: Limb, bh: Limb, bl: Limb) -> (Limb, Limb) {
    let (low, carry) = al.sub_overflow(bl);
    let high = ah - bh - carry;

    (high, low)
}

/**
 * Divides the two-limb numerator `(nh, nl)` by `d`, returning a single-limb
 * quotient, Q, and remainder, R, as (Q, R).
 *
 * `nh` must be less than `d` so that the quotient fits in a single limb.
 */
#[inline(always)]
pub fn div(nh: Limb, nl: Limb, d: Limb) -> (Limb, Limb) {
    debug_assert!(d != 0);
    debug_assert!(nh < d);

    let n = Limb::join(nh, nl);
    let d = d.0 as DoubleInt;

    (Limb((n / d) as BaseInt), Limb((n % d) as BaseInt))
}

// Arithmetic on limbs wraps; carries are tracked by the callers through
// `add_overflow`/`sub_overflow`.
macro_rules! impl_wrapping (
    ($tr:ident, $method:ident, $wrapping:ident: $($rhs:ty => |$v:ident| $to_base:expr),*) => {
        $(impl $tr<$rhs> for Limb {
            type Output = Limb;

            #[inline(always)]
            fn $method(self, $v: $rhs) -> Limb {
                Limb(self.0.$wrapping($to_base))
            }
        })*
    }
);

impl_wrapping!(Add, add, wrapping_add:
               Limb => |v| v.0, BaseInt => |v| v, bool => |v| v as BaseInt);
impl_wrapping!(Sub, sub, wrapping_sub:
               Limb => |v| v.0, BaseInt => |v| v, bool => |v| v as BaseInt);
impl_wrapping!(Mul, mul, wrapping_mul:
               BaseInt => |v| v);

macro_rules! impl_bitwise (
    ($($tr:ident, $method:ident, $op:tt);*) => {
        $(impl $tr<Limb> for Limb {
            type Output = Limb;

            #[inline(always)]
            fn $method(self, other: Limb) -> Limb {
                Limb(self.0 $op other.0)
            }
        })*
    }
);

impl_bitwise!(BitAnd, bitand, &; BitOr, bitor, |; BitXor, bitxor, ^);

impl Not for Limb {
    type Output = Limb;

    #[inline(always)]
    fn not(self) -> Limb {
        Limb(!self.0)
    }
}

// Shift counts of any integer type `BaseInt` can be shifted by.
impl<I> Shl<I> for Limb where BaseInt: Shl<I, Output=BaseInt> {
    type Output = Limb;

    #[inline(always)]
    fn shl(self, cnt: I) -> Limb {
        Limb(self.0 << cnt)
    }
}

impl<I> Shr<I> for Limb where BaseInt: Shr<I, Output=BaseInt> {
    type Output = Limb;

    #[inline(always)]
    fn shr(self, cnt: I) -> Limb {
        Limb(self.0 >> cnt)
    }
}

impl PartialEq<Limb> for Limb {
    #[inline(always)]
    fn eq(&self, other: &Limb) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<BaseInt> for Limb {
    #[inline(always)]
    fn eq(&self, other: &BaseInt) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<Limb> for Limb {
    #[inline(always)]
    fn partial_cmp(&self, other: &Limb) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl PartialOrd<BaseInt> for Limb {
    #[inline(always)]
    fn partial_cmp(&self, other: &BaseInt) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
