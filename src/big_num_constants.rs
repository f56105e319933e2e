use static_assertions::const_assert;

/// One digit of the internal representation.
pub type Limb = u32;

/// Accumulator wide enough for a limb product plus carries.
pub type DoubleLimb = u64;

#[cfg(not(feature = "wide-limbs"))]
pub const BASE_SHIFT: u32 = 10;

#[cfg(feature = "wide-limbs")]
pub const BASE_SHIFT: u32 = 15;

pub const BASE: Limb = 1 << BASE_SHIFT;

pub const BASE_MASK: Limb = BASE - 1;

/// Every value is allocated with at least this many limbs.
pub const MIN_LIMBS: usize = 33;

pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

const_assert!(DoubleLimb::BITS >= 2 * Limb::BITS);
const_assert!(BASE_SHIFT < Limb::BITS);
const_assert!(BASE_MASK > MAX_RADIX);
const_assert!(MIN_LIMBS * BASE_SHIFT as usize >= u64::BITS as usize);
