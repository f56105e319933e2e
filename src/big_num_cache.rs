use lazy_static::*;

use crate::big_num_constants::*;

lazy_static! {
    /// For every radix, the largest power of it that still fits in one limb
    /// and the number of digits that power spans.
    pub static ref RADIX_GROUPS: [(Limb, usize); MAX_RADIX as usize + 1] = {
        let mut groups = [(0, 0); MAX_RADIX as usize + 1];
        for radix in MIN_RADIX..=MAX_RADIX {
            let mut divisor = radix;
            let mut digits = 1;
            while divisor * radix < BASE {
                divisor *= radix;
                digits += 1;
            }
            groups[radix as usize] = (divisor, digits);
        }
        groups
    };
}

#[test]
fn test_radix_groups() {
    for radix in MIN_RADIX..=MAX_RADIX {
        let (divisor, digits) = RADIX_GROUPS[radix as usize];
        assert_eq!(divisor, radix.pow(digits as u32));
        assert!(divisor < BASE);
        assert!(divisor * radix >= BASE);
    }
    #[cfg(not(feature = "wide-limbs"))]
    assert_eq!(RADIX_GROUPS[10], (1000, 3));
}
