use std::fmt;

use crate::big_num_constants::Limb;

/// Alias for a `Result` with the error type `BigNumError`.
pub type Result<T> = std::result::Result<T, BigNumError>;

/// Errors reported by the arithmetic kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BigNumError {
    /// Growing a limb buffer to `limbs` limbs failed.
    OutOfMemory { limbs: usize },
    DivisionByZero,
    /// A value that does not fit in one limb was given where a limb is expected.
    InvalidLimb(Limb),
    InvalidRadix(u32),
}

impl fmt::Display for BigNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumError::OutOfMemory { limbs } => {
                write!(f, "out of memory growing limb buffer to {} limbs", limbs)
            }
            BigNumError::DivisionByZero => f.write_str("division by zero"),
            BigNumError::InvalidLimb(limb) => write!(f, "invalid limb value {:#x}", limb),
            BigNumError::InvalidRadix(radix) => write!(f, "radix {} out of range 2..=36", radix),
        }
    }
}

impl std::error::Error for BigNumError {}

#[test]
fn test_display() {
    assert_eq!(BigNumError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        BigNumError::OutOfMemory { limbs: 64 }.to_string(),
        "out of memory growing limb buffer to 64 limbs"
    );
    assert_eq!(BigNumError::InvalidLimb(0x400).to_string(), "invalid limb value 0x400");
    assert_eq!(BigNumError::InvalidRadix(37).to_string(), "radix 37 out of range 2..=36");
}
