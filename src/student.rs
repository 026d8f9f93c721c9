use std::fmt;

#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

/// A single marksheet entry. Fields can't change after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Student {
    number: String,
    mark: f32,
}

impl Student {
    #[inline]
    pub fn new(number: impl Into<String>, mark: f32) -> Self {
        Self {
            number: number.into(),
            mark,
        }
    }

    #[inline]
    pub fn student_number(&self) -> &str {
        &self.number
    }

    #[inline]
    pub fn mark(&self) -> f32 {
        self.mark
    }
}

/// Marks compare by their bits, so a `NaN` mark still equals itself.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.mark.to_bits() == other.mark.to_bits()
    }
}

impl Eq for Student {}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.mark)
    }
}
