use core::fmt;
use serde::{Deserialize, Serialize};

/// The const/volatile axes of a qualifier profile.
///
/// Both axes only ever grow under transfer: see [`CvQualifiers::union`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CvQualifiers {
    /// `const`
    pub is_const: bool,
    /// `volatile`
    pub is_volatile: bool,
}

impl CvQualifiers {
    /// Neither const nor volatile.
    pub const NONE: Self = Self::new(false, false);
    /// `const`
    pub const CONST: Self = Self::new(true, false);
    /// `volatile`
    pub const VOLATILE: Self = Self::new(false, true);
    /// `volatile const`
    pub const CONST_VOLATILE: Self = Self::new(true, true);

    /// All four combinations.
    pub const ALL: [CvQualifiers; 4] = [Self::NONE, Self::CONST, Self::VOLATILE, Self::CONST_VOLATILE];

    /// Creates a qualifier set.
    #[inline]
    pub const fn new(is_const: bool, is_volatile: bool) -> Self {
        Self { is_const, is_volatile }
    }

    /// Sticky combination: a qualifier present on either side survives.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.is_const | other.is_const, self.is_volatile | other.is_volatile)
    }

    /// Returns `true` if every qualifier in `other` is also in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.is_const | !other.is_const) & (self.is_volatile | !other.is_volatile)
    }

    /// Returns `true` if no qualifier is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !self.is_const && !self.is_volatile
    }

    pub(crate) const fn same_as(self, other: Self) -> bool {
        self.is_const == other.is_const && self.is_volatile == other.is_volatile
    }
}

/// Writes `volatile const` order, each word preceded by a space.
impl fmt::Display for CvQualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_volatile {
            f.write_str(" volatile")?;
        }
        if self.is_const {
            f.write_str(" const")?;
        }
        Ok(())
    }
}
