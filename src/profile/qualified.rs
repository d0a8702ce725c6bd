use core::fmt;
use serde::{Deserialize, Serialize};

use super::category::ValueCategory;
use super::cv::CvQualifiers;

/// Value category plus const/volatile qualification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QualifierProfile {
    /// Value / lvalue / rvalue.
    pub category: ValueCategory,
    /// const / volatile.
    pub cv: CvQualifiers,
}

impl QualifierProfile {
    /// A plain, unqualified value.
    pub const VALUE: Self = Self::new(ValueCategory::Value, CvQualifiers::NONE);

    /// Every representable profile: 3 categories x 4 cv combinations.
    pub const ALL: [QualifierProfile; 12] = {
        let mut all = [Self::VALUE; 12];
        let mut i = 0;
        while i < 12 {
            all[i] = Self::new(ValueCategory::ALL[i / 4], CvQualifiers::ALL[i % 4]);
            i += 1;
        }
        all
    };

    /// Creates a profile.
    #[inline]
    pub const fn new(category: ValueCategory, cv: CvQualifiers) -> Self {
        Self { category, cv }
    }

    /// Same cv qualifiers, different category.
    #[inline]
    pub const fn with_category(self, category: ValueCategory) -> Self {
        Self::new(category, self.cv)
    }

    /// Adds `cv` to this profile's qualifiers.
    #[inline]
    pub const fn with_cv(self, cv: CvQualifiers) -> Self {
        Self::new(self.category, self.cv.union(cv))
    }

    /// Returns `true` if a receiver may take over the storage.
    #[inline]
    pub const fn is_ownable(self) -> bool {
        self.category.is_ownable()
    }

    /// `const`-evaluable equality, used by compile-time assertions.
    #[inline]
    pub const fn same_as(self, other: Self) -> bool {
        self.category.same_as(other.category) && self.cv.same_as(other.cv)
    }
}

/// Spelled on a placeholder base: `T volatile const&&`.
impl fmt::Display for QualifierProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}{}", self.cv, self.category.sigil())
    }
}

/// The unqualified, non-reference name of a type, e.g. `int` or `unsigned long`.
///
/// Treated as an opaque identifier. The parser rejects empty names; `new` does not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseType(String);

impl BaseType {
    /// Wraps a type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The type name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BaseType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A base type annotated with a qualifier profile, e.g. `int volatile const&&`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedType {
    /// The unqualified type.
    pub base: BaseType,
    /// Its qualifiers.
    pub profile: QualifierProfile,
}

impl QualifiedType {
    /// Annotates `base` with `profile`.
    pub fn new(base: impl Into<BaseType>, profile: QualifierProfile) -> Self {
        Self {
            base: base.into(),
            profile,
        }
    }

    /// `base` as a plain, unqualified value.
    pub fn value(base: impl Into<BaseType>) -> Self {
        Self::new(base, QualifierProfile::VALUE)
    }

    /// The value category.
    #[inline]
    pub fn category(&self) -> ValueCategory {
        self.profile.category
    }

    /// The cv qualifiers.
    #[inline]
    pub fn cv(&self) -> CvQualifiers {
        self.profile.cv
    }

    /// The same base with qualifiers and reference removed.
    pub fn decay(&self) -> Self {
        Self::value(self.base.clone())
    }
}

impl From<String> for BaseType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for QualifiedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, self.profile.cv, self.profile.category.sigil())
    }
}
