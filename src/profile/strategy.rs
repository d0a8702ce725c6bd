//! `proptest` strategies over profiles and qualified types.

use proptest::prelude::*;

use super::{CvQualifiers, QualifiedType, QualifierProfile, ValueCategory};

/// Any of the three value categories.
pub fn value_category() -> impl Strategy<Value = ValueCategory> {
    prop::sample::select(ValueCategory::ALL.to_vec())
}

/// Any of the four cv combinations.
pub fn cv_qualifiers() -> impl Strategy<Value = CvQualifiers> {
    (any::<bool>(), any::<bool>()).prop_map(|(c, v)| CvQualifiers::new(c, v))
}

/// Any of the twelve profiles.
pub fn qualifier_profile() -> impl Strategy<Value = QualifierProfile> {
    (value_category(), cv_qualifiers()).prop_map(|(category, cv)| QualifierProfile::new(category, cv))
}

/// A one- or two-word base type with any profile.
pub fn qualified_type() -> impl Strategy<Value = QualifiedType> {
    ("[a-z_][a-z0-9_]{0,8}( [a-z_][a-z0-9_]{0,8})?", qualifier_profile())
        .prop_filter("qualifier keywords are not type names", |(base, _)| {
            base.split(' ').all(|w| w != "const" && w != "volatile")
        })
        .prop_map(|(base, profile)| QualifiedType::new(base, profile))
}
