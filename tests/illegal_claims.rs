//! An lvalue result may never be produced from an rvalue argument.
//!
//! The type-level rejections are `compile_fail` doctests on
//! `likewise::marker::ForwardLike` and `likewise::marker::Forward`; this file
//! covers the data-level rendition exhaustively.

use likewise::profile::{forward, forward_like, CvQualifiers, QualifiedType, QualifierProfile, TransferError, ValueCategory};

fn all_of(category: ValueCategory) -> impl Iterator<Item = QualifierProfile> {
    CvQualifiers::ALL.into_iter().map(move |cv| QualifierProfile::new(category, cv))
}

#[test]
fn lvalue_models_reject_every_rvalue_argument() {
    for model in all_of(ValueCategory::Lvalue) {
        for arg_category in [ValueCategory::Value, ValueCategory::Rvalue] {
            for arg in all_of(arg_category).map(|p| QualifiedType::new("int", p)) {
                let err = forward_like(model, &arg).unwrap_err();
                assert!(
                    matches!(err, TransferError::DanglingLvalue { .. }),
                    "forward_like<{model}>({arg}) gave {err:?}"
                );
                let native = forward(&QualifiedType::new("int", model), &arg);
                assert!(native.is_err(), "forward<{model}>({arg}) succeeded");
            }
        }
    }
}

#[test]
fn other_models_accept_every_argument() {
    for model in QualifierProfile::ALL.into_iter().filter(|p| p.category != ValueCategory::Lvalue) {
        for arg in QualifierProfile::ALL.map(|p| QualifiedType::new("int", p)) {
            let out = forward_like(model, &arg).unwrap();
            assert!(out.profile.is_ownable());
        }
    }
}

#[test]
fn rejection_is_reported_as_an_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(forward_like("long&".parse::<QualifiedType>().unwrap().profile, &"int&&".parse().unwrap()).unwrap_err());
    assert!(err.to_string().contains("converting an rvalue to an lvalue is forbidden"));
}
