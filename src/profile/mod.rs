//! Qualifier profiles as plain data.
//!
//! A [`QualifierProfile`] is a value category paired with const/volatile
//! qualifiers. [`like`] moves a profile from a model onto a target base,
//! and [`forward_like`] / [`forward`] are the forwarding primitives checked
//! against each other in the crate's test suite.
//!
//! The same computation is available at the type level in
//! [`crate::marker`], where misuse fails to compile instead of returning an
//! error.

mod category;
mod cv;
mod parse;
mod qualified;
mod transfer;

/// Property-test strategies for profile types.
#[cfg(any(test, feature = "proptest"))]
pub mod strategy;

pub use category::ValueCategory;
pub use cv::CvQualifiers;
pub use parse::ParseProfileError;
pub use qualified::{BaseType, QualifiedType, QualifierProfile};
pub use transfer::{forward, forward_like, like, TransferError};
