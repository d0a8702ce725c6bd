//! # `likewise` - Forward Values Like Something Else
//!
//! Tools for forwarding a value with the *qualifier profile* of another
//! entity (its value category plus const/volatile qualification), and for
//! handing one value to several consumers so that only the last one takes
//! ownership.
//!
//! ## Guarantees
//!
//! - **Stickiness**: a transfer never strips a const or volatile qualifier
//!   already present on the target.
//! - **No dangling lvalues**: asking for an lvalue result from an rvalue
//!   argument is rejected. At the type level it does not compile; at the
//!   data level it is an `Err`.
//! - **Single use**: sinks take `self`, so each is consumed once. A
//!   [`Carrier`](chain::Carrier) that has relinquished its value refuses
//!   further queries instead of handing out a moved-from value.
//! - **Zero-copy tail**: the last sink of a chain receives ownership whenever
//!   the source is able to give it up.
//!
//! ## Architecture
//!
//! 1. **[`profile`]**: profiles as plain data. [`profile::like`],
//!    [`profile::forward_like`] and [`profile::forward`] are pure
//!    functions over [`QualifiedType`](profile::QualifiedType).
//! 2. **[`marker`]**: the same computation on zero-sized marker types,
//!    checked during type checking.
//! 3. **[`chain`]**: sources, sinks and the [`tee`](chain::tee) chain over
//!    real Rust values.
//!
//! ## Example
//!
//! ```rust
//! use likewise::chain::{Carrier, Forwarded, Store};
//! use likewise::profile::{like, QualifiedType};
//!
//! let model: QualifiedType = "long&&".parse().unwrap();
//! let target: QualifiedType = "int const".parse().unwrap();
//! assert_eq!(like(model.profile, &target).to_string(), "int const&&");
//!
//! let mut precious = Vec::new();
//! let mut carrier = Carrier::new(String::from("Send holy hand grenade STOP"));
//! likewise::tee!(&mut carrier => |m: Forwarded<'_, String>| println!("{m}"), Store::new(&mut precious))
//!     .unwrap();
//! assert!(carrier.is_spent());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod marker;
pub mod profile;

pub use chain::{tee, Carrier, Forwarded, Policy, Sink, Source, Tee};
pub use marker::{ForwardLikeT, ForwardT, LikeT, Qualified, Qualify};
pub use profile::{CvQualifiers, QualifiedType, QualifierProfile, ValueCategory};

// Compile-time checks of the transfer rules.
const _: () = {
    use marker::assert_type_eq;

    // The model contributes category and qualifiers; the base comes from the target.
    assert_type_eq::<LikeT<qualified!(i64 const&), qualified!(i32)>, qualified!(i32 const&)>();
    // A qualifier already on the target is kept.
    assert_type_eq::<LikeT<qualified!(i64&&), qualified!(i32 const)>, qualified!(i32 const&&)>();
    assert_type_eq::<LikeT<qualified!(i64), qualified!(i32 volatile const&&)>, qualified!(i32 volatile const)>();

    // Forwarding with a plain model moves.
    assert_type_eq::<ForwardLikeT<qualified!(i64), qualified!(i32&)>, qualified!(i32&&)>();
    assert_type_eq::<ForwardLikeT<qualified!(i64&), qualified!(i32&)>, qualified!(i32&)>();

    // The marker profiles agree with the data-level ones.
    assert!(<qualified!(i32 volatile const&&)>::PROFILE.same_as(QualifierProfile::new(
        ValueCategory::Rvalue,
        CvQualifiers::CONST_VOLATILE,
    )));
    assert!(!<qualified!(i32&)>::PROFILE.is_ownable());

    // Markers are zero-sized.
    assert!(core::mem::size_of::<qualified!((Vec<u8>) const&)>() == 0);
};
