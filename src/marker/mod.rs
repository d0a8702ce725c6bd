//! Qualifier profiles as types.
//!
//! [`Qualified<T, K, C, V>`](Qualified) is a zero-sized marker for "an entity of
//! type `T` with category `K`, constness `C` and volatility `V`". The
//! aliases [`LikeT`], [`ForwardLikeT`] and [`ForwardT`] compute transfers
//! during type checking, so an illegal ownership claim is a compile error
//! rather than a runtime one.
//!
//! ```
//! use likewise::marker::{assert_type_eq, LikeT};
//! use likewise::qualified;
//!
//! assert_type_eq::<LikeT<qualified!(i64 const&), qualified!(i32)>, qualified!(i32 const&)>();
//! assert_type_eq::<LikeT<qualified!(i64&&), qualified!(i32 const)>, qualified!(i32 const&&)>();
//! ```

mod category;
mod cv;
mod like;
mod qualified;
mod same;

pub(crate) mod sealed {
    pub trait Sealed {}
}

pub use category::{Category, ForwardFrom, Lvalue, Rvalue, Value};
pub use cv::{Const, Constness, Mutable, NonVolatile, Volatile, Volatility, Within};
pub use like::{forward, forward_like, like, Forward, ForwardLike, ForwardLikeT, ForwardT, Like, LikeT};
pub use qualified::{Qualified, Qualify};
pub use same::{assert_type_eq, TypeEq};
