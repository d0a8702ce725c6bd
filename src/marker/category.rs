use super::sealed::Sealed;
use crate::profile::ValueCategory;

/// Type-level value category.
pub trait Category: Sealed + Copy + Default + 'static {
    /// The data-level category this marker stands for.
    const CATEGORY: ValueCategory;
    /// `Self` after reference collapsing with `&&`.
    type Collapsed: Category;
}

/// A plain value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Value;

/// An lvalue reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lvalue;

/// An rvalue reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rvalue;

impl Sealed for Value {}
impl Sealed for Lvalue {}
impl Sealed for Rvalue {}

impl Category for Value {
    const CATEGORY: ValueCategory = ValueCategory::Value;
    type Collapsed = Rvalue;
}

impl Category for Lvalue {
    const CATEGORY: ValueCategory = ValueCategory::Lvalue;
    type Collapsed = Lvalue;
}

impl Category for Rvalue {
    const CATEGORY: ValueCategory = ValueCategory::Rvalue;
    type Collapsed = Rvalue;
}

/// `Self` (a requested result category) may be produced from an argument of
/// category `Arg`.
///
/// Producing an `Lvalue` from anything but an lvalue argument is the one
/// illegal combination: it is left unimplemented.
///
/// ```
/// use likewise::marker::{forward_like, Qualify};
/// use likewise::qualified;
///
/// // An lvalue argument may be forwarded as any cv-qualified lvalue.
/// let out = forward_like::<qualified!(i64 volatile const&), _>(<qualified!(i32&)>::new());
/// assert_eq!(out.profile().to_string(), "T volatile const&");
/// ```
///
/// A plain value is an rvalue expression:
///
/// ```compile_fail
/// use likewise::marker::{forward_like, Qualified};
/// use likewise::qualified;
///
/// let _ = forward_like::<qualified!(i64&), _>(Qualified::<i32>::new());
/// ```
///
/// Qualifiers on the model do not make the claim legal:
///
/// ```compile_fail
/// use likewise::marker::forward_like;
/// use likewise::qualified;
///
/// let _ = forward_like::<qualified!(i64 volatile const&), _>(<qualified!(i32 const&&)>::new());
/// ```
///
/// ```compile_fail
/// use likewise::marker::forward_like;
/// use likewise::qualified;
///
/// let _ = forward_like::<qualified!(i64 const&), _>(<qualified!(i32 volatile)>::new());
/// ```
///
/// Native forwarding follows the same rule:
///
/// ```compile_fail
/// use likewise::marker::forward;
/// use likewise::qualified;
///
/// let _ = forward::<qualified!(i32 const&), _>(<qualified!(i32 const)>::new());
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot forward a `{Arg}` argument as `{Self}`",
    label = "converting an rvalue to an lvalue is forbidden"
)]
pub trait ForwardFrom<Arg: Category>: Category {}

impl ForwardFrom<Lvalue> for Lvalue {}
impl<A: Category> ForwardFrom<A> for Rvalue {}
impl<A: Category> ForwardFrom<A> for Value {}
