/// Implemented only for `T: TypeEq<T>`; a bound on it is a compile-time
/// type equality check.
#[diagnostic::on_unimplemented(message = "`{Self}` is not the same type as `{T}`")]
pub trait TypeEq<T: ?Sized> {}

impl<T: ?Sized> TypeEq<T> for T {}

/// Compiles only if `A` and `B` are the same type.
///
/// ```compile_fail
/// likewise::marker::assert_type_eq::<i32, i64>();
/// ```
#[inline(always)]
pub const fn assert_type_eq<A: ?Sized + TypeEq<B>, B: ?Sized>() {}
