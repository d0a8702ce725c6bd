use super::category::{Category, ForwardFrom};
use super::cv::{Constness, Volatility, Within};
use super::qualified::{Qualified, Qualify};

/// `Target`'s base, re-qualified with `Model`'s profile.
///
/// The category is taken from `Model`; const and volatile are the union of
/// both sides.
pub type LikeT<Model, Target> = Qualified<
    <Target as Qualify>::Base,
    <Model as Qualify>::Category,
    <<Target as Qualify>::Const as Constness>::Or<<Model as Qualify>::Const>,
    <<Target as Qualify>::Volatile as Volatility>::Or<<Model as Qualify>::Volatile>,
>;

/// Trait form of [`LikeT`], for use in bounds.
pub trait Like<Target: Qualify>: Qualify {
    /// See [`LikeT`].
    type Output: Qualify;
}

impl<M: Qualify, T: Qualify> Like<T> for M {
    type Output = LikeT<M, T>;
}

/// Forwarding an argument described by `Self` with `Model`'s shape.
///
/// `Self::Category` describes the argument expression: `Lvalue` for an
/// lvalue, `Value` or `Rvalue` for an rvalue. The model is collapsed before
/// use, and asking for an lvalue from an rvalue argument does not compile:
///
/// ```compile_fail
/// use likewise::marker::{forward_like, Qualified, Rvalue};
/// use likewise::qualified;
///
/// let arg = Qualified::<i32, Rvalue>::new();
/// let _ = forward_like::<qualified!(i64&), _>(arg);
/// ```
pub trait ForwardLike<Model: Qualify>: Qualify {
    /// The forwarded result.
    type Output: Qualify;
}

impl<M, A> ForwardLike<M> for A
where
    M: Qualify,
    A: Qualify,
    <M::Category as Category>::Collapsed: ForwardFrom<A::Category>,
{
    type Output = Qualified<
        A::Base,
        <M::Category as Category>::Collapsed,
        <A::Const as Constness>::Or<M::Const>,
        <A::Volatile as Volatility>::Or<M::Volatile>,
    >;
}

/// Result of [`forward_like`].
pub type ForwardLikeT<Model, Arg> = <Arg as ForwardLike<Model>>::Output;

/// Native single-argument forwarding of `Self` as `Model`.
///
/// The bases must agree and the argument's qualifiers must be contained in
/// the model's:
///
/// ```compile_fail
/// use likewise::marker::forward;
/// use likewise::qualified;
///
/// let arg = <qualified!(i32 const&)>::new();
/// let _ = forward::<qualified!(i32&), _>(arg);
/// ```
pub trait Forward<Model: Qualify>: Qualify {
    /// The forwarded result.
    type Output: Qualify;
}

impl<M, A> Forward<M> for A
where
    M: Qualify,
    A: Qualify<Base = M::Base>,
    A::Const: Within<M::Const>,
    A::Volatile: Within<M::Volatile>,
    <M::Category as Category>::Collapsed: ForwardFrom<A::Category>,
{
    type Output = Qualified<M::Base, <M::Category as Category>::Collapsed, M::Const, M::Volatile>;
}

/// Result of [`forward`].
pub type ForwardT<Model, Arg> = <Arg as Forward<Model>>::Output;

/// Type-level [`crate::profile::like`], driven by marker values.
///
/// ```
/// use likewise::marker::{like, Qualify};
/// use likewise::qualified;
///
/// let out: qualified!(i32 const&&) = like(<qualified!(i64&&)>::new(), <qualified!(i32 const)>::new());
/// assert!(out.profile().is_ownable());
/// ```
#[inline(always)]
pub fn like<M: Qualify, T: Qualify>(_model: M, _target: T) -> LikeT<M, T> {
    Qualified::new()
}

/// Type-level [`crate::profile::forward_like`]; the model is named, the
/// argument inferred.
#[inline(always)]
pub fn forward_like<M: Qualify, A: ForwardLike<M>>(_arg: A) -> ForwardLikeT<M, A> {
    Default::default()
}

/// Type-level [`crate::profile::forward`].
#[inline(always)]
pub fn forward<M: Qualify, A: Forward<M>>(_arg: A) -> ForwardT<M, A> {
    Default::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::assert_type_eq;
    use crate::qualified;

    #[test]
    fn like_follows_the_model_category() {
        assert_type_eq::<LikeT<qualified!(i64), qualified!(i32)>, qualified!(i32)>();
        assert_type_eq::<LikeT<qualified!(i64&), qualified!(i32)>, qualified!(i32&)>();
        assert_type_eq::<LikeT<qualified!(i64&&), qualified!(i32&)>, qualified!(i32&&)>();
    }

    #[test]
    fn like_keeps_target_qualifiers() {
        assert_type_eq::<LikeT<qualified!(i64&&), qualified!(i32 const)>, qualified!(i32 const&&)>();
        assert_type_eq::<LikeT<qualified!(i64 volatile), qualified!(i32 const&)>, qualified!(i32 volatile const)>();
        assert_type_eq::<<qualified!(i64 const&) as Like<qualified!(i32)>>::Output, qualified!(i32 const&)>();
    }

    #[test]
    fn like_value_matches_the_data_level_transfer() {
        let out = like(<qualified!(i64 volatile&)>::new(), <qualified!(i32 const)>::new());
        assert_type_eq::<qualified!(i32 volatile const&), LikeT<qualified!(i64 volatile&), qualified!(i32 const)>>();
        let data = crate::profile::like(
            <qualified!(i64 volatile&)>::PROFILE,
            &crate::profile::QualifiedType::new("i32", <qualified!(i32 const)>::PROFILE),
        );
        assert_eq!(out.profile(), data.profile);
    }

    #[test]
    fn forward_like_moves_when_asked() {
        let out: qualified!((Vec<i32>)&&) = forward_like::<qualified!(i64), _>(<qualified!((Vec<i32>)&)>::new());
        assert!(out.profile().is_ownable());
    }

    #[test]
    fn forward_like_ignores_the_model_base() {
        assert_type_eq::<ForwardLikeT<qualified!(i64&), qualified!(i32&)>, qualified!(i32&)>();
        assert_type_eq::<ForwardLikeT<qualified!(String const&), qualified!(i32&)>, qualified!(i32 const&)>();
    }

    #[test]
    fn native_forward_adds_but_never_drops() {
        assert_type_eq::<ForwardT<qualified!(i32 const&), qualified!(i32&)>, qualified!(i32 const&)>();
        assert_type_eq::<ForwardT<qualified!(i32), qualified!(i32&)>, qualified!(i32&&)>();
        let _ = forward::<qualified!(i32 volatile&&), _>(<qualified!(i32 volatile)>::new());
    }
}
