use core::fmt;
use core::marker::PhantomData;

use super::category::{Category, Value};
use super::cv::{Constness, Mutable, NonVolatile, Volatility};
use crate::profile::{CvQualifiers, QualifiedType, QualifierProfile};

/// A zero-sized stand-in for "an entity of type `T` with profile `K`, `C`, `V`".
///
/// Defaults describe a plain, unqualified `T`. Use [`qualified!`](crate::qualified)
/// to spell one the way a declarator reads.
pub struct Qualified<T: ?Sized, K = Value, C = Mutable, V = NonVolatile>(PhantomData<fn() -> (K, C, V, *const T)>);

impl<T: ?Sized, K, C, V> Qualified<T, K, C, V> {
    /// Creates the marker.
    #[inline(always)]
    pub const fn new() -> Self {
        Qualified(PhantomData)
    }
}

impl<T: ?Sized, K, C, V> Clone for Qualified<T, K, C, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, K, C, V> Copy for Qualified<T, K, C, V> {}

impl<T: ?Sized, K, C, V> Default for Qualified<T, K, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, K: Category, C: Constness, V: Volatility> fmt::Debug for Qualified<T, K, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qualified<{}>", Self::describe())
    }
}

/// Decomposition of a [`Qualified`] marker into its axes.
pub trait Qualify: Copy + Default {
    /// The unqualified type.
    type Base: ?Sized;
    /// Value category marker.
    type Category: Category;
    /// Constness marker.
    type Const: Constness;
    /// Volatility marker.
    type Volatile: Volatility;

    /// The same profile as data.
    const PROFILE: QualifierProfile;

    /// [`Self::PROFILE`], reachable from a value.
    #[inline(always)]
    fn profile(&self) -> QualifierProfile {
        Self::PROFILE
    }

    /// The profile with the base's Rust type name.
    ///
    /// The base is spelled by [`core::any::type_name`], so generic bases come
    /// out as e.g. `alloc::vec::Vec<u8>`. The text grammar of
    /// [`QualifiedType`] accepts only word characters and `::`, so such a
    /// description displays fine but does not parse back.
    fn describe() -> QualifiedType {
        QualifiedType::new(core::any::type_name::<Self::Base>(), Self::PROFILE)
    }
}

impl<T: ?Sized, K: Category, C: Constness, V: Volatility> Qualify for Qualified<T, K, C, V> {
    type Base = T;
    type Category = K;
    type Const = C;
    type Volatile = V;

    const PROFILE: QualifierProfile =
        QualifierProfile::new(K::CATEGORY, CvQualifiers::new(C::IS_CONST, V::IS_VOLATILE));
}

/// Spells a [`Qualified`] marker in declarator order.
///
/// The base is a single token tree (parenthesize compound types), followed
/// by any of `const`/`volatile` and an optional `&` or `&&`.
///
/// ```
/// use likewise::marker::{assert_type_eq, Const, Lvalue, NonVolatile, Qualified};
/// use likewise::qualified;
///
/// assert_type_eq::<qualified!(i32 const&), Qualified<i32, Lvalue, Const, NonVolatile>>();
/// assert_type_eq::<qualified!((Vec<u8>)), Qualified<Vec<u8>>>();
/// ```
#[macro_export]
macro_rules! qualified {
    (@acc [$base:ty] [$k:ty] [$c:ty] [$v:ty]) => {
        $crate::marker::Qualified<$base, $k, $c, $v>
    };
    (@acc [$base:ty] [$k:ty] [$c:ty] [$v:ty] const $($rest:tt)*) => {
        $crate::qualified!(@acc [$base] [$k] [$crate::marker::Const] [$v] $($rest)*)
    };
    (@acc [$base:ty] [$k:ty] [$c:ty] [$v:ty] volatile $($rest:tt)*) => {
        $crate::qualified!(@acc [$base] [$k] [$c] [$crate::marker::Volatile] $($rest)*)
    };
    (@acc [$base:ty] [$k:ty] [$c:ty] [$v:ty] &&) => {
        $crate::marker::Qualified<$base, $crate::marker::Rvalue, $c, $v>
    };
    (@acc [$base:ty] [$k:ty] [$c:ty] [$v:ty] &) => {
        $crate::marker::Qualified<$base, $crate::marker::Lvalue, $c, $v>
    };
    (@start [$base:ty] $($rest:tt)*) => {
        $crate::qualified!(
            @acc [$base]
            [$crate::marker::Value]
            [$crate::marker::Mutable]
            [$crate::marker::NonVolatile]
            $($rest)*
        )
    };
    // Parentheses only group a compound base; they are not part of the type.
    (($base:ty) $($rest:tt)*) => {
        $crate::qualified!(@start [$base] $($rest)*)
    };
    ($base:tt $($rest:tt)*) => {
        $crate::qualified!(@start [$base] $($rest)*)
    };
}
