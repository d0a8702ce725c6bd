use core::fmt;
use core::ops::Deref;
use std::borrow::Cow;

use crate::profile::{CvQualifiers, QualifierProfile, ValueCategory};

/// A value as handed to a sink.
///
/// `Shared` is lvalue-style access: the sink may look, and must copy if it
/// wants to keep the value. `Owned` is rvalue-style: the sink may take the
/// value over without copying.
pub enum Forwarded<'a, T> {
    /// Borrowed from the source's storage.
    Shared(&'a T),
    /// Relinquished by the source.
    Owned(T),
}

impl<'a, T> Forwarded<'a, T> {
    /// The qualifier profile this delivery corresponds to.
    ///
    /// `Shared` is `T const&`, `Owned` is `T&&`.
    pub const fn profile(&self) -> QualifierProfile {
        match self {
            Forwarded::Shared(_) => QualifierProfile::new(ValueCategory::Lvalue, CvQualifiers::CONST),
            Forwarded::Owned(_) => QualifierProfile::new(ValueCategory::Rvalue, CvQualifiers::NONE),
        }
    }

    /// Returns `true` if the receiver may take over the value.
    #[inline]
    pub const fn is_ownable(&self) -> bool {
        matches!(self, Forwarded::Owned(_))
    }

    /// Reborrows as `Shared`, whatever `self` is.
    #[inline]
    pub fn share(&self) -> Forwarded<'_, T> {
        Forwarded::Shared(&**self)
    }

    /// Takes the value, copying only if it was borrowed.
    #[inline]
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Forwarded::Shared(value) => value.clone(),
            Forwarded::Owned(value) => value,
        }
    }

    /// Forwards a part of the carried value with the same ownership as the
    /// whole: a borrowed whole yields a borrowed part, an owned whole an
    /// owned part.
    ///
    /// ```
    /// use likewise::chain::Forwarded;
    ///
    /// struct Envelope { body: String, _stamp: u32 }
    ///
    /// let owned = Forwarded::Owned(Envelope { body: "hi".into(), _stamp: 1 });
    /// let body = owned.project(|e| &e.body, |e| e.body);
    /// assert!(body.is_ownable());
    /// ```
    pub fn project<U>(self, borrow: impl FnOnce(&'a T) -> &'a U, take: impl FnOnce(T) -> U) -> Forwarded<'a, U> {
        match self {
            Forwarded::Shared(value) => Forwarded::Shared(borrow(value)),
            Forwarded::Owned(value) => Forwarded::Owned(take(value)),
        }
    }
}

impl<T> Deref for Forwarded<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self {
            Forwarded::Shared(value) => *value,
            Forwarded::Owned(value) => value,
        }
    }
}

impl<T> AsRef<T> for Forwarded<'_, T> {
    fn as_ref(&self) -> &T {
        &**self
    }
}

impl<T: fmt::Debug> fmt::Debug for Forwarded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forwarded::Shared(value) => f.debug_tuple("Shared").field(value).finish(),
            Forwarded::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Forwarded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl<'a, T: Clone> From<Forwarded<'a, T>> for Cow<'a, T> {
    fn from(value: Forwarded<'a, T>) -> Self {
        match value {
            Forwarded::Shared(value) => Cow::Borrowed(value),
            Forwarded::Owned(value) => Cow::Owned(value),
        }
    }
}
