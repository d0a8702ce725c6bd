use super::error::ChainError;
use super::forwarded::Forwarded;

/// A producer of the value a chain forwards.
///
/// `observe` is lvalue-style access and may be called any number of times
/// before `relinquish`. `relinquish` is the last query: the source may hand
/// its storage over, after which it is spent.
pub trait Source {
    /// The produced value.
    type Item;

    /// Produces the value for a sink that is not the last.
    ///
    /// Usually a borrow of the source's storage. A source with no storage to
    /// lend (such as [`Generator`]) may return an owned temporary instead;
    /// chains reborrow it with [`Forwarded::share`] before it reaches a
    /// sink, so only the last sink can ever take over a value.
    ///
    /// # Errors
    ///
    /// [`ChainError::SourceSpent`] if the source already relinquished.
    fn observe(&self) -> Result<Forwarded<'_, Self::Item>, ChainError>;

    /// Produces the value for the last sink.
    ///
    /// The default implementation cannot give anything up and observes
    /// instead; sources that own their value should override it.
    ///
    /// # Errors
    ///
    /// [`ChainError::SourceSpent`] if the source already relinquished.
    fn relinquish(&mut self) -> Result<Forwarded<'_, Self::Item>, ChainError> {
        Self::observe(self)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    fn observe(&self) -> Result<Forwarded<'_, S::Item>, ChainError> {
        (**self).observe()
    }

    fn relinquish(&mut self) -> Result<Forwarded<'_, S::Item>, ChainError> {
        (**self).relinquish()
    }
}

/// Owns a value; hands out borrows until asked to relinquish, then moves it.
///
/// Once relinquished the carrier is spent, and any further query fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier<T> {
    value: Option<T>,
}

impl<T> Carrier<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Returns `true` once the value has been relinquished.
    #[inline]
    pub const fn is_spent(&self) -> bool {
        self.value.is_none()
    }

    /// The value, if still held.
    ///
    /// ```
    /// use likewise::chain::{tee, Carrier, Forwarded};
    ///
    /// let mut carrier = Carrier::new(5_u8);
    /// assert_eq!(carrier.get(), Some(&5));
    /// tee(&mut carrier, (|_: Forwarded<'_, u8>| {},)).unwrap();
    /// assert_eq!(carrier.get(), None);
    /// assert_eq!(carrier.into_inner(), None);
    /// ```
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Unwraps the carrier without going through a chain.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> From<T> for Carrier<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Source for Carrier<T> {
    type Item = T;

    fn observe(&self) -> Result<Forwarded<'_, T>, ChainError> {
        self.value.as_ref().map(Forwarded::Shared).ok_or(ChainError::SourceSpent)
    }

    fn relinquish(&mut self) -> Result<Forwarded<'_, T>, ChainError> {
        self.value.take().map(Forwarded::Owned).ok_or(ChainError::SourceSpent)
    }
}

/// A source that can only lend its value.
///
/// The last sink receives a borrow too, so a sink that keeps the value has
/// to copy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOnlySource<T> {
    value: T,
}

impl<T> ReadOnlySource<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// The lent value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> Source for ReadOnlySource<T> {
    type Item = T;

    fn observe(&self) -> Result<Forwarded<'_, T>, ChainError> {
        Ok(Forwarded::Shared(&self.value))
    }
}

/// A source that makes a fresh value on every query.
///
/// Every production is owned; a chain still lends all but the last one.
pub struct Generator<F> {
    make: F,
}

impl<F> Generator<F> {
    /// Wraps a value factory.
    pub const fn new(make: F) -> Self {
        Self { make }
    }
}

impl<T, F: Fn() -> T> Source for Generator<F> {
    type Item = T;

    fn observe(&self) -> Result<Forwarded<'_, T>, ChainError> {
        Ok(Forwarded::Owned((self.make)()))
    }
}

impl<F> core::fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_lends_then_moves() {
        let mut carrier = Carrier::new(String::from("payload"));
        assert!(!carrier.observe().unwrap().is_ownable());
        let last = carrier.relinquish().unwrap();
        assert!(last.is_ownable());
        assert_eq!(last.into_owned(), "payload");
        assert!(carrier.is_spent());
    }

    #[test]
    fn spent_carrier_fails_loudly() {
        let mut carrier = Carrier::new(1_u8);
        carrier.relinquish().unwrap();
        assert_eq!(carrier.observe().unwrap_err(), ChainError::SourceSpent);
        assert_eq!(carrier.relinquish().unwrap_err(), ChainError::SourceSpent);
    }

    #[test]
    fn read_only_source_never_gives_up_its_value() {
        let mut source = ReadOnlySource::new(vec![1, 2, 3]);
        assert!(!source.relinquish().unwrap().is_ownable());
        assert_eq!(source.get(), &vec![1, 2, 3]);
    }

    #[test]
    fn relinquish_defaults_to_observe() {
        struct Lender(String);

        impl Source for Lender {
            type Item = String;

            fn observe(&self) -> Result<Forwarded<'_, String>, ChainError> {
                Ok(Forwarded::Shared(&self.0))
            }
        }

        let mut lender = Lender(String::from("lent"));
        let last = lender.relinquish().unwrap();
        assert!(!last.is_ownable());
        assert_eq!(&*last, "lent");
        assert_eq!(lender.0, "lent");
    }

    #[test]
    fn carrier_unwraps_without_a_chain() {
        let carrier = Carrier::from(String::from("kept"));
        assert_eq!(carrier.get().map(String::as_str), Some("kept"));
        assert_eq!(carrier.into_inner().as_deref(), Some("kept"));
    }

    #[test]
    fn generator_produces_owned_values() {
        let mut source = Generator::new(|| 5_i32);
        assert!(source.observe().unwrap().is_ownable());
        assert_eq!(*source.relinquish().unwrap(), 5);
    }

    #[test]
    fn mutable_borrow_forwards_to_the_source() {
        fn finish<S: Source>(mut source: S) -> bool {
            source.relinquish().map(|v| v.is_ownable()).unwrap_or(false)
        }

        let mut carrier = Carrier::new('x');
        assert!(finish(&mut carrier));
        assert!(carrier.is_spent());
    }
}
