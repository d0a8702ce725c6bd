use super::forwarded::Forwarded;

/// A consumer of one forwarded value.
///
/// `consume` takes `self`, so a sink is used at most once. Closures taking a
/// [`Forwarded`] are sinks.
pub trait Sink<T> {
    /// Receives the value.
    fn consume(self, value: Forwarded<'_, T>);
}

impl<T, F> Sink<T> for F
where
    F: FnOnce(Forwarded<'_, T>),
{
    #[inline]
    fn consume(self, value: Forwarded<'_, T>) {
        self(value);
    }
}

/// A type-erased sink, for chains whose length is only known at runtime.
pub type BoxedSink<'s, T> = Box<dyn FnOnce(Forwarded<'_, T>) + 's>;

/// Identity helper that gives a closure the higher-ranked `Forwarded<'_, T>`
/// signature a sink needs.
///
/// ```
/// use likewise::chain::{sink, tee, Carrier, Forwarded};
///
/// let mut seen = 0;
/// tee(Carrier::new(3_u32), (sink(|v: Forwarded<'_, u32>| seen += *v),)).unwrap();
/// assert_eq!(seen, 3);
/// ```
#[inline(always)]
pub fn sink<T, F>(f: F) -> F
where
    F: FnOnce(Forwarded<'_, T>),
{
    f
}

/// Boxes a sink for a [`BoxedSink`] list.
pub fn boxed<'s, T, F>(f: F) -> BoxedSink<'s, T>
where
    F: FnOnce(Forwarded<'_, T>) + 's,
{
    Box::new(f)
}

/// Keeps the value in a `Vec`, moving it when the delivery is ownable.
#[derive(Debug)]
pub struct Store<'v, T> {
    into: &'v mut Vec<T>,
}

impl<'v, T> Store<'v, T> {
    /// Stores into `into`.
    pub fn new(into: &'v mut Vec<T>) -> Self {
        Self { into }
    }
}

impl<T: Clone> Sink<T> for Store<'_, T> {
    fn consume(self, value: Forwarded<'_, T>) {
        self.into.push(value.into_owned());
    }
}
