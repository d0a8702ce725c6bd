use serde::{Deserialize, Serialize};

use super::error::ChainError;
use super::forwarded::Forwarded;
use super::sink::{BoxedSink, Sink};
use super::source::Source;

/// How often a chain queries its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// One `observe` per sink but the last, then one `relinquish`.
    #[default]
    PerDelivery,
    /// One `relinquish` in total; earlier sinks see a borrow of its result.
    Once,
}

/// An ordered, non-empty list of sinks.
///
/// Implemented for tuples of one to eight sinks and for `Vec<BoxedSink>`.
pub trait Sinks<T> {
    /// Number of sinks.
    fn count(&self) -> usize;

    /// Delivers `source`'s value to every sink in order.
    ///
    /// Every sink but the last receives a `Shared` view; the last receives
    /// whatever `relinquish` produces.
    ///
    /// # Errors
    ///
    /// Propagates [`ChainError::SourceSpent`]; [`ChainError::NoSinks`] for an
    /// empty list.
    fn deliver<S>(self, source: &mut S, policy: Policy) -> Result<(), ChainError>
    where
        S: Source<Item = T> + ?Sized;
}

#[inline]
fn hand_over<T, K: Sink<T>>(sink: K, value: Forwarded<'_, T>, position: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(position, ownable = value.is_ownable(), "delivering");
    #[cfg(not(feature = "tracing"))]
    let _ = position;
    sink.consume(value);
}

macro_rules! impl_sinks_for_tuple {
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => { 1usize + impl_sinks_for_tuple!(@count $($tail)*) };
    ($($Head:ident $head:ident),* ; $Last:ident $last:ident) => {
        impl<T, $($Head: Sink<T>,)* $Last: Sink<T>> Sinks<T> for ($($Head,)* $Last,) {
            #[inline]
            fn count(&self) -> usize {
                impl_sinks_for_tuple!(@count $($Head)* $Last)
            }

            fn deliver<S>(self, source: &mut S, policy: Policy) -> Result<(), ChainError>
            where
                S: Source<Item = T> + ?Sized,
            {
                let ($($head,)* $last,) = self;
                #[allow(unused_mut)]
                let mut position = 0usize;
                match policy {
                    Policy::PerDelivery => {
                        $(
                            hand_over($head, source.observe()?.share(), position);
                            position += 1;
                        )*
                        hand_over($last, source.relinquish()?, position);
                    }
                    Policy::Once => {
                        let value = source.relinquish()?;
                        $(
                            hand_over($head, value.share(), position);
                            position += 1;
                        )*
                        hand_over($last, value, position);
                    }
                }
                Ok(())
            }
        }
    };
}

impl_sinks_for_tuple!(; A a);
impl_sinks_for_tuple!(A a ; B b);
impl_sinks_for_tuple!(A a, B b ; C c);
impl_sinks_for_tuple!(A a, B b, C c ; D d);
impl_sinks_for_tuple!(A a, B b, C c, D d ; E e);
impl_sinks_for_tuple!(A a, B b, C c, D d, E e ; F f);
impl_sinks_for_tuple!(A a, B b, C c, D d, E e, F f ; G g);
impl_sinks_for_tuple!(A a, B b, C c, D d, E e, F f, G g ; H h);

impl<'s, T> Sinks<T> for Vec<BoxedSink<'s, T>> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    fn deliver<S>(self, source: &mut S, policy: Policy) -> Result<(), ChainError>
    where
        S: Source<Item = T> + ?Sized,
    {
        let mut sinks = self.into_iter();
        let Some(last) = sinks.next_back() else {
            return Err(ChainError::NoSinks);
        };
        let position = sinks.len();
        match policy {
            Policy::PerDelivery => {
                for (i, sink) in sinks.enumerate() {
                    hand_over(sink, source.observe()?.share(), i);
                }
                hand_over(last, source.relinquish()?, position);
            }
            Policy::Once => {
                let value = source.relinquish()?;
                for (i, sink) in sinks.enumerate() {
                    hand_over(sink, value.share(), i);
                }
                hand_over(last, value, position);
            }
        }
        Ok(())
    }
}

/// A forwarding chain over one source.
///
/// ```
/// use likewise::chain::{Carrier, Forwarded, Policy, Tee};
///
/// let mut carrier = Carrier::new(String::from("payload"));
/// let mut kept = Vec::new();
/// Tee::new(&mut carrier)
///     .with_policy(Policy::Once)
///     .run((
///         |m: Forwarded<'_, String>| assert!(!m.is_ownable()),
///         |m: Forwarded<'_, String>| kept.push(m.into_owned()),
///     ))
///     .unwrap();
/// assert!(carrier.is_spent());
/// assert_eq!(kept, ["payload"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tee<S> {
    source: S,
    policy: Policy,
}

impl<S: Source> Tee<S> {
    /// A chain with the default [`Policy::PerDelivery`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: Policy::default(),
        }
    }

    /// Replaces the query policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// The query policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Runs the chain; the source is dropped afterwards.
    ///
    /// # Errors
    ///
    /// See [`Sinks::deliver`].
    pub fn run<K: Sinks<S::Item>>(mut self, sinks: K) -> Result<(), ChainError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tee", sinks = sinks.count(), policy = ?self.policy).entered();

        let result = sinks.deliver(&mut self.source, self.policy);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(%err, "chain aborted");
        }
        result
    }

    /// Gives the source back without running.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Delivers `source`'s value to `sinks`, querying once per sink.
///
/// # Errors
///
/// See [`Sinks::deliver`].
pub fn tee<S: Source, K: Sinks<S::Item>>(source: S, sinks: K) -> Result<(), ChainError> {
    Tee::new(source).run(sinks)
}

/// `tee!(source => a, b, c)` is `tee(source, (a, b, c))`.
///
/// ```
/// use likewise::chain::{Carrier, Forwarded};
/// use std::cell::Cell;
///
/// let count = Cell::new(0);
/// let bump = |_: Forwarded<'_, i32>| count.set(count.get() + 1);
/// likewise::tee!(Carrier::new(1) => bump, bump).unwrap();
/// assert_eq!(count.get(), 2);
/// ```
#[macro_export]
macro_rules! tee {
    ($source:expr => $($sink:expr),+ $(,)?) => {
        $crate::chain::tee($source, ($($sink,)+))
    };
}
