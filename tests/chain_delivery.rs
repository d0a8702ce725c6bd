//! Delivery order, query counts and ownership across whole chains.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use likewise::chain::{boxed, tee, BoxedSink, Carrier, ChainError, Forwarded, Policy, ReadOnlySource, Source, Store, Tee};
use proptest::prelude::*;

/// A carrier that counts how it is queried and how often its value is copied.
struct Instrumented {
    inner: Carrier<Tracked>,
    observed: Cell<usize>,
    relinquished: usize,
}

#[derive(Debug)]
struct Tracked {
    text: String,
    copies: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(text: &str, copies: &Rc<Cell<usize>>) -> Self {
        Tracked {
            text: text.to_owned(),
            copies: Rc::clone(copies),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.copies.set(self.copies.get() + 1);
        Tracked::new(&self.text, &self.copies)
    }
}

impl Instrumented {
    fn new(text: &str, copies: &Rc<Cell<usize>>) -> Self {
        Self {
            inner: Carrier::new(Tracked::new(text, copies)),
            observed: Cell::new(0),
            relinquished: 0,
        }
    }
}

impl Source for Instrumented {
    type Item = Tracked;

    fn observe(&self) -> Result<Forwarded<'_, Tracked>, ChainError> {
        self.observed.set(self.observed.get() + 1);
        self.inner.observe()
    }

    fn relinquish(&mut self) -> Result<Forwarded<'_, Tracked>, ChainError> {
        self.relinquished += 1;
        self.inner.relinquish()
    }
}

type Log = RefCell<Vec<(usize, String, bool)>>;

fn recorder<'l>(log: &'l Log, position: usize) -> BoxedSink<'l, Tracked> {
    boxed(move |v: Forwarded<'_, Tracked>| {
        log.borrow_mut().push((position, v.text.clone(), v.is_ownable()));
    })
}

#[test]
fn stop_chain_prints_then_keeps_without_copying() {
    let copies = Rc::new(Cell::new(0));
    let mut source = Instrumented::new("STOP-chain-test", &copies);
    let printed = RefCell::new(Vec::new());
    let mut precious = Vec::new();

    tee(
        &mut source,
        (
            |m: Forwarded<'_, Tracked>| printed.borrow_mut().push(m.text.clone()),
            |m: Forwarded<'_, Tracked>| precious.push(m.into_owned()),
        ),
    )
    .unwrap();

    assert_eq!(printed.into_inner(), ["STOP-chain-test"]);
    assert_eq!(precious.len(), 1);
    assert_eq!(precious[0].text, "STOP-chain-test");
    assert_eq!(copies.get(), 0);
    assert_eq!(source.observed.get(), 1);
    assert_eq!(source.relinquished, 1);
    assert!(source.inner.is_spent());
    assert_eq!(source.relinquish().unwrap_err(), ChainError::SourceSpent);
}

#[test]
fn per_delivery_queries_once_per_sink() {
    let copies = Rc::new(Cell::new(0));
    let mut source = Instrumented::new("x", &copies);
    let seen = RefCell::new(Vec::new());
    let look = |v: Forwarded<'_, Tracked>| seen.borrow_mut().push(v.is_ownable());

    tee(&mut source, (look, look, look, look)).unwrap();

    assert_eq!(seen.into_inner(), [false, false, false, true]);
    assert_eq!(source.observed.get(), 3);
    assert_eq!(source.relinquished, 1);
}

#[test]
fn once_policy_relinquishes_up_front() {
    let copies = Rc::new(Cell::new(0));
    let mut source = Instrumented::new("x", &copies);
    let seen = RefCell::new(Vec::new());
    let look = |v: Forwarded<'_, Tracked>| seen.borrow_mut().push(v.is_ownable());

    Tee::new(&mut source).with_policy(Policy::Once).run((look, look, look)).unwrap();

    assert_eq!(seen.into_inner(), [false, false, true]);
    assert_eq!(source.observed.get(), 0);
    assert_eq!(source.relinquished, 1);
}

#[test]
fn store_from_read_only_source_copies_exactly_once() {
    let copies = Rc::new(Cell::new(0));
    let tracked = Tracked::new("lent", &copies);
    let mut kept = Vec::new();

    tee(ReadOnlySource::new(tracked), (|_: Forwarded<'_, Tracked>| {}, Store::new(&mut kept))).unwrap();

    assert_eq!(kept.len(), 1);
    assert_eq!(copies.get(), 1);
}

#[test]
fn spent_carrier_refuses_a_second_chain() {
    let mut carrier = Carrier::new(String::from("once"));
    let mut kept = Vec::new();
    likewise::tee!(&mut carrier => Store::new(&mut kept)).unwrap();

    let err = likewise::tee!(&mut carrier => |_: Forwarded<'_, String>| {}, |_: Forwarded<'_, String>| {}).unwrap_err();
    assert_eq!(err, ChainError::SourceSpent);
    assert_eq!(kept, ["once"]);
}

#[test]
fn error_messages_are_lowercase_and_unpunctuated() {
    for err in [ChainError::SourceSpent, ChainError::NoSinks] {
        let msg = err.to_string();
        assert!(msg.chars().next().is_some_and(char::is_lowercase), "{msg}");
        assert!(!msg.ends_with('.'), "{msg}");
    }
}

proptest! {
    #[test]
    fn every_sink_runs_in_order_and_only_the_last_owns(len in 1usize..24, once in any::<bool>()) {
        let log: Log = RefCell::new(Vec::new());
        let sinks: Vec<_> = (0..len).map(|i| recorder(&log, i)).collect();
        let copies = Rc::new(Cell::new(0));
        let source = Carrier::new(Tracked::new("payload", &copies));
        let policy = if once { Policy::Once } else { Policy::PerDelivery };

        Tee::new(source).with_policy(policy).run(sinks).unwrap();

        let log = log.into_inner();
        prop_assert_eq!(log.len(), len);
        for (i, (position, text, ownable)) in log.iter().enumerate() {
            prop_assert_eq!(*position, i);
            prop_assert_eq!(text.as_str(), "payload");
            prop_assert_eq!(*ownable, i + 1 == len);
        }
        prop_assert_eq!(copies.get(), 0);
    }
}
