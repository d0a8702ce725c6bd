//! Forwarding a message through a print-then-save chain.
//!
//! Run with `RUST_LOG=trace cargo run --example closure_forwarding --features tracing`
//! to see each delivery.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use likewise::chain::{tee, Carrier, Forwarded, Generator, ReadOnlySource, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TEXT: &str = "Mired before cave STOP \
                    Only flesh wounds so far STOP \
                    Send holy hand grenade of Antioch STOP \
                    Love Knights of Ni STOP";

/// A message that counts how often it is copied.
struct Message {
    text: String,
    copies: Rc<Cell<usize>>,
}

impl Message {
    fn new(copies: &Rc<Cell<usize>>) -> Self {
        Message {
            text: TEXT.to_owned(),
            copies: Rc::clone(copies),
        }
    }
}

impl Clone for Message {
    fn clone(&self) -> Self {
        self.copies.set(self.copies.get() + 1);
        Message {
            text: self.text.clone(),
            copies: Rc::clone(&self.copies),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn print(message: Forwarded<'_, Message>) {
    println!("  {message}");
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Closure Forwarding Example");
    println!("==========================");

    let mut precious = Vec::new();

    // A carrier owns the message and gives it up to the last sink.
    let copies = Rc::new(Cell::new(0));
    let mut carrier = Carrier::new(Message::new(&copies));
    tee(&mut carrier, (print, Store::new(&mut precious)))?;
    println!("carrier: {} copies, spent = {}", copies.get(), carrier.is_spent());

    // A read-only source can only lend, so the saving sink copies.
    let copies = Rc::new(Cell::new(0));
    tee(ReadOnlySource::new(Message::new(&copies)), (print, Store::new(&mut precious)))?;
    println!("read-only source: {} copies", copies.get());

    // A generator builds a fresh message for every query; the last one is moved.
    let copies = Rc::new(Cell::new(0));
    let generator = Generator::new(|| Message::new(&copies));
    likewise::tee!(generator => print, print, Store::new(&mut precious))?;
    println!("generator: {} copies", copies.get());

    println!("\nSaved {} messages", precious.len());
    Ok(())
}

