//! Single-use forwarding chains.
//!
//! A chain hands one [`Source`]'s value to an ordered list of sinks. Every
//! sink but the last sees a borrow; the last receives whatever the source
//! relinquishes, so a source that owns its value lets the last sink move it
//! instead of copying.
//!
//! ```
//! use likewise::chain::{tee, Carrier, Forwarded, Store};
//!
//! let mut log = Vec::new();
//! let mut precious = Vec::new();
//! let mut carrier = Carrier::new(String::from("STOP"));
//!
//! tee(
//!     &mut carrier,
//!     (|m: Forwarded<'_, String>| log.push(m.to_string()), Store::new(&mut precious)),
//! )
//! .unwrap();
//!
//! assert_eq!(log, ["STOP"]);
//! assert_eq!(precious, ["STOP"]);
//! assert!(carrier.is_spent());
//! ```

mod error;
mod forwarded;
mod sink;
mod source;
mod tee;

pub use error::ChainError;
pub use forwarded::Forwarded;
pub use sink::{boxed, sink, BoxedSink, Sink, Store};
pub use source::{Carrier, Generator, ReadOnlySource, Source};
pub use tee::{tee, Policy, Sinks, Tee};
