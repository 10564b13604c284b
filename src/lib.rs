//! An explicit, panic-free error-handling abstraction: a two-variant outcome
//! type ([`Outcome`], with [`Pass`] and [`Fail`] variants), a set of
//! combinators for transforming, chaining, and inspecting outcomes, and a
//! pair of adapter functions ([`resultify`], [`resultify_async`]) that run
//! ordinary, possibly-panicking calls inside a trap and hand back an
//! `Outcome` instead of unwinding.
//!
//! ```
//! use passfail::{Outcome, Pass, Fail};
//!
//! fn halve(n: u32) -> Outcome<u32, String> {
//!     if n % 2 == 0 {
//!         Pass(n / 2)
//!     } else {
//!         Fail(format!("{n} is odd"))
//!     }
//! }
//!
//! let quarter = halve(12).and_then(halve);
//! assert_eq!(quarter, Pass(3));
//!
//! let failed = halve(7).and_then(halve);
//! assert!(failed.is_fail());
//! ```
//!
//! Code that panics (or returns a meaningless NaN float) can be pulled into
//! the same model with the adapters:
//!
//! ```
//! use passfail::resultify;
//!
//! let captured = resultify(|| "fine");
//! assert_eq!(captured.pass(), Some("fine"));
//!
//! let trapped: passfail::Outcome<(), _> = resultify(|| panic!("boom"));
//! assert!(trapped.is_fail());
//! ```

mod outcome;
pub use outcome::*;

mod error;
pub use error::*;

mod resultify;
pub use resultify::*;
