use std::any::Any;
use std::error::Error;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use futures::FutureExt;

use crate::{Fail, NanError, Outcome, Pass, ResultifyFailError};

/// Normalized failure payload produced by [`resultify`] and
/// [`resultify_async`].
///
/// Structured errors captured from a panic are passed through behind this
/// type with their identity intact ([`Error::downcast_ref`] still reaches
/// the concrete type); everything else is one of the crate's own kinds
/// ([`NanError`], [`ResultifyFailError`]).
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Invokes `func` inside a panic trap and captures the result as an
/// [`Outcome`]. No panic escapes this call.
///
/// Arguments are passed by closure capture. Classification of what the call
/// did:
///
/// - Returned a value (other than a NaN float): `Pass(value)`.
/// - Returned a NaN `f32`/`f64`: `Fail(`[`NanError`]`)`. A call that
///   completes with a numerically meaningless result is a domain failure,
///   not a success. Only the two float primitives are ever checked; no
///   other return type is NaN-classified.
/// - Panicked with a structured error (a payload of type [`BoxError`],
///   raised via [`std::panic::panic_any`]): `Fail` with that exact error,
///   untouched.
/// - Panicked with anything else: `Fail(`[`ResultifyFailError`]`)` wrapping
///   a rendering of the payload: `&str` and `String` messages verbatim,
///   a fixed placeholder for payloads with no printable form.
///
/// ```
/// use passfail::resultify;
///
/// assert_eq!(resultify(|| 21 * 2).unwrap_pass(), 42);
/// ```
///
/// ```
/// use passfail::{resultify, NanError};
///
/// let outcome = resultify(|| 0.0_f64 / 0.0);
/// let error = outcome.fail().unwrap();
/// assert!(error.downcast_ref::<NanError>().is_some());
/// ```
///
/// ```
/// use passfail::{resultify, Outcome, ResultifyFailError};
///
/// let outcome: Outcome<(), _> = resultify(|| panic!("boom"));
/// let error = outcome.fail().unwrap();
/// assert_eq!(error.downcast_ref::<ResultifyFailError>().unwrap().payload(), "boom");
/// ```
pub fn resultify<T, F>(func: F) -> Outcome<T, BoxError>
where
    F: FnOnce() -> T + UnwindSafe,
    T: Any,
{
    match panic::catch_unwind(func) {
        Ok(value) => classify_settled(value),
        Err(payload) => Fail(classify_panic(payload)),
    }
}

/// Awaits `fut` inside a panic trap and captures its resolution as an
/// [`Outcome`]. The async counterpart of [`resultify`], classifying with
/// the same rules: a panic during polling is captured exactly like a
/// synchronous panic, and a resolved value goes through the same NaN
/// check. Callers of the resulting `Outcome` cannot tell which adapter
/// produced it.
///
/// The future is polled under [`AssertUnwindSafe`]: a future holding
/// borrows is rarely nominally unwind-safe, and any unwind is rerouted
/// into a `Fail` rather than resumed against the future's state.
///
/// No timeout or cancellation is imposed: if `fut` never settles, neither
/// does this call.
///
/// ```
/// use passfail::resultify_async;
///
/// futures::executor::block_on(async {
///     assert_eq!(resultify_async(async { 7 }).await.unwrap_pass(), 7);
/// });
/// ```
pub async fn resultify_async<Fut>(fut: Fut) -> Outcome<Fut::Output, BoxError>
where
    Fut: Future,
    Fut::Output: Any,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => classify_settled(value),
        Err(payload) => Fail(classify_panic(payload)),
    }
}

/// Classifies a value the adapted call settled with: NaN floats become a
/// `Fail`, everything else a `Pass`.
fn classify_settled<T: Any>(value: T) -> Outcome<T, BoxError> {
    if is_nan_float(&value) {
        Fail(Box::new(NanError))
    } else {
        Pass(value)
    }
}

fn is_nan_float(value: &dyn Any) -> bool {
    if let Some(float) = value.downcast_ref::<f64>() {
        return float.is_nan();
    }
    if let Some(float) = value.downcast_ref::<f32>() {
        return float.is_nan();
    }
    false
}

/// Normalizes a captured panic payload into the adapter failure family.
///
/// The rendering rule is deterministic: a [`BoxError`] payload is returned
/// as-is, string payloads are wrapped verbatim, and everything else gets
/// [`ResultifyFailError`]'s fixed placeholder.
fn classify_panic(payload: Box<dyn Any + Send>) -> BoxError {
    let payload = match payload.downcast::<BoxError>() {
        Ok(structured) => return *structured,
        Err(other) => other,
    };
    let payload = match payload.downcast::<String>() {
        Ok(message) => return Box::new(ResultifyFailError::new(*message)),
        Err(other) => other,
    };
    match payload.downcast::<&'static str>() {
        Ok(message) => Box::new(ResultifyFailError::new(*message)),
        Err(_) => Box::new(ResultifyFailError::opaque()),
    }
}
