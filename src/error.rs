use thiserror::Error;

/// Reported when code requests the success payload of a [`Fail`] outcome.
///
/// Carries a [`Debug`](std::fmt::Debug) rendering of the failure value that
/// was actually stored, so the message points at what went wrong rather than
/// just that the wrong variant was consumed.
///
/// [`Fail`]: crate::Fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requested the success payload of a `Fail` outcome: {failure}")]
pub struct UnwrappedFailError {
    failure: String,
}

impl UnwrappedFailError {
    /// Stable identifier for this failure kind.
    pub const KIND: &'static str = "unwrapped_fail";

    pub(crate) fn new(failure: impl Into<String>) -> Self {
        Self { failure: failure.into() }
    }

    /// The identifier in [`Self::KIND`].
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Rendering of the failure value the outcome was holding.
    pub fn failure(&self) -> &str {
        &self.failure
    }
}

/// Reported when code requests the failure payload of a [`Pass`] outcome.
///
/// Counterpart of [`UnwrappedFailError`]; carries a rendering of the stored
/// success value.
///
/// [`Pass`]: crate::Pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requested the failure payload of a `Pass` outcome: {success}")]
pub struct ExpectFailError {
    success: String,
}

impl ExpectFailError {
    /// Stable identifier for this failure kind.
    pub const KIND: &'static str = "expect_fail";

    pub(crate) fn new(success: impl Into<String>) -> Self {
        Self { success: success.into() }
    }

    /// The identifier in [`Self::KIND`].
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Rendering of the success value the outcome was holding.
    pub fn success(&self) -> &str {
        &self.success
    }
}

/// An adapted call completed, but its result was the not-a-number float.
///
/// [`resultify`](crate::resultify) and [`resultify_async`](crate::resultify_async)
/// treat a numerically meaningless result as a domain failure rather than a
/// success, so a NaN `f32`/`f64` comes back as `Fail(NanError)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("adapted call produced a not-a-number float")]
pub struct NanError;

impl NanError {
    /// Stable identifier for this failure kind.
    pub const KIND: &'static str = "nan";

    /// The identifier in [`Self::KIND`].
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }
}

/// An adapted call panicked with a payload that is not a structured error.
///
/// The adapters pass structured errors through untouched; everything else
/// (a bare `&str` or `String` message, or some arbitrary value) is wrapped
/// in one of these, carrying a deterministic rendering of the payload.
///
/// ```
/// use passfail::{resultify, ResultifyFailError};
///
/// let trapped: passfail::Outcome<(), _> = resultify(|| panic!("boom"));
/// let error = trapped.fail().unwrap();
/// let wrapped = error.downcast_ref::<ResultifyFailError>().unwrap();
/// assert_eq!(wrapped.payload(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("adapted call panicked: {payload}")]
pub struct ResultifyFailError {
    payload: String,
}

impl ResultifyFailError {
    /// Stable identifier for this failure kind.
    pub const KIND: &'static str = "resultify_fail";

    /// Placeholder used when the panic payload has no printable form.
    pub(crate) const OPAQUE_PAYLOAD: &'static str = "<unprintable panic payload>";

    pub(crate) fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }

    pub(crate) fn opaque() -> Self {
        Self::new(Self::OPAQUE_PAYLOAD)
    }

    /// The identifier in [`Self::KIND`].
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Rendering of the captured panic payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
