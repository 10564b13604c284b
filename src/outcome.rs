use std::fmt::Debug;

use crate::{ExpectFailError, UnwrappedFailError};

/// Holds either a success value or a failure value, never both.
///
/// `Outcome<T, E>` is a closed sum type with exactly two variants: [`Pass`]
/// carrying a success payload, and [`Fail`] carrying a failure payload. An
/// instance is permanently one variant for its lifetime; no method mutates
/// stored state, so a shared `Outcome` is safe to read from any number of
/// threads at once.
///
/// # Creation
///
/// Construct instances directly with the variants, which are re-exported at
/// the crate root:
///
/// ```
/// # use passfail::{Outcome, Pass, Fail};
/// let won: Outcome<u32, String> = Pass(42);
/// let lost: Outcome<u32, String> = Fail("out of disk".to_owned());
/// ```
///
/// Or adapt a possibly-panicking call with [`resultify`] /
/// [`resultify_async`], which never let a panic escape.
///
/// An `Outcome` that statically cannot fail (or cannot succeed) is spelled
/// with [`std::convert::Infallible`] in the relevant position:
///
/// ```
/// # use std::convert::Infallible;
/// # use passfail::{Outcome, Pass};
/// let always: Outcome<u32, Infallible> = Pass(1);
/// ```
///
/// # Consumption
///
/// - Ask which variant holds: [`is_pass`], [`is_fail`]
/// - Take the payload, panicking on the wrong variant: [`unwrap_pass`],
///   [`unwrap_fail`]
/// - Take the payload, receiving the misuse error as a value instead:
///   [`try_pass`], [`try_fail`]
/// - Take the payload silently: [`pass`], [`fail`], [`pass_or`]
/// - Run exactly one of two branches: [`fold`]
///
/// # Combination
///
/// Every transformer consumes `self` and returns a brand new `Outcome`, so
/// chains compose without mutation:
///
/// - Transform one side: [`map`], [`map_fail`]
/// - Sequence a fallible step: [`and_then`]
/// - Attempt a fallback on failure: [`or_else`]
/// - Observe without changing anything: [`inspect`], [`inspect_pass`],
///   [`inspect_fail`]
///
/// [`resultify`]: crate::resultify
/// [`resultify_async`]: crate::resultify_async
/// [`is_pass`]: Outcome::is_pass
/// [`is_fail`]: Outcome::is_fail
/// [`unwrap_pass`]: Outcome::unwrap_pass
/// [`unwrap_fail`]: Outcome::unwrap_fail
/// [`try_pass`]: Outcome::try_pass
/// [`try_fail`]: Outcome::try_fail
/// [`pass`]: Outcome::pass
/// [`fail`]: Outcome::fail
/// [`pass_or`]: Outcome::pass_or
/// [`fold`]: Outcome::fold
/// [`map`]: Outcome::map
/// [`map_fail`]: Outcome::map_fail
/// [`and_then`]: Outcome::and_then
/// [`or_else`]: Outcome::or_else
/// [`inspect`]: Outcome::inspect
/// [`inspect_pass`]: Outcome::inspect_pass
/// [`inspect_fail`]: Outcome::inspect_fail
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The success variant, holding the success payload.
    Pass(T),
    /// The failure variant, holding the failure payload.
    Fail(E),
}

pub use self::Outcome::{Fail, Pass};

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is a [`Pass`].
    ///
    /// Opposite of [`is_fail`](Outcome::is_fail); exactly one of the two is
    /// `true` for any instance.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Pass(_))
    }

    /// Returns `true` if this is a [`Fail`].
    ///
    /// Opposite of [`is_pass`](Outcome::is_pass).
    #[must_use]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Extracts the success payload, panicking if this is a [`Fail`].
    ///
    /// The panic message is the [`UnwrappedFailError`] rendering of the
    /// stored failure value. If the call site would rather receive that
    /// error as a value, use [`try_pass`](Outcome::try_pass); if it wants
    /// silence, use [`pass`](Outcome::pass).
    ///
    /// ```
    /// # use passfail::{Outcome, Pass};
    /// let o: Outcome<u32, String> = Pass(42);
    /// assert_eq!(o.unwrap_pass(), 42);
    /// ```
    ///
    /// ```should_panic
    /// # use passfail::{Outcome, Fail};
    /// let o: Outcome<u32, &str> = Fail("out of disk");
    /// o.unwrap_pass(); // Panics
    /// ```
    #[track_caller]
    pub fn unwrap_pass(self) -> T
    where E: Debug
    {
        match self.try_pass() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Extracts the failure payload, panicking if this is a [`Pass`].
    ///
    /// The panic message is the [`ExpectFailError`] rendering of the stored
    /// success value.
    ///
    /// ```
    /// # use passfail::{Outcome, Fail};
    /// let o: Outcome<u32, &str> = Fail("out of disk");
    /// assert_eq!(o.unwrap_fail(), "out of disk");
    /// ```
    ///
    /// ```should_panic
    /// # use passfail::{Outcome, Pass};
    /// let o: Outcome<u32, &str> = Pass(42);
    /// o.unwrap_fail(); // Panics
    /// ```
    #[track_caller]
    pub fn unwrap_fail(self) -> E
    where T: Debug
    {
        match self.try_fail() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Extracts the success payload, or returns an [`UnwrappedFailError`]
    /// describing the stored failure value if this is a [`Fail`].
    ///
    /// The non-panicking form of [`unwrap_pass`](Outcome::unwrap_pass).
    ///
    /// ```
    /// # use passfail::{Outcome, Fail, UnwrappedFailError};
    /// let o: Outcome<u32, &str> = Fail("out of disk");
    /// let err = o.try_pass().unwrap_err();
    /// assert_eq!(err.kind(), UnwrappedFailError::KIND);
    /// assert!(err.failure().contains("out of disk"));
    /// ```
    pub fn try_pass(self) -> Result<T, UnwrappedFailError>
    where E: Debug
    {
        match self {
            Pass(value) => Ok(value),
            Fail(error) => Err(UnwrappedFailError::new(format!("{error:?}"))),
        }
    }

    /// Extracts the failure payload, or returns an [`ExpectFailError`]
    /// describing the stored success value if this is a [`Pass`].
    ///
    /// The non-panicking form of [`unwrap_fail`](Outcome::unwrap_fail).
    pub fn try_fail(self) -> Result<E, ExpectFailError>
    where T: Debug
    {
        match self {
            Pass(value) => Err(ExpectFailError::new(format!("{value:?}"))),
            Fail(error) => Ok(error),
        }
    }

    /// Applies a function to the success payload, leaving a failure
    /// untouched.
    ///
    /// The function must not panic for the combinator chain's no-panic
    /// guarantee to hold end-to-end; a fallible transform belongs in
    /// [`and_then`](Outcome::and_then).
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// let o: Outcome<&str, u32> = Pass("hello");
    /// assert_eq!(o.map(str::len), Pass(5));
    ///
    /// let o: Outcome<&str, u32> = Fail(404);
    /// assert_eq!(o.map(str::len), Fail(404));
    /// ```
    #[must_use]
    pub fn map<U>(self, func: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Pass(value) => Pass(func(value)),
            Fail(error) => Fail(error),
        }
    }

    /// Applies a function to the failure payload, leaving a success
    /// untouched.
    ///
    /// ```
    /// # use passfail::{Outcome, Fail};
    /// let o: Outcome<u32, &str> = Fail("oh no");
    /// assert_eq!(o.map_fail(str::to_uppercase), Fail("OH NO".to_owned()));
    /// ```
    #[must_use]
    pub fn map_fail<F>(self, func: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Pass(value) => Pass(value),
            Fail(error) => Fail(func(error)),
        }
    }

    /// Sequences a fallible step: on success, replaces the whole `Outcome`
    /// with whatever `func` returns; on failure, propagates the failure
    /// unchanged.
    ///
    /// `func` itself returns an `Outcome`, so the result is flattened
    /// rather than nested. This is the primary "and then do this fallible
    /// step" primitive.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// fn parse(s: &str) -> Outcome<u32, String> {
    ///     match s.parse() {
    ///         Ok(n) => Pass(n),
    ///         Err(e) => Fail(e.to_string()),
    ///     }
    /// }
    ///
    /// let o: Outcome<&str, String> = Pass("42");
    /// assert_eq!(o.and_then(parse), Pass(42));
    ///
    /// let o: Outcome<&str, String> = Pass("forty-two");
    /// assert!(o.and_then(parse).is_fail());
    /// ```
    #[must_use]
    pub fn and_then<U>(self, func: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Pass(value) => func(value),
            Fail(error) => Fail(error),
        }
    }

    /// Attempts a fallback: on failure, replaces the whole `Outcome` with
    /// whatever `func` returns; on success, propagates the success
    /// unchanged.
    ///
    /// The failure-side counterpart of [`and_then`](Outcome::and_then).
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// let o: Outcome<u32, &str> = Fail("primary source down");
    /// let recovered = o.or_else(|_| -> Outcome<u32, &str> { Pass(0) });
    /// assert_eq!(recovered, Pass(0));
    /// ```
    #[must_use]
    pub fn or_else<F>(self, func: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Pass(value) => Pass(value),
            Fail(error) => func(error),
        }
    }

    /// Returns the success payload, or `None` on failure. Never panics.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// let o: Outcome<u32, &str> = Pass(42);
    /// assert_eq!(o.pass(), Some(42));
    ///
    /// let o: Outcome<u32, &str> = Fail("oh no");
    /// assert_eq!(o.pass(), None);
    /// ```
    #[must_use]
    pub fn pass(self) -> Option<T> {
        match self {
            Pass(value) => Some(value),
            Fail(_) => None,
        }
    }

    /// Returns the failure payload, or `None` on success. Never panics.
    #[must_use]
    pub fn fail(self) -> Option<E> {
        match self {
            Pass(_) => None,
            Fail(error) => Some(error),
        }
    }

    /// Returns the success payload, or `default` on failure.
    ///
    /// ```
    /// # use passfail::{Outcome, Fail};
    /// let o: Outcome<u32, &str> = Fail("oh no");
    /// assert_eq!(o.pass_or(0), 0);
    /// ```
    #[must_use]
    pub fn pass_or(self, default: T) -> T {
        match self {
            Pass(value) => value,
            Fail(_) => default,
        }
    }

    /// Calls `func` once with a shared borrow of this `Outcome` for a side
    /// effect (logging, say), then returns the `Outcome` unchanged.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass};
    /// let o: Outcome<u32, &str> = Pass(42);
    /// let o = o.inspect(|o| println!("computed: {o:?}"));
    /// assert_eq!(o, Pass(42));
    /// ```
    #[must_use]
    pub fn inspect(self, func: impl FnOnce(&Self)) -> Self {
        func(&self);
        self
    }

    /// Like [`inspect`](Outcome::inspect), but `func` runs only on a
    /// [`Pass`], borrowing the success payload.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// let mut seen = None;
    /// let o: Outcome<u32, &str> = Pass(42);
    /// let o = o.inspect_pass(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(o, Pass(42));
    ///
    /// let o: Outcome<u32, &str> = Fail("oh no");
    /// let o = o.inspect_pass(|_| unreachable!());
    /// assert_eq!(o, Fail("oh no"));
    /// ```
    #[must_use]
    pub fn inspect_pass(self, func: impl FnOnce(&T)) -> Self {
        if let Pass(value) = &self {
            func(value);
        }
        self
    }

    /// Like [`inspect`](Outcome::inspect), but `func` runs only on a
    /// [`Fail`], borrowing the failure payload.
    #[must_use]
    pub fn inspect_fail(self, func: impl FnOnce(&E)) -> Self {
        if let Fail(error) = &self {
            func(error);
        }
        self
    }

    /// Exhaustive single-pass case analysis: runs `on_pass` with the
    /// success payload or `on_fail` with the failure payload, whichever
    /// variant holds. Exactly one branch runs.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// let o: Outcome<u32, &str> = Pass(42);
    /// let description = o.fold(
    ///     |v| format!("passed with {v}"),
    ///     |e| format!("failed with {e}"),
    /// );
    /// assert_eq!(description, "passed with 42");
    /// ```
    pub fn fold<R>(self, on_pass: impl FnOnce(T) -> R, on_fail: impl FnOnce(E) -> R) -> R {
        match self {
            Pass(value) => on_pass(value),
            Fail(error) => on_fail(error),
        }
    }

    /// Borrowing view: converts `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass};
    /// let o: Outcome<String, String> = Pass("hello".to_owned());
    /// assert_eq!(o.as_ref().map(|s| s.len()), Pass(5));
    /// assert!(o.is_pass()); // `o` is still usable
    /// ```
    #[must_use]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Pass(value) => Pass(value),
            Fail(error) => Fail(error),
        }
    }

    /// Converts this `Outcome` into the standard [`Result`], mapping
    /// [`Pass`] to [`Ok`] and [`Fail`] to [`Err`].
    ///
    /// ```
    /// # use passfail::{Outcome, Pass};
    /// let o: Outcome<u32, &str> = Pass(42);
    /// assert_eq!(o.into_result(), Ok(42));
    /// ```
    #[must_use]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Pass(value) => Ok(value),
            Fail(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Pass(value),
            Err(error) => Fail(error),
        }
    }
}

/// Iterator adapter used by the `FromIterator` impl below: yields the
/// success payloads of an inner iterator, diverting the first failure into
/// `failure` and fusing from then on.
struct FailShunt<'a, I, E> {
    iter: I,
    failure: &'a mut Option<E>,
}

impl<I, T, E> Iterator for FailShunt<'_, I, E>
where I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match self.iter.next() {
            Some(Pass(value)) => Some(value),
            Some(Fail(error)) => {
                *self.failure = Some(error);
                None
            }
            None => None,
        }
    }
}

impl<T, E, C: FromIterator<T>> FromIterator<Outcome<T, E>> for Outcome<C, E> {
    /// Enables an [`Iterator`] of `Outcome` items to be collected into a
    /// single `Outcome` holding a collection of the success payloads.
    ///
    /// Collection short-circuits on the first [`Fail`]: that failure
    /// becomes the result, and no further items are consumed.
    ///
    /// ```
    /// # use passfail::{Outcome, Pass, Fail};
    /// let items = vec![Pass(1), Pass(2), Pass(3)];
    /// let combined: Outcome<Vec<u32>, &str> = items.into_iter().collect();
    /// assert_eq!(combined, Pass(vec![1, 2, 3]));
    ///
    /// let items = vec![Pass(1), Fail("bad item"), Pass(3)];
    /// let combined: Outcome<Vec<u32>, &str> = items.into_iter().collect();
    /// assert_eq!(combined, Fail("bad item"));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collection = FailShunt { iter: iter.into_iter(), failure: &mut failure }.collect();

        match failure {
            Some(error) => Fail(error),
            None => Pass(collection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(n: u32) -> Outcome<u32, &'static str> {
        Pass(n * 2)
    }

    fn reject(_: u32) -> Outcome<u32, &'static str> {
        Fail("rejected")
    }

    #[test]
    fn predicates_are_complementary() {
        let pass: Outcome<u32, &str> = Pass(1);
        assert!(pass.is_pass());
        assert!(!pass.is_fail());

        let fail: Outcome<u32, &str> = Fail("x");
        assert!(fail.is_fail());
        assert!(!fail.is_pass());
    }

    #[test]
    fn unwraps_return_the_stored_payload() {
        let pass: Outcome<u32, &str> = Pass(42);
        assert_eq!(pass.unwrap_pass(), 42);

        let fail: Outcome<u32, &str> = Fail("oh no");
        assert_eq!(fail.unwrap_fail(), "oh no");
    }

    #[test]
    #[should_panic(expected = "requested the success payload of a `Fail` outcome")]
    fn unwrap_pass_on_fail_panics() {
        let fail: Outcome<u32, &str> = Fail("oh no");
        fail.unwrap_pass();
    }

    #[test]
    #[should_panic(expected = "requested the failure payload of a `Pass` outcome")]
    fn unwrap_fail_on_pass_panics() {
        let pass: Outcome<u32, &str> = Pass(42);
        pass.unwrap_fail();
    }

    #[test]
    fn try_accessors_report_misuse_as_values() {
        let fail: Outcome<u32, &str> = Fail("oh no");
        let err = fail.try_pass().unwrap_err();
        assert_eq!(err.kind(), UnwrappedFailError::KIND);
        assert!(err.failure().contains("oh no"));

        let pass: Outcome<u32, &str> = Pass(42);
        let err = pass.try_fail().unwrap_err();
        assert_eq!(err.kind(), ExpectFailError::KIND);
        assert!(err.success().contains("42"));

        let pass: Outcome<u32, &str> = Pass(42);
        assert_eq!(pass.try_pass(), Ok(42));
    }

    #[test]
    fn map_identity_preserves_variant_and_payload() {
        let pass: Outcome<u32, &str> = Pass(42);
        assert_eq!(pass.map(|v| v), Pass(42));
        assert_eq!(pass.map_fail(|e| e), Pass(42));

        let fail: Outcome<u32, &str> = Fail("oh no");
        assert_eq!(fail.map(|v| v), Fail("oh no"));
        assert_eq!(fail.map_fail(|e| e), Fail("oh no"));
    }

    #[test]
    fn and_then_is_associative() {
        for outcome in [Pass(3), Fail("seed")] {
            let left = outcome.and_then(double).and_then(reject);
            let right = outcome.and_then(|v| double(v).and_then(reject));
            assert_eq!(left, right);

            let left = outcome.and_then(double).and_then(double);
            let right = outcome.and_then(|v| double(v).and_then(double));
            assert_eq!(left, right);
        }
    }

    #[test]
    fn and_then_propagates_failure_untouched() {
        let fail: Outcome<u32, &str> = Fail("oh no");
        assert_eq!(fail.and_then(double), Fail("oh no"));
    }

    #[test]
    fn or_else_recovers_only_failures() {
        let fail: Outcome<u32, &str> = Fail("oh no");
        assert_eq!(fail.or_else(|_| -> Outcome<u32, &str> { Pass(0) }), Pass(0));

        let pass: Outcome<u32, &str> = Pass(42);
        assert_eq!(pass.or_else(|_| -> Outcome<u32, &str> { Pass(0) }), Pass(42));
    }

    #[test]
    fn fold_runs_exactly_one_branch() {
        let mut pass_runs = 0;
        let mut fail_runs = 0;

        let pass: Outcome<u32, &str> = Pass(42);
        let got = pass.fold(
            |v| { pass_runs += 1; v },
            |_| { fail_runs += 1; 0 },
        );
        assert_eq!(got, 42);
        assert_eq!((pass_runs, fail_runs), (1, 0));

        let fail: Outcome<u32, &str> = Fail("oh no");
        let got = fail.fold(
            |v| { pass_runs += 1; v },
            |_| { fail_runs += 1; 0 },
        );
        assert_eq!(got, 0);
        assert_eq!((pass_runs, fail_runs), (1, 1));
    }

    #[test]
    fn inspect_observes_without_changing_the_outcome() {
        let mut observed = None;
        let pass: Outcome<u32, &str> = Pass(42);
        let pass = pass.inspect(|o| observed = Some(o.is_pass()));
        assert_eq!(observed, Some(true));
        assert_eq!(pass, Pass(42));

        let mut fail_seen = false;
        let fail: Outcome<u32, &str> = Fail("oh no");
        let fail = fail
            .inspect_pass(|_| unreachable!("no success payload to inspect"))
            .inspect_fail(|_| fail_seen = true);
        assert!(fail_seen);
        assert_eq!(fail, Fail("oh no"));
    }

    #[test]
    fn optional_accessors_never_panic() {
        let pass: Outcome<u32, &str> = Pass(42);
        assert_eq!(pass.pass(), Some(42));
        assert_eq!(pass.fail(), None);

        let fail: Outcome<u32, &str> = Fail("oh no");
        assert_eq!(fail.pass(), None);
        assert_eq!(fail.fail(), Some("oh no"));
        let fail: Outcome<u32, &str> = Fail("oh no");
        assert_eq!(fail.pass_or(7), 7);
    }

    #[test]
    fn converts_to_and_from_result() {
        let pass: Outcome<u32, &str> = Ok(42).into();
        assert_eq!(pass, Pass(42));
        assert_eq!(pass.into_result(), Ok(42));

        let fail: Outcome<u32, &str> = Err("oh no").into();
        assert_eq!(fail, Fail("oh no"));
        assert_eq!(fail.into_result(), Err("oh no"));
    }

    #[test]
    fn collect_short_circuits_on_first_failure() {
        let all_pass: Outcome<Vec<u32>, &str> =
            vec![Pass(1), Pass(2), Pass(3)].into_iter().collect();
        assert_eq!(all_pass, Pass(vec![1, 2, 3]));

        let mut consumed = 0;
        let with_fail: Outcome<Vec<u32>, &str> = [Pass(1), Fail("bad"), Pass(3)]
            .into_iter()
            .inspect(|_| consumed += 1)
            .collect();
        assert_eq!(with_fail, Fail("bad"));
        assert_eq!(consumed, 2);
    }
}
