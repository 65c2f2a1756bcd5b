use core::{convert, fmt};

/// The alternative branch, conventionally the failure case.
#[repr(transparent)]
#[derive(
    derive_more::AsRef,
    derive_more::Constructor,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Left<T>(pub T);

/// The primary branch, conventionally the success case.
#[repr(transparent)]
#[derive(
    derive_more::AsRef,
    derive_more::Constructor,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Right<T>(pub T);

impl<T> Left<T> {
    pub const fn read(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Right<T> {
    pub const fn read(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for Left<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Left({})", self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Right<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Right({})", self.0)
    }
}

/// A value that is exactly one of [`Left`] or [`Right`].
///
/// The tag is fixed at construction and nothing mutates the payload afterwards.
/// Consume it with [`Either::fold`], or ask which branch it is with
/// [`Either::is_left`] and [`Either::is_right`].
#[derive(
    derive_more::IsVariant, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Either<L, R> {
    Left(Left<L>),
    Right(Right<R>),
}

impl<L, R> Either<L, R> {
    pub const fn left(value: L) -> Self {
        Self::Left(Left(value))
    }

    pub const fn right(value: R) -> Self {
        Self::Right(Right(value))
    }

    /// Run `on_left` or `on_right` on the payload, whichever matches the tag.
    ///
    /// The other handler is dropped without being called.
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(Left(value)) => {
                log::trace!("folding left branch");
                on_left(value)
            }
            Self::Right(Right(value)) => {
                log::trace!("folding right branch");
                on_right(value)
            }
        }
    }

    /// Borrow the payload, keeping its tag.
    pub const fn read(&self) -> Either<&L, &R> {
        match self {
            Self::Left(Left(value)) => Either::Left(Left(value)),
            Self::Right(Right(value)) => Either::Right(Right(value)),
        }
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }
}

impl<T> Either<T, T> {
    /// The payload of a homogeneous `Either`, whichever branch holds it.
    pub fn read_value(&self) -> &T {
        self.read().fold(convert::identity, convert::identity)
    }

    pub fn into_inner(self) -> T {
        self.fold(convert::identity, convert::identity)
    }
}

impl<L, R> From<Left<L>> for Either<L, R> {
    fn from(left: Left<L>) -> Self {
        Self::Left(left)
    }
}

impl<L, R> From<Right<R>> for Either<L, R> {
    fn from(right: Right<R>) -> Self {
        Self::Right(right)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::right(value),
            Err(value) => Self::left(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(left) => fmt::Display::fmt(left, f),
            Self::Right(right) => fmt::Display::fmt(right, f),
        }
    }
}
