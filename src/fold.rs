use crate::data::{Either, Left, Right};

/// Case analysis shared by [`Left`], [`Right`] and [`Either`].
///
/// `L` and `R` are the payload types of the two branches. A bare [`Left<L>`]
/// is a `Fold<L, R>` for any `R`, and likewise for [`Right<R>`], so either
/// variant can stand in wherever a full `Either<L, R>` is folded.
///
/// On a bare variant the other branch type is free, so a direct call names it:
///
/// ```
/// use either_fold::{Fold, Left};
///
/// assert!(!Fold::<&str, ()>::is_right(&Left("err")));
/// assert_eq!(Fold::<i32, i32>::fold(Left(42), |x| x + 1, |x| x - 1), 43);
/// ```
pub trait Fold<L, R>: Sized {
    /// Run exactly one of the handlers on the payload and return its result.
    fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T;

    fn is_left(&self) -> bool;

    fn is_right(&self) -> bool {
        !self.is_left()
    }
}

impl<L, R> Fold<L, R> for Left<L> {
    fn fold<T>(self, on_left: impl FnOnce(L) -> T, _: impl FnOnce(R) -> T) -> T {
        log::trace!("folding left branch");
        on_left(self.0)
    }

    fn is_left(&self) -> bool {
        true
    }
}

impl<L, R> Fold<L, R> for Right<R> {
    fn fold<T>(self, _: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        log::trace!("folding right branch");
        on_right(self.0)
    }

    fn is_left(&self) -> bool {
        false
    }
}

impl<L, R> Fold<L, R> for Either<L, R> {
    fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        Either::fold(self, on_left, on_right)
    }

    fn is_left(&self) -> bool {
        Either::is_left(self)
    }
}
