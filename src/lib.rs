#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! A two-branch `Either` value.
//!
//! An [`Either`] holds exactly one payload, tagged [`Left`] (the alternative or
//! failure branch) or [`Right`] (the primary or success branch). It is consumed
//! with [`Either::fold`], which runs exactly one of two handlers, and queried
//! with [`Either::is_left`] and [`Either::is_right`].

pub mod data;
pub mod fold;

pub use data::{Either, Left, Right};
pub use fold::Fold;
