//! A lightweight dictionary for small, flexible mappings.
//!
//! [`Dictlite`] keeps its mappings in insertion order and decides key
//! identity with a pluggable [`KeyComparator`].

mod compare;
mod dict;
mod iter;
#[cfg(feature = "serde")]
mod serialize;

pub use self::{
    compare::{IdentityComparator, KeyComparator, OrdComparator},
    dict::{Dictlite, MappingItem},
    iter::{IntoIter, Iter, IterMut, Keys, Values},
};
