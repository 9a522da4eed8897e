//! # Common Types and Traits
use core::borrow::Borrow;
use core::hash::Hash;
use num_traits::{FromPrimitive, Num, ToPrimitive, Unsigned};
use std::fmt::{Debug, Display};
use std::ops::AddAssign;

/// A type that can be used as a vocabulary rank.
pub trait TokenType:
    'static
    + Default
    + Debug
    + Display
    + Clone
    + Copy
    + Hash
    + Send
    + Sync
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Ord
{
}

impl<T> TokenType for T where
    T: 'static
        + Default
        + Debug
        + Display
        + Clone
        + Copy
        + Hash
        + Send
        + Sync
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Ord
{
}

/// A type that can be used as a word count.
pub trait CountType:
    Num + AddAssign + Default + Copy + Debug + Display + Send + Sync + Hash + Ord + FromPrimitive
{
}

impl<T> CountType for T where
    T: Num
        + AddAssign
        + Default
        + Copy
        + Debug
        + Display
        + Send
        + Sync
        + Hash
        + Ord
        + FromPrimitive
{
}

/// A type that can be used as a string key.
///
/// `Borrow<str>` lets maps keyed by `K` be probed with a plain `&str`.
pub trait StringChunkType:
    for<'a> From<&'a str>
    + AsRef<str>
    + Borrow<str>
    + Debug
    + Clone
    + Send
    + Sync
    + Eq
    + Hash
    + Ord
{
}

impl<T> StringChunkType for T where
    T: for<'a> From<&'a str>
        + AsRef<str>
        + Borrow<str>
        + Debug
        + Clone
        + Send
        + Sync
        + Eq
        + Hash
        + Ord
{
}

/// A cleaned sentence: the ordered tokens that survived preprocessing.
pub type TokenizedSentence<K> = Vec<K>;

/// An integer-encoded sentence.
pub type EncodedSentence<T> = Vec<T>;

/// ``{ K -> T }`` word to rank map.
pub type WordToRankMap<K, T> = ahash::AHashMap<K, T>;

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

#[cfg(test)]
/// Check if a type is `Sync`.
pub(crate) fn check_is_sync<S: Sync>(_: S) {}
