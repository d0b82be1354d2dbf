use std::{iter::FusedIterator, slice, vec};

use crate::dict::MappingItem;

macro_rules! impl_iterator {
    ( $name:ident < $( $lt:lifetime , )? K , V > => $item:ty , | $pat:pat_param | $expr:expr ) => {
        impl<$( $lt , )? K, V> Iterator for $name<$( $lt , )? K, V> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$pat| $expr)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$( $lt , )? K, V> DoubleEndedIterator for $name<$( $lt , )? K, V> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$pat| $expr)
            }
        }

        impl<$( $lt , )? K, V> ExactSizeIterator for $name<$( $lt , )? K, V> {}

        impl<$( $lt , )? K, V> FusedIterator for $name<$( $lt , )? K, V> {}
    };
}

/// Borrowed mappings of a [`Dictlite`](crate::Dictlite), in insertion order.
///
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, MappingItem<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: slice::Iter<'a, MappingItem<K, V>>) -> Self {
        Self { inner }
    }
}

impl_iterator!(Iter<'a, K, V> => (&'a K, &'a V), |MappingItem { key, value }| (key, value));

#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, MappingItem<K, V>>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: slice::IterMut<'a, MappingItem<K, V>>) -> Self {
        Self { inner }
    }
}

impl_iterator!(IterMut<'a, K, V> => (&'a K, &'a mut V), |MappingItem { key, value }| (&*key, value));

#[derive(Clone, Debug)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl_iterator!(Keys<'a, K, V> => &'a K, |(key, _)| key);

#[derive(Clone, Debug)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    #[inline]
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl_iterator!(Values<'a, K, V> => &'a V, |(_, value)| value);

/// Owned mappings of a [`Dictlite`](crate::Dictlite), in insertion order.
///
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<MappingItem<K, V>>,
}

impl<K, V> IntoIter<K, V> {
    #[inline]
    pub(crate) fn new(inner: vec::IntoIter<MappingItem<K, V>>) -> Self {
        Self { inner }
    }
}

impl_iterator!(IntoIter<K, V> => (K, V), |item| item.into_pair());

#[cfg(test)]
mod tests {
    use crate::Dictlite;

    #[test]
    fn iterators_walk_both_ways() {
        let dict: Dictlite<_, _> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        assert_eq!(dict.iter().len(), 3);
        assert_eq!(dict.keys().rev().copied().collect::<Vec<_>>(), ["c", "b", "a"]);
        assert_eq!(dict.values().sum::<i32>(), 6);
        assert_eq!(dict.into_iter().next_back(), Some(("c", 3)));
    }
}
