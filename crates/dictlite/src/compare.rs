use std::{cmp::Ordering, ops::Deref};

/// A key comparison function.
///
/// It works like an ordered comparison function: [`Ordering::Equal`]
/// marks two keys as the same key, any other result marks them as
/// distinct keys.
///
pub trait KeyComparator<K> {
    fn compare(&self, key1: &K, key2: &K) -> Ordering;

    #[inline]
    fn is_same(&self, key1: &K, key2: &K) -> bool {
        self.compare(key1, key2).is_eq()
    }
}

impl<K, F> KeyComparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, key1: &K, key2: &K) -> Ordering {
        self(key1, key2)
    }
}

/// Compares keys by their [`Ord`] implementation.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdComparator;

impl<K> KeyComparator<K> for OrdComparator
where
    K: Ord,
{
    #[inline]
    fn compare(&self, key1: &K, key2: &K) -> Ordering {
        key1.cmp(key2)
    }
}

/// Compares pointer-like keys by the address of their target.
///
/// Two distinct allocations are distinct keys even when their contents
/// are equal.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityComparator;

impl<K> KeyComparator<K> for IdentityComparator
where
    K: Deref,
{
    #[inline]
    fn compare(&self, key1: &K, key2: &K) -> Ordering {
        let addr1 = (&**key1 as *const K::Target).cast::<()>();
        let addr2 = (&**key2 as *const K::Target).cast::<()>();
        addr1.cmp(&addr2)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn ord_comparator_follows_ord() {
        assert_eq!(OrdComparator.compare(&1, &2), Ordering::Less);
        assert!(OrdComparator.is_same(&"a", &"a"));
    }

    #[test]
    fn identity_comparator_ignores_contents() {
        let a = Rc::new(String::from("key"));
        let b = Rc::new(String::from("key"));

        assert!(IdentityComparator.is_same(&a, &Rc::clone(&a)));
        assert!(!IdentityComparator.is_same(&a, &b));
    }

    #[test]
    fn closures_are_comparators() {
        let last_digit = |a: &i32, b: &i32| (a % 10).cmp(&(b % 10));
        assert!(last_digit.is_same(&13, &23));
        assert!(!last_digit.is_same(&13, &24));
    }
}
