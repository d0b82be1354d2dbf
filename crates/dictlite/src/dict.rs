use std::{fmt, mem};

use crate::{
    compare::{KeyComparator, OrdComparator},
    iter::{IntoIter, Iter, IterMut, Keys, Values},
};

/// A single mapping stored in a [`Dictlite`].
///
/// Removal hands the stored key and value back in this container, so
/// the returned key may be a different object from the one used for
/// the lookup.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MappingItem<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> MappingItem<K, V> {
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn into_pair(self) -> (K, V) {
        let Self { key, value } = self;
        (key, value)
    }
}

impl<K, V> From<(K, V)> for MappingItem<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<MappingItem<K, V>> for (K, V) {
    #[inline]
    fn from(item: MappingItem<K, V>) -> Self {
        item.into_pair()
    }
}

/// A lightweight dictionary for small, flexible mappings.
///
/// Mappings live in a single list in insertion order, so lookups are
/// linear. Key identity is decided by the comparator `C`.
///
#[derive(Clone)]
pub struct Dictlite<K, V, C = OrdComparator> {
    items: Vec<MappingItem<K, V>>,
    compare: C,
}

impl<K, V> Dictlite<K, V> {
    #[inline]
    pub const fn new() -> Self {
        Self::with_comparator(OrdComparator)
    }
}

impl<K, V, C> Dictlite<K, V, C> {
    #[inline]
    pub const fn with_comparator(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.items.iter())
    }

    /// Iterates over the mappings with mutable access to the values.
    ///
    /// Keys stay immutable so that no two stored keys can become equal.
    ///
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.items.iter_mut())
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

impl<K, V, C> Dictlite<K, V, C> {
    fn try_position<E, F>(&self, mut eq: F) -> Result<Option<usize>, E>
    where
        F: FnMut(&K) -> Result<bool, E>,
    {
        for (index, item) in self.items.iter().enumerate() {
            if eq(&item.key)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Like [`Dictlite::contains_key`], but the stored key is matched
    /// by a fallible predicate instead of the comparator.
    ///
    pub fn try_contains_with<E, F>(&self, eq: F) -> Result<bool, E>
    where
        F: FnMut(&K) -> Result<bool, E>,
    {
        self.try_position(eq).map(|index| index.is_some())
    }

    pub fn try_get_with<E, F>(&self, eq: F) -> Result<Option<&V>, E>
    where
        F: FnMut(&K) -> Result<bool, E>,
    {
        Ok(self
            .try_position(eq)?
            .map(|index| &self.items[index].value))
    }

    /// Like [`Dictlite::insert`], but the stored key is matched by a
    /// fallible predicate. On error nothing is inserted.
    ///
    pub fn try_insert_with<E, F>(&mut self, key: K, value: V, eq: F) -> Result<Option<V>, E>
    where
        F: FnMut(&K) -> Result<bool, E>,
    {
        match self.try_position(eq)? {
            Some(index) => Ok(Some(self.replace_at(index, value))),
            None => {
                self.push(key, value);
                Ok(None)
            }
        }
    }

    pub fn try_remove_with<E, F>(&mut self, eq: F) -> Result<Option<MappingItem<K, V>>, E>
    where
        F: FnMut(&K) -> Result<bool, E>,
    {
        Ok(self
            .try_position(eq)?
            .map(|index| self.items.remove(index)))
    }

    #[inline]
    fn push(&mut self, key: K, value: V) {
        self.items.push(MappingItem::new(key, value))
    }

    #[inline]
    fn replace_at(&mut self, index: usize, value: V) -> V {
        mem::replace(&mut self.items[index].value, value)
    }
}

impl<K, V, C> Dictlite<K, V, C>
where
    C: KeyComparator<K>,
{
    fn position(&self, key: &K) -> Option<usize> {
        self.items
            .iter()
            .position(|item| self.compare.is_same(&item.key, key))
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|index| &self.items[index].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.position(key)
            .map(move |index| &mut self.items[index].value)
    }

    /// Sets the value associated with a key.
    ///
    /// A new key is appended after the existing mappings. For a known
    /// key only the value is swapped: the stored key is kept, the given
    /// key is dropped and the previous value is returned.
    ///
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(self.replace_at(index, value)),
            None => {
                self.push(key, value);
                None
            }
        }
    }

    /// Removes the mapping for a key, returning the stored key and value.
    ///
    pub fn remove(&mut self, key: &K) -> Option<MappingItem<K, V>> {
        self.position(key).map(|index| self.items.remove(index))
    }

    /// Adds clones of the mappings in `other`, in `other`'s order.
    /// Existing keys take `other`'s values.
    ///
    pub fn extend_from<C2>(&mut self, other: &Dictlite<K, V, C2>)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in other {
            self.insert(key.clone(), value.clone());
        }
    }

    #[inline]
    pub fn merge<C2>(&mut self, other: Dictlite<K, V, C2>) {
        self.extend(other)
    }
}

impl<K, V, C> Default for Dictlite<K, V, C>
where
    C: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> PartialEq for Dictlite<K, V, C>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K, V, C> Eq for Dictlite<K, V, C>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V, C> fmt::Debug for Dictlite<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> fmt::Display for Dictlite<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dictlite[{}] {{", self.len())?;
        for (key, value) in self {
            writeln!(f, "  {key:?}: {value:?},")?;
        }
        write!(f, "}}")
    }
}

impl<K, V, C> Extend<(K, V)> for Dictlite<K, V, C>
where
    C: KeyComparator<K>,
{
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Dictlite<K, V, C>
where
    C: Default + KeyComparator<K>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut dict = Self::default();
        dict.extend(iter);
        dict
    }
}

impl<K, V, C> IntoIterator for Dictlite<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items.into_iter())
    }
}

impl<'a, K, V, C> IntoIterator for &'a Dictlite<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut Dictlite<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::{cmp::Ordering, convert::Infallible, rc::Rc};

    use crate::IdentityComparator;

    use super::*;

    fn cities() -> Dictlite<i32, &'static str> {
        [(7, "Rome"), (92, "Calcutta"), (435, "Sao Paulo")]
            .into_iter()
            .collect()
    }

    #[test]
    fn empty_dict_has_nothing() {
        let dict: Dictlite<String, i32> = Dictlite::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert!(!dict.contains_key(&"a".to_string()));
        assert_eq!(dict.get(&"a".to_string()), None);
        assert_eq!(dict.iter().next(), None);
    }

    #[test]
    fn insert_appends_in_order() {
        let dict = cities();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [7, 92, 435]);
        assert_eq!(dict.get(&92), Some(&"Calcutta"));
        assert!(dict.contains_key(&435));
        assert!(!dict.contains_key(&39912));
    }

    #[test]
    fn insert_replaces_value_in_place() {
        let mut dict = cities();
        assert_eq!(dict.insert(7, "Beijing"), Some("Rome"));
        assert_eq!(dict.len(), 3);
        assert_eq!(
            dict.iter().collect::<Vec<_>>(),
            [(&7, &"Beijing"), (&92, &"Calcutta"), (&435, &"Sao Paulo")],
        );
    }

    #[test]
    fn insert_keeps_stored_key() {
        let by_lowercase = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());
        let mut dict = Dictlite::with_comparator(by_lowercase);
        dict.insert("Warfarin".to_string(), 1);
        assert_eq!(dict.insert("WARFARIN".to_string(), 2), Some(1));

        let item = dict.remove(&"warfarin".to_string()).unwrap();
        assert_eq!(item, MappingItem::new("Warfarin".to_string(), 2));
    }

    #[test]
    fn remove_first_middle_last_and_only() {
        let mut dict = cities();
        assert_eq!(dict.remove(&92).map(MappingItem::into_pair), Some((92, "Calcutta")));
        assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [7, 435]);

        assert_eq!(dict.remove(&7).map(|item| item.value), Some("Rome"));
        assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [435]);

        dict.insert(12252, "Tbilisi");
        assert_eq!(dict.remove(&12252).map(|item| item.key), Some(12252));
        assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [435]);

        assert!(dict.remove(&435).is_some());
        assert!(dict.is_empty());

        // insertion still appends after the list was emptied
        dict.insert(1, "a");
        dict.insert(2, "b");
        assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn remove_missing_key_changes_nothing() {
        let mut dict = cities();
        assert_eq!(dict.remove(&1), None);
        assert_eq!(dict, cities());
    }

    #[test]
    fn extend_from_overwrites_and_appends() {
        let mut songs: Dictlite<&str, &str> = [
            ("song: 1901", "album: Wolfgang Amadeus Phoenix"),
            ("album: Wolfgang Amadeus Phoenix", "band: Phoenix"),
        ]
        .into_iter()
        .collect();
        let other: Dictlite<&str, &str> = [
            ("Warfarin", "Bleeding"),
            ("album: Wolfgang Amadeus Phoenix", "band: Daft Punk"),
        ]
        .into_iter()
        .collect();

        songs.extend_from(&other);

        assert_eq!(other.len(), 2);
        assert_eq!(
            songs.iter().collect::<Vec<_>>(),
            [
                (&"song: 1901", &"album: Wolfgang Amadeus Phoenix"),
                (&"album: Wolfgang Amadeus Phoenix", &"band: Daft Punk"),
                (&"Warfarin", &"Bleeding"),
            ],
        );
    }

    #[test]
    fn merge_consumes_other() {
        let mut dict = cities();
        let mut other = Dictlite::new();
        other.insert(435, "Istanbul");
        other.insert(9338, "Istanbul");

        dict.merge(other);
        assert_eq!(dict.values().copied().collect::<Vec<_>>(), [
            "Rome", "Calcutta", "Istanbul", "Istanbul"
        ]);
    }

    #[test]
    fn iter_mut_updates_values() {
        let mut dict = cities();
        for (_, value) in &mut dict {
            *value = "None";
        }
        *dict.get_mut(&7).unwrap() = "Rome";
        assert_eq!(dict.values().copied().collect::<Vec<_>>(), ["Rome", "None", "None"]);
    }

    #[test]
    fn custom_comparator_decides_identity() {
        let numeric = |a: &Box<i32>, b: &Box<i32>| -> Ordering { a.cmp(b) };
        let mut dict = Dictlite::with_comparator(numeric);
        dict.insert(Box::new(7), "Rome");
        assert_eq!(dict.get(&Box::new(7)), Some(&"Rome"));
    }

    #[test]
    fn identity_comparator_keeps_equal_contents_apart() {
        let a = Rc::new("key");
        let b = Rc::new("key");

        let mut dict = Dictlite::with_comparator(IdentityComparator);
        dict.insert(Rc::clone(&a), 1);
        dict.insert(Rc::clone(&b), 2);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(&a), Some(&1));
        assert_eq!(dict.get(&Rc::new("key")), None);
    }

    #[test]
    fn try_family_matches_by_predicate() {
        let mut dict = cities();

        assert_eq!(dict.try_contains_with(|k| Ok::<_, Infallible>(*k == 92)), Ok(true));
        assert_eq!(
            dict.try_get_with(|k| Ok::<_, Infallible>(*k == 435)),
            Ok(Some(&"Sao Paulo")),
        );
        assert_eq!(
            dict.try_insert_with(9338, "Istanbul", |k| Ok::<_, Infallible>(*k == 9338)),
            Ok(None),
        );
        assert_eq!(
            dict.try_insert_with(1, "Lima", |k| Ok::<_, Infallible>(*k == 9338)),
            Ok(Some("Istanbul")),
        );
        assert_eq!(
            dict.try_remove_with(|k| Ok::<_, Infallible>(*k == 7))
                .map(|item| item.map(MappingItem::into_pair)),
            Ok(Some((7, "Rome"))),
        );
        assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [92, 435, 9338]);
    }

    #[test]
    fn try_family_aborts_on_error() {
        let mut dict = cities();
        let failing = |k: &i32| if *k == 92 { Err("boom") } else { Ok(false) };

        assert_eq!(dict.try_insert_with(1, "Lima", failing), Err("boom"));
        assert_eq!(dict.try_remove_with(failing).map(|_| ()), Err("boom"));
        assert_eq!(dict, cities());
    }

    #[test]
    fn display_matches_print_form() {
        let mut dict: Dictlite<&str, &str> = Dictlite::new();
        assert_eq!(dict.to_string(), "dictlite[0] {\n}");

        dict.insert("Warfarin", "Bleeding");
        dict.insert("Rofecoxib", "None");
        assert_eq!(
            dict.to_string(),
            "dictlite[2] {\n  \"Warfarin\": \"Bleeding\",\n  \"Rofecoxib\": \"None\",\n}",
        );
        assert_eq!(format!("{dict:?}"), r#"{"Warfarin": "Bleeding", "Rofecoxib": "None"}"#);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward: Dictlite<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        let backward: Dictlite<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
        assert_ne!(forward, backward);
        assert_eq!(forward.clone(), forward);
    }
}
