use std::{fmt, marker::PhantomData};

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{compare::KeyComparator, dict::Dictlite};

impl<K, V, C> Serialize for Dictlite<K, V, C>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct DictliteVisitor<K, V, C> {
    _marker: PhantomData<fn() -> Dictlite<K, V, C>>,
}

impl<'de, K, V, C> Visitor<'de> for DictliteVisitor<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Default + KeyComparator<K>,
{
    type Value = Dictlite<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dict = Dictlite::default();
        while let Some((key, value)) = access.next_entry()? {
            dict.insert(key, value);
        }
        Ok(dict)
    }
}

impl<'de, K, V, C> Deserialize<'de> for Dictlite<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Default + KeyComparator<K>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DictliteVisitor {
            _marker: PhantomData,
        })
    }
}
