//! Shared primitives for workspace crates.
//!
//! ```rust
//! use pcommon::{Props, Registry};
//!
//! let mut registry = Registry::new();
//! registry.insert("alpha".to_string(), 1_u32);
//! assert_eq!(registry.get("alpha"), Some(&1));
//!
//! let props = Props::new().with("workspace", "/tmp/project");
//! assert_eq!(props.get_str("workspace"), Some("/tmp/project"));
//! ```

pub mod registry {
    //! Insertion-ordered registry map used by schemas and tool registries.
    //!
    //! ```rust
    //! use pcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("beta".to_string(), 2_u32);
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! let keys: Vec<&str> = registry.keys().map(String::as_str).collect();
    //! assert_eq!(keys, ["beta", "alpha"]);
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::fmt;
    use std::hash::Hash;
    use std::marker::PhantomData;

    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};

    /// Map that iterates in insertion order. Re-inserting an existing key
    /// replaces the value and keeps the original position.
    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        order: Vec<K>,
        items: HashMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                order: Vec::new(),
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash + Clone,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            let previous = self.items.insert(key.clone(), value);
            if previous.is_none() {
                self.order.push(key);
            }
            previous
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            let removed = self.items.remove(key)?;
            self.order
                .retain(|existing| <K as Borrow<Q>>::borrow(existing) != key);
            Some(removed)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.order.iter()
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.order.iter().filter_map(|key| self.items.get(key))
        }

        pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
            self.order
                .iter()
                .filter_map(|key| self.items.get(key).map(|value| (key, value)))
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }

    impl<K, V> PartialEq for Registry<K, V>
    where
        K: Eq + Hash,
        V: PartialEq,
    {
        fn eq(&self, other: &Self) -> bool {
            self.order == other.order && self.items == other.items
        }
    }

    impl<K, V> FromIterator<(K, V)> for Registry<K, V>
    where
        K: Eq + Hash + Clone,
    {
        fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
            let mut registry = Self::new();
            for (key, value) in iter {
                registry.insert(key, value);
            }
            registry
        }
    }

    impl<K, V> Serialize for Registry<K, V>
    where
        K: Serialize + Eq + Hash + Clone,
        V: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    struct RegistryVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for RegistryVisitor<K, V>
    where
        K: Deserialize<'de> + Eq + Hash + Clone,
        V: Deserialize<'de>,
    {
        type Value = Registry<K, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut registry = Registry::new();
            while let Some((key, value)) = access.next_entry()? {
                registry.insert(key, value);
            }
            Ok(registry)
        }
    }

    impl<'de, K, V> Deserialize<'de> for Registry<K, V>
    where
        K: Deserialize<'de> + Eq + Hash + Clone,
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(RegistryVisitor(PhantomData))
        }
    }
}

pub mod props {
    //! Opaque property bag carried by tool boxes.
    //!
    //! ```rust
    //! use pcommon::Props;
    //!
    //! let props = Props::new().with("retries", 3).with("name", "indexer");
    //! assert_eq!(props.get("retries"), Some(&serde_json::json!(3)));
    //! assert_eq!(props.len(), 2);
    //! ```

    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::Registry;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Props(Registry<String, Value>);

    impl Props {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
            self.insert(key, value);
            self
        }

        pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
            self.0.insert(key.into(), value.into())
        }

        pub fn get(&self, key: &str) -> Option<&Value> {
            self.0.get(key)
        }

        pub fn get_str(&self, key: &str) -> Option<&str> {
            self.get(key).and_then(Value::as_str)
        }

        pub fn contains_key(&self, key: &str) -> bool {
            self.0.contains_key(key)
        }

        pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
            self.0.iter()
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }

    impl<K, V> FromIterator<(K, V)> for Props
    where
        K: Into<String>,
        V: Into<Value>,
    {
        fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
            Self(
                iter.into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            )
        }
    }
}

pub use props::Props;
pub use registry::Registry;
