use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Raw, unparsed form values keyed by [`InputField::name`](super::InputField).
///
/// Values are kept exactly as typed; interpretation (including the
/// parse-or-default rule for numbers) happens in the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputs(BTreeMap<String, String>);

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`RawInputs::insert`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every entry of `other` over this map.
    pub fn merge(
        &mut self,
        other: RawInputs,
    ) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawInputs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for RawInputs {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for RawInputs {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn insert_replaces_existing_value() {
        let mut inputs = RawInputs::new().with("rate", "5");
        inputs.insert("rate", "6.5");

        assert_eq!(inputs.get("rate"), Some("6.5"));
        assert_eq!(inputs.len(), 1);
    }

    #[test]
    fn merge_overrides_left_hand_side() {
        let mut defaults = RawInputs::from_iter([("percent", "20"), ("people", "1")]);
        defaults.merge(RawInputs::from_iter([("people", "4")]));

        assert_eq!(defaults.get("percent"), Some("20"));
        assert_eq!(defaults.get("people"), Some("4"));
    }

    #[test]
    fn converts_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("bill".to_string(), "100".to_string());

        let inputs = RawInputs::from(map);

        assert_eq!(inputs.get("bill"), Some("100"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let inputs = RawInputs::from_iter([("a", "1"), ("b", "x")]);

        let json = serde_json::to_string(&inputs).unwrap();

        assert_eq!(json, r#"{"a":"1","b":"x"}"#);
    }
}
