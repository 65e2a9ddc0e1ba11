use crate::value::Value;
use indexmap::IndexMap;

/// Prefix stripped from injection paths, so that paths written against a
/// whole request body (`variables.input.file`) address the variables map.
const VARIABLES_PATH_PREFIX: &str = "variables.";

/// Named variable values supplied alongside a request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables(IndexMap<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets a top-level variable, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Assigns `value` at a dot-separated path, creating intermediate
    /// containers as needed.
    ///
    /// A leading `variables.` segment is stripped. After the variable name, a
    /// segment that parses as an index addresses a list, which is padded with
    /// `null` up to that index. Any other segment is an object key. A slot
    /// holding the wrong kind of container is replaced by a fresh one.
    ///
    /// ```
    /// use minigql_core::Value;
    /// use minigql_core::Variables;
    ///
    /// let mut vars = Variables::new();
    /// vars.insert_at_path("variables.input.file", Value::upload("a.txt", vec![1]));
    /// vars.insert_at_path("variables.files.1", Value::upload("b.txt", vec![2]));
    ///
    /// let file = vars.get("input").and_then(|input| input.get("file"));
    /// assert_eq!(
    ///     file.and_then(|file| file.get("filename")),
    ///     Some(&Value::from("a.txt")),
    /// );
    /// let files = vars.get("files").and_then(Value::as_list);
    /// assert_eq!(files.map(|files| files[0].is_null()), Some(true));
    /// ```
    pub fn insert_at_path(&mut self, path: &str, value: impl Into<Value>) {
        let path = path.strip_prefix(VARIABLES_PATH_PREFIX).unwrap_or(path);
        let segments: Vec<&str> = path.split('.').collect();
        let Some((name, rest)) = segments.split_first() else {
            return;
        };
        let slot = self.0.entry(name.to_string()).or_insert(Value::Null);
        assign_at_path(slot, rest, value.into());
    }

    /// Builds variables from a JSON object. Anything other than an object
    /// (including `null`) yields no variables.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(name, value)| (name, Value::from(value)))
                .collect(),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

fn assign_at_path(slot: &mut Value, segments: &[&str], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *slot = value;
        return;
    };

    let child = match segment.parse::<usize>() {
        Ok(index) => {
            if !matches!(slot, Value::List(_)) {
                *slot = Value::List(Vec::new());
            }
            let Value::List(items) = slot else {
                return;
            };
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        },
        Err(_) => {
            if !matches!(slot, Value::Object(_)) {
                *slot = Value::Object(IndexMap::new());
            }
            let Value::Object(map) = slot else {
                return;
            };
            map.entry(segment.to_string()).or_insert(Value::Null)
        },
    };
    assign_at_path(child, rest, value);
}
