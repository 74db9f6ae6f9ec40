//! Property bags for nodes and edges
//!
//! The store is generic over its node and edge payloads. Consumers that know
//! their shape use a closed record (the prefix index does); everything else can
//! use the dynamic [`PropertyMap`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single dynamic property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// True for arrays and maps, which shallow equality never matches
    pub fn is_composite(&self) -> bool {
        matches!(self, PropertyValue::Array(_) | PropertyValue::Map(_))
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<char> for PropertyValue {
    fn from(c: char) -> Self {
        PropertyValue::String(c.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(items)
    }
}

/// Dynamic property bag for nodes and edges
pub type PropertyMap = HashMap<String, PropertyValue>;

/// Build a [`PropertyMap`] from `key => value` pairs
///
/// ```rust
/// use graphtrie::props;
///
/// let weight = props! { "weight" => 5i64 };
/// assert_eq!(weight.len(), 1);
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::graph::PropertyMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::graph::PropertyMap::new();
        $( map.insert(($key).to_string(), $crate::graph::PropertyValue::from($value)); )+
        map
    }};
}

/// Partial, in-place update of a node payload
///
/// Keys present in the patch overwrite or extend the payload; nothing is ever
/// removed. An empty patch (`Patch::default()`) leaves the payload unchanged.
pub trait MergeProperties {
    type Patch: Default;

    fn merge(&mut self, patch: Self::Patch);
}

impl MergeProperties for PropertyMap {
    type Patch = PropertyMap;

    fn merge(&mut self, patch: PropertyMap) {
        self.extend(patch);
    }
}
