//! Shallow equality over property bags
//!
//! This is the only predicate the graph understands. Two bags are shallow-equal
//! when they have the same number of keys and every key of the left bag maps to
//! an identical primitive value in the right bag. Nothing is compared
//! structurally: a nested array or map is never equal to anything, the same way
//! two separately built composite values are never the same object.

use super::property::{PropertyMap, PropertyValue};

/// Key-count-and-value comparison of two flat property bags
///
/// Only the receiver's keys are looked up in `other`, so the check is
/// asymmetric in principle. With equal key counts and the closed key sets of
/// typed records it behaves symmetrically in practice.
pub trait ShallowEq {
    fn shallow_eq(&self, other: &Self) -> bool;
}

impl PropertyValue {
    /// Identity comparison for one value
    ///
    /// Primitives compare by value. Composite values are distinct allocations
    /// and never match.
    pub fn is_identical(&self, other: &PropertyValue) -> bool {
        if self.is_composite() || other.is_composite() {
            return false;
        }
        match (self, other) {
            (PropertyValue::String(a), PropertyValue::String(b)) => a == b,
            (PropertyValue::Integer(a), PropertyValue::Integer(b)) => a == b,
            (PropertyValue::Float(a), PropertyValue::Float(b)) => a == b,
            (PropertyValue::Boolean(a), PropertyValue::Boolean(b)) => a == b,
            (PropertyValue::Null, PropertyValue::Null) => true,
            _ => false,
        }
    }
}

impl ShallowEq for PropertyMap {
    fn shallow_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(key, value)| {
            other
                .get(key)
                .is_some_and(|candidate| value.is_identical(candidate))
        })
    }
}

impl ShallowEq for () {
    fn shallow_eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Apply an optional filter; an absent filter accepts everything
///
/// The candidate's keys are the ones looked up in the filter.
pub fn accepts<P: ShallowEq + ?Sized>(filter: Option<&P>, candidate: &P) -> bool {
    filter.map_or(true, |filter| candidate.shallow_eq(filter))
}
