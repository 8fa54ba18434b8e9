//! Key-value payloads attached to environment steps.
//!
//! A [`Record`] is a flexible container for named values of various types.
//! Environments use it to report per-step auxiliary metrics alongside the
//! reward; the rollout evaluator extracts the metrics it needs with the
//! typed getters.

use crate::error::EvalError;
use chrono::prelude::{DateTime, Local};
use std::{
    collections::{
        hash_map::{Iter, Keys},
        HashMap,
    },
    convert::Into,
};

/// Represents possible types of values in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A 2-dimensional array with shape information.
    Array2(Vec<f32>, [usize; 2]),

    /// A text value.
    String(String),
}

/// A container of key-value pairs of [`RecordValue`]s.
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// On duplicate keys the value of `record` wins.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges another record into this one in place.
    pub fn merge_inplace(&mut self, record: Record) {
        for (k, v) in record.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Gets a scalar value from the record.
    ///
    /// Fails if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, EvalError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Scalar(v) => Ok(*v),
                _ => Err(EvalError::RecordValueType("Scalar".to_string())),
            }
        } else {
            Err(EvalError::RecordKey(k.to_string()))
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, EvalError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Array1(v) => Ok(v.clone()),
                _ => Err(EvalError::RecordValueType("Array1".to_string())),
            }
        } else {
            Err(EvalError::RecordKey(k.to_string()))
        }
    }

    /// Gets a 2-dimensional array and its shape from the record.
    pub fn get_array2(&self, k: &str) -> Result<(Vec<f32>, [usize; 2]), EvalError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Array2(v, s) => Ok((v.clone(), *s)),
                _ => Err(EvalError::RecordValueType("Array2".to_string())),
            }
        } else {
            Err(EvalError::RecordKey(k.to_string()))
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, EvalError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::String(s) => Ok(s.clone()),
                _ => Err(EvalError::RecordValueType("String".to_string())),
            }
        } else {
            Err(EvalError::RecordKey(k.to_string()))
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordValue};
    use crate::error::EvalError;

    #[test]
    fn insert_and_get_scalar() {
        let mut record = Record::empty();
        record.insert("EPI", RecordValue::Scalar(1.5));
        assert_eq!(record.get_scalar("EPI").unwrap(), 1.5);
    }

    #[test]
    fn missing_key_is_a_key_error() {
        let record = Record::empty();
        match record.get_scalar("revenue") {
            Err(EvalError::RecordKey(k)) => assert_eq!(k, "revenue"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn wrong_type_is_a_type_error() {
        let record = Record::from_slice(&[("obs", RecordValue::Array1(vec![1.0, 2.0]))]);
        assert!(matches!(
            record.get_scalar("obs"),
            Err(EvalError::RecordValueType(_))
        ));
    }

    #[test]
    fn merge_prefers_the_second_record() {
        let a = Record::from_scalar("x", 1.0);
        let b = Record::from_scalar("x", 2.0);
        assert_eq!(a.merge(b).get_scalar("x").unwrap(), 2.0);
    }
}
