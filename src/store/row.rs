use serde::Serialize;
use std::collections::BTreeMap;

/// A single scalar cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// A generic `column name -> scalar` projection of one stored row.
///
/// Reads are lenient: a missing or NULL column reads as zero or the empty
/// string, and numeric cells convert between integer and real.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<Value>) {
        self.0.insert(column.to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.0.remove(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_i64(&self, column: &str) -> i64 {
        match self.0.get(column) {
            Some(Value::Integer(v)) => *v,
            Some(Value::Real(v)) => *v as i64,
            Some(Value::Text(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Null) | None => 0,
        }
    }

    /// Out-of-range values read as zero.
    pub fn get_i32(&self, column: &str) -> i32 {
        i32::try_from(self.get_i64(column)).unwrap_or(0)
    }

    /// Out-of-range and negative values read as zero.
    pub fn get_u32(&self, column: &str) -> u32 {
        u32::try_from(self.get_i64(column)).unwrap_or(0)
    }

    pub fn get_f64(&self, column: &str) -> f64 {
        match self.0.get(column) {
            Some(Value::Integer(v)) => *v as f64,
            Some(Value::Real(v)) => *v,
            Some(Value::Text(s)) => s.trim().parse().unwrap_or(0.0),
            Some(Value::Null) | None => 0.0,
        }
    }

    pub fn get_f32(&self, column: &str) -> f32 {
        self.get_f64(column) as f32
    }

    pub fn get_string(&self, column: &str) -> String {
        match self.0.get(column) {
            Some(Value::Text(s)) => s.clone(),
            Some(Value::Integer(v)) => v.to_string(),
            Some(Value::Real(v)) => v.to_string(),
            Some(Value::Null) | None => String::new(),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}
