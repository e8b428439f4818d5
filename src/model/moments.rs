// src/model/moments.rs

use crate::error::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Coordinate axis a collinear moment is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinAxis {
    X,
    Y,
    #[default]
    Z,
}

impl SpinAxis {
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(SpinAxis::X),
            1 => Ok(SpinAxis::Y),
            2 => Ok(SpinAxis::Z),
            other => Err(Error::config(format!(
                "spin axis must be 0 (x), 1 (y) or 2 (z), got {}",
                other
            ))),
        }
    }

    pub fn index(self) -> usize {
        match self {
            SpinAxis::X => 0,
            SpinAxis::Y => 1,
            SpinAxis::Z => 2,
        }
    }
}

impl fmt::Display for SpinAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinAxis::X => write!(f, "x"),
            SpinAxis::Y => write!(f, "y"),
            SpinAxis::Z => write!(f, "z"),
        }
    }
}

/// Which container the decoder hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputShape {
    #[default]
    Array,
    Mapping,
}

impl FromStr for OutputShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "array" => Ok(OutputShape::Array),
            // "dict" is what older scripts pass
            "mapping" | "dict" => Ok(OutputShape::Mapping),
            other => Err(Error::config(format!(
                "unknown output shape '{}', expected 'array' or 'mapping'",
                other
            ))),
        }
    }
}

/// Dense `natoms x 3` table of per-atom vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentArray {
    rows: Vec<[f64; 3]>,
}

impl MomentArray {
    pub fn new(rows: Vec<[f64; 3]>) -> Self {
        Self { rows }
    }

    pub fn zeros(natoms: usize) -> Self {
        Self {
            rows: vec![[0.0; 3]; natoms],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [[f64; 3]] {
        &mut self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64; 3]> {
        self.rows.iter()
    }

    /// Returns a copy with every component multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|v| [v[0] * factor, v[1] * factor, v[2] * factor])
                .collect(),
        }
    }

    pub fn to_mapping(&self) -> MomentMap {
        MomentMap {
            entries: self
                .rows
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), *v))
                .collect(),
        }
    }
}

impl From<Vec<[f64; 3]>> for MomentArray {
    fn from(rows: Vec<[f64; 3]>) -> Self {
        Self::new(rows)
    }
}

impl std::ops::Index<usize> for MomentArray {
    type Output = [f64; 3];

    fn index(&self, i: usize) -> &[f64; 3] {
        &self.rows[i]
    }
}

/// Atom index (as a string) -> vector, kept in atom order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentMap {
    entries: Vec<(String, [f64; 3])>,
}

impl MomentMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[f64; 3]> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64; 3])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// Written by hand so the JSON object keeps atom order ("2" before "10").
impl Serialize for MomentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Decoder output, in the shape the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Moments {
    Array(MomentArray),
    Mapping(MomentMap),
}

impl Moments {
    pub fn from_array(array: MomentArray, shape: OutputShape) -> Self {
        match shape {
            OutputShape::Array => Moments::Array(array),
            OutputShape::Mapping => Moments::Mapping(array.to_mapping()),
        }
    }

    pub fn into_array(self) -> Option<MomentArray> {
        match self {
            Moments::Array(a) => Some(a),
            Moments::Mapping(_) => None,
        }
    }

    pub fn into_mapping(self) -> Option<MomentMap> {
        match self {
            Moments::Mapping(m) => Some(m),
            Moments::Array(_) => None,
        }
    }
}
