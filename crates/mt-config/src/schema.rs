//! Configuration document schema.

use crate::units::{Quantity, UnitError, check_range, parse_quantity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: u32,
    pub name: String,
    pub transport: TransportDef,
    pub mixture: MixtureDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportDef {
    /// Closure label, e.g. `UnityLewis` or `MixtureAveraged`.
    #[serde(default)]
    pub model: String,
    /// Version 0 spelling of `model`; cleared by migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closure: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixtureDef {
    pub temperature: ValueDef,
    pub pressure: ValueDef,
    pub composition: CompositionDef,
    /// Frozen density; given together with `cp_mass` it replaces the
    /// ideal-gas evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<ValueDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp_mass: Option<ValueDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CompositionDef {
    Pure { species: String },
    Mixture { fractions: Vec<(String, f64)> },
    MassFractions { fractions: Vec<(String, f64)> },
}

/// A number in SI units or text with a unit tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValueDef {
    Si(f64),
    Text(String),
}

impl ValueDef {
    /// Canonical SI value.
    pub fn resolve(&self, quantity: Quantity) -> Result<f64, UnitError> {
        match self {
            ValueDef::Si(v) => check_range(*v, quantity),
            ValueDef::Text(text) => parse_quantity(text, quantity),
        }
    }
}

impl From<f64> for ValueDef {
    fn from(v: f64) -> Self {
        ValueDef::Si(v)
    }
}

impl From<&str> for ValueDef {
    fn from(text: &str) -> Self {
        ValueDef::Text(text.to_string())
    }
}
