//! Unit-aware numeric input.
//!
//! Configuration values may be given as bare numbers (SI) or as text with a
//! unit tag (`"300 K"`, `"1 atm"`, `"25 C"`). Everything is converted to SI
//! before it reaches a phase or transport model.

use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Density (canonical: kg/m^3)
    Density,
    /// Mass-specific heat capacity (canonical: J/(kg·K))
    SpecificHeat,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Density => write!(f, "Density"),
            Self::SpecificHeat => write!(f, "Specific Heat"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },

    /// Unit not allowed for this quantity (e.g., plain "psi")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: &'static str },

    /// Value out of physical range (e.g., negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse a quantity value from text, returning canonical SI.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Density => parse_density(trimmed),
        Quantity::SpecificHeat => parse_specific_heat(trimmed),
    }
}

/// Range checks shared by text and bare-number inputs.
pub fn check_range(value: f64, quantity: Quantity) -> Result<f64, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::OutOfRange {
            value,
            reason: "value must be finite",
        });
    }
    let reason = match quantity {
        Quantity::Temperature => "Absolute temperature must be > 0 K",
        Quantity::Pressure => "Absolute pressure must be > 0 Pa",
        Quantity::Density => "Density must be positive",
        Quantity::SpecificHeat => "Specific heat must be positive",
    };
    if value <= 0.0 {
        return Err(UnitError::OutOfRange { value, reason });
    }
    Ok(value)
}

fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    check_range(kelvin, Quantity::Temperature)
}

fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "mbar" | "millibar" => value * 100.0,
        "atm" => value * 101_325.0,
        "torr" => value * 133.322,
        "psia" => value * 6_894.76,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit,
                reason: "Use 'psia'; gauge pressures are not accepted here",
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    check_range(pa, Quantity::Pressure)
}

fn parse_density(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kg_m3 = match unit.to_lowercase().as_str() {
        "" | "kg/m^3" | "kg/m³" | "kg/m3" => value,
        "g/cm^3" | "g/cm³" | "g/cm3" => value * 1e3,
        "g/l" => value,
        "lbm/ft^3" | "lbm/ft3" => value * 16.018_46,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Density,
            });
        }
    };

    check_range(kg_m3, Quantity::Density)
}

fn parse_specific_heat(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let j_kg_k = match unit.to_lowercase().as_str() {
        "" | "j/(kg·k)" | "j/(kg k)" | "j/(kg*k)" | "j/kg/k" => value,
        "kj/(kg·k)" | "kj/(kg k)" | "kj/(kg*k)" | "kj/kg/k" => value * 1e3,
        "btu/(lbm·r)" | "btu/(lbm r)" | "btu/(lbm*r)" => value * 4_186.8,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::SpecificHeat,
            });
        }
    };

    check_range(j_kg_k, Quantity::SpecificHeat)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "25C" -> (25.0, "C")
/// - "1 atm" -> (1.0, "atm")
/// - "1.5e5" -> (150000.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Longest numeric prefix; lets "1e5" parse while "1 atm" stops at the space.
    let split_idx = (0..=trimmed.len())
        .rev()
        .filter(|&i| trimmed.is_char_boundary(i))
        .find(|&i| trimmed[..i].trim().parse::<f64>().is_ok())
        .ok_or_else(|| {
            UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
        })?;

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}
