//! Configuration validation.

use crate::schema::{CompositionDef, Config, MixtureDef, ValueDef};
use crate::units::Quantity;
use mt_phase::Species;
use mt_transport::TransportModel;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown species: {name} in {context}")]
    UnknownSpecies { name: String, context: String },

    #[error("Duplicate species: {name} in {context}")]
    DuplicateSpecies { name: String, context: String },

    #[error("Missing field: {field} ({reason})")]
    MissingField { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &Config) -> Result<(), ValidationError> {
    if config.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    if config.transport.model.parse::<TransportModel>().is_err() {
        return Err(ValidationError::InvalidValue {
            field: "transport.model".to_string(),
            value: config.transport.model.clone(),
            reason: "expected UnityLewis or MixtureAveraged".to_string(),
        });
    }

    validate_mixture(&config.mixture)
}

fn validate_mixture(mixture: &MixtureDef) -> Result<(), ValidationError> {
    validate_value("mixture.temperature", &mixture.temperature, Quantity::Temperature)?;
    validate_value("mixture.pressure", &mixture.pressure, Quantity::Pressure)?;

    match (&mixture.density, &mixture.cp_mass) {
        (Some(rho), Some(cp)) => {
            validate_value("mixture.density", rho, Quantity::Density)?;
            validate_value("mixture.cp_mass", cp, Quantity::SpecificHeat)?;
        }
        (None, None) => {}
        (Some(_), None) => {
            return Err(ValidationError::MissingField {
                field: "mixture.cp_mass".to_string(),
                reason: "a frozen density needs a frozen cp".to_string(),
            });
        }
        (None, Some(_)) => {
            return Err(ValidationError::MissingField {
                field: "mixture.density".to_string(),
                reason: "a frozen cp needs a frozen density".to_string(),
            });
        }
    }

    validate_composition(&mixture.composition)
}

fn validate_value(field: &str, value: &ValueDef, quantity: Quantity) -> Result<(), ValidationError> {
    value
        .resolve(quantity)
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidValue {
            field: field.to_string(),
            value: match value {
                ValueDef::Si(v) => v.to_string(),
                ValueDef::Text(t) => t.clone(),
            },
            reason: e.to_string(),
        })
}

fn validate_composition(comp: &CompositionDef) -> Result<(), ValidationError> {
    let fractions = match comp {
        CompositionDef::Pure { species } => {
            parse_species(species, "mixture.composition")?;
            return Ok(());
        }
        CompositionDef::Mixture { fractions } | CompositionDef::MassFractions { fractions } => {
            fractions
        }
    };

    if fractions.is_empty() {
        return Err(ValidationError::MissingField {
            field: "mixture.composition.fractions".to_string(),
            reason: "at least one species is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut sum = 0.0;
    for (name, frac) in fractions {
        let species = parse_species(name, "mixture.composition")?;
        if !seen.insert(species) {
            return Err(ValidationError::DuplicateSpecies {
                name: name.clone(),
                context: "mixture.composition".to_string(),
            });
        }
        if !frac.is_finite() || *frac < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("mixture.composition.{name}"),
                value: frac.to_string(),
                reason: "fractions must be finite and non-negative".to_string(),
            });
        }
        sum += frac;
    }

    if sum <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "mixture.composition".to_string(),
            value: sum.to_string(),
            reason: "fractions must have a positive sum".to_string(),
        });
    }

    Ok(())
}

pub(crate) fn parse_species(name: &str, context: &str) -> Result<Species, ValidationError> {
    name.parse::<Species>()
        .map_err(|_| ValidationError::UnknownSpecies {
            name: name.to_string(),
            context: context.to_string(),
        })
}
