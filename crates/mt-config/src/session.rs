//! Phase + transport closure assembled from a configuration.

use crate::schema::{CompositionDef, Config, MixtureDef};
use crate::units::Quantity;
use crate::validate::parse_species;
use crate::{ConfigResult, validate_config};
use mt_core::units::{j_kg_k, k, kg_m3, pa};
use mt_phase::{Composition, FrozenPhase, IdealGasPhase, PhaseState, Species, ThermoState};
use mt_transport::{DiffusionCoefficientProvider, TransportModel, new_transport};
use tracing::info;

/// Everything a caller needs to evaluate transport coefficients.
pub struct Session {
    pub name: String,
    pub model: TransportModel,
    pub phase: Box<dyn PhaseState>,
    pub transport: Box<dyn DiffusionCoefficientProvider>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("phase", &self.phase.summary())
            .finish()
    }
}

pub fn build_session(config: &Config) -> ConfigResult<Session> {
    validate_config(config)?;

    let model: TransportModel = config.transport.model.parse()?;
    let phase = build_phase(&config.mixture)?;
    let transport = new_transport(model, phase.species());

    info!(
        name = %config.name,
        model = model.label(),
        phase = %phase.summary(),
        "transport session ready"
    );

    Ok(Session {
        name: config.name.clone(),
        model,
        phase,
        transport,
    })
}

fn build_phase(mixture: &MixtureDef) -> ConfigResult<Box<dyn PhaseState>> {
    let t = mixture.temperature.resolve(Quantity::Temperature)?;
    let p = mixture.pressure.resolve(Quantity::Pressure)?;
    let state = ThermoState::from_pt(pa(p), k(t), build_composition(&mixture.composition)?)?;

    match (&mixture.density, &mixture.cp_mass) {
        (Some(rho), Some(cp)) => {
            let rho = rho.resolve(Quantity::Density)?;
            let cp = cp.resolve(Quantity::SpecificHeat)?;
            Ok(Box::new(FrozenPhase::new(state, kg_m3(rho), j_kg_k(cp))?))
        }
        _ => Ok(Box::new(IdealGasPhase::new(state)?)),
    }
}

fn build_composition(def: &CompositionDef) -> ConfigResult<Composition> {
    let parse_all = |fractions: &[(String, f64)]| -> ConfigResult<Vec<(Species, f64)>> {
        fractions
            .iter()
            .map(|(name, f)| Ok((parse_species(name, "mixture.composition")?, *f)))
            .collect()
    };

    let comp = match def {
        CompositionDef::Pure { species } => {
            Composition::pure(parse_species(species, "mixture.composition")?)
        }
        CompositionDef::Mixture { fractions } => {
            Composition::new_mole_fractions(parse_all(fractions)?)?
        }
        CompositionDef::MassFractions { fractions } => {
            Composition::new_mass_fractions(parse_all(fractions)?)?
        }
    };
    Ok(comp)
}
