//! Calorically perfect ideal-gas phase.

use crate::composition::Composition;
use crate::error::PhaseResult;
use crate::model::{PhaseState, validation};
use crate::state::ThermoState;
use mt_core::constants::R_UNIVERSAL;
use mt_core::units::{Density, Pressure, SpecHeat, Temperature, j_kg_k, kg_m3};
use tracing::debug;

/// Ideal-gas mixture evaluated once at construction.
///
/// ```text
/// ρ       = p W̄ / (R T)
/// cp_mass = Σ x_k c̄p_k / W̄
/// ```
///
/// Species molar heat capacities are the constant reference values from
/// [`Species::reference_cp_molar`](crate::Species::reference_cp_molar).
#[derive(Debug, Clone, PartialEq)]
pub struct IdealGasPhase {
    state: ThermoState,
    rho: Density,
    cp: SpecHeat,
}

impl IdealGasPhase {
    pub fn new(state: ThermoState) -> PhaseResult<Self> {
        let comp = state.composition();
        let mmw = comp.mean_molar_mass();
        let rho = state.pressure().value * mmw / (R_UNIVERSAL * state.temperature().value);
        validation::validate_density(rho)?;

        let cp_molar: f64 = comp
            .iter()
            .map(|(s, x)| x * s.reference_cp_molar())
            .sum();
        let cp = cp_molar / mmw;
        validation::validate_cp(cp)?;

        debug!(
            n_species = comp.len(),
            rho_kg_m3 = rho,
            cp_j_kg_k = cp,
            "ideal-gas phase evaluated"
        );

        Ok(Self {
            state,
            rho: kg_m3(rho),
            cp: j_kg_k(cp),
        })
    }

    /// Underlying (p, T, composition) state.
    pub fn state(&self) -> &ThermoState {
        &self.state
    }
}

impl PhaseState for IdealGasPhase {
    fn name(&self) -> &str {
        "IdealGas"
    }

    fn temperature(&self) -> Temperature {
        self.state.temperature()
    }

    fn pressure(&self) -> Pressure {
        self.state.pressure()
    }

    fn density(&self) -> Density {
        self.rho
    }

    fn cp_mass(&self) -> SpecHeat {
        self.cp
    }

    fn composition(&self) -> &Composition {
        self.state.composition()
    }
}
