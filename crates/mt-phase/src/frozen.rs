//! Explicit property snapshot.
//!
//! Used when density and heat capacity were already evaluated elsewhere (a
//! real-gas backend, a flow solver's own thermodynamics) and only need to be
//! handed to a transport model. Nothing is recomputed.

use crate::composition::Composition;
use crate::error::PhaseResult;
use crate::model::{PhaseState, validation};
use crate::state::ThermoState;
use mt_core::units::{Density, Pressure, SpecHeat, Temperature};

/// A phase whose density and cp are frozen at caller-supplied values.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenPhase {
    state: ThermoState,
    rho: Density,
    cp: SpecHeat,
}

impl FrozenPhase {
    pub fn new(state: ThermoState, rho: Density, cp: SpecHeat) -> PhaseResult<Self> {
        validation::validate_density(rho.value)?;
        validation::validate_cp(cp.value)?;
        Ok(Self { state, rho, cp })
    }

    pub fn state(&self) -> &ThermoState {
        &self.state
    }
}

impl PhaseState for FrozenPhase {
    fn name(&self) -> &str {
        "Frozen"
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
