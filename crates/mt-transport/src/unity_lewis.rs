//! Unity Lewis number diffusion closure.
//!
//! Viscosity and thermal conductivity come from a base mixture transport
//! model. Species diffusion collapses to one value for every species,
//!
//! ```text
//! D_m = λ / (ρ cp)
//! ```
//!
//! so that the Lewis number `Le_k = λ / (ρ cp D_k)` is exactly one.
//! `D_m` is recomputed from the phase on every call.

use crate::error::{TransportError, TransportResult};
use crate::mixture_averaged::MixtureAveragedTransport;
use crate::model::{
    DiffusionCoefficientProvider, MixtureTransport, TransportModel, thermal_diffusivity,
};
use mt_core::units::{DynVisc, ThermalCond};
use mt_phase::{PhaseState, Species};
use tracing::{trace, warn};

/// Unity Lewis number closure layered on a base mixture transport model.
#[derive(Debug, Clone, PartialEq)]
pub struct UnityLewisTransport<B = MixtureAveragedTransport> {
    base: B,
}

impl UnityLewisTransport<MixtureAveragedTransport> {
    /// Unity Lewis over the built-in mixture-averaged base.
    pub fn new(species: &[Species]) -> Self {
        Self::with_base(MixtureAveragedTransport::new(species))
    }
}

impl<B: MixtureTransport> UnityLewisTransport<B> {
    pub fn with_base(base: B) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    /// The single species diffusivity D_m = λ / (ρ cp) [m²/s].
    pub fn diffusivity(&self, phase: &dyn PhaseState) -> TransportResult<f64> {
        let lambda = self.base.thermal_conductivity(phase)?;
        let dm = thermal_diffusivity(phase, lambda)?;
        trace!(dm, "unity-Lewis diffusivity");
        Ok(dm)
    }

    fn broadcast(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()> {
        debug_assert_eq!(d.len(), phase.n_species());
        if d.is_empty() {
            return Ok(());
        }
        let dm = self.diffusivity(phase)?;
        d.fill(dm);
        Ok(())
    }
}

impl<B: MixtureTransport> MixtureTransport for UnityLewisTransport<B> {
    fn viscosity(&self, phase: &dyn PhaseState) -> TransportResult<DynVisc> {
        self.base.viscosity(phase)
    }

    fn thermal_conductivity(&self, phase: &dyn PhaseState) -> TransportResult<ThermalCond> {
        self.base.thermal_conductivity(phase)
    }
}

impl<B: MixtureTransport> DiffusionCoefficientProvider for UnityLewisTransport<B> {
    fn transport_model(&self) -> &'static str {
        TransportModel::UnityLewis.label()
    }

    /// `d[k] = λ / (ρ cp)` for mass-averaged flux against mole-fraction
    /// gradients.
    ///
    /// Unity-Lewis behaviour only holds if the caller computes the
    /// correction velocity as `V_c = Σ_k (W_k / W̄) D_m ∇X_k`
    /// ([`crate::flux::correction_velocity`]).
    fn mix_diff_coeffs(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()> {
        self.broadcast(phase, d)
    }

    /// `d[k] = λ / (ρ cp)` for diffusive mass flux against mass-fraction
    /// gradients. No correction velocity is needed.
    fn mix_diff_coeffs_mass(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()> {
        self.broadcast(phase, d)
    }

    /// Not available under the unity Lewis number approximation.
    fn mix_diff_coeffs_mole(&self, _phase: &dyn PhaseState, _d: &mut [f64]) -> TransportResult<()> {
        warn!("mole-basis diffusion coefficients requested from unity-Lewis transport");
        Err(TransportError::NotImplemented {
            what: "UnityLewisTransport::mix_diff_coeffs_mole",
        })
    }
}
