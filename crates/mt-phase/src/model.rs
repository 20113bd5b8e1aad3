//! Phase state trait and validation helpers.

use crate::composition::Composition;
use crate::species::Species;
use mt_core::units::{Density, Pressure, SpecHeat, Temperature};

/// Read-only snapshot of a gas mixture's thermodynamic state.
///
/// Transport models only ever borrow a phase; they never mutate it. A new
/// snapshot is built whenever temperature, pressure or composition change.
///
/// Implementations must be thread-safe (Send + Sync) so that independent
/// snapshots can be evaluated in parallel.
pub trait PhaseState: Send + Sync {
    /// Get the phase model name (for debugging/logging).
    fn name(&self) -> &str;

    fn temperature(&self) -> Temperature;

    fn pressure(&self) -> Pressure;

    /// Mass density [kg/m³].
    fn density(&self) -> Density;

    /// Mass-specific heat capacity at constant pressure [J/(kg·K)].
    fn cp_mass(&self) -> SpecHeat;

    fn composition(&self) -> &Composition;

    /// Number of species N; fixed for the lifetime of the snapshot.
    fn n_species(&self) -> usize {
        self.composition().len()
    }

    fn species(&self) -> &[Species] {
        self.composition().species()
    }

    fn mole_fractions(&self) -> &[f64] {
        self.composition().mole_fractions()
    }

    fn mass_fractions(&self) -> Vec<f64> {
        self.composition().mass_fractions()
    }

    /// Species molar masses [kg/kmol].
    fn molar_masses(&self) -> Vec<f64> {
        self.composition().molar_masses()
    }

    /// Mean molar mass [kg/kmol].
    fn mean_molar_mass(&self) -> f64 {
        self.composition().mean_molar_mass()
    }

    /// One-line summary (for debugging).
    fn summary(&self) -> String {
        format!(
            "{}(N={},T={:.1}K,P={:.0}Pa,ρ={:.4}kg/m³,cp={:.1}J/kg·K)",
            self.name(),
            self.n_species(),
            self.temperature().value,
            self.pressure().value,
            self.density().value,
            self.cp_mass().value
        )
    }
}

/// Validation helpers for phase properties.
pub(crate) mod validation {
    use crate::error::{PhaseError, PhaseResult};

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: f64) -> PhaseResult<()> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(PhaseError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure specific heat capacity is positive and finite.
    pub fn validate_cp(cp: f64) -> PhaseResult<()> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(PhaseError::NonPhysical {
                what: "cp must be positive and finite",
            });
        }
        Ok(())
    }
}
