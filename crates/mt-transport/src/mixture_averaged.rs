//! Mixture-averaged transport closure.
//!
//! - viscosity: Wilke mixing rule
//! - thermal conductivity: Mathur–Saxena average
//! - species diffusion: mixture-averaged from binary coefficients, in
//!   mole-fraction-gradient, mass-fraction-gradient and molar bases

use crate::error::{TransportError, TransportResult};
use crate::model::{DiffusionCoefficientProvider, MixtureTransport, TransportModel};
use crate::species_data::{SpeciesTransport, fuller_binary};
use mt_core::numeric::ensure_positive;
use mt_core::units::{DynVisc, ThermalCond, pa_s, w_m_k};
use mt_phase::{PhaseState, Species};
use tracing::debug;

/// Mixture-averaged closure for a fixed species list.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureAveragedTransport {
    species: Vec<Species>,
    data: Vec<SpeciesTransport>,
}

impl MixtureAveragedTransport {
    /// Build with the built-in species transport data.
    pub fn new(species: &[Species]) -> Self {
        Self::with_data(
            species
                .iter()
                .map(|s| (*s, SpeciesTransport::builtin(*s)))
                .collect(),
        )
    }

    /// Build with caller-supplied species transport data.
    pub fn with_data(entries: Vec<(Species, SpeciesTransport)>) -> Self {
        let (species, data): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        debug!(n_species = species.len(), "mixture-averaged transport built");
        Self { species, data }
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    fn check_species(&self, phase: &dyn PhaseState) -> TransportResult<()> {
        if phase.species() == self.species.as_slice() {
            return Ok(());
        }
        Err(TransportError::SpeciesMismatch {
            expected: self.species.iter().map(|s| s.key().to_string()).collect(),
            got: phase.species().iter().map(|s| s.key().to_string()).collect(),
        })
    }

    /// Pure-species viscosities [Pa·s] at the phase temperature.
    pub fn species_viscosities(&self, phase: &dyn PhaseState) -> TransportResult<Vec<f64>> {
        self.check_species(phase)?;
        let t = phase.temperature().value;
        Ok(self.data.iter().map(|d| d.viscosity.eval(t)).collect())
    }

    /// Pure-species conductivities [W/(m·K)] at the phase temperature.
    pub fn species_conductivities(&self, phase: &dyn PhaseState) -> TransportResult<Vec<f64>> {
        self.check_species(phase)?;
        let t = phase.temperature().value;
        Ok(self.data.iter().map(|d| d.conductivity.eval(t)).collect())
    }

    /// Binary diffusion coefficients D_kj [m²/s], row-major N×N, including
    /// the self-diffusion diagonal.
    pub fn binary_diff_coeffs(&self, phase: &dyn PhaseState) -> TransportResult<Vec<f64>> {
        self.check_species(phase)?;
        let t = phase.temperature().value;
        let p = phase.pressure().value;
        let n = self.species.len();
        let mut bdiff = vec![0.0; n * n];
        for k in 0..n {
            for j in k..n {
                let d = fuller_binary(
                    t,
                    p,
                    self.species[k].molar_mass(),
                    self.species[j].molar_mass(),
                    self.data[k].diffusion_volume,
                    self.data[j].diffusion_volume,
                );
                bdiff[k * n + j] = d;
                bdiff[j * n + k] = d;
            }
        }
        Ok(bdiff)
    }

    /// Shared sweep over species: for each k, Σ_{j≠k} x_j / D_kj and
    /// Σ_{j≠k} x_j W_j / D_kj, plus the self-diffusion fallback.
    fn weighted_sums(&self, phase: &dyn PhaseState) -> TransportResult<Vec<(f64, f64, f64)>> {
        let bdiff = self.binary_diff_coeffs(phase)?;
        let x = phase.mole_fractions();
        let w = phase.molar_masses();
        let n = self.species.len();
        Ok((0..n)
            .map(|k| {
                let (mut sum1, mut sum2) = (0.0, 0.0);
                for j in (0..n).filter(|&j| j != k) {
                    sum1 += x[j] / bdiff[k * n + j];
                    sum2 += x[j] * w[j] / bdiff[k * n + j];
                }
                (sum1, sum2, bdiff[k * n + k])
            })
            .collect())
    }
}

impl MixtureTransport for MixtureAveragedTransport {
    fn viscosity(&self, phase: &dyn PhaseState) -> TransportResult<DynVisc> {
        let mu = self.species_viscosities(phase)?;
        let x = phase.mole_fractions();
        let w = phase.molar_masses();
        let n = mu.len();

        let mut mix = 0.0;
        for k in 0..n {
            let denom: f64 = (0..n)
                .map(|j| {
                    let f = 1.0 + (mu[k] / mu[j]).sqrt() * (w[j] / w[k]).powf(0.25);
                    x[j] * f * f / (8.0 * (1.0 + w[k] / w[j])).sqrt()
                })
                .sum();
            if denom > 0.0 {
                mix += x[k] * mu[k] / denom;
            }
        }
        Ok(pa_s(ensure_positive(mix, "mixture viscosity")?))
    }

    fn thermal_conductivity(&self, phase: &dyn PhaseState) -> TransportResult<ThermalCond> {
        let lambda = self.species_conductivities(phase)?;
        let x = phase.mole_fractions();
        let sum1: f64 = x.iter().zip(&lambda).map(|(x, l)| x * l).sum();
        let sum2: f64 = x.iter().zip(&lambda).map(|(x, l)| x / l).sum();
        let mix = 0.5 * (sum1 + 1.0 / sum2);
        Ok(w_m_k(ensure_positive(mix, "mixture thermal conductivity")?))
    }
}

impl DiffusionCoefficientProvider for MixtureAveragedTransport {
    fn transport_model(&self) -> &'static str {
        TransportModel::MixtureAveraged.label()
    }

    fn mix_diff_coeffs(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()> {
        debug_assert_eq!(d.len(), phase.n_species());
        let sums = self.weighted_sums(phase)?;
        let x = phase.mole_fractions();
        let w = phase.molar_masses();
        let mmw = phase.mean_molar_mass();
        for (k, (sum1, _, d_self)) in sums.into_iter().enumerate() {
            d[k] = if sum1 <= 0.0 {
                d_self
            } else {
                (mmw - x[k] * w[k]) / (mmw * sum1)
            };
        }
        Ok(())
    }

    fn mix_diff_coeffs_mass(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()> {
        debug_assert_eq!(d.len(), phase.n_species());
        let sums = self.weighted_sums(phase)?;
        let x = phase.mole_fractions();
        let w = phase.molar_masses();
        let mmw = phase.mean_molar_mass();
        for (k, (sum1, sum2, d_self)) in sums.into_iter().enumerate() {
            d[k] = if sum1 <= 0.0 {
                d_self
            } else {
                1.0 / (sum1 + x[k] / (mmw - x[k] * w[k]) * sum2)
            };
        }
        Ok(())
    }

    fn mix_diff_coeffs_mole(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()> {
        debug_assert_eq!(d.len(), phase.n_species());
        let sums = self.weighted_sums(phase)?;
        let x = phase.mole_fractions();
        for (k, (sum1, _, d_self)) in sums.into_iter().enumerate() {
            d[k] = if sum1 <= 0.0 {
                d_self
            } else {
                (1.0 - x[k]) / sum1
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_core::numeric::{Tolerances, nearly_equal};
    use mt_core::units::{k, pa};
    use mt_phase::{Composition, IdealGasPhase, ThermoState};

    fn phase(fractions: Vec<(Species, f64)>, t: f64) -> IdealGasPhase {
        let comp = Composition::new_mole_fractions(fractions).unwrap();
        IdealGasPhase::new(ThermoState::from_pt(pa(101_325.0), k(t), comp).unwrap()).unwrap()
    }

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-18,
            rel: 1e-10,
        }
    }

    #[test]
    fn pure_species_reduces_to_pure_values() {
        let gas = phase(vec![(Species::N2, 1.0)], 300.0);
        let model = MixtureAveragedTransport::new(gas.species());
        assert!(nearly_equal(model.viscosity(&gas).unwrap().value, 1.79e-5, tol()));
        assert!(nearly_equal(
            model.thermal_conductivity(&gas).unwrap().value,
            0.0259,
            tol()
        ));

        // Single species: falls back to self-diffusion.
        let bdiff = model.binary_diff_coeffs(&gas).unwrap();
        let mut d = [0.0];
        model.mix_diff_coeffs(&gas, &mut d).unwrap();
        assert_eq!(d[0], bdiff[0]);
    }

    #[test]
    fn binary_mixture_bases() {
        let gas = phase(vec![(Species::H2, 0.3), (Species::N2, 0.7)], 600.0);
        let model = MixtureAveragedTransport::new(gas.species());
        let d12 = model.binary_diff_coeffs(&gas).unwrap()[1];
        let w = gas.molar_masses();
        let mmw = gas.mean_molar_mass();

        let mut mole = [0.0; 2];
        let mut mass = [0.0; 2];
        let mut mix = [0.0; 2];
        model.mix_diff_coeffs_mole(&gas, &mut mole).unwrap();
        model.mix_diff_coeffs_mass(&gas, &mut mass).unwrap();
        model.mix_diff_coeffs(&gas, &mut mix).unwrap();

        // In a binary mixture the mole and mass bases recover D_12 itself.
        for k in 0..2 {
            assert!(nearly_equal(mole[k], d12, tol()), "mole[{k}] = {}", mole[k]);
            assert!(nearly_equal(mass[k], d12, tol()), "mass[{k}] = {}", mass[k]);
        }
        // Mole-fraction-gradient basis carries the W_j / W̄ factor.
        assert!(nearly_equal(mix[0], d12 * w[1] / mmw, tol()));
        assert!(nearly_equal(mix[1], d12 * w[0] / mmw, tol()));
    }

    #[test]
    fn hydrogen_diffuses_fastest() {
        let gas = phase(
            vec![(Species::H2, 0.1), (Species::O2, 0.2), (Species::N2, 0.7)],
            1000.0,
        );
        let model = MixtureAveragedTransport::new(gas.species());
        let mut d = [0.0; 3];
        model.mix_diff_coeffs_mass(&gas, &mut d).unwrap();
        assert!(d[0] > 2.0 * d[1] && d[0] > 2.0 * d[2], "d = {d:?}");
    }

    #[test]
    fn air_properties_are_plausible() {
        let gas = phase(
            vec![(Species::O2, 0.21), (Species::N2, 0.78), (Species::Ar, 0.01)],
            300.0,
        );
        let model = MixtureAveragedTransport::new(gas.species());
        let mu = model.viscosity(&gas).unwrap().value;
        let lambda = model.thermal_conductivity(&gas).unwrap().value;
        assert!(mu > 1.7e-5 && mu < 2.0e-5, "mu = {mu}");
        assert!(lambda > 0.024 && lambda < 0.028, "lambda = {lambda}");
    }

    #[test]
    fn species_mismatch_is_reported() {
        let gas = phase(vec![(Species::O2, 0.21), (Species::N2, 0.79)], 300.0);
        let model = MixtureAveragedTransport::new(&[Species::N2, Species::O2]);
        let err = model.thermal_conductivity(&gas).unwrap_err();
        assert!(matches!(err, TransportError::SpeciesMismatch { .. }));
    }

    #[test]
    fn label() {
        let model = MixtureAveragedTransport::new(&[Species::N2]);
        assert_eq!(model.transport_model(), "MixtureAveraged");
    }
}
