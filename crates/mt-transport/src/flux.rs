//! Species diffusive fluxes at the integration boundary.
//!
//! Closures only return coefficients. Turning them into mass fluxes that sum
//! to zero is the caller's job; these helpers do it for a one-dimensional
//! mole-fraction gradient.

use crate::error::TransportResult;
use crate::model::{DiffusionCoefficientProvider, thermal_diffusivity};
use mt_core::numeric::ensure_len;
use mt_phase::PhaseState;

/// Gradient basis a set of diffusion coefficients is defined against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffusionBasis {
    /// Mass-averaged flux driven by ∇X_k; needs a correction velocity.
    MoleFractionGradient,
    /// Mass flux driven by ∇Y_k.
    MassFractionGradient,
    /// Molar flux relative to the mole-averaged velocity.
    Mole,
}

impl DiffusionBasis {
    pub const ALL: [DiffusionBasis; 3] = [
        DiffusionBasis::MoleFractionGradient,
        DiffusionBasis::MassFractionGradient,
        DiffusionBasis::Mole,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DiffusionBasis::MoleFractionGradient => "mix",
            DiffusionBasis::MassFractionGradient => "mass",
            DiffusionBasis::Mole => "mole",
        }
    }

    /// Ask `provider` for coefficients in this basis.
    pub fn coefficients(
        &self,
        provider: &dyn DiffusionCoefficientProvider,
        phase: &dyn PhaseState,
        d: &mut [f64],
    ) -> TransportResult<()> {
        match self {
            DiffusionBasis::MoleFractionGradient => provider.mix_diff_coeffs(phase, d),
            DiffusionBasis::MassFractionGradient => provider.mix_diff_coeffs_mass(phase, d),
            DiffusionBasis::Mole => provider.mix_diff_coeffs_mole(phase, d),
        }
    }
}

impl std::str::FromStr for DiffusionBasis {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mix" | "mole-fraction" | "x" => Ok(DiffusionBasis::MoleFractionGradient),
            "mass" | "mass-fraction" | "y" => Ok(DiffusionBasis::MassFractionGradient),
            "mole" | "molar" => Ok(DiffusionBasis::Mole),
            _ => Err("unknown diffusion basis (expected mix, mass or mole)"),
        }
    }
}

/// ∇Y_k from ∇X_k: `∇Y_k = (W_k / W̄)(∇X_k − X_k ∇W̄ / W̄)`, `∇W̄ = Σ W_j ∇X_j`.
pub fn mass_fraction_gradients(phase: &dyn PhaseState, grad_x: &[f64]) -> TransportResult<Vec<f64>> {
    ensure_len("mole-fraction gradient", phase.n_species(), grad_x.len())?;
    let x = phase.mole_fractions();
    let w = phase.molar_masses();
    let mmw = phase.mean_molar_mass();
    let grad_mmw: f64 = w.iter().zip(grad_x).map(|(w, g)| w * g).sum();
    Ok((0..x.len())
        .map(|k| w[k] / mmw * (grad_x[k] - x[k] * grad_mmw / mmw))
        .collect())
}

/// Correction velocity for mole-fraction-gradient coefficients,
/// `V_c = Σ_k (W_k / W̄) d_k ∇X_k`.
pub fn correction_velocity(
    phase: &dyn PhaseState,
    d: &[f64],
    grad_x: &[f64],
) -> TransportResult<f64> {
    ensure_len("diffusion coefficients", phase.n_species(), d.len())?;
    ensure_len("mole-fraction gradient", phase.n_species(), grad_x.len())?;
    let w = phase.molar_masses();
    let mmw = phase.mean_molar_mass();
    Ok((0..d.len()).map(|k| w[k] / mmw * d[k] * grad_x[k]).sum())
}

/// Species diffusive mass fluxes [kg/(m²·s)] for a 1-D mole-fraction
/// gradient, written into `j`.
///
/// The driving force is `(W_k / W̄) ∇X_k` for the mole-fraction and molar
/// bases and `∇Y_k` for the mass basis. A correction `ρ Y_k V_c` is always
/// added, so Σ j_k = 0 for any closure; under unity Lewis with the mass basis
/// the correction is already zero.
pub fn diffusive_mass_fluxes(
    phase: &dyn PhaseState,
    provider: &dyn DiffusionCoefficientProvider,
    basis: DiffusionBasis,
    grad_x: &[f64],
    j: &mut [f64],
) -> TransportResult<()> {
    let n = phase.n_species();
    ensure_len("mole-fraction gradient", n, grad_x.len())?;
    ensure_len("flux buffer", n, j.len())?;

    let mut d = vec![0.0; n];
    basis.coefficients(provider, phase, &mut d)?;

    let driving: Vec<f64> = match basis {
        DiffusionBasis::MassFractionGradient => mass_fraction_gradients(phase, grad_x)?,
        DiffusionBasis::MoleFractionGradient | DiffusionBasis::Mole => {
            let w = phase.molar_masses();
            let mmw = phase.mean_molar_mass();
            (0..n).map(|k| w[k] / mmw * grad_x[k]).collect()
        }
    };

    let rho = phase.density().value;
    let y = phase.mass_fractions();
    let v_c: f64 = d.iter().zip(&driving).map(|(d, g)| d * g).sum();
    for k in 0..n {
        j[k] = -rho * d[k] * driving[k] + rho * y[k] * v_c;
    }
    Ok(())
}

/// Species Lewis numbers `Le_k = λ / (ρ cp D_k)` using mass-basis
/// coefficients.
pub fn lewis_numbers(
    phase: &dyn PhaseState,
    provider: &dyn DiffusionCoefficientProvider,
    le: &mut [f64],
) -> TransportResult<()> {
    ensure_len("Lewis number buffer", phase.n_species(), le.len())?;
    let alpha = thermal_diffusivity(phase, provider.thermal_conductivity(phase)?)?;
    provider.mix_diff_coeffs_mass(phase, le)?;
    for v in le.iter_mut() {
        *v = alpha / *v;
    }
    Ok(())
}
