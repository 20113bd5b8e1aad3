//! Transport closure traits and model selection.

use crate::error::{TransportError, TransportResult};
use mt_core::numeric::ensure_positive;
use mt_core::units::{DynVisc, ThermalCond};
use mt_phase::PhaseState;

/// Transport closures known to mixtrans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportModel {
    /// Mixture-averaged viscosity, conductivity and species diffusion.
    MixtureAveraged,
    /// Mixture-averaged viscosity and conductivity; one species diffusivity
    /// from a unity Lewis number.
    UnityLewis,
}

impl TransportModel {
    pub const ALL: [TransportModel; 2] = [TransportModel::MixtureAveraged, TransportModel::UnityLewis];

    /// Identifying label reported by the closure.
    pub fn label(&self) -> &'static str {
        match self {
            TransportModel::MixtureAveraged => "MixtureAveraged",
            TransportModel::UnityLewis => "UnityLewis",
        }
    }
}

impl std::fmt::Display for TransportModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TransportModel {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "mixtureaveraged" | "mix" | "mixture" => Ok(TransportModel::MixtureAveraged),
            "unitylewis" | "lewis1" => Ok(TransportModel::UnityLewis),
            _ => Err(TransportError::UnknownModel {
                name: s.to_string(),
            }),
        }
    }
}

/// Bulk transport properties of a mixture.
///
/// Implementations are stateless with respect to the phase: every call
/// evaluates the supplied snapshot. They must be thread-safe (Send + Sync).
pub trait MixtureTransport: Send + Sync {
    /// Mixture dynamic viscosity [Pa·s].
    fn viscosity(&self, phase: &dyn PhaseState) -> TransportResult<DynVisc>;

    /// Mixture thermal conductivity [W/(m·K)].
    fn thermal_conductivity(&self, phase: &dyn PhaseState) -> TransportResult<ThermalCond>;
}

/// Species diffusion coefficients in the three flux bases.
///
/// Every method writes one coefficient [m²/s] per species into `d`, which
/// must hold exactly `phase.n_species()` entries. A closure that cannot
/// provide a basis returns [`TransportError::NotImplemented`] and leaves `d`
/// untouched.
///
/// Supported bases only fail when the phase itself is non-physical, e.g. a
/// base conductivity or `ρ cp` that is not positive and finite
/// ([`TransportError::NonPhysical`]), or when the phase species do not match
/// the closure. An empty mixture (N = 0) always succeeds.
pub trait DiffusionCoefficientProvider: MixtureTransport {
    /// Label of this closure, e.g. `"UnityLewis"`.
    fn transport_model(&self) -> &'static str;

    /// Coefficients for the mass-averaged diffusive flux driven by
    /// mole-fraction gradients.
    ///
    /// Mass conservation requires the caller to add a correction velocity
    /// `V_c = Σ_k (W_k / W̄) D_k ∇X_k`; see [`crate::flux`].
    fn mix_diff_coeffs(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()>;

    /// Coefficients for the diffusive mass flux driven by mass-fraction
    /// gradients.
    fn mix_diff_coeffs_mass(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()>;

    /// Coefficients for the molar flux relative to the mole-averaged velocity.
    fn mix_diff_coeffs_mole(&self, phase: &dyn PhaseState, d: &mut [f64]) -> TransportResult<()>;
}

/// Thermal diffusivity α = λ / (ρ cp) [m²/s].
pub fn thermal_diffusivity(phase: &dyn PhaseState, lambda: ThermalCond) -> TransportResult<f64> {
    let alpha = lambda.value / (phase.density().value * phase.cp_mass().value);
    Ok(ensure_positive(alpha, "thermal diffusivity must be positive and finite")?)
}
