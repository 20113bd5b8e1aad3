//! Pure-species transport data.
//!
//! Viscosity and conductivity follow power laws anchored at 300 K; binary
//! diffusion coefficients come from the Fuller–Schettler–Giddings
//! correlation. Accuracy is a few percent for the permanent gases and
//! rougher for the radicals, which is adequate for mixture-averaged flame
//! work but not for property tables.

use mt_core::constants::ONE_ATM_PA;
use mt_phase::Species;

/// `φ(T) = φ_ref (T / T_ref)^n`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    pub reference: f64,
    pub t_ref: f64,
    pub exponent: f64,
}

impl PowerLaw {
    pub const fn at_300k(reference: f64, exponent: f64) -> Self {
        Self {
            reference,
            t_ref: 300.0,
            exponent,
        }
    }

    pub fn eval(&self, t: f64) -> f64 {
        self.reference * (t / self.t_ref).powf(self.exponent)
    }
}

/// Transport parameters of one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTransport {
    /// Dynamic viscosity [Pa·s].
    pub viscosity: PowerLaw,
    /// Thermal conductivity [W/(m·K)].
    pub conductivity: PowerLaw,
    /// Fuller atomic diffusion volume [cm³/mol].
    pub diffusion_volume: f64,
}

impl SpeciesTransport {
    /// Built-in parameters for a catalog species.
    pub fn builtin(species: Species) -> Self {
        let (mu, lambda, volume) = match species {
            Species::H2 => (8.96e-6, 0.1830, 6.12),
            Species::O2 => (2.07e-5, 0.0266, 16.3),
            Species::H2O => (1.00e-5, 0.0196, 13.1),
            Species::N2 => (1.79e-5, 0.0259, 18.5),
            Species::Ar => (2.27e-5, 0.0177, 16.2),
            Species::He => (1.99e-5, 0.1550, 2.67),
            Species::CO => (1.78e-5, 0.0250, 18.0),
            Species::CO2 => (1.50e-5, 0.0166, 26.7),
            Species::CH4 => (1.12e-5, 0.0343, 25.14),
            Species::H => (9.00e-6, 0.1850, 2.31),
            Species::O => (1.50e-5, 0.0350, 6.11),
            Species::OH => (1.60e-5, 0.0350, 8.42),
        };
        Self {
            viscosity: PowerLaw::at_300k(mu, 0.7),
            conductivity: PowerLaw::at_300k(lambda, 0.8),
            diffusion_volume: volume,
        }
    }
}

/// Fuller binary diffusion coefficient [m²/s].
///
/// ```text
/// D_kj = 1e-7 T^1.75 √(1/W_k + 1/W_j) / (p_atm (V_k^⅓ + V_j^⅓)²)
/// ```
///
/// `w_*` in kg/kmol, `v_*` in cm³/mol, `t` in K, `p` in Pa.
pub fn fuller_binary(t: f64, p: f64, w_k: f64, w_j: f64, v_k: f64, v_j: f64) -> f64 {
    let p_atm = p / ONE_ATM_PA;
    let sigma = v_k.cbrt() + v_j.cbrt();
    1e-7 * t.powf(1.75) * (1.0 / w_k + 1.0 / w_j).sqrt() / (p_atm * sigma * sigma)
}
