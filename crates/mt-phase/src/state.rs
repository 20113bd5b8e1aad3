//! Thermodynamic state definitions.

use crate::composition::Composition;
use crate::error::PhaseResult;
use mt_core::numeric::ensure_positive;
use mt_core::units::{Pressure, Temperature};

/// Thermodynamic state: pressure, temperature, and composition.
///
/// This is the minimal set of independent properties.
/// Derived properties (density, heat capacity) are evaluated by a
/// [`PhaseState`](crate::PhaseState) implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoState {
    p: Pressure,
    t: Temperature,
    comp: Composition,
}

impl ThermoState {
    /// Create a state from pressure, temperature, and composition.
    ///
    /// Validates that pressure and temperature are positive and finite.
    pub fn from_pt(p: Pressure, t: Temperature, comp: Composition) -> PhaseResult<Self> {
        ensure_positive(p.value, "pressure must be positive and finite")?;
        ensure_positive(t.value, "temperature must be positive and finite")?;
        Ok(Self { p, t, comp })
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Get composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use mt_core::units::{k, pa};

    #[test]
    fn create_valid_state() {
        let comp = Composition::pure(Species::N2);
        let state = ThermoState::from_pt(pa(101325.0), k(300.0), comp).unwrap();
        assert_eq!(state.pressure().value, 101325.0);
        assert_eq!(state.temperature().value, 300.0);
        assert_eq!(state.composition().is_pure(), Some(Species::N2));
    }

    #[test]
    fn reject_negative_pressure() {
        let comp = Composition::pure(Species::N2);
        assert!(ThermoState::from_pt(pa(-100.0), k(300.0), comp).is_err());
    }

    #[test]
    fn reject_zero_temperature() {
        let comp = Composition::pure(Species::N2);
        assert!(ThermoState::from_pt(pa(101325.0), k(0.0), comp).is_err());
    }

    #[test]
    fn reject_non_finite() {
        let comp = Composition::pure(Species::N2);
        assert!(ThermoState::from_pt(pa(f64::NAN), k(300.0), comp).is_err());
    }
}
