//! Mixture composition.

use crate::error::{PhaseError, PhaseResult};
use crate::species::Species;
use mt_core::numeric::{Tolerances, nearly_equal};

/// Ordered species list with normalized mole fractions.
///
/// Species with a zero mole fraction stay in the list: the species count of a
/// mixture is fixed once built, and species-indexed buffers line up with
/// [`Composition::species`].
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    species: Vec<Species>,
    x: Vec<f64>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            species: vec![species],
            x: vec![1.0],
        }
    }

    /// Composition with no species (N = 0).
    ///
    /// Only meaningful for frozen snapshots; an ideal-gas phase rejects it
    /// because its density would be zero.
    pub fn empty() -> Self {
        Self {
            species: Vec::new(),
            x: Vec::new(),
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a positive sum,
    /// then normalizes to sum=1.
    pub fn new_mole_fractions(fractions: Vec<(Species, f64)>) -> PhaseResult<Self> {
        if fractions.is_empty() {
            return Err(PhaseError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for (i, (species, frac)) in fractions.iter().enumerate() {
            if fractions[..i].iter().any(|(s, _)| s == species) {
                return Err(PhaseError::DuplicateSpecies {
                    species: species.key(),
                });
            }
            if !frac.is_finite() {
                return Err(PhaseError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(PhaseError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(PhaseError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let (species, x) = fractions.into_iter().map(|(s, f)| (s, f / sum)).unzip();
        Ok(Self { species, x })
    }

    /// Create a composition from mass fractions, converting to mole fractions.
    pub fn new_mass_fractions(fractions: Vec<(Species, f64)>) -> PhaseResult<Self> {
        let moles = fractions
            .into_iter()
            .map(|(s, y)| (s, y / s.molar_mass()))
            .collect();
        Self::new_mole_fractions(moles)
    }

    /// Number of species, including those at zero fraction.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn mole_fractions(&self) -> &[f64] {
        &self.x
    }

    /// Get mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| f)
            .unwrap_or(0.0)
    }

    /// Position of a species in species-indexed buffers.
    pub fn index_of(&self, species: Species) -> Option<usize> {
        self.species.iter().position(|s| *s == species)
    }

    /// Check if this is a pure-species composition.
    ///
    /// Returns `Some(species)` if exactly one species has fraction ≈1.0.
    pub fn is_pure(&self) -> Option<Species> {
        let tol = Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        };
        self.iter()
            .find(|(_, f)| nearly_equal(*f, 1.0, tol))
            .map(|(s, _)| s)
    }

    /// Iterate over species and mole fractions in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.species.iter().copied().zip(self.x.iter().copied())
    }

    /// Species molar masses [kg/kmol] in index order.
    pub fn molar_masses(&self) -> Vec<f64> {
        self.species.iter().map(Species::molar_mass).collect()
    }

    /// Mean molar mass [kg/kmol]: W̄ = Σ x_k W_k.
    pub fn mean_molar_mass(&self) -> f64 {
        self.iter().map(|(s, x)| s.molar_mass() * x).sum()
    }

    /// Mass fractions in index order: Y_k = x_k W_k / W̄.
    pub fn mass_fractions(&self) -> Vec<f64> {
        let mmw = self.mean_molar_mass();
        self.iter().map(|(s, x)| x * s.molar_mass() / mmw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        }
    }

    #[test]
    fn pure_composition() {
        let comp = Composition::pure(Species::O2);
        assert_eq!(comp.is_pure(), Some(Species::O2));
        assert_eq!(comp.mole_fraction(Species::O2), 1.0);
        assert_eq!(comp.mole_fraction(Species::N2), 0.0);
        assert_eq!(comp.len(), 1);
    }

    #[test]
    fn mixture_normalization_non_unit_sum() {
        let comp =
            Composition::new_mole_fractions(vec![(Species::O2, 2.0), (Species::N2, 8.0)]).unwrap();

        assert_eq!(comp.is_pure(), None);
        assert!(nearly_equal(comp.mole_fraction(Species::O2), 0.2, tol()));
        assert!(nearly_equal(comp.mole_fraction(Species::N2), 0.8, tol()));
    }

    #[test]
    fn zero_fraction_species_are_kept() {
        let comp = Composition::new_mole_fractions(vec![
            (Species::H2, 0.0),
            (Species::O2, 0.21),
            (Species::N2, 0.79),
        ])
        .unwrap();
        assert_eq!(comp.len(), 3);
        assert_eq!(comp.index_of(Species::H2), Some(0));
        assert_eq!(comp.mole_fractions()[0], 0.0);
    }

    #[test]
    fn invalid_inputs() {
        assert!(Composition::new_mole_fractions(vec![]).is_err());
        assert!(
            Composition::new_mole_fractions(vec![(Species::O2, -0.5), (Species::N2, 1.5)]).is_err()
        );
        assert!(
            Composition::new_mole_fractions(vec![(Species::O2, 0.0), (Species::N2, 0.0)]).is_err()
        );
        assert!(Composition::new_mole_fractions(vec![(Species::O2, f64::NAN)]).is_err());
    }

    #[test]
    fn duplicate_species_rejected() {
        let err = Composition::new_mole_fractions(vec![(Species::N2, 0.5), (Species::N2, 0.5)])
            .unwrap_err();
        assert_eq!(err, PhaseError::DuplicateSpecies { species: "N2" });
    }

    #[test]
    fn air_mean_molar_mass() {
        let comp = Composition::new_mole_fractions(vec![
            (Species::O2, 0.21),
            (Species::N2, 0.78),
            (Species::Ar, 0.01),
        ])
        .unwrap();
        let mmw = comp.mean_molar_mass();
        assert!((mmw - 28.97).abs() < 0.05, "W = {mmw}");
    }

    #[test]
    fn mass_fraction_conversion_inverts() {
        let comp = Composition::new_mass_fractions(vec![(Species::H2, 0.5), (Species::O2, 0.5)])
            .unwrap();
        let y = comp.mass_fractions();
        assert!(nearly_equal(y[0], 0.5, tol()));
        assert!(nearly_equal(y[1], 0.5, tol()));
        // Light hydrogen dominates on a molar basis.
        assert!(comp.mole_fraction(Species::H2) > 0.9);
    }
}
