//! mt-transport: mixture transport closures for mixtrans.
//!
//! Provides:
//! - `MixtureTransport` (viscosity, thermal conductivity) and
//!   `DiffusionCoefficientProvider` (species diffusion in three bases) traits
//! - a mixture-averaged closure (Wilke, Mathur–Saxena, Fuller binaries)
//! - a unity Lewis number closure layered on any `MixtureTransport`
//! - flux helpers: correction velocity, diffusive mass fluxes, Lewis numbers
//!
//! # Example
//!
//! ```
//! use mt_core::units::{k, pa};
//! use mt_phase::{Composition, IdealGasPhase, PhaseState, Species, ThermoState};
//! use mt_transport::{DiffusionCoefficientProvider, UnityLewisTransport};
//!
//! let comp = Composition::new_mole_fractions(vec![(Species::O2, 0.21), (Species::N2, 0.79)])
//!     .unwrap();
//! let phase = IdealGasPhase::new(ThermoState::from_pt(pa(101325.0), k(300.0), comp).unwrap())
//!     .unwrap();
//! let transport = UnityLewisTransport::new(phase.species());
//!
//! let mut d = vec![0.0; phase.n_species()];
//! transport.mix_diff_coeffs_mass(&phase, &mut d).unwrap();
//! assert_eq!(d[0], d[1]);
//! assert!(transport.mix_diff_coeffs_mole(&phase, &mut d).is_err());
//! ```

pub mod error;
pub mod factory;
pub mod flux;
pub mod mixture_averaged;
pub mod model;
pub mod species_data;
pub mod unity_lewis;

pub use error::{TransportError, TransportResult};
pub use factory::new_transport;
pub use flux::{
    DiffusionBasis, correction_velocity, diffusive_mass_fluxes, lewis_numbers,
    mass_fraction_gradients,
};
pub use mixture_averaged::MixtureAveragedTransport;
pub use model::{DiffusionCoefficientProvider, MixtureTransport, TransportModel, thermal_diffusivity};
pub use species_data::{PowerLaw, SpeciesTransport, fuller_binary};
pub use unity_lewis::UnityLewisTransport;
