//! mt-phase: gas mixture phase state for mixtrans.
//!
//! Provides:
//! - Chemical species definitions (H2, O2, CH4, radicals, ...)
//! - Composition handling (mole and mass fractions)
//! - Thermodynamic state representation
//! - `PhaseState` trait read by transport models
//! - Ideal-gas and frozen-snapshot phase implementations
//!
//! # Example
//!
//! ```
//! use mt_phase::{Composition, IdealGasPhase, PhaseState, Species, ThermoState};
//! use mt_core::units::{k, pa};
//!
//! let comp = Composition::new_mole_fractions(vec![(Species::O2, 0.21), (Species::N2, 0.79)])
//!     .unwrap();
//! let state = ThermoState::from_pt(pa(101325.0), k(300.0), comp).unwrap();
//! let phase = IdealGasPhase::new(state).unwrap();
//! println!("Density: {} kg/m³", phase.density().value);
//! ```

pub mod composition;
pub mod error;
pub mod frozen;
pub mod ideal_gas;
pub mod model;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use composition::Composition;
pub use error::{PhaseError, PhaseResult};
pub use frozen::FrozenPhase;
pub use ideal_gas::IdealGasPhase;
pub use model::PhaseState;
pub use species::Species;
pub use state::ThermoState;
