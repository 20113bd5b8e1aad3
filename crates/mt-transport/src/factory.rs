//! Transport closure construction.

use crate::mixture_averaged::MixtureAveragedTransport;
use crate::model::{DiffusionCoefficientProvider, TransportModel};
use crate::unity_lewis::UnityLewisTransport;
use mt_phase::Species;
use tracing::debug;

/// Build the closure named by `model` for a fixed species list.
pub fn new_transport(
    model: TransportModel,
    species: &[Species],
) -> Box<dyn DiffusionCoefficientProvider> {
    debug!(model = model.label(), n_species = species.len(), "building transport closure");
    match model {
        TransportModel::MixtureAveraged => Box::new(MixtureAveragedTransport::new(species)),
        TransportModel::UnityLewis => Box::new(UnityLewisTransport::new(species)),
    }
}
