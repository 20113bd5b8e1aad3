//! Behaviour of the unity Lewis number closure as seen by a flux routine.

use mt_core::units::{DynVisc, ThermalCond, j_kg_k, k, kg_m3, pa, pa_s, w_m_k};
use mt_phase::{Composition, FrozenPhase, IdealGasPhase, PhaseState, Species, ThermoState};
use mt_transport::{
    DiffusionBasis, DiffusionCoefficientProvider, MixtureTransport, TransportError,
    TransportResult, UnityLewisTransport, correction_velocity, diffusive_mass_fluxes,
    lewis_numbers, new_transport, TransportModel,
};
use proptest::prelude::*;

/// Stand-in for an externally evaluated conductivity.
struct FixedConductivity(f64);

impl MixtureTransport for FixedConductivity {
    fn viscosity(&self, _phase: &dyn PhaseState) -> TransportResult<DynVisc> {
        Ok(pa_s(1.8e-5))
    }

    fn thermal_conductivity(&self, _phase: &dyn PhaseState) -> TransportResult<ThermalCond> {
        Ok(w_m_k(self.0))
    }
}

fn frozen(comp: Composition, rho: f64, cp: f64) -> FrozenPhase {
    let state = ThermoState::from_pt(pa(101_325.0), k(300.0), comp).unwrap();
    FrozenPhase::new(state, kg_m3(rho), j_kg_k(cp)).unwrap()
}

fn methane_air(t: f64) -> IdealGasPhase {
    let comp = Composition::new_mole_fractions(vec![
        (Species::CH4, 0.095),
        (Species::O2, 0.19),
        (Species::N2, 0.715),
    ])
    .unwrap();
    IdealGasPhase::new(ThermoState::from_pt(pa(101_325.0), k(t), comp).unwrap()).unwrap()
}

#[test]
fn empty_mixture_writes_nothing() {
    let phase = frozen(Composition::empty(), 1.2, 1000.0);
    let model = UnityLewisTransport::with_base(FixedConductivity(0.05));
    let mut d: [f64; 0] = [];
    model.mix_diff_coeffs(&phase, &mut d).unwrap();
    model.mix_diff_coeffs_mass(&phase, &mut d).unwrap();
    assert!(matches!(
        model.mix_diff_coeffs_mole(&phase, &mut d),
        Err(TransportError::NotImplemented { .. })
    ));
}

#[test]
fn empty_mixture_with_built_in_base() {
    let phase = frozen(Composition::empty(), 1.2, 1000.0);
    let model = new_transport(TransportModel::UnityLewis, phase.species());
    let mut d: [f64; 0] = [];
    assert_eq!(model.mix_diff_coeffs(&phase, &mut d), Ok(()));
    assert_eq!(model.mix_diff_coeffs_mass(&phase, &mut d), Ok(()));
    assert!(matches!(
        model.mix_diff_coeffs_mole(&phase, &mut d),
        Err(TransportError::NotImplemented { .. })
    ));
}

#[test]
fn mole_basis_fails_for_real_mixtures() {
    let phase = methane_air(1200.0);
    let model = new_transport(TransportModel::UnityLewis, phase.species());
    let mut d = vec![0.0; phase.n_species()];
    let err = model.mix_diff_coeffs_mole(&phase, &mut d).unwrap_err();
    assert_eq!(
        err,
        TransportError::NotImplemented {
            what: "UnityLewisTransport::mix_diff_coeffs_mole"
        }
    );
}

#[test]
fn diffusivity_equals_thermal_diffusivity_of_base() {
    let phase = methane_air(900.0);
    let model = UnityLewisTransport::new(phase.species());
    let lambda = model.base().thermal_conductivity(&phase).unwrap().value;
    let expected = lambda / (phase.density().value * phase.cp_mass().value);

    let mut d = vec![0.0; phase.n_species()];
    model.mix_diff_coeffs(&phase, &mut d).unwrap();
    assert!(d.iter().all(|&v| v == expected), "d = {d:?}");
}

#[test]
fn label_does_not_depend_on_phase() {
    let model = UnityLewisTransport::with_base(FixedConductivity(0.05));
    assert_eq!(model.transport_model(), "UnityLewis");
    let _ = methane_air(2000.0);
    assert_eq!(model.transport_model(), "UnityLewis");
}

#[test]
fn lewis_numbers_are_one() {
    let phase = methane_air(1500.0);
    let model = UnityLewisTransport::new(phase.species());
    let mut le = vec![0.0; phase.n_species()];
    lewis_numbers(&phase, &model, &mut le).unwrap();
    assert!(le.iter().all(|&v| v == 1.0), "le = {le:?}");
}

#[test]
fn mixture_averaged_lewis_numbers_differ_by_species() {
    let phase = methane_air(1500.0);
    let model = new_transport(TransportModel::MixtureAveraged, phase.species());
    let mut le = vec![0.0; phase.n_species()];
    lewis_numbers(&phase, model.as_ref(), &mut le).unwrap();
    assert!(le.iter().any(|&v| (v - 1.0).abs() > 0.05), "le = {le:?}");
}

#[test]
fn mole_fraction_basis_needs_the_correction_velocity() {
    let phase = methane_air(1200.0);
    let model = UnityLewisTransport::new(phase.species());
    let grad_x = [-40.0, -10.0, 50.0];

    let mut d = vec![0.0; 3];
    model.mix_diff_coeffs(&phase, &mut d).unwrap();

    // Uncorrected fluxes leak mass.
    let rho = phase.density().value;
    let w = phase.molar_masses();
    let mmw = phase.mean_molar_mass();
    let uncorrected: f64 = (0..3).map(|k| -rho * w[k] / mmw * d[k] * grad_x[k]).sum();
    assert!(uncorrected.abs() > 1e-6, "uncorrected sum = {uncorrected}");

    let v_c = correction_velocity(&phase, &d, &grad_x).unwrap();
    assert!(v_c.abs() > 0.0);

    let mut j = vec![0.0; 3];
    diffusive_mass_fluxes(&phase, &model, DiffusionBasis::MoleFractionGradient, &grad_x, &mut j)
        .unwrap();
    let sum: f64 = j.iter().sum();
    assert!(sum.abs() < 1e-12, "corrected sum = {sum}");
}

#[test]
fn mass_basis_conserves_mass_without_correction() {
    let phase = methane_air(1200.0);
    let model = UnityLewisTransport::new(phase.species());
    let grad_x = [-40.0, -10.0, 50.0];

    let mut d = vec![0.0; 3];
    model.mix_diff_coeffs_mass(&phase, &mut d).unwrap();
    let grad_y = mt_transport::mass_fraction_gradients(&phase, &grad_x).unwrap();
    let rho = phase.density().value;
    let uncorrected: f64 = (0..3).map(|k| -rho * d[k] * grad_y[k]).sum();
    assert!(uncorrected.abs() < 1e-12, "sum = {uncorrected}");

    let mut j = vec![0.0; 3];
    diffusive_mass_fluxes(&phase, &model, DiffusionBasis::MassFractionGradient, &grad_x, &mut j)
        .unwrap();
    for k in 0..3 {
        let plain = -rho * d[k] * grad_y[k];
        assert!((j[k] - plain).abs() < 1e-12, "j[{k}] = {}, plain = {plain}", j[k]);
    }
}

#[test]
fn flux_helper_surfaces_unsupported_basis() {
    let phase = methane_air(1200.0);
    let model = UnityLewisTransport::new(phase.species());
    let mut j = vec![0.0; 3];
    let err = diffusive_mass_fluxes(&phase, &model, DiffusionBasis::Mole, &[1.0, -1.0, 0.0], &mut j)
        .unwrap_err();
    assert!(matches!(err, TransportError::NotImplemented { .. }));
}

#[test]
fn flux_helper_checks_buffer_sizes() {
    let phase = methane_air(1200.0);
    let model = UnityLewisTransport::new(phase.species());
    let mut j = vec![0.0; 2];
    let err = diffusive_mass_fluxes(
        &phase,
        &model,
        DiffusionBasis::MassFractionGradient,
        &[1.0, -1.0, 0.0],
        &mut j,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TransportError::BufferSize {
            expected: 3,
            got: 2,
            ..
        }
    ));
}

proptest! {
    #[test]
    fn broadcast_matches_formula(
        lambda in 1e-3_f64..1.0,
        rho in 1e-2_f64..50.0,
        cp in 500.0_f64..15_000.0,
        n in 1_usize..8,
    ) {
        let fractions: Vec<(Species, f64)> =
            Species::ALL.iter().take(n).map(|s| (*s, 1.0)).collect();
        let phase = frozen(Composition::new_mole_fractions(fractions).unwrap(), rho, cp);
        let model = UnityLewisTransport::with_base(FixedConductivity(lambda));
        let expected = lambda / (rho * cp);

        let mut mix = vec![0.0; n];
        let mut mass = vec![0.0; n];
        model.mix_diff_coeffs(&phase, &mut mix).unwrap();
        model.mix_diff_coeffs_mass(&phase, &mut mass).unwrap();

        prop_assert!(mix.iter().all(|&v| v == expected));
        prop_assert_eq!(&mix, &mass);
        prop_assert!(model.mix_diff_coeffs_mole(&phase, &mut mix).is_err());
    }
}
