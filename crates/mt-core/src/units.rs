// mt-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, MassDensity as UomMassDensity,
    Pressure as UomPressure, SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Pressure = UomPressure;
pub type SpecHeat = UomSpecificHeatCapacity;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalCond = UomThermalConductivity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn j_kg_k(v: f64) -> SpecHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn w_m_k(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

pub mod constants {
    /// Universal gas constant [J/(kmol·K)].
    pub const R_UNIVERSAL: f64 = 8_314.462_618;

    /// One standard atmosphere [Pa].
    pub const ONE_ATM_PA: f64 = 101_325.0;
}
