//! Chemical species definitions.

/// Gas-phase species found in hydrogen and light-hydrocarbon flames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    /// Hydrogen (H₂)
    H2,
    /// Oxygen (O₂)
    O2,
    /// Water vapour (H₂O)
    H2O,
    /// Nitrogen (N₂)
    N2,
    /// Argon (Ar)
    Ar,
    /// Helium (He)
    He,
    /// Carbon monoxide (CO)
    CO,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Methane (CH₄)
    CH4,
    /// Atomic hydrogen (H)
    H,
    /// Atomic oxygen (O)
    O,
    /// Hydroxyl radical (OH)
    OH,
}

impl Species {
    pub const ALL: [Species; 12] = [
        Species::H2,
        Species::O2,
        Species::H2O,
        Species::N2,
        Species::Ar,
        Species::He,
        Species::CO,
        Species::CO2,
        Species::CH4,
        Species::H,
        Species::O,
        Species::OH,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::H2 => "H2",
            Species::O2 => "O2",
            Species::H2O => "H2O",
            Species::N2 => "N2",
            Species::Ar => "Ar",
            Species::He => "He",
            Species::CO => "CO",
            Species::CO2 => "CO2",
            Species::CH4 => "CH4",
            Species::H => "H",
            Species::O => "O",
            Species::OH => "OH",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::H2 => "Hydrogen",
            Species::O2 => "Oxygen",
            Species::H2O => "Water",
            Species::N2 => "Nitrogen",
            Species::Ar => "Argon",
            Species::He => "Helium",
            Species::CO => "Carbon Monoxide",
            Species::CO2 => "Carbon Dioxide",
            Species::CH4 => "Methane",
            Species::H => "Atomic Hydrogen",
            Species::O => "Atomic Oxygen",
            Species::OH => "Hydroxyl",
        }
    }

    /// Get molar mass [kg/kmol] for this species.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::H2 => 2.016,
            Species::O2 => 31.999,
            Species::H2O => 18.015,
            Species::N2 => 28.014,
            Species::Ar => 39.948,
            Species::He => 4.003,
            Species::CO => 28.010,
            Species::CO2 => 44.010,
            Species::CH4 => 16.043,
            Species::H => 1.008,
            Species::O => 15.999,
            Species::OH => 17.007,
        }
    }

    /// Ideal-gas molar heat capacity at 298.15 K [J/(kmol·K)].
    ///
    /// Held constant: phases built from these values are calorically perfect.
    pub fn reference_cp_molar(&self) -> f64 {
        match self {
            Species::H2 => 28_836.0,
            Species::O2 => 29_376.0,
            Species::H2O => 33_577.0,
            Species::N2 => 29_124.0,
            Species::Ar => 20_786.0,
            Species::He => 20_786.0,
            Species::CO => 29_142.0,
            Species::CO2 => 37_135.0,
            Species::CH4 => 35_695.0,
            Species::H => 20_786.0,
            Species::O => 21_911.0,
            Species::OH => 29_886.0,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "O2" | "OXYGEN" => Ok(Species::O2),
            "H2O" | "WATER" | "STEAM" => Ok(Species::H2O),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "AR" | "ARGON" => Ok(Species::Ar),
            "HE" | "HELIUM" => Ok(Species::He),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "H" | "ATOMIC HYDROGEN" => Ok(Species::H),
            "O" | "ATOMIC OXYGEN" => Ok(Species::O),
            "OH" | "HYDROXYL" => Ok(Species::OH),
            _ => Err("unknown species"),
        }
    }
}
