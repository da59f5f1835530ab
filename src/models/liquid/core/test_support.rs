use super::Measurements;

/// Builds measurements at the default lab temperature with derived handling.
pub(crate) fn measurements(
    vapor_pressure: (f64, f64),
    density: (f64, f64),
    surface_tension: (f64, f64),
    viscosity: (f64, f64),
) -> Measurements {
    Measurements {
        vapor_pressure_20c: vapor_pressure.0,
        vapor_pressure_25c: vapor_pressure.1,
        density_20c: density.0,
        density_25c: density.1,
        surface_tension_20c: surface_tension.0,
        surface_tension_25c: surface_tension.1,
        viscosity_20c: viscosity.0,
        viscosity_25c: viscosity.1,
        lab_temperature: 22.5,
        handling: None,
    }
}

/// Reference fixture: at 22.5 °C it interpolates to 110 mmHg, 0.99 g/cm³,
/// 71 dyn/cm, and 0.95 cP.
pub(crate) fn scenario() -> Measurements {
    measurements((100.0, 120.0), (1.0, 0.98), (72.0, 70.0), (1.0, 0.9))
}
