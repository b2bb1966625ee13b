use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Inclusive hour window within a single day during which a subsystem runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub start: u8,
    pub end: u8,
}

impl TimeOfDay {
    pub fn new(start: u8, end: u8) -> Result<Self, SettingsError> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.start > self.end || self.end > 24 {
            return Err(SettingsError::InvalidTimeWindow { start: self.start, end: self.end });
        }
        Ok(())
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self { start: 5, end: 11 }
    }
}

// Numeric fields come straight off dashboard inputs, so zero is legal but
// negatives and non-finite values are not.
fn check_number(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SettingsError::InvalidNumber { field, value });
    }
    Ok(())
}

pub const PLACEHOLDER_VALUE: f64 = 123_345.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LiftingSettings {
    /// liters
    pub amount_of_water: f64,
    /// meters
    pub lifting_height: f64,
    pub time_of_day: TimeOfDay,
}

impl LiftingSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_number("amountOfWater", self.amount_of_water)?;
        check_number("liftingHeight", self.lifting_height)?;
        self.time_of_day.validate()
    }
}

impl Default for LiftingSettings {
    fn default() -> Self {
        Self {
            amount_of_water: PLACEHOLDER_VALUE,
            lifting_height: PLACEHOLDER_VALUE,
            time_of_day: TimeOfDay::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DistributionSettings {
    /// square meters
    pub area_of_distribution: f64,
    /// meters
    pub depth_of_distribution: f64,
    pub time_of_day: TimeOfDay,
}

impl DistributionSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_number("areaOfDistribution", self.area_of_distribution)?;
        check_number("depthOfDistribution", self.depth_of_distribution)?;
        self.time_of_day.validate()
    }
}

impl Default for DistributionSettings {
    fn default() -> Self {
        Self {
            area_of_distribution: PLACEHOLDER_VALUE,
            depth_of_distribution: PLACEHOLDER_VALUE,
            time_of_day: TimeOfDay::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PressureSettings {
    /// liters
    pub amount_of_water: f64,
    /// bar
    pub pressure_required: f64,
    pub time_of_day: TimeOfDay,
}

impl PressureSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_number("amountOfWater", self.amount_of_water)?;
        check_number("pressureRequired", self.pressure_required)?;
        self.time_of_day.validate()
    }
}

impl Default for PressureSettings {
    fn default() -> Self {
        Self {
            amount_of_water: PLACEHOLDER_VALUE,
            pressure_required: PLACEHOLDER_VALUE,
            time_of_day: TimeOfDay::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolarSettings {
    /// square meters
    pub net_area_of_active_solar_panels: f64,
    /// percent
    pub solar_panel_efficiency: f64,
    pub time_of_day: TimeOfDay,
}

impl SolarSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_number("netAreaOfActiveSolarPanels", self.net_area_of_active_solar_panels)?;
        check_number("solarPanelEfficiency", self.solar_panel_efficiency)?;
        self.time_of_day.validate()
    }
}

impl Default for SolarSettings {
    fn default() -> Self {
        Self {
            net_area_of_active_solar_panels: PLACEHOLDER_VALUE,
            solar_panel_efficiency: PLACEHOLDER_VALUE,
            time_of_day: TimeOfDay::default(),
        }
    }
}

/// Aggregated configuration for all four subsystems. Field names follow the
/// backend wire contract (`liftingSettings`, `distributionSettings`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub lifting_settings: LiftingSettings,
    pub distribution_settings: DistributionSettings,
    pub pressure_settings: PressureSettings,
    pub solar_settings: SolarSettings,
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.lifting_settings.validate()?;
        self.distribution_settings.validate()?;
        self.pressure_settings.validate()?;
        self.solar_settings.validate()
    }
}

/// The four managed subsystems. Route paths and payloads name them in
/// lowercase, and matching is exhaustive so a misspelled name is a parse
/// error, never a dropped update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    Lifting,
    Distribution,
    Pressure,
    Solar,
}

impl Display for Subsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Subsystem::Lifting => "lifting",
            Subsystem::Distribution => "distribution",
            Subsystem::Pressure => "pressure",
            Subsystem::Solar => "solar",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Subsystem {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "lifting" => Ok(Subsystem::Lifting),
            "distribution" => Ok(Subsystem::Distribution),
            "pressure" => Ok(Subsystem::Pressure),
            "solar" => Ok(Subsystem::Solar),
            _ => Err("Invalid subsystem"),
        }
    }
}

/// A full replacement record for one subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubsystemUpdate {
    Lifting(LiftingSettings),
    Distribution(DistributionSettings),
    Pressure(PressureSettings),
    Solar(SolarSettings),
}

impl SubsystemUpdate {
    /// Interprets a raw JSON record as the given subsystem's shape.
    pub fn from_value(subsystem: Subsystem, value: serde_json::Value) -> Result<Self, SettingsError> {
        let mismatch = |e: serde_json::Error| SettingsError::ShapeMismatch {
            expected: match subsystem {
                Subsystem::Lifting => "lifting",
                Subsystem::Distribution => "distribution",
                Subsystem::Pressure => "pressure",
                Subsystem::Solar => "solar",
            },
            detail: e.to_string(),
        };
        let update = match subsystem {
            Subsystem::Lifting => Self::Lifting(serde_json::from_value(value).map_err(mismatch)?),
            Subsystem::Distribution => Self::Distribution(serde_json::from_value(value).map_err(mismatch)?),
            Subsystem::Pressure => Self::Pressure(serde_json::from_value(value).map_err(mismatch)?),
            Subsystem::Solar => Self::Solar(serde_json::from_value(value).map_err(mismatch)?),
        };
        Ok(update)
    }

    pub fn subsystem(&self) -> Subsystem {
        match self {
            SubsystemUpdate::Lifting(_) => Subsystem::Lifting,
            SubsystemUpdate::Distribution(_) => Subsystem::Distribution,
            SubsystemUpdate::Pressure(_) => Subsystem::Pressure,
            SubsystemUpdate::Solar(_) => Subsystem::Solar,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        match self {
            SubsystemUpdate::Lifting(s) => s.validate(),
            SubsystemUpdate::Distribution(s) => s.validate(),
            SubsystemUpdate::Pressure(s) => s.validate(),
            SubsystemUpdate::Solar(s) => s.validate(),
        }
    }
}

/// Center of the dashboard map. Independent of the subsystem records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapPosition {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(SettingsError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(SettingsError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self { latitude: 51.505, longitude: -0.09 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_window_bounds() {
        assert!(TimeOfDay::new(0, 24).is_ok());
        assert!(TimeOfDay::new(8, 8).is_ok());
        assert_eq!(
            TimeOfDay::new(12, 8),
            Err(SettingsError::InvalidTimeWindow { start: 12, end: 8 })
        );
        assert_eq!(
            TimeOfDay::new(0, 25),
            Err(SettingsError::InvalidTimeWindow { start: 0, end: 25 })
        );
    }

    #[test]
    fn numeric_validation() {
        let mut settings = LiftingSettings::default();
        settings.amount_of_water = 0.0;
        assert!(settings.validate().is_ok());

        settings.amount_of_water = -1.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidNumber { field: "amountOfWater", .. })
        ));

        settings.amount_of_water = f64::NAN;
        assert!(settings.validate().is_err());

        settings.amount_of_water = f64::INFINITY;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn wire_keys_match_backend_contract() {
        let body = serde_json::to_value(DashboardSettings::default()).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["liftingSettings", "distributionSettings", "pressureSettings", "solarSettings"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(body["liftingSettings"]["amountOfWater"], 123_345.0);
        assert_eq!(body["solarSettings"]["netAreaOfActiveSolarPanels"], 123_345.0);
        assert_eq!(body["pressureSettings"]["timeOfDay"]["start"], 5);
        assert_eq!(body["distributionSettings"]["timeOfDay"]["end"], 11);
    }

    #[test]
    fn subsystem_round_trips_through_strings() {
        for name in ["lifting", "distribution", "pressure", "solar"] {
            let subsystem: Subsystem = name.parse().unwrap();
            assert_eq!(subsystem.to_string(), name);
        }
        assert!("pressurization".parse::<Subsystem>().is_err());
        assert!("".parse::<Subsystem>().is_err());
    }

    #[test]
    fn update_rejects_wrong_shape() {
        let lifting = serde_json::to_value(LiftingSettings::default()).unwrap();
        let err = SubsystemUpdate::from_value(Subsystem::Solar, lifting).unwrap_err();
        assert!(matches!(err, SettingsError::ShapeMismatch { expected: "solar", .. }));
    }

    #[test]
    fn map_position_bounds() {
        assert!(MapPosition::default().validate().is_ok());
        assert!(MapPosition { latitude: 91.0, longitude: 0.0 }.validate().is_err());
        assert!(MapPosition { latitude: 0.0, longitude: -181.0 }.validate().is_err());
        assert!(MapPosition { latitude: -90.0, longitude: 180.0 }.validate().is_ok());
    }
}
