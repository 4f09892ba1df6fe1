//! Parameter data structures

use serde::{Deserialize, Serialize};

/// Label used when the caller leaves `name` empty
pub const DEFAULT_SIMULATION_NAME: &str = "Simulation";

/// Longest horizon accepted at the validation boundary, in years
pub const MAX_PROJECTION_YEARS: u32 = 1_000;

/// Discrete crisis event applied to a finished projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShockKind {
    /// Income drops to 30% in year 2 and living costs are drawn from savings
    JobLoss,
    /// One-time bill of six months of income in year 1
    MedicalEmergency,
    /// Higher debt service every year from year 1 onward
    InterestRateRise,
    /// Down payment in year 2 followed by a recurring mortgage
    HousingPurchase,
}

impl ShockKind {
    pub const ALL: [ShockKind; 4] = [
        ShockKind::JobLoss,
        ShockKind::MedicalEmergency,
        ShockKind::InterestRateRise,
        ShockKind::HousingPurchase,
    ];

    /// Parse the snake_case wire name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "job_loss" => Some(ShockKind::JobLoss),
            "medical_emergency" => Some(ShockKind::MedicalEmergency),
            "interest_rate_rise" => Some(ShockKind::InterestRateRise),
            "housing_purchase" => Some(ShockKind::HousingPurchase),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShockKind::JobLoss => "Job Loss",
            ShockKind::MedicalEmergency => "Medical Emergency",
            ShockKind::InterestRateRise => "Interest Rate Rise",
            ShockKind::HousingPurchase => "Housing Purchase",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ShockKind::JobLoss => "Income falls to 30% for one year starting in year 2",
            ShockKind::MedicalEmergency => "Unplanned medical bill of six months' income in year 1",
            ShockKind::InterestRateRise => "Debt service rises by 15% of monthly expenses every year",
            ShockKind::HousingPurchase => "Two years' income as down payment, then a mortgage from year 2",
        }
    }
}

/// Which transform runs around the projection
///
/// `Optimistic` and `Pessimistic` rescale rates before projecting.
/// `Crisis` leaves rates alone and perturbs the finished series instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationType {
    #[default]
    Normal,
    Optimistic,
    Pessimistic,
    Crisis(ShockKind),
}

impl SimulationType {
    /// Shock to apply after projection, if any
    pub fn shock(&self) -> Option<ShockKind> {
        match self {
            SimulationType::Crisis(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimulationType::Normal => "normal",
            SimulationType::Optimistic => "optimistic",
            SimulationType::Pessimistic => "pessimistic",
            SimulationType::Crisis(_) => "crisis",
        }
    }
}

/// Engine-safe inputs to a projection
///
/// All rates are annual percentages (5.0 = 5%). Values are caller
/// assumptions and are never clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub name: String,

    /// Projection horizon; results hold `years + 1` points
    pub years: u32,

    pub income_growth: f64,

    /// Yearly expense cut; negative values model expense growth
    pub expense_reduction: f64,

    pub investment_return: f64,

    pub inflation_rate: f64,

    /// Share of each year's surplus added to savings (0-100)
    pub savings_rate: f64,

    #[serde(default)]
    pub simulation_type: SimulationType,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            name: DEFAULT_SIMULATION_NAME.to_string(),
            years: 10,
            income_growth: 2.0,
            expense_reduction: 0.0,
            investment_return: 5.0,
            inflation_rate: 2.0,
            savings_rate: 20.0,
            simulation_type: SimulationType::Normal,
        }
    }
}

impl SimulationParameters {
    /// Copy with a different name and scenario tag
    pub fn variant(&self, name: impl Into<String>, simulation_type: SimulationType) -> Self {
        Self {
            name: name.into(),
            simulation_type,
            ..self.clone()
        }
    }
}

/// A loosely typed field as it arrives from a form or JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Booleans, arrays, objects; always rejected by the validator
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Scenario tag as written by a caller
///
/// Either a bare name ("crisis", read together with `shock`) or the tagged
/// form [`SimulationParameters`] serializes to (`{"crisis": "job_loss"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSimulationType {
    Name(String),
    Tagged(SimulationType),
    Other(serde_json::Value),
}

impl From<&str> for RawSimulationType {
    fn from(value: &str) -> Self {
        RawSimulationType::Name(value.to_string())
    }
}

impl From<SimulationType> for RawSimulationType {
    fn from(value: SimulationType) -> Self {
        RawSimulationType::Tagged(value)
    }
}

/// Unvalidated parameter bag; narrowed by [`crate::params::validate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameters {
    pub name: Option<String>,
    pub years: Option<RawValue>,
    pub income_growth: Option<RawValue>,
    pub expense_reduction: Option<RawValue>,
    pub investment_return: Option<RawValue>,
    pub inflation_rate: Option<RawValue>,
    pub savings_rate: Option<RawValue>,
    pub simulation_type: Option<RawSimulationType>,
    /// Crisis event name, only read when `simulation_type` is the bare "crisis"
    pub shock: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_type_wire_format() {
        let json = serde_json::to_string(&SimulationType::Crisis(ShockKind::JobLoss)).unwrap();
        assert_eq!(json, r#"{"crisis":"job_loss"}"#);

        let parsed: SimulationType = serde_json::from_str(r#""optimistic""#).unwrap();
        assert_eq!(parsed, SimulationType::Optimistic);
    }

    #[test]
    fn test_raw_parameters_accept_numbers_and_strings() {
        let raw: RawParameters = serde_json::from_str(
            r#"{"name": "Plan", "years": 5, "incomeGrowth": "2.5", "savingsRate": 40}"#,
        )
        .unwrap();

        assert_eq!(raw.years, Some(RawValue::Number(5.0)));
        assert_eq!(raw.income_growth, Some(RawValue::Text("2.5".into())));
        assert_eq!(raw.expense_reduction, None);
    }

    #[test]
    fn test_raw_parameters_keep_non_numeric_values() {
        let raw: RawParameters = serde_json::from_str(
            r#"{"years": [5], "incomeGrowth": true, "simulationType": {"crisis": "housing_purchase"}}"#,
        )
        .unwrap();

        assert_eq!(raw.years, Some(RawValue::Other(serde_json::json!([5]))));
        assert_eq!(raw.income_growth, Some(RawValue::Other(serde_json::Value::Bool(true))));
        assert_eq!(
            raw.simulation_type,
            Some(RawSimulationType::Tagged(SimulationType::Crisis(ShockKind::HousingPurchase)))
        );
    }

    #[test]
    fn test_shock_names() {
        for kind in ShockKind::ALL {
            let name = serde_json::to_string(&kind).unwrap();
            let name = name.trim_matches('"');
            assert_eq!(ShockKind::from_name(name), Some(kind));
        }
        assert_eq!(ShockKind::from_name(" Job_Loss "), Some(ShockKind::JobLoss));
        assert_eq!(ShockKind::from_name("earthquake"), None);
    }

    #[test]
    fn test_variant_keeps_rates() {
        let base = SimulationParameters::default();
        let v = base.variant("Upside", SimulationType::Optimistic);
        assert_eq!(v.name, "Upside");
        assert_eq!(v.income_growth, base.income_growth);
        assert_eq!(base.simulation_type, SimulationType::Normal);
    }
}
