// Body metrics derived from the profile form
use serde::{Deserialize, Serialize};

/// Classification band for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
    /// No usable BMI could be computed.
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl BmiStatus {
    pub fn label(self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::Normal => "Normal",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
            BmiStatus::NotAvailable => "N/A",
        }
    }

    /// Map an optional BMI value onto its band.
    ///
    /// Lower bounds are inclusive, so `18.5` is [`BmiStatus::Normal`], `25.0`
    /// is [`BmiStatus::Overweight`] and `30.0` is [`BmiStatus::Obese`].
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            None => BmiStatus::NotAvailable,
            Some(v) if v < 18.5 => BmiStatus::Underweight,
            Some(v) if v < 25.0 => BmiStatus::Normal,
            Some(v) if v < 30.0 => BmiStatus::Overweight,
            Some(_) => BmiStatus::Obese,
        }
    }
}

/// Result of a BMI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: Option<f64>,
    pub status: BmiStatus,
}

/// Compute the body mass index from height in centimetres and weight in
/// kilograms.
///
/// Non-positive or non-finite inputs yield an absent value with
/// [`BmiStatus::NotAvailable`] instead of an error.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> BmiResult {
    let value = if height_cm.is_finite() && weight_kg.is_finite() && height_cm > 0.0 && weight_kg > 0.0
    {
        let h_m = height_cm / 100.0;
        Some(weight_kg / (h_m * h_m))
    } else {
        None
    };
    BmiResult {
        value,
        status: BmiStatus::classify(value),
    }
}
