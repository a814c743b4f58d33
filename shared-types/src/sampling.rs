//! Sampling configuration edited from the sidebar sliders

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Errors from the name-keyed configuration update
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown sampling field: {0}")]
    UnknownField(String),
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },
}

/// One slider-backed field of [`SamplingConfig`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../editor-ui/assets/types/generated.ts")]
pub enum SamplingField {
    NSamples,
    LengthPrefix,
    Length,
    Temperature,
    #[serde(rename = "topk")]
    TopK,
    #[serde(rename = "topp")]
    TopP,
}

/// Slider descriptor: label, bounds and step for one field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../editor-ui/assets/types/generated.ts")]
pub struct SliderSpec {
    pub field: SamplingField,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SamplingField {
    /// Sidebar order
    pub const ALL: [SamplingField; 6] = [
        SamplingField::NSamples,
        SamplingField::LengthPrefix,
        SamplingField::Length,
        SamplingField::Temperature,
        SamplingField::TopK,
        SamplingField::TopP,
    ];

    /// Key used by the slider's `name` attribute and the update reducer
    pub fn name(self) -> &'static str {
        match self {
            SamplingField::NSamples => "nSamples",
            SamplingField::LengthPrefix => "lengthPrefix",
            SamplingField::Length => "length",
            SamplingField::Temperature => "temperature",
            SamplingField::TopK => "topk",
            SamplingField::TopP => "topp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SamplingField::NSamples => "Number samples:",
            SamplingField::LengthPrefix => "Length prefix:",
            SamplingField::Length => "Length samples:",
            SamplingField::Temperature => "Temperature:",
            SamplingField::TopK => "Top k:",
            SamplingField::TopP => "Top p:",
        }
    }

    /// `(min, max, step)`
    pub fn bounds(self) -> (f64, f64, f64) {
        match self {
            SamplingField::NSamples => (1.0, 50.0, 1.0),
            SamplingField::LengthPrefix => (50.0, 5000.0, 50.0),
            SamplingField::Length => (16.0, 1024.0, 16.0),
            SamplingField::Temperature => (0.0, 2.0, 0.1),
            // Widened from 0..=5: the default of 50 has to sit inside the
            // slider range, and the default request must stay topk=50.
            SamplingField::TopK => (0.0, 100.0, 1.0),
            SamplingField::TopP => (0.0, 2.0, 0.1),
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, SamplingField::Temperature | SamplingField::TopP)
    }

    pub fn slider(self) -> SliderSpec {
        let (min, max, step) = self.bounds();
        SliderSpec {
            field: self,
            label: self.label().to_string(),
            min,
            max,
            step,
        }
    }

    /// Parse a raw slider value and clamp it into this field's bounds.
    fn parse_value(self, raw: &str) -> Result<f64, ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            field: self.name().to_string(),
            value: raw.to_string(),
        };
        let value = raw.trim().parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        let (min, max, _) = self.bounds();
        let value = value.clamp(min, max);
        Ok(if self.is_integer() { value.round() } else { value })
    }
}

impl FromStr for SamplingField {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SamplingField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ConfigError::UnknownField(name.to_string()))
    }
}

/// Completion sampling parameters
///
/// Owned by the root component and read by the mention bridge at request
/// time. Every field stays within its [`SamplingField::bounds`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../editor-ui/assets/types/generated.ts")]
pub struct SamplingConfig {
    #[serde(rename = "nSamples")]
    pub n_samples: u32,
    #[serde(rename = "lengthPrefix")]
    pub length_prefix: u32,
    pub length: u32,
    pub temperature: f64,
    #[serde(rename = "topk")]
    pub top_k: u32,
    #[serde(rename = "topp")]
    pub top_p: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            n_samples: 5,
            length_prefix: 500,
            length: 24,
            temperature: 1.0,
            top_k: 50,
            top_p: 0.95,
        }
    }
}

impl SamplingConfig {
    pub fn get(&self, field: SamplingField) -> f64 {
        match field {
            SamplingField::NSamples => self.n_samples as f64,
            SamplingField::LengthPrefix => self.length_prefix as f64,
            SamplingField::Length => self.length as f64,
            SamplingField::Temperature => self.temperature,
            SamplingField::TopK => self.top_k as f64,
            SamplingField::TopP => self.top_p,
        }
    }

    /// Overwrite the field selected by `name` with the raw slider value.
    ///
    /// Out-of-range values are clamped. On error the config is untouched.
    pub fn update(&mut self, name: &str, raw: &str) -> Result<SamplingField, ConfigError> {
        let field = name.parse::<SamplingField>()?;
        let value = field.parse_value(raw)?;

        match field {
            SamplingField::NSamples => self.n_samples = value as u32,
            SamplingField::LengthPrefix => self.length_prefix = value as u32,
            SamplingField::Length => self.length = value as u32,
            SamplingField::Temperature => self.temperature = value,
            SamplingField::TopK => self.top_k = value as u32,
            SamplingField::TopP => self.top_p = value,
        }

        Ok(field)
    }

    pub fn is_within_bounds(&self) -> bool {
        SamplingField::ALL.into_iter().all(|field| {
            let (min, max, _) = field.bounds();
            let value = self.get(field);
            (min..=max).contains(&value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_bounds() {
        assert!(SamplingConfig::default().is_within_bounds());
    }

    #[test]
    fn default_top_k_fits_its_slider() {
        let (min, max, _) = SamplingField::TopK.bounds();
        let top_k = SamplingConfig::default().top_k as f64;
        assert_eq!(top_k, 50.0);
        assert!(min <= top_k && top_k <= max);
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in SamplingField::ALL {
            assert_eq!(field.name().parse::<SamplingField>().unwrap(), field);
        }
        assert_eq!(
            "nsamples".parse::<SamplingField>(),
            Err(ConfigError::UnknownField("nsamples".to_string()))
        );
    }

    #[test]
    fn update_only_touches_named_field() {
        let mut config = SamplingConfig::default();
        let field = config.update("temperature", "0.7").unwrap();

        assert_eq!(field, SamplingField::Temperature);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(
            config,
            SamplingConfig {
                temperature: 0.7,
                ..SamplingConfig::default()
            }
        );
    }

    #[test]
    fn update_parses_integer_sliders() {
        let mut config = SamplingConfig::default();
        config.update("nSamples", "12").unwrap();
        config.update("lengthPrefix", "1500").unwrap();
        config.update("length", "64").unwrap();
        config.update("topk", "3").unwrap();
        config.update("topp", "0.5").unwrap();

        assert_eq!(config.n_samples, 12);
        assert_eq!(config.length_prefix, 1500);
        assert_eq!(config.length, 64);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.top_p, 0.5);
    }

    #[test]
    fn update_clamps_out_of_range_values() {
        let mut config = SamplingConfig::default();
        config.update("nSamples", "0").unwrap();
        config.update("lengthPrefix", "999999").unwrap();
        config.update("temperature", "-3").unwrap();
        config.update("topp", "7.5").unwrap();

        assert_eq!(config.n_samples, 1);
        assert_eq!(config.length_prefix, 5000);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.top_p, 2.0);
        assert!(config.is_within_bounds());
    }

    #[test]
    fn update_rejects_garbage_without_mutation() {
        let mut config = SamplingConfig::default();

        let err = config.update("length", "abc").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        let err = config.update("temperature", "NaN").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        let err = config.update("seed", "1").unwrap_err();
        assert_eq!(err, ConfigError::UnknownField("seed".to_string()));

        assert_eq!(config, SamplingConfig::default());
    }

    #[test]
    fn arbitrary_slider_sequences_stay_in_bounds() {
        let raws = [
            "-1e9", "-1", "0", "0.05", "1", "2.5", "16", "49", "50", "51", "1024", "4999", "1e9",
            "inf", "", " 7 ",
        ];

        let mut config = SamplingConfig::default();
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let field = SamplingField::ALL[(seed % 6) as usize];
            let raw = raws[((seed >> 8) % raws.len() as u64) as usize];

            let _ = config.update(field.name(), raw);
            assert!(config.is_within_bounds(), "{field:?}={raw} -> {config:?}");
        }
    }

    #[test]
    fn serializes_with_slider_names() {
        let json = serde_json::to_value(SamplingConfig::default()).unwrap();
        for field in SamplingField::ALL {
            assert!(json.get(field.name()).is_some(), "missing {}", field.name());
        }
    }

    #[test]
    fn slider_specs_follow_sidebar_order() {
        let labels: Vec<String> = SamplingField::ALL
            .into_iter()
            .map(|field| field.slider().label)
            .collect();
        assert_eq!(
            labels,
            [
                "Number samples:",
                "Length prefix:",
                "Length samples:",
                "Temperature:",
                "Top k:",
                "Top p:",
            ]
        );
    }
}
