use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Real,
    Flag,
}

/// Slider bounds for a real-valued feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The fourteen fields the prediction service accepts, named as on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    KoiPeriod,
    KoiDuration,
    KoiDepth,
    KoiPrad,
    KoiModelSnr,
    KoiSnr,
    KoiScore,
    KoiRor,
    KoiImpact,
    KoiMaxMultEv,
    KoiFpflagSs,
    KoiFpflagCo,
    KoiFpflagNt,
    KoiFpflagEc,
}

impl Feature {
    /// Wire key, e.g. `koi_period`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn kind(self) -> FeatureKind {
        match self {
            Feature::KoiFpflagSs | Feature::KoiFpflagCo | Feature::KoiFpflagNt | Feature::KoiFpflagEc => {
                FeatureKind::Flag
            }
            _ => FeatureKind::Real,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::KoiPeriod => "koi_period (days)",
            Feature::KoiDuration => "koi_duration (hours)",
            Feature::KoiDepth => "koi_depth (ppm)",
            Feature::KoiPrad => "koi_prad (R⊕)",
            Feature::KoiModelSnr => "koi_model_snr",
            Feature::KoiSnr => "koi_snr",
            Feature::KoiScore => "koi_score",
            Feature::KoiRor => "koi_ror (Rp/R★)",
            Feature::KoiImpact => "koi_impact (b)",
            Feature::KoiMaxMultEv => "koi_max_mult_ev",
            Feature::KoiFpflagSs => "koi_fpflag_ss (stellar variability FP)",
            Feature::KoiFpflagCo => "koi_fpflag_co (centroid offset FP)",
            Feature::KoiFpflagNt => "koi_fpflag_nt (not transit-like)",
            Feature::KoiFpflagEc => "koi_fpflag_ec (eclipsing binary)",
        }
    }

    /// Editing range for real features; `None` for flags.
    pub fn range(self) -> Option<FeatureRange> {
        let (min, max, step) = match self {
            Feature::KoiPeriod => (0.05, 1000.0, 0.05),
            Feature::KoiDuration => (0.05, 30.0, 0.05),
            Feature::KoiDepth => (5.0, 100_000.0, 5.0),
            Feature::KoiPrad => (0.1, 25.0, 0.1),
            Feature::KoiModelSnr | Feature::KoiSnr => (0.0, 500.0, 0.5),
            Feature::KoiScore => (0.0, 1.0, 0.01),
            Feature::KoiRor => (0.0, 0.2, 0.001),
            Feature::KoiImpact => (0.0, 1.2, 0.01),
            Feature::KoiMaxMultEv => (0.0, 10.0, 1.0),
            _ => return None,
        };
        Some(FeatureRange { min, max, step })
    }

    /// Clamps a value into the editing range. Display only; payloads are sent unclamped.
    pub fn clamp(self, value: f64) -> f64 {
        match self.range() {
            Some(r) => value.clamp(r.min, r.max),
            None => value,
        }
    }
}

/// Body of a prediction request.
///
/// Every field is always serialized. A `None` goes out as `null`, which the
/// service reads as "unknown" and treats differently from zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturePayload {
    pub koi_period: Option<f64>,
    pub koi_duration: Option<f64>,
    pub koi_depth: Option<f64>,
    pub koi_prad: Option<f64>,
    pub koi_model_snr: Option<f64>,
    pub koi_snr: Option<f64>,
    pub koi_score: Option<f64>,
    pub koi_ror: Option<f64>,
    pub koi_impact: Option<f64>,
    pub koi_max_mult_ev: Option<f64>,
    #[serde(default, deserialize_with = "flag")]
    pub koi_fpflag_ss: Option<u8>,
    #[serde(default, deserialize_with = "flag")]
    pub koi_fpflag_co: Option<u8>,
    #[serde(default, deserialize_with = "flag")]
    pub koi_fpflag_nt: Option<u8>,
    #[serde(default, deserialize_with = "flag")]
    pub koi_fpflag_ec: Option<u8>,
}

/// Accepts any JSON number for a flag; non-zero becomes 1.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(|v| u8::from(v != 0.0)))
}

impl FeaturePayload {
    /// Starting point of the researcher dashboard.
    pub fn researcher_defaults() -> Self {
        Self {
            koi_period: Some(10.5),
            koi_duration: Some(3.2),
            koi_depth: Some(500.0),
            koi_prad: Some(1.9),
            koi_model_snr: Some(15.0),
            koi_snr: None,
            koi_score: None,
            koi_ror: Some(0.03),
            koi_impact: Some(0.2),
            koi_max_mult_ev: Some(1.0),
            koi_fpflag_ss: Some(0),
            koi_fpflag_co: Some(0),
            koi_fpflag_nt: Some(0),
            koi_fpflag_ec: Some(0),
        }
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::KoiPeriod => self.koi_period,
            Feature::KoiDuration => self.koi_duration,
            Feature::KoiDepth => self.koi_depth,
            Feature::KoiPrad => self.koi_prad,
            Feature::KoiModelSnr => self.koi_model_snr,
            Feature::KoiSnr => self.koi_snr,
            Feature::KoiScore => self.koi_score,
            Feature::KoiRor => self.koi_ror,
            Feature::KoiImpact => self.koi_impact,
            Feature::KoiMaxMultEv => self.koi_max_mult_ev,
            Feature::KoiFpflagSs => self.koi_fpflag_ss.map(f64::from),
            Feature::KoiFpflagCo => self.koi_fpflag_co.map(f64::from),
            Feature::KoiFpflagNt => self.koi_fpflag_nt.map(f64::from),
            Feature::KoiFpflagEc => self.koi_fpflag_ec.map(f64::from),
        }
    }

    /// Sets a field. Flags store 1 for any non-zero value and 0 otherwise.
    pub fn set(&mut self, feature: Feature, value: Option<f64>) {
        let flag = value.map(|v| u8::from(v != 0.0));
        match feature {
            Feature::KoiPeriod => self.koi_period = value,
            Feature::KoiDuration => self.koi_duration = value,
            Feature::KoiDepth => self.koi_depth = value,
            Feature::KoiPrad => self.koi_prad = value,
            Feature::KoiModelSnr => self.koi_model_snr = value,
            Feature::KoiSnr => self.koi_snr = value,
            Feature::KoiScore => self.koi_score = value,
            Feature::KoiRor => self.koi_ror = value,
            Feature::KoiImpact => self.koi_impact = value,
            Feature::KoiMaxMultEv => self.koi_max_mult_ev = value,
            Feature::KoiFpflagSs => self.koi_fpflag_ss = flag,
            Feature::KoiFpflagCo => self.koi_fpflag_co = flag,
            Feature::KoiFpflagNt => self.koi_fpflag_nt = flag,
            Feature::KoiFpflagEc => self.koi_fpflag_ec = flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn feature_names_match_wire_keys() {
        let json = serde_json::to_value(FeaturePayload::default()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 14);
        for feature in Feature::iter() {
            assert!(json.get(feature.name()).is_some(), "missing {}", feature);
        }
        assert_eq!(Feature::from_str("koi_max_mult_ev").unwrap(), Feature::KoiMaxMultEv);
        assert_eq!(Feature::KoiFpflagSs.to_string(), "koi_fpflag_ss");
    }

    #[test]
    fn nulls_are_serialized_not_omitted() {
        let json = serde_json::to_value(FeaturePayload::default()).unwrap();
        for feature in Feature::iter() {
            assert!(json[feature.name()].is_null());
        }
    }

    #[test]
    fn set_and_get_round_through_every_field() {
        let mut payload = FeaturePayload::default();
        for feature in Feature::iter() {
            payload.set(feature, Some(1.0));
            assert_eq!(payload.get(feature), Some(1.0));
            payload.set(feature, None);
            assert_eq!(payload.get(feature), None);
        }
    }

    #[test]
    fn flags_normalize_to_zero_or_one() {
        let mut payload = FeaturePayload::default();
        payload.set(Feature::KoiFpflagCo, Some(7.0));
        assert_eq!(payload.koi_fpflag_co, Some(1));
        payload.set(Feature::KoiFpflagCo, Some(0.0));
        assert_eq!(payload.koi_fpflag_co, Some(0));
    }

    #[test]
    fn flags_decode_from_floats_and_integers() {
        let payload: FeaturePayload = serde_json::from_str(
            r#"{"koi_fpflag_ss": 0.0, "koi_fpflag_co": 1.0, "koi_fpflag_nt": 3, "koi_fpflag_ec": null}"#,
        )
        .unwrap();
        assert_eq!(payload.koi_fpflag_ss, Some(0));
        assert_eq!(payload.koi_fpflag_co, Some(1));
        assert_eq!(payload.koi_fpflag_nt, Some(1));
        assert_eq!(payload.koi_fpflag_ec, None);
        assert_eq!(payload.koi_period, None);
    }

    #[test]
    fn only_real_features_have_ranges() {
        for feature in Feature::iter() {
            assert_eq!(feature.range().is_some(), feature.kind() == FeatureKind::Real);
        }
        assert_eq!(Feature::KoiImpact.clamp(3.0), 1.2);
        assert_eq!(Feature::KoiDepth.clamp(-1.0), 5.0);
        assert_eq!(Feature::KoiFpflagEc.clamp(4.0), 4.0);
    }
}
