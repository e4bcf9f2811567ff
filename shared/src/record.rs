use serde::{Deserialize, Serialize};

use crate::payload::FeaturePayload;

/// One catalog entry. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub kepid: i64,
    #[serde(default)]
    pub kepoi_name: Option<String>,
    #[serde(default)]
    pub koi_disposition: Option<String>,
    #[serde(flatten)]
    pub features: FeaturePayload,
}

impl DatasetRecord {
    pub fn display_name(&self) -> String {
        match &self.kepoi_name {
            Some(name) => name.clone(),
            None => format!("KepID {}", self.kepid),
        }
    }

    /// Case-insensitive match on the kepid digits or the KOI name.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.kepid.to_string().contains(&q)
            || self
                .kepoi_name
                .as_deref()
                .map(|name| name.to_lowercase().contains(&q))
                .unwrap_or(false)
    }
}

/// Seeds an editable payload from a catalog entry. Absent fields stay null.
pub fn project(record: &DatasetRecord) -> FeaturePayload {
    record.features.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sparse_record() -> DatasetRecord {
        serde_json::from_value(json!({
            "kepid": 10797460,
            "kepoi_name": "K00752.01",
            "koi_disposition": "CONFIRMED",
            "koi_period": 9.488,
            "koi_fpflag_nt": 0,
            "koi_teq": 793
        }))
        .unwrap()
    }

    #[test]
    fn projection_keeps_shared_fields_and_nulls_the_rest() {
        let payload = project(&sparse_record());
        assert_eq!(payload.koi_period, Some(9.488));
        assert_eq!(payload.koi_fpflag_nt, Some(0));
        assert_eq!(payload.koi_depth, None);
        assert_eq!(payload.koi_fpflag_ec, None);

        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 14);
        assert!(!obj.contains_key("kepid"));
        assert!(!obj.contains_key("kepoi_name"));
        assert!(!obj.contains_key("koi_disposition"));
        assert!(!obj.contains_key("koi_teq"));
        assert!(obj["koi_depth"].is_null());
    }

    #[test]
    fn float_flags_decode_inside_a_record() {
        let record: DatasetRecord = serde_json::from_value(json!({
            "kepid": 1,
            "koi_fpflag_ss": 0.0,
            "koi_fpflag_co": 1.0
        }))
        .unwrap();
        assert_eq!(record.features.koi_fpflag_ss, Some(0));
        assert_eq!(record.features.koi_fpflag_co, Some(1));
        assert_eq!(record.features.koi_fpflag_nt, None);
    }

    #[test]
    fn kepid_is_required() {
        let parsed: Result<DatasetRecord, _> =
            serde_json::from_value(json!({ "kepoi_name": "K00001.01" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn display_name_falls_back_to_kepid() {
        let mut record = sparse_record();
        assert_eq!(record.display_name(), "K00752.01");
        record.kepoi_name = None;
        assert_eq!(record.display_name(), "KepID 10797460");
    }

    #[test]
    fn search_matches_kepid_or_name() {
        let record = sparse_record();
        assert!(record.matches(""));
        assert!(record.matches("  "));
        assert!(record.matches("797"));
        assert!(record.matches("k00752"));
        assert!(record.matches(" K00752.01 "));
        assert!(!record.matches("K00753"));
    }
}
