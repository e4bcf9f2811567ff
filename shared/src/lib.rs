mod display;
mod payload;
mod prediction;
mod record;

pub use display::{PLACEHOLDER, fmt, format_confidence};
pub use payload::{Feature, FeatureKind, FeaturePayload, FeatureRange};
pub use prediction::{ModelKind, PredictionResult};
pub use record::{DatasetRecord, project};
