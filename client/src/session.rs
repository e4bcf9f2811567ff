use log::debug;
use shared::{DatasetRecord, Feature, FeaturePayload, ModelKind, PredictionResult, project};

use crate::error::ClientError;

/// Maximum number of catalog rows offered by [`Session::filtered`].
pub const MAX_LISTED: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Idle,
    PendingPredict,
    Predicting,
}

/// Whether edits schedule a debounced prediction or wait for an explicit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictMode {
    Auto,
    Manual,
}

/// Identifies an armed debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Identifies a dispatched prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A prediction the caller should now send.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub payload: FeaturePayload,
    pub model: ModelKind,
}

/// Request sequencing for one editing session.
///
/// Owns the catalog, the current selection and the editable payload, and
/// decides which prediction responses may reach the display. Only the most
/// recently dispatched request can apply its result. A selection change
/// supersedes requests already in flight; in [`PredictMode::Auto`] so does
/// any edit or model change. In [`PredictMode::Manual`] only a new dispatch does.
#[derive(Debug, Clone)]
pub struct Session {
    mode: PredictMode,
    phase: Phase,
    model: ModelKind,
    catalog: Vec<DatasetRecord>,
    catalog_error: Option<String>,
    selected: Option<i64>,
    query: String,
    payload: Option<FeaturePayload>,
    result: Option<PredictionResult>,
    error: Option<String>,
    next_id: u64,
    armed: Option<u64>,
    latest: Option<u64>,
}

impl Session {
    fn with(mode: PredictMode, phase: Phase, payload: Option<FeaturePayload>) -> Self {
        Self {
            mode,
            phase,
            model: ModelKind::default(),
            catalog: Vec::new(),
            catalog_error: None,
            selected: None,
            query: String::new(),
            payload,
            result: None,
            error: None,
            next_id: 0,
            armed: None,
            latest: None,
        }
    }

    /// Catalog browser with auto-predict. Waits for [`Session::catalog_loaded`].
    pub fn explorer() -> Self {
        Self::with(PredictMode::Auto, Phase::Uninitialized, None)
    }

    /// Free-form dashboard seeded with default values and manual prediction.
    pub fn researcher() -> Self {
        Self::with(
            PredictMode::Manual,
            Phase::Idle,
            Some(FeaturePayload::researcher_defaults()),
        )
    }

    pub fn mode(&self) -> PredictMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Predicting
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn catalog(&self) -> &[DatasetRecord] {
        &self.catalog
    }

    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    pub fn selected(&self) -> Option<&DatasetRecord> {
        let kepid = self.selected?;
        self.catalog.iter().find(|r| r.kepid == kepid)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn payload(&self) -> Option<&FeaturePayload> {
        self.payload.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Stores the catalog and seeds the selection from its first record.
    pub fn catalog_loaded(&mut self, records: Vec<DatasetRecord>) {
        self.catalog = records;
        self.catalog_error = None;
        self.phase = Phase::Idle;
        match self.catalog.first().map(|r| r.kepid) {
            Some(kepid) => {
                self.select(kepid);
            }
            None => {
                self.selected = None;
                self.payload = None;
            }
        }
    }

    /// Both the service and the snapshot failed: empty catalog, no selection.
    pub fn catalog_failed(&mut self, err: &ClientError) {
        self.catalog.clear();
        self.catalog_error = Some(err.to_string());
        self.selected = None;
        self.payload = None;
        self.armed = None;
        self.latest = None;
        self.phase = Phase::Idle;
    }

    /// Switches to another catalog entry. Clears the shown result and error
    /// and discards any pending or in-flight prediction.
    pub fn select(&mut self, kepid: i64) -> bool {
        let Some(record) = self.catalog.iter().find(|r| r.kepid == kepid) else {
            return false;
        };
        self.payload = Some(project(record));
        self.selected = Some(kepid);
        self.result = None;
        self.error = None;
        self.armed = None;
        self.latest = None;
        self.phase = Phase::Idle;
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn filtered(&self) -> Vec<&DatasetRecord> {
        self.catalog
            .iter()
            .filter(|r| r.matches(&self.query))
            .take(MAX_LISTED)
            .collect()
    }

    pub fn set_model(&mut self, model: ModelKind) {
        if self.model != model {
            self.model = model;
            if self.mode == PredictMode::Auto {
                self.supersede_in_flight();
            }
        }
    }

    /// Applies an edit to the payload.
    ///
    /// In [`PredictMode::Auto`] this arms a new debounce timer and returns its
    /// token; the caller schedules it and reports back through [`Session::fire`].
    /// Returns `None` when nothing is selected or the session is manual.
    pub fn edit(&mut self, feature: Feature, value: Option<f64>) -> Option<DebounceToken> {
        let payload = self.payload.as_mut()?;
        payload.set(feature, value);

        match self.mode {
            PredictMode::Auto => {
                self.supersede_in_flight();
                let id = self.next_id();
                self.armed = Some(id);
                self.phase = Phase::PendingPredict;
                Some(DebounceToken(id))
            }
            PredictMode::Manual => None,
        }
    }

    /// Debounce timer elapsed. Dispatches only if `token` is still the armed one.
    pub fn fire(&mut self, token: DebounceToken) -> Option<Dispatch> {
        if self.armed != Some(token.0) {
            debug!("Ignoring superseded debounce timer {:?}", token);
            return None;
        }
        self.armed = None;
        self.dispatch()
    }

    /// Dispatches immediately, disarming any pending debounce timer.
    pub fn predict_now(&mut self) -> Option<Dispatch> {
        self.armed = None;
        self.dispatch()
    }

    /// Applies a prediction outcome if `ticket` is the latest dispatch.
    ///
    /// A failure keeps the previous result on screen and records the error.
    /// Returns whether the outcome was applied.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<PredictionResult, ClientError>) -> bool {
        if self.latest != Some(ticket.0) {
            debug!("Discarding stale prediction response for {:?}", ticket);
            return false;
        }
        self.latest = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        if self.phase == Phase::Predicting {
            self.phase = Phase::Idle;
        }
        true
    }

    pub fn clear_result(&mut self) {
        self.result = None;
        self.error = None;
    }

    fn dispatch(&mut self) -> Option<Dispatch> {
        let payload = self.payload.clone()?;
        let id = self.next_id();
        self.latest = Some(id);
        self.phase = Phase::Predicting;
        Some(Dispatch { ticket: Ticket(id), payload, model: self.model })
    }

    fn supersede_in_flight(&mut self) {
        self.latest = None;
        if self.phase == Phase::Predicting {
            self.phase = Phase::Idle;
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
