pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
#[cfg(feature = "native")]
pub mod native;
pub mod session;
pub mod transport;

pub use api::PredictionClient;
pub use config::ClientConfig;
pub use debounce::{Debouncer, Scheduler, timer_millis};
pub use error::ClientError;
#[cfg(feature = "native")]
pub use native::ReqwestTransport;
pub use session::{DebounceToken, Dispatch, Phase, PredictMode, Session, Ticket};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

/// Quiet period before an edit triggers an automatic prediction.
pub const DEBOUNCE_MS: u64 = 350;
