//! Interactive terminal presentation
//!
//! Two always-available surfaces: the predictive survey form and the static
//! analytics panel for the medical team. Rendering is plain string
//! building so tests can drive the whole session headlessly; the session
//! itself is generic over any `BufRead` input and `Write` output.

mod analytics;
mod form;
mod logging;
mod render;

pub use analytics::render_analytics;
pub use form::{Session, PANEL_WIDTH};
pub use logging::LogLevel;
pub use render::{render_diagnosis, render_header, rule};
