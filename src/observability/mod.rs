//! Crash reports and calculation context tracking.
//!
//! Install the panic hook at application startup:
//!
//! ```ignore
//! use dike_revetment::observability::install_panic_hook;
//!
//! fn main() {
//!     install_panic_hook();
//!     // ...
//! }
//! ```
//!
//! The calculator records what it is working on; a panic in a mechanism
//! then reports the phase, location and time step:
//!
//! ```ignore
//! use dike_revetment::observability::{set_current_location, set_phase, CalculationPhase};
//!
//! let _phase = set_phase(CalculationPhase::Calculation);
//! for (index, location) in locations.iter().enumerate() {
//!     let _location = set_current_location(index);
//!     // ...
//! }
//! ```

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context,
    set_current_location, set_current_time_step, set_phase, track_progress, CalculationContext,
    CalculationPhase, ContextGuard, LocationProgress, ProgressGuard,
};
pub use logging::init_tracing;
pub use panic_hook::install_panic_hook;
