//! Thread-local context tracking for crash reports.
//!
//! Records which phase, location and time step a thread is working on.
//! Context is per thread, so it follows the work onto rayon workers when
//! each worker sets its own guards.
//!
//! Location progress belongs to one run: the calculator creates a
//! [`LocationProgress`] per run and every thread working for that run
//! tracks it with [`track_progress`]. Concurrent runs never see each
//! other's counts.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

thread_local! {
    static CURRENT_CONTEXT: RefCell<CalculationContext> =
        const { RefCell::new(CalculationContext::new()) };
    static CURRENT_PROGRESS: RefCell<Option<Arc<LocationProgress>>> =
        const { RefCell::new(None) };
}

/// What the current thread was doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationContext {
    pub phase: Option<CalculationPhase>,
    /// Index of the location in the input.
    pub location: Option<usize>,
    /// Index of the time step in the input.
    pub time_step: Option<usize>,
}

impl CalculationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            location: None,
            time_step: None,
        }
    }
}

/// Phases of a calculation; each one completes for all locations before
/// the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationPhase {
    Validation,
    Initialization,
    Calculation,
    OutputAssembly,
}

impl std::fmt::Display for CalculationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Initialization => write!(f, "initialization"),
            Self::Calculation => write!(f, "calculation"),
            Self::OutputAssembly => write!(f, "output_assembly"),
        }
    }
}

/// Restores the previous context on drop.
pub struct ContextGuard {
    previous: CalculationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(f: impl FnOnce(&mut CalculationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        f(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: CalculationPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_location(index: usize) -> ContextGuard {
    update(|ctx| {
        ctx.location = Some(index);
        ctx.time_step = None;
    })
}

#[must_use]
pub fn set_current_time_step(index: usize) -> ContextGuard {
    update(|ctx| ctx.time_step = Some(index))
}

/// Number of locations of a single run that finished their time steps.
#[derive(Debug)]
pub struct LocationProgress {
    processed: AtomicUsize,
    total: usize,
}

impl LocationProgress {
    pub fn new(total: usize) -> Self {
        Self {
            processed: AtomicUsize::new(0),
            total,
        }
    }

    /// (processed, total)
    pub fn get(&self) -> (usize, usize) {
        (self.processed.load(Ordering::Relaxed), self.total)
    }
}

/// Restores the previously tracked progress on drop.
pub struct ProgressGuard {
    previous: Option<Arc<LocationProgress>>,
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        CURRENT_PROGRESS.with(|current| {
            *current.borrow_mut() = self.previous.take();
        });
    }
}

/// Count the locations this thread finishes towards `progress`.
#[must_use]
pub fn track_progress(progress: &Arc<LocationProgress>) -> ProgressGuard {
    CURRENT_PROGRESS.with(|current| ProgressGuard {
        previous: current.borrow_mut().replace(Arc::clone(progress)),
    })
}

/// Count one finished location for the run this thread works for. Does
/// nothing when the thread tracks no run.
pub fn increment_processed() {
    CURRENT_PROGRESS.with(|current| {
        if let Some(progress) = current.borrow().as_ref() {
            progress.processed.fetch_add(1, Ordering::Relaxed);
        }
    });
}

#[must_use]
pub fn get_current_context() -> CalculationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Locations (processed, total) of the run this thread works for.
#[must_use]
pub fn get_progress() -> Option<(usize, usize)> {
    CURRENT_PROGRESS.with(|current| current.borrow().as_ref().map(|p| p.get()))
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = CalculationContext::new();
    });
}
