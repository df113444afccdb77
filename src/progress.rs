//! Progress reporting and cooperative cancellation for long exports.
//!
//! An export is bracketed by [`Progress::init`]/[`Progress::end`]; each major
//! step inside it by [`Progress::begin_step`]/[`Progress::end_step`]. Any call
//! returning [`ControlFlow::Break`] asks the exporter to stop; the exporter
//! checks every return value and unwinds, but still closes every bracket it
//! opened.

use std::ops::ControlFlow;

use crate::mesh_error::MeshExportError;

/// Progress collaborator driven by exporters.
pub trait Progress {
    /// Start an export made of `major_steps` steps.
    fn init(&mut self, _major_steps: usize) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Start a step made of `units` units of work.
    fn begin_step(&mut self, _units: usize) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// One unit of work done.
    fn increment(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Close the step opened by the last `begin_step`.
    fn end_step(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Close the export; called exactly once, whatever the outcome.
    fn end(&mut self, _success: bool) {}
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn init(&mut self, major_steps: usize) -> ControlFlow<()> {
        (**self).init(major_steps)
    }

    fn begin_step(&mut self, units: usize) -> ControlFlow<()> {
        (**self).begin_step(units)
    }

    fn increment(&mut self) -> ControlFlow<()> {
        (**self).increment()
    }

    fn end_step(&mut self) -> ControlFlow<()> {
        (**self).end_step()
    }

    fn end(&mut self, success: bool) {
        (**self).end(success)
    }
}

/// Maps a progress signal onto the export error channel.
pub(crate) fn proceed(flow: ControlFlow<()>) -> Result<(), MeshExportError> {
    match flow {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(()) => Err(MeshExportError::Cancelled),
    }
}

/// Progress sink that never cancels and reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl Progress for NullProgress {}

/// Progress sink that reports through the `log` facade.
///
/// Step boundaries are logged at `debug`, the overall result at `info`.
#[derive(Debug, Default, Clone)]
pub struct LogProgress {
    total_steps: usize,
    step: usize,
    step_units: usize,
    done_units: usize,
}

impl LogProgress {
    /// Fresh reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Major steps completed so far.
    pub fn steps_done(&self) -> usize {
        self.step
    }
}

impl Progress for LogProgress {
    fn init(&mut self, major_steps: usize) -> ControlFlow<()> {
        self.total_steps = major_steps;
        self.step = 0;
        log::info!("export started: {major_steps} major steps");
        ControlFlow::Continue(())
    }

    fn begin_step(&mut self, units: usize) -> ControlFlow<()> {
        self.step_units = units;
        self.done_units = 0;
        log::debug!(
            "step {}/{}: {units} units",
            self.step + 1,
            self.total_steps
        );
        ControlFlow::Continue(())
    }

    fn increment(&mut self) -> ControlFlow<()> {
        self.done_units += 1;
        log::trace!("{}/{}", self.done_units, self.step_units);
        ControlFlow::Continue(())
    }

    fn end_step(&mut self) -> ControlFlow<()> {
        self.step += 1;
        log::debug!(
            "step {}/{} finished after {} units",
            self.step,
            self.total_steps,
            self.done_units
        );
        ControlFlow::Continue(())
    }

    fn end(&mut self, success: bool) {
        if success {
            log::info!("export finished ({} steps)", self.step);
        } else {
            log::warn!("export aborted after {} of {} steps", self.step, self.total_steps);
        }
    }
}
