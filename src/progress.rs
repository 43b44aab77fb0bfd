// src/progress.rs
/// Lightweight progress reporting for a run (load, parse, export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes.
    fn step_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
