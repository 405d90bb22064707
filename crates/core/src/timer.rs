//! Cancellable repeating timer

/// What a timer callback wants to happen next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Callback run on every tick
pub type TickFn = Box<dyn FnMut() -> Tick>;

/// A repeating timer with explicit start and stop.
///
/// Implementations must stop firing once `stop` is called or a tick returns
/// [`Tick::Stop`], and must stop when dropped.
pub trait RepeatingTimer {
    /// Run `tick` every `period_ms` milliseconds, replacing any running schedule
    fn start(&mut self, period_ms: u32, tick: TickFn);

    /// Cancel the schedule; a no-op when not running
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}
