#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TimerState {
    Running, // Accumulating time and firing every interval
    Stopped, // Cancelled, ticks are ignored until resumed
}
