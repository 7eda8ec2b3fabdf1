//! Digital input line abstraction

/// One monitored digital input
///
/// Implementations read the instantaneous hardware level for a single
/// line; the poller and the edge path both sample through this.
pub trait InputLine {
    /// Instantaneous logical level (true = high)
    fn read_level(&self) -> bool;

    /// Whether the line currently reads low
    fn is_low(&self) -> bool {
        !self.read_level()
    }
}

// Blanket implementation so collections of references can be sampled
impl<T: InputLine + ?Sized> InputLine for &T {
    fn read_level(&self) -> bool {
        (**self).read_level()
    }
}
