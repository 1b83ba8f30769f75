use dioxus::prelude::*;

/// Busy flag for a submitting control.
///
/// While a request started by the control is running, further activations
/// are ignored and the control renders disabled.
#[derive(Clone, Copy, PartialEq)]
pub struct Busy(Signal<bool>);

pub fn use_busy() -> Busy {
    Busy(use_signal(|| false))
}

impl Busy {
    pub fn get(&self) -> bool {
        (self.0)()
    }

    /// Mark the control busy. Returns `false`, changing nothing, when it
    /// already was.
    pub fn begin(&self) -> bool {
        let mut flag = self.0;
        if *flag.peek() {
            return false;
        }
        flag.set(true);
        true
    }

    /// Closure that clears the flag, for a controller's `release`.
    pub fn release(self) -> impl FnOnce() {
        move || {
            let mut flag = self.0;
            flag.set(false);
        }
    }
}
