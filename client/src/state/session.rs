#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state tracking whether the visitor has signed in.
///
/// Sign-in here is a plain boolean toggle; account handling lives outside
/// this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
}

impl SessionState {
    /// Mark the visitor as signed in.
    pub fn log_in(&mut self) {
        self.logged_in = true;
    }
}
