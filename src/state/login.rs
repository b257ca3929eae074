//! Two-step OTP login flow state.
//!
//! DESIGN
//! ======
//! The flow is a small state machine rather than ad hoc flags: two steps,
//! one forward edge taken strictly after a successful request-OTP call,
//! and an explicit reset edge back. Verify failures do not transition, so
//! a mistyped code can be corrected and resubmitted without requesting a
//! new OTP.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Which input the login page is waiting on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    /// Waiting for an email address or phone number.
    #[default]
    AwaitingIdentifier,
    /// An OTP was issued for the stored identifier; waiting for the code.
    AwaitingCode,
}

/// Transient login-page state. Replaced by a session on success.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub step: LoginStep,
    pub identifier: String,
    pub code: String,
}

impl LoginFlow {
    /// Advance to the code step for `identifier`. Called only after the
    /// request-OTP call succeeded.
    pub fn code_requested(&mut self, identifier: String) {
        self.identifier = identifier;
        self.step = LoginStep::AwaitingCode;
        self.code.clear();
    }

    /// Return to the identifier step, discarding any entered code.
    pub fn reset(&mut self) {
        self.step = LoginStep::AwaitingIdentifier;
        self.code.clear();
    }
}
