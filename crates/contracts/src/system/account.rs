//! Account lifecycle requests (deactivate, reactivate, transfer).
//!
//! Every flow is the same two-step wizard: collect a reason, submit, show the
//! outcome. The endpoint depends on the role of the signed-in account.

use serde::{Deserialize, Serialize};

pub const REASON_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Insighter,
    Company,
}

impl AccountRole {
    pub fn as_path(&self) -> &'static str {
        match self {
            AccountRole::Insighter => "insighter",
            AccountRole::Company => "company",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "insighter" => Some(AccountRole::Insighter),
            "company" => Some(AccountRole::Company),
            _ => None,
        }
    }

    /// Role the account ends up with after a transfer
    pub fn transfer_target(&self) -> Self {
        match self {
            AccountRole::Insighter => AccountRole::Company,
            AccountRole::Company => AccountRole::Insighter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountAction {
    Deactivate,
    Reactivate,
    Transfer,
}

impl AccountAction {
    pub fn as_path(&self) -> &'static str {
        match self {
            AccountAction::Deactivate => "deactivate",
            AccountAction::Reactivate => "reactivate",
            AccountAction::Transfer => "transfer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "deactivate" => Some(AccountAction::Deactivate),
            "reactivate" => Some(AccountAction::Reactivate),
            "transfer" => Some(AccountAction::Transfer),
            _ => None,
        }
    }

    /// Deactivation may carry a supporting document, so it goes as multipart
    pub fn accepts_attachment(&self) -> bool {
        matches!(self, AccountAction::Deactivate)
    }
}

/// `POST /api/account/{role}/{action}`
pub fn action_endpoint(role: AccountRole, action: AccountAction) -> String {
    format!("/api/account/{}/{}", role.as_path(), action.as_path())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountActionRequest {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountActionResponse {
    pub message: String,
    pub role: AccountRole,
    pub action: AccountAction,
    #[serde(default)]
    pub attachment: Option<String>,
}

/// Checks the free-text reason; returns the user-facing problem
pub fn validate_reason(reason: &str) -> Result<(), &'static str> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err("Please tell us why.");
    }
    if trimmed.chars().count() > REASON_MAX_CHARS {
        return Err("The reason may not be greater than 1000 characters.");
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Reason,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Success(String),
    Failed(String),
}

/// State of one lifecycle wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub role: AccountRole,
    pub action: AccountAction,
    pub step: WizardStep,
    pub reason: String,
    pub submitting: bool,
    pub outcome: Option<WizardOutcome>,
}

impl WizardState {
    pub fn new(role: AccountRole, action: AccountAction) -> Self {
        Self {
            role,
            action,
            step: WizardStep::Reason,
            reason: String::new(),
            submitting: false,
            outcome: None,
        }
    }

    pub fn endpoint(&self) -> String {
        action_endpoint(self.role, self.action)
    }

    pub fn set_reason(&mut self, reason: String) {
        if self.step == WizardStep::Reason && !self.submitting {
            self.reason = reason;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Reason && !self.submitting && validate_reason(&self.reason).is_ok()
    }

    /// Moves into the submitting state and hands out the request body.
    /// A second call while a request is in flight is rejected.
    pub fn begin_submit(&mut self) -> Result<AccountActionRequest, String> {
        if self.step != WizardStep::Reason {
            return Err("The request was already sent.".to_string());
        }
        if self.submitting {
            return Err("The request is being sent.".to_string());
        }
        validate_reason(&self.reason).map_err(str::to_string)?;
        self.submitting = true;
        Ok(AccountActionRequest {
            reason: self.reason.trim().to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<String, String>) {
        self.submitting = false;
        self.step = WizardStep::Result;
        self.outcome = Some(match result {
            Ok(message) => WizardOutcome::Success(message),
            Err(message) => WizardOutcome::Failed(message),
        });
    }

    /// Back to the reason step after a failure, keeping the typed reason
    pub fn retry(&mut self) {
        if matches!(self.outcome, Some(WizardOutcome::Failed(_))) {
            self.step = WizardStep::Reason;
            self.outcome = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.role, self.action);
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Some(WizardOutcome::Success(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_by_role() {
        assert_eq!(
            action_endpoint(AccountRole::Insighter, AccountAction::Deactivate),
            "/api/account/insighter/deactivate"
        );
        assert_eq!(
            action_endpoint(AccountRole::Company, AccountAction::Transfer),
            "/api/account/company/transfer"
        );
        assert_eq!(AccountRole::Company.transfer_target(), AccountRole::Insighter);
    }

    #[test]
    fn test_blank_reason_is_rejected() {
        let mut wizard = WizardState::new(AccountRole::Company, AccountAction::Deactivate);
        wizard.set_reason("   ".into());
        assert!(!wizard.can_submit());
        assert!(wizard.begin_submit().is_err());
        assert!(!wizard.submitting);
    }

    #[test]
    fn test_success_flow() {
        let mut wizard = WizardState::new(AccountRole::Insighter, AccountAction::Reactivate);
        wizard.set_reason("  Back from leave ".into());
        let request = wizard.begin_submit().unwrap();
        assert_eq!(request.reason, "Back from leave");
        assert!(wizard.submitting);
        assert!(wizard.begin_submit().is_err());

        wizard.finish(Ok("Account reactivated".into()));
        assert_eq!(wizard.step, WizardStep::Result);
        assert!(wizard.succeeded());

        // no edits once finished
        wizard.set_reason("changed".into());
        assert_eq!(wizard.reason, "  Back from leave ");

        wizard.reset();
        assert_eq!(wizard.step, WizardStep::Reason);
        assert!(wizard.reason.is_empty());
    }

    #[test]
    fn test_retry_after_failure_keeps_reason() {
        let mut wizard = WizardState::new(AccountRole::Company, AccountAction::Transfer);
        wizard.set_reason("Switching to personal".into());
        wizard.begin_submit().unwrap();
        wizard.finish(Err("Server unavailable".into()));
        assert_eq!(wizard.outcome, Some(WizardOutcome::Failed("Server unavailable".into())));

        wizard.retry();
        assert_eq!(wizard.step, WizardStep::Reason);
        assert_eq!(wizard.reason, "Switching to personal");
        assert!(wizard.can_submit());
    }
}
