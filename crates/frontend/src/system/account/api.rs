use contracts::shared::Language;
use contracts::system::account::{action_endpoint, AccountAction, AccountActionRequest, AccountActionResponse, AccountRole};

use crate::shared::http::{ApiClient, MultipartField, RequestError};

/// Deactivation, reactivation and transfer requests for both account roles
#[derive(Clone)]
pub struct AccountApi {
    client: ApiClient,
}

impl AccountApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Deactivation goes out as multipart (`reason`, optional `attachment`),
    /// the other actions as JSON
    pub async fn submit(
        &self,
        role: AccountRole,
        action: AccountAction,
        request: &AccountActionRequest,
        attachment: Option<web_sys::File>,
        lang: Language,
    ) -> Result<AccountActionResponse, RequestError> {
        let path = action_endpoint(role, action);
        let response: AccountActionResponse = if action.accepts_attachment() {
            let mut fields = vec![MultipartField::text("reason", request.reason.clone())];
            if let Some(file) = attachment {
                fields.push(MultipartField::file("attachment", file));
            }
            self.client.post_multipart(&path, fields, lang).await?
        } else {
            self.client.post_data(&path, request, lang).await?
        };
        log::info!("{} {} accepted", role.as_path(), action.as_path());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use crate::shared::http::{MultipartValue, RequestBody};
    use crate::shared::loading::LoadingHandle;
    use contracts::system::account::{WizardOutcome, WizardState};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn api(mock: &Rc<MockTransport>) -> AccountApi {
        AccountApi::new(ApiClient::new(mock.clone(), "http://api.test", LoadingHandle::detached()))
    }

    #[test]
    fn test_deactivate_is_multipart() {
        let mock = Rc::new(MockTransport::new().respond(
            200,
            json!({"data": {"message": "Request received", "role": "insighter", "action": "deactivate"}}),
        ));
        let request = AccountActionRequest { reason: "Leaving".into() };
        let response = block_on(api(&mock).submit(
            AccountRole::Insighter,
            AccountAction::Deactivate,
            &request,
            None,
            Language::En,
        ))
        .unwrap();
        assert_eq!(response.message, "Request received");

        let sent = mock.request(0);
        assert_eq!(sent.url, "http://api.test/api/account/insighter/deactivate");
        assert_eq!(sent.header("Content-Type"), None);
        match sent.body {
            RequestBody::Multipart(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].name, "reason");
                assert!(matches!(&fields[0].value, MultipartValue::Text(text) if text == "Leaving"));
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_transfer_is_json() {
        let mock = Rc::new(MockTransport::new().respond(
            200,
            json!({"data": {"message": "Transfer requested", "role": "company", "action": "transfer"}}),
        ));
        let request = AccountActionRequest { reason: "Going solo".into() };
        block_on(api(&mock).submit(AccountRole::Company, AccountAction::Transfer, &request, None, Language::Ar)).unwrap();

        let sent = mock.request(0);
        assert_eq!(sent.url, "http://api.test/api/account/company/transfer");
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert!(matches!(sent.body, RequestBody::Json(ref body) if body.contains("Going solo")));
    }

    #[test]
    fn test_wizard_failure_keeps_server_message() {
        let mock = Rc::new(MockTransport::new().respond(
            422,
            json!({"message": "The given data was invalid.", "errors": {"reason": ["The reason field is required."]}}),
        ));
        let mut wizard = WizardState::new(AccountRole::Company, AccountAction::Reactivate);
        wizard.set_reason("back".into());
        let request = wizard.begin_submit().unwrap();

        let result = block_on(api(&mock).submit(wizard.role, wizard.action, &request, None, Language::En));
        wizard.finish(result.map(|r| r.message).map_err(|e| e.summary()));

        assert_eq!(wizard.outcome, Some(WizardOutcome::Failed("The reason field is required.".into())));
        assert!(!wizard.succeeded());
    }
}
