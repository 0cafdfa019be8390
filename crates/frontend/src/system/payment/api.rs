use contracts::shared::Language;
use contracts::system::payment::{ManualAccount, PaymentAccount, StripeAccount};

use crate::shared::http::{ApiClient, RequestError};

const STRIPE_ACCOUNT: &str = "/api/payment/stripe/account";
const MANUAL_ACCOUNT: &str = "/api/payment/manual/account";

/// 404 means "nothing configured here", not a failure
fn optional<T>(result: Result<T, RequestError>) -> Result<Option<T>, RequestError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Clone)]
pub struct PaymentApi {
    client: ApiClient,
}

impl PaymentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Stripe account if there is one, otherwise the manual bank account
    pub async fn account(&self, lang: Language) -> Result<PaymentAccount, RequestError> {
        let stripe = optional(self.client.get_data::<StripeAccount>(STRIPE_ACCOUNT, lang).await)?;
        if let Some(account) = stripe {
            return Ok(PaymentAccount::Stripe(account));
        }

        let manual = optional(self.client.get_data::<ManualAccount>(MANUAL_ACCOUNT, lang).await)?;
        Ok(manual.map(PaymentAccount::Manual).unwrap_or(PaymentAccount::NotConfigured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use crate::shared::loading::LoadingHandle;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn api(mock: &Rc<MockTransport>) -> PaymentApi {
        PaymentApi::new(ApiClient::new(mock.clone(), "http://api.test", LoadingHandle::detached()))
    }

    #[test]
    fn test_stripe_found_skips_manual() {
        let mock = Rc::new(MockTransport::new().respond(
            200,
            json!({"data": {"account_id": "acct_1", "country": "SA", "charges_enabled": true}}),
        ));
        let account = block_on(api(&mock).account(Language::En)).unwrap();
        assert!(matches!(account, PaymentAccount::Stripe(ref s) if s.account_id == "acct_1" && !s.payouts_enabled));
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_falls_back_to_manual() {
        let mock = Rc::new(
            MockTransport::new()
                .respond(404, json!({"message": "Not found"}))
                .respond(200, json!({"data": {"account_holder": "Acme", "bank_name": "SNB", "iban": "SA0380000000608010167519"}})),
        );
        let account = block_on(api(&mock).account(Language::En)).unwrap();
        assert!(matches!(account, PaymentAccount::Manual(ref m) if m.bank_name == "SNB"));
        assert_eq!(mock.request(1).url, "http://api.test/api/payment/manual/account");
    }

    #[test]
    fn test_both_missing_is_not_configured() {
        let mock = Rc::new(MockTransport::new().respond(404, json!({})).respond(404, json!({})));
        assert_eq!(block_on(api(&mock).account(Language::En)).unwrap(), PaymentAccount::NotConfigured);
    }

    #[test]
    fn test_other_failures_surface() {
        let mock = Rc::new(MockTransport::new().respond(500, json!({"message": "boom"})));
        let err = block_on(api(&mock).account(Language::En)).unwrap_err();
        assert_eq!(err, RequestError::Status { status: 500, message: "boom".into() });
        assert_eq!(mock.request_count(), 1);
    }
}
