use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripeAccount {
    pub account_id: String,
    pub country: String,
    #[serde(default)]
    pub charges_enabled: bool,
    #[serde(default)]
    pub payouts_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAccount {
    pub account_holder: String,
    pub bank_name: String,
    pub iban: String,
    #[serde(default)]
    pub swift: Option<String>,
}

/// Outcome of the two-step payment account lookup (Stripe first, manual second)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentAccount {
    Stripe(StripeAccount),
    Manual(ManualAccount),
    NotConfigured,
}

impl ManualAccount {
    /// IBAN with everything but the last four characters hidden
    pub fn masked_iban(&self) -> String {
        let compact: String = self.iban.chars().filter(|c| !c.is_whitespace()).collect();
        let visible = compact.chars().count().saturating_sub(4);
        compact
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { '•' } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_iban() {
        let account = ManualAccount {
            account_holder: "Acme".into(),
            bank_name: "Bank".into(),
            iban: "SA03 8000 0000 6080 1016 7519".into(),
            swift: None,
        };
        let masked = account.masked_iban();
        assert!(masked.ends_with("7519"));
        assert_eq!(masked.chars().count(), 24);
    }
}
