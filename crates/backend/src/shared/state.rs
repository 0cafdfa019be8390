//! Shared application state handed to every handler.
//!
//! Everything lives in memory; a restart starts from the seed data again.

use std::sync::Arc;

use contracts::domain::a001_department::aggregate::Department;
use contracts::domain::a002_role::aggregate::Role;
use contracts::domain::a003_tag::aggregate::Tag;
use contracts::domain::a004_hs_code::aggregate::HsCode;
use contracts::domain::a005_isic_code::aggregate::IsicCode;
use contracts::domain::a006_consulting_field::aggregate::ConsultingField;
use contracts::domain::a007_staff_member::aggregate::StaffMember;

use crate::domain::common::{ReferenceStore, StoredReference};
use crate::domain::{
    a001_department, a002_role, a003_tag, a004_hs_code, a005_isic_code, a006_consulting_field, a007_staff_member,
};
use crate::system::notifications::NotificationStore;
use crate::system::payment::PaymentSettings;
use crate::system::profile::PhotoStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub departments: Arc<ReferenceStore<Department>>,
    pub roles: Arc<ReferenceStore<Role>>,
    pub tags: Arc<ReferenceStore<Tag>>,
    pub hs_codes: Arc<ReferenceStore<HsCode>>,
    pub isic_codes: Arc<ReferenceStore<IsicCode>>,
    pub consulting_fields: Arc<ReferenceStore<ConsultingField>>,
    /// Read-only
    pub staff: Arc<Vec<StaffMember>>,
    pub notifications: Arc<NotificationStore>,
    pub payment: Arc<PaymentSettings>,
    pub photos: Arc<PhotoStore>,
}

/// Picks the table of one reference resource out of the state
pub trait HasStore<E: StoredReference> {
    fn store(&self) -> &ReferenceStore<E>;
}

macro_rules! has_store {
    ($entity:ty, $field:ident) => {
        impl HasStore<$entity> for AppState {
            fn store(&self) -> &ReferenceStore<$entity> {
                &self.$field
            }
        }
    };
}

has_store!(Department, departments);
has_store!(Role, roles);
has_store!(Tag, tags);
has_store!(HsCode, hs_codes);
has_store!(IsicCode, isic_codes);
has_store!(ConsultingField, consulting_fields);

impl AppState {
    /// Empty state without notifications or payment accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// State filled with the development sample data
    pub async fn seeded() -> Self {
        let state = Self {
            payment: Arc::new(PaymentSettings::sample()),
            staff: Arc::new(a007_staff_member::sample()),
            ..Self::default()
        };

        a001_department::seed(&state.departments).await;
        a002_role::seed(&state.roles).await;
        a003_tag::seed(&state.tags).await;
        a004_hs_code::seed(&state.hs_codes).await;
        a005_isic_code::seed(&state.isic_codes).await;
        a006_consulting_field::seed(&state.consulting_fields).await;
        state.notifications.seed().await;

        tracing::info!(
            "Seeded {} departments, {} ISIC codes, {} notifications",
            state.departments.len().await,
            state.isic_codes.len().await,
            state.notifications.len().await
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_trees_are_consistent() {
        let state = AppState::seeded().await;
        let codes = state.isic_codes.read().await;
        assert!(!codes.is_empty());
        for code in codes.iter() {
            if let Some(parent) = code.parent_id {
                assert!(codes.iter().any(|c| c.id == parent), "dangling parent {parent}");
            }
        }
        assert!(state.payment.manual.is_some());
    }

    #[tokio::test]
    async fn test_new_state_is_empty() {
        let state = AppState::new();
        assert_eq!(HasStore::<Tag>::store(&state).len().await, 0);
        assert_eq!(state.notifications.len().await, 0);
    }
}
