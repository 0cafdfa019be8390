//! Service registry built once by the composition root.
//!
//! Every service shares one `ApiClient`, hence one transport, one API base
//! and one loading flag. Screens get the registry from context and clone
//! the service they need into their async tasks.

use contracts::domain::a001_department::aggregate::Department;
use contracts::domain::a002_role::aggregate::Role;
use contracts::domain::a003_tag::aggregate::Tag;
use contracts::domain::a004_hs_code::aggregate::HsCode;
use contracts::domain::a005_isic_code::aggregate::IsicCode;
use contracts::domain::a006_consulting_field::aggregate::ConsultingField;
use leptos::prelude::*;

use crate::domain::a007_staff_member::StaffApi;
use crate::shared::http::ApiClient;
use crate::shared::reference::ReferenceDataService;
use crate::system::account::AccountApi;
use crate::system::notifications::NotificationsApi;
use crate::system::payment::PaymentApi;
use crate::system::profile::ProfileApi;

#[derive(Clone)]
pub struct Services {
    pub departments: ReferenceDataService<Department>,
    pub roles: ReferenceDataService<Role>,
    pub tags: ReferenceDataService<Tag>,
    pub hs_codes: ReferenceDataService<HsCode>,
    pub isic_codes: ReferenceDataService<IsicCode>,
    pub consulting_fields: ReferenceDataService<ConsultingField>,
    pub staff: StaffApi,
    pub notifications: NotificationsApi,
    pub account: AccountApi,
    pub payment: PaymentApi,
    pub profile: ProfileApi,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self {
            departments: ReferenceDataService::new(client.clone()),
            roles: ReferenceDataService::new(client.clone()),
            tags: ReferenceDataService::new(client.clone()),
            hs_codes: ReferenceDataService::new(client.clone()),
            isic_codes: ReferenceDataService::new(client.clone()),
            consulting_fields: ReferenceDataService::new(client.clone()),
            staff: StaffApi::new(client.clone()),
            notifications: NotificationsApi::new(client.clone()),
            account: AccountApi::new(client.clone()),
            payment: PaymentApi::new(client.clone()),
            profile: ProfileApi::new(client),
        }
    }
}

/// Context handle; the services hold `Rc`s and stay on the main thread
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

pub fn provide_services(services: Services) -> ServicesHandle {
    let handle = StoredValue::new_local(services);
    provide_context(handle);
    handle
}

pub fn use_services() -> ServicesHandle {
    use_context::<ServicesHandle>().expect("Services not provided")
}

/// Stores one service of the registry for a screen
pub fn select<T: 'static>(pick: impl FnOnce(&Services) -> T) -> StoredValue<T, LocalStorage> {
    let services = use_services();
    StoredValue::new_local(services.with_value(pick))
}
