pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod files;
pub mod http;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod loading;
pub mod locale;
pub mod messages;
pub mod modal;
pub mod page_frame;
pub mod reference;
pub mod services;
