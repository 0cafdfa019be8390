use contracts::system::profile::validate_photo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::files::selected_file;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::services::use_services;

pub const TAB_KEY: &str = "sys_profile_photo";

/// Picks, checks and uploads the profile photo, then previews the stored one
#[component]
pub fn ProfilePhotoPage() -> impl IntoView {
    let services = use_services();
    let locale = use_locale();
    let lang = move || locale.language.get();

    let photo_url = RwSignal::new(None::<String>);
    let problem = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    let on_pick = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        if let Err(reason) = validate_photo(&file.type_(), file.size()) {
            problem.set(Some(reason));
            return;
        }
        problem.set(None);
        uploading.set(true);

        let api = services.with_value(|s| s.profile.clone());
        let lang = locale.current();
        spawn_local(async move {
            let result = api.upload_photo(file, lang).await;
            let _ = uploading.try_set(false);
            match result {
                Ok(response) => {
                    let _ = photo_url.try_set(Some(response.url));
                }
                Err(e) => {
                    let _ = problem.try_set(Some(e.summary()));
                }
            }
        });
    };

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2 class="page__title">{icon("user")} {move || t(lang(), "profile_photo")}</h2>
            </div>
            <div class="page__content">
                <label class="button button--primary file-button" class:button--disabled=move || uploading.get()>
                    {icon("upload")}
                    {move || t(lang(), "upload")}
                    <input
                        type="file"
                        accept="image/jpeg,image/png,image/webp"
                        class="file-button__input"
                        prop:disabled=move || uploading.get()
                        on:change=on_pick
                    />
                </label>
                {move || problem.get().map(|p| view! { <div class="warning-box text-error">{p}</div> })}
                {move || photo_url.get().map(|url| view! {
                    <div class="profile-photo">
                        <img class="profile-photo__image" src=url alt="" />
                        <div class="info-box text-success">{t(lang(), "uploaded")}</div>
                    </div>
                })}
            </div>
        </PageFrame>
    }
}
