//! File inputs

use leptos::ev::Event;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// First file picked in the `<input type="file">` that fired `ev`
pub fn selected_file(ev: &Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Human readable size, e.g. "1.4 MB"
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    if bytes < KB {
        format!("{} B", bytes as u64)
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}

#[component]
pub fn FileName(#[prop(into)] name: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || name.get().map(|n| view! { <span class="file-name">{n}</span> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(1536.0), "1.5 KB");
        assert_eq!(format_size(2.0 * 1024.0 * 1024.0), "2.0 MB");
    }
}
