//! Generic screens and service for admin-managed reference data.
//!
//! Every reference resource (departments, tags, ISIC codes, ...) follows the
//! same pattern: fetch with the active language, show, edit in a modal, then
//! re-fetch. Entity specifics come from `ReferenceEntity`.

pub mod details;
pub mod list_page;
pub mod service;
pub mod tree_page;

pub use details::{ReferenceDetails, ReferenceDetailsViewModel};
pub use list_page::ReferenceListPage;
pub use service::ReferenceDataService;
pub use tree_page::ReferenceTreePage;

use contracts::shared::{Language, Status};
use leptos::prelude::*;

use crate::shared::i18n::t;

#[component]
pub fn StatusBadge(status: Status, lang: Language) -> impl IntoView {
    let (class, label) = match status {
        Status::Active => ("badge badge--success", t(lang, "active")),
        Status::Inactive => ("badge badge--muted", t(lang, "inactive")),
    };
    view! { <span class=class>{label}</span> }
}

/// Ticket handed to one fetch of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Orders the fetches of one screen.
///
/// Every load takes a ticket; only the newest ticket may write its result,
/// so a slow response for an old language or page is dropped.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Takes a ticket from a screen-owned sequence; `None` once the screen is gone
pub fn issue_ticket(sequence: StoredValue<FetchSequence>) -> Option<FetchTicket> {
    sequence.try_update_value(FetchSequence::issue)
}

/// Whether a finished fetch may still publish its result
pub fn still_current(sequence: StoredValue<FetchSequence>, ticket: FetchTicket) -> bool {
    sequence.try_with_value(|s| s.is_current(ticket)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_fetch_applies() {
        let mut sequence = FetchSequence::default();
        let english = sequence.issue();
        let arabic = sequence.issue();

        // Arabic resolves first, then the older English response arrives
        assert!(sequence.is_current(arabic));
        assert!(!sequence.is_current(english));
    }

    #[test]
    fn test_reload_after_delete_supersedes_pending_fetch() {
        let mut sequence = FetchSequence::default();
        let initial = sequence.issue();
        assert!(sequence.is_current(initial));

        let reload = sequence.issue();
        assert!(!sequence.is_current(initial));
        assert!(sequence.is_current(reload));
    }
}
