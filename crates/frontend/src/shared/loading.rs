//! Shared "loading" flag observed by spinners.
//!
//! Each API call raises the flag before sending and lowers it when the last
//! concurrent call finishes.

use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoadingHandle {
    in_flight: Rc<Cell<usize>>,
    notify: Rc<dyn Fn(bool)>,
}

impl LoadingHandle {
    pub fn new(notify: impl Fn(bool) + 'static) -> Self {
        Self {
            in_flight: Rc::new(Cell::new(0)),
            notify: Rc::new(notify),
        }
    }

    /// Handle nobody listens to
    pub fn detached() -> Self {
        Self::new(|_| {})
    }

    /// Mirrors the flag into a signal
    pub fn from_signal(signal: RwSignal<bool>) -> Self {
        Self::new(move |on| {
            let _ = signal.try_set(on);
        })
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub fn begin(&self) -> LoadingGuard {
        let count = self.in_flight.get() + 1;
        self.in_flight.set(count);
        if count == 1 {
            (self.notify)(true);
        }
        LoadingGuard {
            handle: self.clone(),
        }
    }
}

/// Lowers the flag on drop, so early returns and errors are covered
pub struct LoadingGuard {
    handle: LoadingHandle,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let count = self.handle.in_flight.get().saturating_sub(1);
        self.handle.in_flight.set(count);
        if count == 0 {
            (self.handle.notify)(false);
        }
    }
}

/// Context value read by spinners
#[derive(Clone, Copy)]
pub struct LoadingContext {
    pub active: RwSignal<bool>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(false),
        }
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_loading() -> LoadingContext {
    use_context::<LoadingContext>().expect("LoadingContext not found in component tree")
}

#[component]
pub fn Spinner() -> impl IntoView {
    let loading = use_loading();

    view! {
        <span class="spinner" class:spinner--active=move || loading.active.get() aria-hidden="true"></span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_nested_calls_toggle_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let recorder = events.clone();
        let handle = LoadingHandle::new(move |on| recorder.borrow_mut().push(on));

        let first = handle.begin();
        let second = handle.begin();
        assert!(handle.is_loading());
        drop(first);
        assert!(handle.is_loading());
        drop(second);

        assert!(!handle.is_loading());
        assert_eq!(*events.borrow(), vec![true, false]);
    }
}
