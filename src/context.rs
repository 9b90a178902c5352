//! Application Context
//!
//! Shared navigation and notification handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::debounce::LatestGate;
use crate::route::{self, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub route: ReadSignal<Route>,
    /// Page currently shown - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Client-side navigation with a history entry
    pub fn navigate(&self, target: Route) {
        route::push(&target);
        self.set_route.set(target);
    }

    /// Sync with the location after back/forward
    pub fn sync_with_location(&self) {
        self.set_route.set(route::current());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Transient message that clears itself after a timeout
#[derive(Clone, Copy)]
pub struct Flash {
    message: RwSignal<Option<String>>,
    gate: StoredValue<LatestGate>,
    timeout_ms: u32,
}

impl Flash {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            message: RwSignal::new(None),
            gate: StoredValue::new(LatestGate::new()),
            timeout_ms,
        }
    }

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    /// Show `text`; a newer message restarts the timer
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("flash: {}", text);
        self.message.set(Some(text));
        let ticket = self.gate.get_value().arm();
        let message = self.message;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if ticket.is_current() {
                message.set(None);
            }
        });
    }

    pub fn clear(&self) {
        self.gate.get_value().cancel();
        self.message.set(None);
    }
}
