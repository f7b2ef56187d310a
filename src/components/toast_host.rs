//! Toast stack and the `notify` entry point.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState, ToastTiming};

/// Fixed stack of live toasts.
#[component]
pub fn ToastHost(toasts: RwSignal<ToastState>) -> impl IntoView {
    let ids = move || toasts.with(|s| s.items.iter().map(|t| t.id).collect::<Vec<_>>());

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=ids
                key=|id| *id
                children=move |id| {
                    let class = move || toasts.with(|s| s.get(id).map(Toast::class).unwrap_or_default());
                    let message = move || toasts.with(|s| s.get(id).map(|t| t.message.clone()).unwrap_or_default());
                    view! { <div class=class role="status">{message}</div> }
                }
            />
        </div>
    }
}

/// Push a toast and schedule its show, dismiss and removal.
pub fn notify(toasts: RwSignal<ToastState>, timing: ToastTiming, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    let Some(id) = toasts.try_update(|s| s.push(message, kind)) else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;

        Timeout::new(timing.show_delay_ms, move || toasts.update(|s| s.show(id))).forget();
        Timeout::new(timing.visible_ms, move || {
            toasts.update(|s| s.dismiss(id));
            Timeout::new(timing.exit_ms, move || toasts.update(|s| s.remove(id))).forget();
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, timing);
    }
}
