use crate::shared::config::Config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Current toast message plus a counter bumped on every show.
/// A dismiss timer only clears the toast it was started for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the toast and return the generation its timer must present
    pub fn show(&mut self, message: String) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message);
        self.generation
    }

    /// Clear the toast if it is still the one shown as `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}

/// App-wide state provided at the root: configuration and the toast slot
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<Config>,
    pub toast: RwSignal<ToastState>,
}

impl AppGlobalContext {
    pub fn new(config: Config) -> Self {
        Self {
            config: StoredValue::new(config),
            toast: RwSignal::new(ToastState::default()),
        }
    }

    pub fn expect() -> Self {
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
    }

    /// Show a toast that clears itself after `ms`
    pub fn show_toast(&self, message: String, ms: u32) {
        let toast = self.toast;
        let mut generation = 0;
        toast.update(|t| generation = t.show(message));
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ms).await;
            toast.maybe_update(|t| t.expire(generation));
        });
    }
}

/// Toast banner bound to the global toast slot
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = AppGlobalContext::expect();

    view! {
        {move || ctx.toast.with(|t| t.message().map(str::to_string)).map(|message| view! {
            <div class="toast">"✓ " {message}</div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_clears_its_own_toast() {
        let mut state = ToastState::default();
        let generation = state.show("Booked with Sarah Jenkins!".into());
        assert!(state.expire(generation));
        assert_eq!(state.message(), None);
    }

    #[test]
    fn test_older_timer_keeps_repeated_message() {
        let mut state = ToastState::default();
        let first = state.show("Booked with Sarah Jenkins!".into());
        let second = state.show("Booked with Sarah Jenkins!".into());
        assert!(!state.expire(first));
        assert_eq!(state.message(), Some("Booked with Sarah Jenkins!"));
        assert!(state.expire(second));
        assert_eq!(state.message(), None);
    }
}
