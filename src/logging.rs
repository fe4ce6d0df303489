//! Logging: a `log` sink that writes to the browser console, plus
//! structured UI event records serialized as one JSON object per line.

use serde::Serialize;

use crate::dispatch::ButtonId;

/// A UI event worth recording.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent<'a> {
    Activated { button: ButtonId },
    GestureCancelled { action_id: u16 },
    NotificationPresented { title: &'a str, queued: usize },
    NotificationDismissed { title: &'a str, remaining: usize },
}

/// Render an event as a single JSON line.
pub fn to_json_line(event: &UiEvent) -> Option<String> {
    serde_json::to_string(event).ok()
}

/// Emit `event` at info level.
pub fn record(event: &UiEvent) {
    match to_json_line(event) {
        Some(line) => log::info!("{line}"),
        None => log::warn!("unserializable ui event: {event:?}"),
    }
}

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&msg.into()),
            log::Level::Warn => web_sys::console::warn_1(&msg.into()),
            _ => web_sys::console::log_1(&msg.into()),
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Debug builds log at debug level.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        log::set_max_level(level);
    }
}

/// Host builds have no console; the facade stays a no-op.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_serializes_with_tag() {
        let line = to_json_line(&UiEvent::Activated {
            button: ButtonId::Character(2),
        })
        .unwrap();
        assert_eq!(line, r#"{"event":"activated","button":{"Character":2}}"#);
    }

    #[test]
    fn presented_carries_title_and_queue_depth() {
        let line = to_json_line(&UiEvent::NotificationPresented {
            title: "¡Explorando!",
            queued: 2,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "notification_presented");
        assert_eq!(value["title"], "¡Explorando!");
        assert_eq!(value["queued"], 2);
    }

    #[test]
    fn unit_button_variants_serialize_as_strings() {
        let line = to_json_line(&UiEvent::Activated { button: ButtonId::Wish }).unwrap();
        assert!(line.contains(r#""button":"Wish""#));
    }
}
