//! Notification Channel: one transient message at a time

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Время показа уведомления по умолчанию
pub const DEFAULT_AUTO_HIDE_MS: i64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

/// Канал уведомлений: новое сообщение заменяет предыдущее, истории нет
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    current: Option<Notification>,
    auto_hide: Duration,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::with_auto_hide(Duration::milliseconds(DEFAULT_AUTO_HIDE_MS))
    }

    pub fn with_auto_hide(auto_hide: Duration) -> Self {
        Self {
            current: None,
            auto_hide,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Utc::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: DateTime<Utc>) {
        self.current = Some(Notification {
            message: message.into(),
            severity,
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    /// Видимое в момент `now` уведомление (истёкшее не показывается)
    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now < n.shown_at + self.auto_hide)
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.visible_at(Utc::now())
    }

    /// Закрытие пользователем
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
