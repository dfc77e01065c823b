//! Transient user notifications ("toasts").
//!
//! Pages publish toasts on a broadcast channel owned by the application
//! context; a printer task drains it to stderr.

use console::style;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn render(&self) -> String {
        match self.level {
            ToastLevel::Success => format!("{} {}", style("✔").green().bold(), self.message),
            ToastLevel::Error => format!("{} {}", style("✖").red().bold(), style(&self.message).red()),
        }
    }
}

const SETTLE_ROUNDS: usize = 16;

/// Cloneable publishing handle.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: broadcast::Sender<Toast>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(ToastLevel::Error, message.into());
    }

    /// Yield until the printer has taken every queued toast, so a prompt
    /// drawn next starts on a clean line. Bounded: a subscriber that never
    /// reads keeps the queue non-empty.
    pub async fn settle(&self) {
        for _ in 0..SETTLE_ROUNDS {
            if self.tx.is_empty() {
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    fn publish(&self, level: ToastLevel, message: String) {
        tracing::debug!(?level, "toast: {}", message);
        // No subscriber is fine: nobody is watching.
        let _ = self.tx.send(Toast { level, message });
    }
}

/// Print toasts to stderr until every [`Toaster`] is dropped.
pub fn spawn_printer(mut rx: broadcast::Receiver<Toast>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(toast) => eprintln!("{}", toast.render()),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Dropped {} notifications", n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_receive_in_order() {
        let toaster = Toaster::new();
        let mut rx = toaster.subscribe();
        toaster.success("SERT prediction complete!");
        toaster.error("Prediction failed");

        assert_eq!(rx.try_recv().unwrap().level, ToastLevel::Success);
        let second = rx.try_recv().unwrap();
        assert_eq!(second.level, ToastLevel::Error);
        assert_eq!(second.message, "Prediction failed");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers() {
        Toaster::new().success("nobody listening");
    }

    #[tokio::test]
    async fn test_settle_waits_for_printer() {
        let toaster = Toaster::new();
        let _handle = spawn_printer(toaster.subscribe());
        toaster.error("Compound not found");
        toaster.success("Prediction complete!");
        assert!(!toaster.tx.is_empty());

        toaster.settle().await;
        assert!(toaster.tx.is_empty());
    }

    #[tokio::test]
    async fn test_settle_gives_up_on_idle_subscriber() {
        let toaster = Toaster::new();
        let _rx = toaster.subscribe();
        toaster.success("unread");
        toaster.settle().await;
        assert!(!toaster.tx.is_empty());
    }

    #[tokio::test]
    async fn test_printer_exits_when_senders_drop() {
        let toaster = Toaster::new();
        let handle = spawn_printer(toaster.subscribe());
        toaster.success("done");
        drop(toaster);
        handle.await.unwrap();
    }
}
