//! Transient page notifications ("toasts").
//!
//! Usage:
//! ```rust,ignore
//! let notifications = use_context::<NotificationService>().expect("NotificationService not provided");
//! notifications.error("Error", "Analysis failed. Try again later.");
//! ```

use leptos::prelude::*;
use thaw::*;

/// Время жизни уведомления
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIntent {
    Info,
    Error,
}

impl NotificationIntent {
    fn message_bar_intent(self) -> MessageBarIntent {
        match self {
            NotificationIntent::Info => MessageBarIntent::Info,
            NotificationIntent::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub intent: NotificationIntent,
}

/// Ordered list of visible notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        intent: NotificationIntent,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            title: title.into(),
            description: description.into(),
            intent,
        });
        id
    }

    /// Unknown ids are ignored (the user may have closed it already)
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Сервис уведомлений, доступен через context
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn info(&self, title: &str, description: &str) {
        self.show(title, description, NotificationIntent::Info);
    }

    /// Only shows the message; the caller logs the underlying error
    pub fn error(&self, title: &str, description: &str) {
        self.show(title, description, NotificationIntent::Error);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn show(&self, title: &str, description: &str, intent: NotificationIntent) {
        let id = self
            .queue
            .try_update(|queue| queue.push(title, description, intent));
        let Some(id) = id else {
            return;
        };

        let service = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the visible notifications in the bottom-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="notification-host" style="position: fixed; right: 24px; bottom: 24px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; max-width: 420px;">
            <For
                each=move || service.queue.with(|queue| queue.items().to_vec())
                key=|n| n.id
                let:item
            >
                <MessageBar intent=item.intent.message_bar_intent()>
                    <div style="display: flex; align-items: flex-start; gap: 12px; width: 100%;">
                        <div style="flex: 1;">
                            <div style="font-weight: 600;">{item.title.clone()}</div>
                            <div>{item.description.clone()}</div>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click={
                                let id = item.id;
                                move |_| service.dismiss(id)
                            }
                        >
                            "✕"
                        </Button>
                    </div>
                </MessageBar>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let first = queue.push("Analysis Started", "Analyzing resume.pdf...", NotificationIntent::Info);
        let second = queue.push("Error", "Analysis failed. Try again later.", NotificationIntent::Error);
        assert!(second > first);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].title, "Analysis Started");
        assert_eq!(queue.items()[1].intent, NotificationIntent::Error);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("a", "", NotificationIntent::Info);
        let b = queue.push("b", "", NotificationIntent::Error);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("a", "", NotificationIntent::Info);
        queue.dismiss(a);
        let b = queue.push("b", "", NotificationIntent::Info);
        assert_ne!(a, b);
    }
}
