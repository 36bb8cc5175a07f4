use crate::core::display::DisplayCard;
use crate::core::Notifier;
use crate::domain::model::{Notification, NotificationKind};

/// Prints toasts to the terminal, the CLI's stand-in for the page's toaster.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!("Notification shown: success");
                println!("✅ {}", notification.message);
            }
            NotificationKind::Failure => {
                tracing::warn!("Notification shown: failure");
                eprintln!("❌ {}", notification.message);
            }
        }
    }
}

pub fn render_card(card: &DisplayCard) -> String {
    let mut lines = Vec::new();

    let mut heading = card.title.clone();
    if let Some(badge) = &card.badge {
        heading.push_str(&format!(" [{}]", badge));
    }
    if !card.category.is_empty() {
        heading = format!("{} · {}", card.category, heading);
    }
    lines.push(heading);

    if !card.description.is_empty() {
        lines.push(format!("  {}", card.description));
    }
    for feature in &card.features {
        lines.push(format!("  • {}", feature));
    }
    if let Some(price) = &card.price {
        lines.push(format!("  {}", price));
    }
    if let Some(rating) = card.rating {
        lines.push(format!("  ★ {:.1}", rating));
    }
    if let Some(meta) = &card.meta {
        lines.push(format!("  {}", meta));
    }
    if let Some(link) = &card.link {
        lines.push(format!("  {}", link));
    }

    lines.join("\n")
}
