use crate::domain::model::{Collection, Notification, Query};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The hosted tabular backend. Rows travel as raw JSON; typing happens in the loader.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn query(&self, query: &Query) -> Result<Vec<serde_json::Value>>;
    async fn insert(&self, collection: Collection, row: serde_json::Value) -> Result<()>;
}

#[async_trait]
impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    async fn query(&self, query: &Query) -> Result<Vec<serde_json::Value>> {
        (**self).query(query).await
    }

    async fn insert(&self, collection: Collection, row: serde_json::Value) -> Result<()> {
        (**self).insert(collection, row).await
    }
}

/// Presents transient notifications (toasts) to the visitor.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn schema_path(&self) -> &str {
        "rest/v1"
    }
    fn whatsapp_phone(&self) -> &str;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
