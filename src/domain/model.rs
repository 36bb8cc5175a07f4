use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tables exposed by the hosted backend that this site touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Services,
    PortfolioItems,
    ContactMessages,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::PortfolioItems => "portfolio_items",
            Collection::ContactMessages => "contact_messages",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub ascending: bool,
}

/// Equality filters plus ordered sort keys over one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: Collection,
    pub filters: Vec<Filter>,
    pub order: Vec<SortKey>,
}

impl Query {
    pub fn table(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<serde_json::Value>) -> Self {
        self.filters.push(Filter {
            column,
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, column: &'static str, ascending: bool) -> Self {
        self.order.push(SortKey { column, ascending });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    GraphicDesign,
    Marketing,
    WebDevelopment,
    SocialMedia,
    Seo,
    #[serde(other)]
    Other,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::GraphicDesign => "graphic_design",
            ServiceCategory::Marketing => "marketing",
            ServiceCategory::WebDevelopment => "web_development",
            ServiceCategory::SocialMedia => "social_media",
            ServiceCategory::Seo => "seo",
            ServiceCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::GraphicDesign => "تصميم جرافيكي",
            ServiceCategory::Marketing => "تسويق رقمي",
            ServiceCategory::WebDevelopment => "تطوير ويب",
            ServiceCategory::SocialMedia => "سوشيال ميديا",
            ServiceCategory::Seo => "تحسين محركات البحث",
            ServiceCategory::Other => "خدمات أخرى",
        }
    }
}

/// Row of the `services` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub category: ServiceCategory,
    pub name_ar: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    pub price_from: f64,
    #[serde(default)]
    pub price_to: Option<f64>,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Row of the `portfolio_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub category: String,
    pub title_ar: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PortfolioItem {
    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }
}

/// Arabic display label for a portfolio category; unknown values pass through.
pub fn portfolio_category_label(category: &str) -> &str {
    match category {
        "graphic_design" => "تصميم جرافيكي",
        "marketing" => "تسويق رقمي",
        "web_development" => "تطوير ويب",
        "ui_ux" => "تصميم UI/UX",
        other => other,
    }
}

/// Insert shape of `contact_messages`. Operator-managed columns
/// (`is_read`, `replied_at`) are never written from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub service_type: Option<String>,
}

/// Live state of the contact form. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub service_type: String,
}

impl ContactForm {
    /// Form opened from a service card's "order now" button.
    pub fn for_service(category: ServiceCategory) -> Self {
        Self {
            service_type: category.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_row(&self) -> NewContactMessage {
        fn optional(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        NewContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            subject: optional(&self.subject),
            message: self.message.trim().to_string(),
            service_type: optional(&self.service_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Transient toast emitted by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }
}
