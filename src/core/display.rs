use crate::core::fallback::{FallbackPortfolioItem, FallbackService};
use crate::domain::model::{portfolio_category_label, PortfolioItem, Service};
use chrono::Datelike;
use serde::Serialize;

const POPULAR_BADGE: &str = "الأكثر طلباً";
const FEATURED_BADGE: &str = "مميز";
const RECENT_PROJECT: &str = "مشروع حديث";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardOrigin {
    Remote,
    Fallback,
}

/// Display-ready card; the renderer never looks at row field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCard {
    pub key: String,
    pub origin: CardOrigin,
    pub category: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: Option<String>,
    pub meta: Option<String>,
    pub badge: Option<String>,
    pub rating: Option<f32>,
    pub highlighted: bool,
    pub link: Option<String>,
}

pub trait IntoCard {
    fn to_card(&self, position: usize) -> DisplayCard;
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn price_label(from: f64, to: Option<f64>) -> String {
    match to {
        Some(to) if to > from => format!("{} - {} جنيه", format_amount(from), format_amount(to)),
        _ => format!("من {} جنيه", format_amount(from)),
    }
}

impl IntoCard for Service {
    fn to_card(&self, _position: usize) -> DisplayCard {
        DisplayCard {
            key: self.id.clone(),
            origin: CardOrigin::Remote,
            category: self.category.label().to_string(),
            title: self.name_ar.clone(),
            description: self.description_ar.clone().unwrap_or_default(),
            features: Vec::new(),
            price: Some(price_label(self.price_from, self.price_to)),
            meta: self.duration_days.map(|days| format!("مدة التنفيذ {} يوم", days)),
            badge: None,
            rating: None,
            highlighted: false,
            link: None,
        }
    }
}

impl IntoCard for FallbackService {
    fn to_card(&self, position: usize) -> DisplayCard {
        DisplayCard {
            key: format!("fallback-service-{}", position),
            origin: CardOrigin::Fallback,
            category: String::new(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            price: Some(self.price_label.to_string()),
            meta: None,
            badge: self.popular.then(|| POPULAR_BADGE.to_string()),
            rating: None,
            highlighted: self.popular,
            link: None,
        }
    }
}

impl IntoCard for PortfolioItem {
    fn to_card(&self, _position: usize) -> DisplayCard {
        let meta = match self.completion_date {
            Some(date) => format!("مكتمل {}", date.year()),
            None => RECENT_PROJECT.to_string(),
        };

        DisplayCard {
            key: self.id.clone(),
            origin: CardOrigin::Remote,
            category: portfolio_category_label(&self.category).to_string(),
            title: self.title_ar.clone(),
            description: self.description_ar.clone().unwrap_or_default(),
            features: self.technologies.clone().unwrap_or_default(),
            price: None,
            meta: Some(meta),
            badge: self.featured().then(|| FEATURED_BADGE.to_string()),
            rating: None,
            highlighted: self.featured(),
            link: self.project_url.clone(),
        }
    }
}

impl IntoCard for FallbackPortfolioItem {
    fn to_card(&self, position: usize) -> DisplayCard {
        DisplayCard {
            key: format!("fallback-portfolio-{}", position),
            origin: CardOrigin::Fallback,
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            features: Vec::new(),
            price: None,
            meta: Some(self.projects.to_string()),
            badge: None,
            rating: Some(self.rating),
            highlighted: false,
            link: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceCategory;
    use chrono::NaiveDate;

    fn service(price_from: f64, price_to: Option<f64>) -> Service {
        Service {
            id: "svc-1".to_string(),
            category: ServiceCategory::WebDevelopment,
            name_ar: "متجر إلكتروني".to_string(),
            name_en: Some("Online store".to_string()),
            description_ar: None,
            description_en: None,
            price_from,
            price_to,
            duration_days: Some(14),
            is_active: Some(true),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(150.0, None), "من 150 جنيه");
        assert_eq!(price_label(1500.0, Some(3000.0)), "1500 - 3000 جنيه");
        assert_eq!(price_label(99.5, Some(50.0)), "من 99.50 جنيه");
        assert_eq!(price_label(1e20, None), "من 100000000000000000000 جنيه");
    }

    #[test]
    fn service_row_maps_localized_fields() {
        let card = service(1500.0, None).to_card(0);
        assert_eq!(card.key, "svc-1");
        assert_eq!(card.origin, CardOrigin::Remote);
        assert_eq!(card.title, "متجر إلكتروني");
        assert_eq!(card.category, "تطوير ويب");
        assert_eq!(card.description, "");
        assert_eq!(card.meta.as_deref(), Some("مدة التنفيذ 14 يوم"));
    }

    #[test]
    fn portfolio_row_footer_uses_completion_year() {
        let mut item = PortfolioItem {
            id: "p-1".to_string(),
            category: "marketing".to_string(),
            title_ar: "حملة رمضان".to_string(),
            title_en: None,
            description_ar: Some("حملة ممولة".to_string()),
            description_en: None,
            client_name: None,
            completion_date: NaiveDate::from_ymd_opt(2023, 4, 1),
            technologies: None,
            image_url: None,
            project_url: None,
            is_featured: Some(true),
            is_published: Some(true),
            created_at: None,
            updated_at: None,
        };
        let card = item.to_card(0);
        assert_eq!(card.meta.as_deref(), Some("مكتمل 2023"));
        assert_eq!(card.badge.as_deref(), Some(FEATURED_BADGE));

        item.completion_date = None;
        item.is_featured = None;
        let card = item.to_card(0);
        assert_eq!(card.meta.as_deref(), Some(RECENT_PROJECT));
        assert_eq!(card.badge, None);
    }

    #[test]
    fn fallback_cards_carry_positional_keys() {
        let cards: Vec<_> = crate::core::fallback::fallback_portfolio()
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_card(i))
            .collect();
        assert_eq!(cards[2].key, "fallback-portfolio-2");
        assert!(cards.iter().all(|c| c.origin == CardOrigin::Fallback));
        assert_eq!(cards[0].rating, Some(4.9));
    }
}
