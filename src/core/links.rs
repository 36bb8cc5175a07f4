//! Outbound links shown on the page: social profiles, chat and phone deep
//! links, partner sites and in-page anchors.

use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Social,
    Messaging,
    Telephone,
    Destination,
    Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub label: String,
    pub href: String,
    pub kind: LinkKind,
}

impl OutboundLink {
    fn new(label: &str, href: impl Into<String>, kind: LinkKind) -> Self {
        Self {
            label: label.to_string(),
            href: href.into(),
            kind,
        }
    }
}

fn digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn whatsapp_link(phone: &str) -> String {
    format!("https://wa.me/{}", digits(phone))
}

pub fn tel_link(phone: &str) -> String {
    format!("tel:+{}", digits(phone))
}

pub fn site_links(whatsapp_phone: &str, phone: &str) -> Vec<OutboundLink> {
    vec![
        OutboundLink::new("واتساب", whatsapp_link(whatsapp_phone), LinkKind::Messaging),
        OutboundLink::new("الهاتف", tel_link(phone), LinkKind::Telephone),
        OutboundLink::new("Facebook", "https://facebook.com/graphicdesiner1", LinkKind::Social),
        OutboundLink::new("Instagram", "https://instagram.com/ehab.gm1", LinkKind::Social),
        OutboundLink::new(
            "LinkedIn",
            "https://linkedin.com/in/ehabgm-online-services",
            LinkKind::Social,
        ),
        OutboundLink::new("YouTube", "https://youtube.com/@ehabgm", LinkKind::Social),
        OutboundLink::new("الموقع الرسمي", "https://ehabgm.online", LinkKind::Destination),
        OutboundLink::new("المتجر الإلكتروني", "https://ehab.shop", LinkKind::Destination),
        OutboundLink::new("متجرنا الإلكتروني", "https://ehabgm.store", LinkKind::Destination),
        OutboundLink::new(
            "البورتفوليو",
            "https://ehabgm.mystrikingly.com",
            LinkKind::Destination,
        ),
        OutboundLink::new(
            "مدونة ووردبريس",
            "https://ehabgm.wordpress.com",
            LinkKind::Destination,
        ),
        OutboundLink::new("الخدمات", "#services", LinkKind::Anchor),
        OutboundLink::new("أعمالنا", "#portfolio", LinkKind::Anchor),
        OutboundLink::new("الأسعار", "#pricing", LinkKind::Anchor),
        OutboundLink::new("التواصل", "#contact", LinkKind::Anchor),
    ]
}

fn malformed(link: &OutboundLink, reason: impl Into<String>) -> SiteError {
    SiteError::InvalidConfigValueError {
        field: link.label.clone(),
        value: link.href.clone(),
        reason: reason.into(),
    }
}

pub fn check_link(link: &OutboundLink) -> Result<()> {
    if link.kind == LinkKind::Anchor {
        let id = link.href.strip_prefix('#').unwrap_or_default();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(malformed(link, "Anchor must be '#' followed by an element id"));
        }
        return Ok(());
    }

    let url = Url::parse(&link.href).map_err(|e| malformed(link, e.to_string()))?;
    match (link.kind, url.scheme()) {
        (LinkKind::Telephone, "tel") => {
            let number = url.path().trim_start_matches('+');
            if number.len() >= 8 && number.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err(malformed(link, "Telephone link needs '+' and digits"))
            }
        }
        (LinkKind::Telephone, scheme) => {
            Err(malformed(link, format!("Expected tel: scheme, got {}", scheme)))
        }
        (LinkKind::Messaging, "https") if url.host_str() == Some("wa.me") => {
            let number = url.path().trim_start_matches('/');
            if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err(malformed(link, "WhatsApp link needs a phone number path"))
            }
        }
        (LinkKind::Messaging, _) => Err(malformed(link, "Expected https://wa.me/<phone>")),
        (_, "https") | (_, "http") if url.host_str().is_some() => Ok(()),
        (_, scheme) => Err(malformed(link, format!("Unsupported URL scheme: {}", scheme))),
    }
}

/// Every link that fails `check_link`, paired with the reason.
pub fn malformed_links(links: &[OutboundLink]) -> Vec<(&OutboundLink, SiteError)> {
    links
        .iter()
        .filter_map(|link| check_link(link).err().map(|e| (link, e)))
        .collect()
}
