use crate::core::loader::{ContentLoader, PortfolioSection, SectionSlot, ServicesSection};
use crate::domain::ports::ContentSource;

/// The data-driven sections of the page, each loaded once when mounted.
pub struct SitePage<C: ContentSource> {
    loader: ContentLoader<C>,
    services: SectionSlot<ServicesSection>,
    portfolio: SectionSlot<PortfolioSection>,
}

impl<C: ContentSource> SitePage<C> {
    pub fn new(source: C) -> Self {
        Self {
            loader: ContentLoader::new(source),
            services: SectionSlot::new(),
            portfolio: SectionSlot::new(),
        }
    }

    pub fn services(&self) -> &SectionSlot<ServicesSection> {
        &self.services
    }

    pub fn portfolio(&self) -> &SectionSlot<PortfolioSection> {
        &self.portfolio
    }

    pub async fn mount_services(&self) {
        self.loader.mount(&self.services).await;
    }

    pub async fn mount_portfolio(&self) {
        self.loader.mount(&self.portfolio).await;
    }

    /// Both sections load concurrently and independently.
    pub async fn mount_all(&self) {
        tracing::info!("Loading page sections");
        tokio::join!(self.mount_services(), self.mount_portfolio());
    }
}
