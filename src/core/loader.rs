use crate::core::display::{DisplayCard, IntoCard};
use crate::core::fallback::{
    fallback_portfolio, fallback_services, FallbackPortfolioItem, FallbackService,
};
use crate::domain::model::{Collection, PortfolioItem, Query, Service};
use crate::domain::ports::ContentSource;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A data-driven page section: which rows it reads, which it shows, in what
/// order, and what it shows instead when there are none.
pub trait Section: Send + Sync + 'static {
    type Remote: DeserializeOwned + IntoCard + Clone + Send + Sync;
    type Fallback: IntoCard + Clone + Send + Sync;

    const NAME: &'static str;

    fn query() -> Query;
    fn is_visible(row: &Self::Remote) -> bool;
    fn display_order(a: &Self::Remote, b: &Self::Remote) -> Ordering;
    fn fallback() -> Vec<Self::Fallback>;
}

pub struct ServicesSection;

impl Section for ServicesSection {
    type Remote = Service;
    type Fallback = FallbackService;

    const NAME: &'static str = "services";

    fn query() -> Query {
        Query::table(Collection::Services)
            .eq("is_active", true)
            .order("price_from", true)
    }

    fn is_visible(row: &Service) -> bool {
        row.is_active == Some(true) && row.price_from.is_finite() && row.price_from >= 0.0
    }

    fn display_order(a: &Service, b: &Service) -> Ordering {
        a.price_from
            .partial_cmp(&b.price_from)
            .unwrap_or(Ordering::Equal)
    }

    fn fallback() -> Vec<FallbackService> {
        fallback_services()
    }
}

pub struct PortfolioSection;

impl Section for PortfolioSection {
    type Remote = PortfolioItem;
    type Fallback = FallbackPortfolioItem;

    const NAME: &'static str = "portfolio";

    fn query() -> Query {
        Query::table(Collection::PortfolioItems)
            .eq("is_published", true)
            .order("is_featured", false)
            .order("created_at", false)
    }

    fn is_visible(row: &PortfolioItem) -> bool {
        row.is_published == Some(true)
    }

    fn display_order(a: &PortfolioItem, b: &PortfolioItem) -> Ordering {
        b.featured()
            .cmp(&a.featured())
            .then_with(|| b.created_at.cmp(&a.created_at))
    }

    fn fallback() -> Vec<FallbackPortfolioItem> {
        fallback_portfolio()
    }
}

/// Which list a section renders. Never a mix of both.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<R, F> {
    Remote(Vec<R>),
    Fallback(Vec<F>),
}

impl<R: IntoCard, F: IntoCard> Resolved<R, F> {
    pub fn cards(&self) -> Vec<DisplayCard> {
        match self {
            Resolved::Remote(rows) => rows.iter().enumerate().map(|(i, r)| r.to_card(i)).collect(),
            Resolved::Fallback(items) => {
                items.iter().enumerate().map(|(i, f)| f.to_card(i)).collect()
            }
        }
    }
}

impl<R, F> Resolved<R, F> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::Fallback(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Resolved::Remote(rows) => rows.len(),
            Resolved::Fallback(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<R, F> {
    Loading,
    Ready(Resolved<R, F>),
}

pub type SectionState<S> = LoadState<<S as Section>::Remote, <S as Section>::Fallback>;

/// Shared render state of one mounted section. The last completed load wins.
pub struct SectionSlot<S: Section> {
    state: Arc<RwLock<SectionState<S>>>,
}

impl<S: Section> Clone for SectionSlot<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: Section> Default for SectionSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Section> SectionSlot<S> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LoadState::Loading)),
        }
    }

    pub async fn snapshot(&self) -> SectionState<S> {
        self.state.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        matches!(*self.state.read().await, LoadState::Loading)
    }

    /// `None` while the section is still showing its loading indicator.
    pub async fn cards(&self) -> Option<Vec<DisplayCard>> {
        match &*self.state.read().await {
            LoadState::Loading => None,
            LoadState::Ready(resolved) => Some(resolved.cards()),
        }
    }

    async fn set(&self, state: SectionState<S>) {
        *self.state.write().await = state;
    }
}

pub struct ContentLoader<C: ContentSource> {
    source: C,
}

impl<C: ContentSource> ContentLoader<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    /// Reads the section's rows, degrading to its bundled list on an empty
    /// result or any failure. Failures are logged, never returned.
    pub async fn load<S: Section>(&self) -> Resolved<S::Remote, S::Fallback> {
        match self.fetch::<S>().await {
            Ok(rows) if !rows.is_empty() => {
                tracing::debug!("Section '{}' rendering {} remote rows", S::NAME, rows.len());
                Resolved::Remote(rows)
            }
            Ok(_) => {
                tracing::debug!("Section '{}' has no remote rows, using fallback", S::NAME);
                Resolved::Fallback(S::fallback())
            }
            Err(e) => {
                tracing::warn!("Error fetching section '{}': {}", S::NAME, e);
                Resolved::Fallback(S::fallback())
            }
        }
    }

    /// Mount the section: show the loading state, then the resolved list.
    pub async fn mount<S: Section>(&self, slot: &SectionSlot<S>) {
        slot.set(LoadState::Loading).await;
        let resolved = self.load::<S>().await;
        slot.set(LoadState::Ready(resolved)).await;
    }

    pub async fn load_services(&self) -> Resolved<Service, FallbackService> {
        self.load::<ServicesSection>().await
    }

    pub async fn load_portfolio(&self) -> Resolved<PortfolioItem, FallbackPortfolioItem> {
        self.load::<PortfolioSection>().await
    }

    async fn fetch<S: Section>(&self) -> Result<Vec<S::Remote>> {
        let query = S::query();
        let raw = self.source.query(&query).await?;
        let received = raw.len();

        let mut rows: Vec<S::Remote> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<S::Remote>(value) {
                Ok(row) => Some(row),
                Err(e) => {
                    tracing::warn!("Skipping malformed row in '{}': {}", query.collection, e);
                    None
                }
            })
            .filter(|row| S::is_visible(row))
            .collect();

        if rows.len() != received {
            tracing::debug!(
                "Section '{}' kept {} of {} rows",
                S::NAME,
                rows.len(),
                received
            );
        }

        rows.sort_by(S::display_order);
        Ok(rows)
    }
}
