use crate::domain::model::{ActiveCategory, PortfolioItem};

/// Items matching `active`, in registry order. `All` returns the whole list.
pub fn filter_items(items: &[PortfolioItem], active: ActiveCategory) -> Vec<&PortfolioItem> {
    items
        .iter()
        .filter(|item| active.matches(item.category))
        .collect()
}

/// Gallery filter state: the selected category, default `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioFilter {
    active: ActiveCategory,
}

impl PortfolioFilter {
    pub fn new(active: ActiveCategory) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ActiveCategory {
        self.active
    }

    pub fn select(&mut self, category: ActiveCategory) {
        if self.active != category {
            tracing::debug!("Portfolio filter: {} -> {}", self.active, category);
        }
        self.active = category;
    }

    pub fn visible<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        filter_items(items, self.active)
    }
}
