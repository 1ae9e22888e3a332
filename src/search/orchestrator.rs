use crate::{
    error::Error,
    fetch::PageRetriever,
    parse::{DiningHall, MenuSnapshot},
};

use super::{MatchSet, SearchQuery};

/// What searching one hall turned up.
#[derive(Debug)]
pub enum HallOutcome {
    Serving(MatchSet),
    NotServing,
    /// The menu page could not be retrieved. Reported like [`HallOutcome::NotServing`].
    Failed(Error),
}

impl HallOutcome {
    pub const fn match_set(&self) -> Option<&MatchSet> {
        match self {
            Self::Serving(found) => Some(found),
            Self::NotServing | Self::Failed(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct SearchReport {
    keyword: String,
    halls: Vec<(DiningHall, HallOutcome)>,
}

impl SearchReport {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Halls serving the keyword, in the order they were searched.
    pub fn matches(&self) -> impl Iterator<Item = (&DiningHall, &MatchSet)> {
        self.halls
            .iter()
            .filter_map(|(hall, outcome)| outcome.match_set().map(|found| (hall, found)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&DiningHall, &Error)> {
        self.halls.iter().filter_map(|(hall, outcome)| match outcome {
            HallOutcome::Failed(e) => Some((hall, e)),
            _ => None,
        })
    }

    pub fn outcomes(&self) -> &[(DiningHall, HallOutcome)] {
        &self.halls
    }

    pub fn is_empty(&self) -> bool {
        self.matches().next().is_none()
    }
}

async fn search_hall<R: PageRetriever>(
    retriever: &R,
    hall: &DiningHall,
    query: &SearchQuery,
) -> HallOutcome {
    let html = match retriever.menu_page(hall).await {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Error fetching menu for {}: {e}", hall.name());
            return HallOutcome::Failed(e);
        }
    };
    let snapshot = MenuSnapshot::parse(&html);
    if snapshot.is_empty() {
        log::info!("No menu posted for {}", hall.name());
    }
    match query.search(&snapshot) {
        Some(found) => {
            log::info!(
                "{} serves {} in {} categories",
                hall.name(),
                query.keyword(),
                found.len()
            );
            HallOutcome::Serving(found)
        }
        None => HallOutcome::NotServing,
    }
}

/// Searches every hall in turn. A hall that fails is recorded and skipped.
pub async fn search_all_halls<R: PageRetriever>(
    retriever: &R,
    halls: &[DiningHall],
    query: &SearchQuery,
) -> SearchReport {
    log::debug!(
        "Searching {} dining halls for {:?} or {:?}",
        halls.len(),
        query.singular(),
        query.plural()
    );
    let mut outcomes = Vec::with_capacity(halls.len());
    for hall in halls {
        log::info!("---{}---", hall.name());
        let outcome = search_hall(retriever, hall, query).await;
        outcomes.push((hall.clone(), outcome));
    }
    SearchReport {
        keyword: query.keyword().to_string(),
        halls: outcomes,
    }
}
