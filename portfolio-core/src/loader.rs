//! Content loader.
//!
//! All four resources are requested at once and joined: the loader returns
//! only after every fetch has settled, successfully or not. The store is built
//! privately and handed back whole, so no caller ever sees a partly filled one.

use crate::content::{About, Contacts, ContentStore, Job, Portfolio, ResourceKind};
use crate::error::FetchError;
use crate::fetcher::{ResourceFetcher, ResourceSource};
use crate::verification::VerificationToken;
use std::sync::Arc;

pub struct ContentLoader {
    fetcher: ResourceFetcher,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self {
            fetcher: ResourceFetcher::new(source),
        }
    }

    /// Fetch resume, portfolio, contacts and about concurrently and wait for all of them.
    ///
    /// A failed fetch leaves its field `None` and is recorded in
    /// [`ContentStore::failed`]; it never cancels the other fetches.
    pub async fn load_all(&self, token: &VerificationToken) -> ContentStore {
        let fetcher = &self.fetcher;
        let (jobs, portfolio, contacts, about) = futures::join!(
            fetcher.fetch::<Vec<Job>>(ResourceKind::Resume, token),
            fetcher.fetch::<Portfolio>(ResourceKind::Portfolio, token),
            fetcher.fetch::<Contacts>(ResourceKind::Contacts, token),
            fetcher.fetch::<About>(ResourceKind::About, token),
        );

        let mut failed = Vec::new();
        let mut store = ContentStore::new();
        store.jobs = settle(jobs, &mut failed);
        store.portfolio = settle(portfolio, &mut failed);
        store.contacts = settle(contacts, &mut failed);
        store.about = settle(about, &mut failed);

        tracing::info!(
            loaded = ResourceKind::ALL.len() - failed.len(),
            failed = failed.len(),
            "content load settled"
        );
        store.settle(failed)
    }
}

fn settle<T>(result: Result<T, FetchError>, failed: &mut Vec<ResourceKind>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            failed.push(e.kind);
            None
        }
    }
}
