// SPDX-License-Identifier: MPL-2.0
//! Dispatcher over the available data backends.

use crate::data::model::{Member, MemberSummary, ProfileLists};
use crate::data::{api, sample};
use crate::error::Result;
use futures_util::try_join;

/// Where profile data comes from. Cloned into every loading task.
#[derive(Debug, Clone)]
pub enum Source {
    Api(api::Client),
    Sample(sample::Store),
}

impl Source {
    pub async fn member_index(&self) -> Result<Vec<MemberSummary>> {
        match self {
            Source::Api(client) => client.member_index().await,
            Source::Sample(store) => store.member_index().await,
        }
    }

    pub async fn member(&self, id: &str) -> Result<Option<Member>> {
        match self {
            Source::Api(client) => client.member(id).await,
            Source::Sample(store) => store.member(id).await,
        }
    }

    pub async fn votes(&self, id: &str) -> Result<Vec<crate::data::model::VoteRecord>> {
        match self {
            Source::Api(client) => client.votes(id).await,
            Source::Sample(store) => store.votes(id).await,
        }
    }

    pub async fn speeches(&self, id: &str) -> Result<Vec<crate::data::model::SpeechRecord>> {
        match self {
            Source::Api(client) => client.speeches(id).await,
            Source::Sample(store) => store.speeches(id).await,
        }
    }

    pub async fn spending(&self, id: &str) -> Result<Vec<crate::data::model::SpendingEntry>> {
        match self {
            Source::Api(client) => client.spending(id).await,
            Source::Sample(store) => store.spending(id).await,
        }
    }

    pub async fn transparency(
        &self,
        id: &str,
    ) -> Result<Vec<crate::data::model::TransparencyEntry>> {
        match self {
            Source::Api(client) => client.transparency(id).await,
            Source::Sample(store) => store.transparency(id).await,
        }
    }
}

/// Fetches the four list data sets concurrently and joins the results.
///
/// Fail-together semantics: if any lookup fails, the whole join fails and
/// none of the four results are applied for this cycle.
pub async fn fetch_lists(source: Source, id: String) -> Result<ProfileLists> {
    let (votes, speeches, spending, transparency) = try_join!(
        source.votes(&id),
        source.speeches(&id),
        source.spending(&id),
        source.transparency(&id),
    )?;

    Ok(ProfileLists {
        votes,
        speeches,
        spending,
        transparency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::Store;

    #[tokio::test]
    async fn fetch_lists_joins_all_four_sets() {
        let store = Store::load().expect("load");
        let source = Source::Sample(store);
        let index = source.member_index().await.expect("index");
        let id = index[0].id.clone();

        let lists = fetch_lists(source, id).await.expect("joined fetch");
        assert!(!lists.votes.is_empty());
        assert!(!lists.speeches.is_empty());
    }

    #[tokio::test]
    async fn fetch_lists_for_unknown_member_is_empty() {
        let source = Source::Sample(Store::load().expect("load"));
        let lists = fetch_lists(source, "nobody".to_string())
            .await
            .expect("joined fetch");
        assert_eq!(lists, ProfileLists::default());
    }
}
