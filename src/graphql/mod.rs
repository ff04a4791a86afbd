//! GraphQL schema over the social graph store.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Result, Schema};

use crate::store::SocialGraph;

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type SocialSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `store` available to every resolver.
pub fn build_schema(store: Arc<SocialGraph>) -> SocialSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// `[T]` in SDL: the list and its items are both nullable.
pub(crate) type NullableList<T> = Option<Vec<Option<T>>>;

pub(crate) fn nullable_list<T, U: From<T>>(items: Vec<T>) -> NullableList<U> {
    Some(items.into_iter().map(|item| Some(U::from(item))).collect())
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<SocialGraph>> {
    ctx.data::<Arc<SocialGraph>>()
}
