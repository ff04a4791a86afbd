use async_graphql::{Context, Object, Result, ID};

use super::{nullable_list, store, NullableList};
use super::types::{PostObject, UserObject};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A user by id, or null.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        Ok(store(ctx)?.get_user(&id).map(UserObject::from))
    }

    /// Users whose name contains `name`, case-insensitively.
    async fn users_by_name(&self, ctx: &Context<'_>, name: String) -> Result<NullableList<UserObject>> {
        Ok(nullable_list(store(ctx)?.find_users_by_name(&name)))
    }

    /// A post by id, or null.
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PostObject>> {
        Ok(store(ctx)?.get_post(&id).map(PostObject::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<NullableList<PostObject>> {
        Ok(nullable_list(store(ctx)?.list_posts()))
    }
}
