use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::debug;

use super::store;
use super::types::{CommentObject, PostObject, UserObject};

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author_id: ID,
    ) -> Result<Option<PostObject>> {
        let post = store(ctx)?.add_post(&title, &content, &author_id);
        debug!(post_id = %post.id, author_id = %post.author_id, "post created");
        Ok(Some(PostObject::from(post)))
    }

    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        author_id: ID,
        content: String,
    ) -> Result<Option<CommentObject>> {
        let comment = store(ctx)?
            .add_comment(&post_id, &author_id, &content)
            .map_err(|e| e.extend())?;
        debug!(comment_id = %comment.comment.id, post_id = %post_id.as_str(), "comment added");
        Ok(Some(CommentObject::from(comment)))
    }

    async fn like_post(&self, ctx: &Context<'_>, post_id: ID, user_id: ID) -> Result<Option<PostObject>> {
        let post = store(ctx)?
            .like_post(&post_id, &user_id)
            .map_err(|e| e.extend())?;
        debug!(post_id = %post.id, likes = post.likes, "post liked");
        Ok(Some(PostObject::from(post)))
    }

    async fn follow_user(
        &self,
        ctx: &Context<'_>,
        follower_id: ID,
        followee_id: ID,
    ) -> Result<Option<UserObject>> {
        let followee = store(ctx)?
            .follow_user(&follower_id, &followee_id)
            .map_err(|e| e.extend())?;
        debug!(follower_id = %follower_id.as_str(), followee_id = %followee.id, "user followed");
        Ok(Some(UserObject::from(followee)))
    }
}
