//! GraphQL object types.
//!
//! Each object wraps a stored record. Relations that arrived already
//! resolved (from `get_user`, `get_post`, `list_posts`, `add_comment`) are
//! served from the view; anything else is resolved from ids through the
//! store when the field is selected, so every operation returns the same
//! shape.
//!
//! Only ids are non-null; every other field and list is nullable, matching
//! the published SDL.

use async_graphql::{Context, Object, Result, ID};

use super::{nullable_list, store, NullableList};
use crate::models::{Comment, CommentView, Post, PostView, User, UserView};

#[derive(Clone, Debug)]
struct UserRelations {
    posts: Vec<Post>,
    followers: Vec<User>,
    following: Vec<User>,
}

pub struct UserObject {
    user: User,
    relations: Option<UserRelations>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self { user, relations: None }
    }
}

impl From<UserView> for UserObject {
    fn from(view: UserView) -> Self {
        Self {
            user: view.user,
            relations: Some(UserRelations {
                posts: view.posts,
                followers: view.followers,
                following: view.following,
            }),
        }
    }
}

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.user.id.clone())
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.user.name)
    }

    async fn email(&self) -> Option<&str> {
        Some(&self.user.email)
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<NullableList<PostObject>> {
        let posts = match &self.relations {
            Some(r) => r.posts.clone(),
            None => store(ctx)?.posts_by_author(&self.user.id),
        };
        Ok(nullable_list(posts))
    }

    async fn followers(&self, ctx: &Context<'_>) -> Result<NullableList<UserObject>> {
        let users = match &self.relations {
            Some(r) => r.followers.clone(),
            None => store(ctx)?.followers_of(&self.user.id),
        };
        Ok(nullable_list(users))
    }

    async fn following(&self, ctx: &Context<'_>) -> Result<NullableList<UserObject>> {
        let users = match &self.relations {
            Some(r) => r.following.clone(),
            None => store(ctx)?.following_of(&self.user.id),
        };
        Ok(nullable_list(users))
    }
}

pub struct PostObject {
    post: Post,
    /// `Some(author)` once resolved; the inner `None` means the author id
    /// names no user.
    author: Option<Option<User>>,
}

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self { post, author: None }
    }
}

impl From<PostView> for PostObject {
    fn from(view: PostView) -> Self {
        Self {
            post: view.post,
            author: Some(view.author),
        }
    }
}

#[Object(name = "Post")]
impl PostObject {
    async fn id(&self) -> ID {
        ID(self.post.id.clone())
    }

    async fn title(&self) -> Option<&str> {
        Some(&self.post.title)
    }

    async fn content(&self) -> Option<&str> {
        Some(&self.post.content)
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let author = match &self.author {
            Some(resolved) => resolved.clone(),
            None => store(ctx)?.find_user(&self.post.author_id),
        };
        Ok(author.map(UserObject::from))
    }

    async fn likes(&self) -> Option<u32> {
        Some(self.post.likes)
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<NullableList<CommentObject>> {
        let comments = store(ctx)?.comments_of(&self.post.id);
        Ok(nullable_list(comments))
    }
}

pub struct CommentObject {
    comment: Comment,
    author: Option<User>,
}

impl From<CommentView> for CommentObject {
    fn from(view: CommentView) -> Self {
        Self {
            comment: view.comment,
            author: view.author,
        }
    }
}

#[Object(name = "Comment")]
impl CommentObject {
    async fn id(&self) -> ID {
        ID(self.comment.id.clone())
    }

    async fn content(&self) -> Option<&str> {
        Some(&self.comment.content)
    }

    async fn author(&self) -> Option<UserObject> {
        self.author.clone().map(UserObject::from)
    }
}
