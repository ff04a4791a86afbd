use crate::core::errors::{ApiError, ApiResult};
use crate::core::helpers::next_id;
use crate::models::{Comment, CommentView, Post, PostView};
use crate::store::{Collections, SocialGraph};

impl Collections {
    pub(crate) fn posts_by_author(&self, author_id: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect()
    }

    fn post_view(&self, post: &Post) -> PostView {
        PostView {
            post: post.clone(),
            author: self.user(&post.author_id).cloned(),
        }
    }

    fn comment_view(&self, comment: &Comment) -> CommentView {
        CommentView {
            comment: comment.clone(),
            author: self.user(&comment.author_id).cloned(),
        }
    }
}

impl SocialGraph {
    /// Look a post up by id with its author resolved.
    pub fn get_post(&self, id: &str) -> Option<PostView> {
        let data = self.read();
        data.post(id).map(|post| data.post_view(post))
    }

    /// Every post in insertion order, each with its author resolved.
    pub fn list_posts(&self) -> Vec<PostView> {
        let data = self.read();
        data.posts.iter().map(|post| data.post_view(post)).collect()
    }

    /// Create a post. `author_id` is stored as given; it is not checked
    /// against the users. The returned record carries the raw author id.
    pub fn add_post(&self, title: &str, content: &str, author_id: &str) -> Post {
        let mut data = self.write();
        let post = Post {
            id: next_id(&mut data.next_post_id),
            title: title.to_string(),
            content: content.to_string(),
            author_id: author_id.to_string(),
            likes: 0,
            comment_ids: Vec::new(),
        };
        data.posts.push(post.clone());
        post
    }

    /// Attach a comment to a post. Fails without touching anything when the
    /// post does not exist. An unknown author is not an error; the returned
    /// view simply has no author.
    pub fn add_comment(&self, post_id: &str, author_id: &str, content: &str) -> ApiResult<CommentView> {
        let mut data = self.write();
        if data.post(post_id).is_none() {
            return Err(ApiError::post_not_found(post_id));
        }

        let comment = Comment {
            id: next_id(&mut data.next_comment_id),
            content: content.to_string(),
            author_id: author_id.to_string(),
        };
        if let Some(post) = data.post_mut(post_id) {
            post.comment_ids.push(comment.id.clone());
        }
        data.comments.push(comment.clone());

        Ok(data.comment_view(&comment))
    }

    /// Add one like. `_user_id` is accepted but likes are not deduplicated
    /// per user.
    pub fn like_post(&self, post_id: &str, _user_id: &str) -> ApiResult<Post> {
        let mut data = self.write();
        let post = data
            .post_mut(post_id)
            .ok_or_else(|| ApiError::post_not_found(post_id))?;
        post.likes = post.likes.saturating_add(1);
        Ok(post.clone())
    }

    pub fn posts_by_author(&self, author_id: &str) -> Vec<Post> {
        self.read().posts_by_author(author_id)
    }

    /// Comments of a post in the order they were added, each with its
    /// author resolved. Empty for an unknown post.
    pub fn comments_of(&self, post_id: &str) -> Vec<CommentView> {
        let data = self.read();
        let Some(post) = data.post(post_id) else {
            return Vec::new();
        };
        post.comment_ids
            .iter()
            .filter_map(|id| data.comments.iter().find(|c| &c.id == id))
            .map(|comment| data.comment_view(comment))
            .collect()
    }
}
