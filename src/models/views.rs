//! Read-side views. A view is computed from the stored records at read time
//! and owns copies of everything it references; building one never touches
//! the records themselves.

use super::models::{Comment, Post, User};

/// A user with its relations resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserView {
    pub user: User,
    /// Posts whose author is this user, in post insertion order.
    pub posts: Vec<Post>,
    /// Users whose `following` contains this user, in user insertion order.
    pub followers: Vec<User>,
    /// Users this user follows, in user insertion order.
    pub following: Vec<User>,
}

/// A post with its author resolved. `author` is `None` when the post was
/// created for an id that names no user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostView {
    pub post: Post,
    pub author: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author: Option<User>,
}
