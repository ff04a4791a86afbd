pub mod models;
pub mod seed;
pub mod views;

pub use models::{Comment, Post, User};
pub use seed::Seed;
pub use views::{CommentView, PostView, UserView};
