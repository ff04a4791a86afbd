use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::helpers::recover;
use crate::models::{Comment, Post, Seed, User};

/// The three collections, in insertion order, plus the id counters for the
/// collections the API can grow.
#[derive(Debug, Default)]
pub struct Collections {
    pub(crate) users: Vec<User>,
    pub(crate) posts: Vec<Post>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) next_post_id: u64,
    pub(crate) next_comment_id: u64,
}

impl Collections {
    pub(crate) fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub(crate) fn user_index(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    pub(crate) fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub(crate) fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }
}

/// In-memory social graph. Owns every user, post and comment; the methods in
/// `users`, `posts` and `follow` are the only way to read or change them.
///
/// All access goes through a single store-wide lock: queries share it,
/// mutations hold it exclusively for the whole read-modify-write.
#[derive(Debug)]
pub struct SocialGraph {
    inner: RwLock<Collections>,
}

impl SocialGraph {
    /// An empty graph. The first post and comment get id "1".
    pub fn new() -> Self {
        Self::from_seed(Seed::default())
    }

    /// A graph loaded with the built-in fixture (Alice, Bob and one post).
    pub fn seeded() -> anyhow::Result<Self> {
        Ok(Self::from_seed(Seed::builtin()?))
    }

    pub fn from_seed(seed: Seed) -> Self {
        let Seed { mut users, mut posts } = seed;

        // Comments are never seeded, so any comment id a post arrives with
        // would dangle or collide with the first real comment.
        for post in posts.iter_mut() {
            post.comment_ids.clear();
        }

        // Rebuild followers from following so both sides agree from the start.
        for user in users.iter_mut() {
            user.followers.clear();
        }
        let edges: Vec<(String, String)> = users
            .iter()
            .flat_map(|u| u.following.iter().map(move |f| (u.id.clone(), f.clone())))
            .collect();
        for (follower, followee) in edges {
            if let Some(target) = users.iter_mut().find(|u| u.id == followee) {
                if !target.followers.contains(&follower) {
                    target.followers.push(follower);
                }
            }
        }

        // Start past both the collection size and every numeric seeded id,
        // so a new post can never take an id that is already present.
        let next_post_id = posts
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .map(|id| id.saturating_add(1))
            .fold(posts.len() as u64 + 1, u64::max);

        let collections = Collections {
            next_post_id,
            next_comment_id: 1,
            users,
            posts,
            comments: Vec::new(),
        };

        Self {
            inner: RwLock::new(collections),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Collections> {
        recover(self.inner.read())
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        recover(self.inner.write())
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.read().posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.read().comments.len()
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}
