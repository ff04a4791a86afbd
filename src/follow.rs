use crate::core::errors::{ApiError, ApiResult};
use crate::models::User;
use crate::store::{Collections, SocialGraph};

impl Collections {
    /// Every user whose `following` contains `user_id`.
    pub(crate) fn followers_of(&self, user_id: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.following.iter().any(|id| id == user_id))
            .cloned()
            .collect()
    }

    /// Every user named in `user.following`, in user insertion order.
    pub(crate) fn following_of(&self, user: &User) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| user.following.contains(&u.id))
            .cloned()
            .collect()
    }
}

impl SocialGraph {
    /// Make `follower_id` follow `followee_id` and return the followee.
    ///
    /// Both sides of the edge are written under the same lock, so
    /// `followee_id ∈ follower.following` holds exactly when
    /// `follower_id ∈ followee.followers`. Following twice changes nothing.
    pub fn follow_user(&self, follower_id: &str, followee_id: &str) -> ApiResult<User> {
        let mut data = self.write();
        let follower = data
            .user_index(follower_id)
            .ok_or_else(|| ApiError::user_not_found(follower_id))?;
        let followee = data
            .user_index(followee_id)
            .ok_or_else(|| ApiError::user_not_found(followee_id))?;

        if !data.users[follower].following.iter().any(|id| id == followee_id) {
            data.users[follower].following.push(followee_id.to_string());
            data.users[followee].followers.push(follower_id.to_string());
        }

        Ok(data.users[followee].clone())
    }

    pub fn followers_of(&self, user_id: &str) -> Vec<User> {
        self.read().followers_of(user_id)
    }

    /// Users followed by `user_id`; empty for an unknown id.
    pub fn following_of(&self, user_id: &str) -> Vec<User> {
        let data = self.read();
        match data.user(user_id) {
            Some(user) => data.following_of(user),
            None => Vec::new(),
        }
    }
}
