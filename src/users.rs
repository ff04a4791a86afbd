use crate::core::helpers::contains_ignore_case;
use crate::models::{User, UserView};
use crate::store::{Collections, SocialGraph};

impl Collections {
    pub(crate) fn user_view(&self, user: &User) -> UserView {
        UserView {
            user: user.clone(),
            posts: self.posts_by_author(&user.id),
            followers: self.followers_of(&user.id),
            following: self.following_of(user),
        }
    }
}

impl SocialGraph {
    /// Look a user up by exact id and resolve its posts, followers and
    /// following. Returns `None` for an unknown id.
    pub fn get_user(&self, id: &str) -> Option<UserView> {
        let data = self.read();
        data.user(id).map(|user| data.user_view(user))
    }

    /// Users whose name contains `pattern`, ignoring case, in insertion order.
    pub fn find_users_by_name(&self, pattern: &str) -> Vec<User> {
        self.read()
            .users
            .iter()
            .filter(|u| contains_ignore_case(&u.name, pattern))
            .cloned()
            .collect()
    }

    /// The stored record, without resolving relations.
    pub fn find_user(&self, id: &str) -> Option<User> {
        self.read().user(id).cloned()
    }
}
