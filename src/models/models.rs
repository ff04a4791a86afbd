use serde::{Serialize, Deserialize};

pub type Followings = Vec<String>;
pub type Followers = Vec<String>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Ids of the users this user follows, in follow order.
    #[serde(default)]
    pub following: Followings,
    /// Ids of the users following this user. Kept in step with `following`
    /// by the follow operation.
    #[serde(default)]
    pub followers: Followers,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comment_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author_id: String,
}

