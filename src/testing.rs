//! In-memory [`PostsApi`] used by the unit tests.

use std::cell::RefCell;

use crate::client::PostsApi;
use crate::types::*;

#[derive(Default)]
pub(crate) struct StaticApi {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    /// Posts whose comments request fails.
    pub failing_comments: Vec<u64>,
    /// Paths requested so far, in order.
    pub calls: RefCell<Vec<String>>,
}

impl StaticApi {
    pub fn sample() -> Self {
        let users = vec![
            user(1, "Leanne Graham", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Deckow-Crist"),
        ];
        let posts = vec![post(1, 1), post(2, 1), post(3, 2), post(4, 2)];
        let comments = vec![comment(1, "one"), comment(1, "two"), comment(3, "three")];
        Self {
            users,
            posts,
            comments,
            failing_comments: Vec::new(),
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, path: String) {
        self.calls.borrow_mut().push(path);
    }
}

pub(crate) fn user(id: u64, name: &str, company: &str) -> User {
    User {
        id,
        name: name.to_string(),
        company: Company {
            name: company.to_string(),
            catch_phrase: format!("{company} catch phrase"),
        },
    }
}

pub(crate) fn post(id: u64, user_id: u64) -> Post {
    Post {
        id,
        user_id,
        title: format!("post {id}"),
        body: format!("body of post {id}"),
    }
}

pub(crate) fn comment(post_id: u64, name: &str) -> Comment {
    Comment {
        post_id,
        name: name.to_string(),
        email: format!("{name}@example.com"),
        body: format!("{name} says hi"),
    }
}

impl PostsApi for StaticApi {
    async fn list_users(&self) -> Option<Vec<User>> {
        self.record("/users".to_string());
        Some(self.users.clone())
    }

    async fn list_user_posts(&self, user_id: Option<u64>) -> Option<Vec<Post>> {
        let user_id = present_id(user_id)?;
        self.record(format!("/users/{user_id}/posts"));
        Some(self.posts.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }

    async fn get_user(&self, user_id: Option<u64>) -> Option<User> {
        let user_id = present_id(user_id)?;
        self.record(format!("/users/{user_id}"));
        self.users.iter().find(|u| u.id == user_id).cloned()
    }

    async fn list_post_comments(&self, post_id: Option<u64>) -> Option<Vec<Comment>> {
        let post_id = present_id(post_id)?;
        self.record(format!("/posts/{post_id}/comments"));
        if self.failing_comments.contains(&post_id) {
            return None;
        }
        Some(self.comments.iter().filter(|c| c.post_id == post_id).cloned().collect())
    }
}
