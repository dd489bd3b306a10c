// tests/support/mocks/repos.rs
use async_trait::async_trait;
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::post::{NewPost, Post, PostId, PostRepository, PostUpdate};
use blog_core::domain::user::{Email, NewUser, User, UserId, UserRepository, Username};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

struct StoredPost {
    post: Post,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<BTreeMap<i64, StoredPost>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let id = posts.len() as i64 + 1;
        let post = Post {
            id: PostId::new(id)?,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        posts.insert(
            id,
            StoredPost {
                post: post.clone(),
                deleted_at: None,
            },
        );
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .get(&i64::from(id))
            .filter(|p| p.deleted_at.is_none())
            .map(|p| p.post.clone()))
    }

    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let live: Vec<Post> = posts
            .values()
            .rev()
            .filter(|p| p.deleted_at.is_none())
            .map(|p| p.post.clone())
            .collect();
        let total = live.len() as u64;
        let items = live
            .into_iter()
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .collect();
        Ok((items, total))
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let stored = posts
            .get_mut(&i64::from(update.id))
            .filter(|p| p.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(title) = update.title {
            stored.post.title = title;
        }
        if let Some(content) = update.content {
            stored.post.content = content;
        }
        stored.post.updated_at = update.updated_at;
        Ok(stored.post.clone())
    }

    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let stored = posts
            .get_mut(&i64::from(id))
            .filter(|p| p.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        stored.deleted_at = Some(deleted_at);
        Ok(())
    }
}
