// src/infrastructure/repositories/memory_comment.rs
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentRepository, CommentState, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Comment store kept in process memory, for tests and for embedding the
/// services without a database. Every cascade runs under a single write
/// lock, so readers observe either none or all of its effects.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    arena: RwLock<Arena>,
}

#[derive(Default)]
struct Arena {
    rows: BTreeMap<CommentId, Comment>,
    next_id: i64,
}

impl Arena {
    fn allocate(&mut self) -> DomainResult<CommentId> {
        self.next_id += 1;
        CommentId::new(self.next_id)
    }

    fn in_scope(comment: &Comment, id: CommentId, cascade: bool) -> bool {
        comment.id == id || (cascade && comment.is_child_of(id))
    }
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut arena = self.arena.write().await;
        let id = arena.allocate()?;
        let stored = Comment {
            id,
            content: comment.content,
            author_id: comment.author_id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
            state: CommentState::Live,
        };
        arena.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_live(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let arena = self.arena.read().await;
        Ok(arena.rows.get(&id).filter(|c| c.is_live()).cloned())
    }

    async fn find_any(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let arena = self.arena.read().await;
        Ok(arena.rows.get(&id).cloned())
    }

    async fn update_content(
        &self,
        id: CommentId,
        content: CommentContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment> {
        let mut arena = self.arena.write().await;
        let comment = arena
            .rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.set_content(content, updated_at);
        Ok(comment.clone())
    }

    async fn soft_delete(
        &self,
        id: CommentId,
        cascade: bool,
        deleted_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut arena = self.arena.write().await;
        let mut affected = 0;
        for comment in arena.rows.values_mut() {
            if Arena::in_scope(comment, id, cascade) && comment.is_live() {
                comment.mark_deleted(deleted_at);
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn restore(&self, id: CommentId, cascade: bool) -> DomainResult<u64> {
        let mut arena = self.arena.write().await;
        let mut affected = 0;
        for comment in arena.rows.values_mut() {
            if Arena::in_scope(comment, id, cascade) && !comment.is_live() {
                comment.restore();
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn list_live_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let arena = self.arena.read().await;
        let mut comments: Vec<Comment> = arena
            .rows
            .values()
            .filter(|c| c.post_id == post_id && c.is_live())
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::Duration;
    use std::sync::Arc;

    fn new_comment(post: i64, parent: Option<CommentId>) -> NewComment {
        NewComment {
            content: CommentContent::new("text").unwrap(),
            author_id: UserId::new(1).unwrap(),
            post_id: PostId::new(post).unwrap(),
            parent_id: parent,
            created_at: Utc::now(),
        }
    }

    async fn seed_thread(repo: &InMemoryCommentRepository) -> (CommentId, Vec<CommentId>) {
        let root = repo.insert(new_comment(1, None)).await.unwrap().id;
        let mut children = Vec::new();
        for _ in 0..3 {
            children.push(repo.insert(new_comment(1, Some(root))).await.unwrap().id);
        }
        (root, children)
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let repo = InMemoryCommentRepository::new();
        let first = repo.insert(new_comment(1, None)).await.unwrap();
        let second = repo.insert(new_comment(1, None)).await.unwrap();
        assert_eq!(i64::from(first.id), 1);
        assert_eq!(i64::from(second.id), 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn cascade_delete_marks_root_and_direct_children() {
        let repo = InMemoryCommentRepository::new();
        let (root, children) = seed_thread(&repo).await;
        let grandchild = repo
            .insert(new_comment(1, Some(children[0])))
            .await
            .unwrap()
            .id;

        let affected = repo.soft_delete(root, true, Utc::now()).await.unwrap();

        assert_eq!(affected, 4);
        assert!(repo.find_live(root).await.unwrap().is_none());
        for child in &children {
            assert!(repo.find_live(*child).await.unwrap().is_none());
        }
        assert!(repo.find_live(grandchild).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_without_cascade_leaves_children_alone() {
        let repo = InMemoryCommentRepository::new();
        let (root, children) = seed_thread(&repo).await;

        let affected = repo.soft_delete(root, false, Utc::now()).await.unwrap();

        assert_eq!(affected, 1);
        for child in &children {
            assert!(repo.find_live(*child).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn repeated_delete_keeps_original_timestamp() {
        let repo = InMemoryCommentRepository::new();
        let (root, _) = seed_thread(&repo).await;
        let first = Utc::now();

        repo.soft_delete(root, false, first).await.unwrap();
        let affected = repo
            .soft_delete(root, false, first + Duration::minutes(1))
            .await
            .unwrap();

        assert_eq!(affected, 0);
        let stored = repo.find_any(root).await.unwrap().unwrap();
        assert_eq!(stored.state.deleted_at(), Some(first));
    }

    #[tokio::test]
    async fn cascade_restore_revives_children_deleted_independently() {
        let repo = InMemoryCommentRepository::new();
        let (root, children) = seed_thread(&repo).await;
        repo.soft_delete(children[1], false, Utc::now())
            .await
            .unwrap();
        repo.soft_delete(root, false, Utc::now()).await.unwrap();

        let affected = repo.restore(root, true).await.unwrap();

        assert_eq!(affected, 2);
        for child in &children {
            assert!(repo.find_live(*child).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn listing_skips_deleted_and_other_posts() {
        let repo = InMemoryCommentRepository::new();
        let (root, children) = seed_thread(&repo).await;
        repo.insert(new_comment(2, None)).await.unwrap();
        repo.soft_delete(children[2], false, Utc::now())
            .await
            .unwrap();

        let listed: Vec<CommentId> = repo
            .list_live_by_post(PostId::new(1).unwrap())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(listed, vec![root, children[0], children[1]]);
    }

    #[tokio::test]
    async fn readers_never_observe_a_partial_cascade() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let root = repo.insert(new_comment(1, None)).await.unwrap().id;
        for _ in 0..50 {
            repo.insert(new_comment(1, Some(root))).await.unwrap();
        }

        let writer = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.soft_delete(root, true, Utc::now()).await })
        };

        for _ in 0..20 {
            let live = repo
                .list_live_by_post(PostId::new(1).unwrap())
                .await
                .unwrap()
                .len();
            assert!(live == 51 || live == 0, "observed partial cascade: {live}");
            tokio::task::yield_now().await;
        }

        assert_eq!(writer.await.unwrap().unwrap(), 51);
    }
}
