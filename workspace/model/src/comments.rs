use tracing::{debug, info, instrument};

use crate::entities::author::Author;
use crate::entities::comment::Comment;
use crate::error::{ModelError, Result};
use crate::like::{LikeChange, LikeState, Likeable};

/// The comments shown under one recipe.
///
/// Changes stay local to the thread; nothing is sent upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    comments: Vec<Comment>,
    next_local_id: u64,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            next_local_id: 1,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Prepends a comment by `author`. Blank text is rejected.
    #[instrument(skip(self, text, author), fields(author = %author.id))]
    pub fn post(&mut self, text: &str, author: &Author) -> Result<&Comment> {
        if text.trim().is_empty() {
            debug!("Rejected blank comment");
            return Err(ModelError::EmptyComment);
        }

        let comment = Comment {
            id: format!("temp-{}", self.next_local_id),
            text: text.to_string(),
            author: author.clone(),
            created_at: "Just now".to_string(),
            likes: LikeState::new(false, 0),
        };
        self.next_local_id += 1;
        info!(id = %comment.id, "Posted comment");

        self.comments.insert(0, comment);
        Ok(&self.comments[0])
    }

    pub fn toggle_like(&mut self, id: &str) -> Result<LikeChange> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ModelError::not_found("Comment", id))?;
        Ok(comment.toggle_like())
    }

    /// Removes a comment; only its author may do so.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str, requester_id: &str) -> Result<Comment> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ModelError::not_found("Comment", id))?;
        if self.comments[index].author.id != requester_id {
            return Err(ModelError::NotOwner("delete this comment"));
        }
        info!("Deleted comment");
        Ok(self.comments.remove(index))
    }

    pub fn can_delete(comment: &Comment, requester_id: &str) -> bool {
        comment.author.id == requester_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::{MockStore, CURRENT_USER_ID};
    use crate::store::CookbookStore;

    fn thread() -> CommentThread {
        CommentThread::new(MockStore::new().comments("1"))
    }

    fn me() -> Author {
        MockStore::new().current_user().as_author()
    }

    #[test]
    fn test_liking_a_comment_twice() {
        let mut thread = thread();
        let id = thread.comments()[0].id.clone();
        assert_eq!(thread.comments()[0].likes, LikeState::new(false, 5));

        assert_eq!(thread.toggle_like(&id).unwrap(), LikeChange::Liked);
        assert_eq!(thread.comments()[0].likes, LikeState::new(true, 6));

        assert_eq!(thread.toggle_like(&id).unwrap(), LikeChange::Unliked);
        assert_eq!(thread.comments()[0].likes, LikeState::new(false, 5));
    }

    #[test]
    fn test_post_prepends() {
        let mut thread = thread();
        let before = thread.len();
        let posted = thread.post("Lovely!", &me()).unwrap().clone();

        assert_eq!(thread.len(), before + 1);
        assert_eq!(thread.comments()[0], posted);
        assert_eq!(posted.author.id, CURRENT_USER_ID);
        assert_eq!(posted.likes, LikeState::new(false, 0));
        assert_eq!(posted.created_at, "Just now");

        let second = thread.post("Again", &me()).unwrap().id.clone();
        assert_ne!(second, posted.id);
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let mut thread = thread();
        let before = thread.clone();
        assert_eq!(thread.post("   \n", &me()).unwrap_err(), ModelError::EmptyComment);
        assert_eq!(thread, before);
    }

    #[test]
    fn test_only_author_can_delete() {
        let mut thread = thread();
        let foreign = thread.comments()[0].id.clone();
        assert_eq!(
            thread.delete(&foreign, CURRENT_USER_ID).unwrap_err(),
            ModelError::NotOwner("delete this comment")
        );

        let mine = thread.post("Mine", &me()).unwrap().id.clone();
        let removed = thread.delete(&mine, CURRENT_USER_ID).unwrap();
        assert_eq!(removed.text, "Mine");
        assert!(thread.comments().iter().all(|c| c.id != mine));
    }

    #[test]
    fn test_unknown_comment() {
        let mut thread = thread();
        assert!(matches!(
            thread.toggle_like("nope"),
            Err(ModelError::NotFound { kind: "Comment", .. })
        ));
    }
}
