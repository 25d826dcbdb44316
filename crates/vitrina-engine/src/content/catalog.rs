use std::collections::BTreeMap;

use super::post::Post;

/// In-memory set of posts ordered for display.
///
/// Uses BTreeMap keyed by `(sort_order, id)` for automatic ordering: the
/// custom sort order decides, ties break on id so iteration is stable.
#[derive(Debug, Default)]
pub struct Catalog {
    posts: BTreeMap<(i64, String), Post>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single post. A post with the same id replaces the old one even
    /// if its sort order changed.
    pub fn add_post(&mut self, post: Post) {
        self.remove_post(&post.id);
        self.posts
            .insert((post.sort_order, post.id.clone()), post);
    }

    /// Add multiple posts in a batch
    pub fn add_posts(&mut self, posts: impl IntoIterator<Item = Post>) {
        for post in posts {
            self.add_post(post);
        }
    }

    /// All posts in display order
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    /// Display-ordered posts with the visibility flag set
    pub fn visible_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts().filter(|p| p.visible)
    }

    /// Look up a post by id
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.values().find(|p| p.id == id)
    }

    /// Get the number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Remove a post by id
    ///
    /// Returns the removed post if it existed
    pub fn remove_post(&mut self, id: &str) -> Option<Post> {
        let key = self
            .posts
            .keys()
            .find(|(_, post_id)| post_id == id)
            .cloned()?;
        self.posts.remove(&key)
    }

    /// Remove all posts from the catalog
    pub fn clear(&mut self) {
        self.posts.clear();
    }
}
