//! # Post Store
//!
//! File-backed persistence for posts: one JSON document per post under
//! `<content_root>/posts/`. The engine treats loaded posts as immutable
//! input; writers own any concurrency concerns.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{Catalog, Post};

const POSTS_DIR: &str = "posts";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Post file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed post file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read and decode a single post file
pub fn read_post(file_name: &str, content_root: &Path) -> Result<Post, StoreError> {
    let path = content_root.join(POSTS_DIR).join(file_name);
    if !path.exists() {
        return Err(StoreError::NotFound(path));
    }
    let content = fs::read_to_string(&path).map_err(StoreError::Io)?;
    serde_json::from_str(&content).map_err(|source| StoreError::Malformed { path, source })
}

/// Write a post to `posts/<id>.json`, creating directories as needed
pub fn write_post(post: &Post, content_root: &Path) -> Result<(), StoreError> {
    let path = content_root.join(POSTS_DIR).join(format!("{}.json", post.id));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(StoreError::Io)?;
    }

    let json = serde_json::to_string_pretty(post).map_err(|source| StoreError::Malformed {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(StoreError::Io)
}

/// List post files in the content directory, sorted by path
pub fn scan_post_files(content_root: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let posts_dir = content_root.join(POSTS_DIR);
    if !posts_dir.exists() {
        return Err(StoreError::InvalidContentDir(
            "posts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&posts_dir).map_err(StoreError::Io)? {
        let entry = entry.map_err(StoreError::Io)?;
        let path = entry.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every post file into a display-ordered catalog
pub fn load_catalog(content_root: &Path) -> Result<Catalog, StoreError> {
    let mut catalog = Catalog::new();
    for path in scan_post_files(content_root)? {
        let content = fs::read_to_string(&path).map_err(StoreError::Io)?;
        let post: Post = serde_json::from_str(&content)
            .map_err(|source| StoreError::Malformed { path, source })?;
        catalog.add_post(post);
    }
    Ok(catalog)
}

pub fn validate_content_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() || !path.is_dir() {
        return Err(StoreError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, BlockBody};
    use crate::tests::{create_test_content_dir, create_test_post_file};

    fn sample_post(id: &str, sort_order: i64) -> Post {
        let mut post = Post::new("Hola".into());
        post.id = id.to_string();
        post.sort_order = sort_order;
        post.blocks.push(Block::new(BlockBody::Text {
            content: "un **texto** con [enlace](https://example.com)".into(),
        }));
        post
    }

    #[test]
    fn write_then_read_roundtrips() {
        let content_dir = create_test_content_dir();
        let post = sample_post("p1", 3);

        write_post(&post, content_dir.path()).unwrap();
        let loaded = read_post("p1.json", content_dir.path()).unwrap();
        assert_eq!(loaded, post);
    }

    #[test]
    fn write_creates_posts_directory() {
        let content_dir = create_test_content_dir();
        write_post(&sample_post("p1", 0), content_dir.path()).unwrap();

        let posts_dir = content_dir.path().join("posts");
        assert!(posts_dir.is_dir());
        assert!(posts_dir.join("p1.json").exists());
    }

    #[test]
    fn write_overwrites_existing_post() {
        let content_dir = create_test_content_dir();
        write_post(&sample_post("p1", 0), content_dir.path()).unwrap();

        let mut updated = sample_post("p1", 0);
        updated.visible = false;
        write_post(&updated, content_dir.path()).unwrap();

        let loaded = read_post("p1.json", content_dir.path()).unwrap();
        assert!(!loaded.visible);
    }

    #[test]
    fn read_missing_post_is_not_found() {
        let content_dir = create_test_content_dir();
        write_post(&sample_post("p1", 0), content_dir.path()).unwrap();

        let result = read_post("nope.json", content_dir.path());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn malformed_post_reports_path() {
        let content_dir = create_test_content_dir();
        create_test_post_file(&content_dir, "bad.json", "{ not json");

        let result = read_post("bad.json", content_dir.path());
        match result {
            Err(StoreError::Malformed { path, .. }) => {
                assert!(path.ends_with("posts/bad.json"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn scan_ignores_non_json_files() {
        let content_dir = create_test_content_dir();
        write_post(&sample_post("p1", 0), content_dir.path()).unwrap();
        create_test_post_file(&content_dir, "notes.txt", "not a post");

        let files = scan_post_files(content_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "p1.json");
    }

    #[test]
    fn scan_without_posts_dir_is_invalid() {
        let content_dir = create_test_content_dir();
        let result = scan_post_files(content_dir.path());
        assert!(matches!(result, Err(StoreError::InvalidContentDir(_))));
    }

    #[test]
    fn load_catalog_orders_by_sort_order() {
        let content_dir = create_test_content_dir();
        write_post(&sample_post("zzz", 1), content_dir.path()).unwrap();
        write_post(&sample_post("aaa", 2), content_dir.path()).unwrap();

        let catalog = load_catalog(content_dir.path()).unwrap();
        let ids: Vec<_> = catalog.posts().map(|p| p.id.as_str()).collect();
        // sort_order wins over file-name order
        assert_eq!(ids, ["zzz", "aaa"]);
    }

    #[test]
    fn validate_content_dir_exists() {
        let content_dir = create_test_content_dir();
        assert!(validate_content_dir(content_dir.path()).is_ok());
    }

    #[test]
    fn validate_content_dir_missing() {
        let result = validate_content_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(StoreError::InvalidContentDir(_))));
    }
}
