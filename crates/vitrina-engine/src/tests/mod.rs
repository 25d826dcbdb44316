use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary content directory
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file under `posts/` with raw content
pub fn create_test_post_file(content_dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let posts_dir = content_dir.path().join("posts");
    fs::create_dir_all(&posts_dir).unwrap();
    let file_path = posts_dir.join(file_name);
    fs::write(&file_path, content).unwrap();
    file_path
}
