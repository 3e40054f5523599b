//! Blog post catalog.
//!
//! The catalog is a JSON array of post records. Only the fields the
//! cover pipeline needs are modeled; the web app keeps richer objects in
//! the same file and the extra fields are ignored on load.

pub mod style;

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// One blog post, as far as cover generation is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
}

/// Catalog-related errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read post catalog `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("post catalog `{0}` is not a valid post array")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// In-memory post catalog with id and category lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    /// Build a catalog from posts already in memory.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load the catalog from a JSON array file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw =
            fs::read_to_string(path).map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
        let posts = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::Json(path.to_path_buf(), e))?;
        Ok(Self { posts })
    }

    /// All posts, in file order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id.
    pub fn by_id(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All posts in a category (exact name match).
    pub fn in_category<'a>(&'a self, category: &str) -> Vec<&'a Post> {
        self.posts
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 22,
            "slug": "cirurgia-refrativa",
            "title": "Cirurgia Refrativa: Mitos e Verdades",
            "excerpt": "O que esperar da cirurgia a laser.",
            "category": "Tratamento",
            "author": "ignored-extra-field",
            "tags": ["laser"]
        },
        {
            "id": 23,
            "slug": "lentes-de-contato",
            "title": "Lentes de Contato na Infância",
            "excerpt": "Quando lentes são indicadas para crianças.",
            "category": "Prevenção"
        }
    ]"#;

    fn write_catalog(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_posts_and_ignores_extra_fields() {
        let (_dir, path) = write_catalog(SAMPLE);
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.posts()[0].slug, "cirurgia-refrativa");
    }

    #[test]
    fn lookup_by_id_and_category() {
        let (_dir, path) = write_catalog(SAMPLE);
        let catalog = Catalog::load(&path).unwrap();

        assert_eq!(catalog.by_id(23).unwrap().category, "Prevenção");
        assert!(catalog.by_id(99).is_none());

        let treatment = catalog.in_category("Tratamento");
        assert_eq!(treatment.len(), 1);
        assert_eq!(treatment[0].id, 22);
        assert!(catalog.in_category("Tecnologia").is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/posts.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_, _)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let (_dir, path) = write_catalog("{\"posts\": 1}");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_, _)));
    }

    #[test]
    fn missing_required_field_is_json_error() {
        let (_dir, path) = write_catalog(r#"[{"id": 1, "slug": "x", "title": "t"}]"#);
        assert!(Catalog::load(&path).is_err());
    }
}
