// FICHIER : plume-core/src/content_db/storage/mod.rs

//! Configuration du stockage : racine de contenu, collections connues
//! et résolution des chemins canoniques.

pub mod file_storage;

use crate::content_db::schema::{CmsConfig, Collection};
use std::path::{Path, PathBuf};

// --- CONFIGURATION ---

/// Racine de contenu + collections. Construite une fois au démarrage puis
/// partagée en lecture seule — aucun état global, la valeur circule
/// explicitement (les managers l'empruntent).
#[derive(Debug, Clone)]
pub struct ContentDbConfig {
    pub content_root: PathBuf,
    pub collections: Vec<Collection>,
}

impl ContentDbConfig {
    /// Les champs implicites sont fusionnés ici, quelle que soit la
    /// provenance des collections (fichier de config ou construction directe).
    pub fn new(content_root: PathBuf, collections: Vec<Collection>) -> Self {
        let collections = collections
            .into_iter()
            .map(Collection::with_implicit_fields)
            .collect();
        Self {
            content_root,
            collections,
        }
    }

    /// Construit la configuration depuis un fichier de config désérialisé ;
    /// `content_dir` est résolu relativement à `base_dir`.
    pub fn from_cms_config(cfg: CmsConfig, base_dir: &Path) -> Self {
        Self::new(base_dir.join(&cfg.content_dir), cfg.collections)
    }

    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Dossier de stockage d'une collection. Un `location` commençant par `/`
    /// désigne la racine de contenu elle-même, jamais la racine du système.
    pub fn collection_root(&self, collection: &Collection) -> PathBuf {
        let rel = collection.location.trim_start_matches('/');
        if rel.is_empty() {
            self.content_root.clone()
        } else {
            self.content_root.join(rel)
        }
    }

    /// Chemin canonique d'un item : `<racine>/<location>/<id>.<extension>`.
    /// Les écritures passent toujours par ce chemin ; les lectures, elles,
    /// parcourent tout l'arbre.
    pub fn canonical_path(&self, collection: &Collection, id: &str) -> PathBuf {
        self.collection_root(collection)
            .join(format!("{}.{}", id, collection.filetype.extension()))
    }
}
