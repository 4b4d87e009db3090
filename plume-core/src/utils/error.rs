// FICHIER : plume-core/src/utils/error.rs

use std::io;
use std::path::PathBuf;

// --- RE-EXPORTS ANYHOW (Pour la flexibilité du CLI) ---
// On expose les outils flexibles pour l'application finale
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

// --- GESTION D'ERREUR STRICTE (Cœur Plume) ---

/// Type de résultat standard pour la bibliothèque Plume.
pub type PlumeResult<T> = std::result::Result<T, PlumeError>;

/// Enumération centrale des erreurs du référentiel de contenu.
/// Elle dérive `thiserror::Error` pour faciliter la conversion automatique.
#[derive(Debug, thiserror::Error)]
pub enum PlumeError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    #[error("Collection inconnue : {0}")]
    UnknownCollection(String),

    #[error("Introuvable : {0}")]
    NotFound(String),

    #[error("Un item du même nom existe déjà : {0}")]
    DuplicateRecord(String),

    #[error("Identifiant ambigu : {count} fichiers portent le radical « {id} »")]
    AmbiguousId { id: String, count: usize },

    #[error("Titre invalide, impossible d'en dériver un identifiant : {0:?}")]
    InvalidTitle(String),

    #[error("Enregistrement illisible {path:?} : {reason}")]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Erreur de sérialisation YAML : {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Erreur de sérialisation JSON : {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

// Helpers pour convertir des erreurs string en PlumeError
// Permet de faire : return Err("Mon erreur".into());
impl From<String> for PlumeError {
    fn from(s: String) -> Self {
        PlumeError::System(anyhow::anyhow!(s))
    }
}

// Permet de faire : return Err("Mon erreur literal".into());
impl From<&str> for PlumeError {
    fn from(s: &str) -> Self {
        PlumeError::System(anyhow::anyhow!(s.to_string()))
    }
}
