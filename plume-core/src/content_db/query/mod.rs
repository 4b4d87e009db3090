// FICHIER : plume-core/src/content_db/query/mod.rs

//! Moteur de requêtes du référentiel : une requête déclarative
//! ([`ItemQuery`]) et son exécution en pipeline ([`executor`]).
//! Les catalogues `sort_options` / `status_options` alimentent les
//! couches d'administration (menus déroulants des listes).

pub mod executor;

pub use executor::apply;

use crate::content_db::schema::SelectOption;
use crate::utils::prelude::*;

/// Requête de liste. Chaque critère est optionnel et sans effet quand il
/// est omis ; l'ordre d'application est fixe : collection, texte libre,
/// statut, puis tri.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Égalité stricte sur le `kind` des items.
    pub collection_id: Option<String>,
    /// Texte libre, cherché sans casse dans le titre. Motif regex toléré.
    pub q: Option<String>,
    /// Égalité stricte sur le statut ; la chaîne vide vaut « tous ».
    pub status: Option<String>,
    /// Clé de tri `[-]champ` parmi `id`, `created_at`, `updated_at`.
    pub sort: Option<String>,
}

// --- CLÉS DE TRI ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    CreatedAt,
    UpdatedAt,
}

/// Clé de tri analysée : le champ et son éventuelle inversion (`-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub reversed: bool,
}

impl SortKey {
    /// Analyse une clé `[-]champ`. Une clé inconnue donne `None` et le
    /// tri est alors sans effet, comme tout critère omis.
    pub fn parse(raw: &str) -> Option<Self> {
        let (reversed, name) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let field = match name {
            "id" => SortField::Id,
            "created_at" => SortField::CreatedAt,
            "updated_at" => SortField::UpdatedAt,
            _ => return None,
        };
        Some(SortKey { field, reversed })
    }
}

// --- CATALOGUES D'ADMINISTRATION ---

/// Les tris proposés dans les listes, dans l'ordre d'affichage. L'ordre
/// naturel des horodatages va du plus récent au plus ancien ; `-` inverse.
pub fn sort_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("id", "Nom (a-z)"),
        SelectOption::new("-id", "Nom (z-a)"),
        SelectOption::new("created_at", "Création (récent d'abord)"),
        SelectOption::new("-created_at", "Création (ancien d'abord)"),
        SelectOption::new("updated_at", "Modification (récent d'abord)"),
        SelectOption::new("-updated_at", "Modification (ancien d'abord)"),
    ]
}

/// Les statuts filtrables ; la valeur vide signifie « tous ».
pub fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("", "Tous"),
        SelectOption::new("draft", "Brouillon"),
        SelectOption::new("published", "Publié"),
    ]
}
