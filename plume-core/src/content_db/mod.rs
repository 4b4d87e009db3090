// FICHIER : plume-core/src/content_db/mod.rs

//! Référentiel de contenu sur fichiers plats.
//!
//! Le contenu d'un site vit dans un arbre de fichiers texte : frontmatter
//! YAML + corps pour les collections `html`, bloc YAML nu pour les
//! collections `yaml`. Ce module en fait une base de données de fortune :
//!
//! * [`schema`] — collections, champs typés, configuration du site ;
//! * [`storage`] — racine de contenu, chemins canoniques, primitives
//!   fichiers ;
//! * [`codec`] — cadrage et décadrage des enregistrements ;
//! * [`slug`] — dérivation des identifiants depuis les titres ;
//! * [`items`] — le modèle d'item et le gestionnaire CRUD ;
//! * [`query`] — filtres et tris des listes.
//!
//! Le disque est la seule source de vérité : aucun cache, aucun index.
//! Un éditeur externe, un `git pull`, un item déplacé à la main sont
//! visibles à la lecture suivante.

pub mod codec;
pub mod items;
pub mod query;
pub mod schema;
pub mod slug;
pub mod storage;

/// Format des horodatages persistés (`created_at` / `updated_at`).
/// Lexicographique == chronologique, ce dont le tri profite directement.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// La date du jour, heure locale, au format de persistance.
pub fn today_stamp() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
