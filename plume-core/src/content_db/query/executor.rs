// FICHIER : plume-core/src/content_db/query/executor.rs

//! Exécution du pipeline de requête sur une liste d'items déjà chargée.
//! Les filtres commutent entre eux (chacun ne fait que retenir) ; seul le
//! tri, appliqué en dernier, détermine l'ordre final.

use crate::content_db::items::Item;
use crate::content_db::query::{ItemQuery, SortField, SortKey};
use crate::utils::prelude::*;
use crate::utils::Ordering;
use regex::RegexBuilder;

/// Applique la requête complète :
/// 1. filtrage par collection, 2. texte libre sur le titre, 3. statut,
/// 4. tri. Chaque étape est sautée quand son critère est omis.
pub fn apply(mut items: Vec<Item>, query: &ItemQuery) -> Vec<Item> {
    // 1. COLLECTION
    if let Some(collection_id) = &query.collection_id {
        items.retain(|item| &item.collection_id == collection_id);
    }

    // 2. TEXTE LIBRE
    if let Some(q) = &query.q {
        retain_title_matches(&mut items, q);
    }

    // 3. STATUT (la chaîne vide équivaut à « tous »)
    if let Some(status) = &query.status {
        if !status.is_empty() {
            items.retain(|item| item.status().as_deref() == Some(status.as_str()));
        }
    }

    // 4. TRI
    if let Some(raw) = &query.sort {
        match SortKey::parse(raw) {
            Some(key) => items.sort_by(|a, b| compare_items(a, b, key)),
            None => debug!("Clé de tri inconnue, ordre inchangé : {}", raw),
        }
    }

    items
}

/// Texte libre sur le titre, sans casse. Le motif est d'abord tenté comme
/// expression régulière ; s'il est invalide, on dégrade en recherche de
/// sous-chaîne littérale plutôt que d'échouer.
fn retain_title_matches(items: &mut Vec<Item>, q: &str) {
    match RegexBuilder::new(q).case_insensitive(true).build() {
        Ok(re) => items.retain(|item| item.title().is_some_and(|title| re.is_match(&title))),
        Err(_) => {
            debug!("Motif invalide, repli en recherche littérale : {}", q);
            let needle = q.to_lowercase();
            items.retain(|item| {
                item.title()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            });
        }
    }
}

/// Ordre naturel d'une clé : `id` alphabétique croissant, horodatages du
/// plus récent au plus ancien. La comparaison se fait sur la forme texte
/// stockée (`AAAA-MM-JJ`), où ordre lexicographique et ordre
/// chronologique coïncident ; un horodatage absent classe l'item en fin.
fn compare_items(a: &Item, b: &Item, key: SortKey) -> Ordering {
    let ordering = match key.field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::CreatedAt => stamp_of(b, "created_at").cmp(&stamp_of(a, "created_at")),
        SortField::UpdatedAt => stamp_of(b, "updated_at").cmp(&stamp_of(a, "updated_at")),
    };
    if key.reversed {
        ordering.reverse()
    } else {
        ordering
    }
}

fn stamp_of(item: &Item, field: &str) -> String {
    item.field_str(field).unwrap_or_default()
}
