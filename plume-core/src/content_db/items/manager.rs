// FICHIER : plume-core/src/content_db/items/manager.rs

//! Le gestionnaire d'items : toutes les opérations CRUD du référentiel.
//!
//! Deux principes structurent ce module :
//!
//! * le disque est la seule source de vérité — pas de cache, chaque
//!   opération relit les fichiers ;
//! * l'identifiant d'un item est le radical de son nom de fichier, et il
//!   est recherché sur **tout** l'arbre de contenu : un fichier déplacé à
//!   la main reste adressable, et l'unicité du radical est globale.

use crate::content_db::codec::{self, RawRecord};
use crate::content_db::query::{self, ItemQuery};
use crate::content_db::schema::{implicit_fields, Collection, Field, FileType};
use crate::content_db::slug;
use crate::content_db::storage::{file_storage, ContentDbConfig};
use crate::content_db::today_stamp;
use crate::utils::fs::{Path, PathBuf};
use crate::utils::prelude::*;

use super::{
    fields_from_mapping, mapping_from_fields, FieldMap, FieldValue, Item, CONTENT_KEY,
    TRANSIENT_KEYS,
};

/// Point d'entrée CRUD du référentiel. Ne détient que la configuration :
/// le gestionnaire est jetable et sans état.
#[derive(Debug)]
pub struct ItemsManager<'a> {
    pub config: &'a ContentDbConfig,
}

impl<'a> ItemsManager<'a> {
    pub fn new(config: &'a ContentDbConfig) -> Self {
        Self { config }
    }

    // --- LECTURES ---

    /// Recherche un item par identifiant et collection.
    ///
    /// Le radical est cherché sur tout l'arbre. Aucun fichier vaut
    /// `Ok(None)` ; plusieurs fichiers portant le même radical sont une
    /// erreur explicite plutôt qu'un choix silencieux ; un `kind`
    /// discordant vaut absence.
    pub fn find(&self, id: &str, collection_id: &str) -> PlumeResult<Option<Item>> {
        let matches = file_storage::find_by_stem(&self.config.content_root, id)?;

        let path = match matches.as_slice() {
            [] => return Ok(None),
            [single] => single,
            many => {
                return Err(PlumeError::AmbiguousId {
                    id: id.to_string(),
                    count: many.len(),
                })
            }
        };

        let item = self.read_item(path)?;
        if item.collection_id == collection_id {
            Ok(Some(item))
        } else {
            debug!(
                "Kind discordant pour {:?} : {} au lieu de {}",
                path, item.collection_id, collection_id
            );
            Ok(None)
        }
    }

    /// Énumère tous les items de l'arbre, toutes collections confondues.
    ///
    /// Les fichiers d'extension inconnue et les enregistrements illisibles
    /// sont ignorés — un seul fichier corrompu ne doit pas casser les
    /// listes — mais chaque enregistrement écarté laisse une trace dans
    /// les logs. Les erreurs d'I/O, elles, remontent.
    pub fn all(&self) -> PlumeResult<Vec<Item>> {
        let mut items = Vec::new();

        for path in file_storage::scan_files(&self.config.content_root)? {
            if FileType::from_path(&path).is_none() {
                debug!("Extension inconnue, fichier ignoré : {:?}", path);
                continue;
            }
            match self.read_item(&path) {
                Ok(item) => items.push(item),
                Err(PlumeError::MalformedRecord { path, reason }) => {
                    warn!("⚠️ Enregistrement illisible ignoré {:?} : {}", path, reason);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(items)
    }

    /// Liste filtrée et triée : `all()` composé avec le pipeline de
    /// requête. Une requête vide rend tout, dans l'ordre du parcours.
    pub fn search(&self, query: &ItemQuery) -> PlumeResult<Vec<Item>> {
        Ok(query::apply(self.all()?, query))
    }

    // --- ÉCRITURES ---

    /// Crée un item dans une collection.
    ///
    /// L'identifiant est dérivé du titre par slugification, et l'unicité
    /// du radical est vérifiée sur tout l'arbre : une collision avec un
    /// item d'une **autre** collection est aussi une collision, puisque
    /// la recherche par radical ignore les frontières de collections.
    /// `kind` et les deux horodatages sont posés d'office.
    pub fn create(&self, collection_id: &str, mut fields: FieldMap) -> PlumeResult<Item> {
        let collection = self.resolve_collection(collection_id)?;

        strip_transient_keys(&mut fields);

        let title = fields
            .get("title")
            .and_then(FieldValue::to_plain_string)
            .unwrap_or_default();
        let id = slug::slugify(&title);
        if !slug::has_word_char(&id) {
            return Err(PlumeError::InvalidTitle(title));
        }

        let existing = file_storage::find_by_stem(&self.config.content_root, &id)?;
        if !existing.is_empty() {
            return Err(PlumeError::DuplicateRecord(id));
        }

        let today = today_stamp();
        fields.insert("kind".to_string(), FieldValue::Text(collection_id.to_string()));
        fields.insert("created_at".to_string(), FieldValue::Text(today.clone()));
        fields.insert("updated_at".to_string(), FieldValue::Text(today));

        let content = extract_content(&mut fields, collection.filetype);

        let item = Item {
            id,
            collection_id: collection_id.to_string(),
            fields,
            content,
        };

        self.write_canonical(collection, &item)?;
        info!("✅ Item créé : {}/{}", collection_id, item.id);
        Ok(item)
    }

    /// Réécrit un item existant.
    ///
    /// `updated_at` est rafraîchi, `created_at` laissé tel quel, `kind`
    /// réaffirmé. L'écriture vise toujours le chemin canonique : un
    /// fichier déplacé à la main est réconcilié à la première édition,
    /// l'ancien emplacement étant supprimé après coup.
    pub fn update(&self, mut item: Item) -> PlumeResult<Item> {
        let collection = self.resolve_collection(&item.collection_id)?;

        let matches = file_storage::find_by_stem(&self.config.content_root, &item.id)?;
        let found: PathBuf = match matches.as_slice() {
            [] => return Err(PlumeError::NotFound(item.id.clone())),
            [single] => single.clone(),
            many => {
                return Err(PlumeError::AmbiguousId {
                    id: item.id.clone(),
                    count: many.len(),
                })
            }
        };

        strip_transient_keys(&mut item.fields);
        item.fields.insert(
            "kind".to_string(),
            FieldValue::Text(item.collection_id.clone()),
        );
        item.fields
            .insert("updated_at".to_string(), FieldValue::Text(today_stamp()));

        // Un corps passé dans les champs (cas des formulaires) rejoint item.content
        if collection.filetype == FileType::Html {
            if let Some(body) = item.fields.shift_remove(CONTENT_KEY) {
                item.content = Some(body.to_plain_string().unwrap_or_default());
            }
        }

        let canonical = self.write_canonical(collection, &item)?;
        if found != canonical {
            info!("Réconciliation du chemin : {:?} -> {:?}", found, canonical);
            file_storage::delete_record(&found)?;
        }

        Ok(item)
    }

    /// Supprime le fichier d'un item, où qu'il soit dans l'arbre. Aucune
    /// consultation du schéma : un item orphelin (collection disparue de
    /// la configuration) reste supprimable.
    pub fn delete(&self, item: &Item) -> PlumeResult<()> {
        let matches = file_storage::find_by_stem(&self.config.content_root, &item.id)?;
        match matches.as_slice() {
            [] => Err(PlumeError::NotFound(item.id.clone())),
            [single] => {
                file_storage::delete_record(single)?;
                info!("🗑️ Item supprimé : {}/{}", item.collection_id, item.id);
                Ok(())
            }
            many => Err(PlumeError::AmbiguousId {
                id: item.id.clone(),
                count: many.len(),
            }),
        }
    }

    // --- AIDES INTERNES ---

    fn resolve_collection(&self, id: &str) -> PlumeResult<&Collection> {
        self.config
            .collection(id)
            .ok_or_else(|| PlumeError::UnknownCollection(id.to_string()))
    }

    /// Sérialise et écrit un item à son chemin canonique
    /// (`racine/location/id.extension`), dossier créé au besoin.
    fn write_canonical(&self, collection: &Collection, item: &Item) -> PlumeResult<PathBuf> {
        let path = self.config.canonical_path(collection, &item.id);
        let mapping = mapping_from_fields(&item.fields);
        let text = codec::serialize(&mapping, item.content.as_deref(), collection.filetype)?;
        file_storage::write_record(&path, &text)?;
        Ok(path)
    }

    /// Lit et décode un fichier d'item. L'extension choisit le cadrage,
    /// le champ `kind` du fichier choisit la collection (et donc les
    /// déclarations qui guident la coercition). Un `kind` inconnu du
    /// schéma retombe sur les seuls champs implicites : l'item reste
    /// lisible, listable et supprimable.
    fn read_item(&self, path: &Path) -> PlumeResult<Item> {
        let filetype = FileType::from_path(path).ok_or_else(|| PlumeError::MalformedRecord {
            path: path.to_path_buf(),
            reason: "extension inconnue".to_string(),
        })?;

        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| PlumeError::MalformedRecord {
                path: path.to_path_buf(),
                reason: "nom de fichier non décodable".to_string(),
            })?
            .to_string();

        let raw = file_storage::read_record(path)?;
        let RawRecord { fields, content } = codec::deserialize(path, &raw, filetype)?;

        let kind = fields
            .iter()
            .find_map(|(key, value)| match (key.as_str(), value.as_str()) {
                (Some("kind"), Some(kind)) => Some(kind.to_string()),
                _ => None,
            })
            .ok_or_else(|| PlumeError::MalformedRecord {
                path: path.to_path_buf(),
                reason: "champ kind absent".to_string(),
            })?;

        let orphan_fields;
        let declared: &[Field] = match self.config.collection(&kind) {
            Some(collection) => &collection.fields,
            None => {
                orphan_fields = implicit_fields();
                &orphan_fields
            }
        };

        Ok(Item {
            id,
            collection_id: kind,
            fields: fields_from_mapping(fields, declared),
            content,
        })
    }
}

/// Retire les clés internes (`id`, `collection_id`) avant persistance.
fn strip_transient_keys(fields: &mut FieldMap) {
    for key in TRANSIENT_KEYS {
        fields.shift_remove(key);
    }
}

/// Sort le corps du jeu de champs pour les collections `html` (la clé
/// `content` est absente du frontmatter). Les collections `yaml` gardent
/// une éventuelle clé `content` comme champ ordinaire.
fn extract_content(fields: &mut FieldMap, filetype: FileType) -> Option<String> {
    match filetype {
        FileType::Html => {
            let body = fields
                .shift_remove(CONTENT_KEY)
                .and_then(|value| value.to_plain_string())
                .unwrap_or_default();
            Some(body)
        }
        FileType::Yaml => None,
    }
}
