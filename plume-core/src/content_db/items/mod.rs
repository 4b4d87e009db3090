// FICHIER : plume-core/src/content_db/items/mod.rs

//! Modèle d'item : identifiant dérivé du titre, champs typés dans leur
//! ordre d'écriture, corps optionnel. La coercition YAML -> valeur typée
//! est guidée par le schéma de la collection ; tout ce qui n'est pas
//! reconnu est conservé tel quel pour que rien ne se perde à la réécriture.

pub mod manager;

use crate::content_db::schema::{Field, FieldType};
use crate::content_db::DATE_FORMAT;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// Clés internes au référentiel, jamais persistées dans les fichiers.
pub const TRANSIENT_KEYS: [&str; 2] = ["id", "collection_id"];

/// Clé distinguée qui porte le corps des collections `html`.
pub const CONTENT_KEY: &str = "content";

/// Champs d'un item, dans l'ordre d'insertion : les réécritures gardent
/// ainsi un ordre de clés stable d'une édition à l'autre.
pub type FieldMap = IndexMap<String, FieldValue>;

// =====================================================================
// VALEURS DE CHAMP
// =====================================================================

/// Valeur typée d'un champ, telle que la coercition l'a comprise.
/// `Other` garde la valeur YAML brute des champs hors schéma et des
/// structures imbriquées.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(serde_yaml::Number),
    Date(NaiveDate),
    Boolean(bool),
    Select(String),
    Other(Value),
}

impl FieldValue {
    /// Coerce une valeur YAML brute d'après la déclaration de champ.
    /// `declared` est absent pour les clés hors schéma, qui partent alors
    /// dans `Other` sans transformation.
    ///
    /// Les règles sont volontairement indulgentes : une date qui ne se
    /// parse pas reste du texte, un nombre déclaré mais écrit entre
    /// guillemets reste du texte. On lit ce qui est là, on ne corrige pas.
    pub fn from_yaml(value: Value, declared: Option<&Field>) -> Self {
        match (value, declared.map(|f| f.field_type)) {
            (Value::Bool(b), _) => FieldValue::Boolean(b),
            (Value::String(s), Some(FieldType::Select)) => FieldValue::Select(s),
            (Value::String(s), Some(FieldType::Date)) => {
                match NaiveDate::parse_from_str(&s, DATE_FORMAT) {
                    Ok(date) => FieldValue::Date(date),
                    Err(_) => FieldValue::Text(s),
                }
            }
            (Value::String(s), Some(_)) => FieldValue::Text(s),
            (Value::Number(n), Some(FieldType::Number)) => FieldValue::Number(n),
            (value, _) => FieldValue::Other(value),
        }
    }

    /// Valeur YAML à persister. Les dates reprennent le format stocké,
    /// `Other` repart strictement tel quel.
    pub fn to_yaml(&self) -> Value {
        match self {
            FieldValue::Text(s) | FieldValue::Select(s) => Value::String(s.clone()),
            FieldValue::Number(n) => Value::Number(n.clone()),
            FieldValue::Date(date) => Value::String(date.format(DATE_FORMAT).to_string()),
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::Other(value) => value.clone(),
        }
    }

    /// Forme texte « stockée » de la valeur, celle sur laquelle filtres et
    /// tris comparent. `None` pour les structures sans forme texte évidente.
    pub fn to_plain_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) | FieldValue::Select(s) => Some(s.clone()),
            FieldValue::Date(date) => Some(date.format(DATE_FORMAT).to_string()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Other(Value::String(s)) => Some(s.clone()),
            FieldValue::Other(_) => None,
        }
    }
}

/// Les items se sérialisent à plat (JSON des interfaces d'administration) :
/// chaque valeur redevient le scalaire qu'elle encode, sans étiquette de
/// variante.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_yaml().serialize(serializer)
    }
}

// =====================================================================
// ITEM
// =====================================================================

/// L'unité que gère le référentiel. Un item == un fichier : le disque est
/// la seule source de vérité, chaque lecture reparse le fichier.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    /// Radical du nom de fichier, dérivé du titre à la création.
    pub id: String,
    /// Collection d'appartenance (le champ `kind` du fichier).
    pub collection_id: String,
    pub fields: FieldMap,
    /// Corps des collections `html`, hors frontmatter. `None` en `yaml`.
    pub content: Option<String>,
}

impl Item {
    /// Valeur texte d'un champ, forme stockée.
    pub fn field_str(&self, id: &str) -> Option<String> {
        self.fields.get(id).and_then(FieldValue::to_plain_string)
    }

    pub fn title(&self) -> Option<String> {
        self.field_str("title")
    }

    pub fn status(&self) -> Option<String> {
        self.field_str("status")
    }
}

// =====================================================================
// CONVERSIONS MAPPING <-> CHAMPS
// =====================================================================

/// Convertit un mapping YAML décodé en champs typés, guidé par les
/// déclarations de la collection. L'ordre des clés du fichier est conservé.
/// Les clés non textuelles (rares mais légales en YAML) sont ramenées à
/// leur forme texte quand c'est possible, ignorées sinon.
pub fn fields_from_mapping(mapping: Mapping, declared: &[Field]) -> FieldMap {
    let mut fields = FieldMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        let field = declared.iter().find(|f| f.id == key);
        fields.insert(key, FieldValue::from_yaml(value, field));
    }
    fields
}

/// Mapping YAML prêt à sérialiser, dans l'ordre des champs. Les clés
/// transitoires et la clé de corps sont retirées en amont par le manager.
pub fn mapping_from_fields(fields: &FieldMap) -> Mapping {
    let mut mapping = Mapping::with_capacity(fields.len());
    for (key, value) in fields {
        mapping.insert(Value::String(key.clone()), value.to_yaml());
    }
    mapping
}
