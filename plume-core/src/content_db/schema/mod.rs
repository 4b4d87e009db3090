// FICHIER : plume-core/src/content_db/schema/mod.rs

//! Modèle de schéma : collections et champs déclarés par la configuration.
//! Chargé une fois au démarrage, traité comme immuable ensuite.
//! La validation structurelle du fichier de config appartient au chargeur
//! amont — ici on ne fait que désérialiser et appliquer les défauts.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

// --- TYPE DE FICHIER ---

/// Cadrage de sérialisation d'une collection : frontmatter + corps (`html`)
/// ou bloc YAML nu (`yaml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Html,
    Yaml,
}

impl FileType {
    /// Extension de fichier associée (sans le point).
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Html => "html",
            FileType::Yaml => "yaml",
        }
    }

    /// Retrouve le cadrage depuis une extension de fichier.
    /// `yml` est toléré en lecture pour les fichiers renommés à la main.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "html" => Some(FileType::Html),
            "yaml" | "yml" => Some(FileType::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

// --- CHAMPS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Richtext,
    Date,
    Hidden,
    Number,
    Color,
    Email,
    Url,
    Select,
}

/// Option d'un champ `select` : valeur stockée + libellé d'affichage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Déclaration d'un champ de collection. Les défauts reproduisent la
/// configuration minimale : type `text`, ni requis ni en lecture seule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl Field {
    fn implicit(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            default: None,
            required: false,
            readonly: false,
            options: Vec::new(),
        }
    }
}

/// Champs implicites fusionnés dans chaque collection au chargement :
/// `title`, `kind`, `created_at`, `updated_at` et `status`.
/// Les valeurs `draft`/`published` font partie du format sur disque ;
/// seuls les libellés sont affaire de présentation.
pub fn implicit_fields() -> Vec<Field> {
    let mut status = Field::implicit("status", "Statut", FieldType::Select);
    status.default = Some(Value::String("draft".to_string()));
    status.options = vec![
        SelectOption::new("draft", "Brouillon"),
        SelectOption::new("published", "Publié"),
    ];

    vec![
        Field::implicit("title", "Titre", FieldType::Text),
        Field::implicit("kind", "Collection", FieldType::Hidden),
        Field::implicit("created_at", "Date de création", FieldType::Hidden),
        Field::implicit("updated_at", "Dernière modification", FieldType::Hidden),
        status,
    ]
}

// --- COLLECTIONS ---

/// Déclaration d'une collection : où elle vit (`location`), son cadrage
/// (`filetype`), ses champs et ses permissions d'interface.
/// `can_create`/`can_delete` sont portés pour les couches d'administration ;
/// le référentiel lui-même ne les applique pas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub filetype: FileType,
    #[serde(default = "default_true")]
    pub can_create: bool,
    #[serde(default = "default_true")]
    pub can_delete: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
}

fn default_location() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

impl Collection {
    /// Fusionne les champs implicites : ils sont ajoutés après les champs
    /// explicites, et un champ explicite portant le même id garde la main.
    /// Complète aussi les libellés vides (libellé = id).
    pub fn with_implicit_fields(mut self) -> Self {
        for implicit in implicit_fields() {
            if !self.fields.iter().any(|f| f.id == implicit.id) {
                self.fields.push(implicit);
            }
        }
        if self.label.is_empty() {
            self.label = self.id.clone();
        }
        for field in &mut self.fields {
            if field.label.is_empty() {
                field.label = field.id.clone();
            }
        }
        self
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

// --- FICHIER DE CONFIGURATION ---

/// Représentation désérialisée du fichier de configuration du site,
/// réduite à ce que le référentiel consomme : le répertoire de contenu
/// et la liste ordonnée des collections.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

fn default_content_dir() -> String {
    "content".to_string()
}
