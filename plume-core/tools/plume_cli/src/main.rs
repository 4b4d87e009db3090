// FICHIER : plume-core/tools/plume_cli/src/main.rs

//! Outil d'administration du contenu : les opérations du référentiel
//! (collections, listes filtrées, CRUD d'items) depuis le terminal.
//! Les items s'affichent en JSON, les champs se fournissent en JSON.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use plume_core::content_db::items::manager::ItemsManager;
use plume_core::content_db::items::{fields_from_mapping, FieldMap};
use plume_core::content_db::query::ItemQuery;
use plume_core::content_db::schema::CmsConfig;
use plume_core::content_db::slug::slugify;
use plume_core::content_db::storage::ContentDbConfig;
use plume_core::utils::json::stringify_pretty;

#[derive(Parser)]
#[command(
    name = "plume_cli",
    author = "Plume Team",
    version,
    about = "Outil d'administration du contenu Plume"
)]
struct Cli {
    /// Fichier de configuration du site (schéma des collections)
    #[arg(short, long, env = "PLUME_CONFIG", default_value = "plume.yaml")]
    config: PathBuf,

    /// Racine de contenu, prioritaire sur le content_dir de la configuration
    #[arg(long, env = "PLUME_CONTENT_ROOT")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Liste les collections déclarées dans le schéma
    Collections,
    /// Liste les items, avec filtres et tri optionnels
    List {
        #[arg(long)]
        collection: Option<String>,
        /// Texte libre cherché dans les titres (regex tolérée)
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Clé de tri : id, created_at, updated_at (préfixe - pour inverser)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Affiche un item
    Show { collection: String, id: String },
    /// Crée un item depuis un objet JSON de champs
    Create { collection: String, data: String },
    /// Met à jour un item en fusionnant les champs JSON fournis
    Update {
        collection: String,
        id: String,
        data: String,
    },
    /// Supprime un item
    Delete { collection: String, id: String },
    /// Affiche le slug dérivé d'un titre
    Slug { title: String },
}

fn main() -> Result<()> {
    dotenv().ok();
    // Pont log -> tracing pour les bibliothèques tierces, puis logger console
    tracing_log::LogTracer::init().ok();
    plume_core::utils::init_logging(None);

    let cli = Cli::parse();

    // Slug est une pure dérivation : pas besoin de configuration
    let command = match cli.command {
        Commands::Slug { title } => {
            println!("{}", slugify(&title));
            return Ok(());
        }
        other => other,
    };

    let config = load_config(&cli.config, cli.root.as_deref())?;
    let manager = ItemsManager::new(&config);

    match command {
        Commands::Collections => {
            let payload: Vec<_> = config
                .collections
                .iter()
                .map(|c| {
                    json!({
                        "id": c.id,
                        "label": c.label,
                        "location": c.location,
                        "filetype": c.filetype,
                        "can_create": c.can_create,
                        "can_delete": c.can_delete,
                        "fields": c.fields.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", stringify_pretty(&payload)?);
        }

        Commands::List {
            collection,
            q,
            status,
            sort,
        } => {
            let query = ItemQuery {
                collection_id: collection,
                q,
                status,
                sort,
            };
            let items = manager.search(&query)?;
            println!("📄 {} item(s)", items.len());
            println!("{}", stringify_pretty(&items)?);
        }

        Commands::Show { collection, id } => match manager.find(&id, &collection)? {
            Some(item) => println!("{}", stringify_pretty(&item)?),
            None => return Err(anyhow!("❌ Item introuvable : {}/{}", collection, id)),
        },

        Commands::Create { collection, data } => {
            let fields = parse_fields(&config, &collection, &data)?;
            let item = manager.create(&collection, fields)?;
            println!("✅ Item créé : {}/{}", collection, item.id);
            println!("{}", stringify_pretty(&item)?);
        }

        Commands::Update {
            collection,
            id,
            data,
        } => {
            let mut item = manager
                .find(&id, &collection)?
                .ok_or_else(|| anyhow!("❌ Item introuvable : {}/{}", collection, id))?;
            for (key, value) in parse_fields(&config, &collection, &data)? {
                item.fields.insert(key, value);
            }
            let item = manager.update(item)?;
            println!("✅ Item mis à jour : {}/{}", collection, item.id);
            println!("{}", stringify_pretty(&item)?);
        }

        Commands::Delete { collection, id } => {
            let item = manager
                .find(&id, &collection)?
                .ok_or_else(|| anyhow!("❌ Item introuvable : {}/{}", collection, id))?;
            manager.delete(&item)?;
            println!("🗑️ Item supprimé : {}/{}", collection, id);
        }

        Commands::Slug { .. } => unreachable!("traité avant le chargement de la configuration"),
    }

    Ok(())
}

/// Charge le schéma du site et en déduit la configuration du référentiel.
/// La racine de contenu se résout par rapport au dossier du fichier de
/// configuration, sauf si `--root` la fixe explicitement.
fn load_config(config_path: &Path, root_override: Option<&Path>) -> Result<ContentDbConfig> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("Lecture de la configuration {config_path:?}"))?;
    let cms: CmsConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Analyse YAML de {config_path:?}"))?;

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let mut config = ContentDbConfig::from_cms_config(cms, base_dir);
    if let Some(root) = root_override {
        config.content_root = root.to_path_buf();
    }

    tracing::debug!("Racine de contenu : {:?}", config.content_root);
    Ok(config)
}

/// Analyse l'objet JSON fourni sur la ligne de commande et le convertit en
/// champs typés, guidés par le schéma de la collection visée.
fn parse_fields(config: &ContentDbConfig, collection_id: &str, data: &str) -> Result<FieldMap> {
    let doc: serde_json::Value = plume_core::utils::json::parse(data)?;
    let yaml = serde_yaml::to_value(&doc).context("Conversion des champs JSON")?;
    let serde_yaml::Value::Mapping(mapping) = yaml else {
        return Err(anyhow!("❌ Un objet JSON de champs était attendu"));
    };

    let declared = config
        .collection(collection_id)
        .map(|c| c.fields.as_slice())
        .unwrap_or(&[]);
    Ok(fields_from_mapping(mapping, declared))
}
