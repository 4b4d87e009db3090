// FICHIER : plume-core/tests/common/mod.rs

use plume_core::content_db::items::{FieldMap, FieldValue};
use plume_core::content_db::schema::CmsConfig;
use plume_core::content_db::storage::ContentDbConfig;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Schéma d'un petit site : deux collections `html` (dont une logée en
/// sous-dossier) et une collection `yaml`.
#[allow(dead_code)]
pub const SITE_SCHEMA: &str = r#"
content_dir: contenu
collections:
  - id: poeme
    label: Poèmes
    filetype: html
    fields:
      - id: auteur
        label: Auteur
      - id: content
        label: Contenu
        type: richtext
  - id: article
    label: Articles
    location: /articles
    filetype: html
    fields:
      - id: content
        label: Contenu
        type: richtext
  - id: chanson
    label: Chansons
    filetype: yaml
    fields:
      - id: artiste
        label: Artiste
      - id: sortie
        label: Date de sortie
        type: date
"#;

#[allow(dead_code)]
pub struct TestEnv {
    pub cfg: ContentDbConfig,
    pub _tmp_dir: TempDir,
}

/// Environnement isolé : schéma d'exemple + racine de contenu temporaire.
#[allow(dead_code)]
pub fn setup_test_env() -> TestEnv {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });

    let tmp_dir = tempfile::tempdir().expect("mkdir racine temporaire");
    let schema: CmsConfig = serde_yaml::from_str(SITE_SCHEMA).expect("schéma d'exemple");
    let cfg = ContentDbConfig::from_cms_config(schema, tmp_dir.path());

    TestEnv {
        cfg,
        _tmp_dir: tmp_dir,
    }
}

/// Construit un jeu de champs texte, dans l'ordre donné.
#[allow(dead_code)]
pub fn champs(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), FieldValue::Text((*v).to_string())))
        .collect()
}
