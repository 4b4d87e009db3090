// FICHIER : plume-core/src/content_db/codec/mod.rs

//! Codec des enregistrements sur disque. Deux cadrages existent :
//!
//! * `html` : un bloc YAML (le frontmatter) entre deux lignes `---`,
//!   suivi du corps, stocké tel quel ;
//! * `yaml` : un unique bloc YAML, sans délimiteur ni corps.
//!
//! Le codec ne connaît ni le schéma ni les types de champs : il cadre et
//! décadre, c'est tout. La coercition vit dans `content_db::items`.

use crate::content_db::schema::FileType;
use crate::utils::error::{PlumeError, PlumeResult};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Ligne délimitant le frontmatter des fichiers `html`.
const DELIMITER: &str = "---";

/// Enregistrement décodé, avant toute coercition : le bloc de champs dans
/// son ordre d'écriture et l'éventuel corps.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub fields: Mapping,
    pub content: Option<String>,
}

/// Sérialise un enregistrement vers sa forme texte.
///
/// En `html`, le corps est recopié verbatim après le second délimiteur,
/// sans échappement ni ré-encodage, et sans délimiteur de fermeture en fin
/// de fichier. En `yaml`, seul le bloc de champs est écrit.
pub fn serialize(
    fields: &Mapping,
    content: Option<&str>,
    filetype: FileType,
) -> PlumeResult<String> {
    let block = serde_yaml::to_string(fields)?;
    match filetype {
        FileType::Html => {
            let body = content.unwrap_or("");
            Ok(format!("{DELIMITER}\n{block}{DELIMITER}\n{body}"))
        }
        FileType::Yaml => Ok(block),
    }
}

/// Décode un enregistrement texte selon son cadrage. `path` ne sert qu'aux
/// messages d'erreur : un fichier illisible doit pouvoir être retrouvé.
pub fn deserialize(path: &Path, raw: &str, filetype: FileType) -> PlumeResult<RawRecord> {
    match filetype {
        FileType::Html => {
            let (block, body) = split_frontmatter(path, raw)?;
            Ok(RawRecord {
                fields: parse_mapping(path, block)?,
                content: Some(body.trim().to_string()),
            })
        }
        FileType::Yaml => Ok(RawRecord {
            fields: parse_mapping(path, raw)?,
            content: None,
        }),
    }
}

fn malformed(path: &Path, reason: impl Into<String>) -> PlumeError {
    PlumeError::MalformedRecord {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Analyse un bloc YAML qui doit être un mapping. Un document vide, un
/// scalaire ou une séquence à la racine sont des enregistrements illisibles.
fn parse_mapping(path: &Path, block: &str) -> PlumeResult<Mapping> {
    let value: Value =
        serde_yaml::from_str(block).map_err(|e| malformed(path, format!("YAML invalide : {e}")))?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Err(malformed(path, "bloc de champs vide")),
        _ => Err(malformed(path, "un mapping YAML était attendu à la racine")),
    }
}

/// Découpe un document `html` sur ses deux premières lignes `---`.
///
/// Une ligne délimitrice contient exactement `---`, fins de ligne `\r\n`
/// tolérées, BOM toléré en tête de fichier. Ce qui précède le premier
/// délimiteur est ignoré ; entre les deux se trouve le bloc YAML ; tout ce
/// qui suit le second est le corps, y compris d'éventuels `---` internes.
fn split_frontmatter<'a>(path: &Path, raw: &'a str) -> PlumeResult<(&'a str, &'a str)> {
    let mut delimiters: Vec<(usize, usize)> = Vec::with_capacity(2);
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let mut trimmed = line.trim_end_matches('\n').trim_end_matches('\r');
        if line_start == 0 {
            trimmed = trimmed.trim_start_matches('\u{feff}');
        }
        if trimmed == DELIMITER {
            delimiters.push((line_start, offset));
            if delimiters.len() == 2 {
                break;
            }
        }
    }

    match delimiters.as_slice() {
        [(_, block_start), (body_sep, body_start)] => {
            Ok((&raw[*block_start..*body_sep], &raw[*body_start..]))
        }
        _ => Err(malformed(path, "délimiteur de frontmatter manquant")),
    }
}
