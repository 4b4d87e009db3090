// FICHIER : plume-core/src/utils/json.rs

use crate::utils::error::PlumeResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
pub use serde_json::{json, Map, Value};

/// Parse une chaîne JSON en un type T.
/// Capture un extrait du contenu en cas d'échec pour aider au débogage.
pub fn parse<T: DeserializeOwned>(s: &str) -> PlumeResult<T> {
    match serde_json::from_str(s) {
        Ok(val) => Ok(val),
        Err(e) => {
            let snippet: String = s.chars().take(100).collect();
            warn!("Parse JSON en échec sur : {snippet}");
            Err(e.into())
        }
    }
}

/// Convertit un type T en chaîne JSON formatée (pretty).
pub fn stringify_pretty<T: Serialize>(v: &T) -> PlumeResult<String> {
    Ok(serde_json::to_string_pretty(v)?)
}
