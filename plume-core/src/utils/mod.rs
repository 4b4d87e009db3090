// FICHIER : plume-core/src/utils/mod.rs

// =========================================================================
//  PLUME UTILS - Foundation Layer
// =========================================================================

// --- 1. MODULES INTERNES ---

pub mod error;
pub mod fs;
pub mod json;
pub mod logger;

// --- 2. FAÇADES SÉMANTIQUES ---

/// **Core Foundation** : Types de base et Erreurs.
pub mod core {
    pub use super::error::{AnyResult, PlumeError, PlumeResult};
    pub use chrono::{Local, NaiveDate};
}

/// **Physical Layer (I/O)** : Accès disque (Atomicité + Parcours).
pub mod io {
    pub use super::fs::{
        ensure_dir, exists, read_to_string, remove_file, tempdir, write_atomic, Path, PathBuf,
        TempDir, WalkDir,
    };
}

/// **Data Abstraction** : Manipulation JSON.
pub mod data {
    pub use super::json::{json, parse, stringify_pretty, Map, Value};
    pub use serde::{Deserialize, Serialize};
}

/// **Application Context** : Logging.
pub mod context {
    pub use super::logger::init_logging;
}

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::core::{PlumeError, PlumeResult};
    pub use super::data::{Deserialize, Serialize};
    pub use tracing::{debug, error, info, instrument, warn};
}

// =========================================================================
// 3. EXPORTS DIRECTS (Requis par content_db et le CLI)
// =========================================================================

pub use error::{AnyResult, PlumeError, PlumeResult};
pub use logger::init_logging;

pub use std::cmp::Ordering;
pub use std::sync::Once;
