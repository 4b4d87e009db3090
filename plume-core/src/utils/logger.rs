// FICHIER : plume-core/src/utils/logger.rs

use std::path::Path;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

/// Initialise le logging global : console compacte filtrée par `RUST_LOG`
/// (défaut "warn"), plus un fichier JSON journalier si `log_dir` est fourni.
pub fn init_logging(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        // =========================================================================
        // LAYER 1 : FICHIER (journal JSON, rotation quotidienne)
        // =========================================================================
        let file_layer = log_dir.map(|dir| {
            std::fs::create_dir_all(dir).ok();
            let file_appender = rolling::daily(dir, "plume.log");

            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        // =========================================================================
        // LAYER 2 : CONSOLE (Pour l'Humain)
        // =========================================================================
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter);

        // =========================================================================
        // ASSEMBLAGE ET INITIALISATION
        // =========================================================================
        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if let Err(_e) = registry.try_init() {
            tracing::warn!("⚠️ [Logger] Tentative de ré-initialisation ignorée (Global subscriber déjà actif).");
            return;
        }

        if let Some(dir) = log_dir {
            tracing::info!("🚀 Logger initialisé. Logs disponibles dans : {:?}", dir);
        }
    });
}
