// FICHIER : plume-core/src/utils/fs.rs

use crate::utils::error::PlumeResult;
use std::fs;
use std::io::Write;

// --- RE-EXPORTS (Isolation de la couche OS) ---
pub use std::path::{Path, PathBuf};
pub use tempfile::{tempdir, TempDir};
pub use walkdir::WalkDir;

/// Crée récursivement un répertoire s'il n'existe pas déjà.
pub fn ensure_dir(path: &Path) -> PlumeResult<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn read_to_string(path: &Path) -> PlumeResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Suppression tolérante : ne proteste pas si le fichier est déjà absent.
pub fn remove_file(path: &Path) -> PlumeResult<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Écriture atomique sécurisée (write -> sync -> rename)
pub fn write_atomic(path: &Path, content: &[u8]) -> PlumeResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let tmp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content)?;
        // On force l'écriture physique sur le plateau du disque
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_atomic(&file_path, b"Hello World").unwrap();
        assert!(file_path.exists());
        // Le fichier temporaire ne doit pas survivre au rename
        assert!(!file_path.with_extension("tmp").exists());

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello World");
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("a/b/c.txt");

        write_atomic(&file_path, b"nested").unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_ensure_dir_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("x/y");

        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_remove_file_missing_is_ok() {
        let dir = tempdir().unwrap();
        let ghost = dir.path().join("fantome.txt");

        // Ne doit pas échouer sur un fichier absent
        remove_file(&ghost).unwrap();
    }
}
