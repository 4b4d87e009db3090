// FICHIER : plume-core/src/content_db/storage/file_storage.rs

//! Primitives fichiers du référentiel : parcours récursif de l'arbre de
//! contenu, recherche par radical, lecture et écriture d'enregistrements.
//! Aucune logique de schéma ici, uniquement de la persistance.

use crate::utils::fs::{self, Path, PathBuf, WalkDir};
use crate::utils::prelude::*;

/// Vrai pour les entrées cachées (`.git`, `.DS_Store`...), qui ne sont
/// jamais des items.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Tous les fichiers réguliers sous `root`, triés par chemin pour que les
/// parcours soient déterministes. Les dossiers cachés sont élagués en bloc.
/// Une racine absente donne une liste vide : l'arbre n'est simplement pas
/// encore initialisé.
pub fn scan_files(root: &Path) -> PlumeResult<Vec<PathBuf>> {
    if !fs::exists(root) {
        debug!("Racine de contenu absente, parcours vide : {:?}", root);
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Fichiers dont le radical (nom sans extension) vaut exactement `stem`,
/// quelle que soit leur position dans l'arbre et quelle que soit leur
/// extension. C'est la recherche qui rend les items déplacés à la main
/// toujours adressables par leur identifiant.
pub fn find_by_stem(root: &Path, stem: &str) -> PlumeResult<Vec<PathBuf>> {
    let matches = scan_files(root)?
        .into_iter()
        .filter(|path| path.file_stem().and_then(|s| s.to_str()) == Some(stem))
        .collect();
    Ok(matches)
}

/// Lit un enregistrement texte.
pub fn read_record(path: &Path) -> PlumeResult<String> {
    fs::read_to_string(path)
}

/// Écrit un enregistrement texte. L'écriture est atomique et le dossier
/// parent est créé récursivement si besoin.
pub fn write_record(path: &Path, text: &str) -> PlumeResult<()> {
    fs::write_atomic(path, text.as_bytes())
}

/// Supprime le fichier d'un enregistrement. Pas de corbeille.
pub fn delete_record(path: &Path) -> PlumeResult<()> {
    fs::remove_file(path)
}
