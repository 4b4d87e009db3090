// FICHIER : plume-core/src/content_db/slug.rs

//! Dérivation d'identifiants : un titre humain devient le radical du nom
//! de fichier. Fonction pure, aucune I/O, aucun accès au schéma.

/// Transforme un titre en slug : chaque série de blancs devient un tiret
/// unique, tout caractère qui n'est ni alphanumérique, ni `_`, ni `-` est
/// éliminé, et le résultat passe en minuscules. Les lettres accentuées
/// sont alphanumériques : elles restent telles quelles.
///
/// ```
/// use plume_core::content_db::slug::slugify;
///
/// assert_eq!(slugify("Un poème sur Rust"), "un-poème-sur-rust");
/// assert_eq!(slugify("L'été, déjà !"), "lété-déjà-");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut chars = title.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            // Une série de blancs, où qu'elle soit, vaut un seul tiret
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            slug.push('-');
        } else if c.is_alphanumeric() || c == '_' || c == '-' {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        }
    }

    slug
}

/// Vrai si le slug contient au moins un caractère porteur (alphanumérique
/// ou `_`). Un slug fait uniquement de tirets ne peut pas servir
/// d'identifiant.
pub fn has_word_char(slug: &str) -> bool {
    slug.chars().any(|c| c.is_alphanumeric() || c == '_')
}

// =====================================================================
// TESTS
// =====================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basique() {
        assert_eq!(slugify("Mon premier article"), "mon-premier-article");
    }

    #[test]
    fn test_slugify_series_de_blancs() {
        assert_eq!(
            slugify("Un  titre\t très   espacé"),
            "un-titre-très-espacé",
            "chaque série de blancs doit donner un seul tiret"
        );
    }

    #[test]
    fn test_slugify_blancs_en_bordure() {
        // Les blancs de tête et de queue deviennent eux aussi des tirets :
        // le slug reflète fidèlement le titre saisi
        assert_eq!(slugify("  encadré  "), "-encadré-");
    }

    #[test]
    fn test_slugify_ponctuation_eliminee() {
        assert_eq!(slugify("Qu'est-ce que c'est ?"), "quest-ce-que-cest-");
        assert_eq!(slugify("100% (vraiment)"), "100-vraiment");
    }

    #[test]
    fn test_slugify_accents_conserves() {
        assert_eq!(slugify("Élégie à Noël"), "élégie-à-noël");
    }

    #[test]
    fn test_slugify_soulignes_et_tirets_conserves() {
        assert_eq!(slugify("mode_d'emploi - v2"), "mode_demploi---v2");
    }

    #[test]
    fn test_slugify_titre_vide() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_has_word_char() {
        assert!(has_word_char("un-titre"));
        assert!(has_word_char("_brouillon"));
        assert!(has_word_char("été"));
        assert!(!has_word_char("---"), "un slug fait de tirets n'est pas un identifiant");
        assert!(!has_word_char(""));
    }
}
