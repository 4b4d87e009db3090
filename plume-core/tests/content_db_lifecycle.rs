// FICHIER : plume-core/tests/content_db_lifecycle.rs

//! Cycle de vie complet d'un item : création, relecture, mise à jour,
//! suppression, et les invariants de nommage qui vont avec.

mod common;

use common::{champs, setup_test_env};
use plume_core::content_db::items::manager::ItemsManager;
use plume_core::content_db::items::FieldValue;
use plume_core::content_db::today_stamp;
use std::fs;

#[test]
fn lifecycle_complet_html() {
    let env = setup_test_env();
    let manager = ItemsManager::new(&env.cfg);

    // 1) CREATE — l'identifiant est dérivé du titre
    let item = manager
        .create(
            "poeme",
            champs(&[
                ("title", "Le pont Mirabeau"),
                ("auteur", "Guillaume"),
                ("status", "draft"),
                ("content", "<p>Sous le pont Mirabeau coule la Seine</p>"),
            ]),
        )
        .expect("create");
    assert_eq!(item.id, "le-pont-mirabeau");

    // Le fichier est au chemin canonique, frontmatter + corps
    let path = env.cfg.content_root.join("le-pont-mirabeau.html");
    assert!(path.is_file(), "fichier attendu : {}", path.display());
    let texte = fs::read_to_string(&path).expect("lecture du fichier");
    assert!(texte.starts_with("---\n"), "le frontmatter ouvre le fichier");
    assert!(
        texte.contains("<p>Sous le pont Mirabeau coule la Seine</p>"),
        "le corps est écrit verbatim après le frontmatter"
    );
    assert!(
        !texte.contains("content:"),
        "le corps ne doit pas apparaître comme champ du frontmatter"
    );

    // 2) FIND — relecture fidèle
    let relu = manager
        .find("le-pont-mirabeau", "poeme")
        .expect("find")
        .expect("item présent");
    assert_eq!(relu.field_str("auteur").as_deref(), Some("Guillaume"));
    assert_eq!(relu.field_str("kind").as_deref(), Some("poeme"));
    assert_eq!(
        relu.content.as_deref(),
        Some("<p>Sous le pont Mirabeau coule la Seine</p>")
    );
    assert_eq!(relu.field_str("created_at").as_deref(), Some(today_stamp().as_str()));

    // 3) UPDATE — le titre change, le nom de fichier non
    let mut modifie = relu;
    modifie.fields.insert(
        "title".to_string(),
        FieldValue::Text("Le pont Mirabeau (variante)".to_string()),
    );
    let modifie = manager.update(modifie).expect("update");
    assert_eq!(
        modifie.id, "le-pont-mirabeau",
        "l'identifiant est figé à la création, le titre peut vivre sa vie"
    );
    assert!(path.is_file(), "le fichier reste au même endroit");

    // 4) DELETE — définitif
    manager.delete(&modifie).expect("delete");
    assert!(!path.exists(), "après delete, plus de fichier");
    assert!(manager
        .find("le-pont-mirabeau", "poeme")
        .expect("find")
        .is_none());
}

#[test]
fn lifecycle_yaml_sans_corps() {
    let env = setup_test_env();
    let manager = ItemsManager::new(&env.cfg);

    let item = manager
        .create(
            "chanson",
            champs(&[
                ("title", "La javanaise"),
                ("artiste", "Serge"),
                ("sortie", "1963-03-01"),
            ]),
        )
        .expect("create");
    assert_eq!(item.content, None, "pas de corps pour une collection yaml");

    let path = env.cfg.content_root.join("la-javanaise.yaml");
    let texte = fs::read_to_string(&path).expect("lecture");
    assert!(
        !texte.contains("---\n---"),
        "un enregistrement yaml est un bloc nu, sans cadre de frontmatter"
    );

    let relu = manager
        .find("la-javanaise", "chanson")
        .expect("find")
        .expect("présent");
    assert!(
        matches!(relu.fields.get("sortie"), Some(FieldValue::Date(_))),
        "le champ date déclaré est relu comme une vraie date"
    );
}

#[test]
fn create_dans_un_sous_dossier_cree_le_dossier() {
    let env = setup_test_env();
    let manager = ItemsManager::new(&env.cfg);

    // La racine de contenu n'existe même pas encore
    assert!(!env.cfg.content_root.exists());

    manager
        .create("article", champs(&[("title", "Premier billet")]))
        .expect("create");

    let path = env
        .cfg
        .content_root
        .join("articles")
        .join("premier-billet.html");
    assert!(
        path.is_file(),
        "la location de la collection est créée récursivement"
    );
}

#[test]
fn update_reconcilie_un_fichier_deplace() {
    let env = setup_test_env();
    let manager = ItemsManager::new(&env.cfg);

    manager
        .create("poeme", champs(&[("title", "Voyelles"), ("auteur", "Arthur")]))
        .expect("create");

    // Un humain déplace le fichier dans un sous-dossier arbitraire
    let canonique = env.cfg.content_root.join("voyelles.html");
    let exil = env.cfg.content_root.join("archives").join("voyelles.html");
    fs::create_dir_all(exil.parent().unwrap()).expect("mkdir archives");
    fs::rename(&canonique, &exil).expect("déplacement");

    // find le retrouve quand même
    let item = manager
        .find("voyelles", "poeme")
        .expect("find")
        .expect("toujours adressable après déplacement");

    // update le ramène au chemin canonique et supprime l'exilé
    manager.update(item).expect("update");
    assert!(canonique.is_file(), "l'item est revenu au chemin canonique");
    assert!(!exil.exists(), "l'ancien emplacement a été nettoyé");
}

#[test]
fn update_rafraichit_updated_at_et_fige_created_at() {
    let env = setup_test_env();
    let manager = ItemsManager::new(&env.cfg);

    manager
        .create("chanson", champs(&[("title", "Mistral gagnant")]))
        .expect("create");

    // On antidate les horodatages directement dans le fichier
    let path = env.cfg.content_root.join("mistral-gagnant.yaml");
    let texte = fs::read_to_string(&path).expect("lecture");
    let antidate = texte.replace(&today_stamp(), "2020-01-31");
    fs::write(&path, antidate).expect("écriture");

    let relu = manager
        .find("mistral-gagnant", "chanson")
        .expect("find")
        .expect("présent");
    assert_eq!(relu.field_str("created_at").as_deref(), Some("2020-01-31"));

    let maj = manager.update(relu).expect("update");
    assert_eq!(
        maj.field_str("created_at").as_deref(),
        Some("2020-01-31"),
        "created_at est figé"
    );
    assert_eq!(
        maj.field_str("updated_at").as_deref(),
        Some(today_stamp().as_str()),
        "updated_at est rafraîchi à chaque écriture"
    );
}

#[test]
fn all_voit_les_fichiers_deposes_a_la_main() {
    let env = setup_test_env();
    let manager = ItemsManager::new(&env.cfg);

    manager
        .create("poeme", champs(&[("title", "Ouvert par l'outil")]))
        .expect("create");

    // Un fichier écrit par un éditeur externe, sans passer par l'outil
    let depose = env.cfg.content_root.join("depose-a-la-main.html");
    fs::write(
        &depose,
        "---\ntitle: Déposé à la main\nkind: poeme\nstatus: draft\n---\n<p>corps</p>",
    )
    .expect("écriture directe");

    let tous = manager.all().expect("all");
    assert_eq!(
        tous.len(),
        2,
        "le disque est la source de vérité : pas de cache à rafraîchir"
    );
    assert!(tous.iter().any(|i| i.id == "depose-a-la-main"));
}
