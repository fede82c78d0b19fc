//! Scénarios bout-en-bout sur le moteur (séquences de touches du pavé).
//!
//! Notation : une chaîne de touches, une par caractère ("5+3=", "9÷0=", "7×C").
//! `C` = effacer, `<` = retour arrière.

use super::operateur::Operateur;
use super::touche::Touche;
use super::Moteur;

fn touche(c: char) -> Touche {
    match c {
        'C' => Touche::Effacer,
        '<' => Touche::RetourArriere,
        _ => Touche::depuis_caractere(c).unwrap_or_else(|| panic!("touche inconnue: {c:?}")),
    }
}

fn taper(sequence: &str) -> Moteur {
    let mut m = Moteur::default();
    for c in sequence.chars() {
        m.appliquer(touche(c));
    }
    m
}

fn assert_affiche(sequence: &str, attendu: &str) {
    let m = taper(sequence);
    assert_eq!(m.affichage(), attendu, "sequence={sequence:?}");
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn addition_simple() {
    assert_affiche("5+3=", "8");
}

#[test]
fn quatre_operations() {
    assert_affiche("9-12=", "-3");
    assert_affiche("6×7=", "42");
    assert_affiche("7÷2=", "3.5");
}

#[test]
fn gauche_a_droite_sans_priorite() {
    // (2 + 3) × 4, pas 2 + 12
    assert_affiche("2+3×4=", "20");
}

#[test]
fn calcul_enchaine_affiche_le_resultat_intermediaire() {
    let m = taper("2+3×");
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.operande_en_attente(), Some(5.0));
    assert_eq!(m.operateur_en_attente(), Some(Operateur::Fois));
}

#[test]
fn operateur_repete_reutilise_l_affichage() {
    assert_affiche("5++", "10");
}

#[test]
fn changer_d_operateur_juste_apres_egal() {
    // après "=", l’opérande en attente est vidée : l’opérateur repart du résultat
    assert_affiche("2+3=×4=", "20");
}

#[test]
fn nouveau_chiffre_apres_egal_remplace() {
    assert_affiche("5+3=7", "7");
}

/* ------------------------ Cas limites acceptés ------------------------ */

#[test]
fn division_par_zero_affiche_non_fini() {
    // comportement accepté : pas de garde sur ÷0
    assert_affiche("9÷0=", "inf");
    assert_affiche("0÷0=", "NaN");
}

#[test]
fn nan_en_attente_se_propage() {
    // NaN n’est pas ramené à 0 quand on enchaîne
    assert_affiche("0÷0+5+", "NaN");
}

#[test]
fn zero_negatif_affiche_tel_quel() {
    assert_affiche("0-5=×0=", "-0");
}

#[test]
fn imprecision_binaire_conservee() {
    assert_affiche(".1+.2=", "0.30000000000000004");
}

#[test]
fn egal_sans_operateur_est_sans_effet() {
    let m = taper("1..2=");
    assert_eq!(m.affichage(), "1.2");
    assert_eq!(m.phase(), super::Phase::Repos);
}

#[test]
fn effacer_puis_egal() {
    let mut m = taper("7×C");
    assert_eq!(m.affichage(), "0");
    m.egal();
    assert_eq!(m.affichage(), "0");
    assert!(m.operateur_en_attente().is_none());
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn zero_initial_remplace() {
    assert_affiche("007", "7");
}

#[test]
fn decimale_apres_operateur() {
    assert_affiche("4+.", "0.");
    assert_affiche("4+.5=", "4.5");
}

#[test]
fn decimale_unique() {
    assert_affiche("3.1.4", "3.14");
}

#[test]
fn retour_arriere() {
    assert_affiche("123<", "12");
    assert_affiche("5<", "0");
    assert_affiche("<<<", "0");
}
