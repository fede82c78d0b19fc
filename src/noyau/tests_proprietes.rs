//! Propriétés du moteur (proptest) : invariants sur des séquences arbitraires.

use proptest::prelude::*;

use super::operateur::Operateur;
use super::touche::Touche;
use super::{Moteur, Phase};

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Touche::Chiffre),
        1 => Just(Touche::Decimale),
        2 => operateur().prop_map(Touche::Operateur),
        1 => Just(Touche::Egal),
        1 => Just(Touche::Effacer),
        1 => Just(Touche::RetourArriere),
    ]
}

fn moteur_apres(touches: &[Touche]) -> Moteur {
    let mut m = Moteur::default();
    for &t in touches {
        m.appliquer(t);
    }
    m
}

proptest! {
    /// Chiffres sans zéro de tête : l’affichage est leur concaténation.
    #[test]
    fn prop_concatenation(premier in 1u8..=9, suite in prop::collection::vec(0u8..=9, 0..15)) {
        let mut m = Moteur::default();
        let mut attendu = premier.to_string();
        m.saisir_chiffre(premier);
        for d in suite {
            m.saisir_chiffre(d);
            attendu.push_str(&d.to_string());
        }
        prop_assert_eq!(m.affichage(), attendu.as_str());
    }

    /// C remet tout à zéro, quel que soit l’état.
    #[test]
    fn prop_effacer_reinitialise(touches in prop::collection::vec(touche(), 0..40)) {
        let mut m = moteur_apres(&touches);
        m.effacer();
        prop_assert_eq!(m.affichage(), "0");
        prop_assert!(m.operande_en_attente().is_none());
        prop_assert!(m.operateur_en_attente().is_none());
        prop_assert_eq!(m.phase(), Phase::Repos);
        prop_assert_eq!(m, Moteur::default());
    }

    /// "." répété sans autre touche : affichage inchangé après le premier.
    #[test]
    fn prop_decimale_idempotente(touches in prop::collection::vec(touche(), 0..30), n in 1usize..5) {
        let mut m = moteur_apres(&touches);
        m.saisir_decimale();
        let apres_premier = m.affichage().to_string();
        for _ in 0..n {
            m.saisir_decimale();
        }
        prop_assert_eq!(m.affichage(), apres_premier.as_str());
    }

    /// L’affichage n’est jamais vide.
    #[test]
    fn prop_affichage_jamais_vide(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = Moteur::default();
        for t in touches {
            m.appliquer(t);
            prop_assert!(!m.affichage().is_empty());
        }
    }

    /// ⌫ sur un seul caractère donne "0".
    #[test]
    fn prop_retour_arriere_un_caractere(d in 0u8..=9) {
        let mut m = Moteur::default();
        m.saisir_chiffre(d);
        m.retour_arriere();
        prop_assert_eq!(m.affichage(), "0");
    }

    /// Un opérateur n’est en attente qu’avec une opérande.
    #[test]
    fn prop_operateur_implique_operande(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = Moteur::default();
        for t in touches {
            m.appliquer(t);
            if m.operateur_en_attente().is_some() {
                prop_assert!(m.operande_en_attente().is_some());
            }
        }
    }
}
