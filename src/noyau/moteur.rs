//! src/noyau/moteur.rs
//!
//! Moteur de calculatrice de poche : opérateur + opérande en attente.
//!
//! Contrats :
//! - Toutes les opérations sont totales (pas de Result, pas de panique).
//! - L’affichage n’est jamais vide (repli sur "0").
//! - Évaluation gauche → droite : `2 + 3 × 4 =` donne 20.

use tracing::debug;

use super::format::{lire_affichage, nombre_en_texte, AFFICHAGE_ZERO};
use super::operateur::Operateur;
use super::touche::Touche;

/// Où en est la saisie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Aucun opérateur en attente.
    Repos,
    /// Opérateur choisi, le prochain chiffre commence un nouveau nombre.
    AttenteOperande,
    /// Opérateur choisi, le second nombre est en cours de saisie.
    Saisie,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    affichage: String,
    operande_en_attente: Option<f64>,
    operateur_en_attente: Option<Operateur>,
    attente_operande: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            operande_en_attente: None,
            operateur_en_attente: None,
            attente_operande: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Valeur numérique de l’affichage courant.
    pub fn valeur(&self) -> f64 {
        lire_affichage(&self.affichage)
    }

    pub fn operande_en_attente(&self) -> Option<f64> {
        self.operande_en_attente
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    pub fn phase(&self) -> Phase {
        match (self.operateur_en_attente, self.attente_operande) {
            (None, _) => Phase::Repos,
            (Some(_), true) => Phase::AttenteOperande,
            (Some(_), false) => Phase::Saisie,
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Aiguillage unique pour le pavé et le clavier.
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Decimale => self.saisir_decimale(),
            Touche::Operateur(op) => self.appliquer_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
        }
    }

    /// Chiffre 0..=9 (au-delà : ignoré).
    pub fn saisir_chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.attente_operande || self.affichage == AFFICHAGE_ZERO {
            self.affichage = c.to_string();
        } else {
            self.affichage.push(c);
        }
        self.attente_operande = false;
    }

    pub fn saisir_decimale(&mut self) {
        if self.attente_operande {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Choix d’un opérateur : enchaîne le calcul en attente s’il y en a un.
    ///
    /// Deux opérateurs de suite réutilisent l’affichage : `5 + +` donne 10.
    /// L’opérande en attente est utilisée telle quelle : NaN reste NaN.
    pub fn appliquer_operateur(&mut self, op: Operateur) {
        let courant = self.valeur();

        match (self.operande_en_attente, self.operateur_en_attente) {
            (None, _) => self.operande_en_attente = Some(courant),
            (Some(a), Some(precedent)) => {
                let resultat = precedent.evaluer(a, courant);
                debug!(?precedent, a, courant, resultat, "calcul enchaîné");
                self.operande_en_attente = Some(resultat);
                self.affichage = nombre_en_texte(resultat);
            }
            (Some(_), None) => {}
        }

        self.operateur_en_attente = Some(op);
        self.attente_operande = true;
    }

    /// "=" : sans opérateur ET opérande en attente, ne fait rien.
    pub fn egal(&mut self) {
        let (Some(op), Some(a)) = (self.operateur_en_attente, self.operande_en_attente) else {
            return;
        };

        let b = self.valeur();
        let resultat = op.evaluer(a, b);
        debug!(?op, a, b, resultat, "égal");

        self.affichage = nombre_en_texte(resultat);
        self.operande_en_attente = None;
        self.operateur_en_attente = None;
        self.attente_operande = true;
    }

    /// C : remise à zéro complète.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// ⌫ : retire le dernier caractère (jamais d’affichage vide).
    pub fn retour_arriere(&mut self) {
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = AFFICHAGE_ZERO.to_string();
        }
    }
}
