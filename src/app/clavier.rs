//! src/app/clavier.rs
//!
//! Routeur clavier : événements de la fenêtre -> touches du moteur.
//!
//! - Écoute au niveau fenêtre (input egui global), quel que soit le widget qui a le focus.
//! - Abonnement explicite : `abonner()` quand la calculatrice apparaît, `desabonner()` quand
//!   elle disparaît. Désabonné, le routeur ne fait rien.
//! - Normalisation : `*` -> `×`, `/` -> `÷`.
//! - Une touche reconnue est CONSOMMÉE (retirée de la file egui) : aucun widget ne la
//!   voit ensuite (ex. Enter n’active pas le bouton qui a le focus).

use eframe::egui;
use tracing::{debug, trace};

use crate::noyau::{Moteur, Touche};

/// Touche physique, déjà réduite à ce qui nous intéresse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cle {
    /// Caractère tapé (respecte la disposition du clavier).
    Caractere(char),
    Entree,
    RetourArriere,
    Echap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvenementClavier {
    Appui(Cle),
    Relache,
}

impl EvenementClavier {
    /// egui -> événement routable.
    ///
    /// Les chiffres/opérateurs arrivent par `Event::Text` ; Enter/Backspace/Escape par
    /// `Event::Key`. Les autres appuis `Event::Key` (Num5, Plus…) sont ignorés pour ne
    /// pas compter deux fois le même caractère.
    pub fn depuis_egui(ev: &egui::Event) -> Option<Self> {
        match ev {
            egui::Event::Text(texte) => {
                let mut chars = texte.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Appui(Cle::Caractere(c))),
                    _ => None,
                }
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => Some(Self::Appui(Cle::Entree)),
                egui::Key::Backspace => Some(Self::Appui(Cle::RetourArriere)),
                egui::Key::Escape => Some(Self::Appui(Cle::Echap)),
                _ => None,
            },
            egui::Event::Key { pressed: false, .. } => Some(Self::Relache),
            _ => None,
        }
    }
}

/// `*` et `/` du clavier physique -> symboles du pavé.
pub fn normaliser(c: char) -> char {
    match c {
        '*' => '×',
        '/' => '÷',
        autre => autre,
    }
}

/// Clé -> touche du pavé (None = clé non reconnue).
pub fn touche_pour(cle: Cle) -> Option<Touche> {
    match cle {
        Cle::Caractere(c) => Touche::depuis_caractere(normaliser(c)),
        Cle::Entree => Some(Touche::Egal),
        Cle::RetourArriere => Some(Touche::RetourArriere),
        Cle::Echap => Some(Touche::Effacer),
    }
}

#[derive(Clone, Debug, Default)]
pub struct RouteurClavier {
    abonne: bool,
    touche_active: Option<Touche>,
}

impl RouteurClavier {
    pub fn abonner(&mut self) {
        if !self.abonne {
            debug!("clavier : abonnement");
        }
        self.abonne = true;
    }

    pub fn desabonner(&mut self) {
        if self.abonne {
            debug!("clavier : désabonnement");
        }
        self.abonne = false;
        self.touche_active = None;
    }

    pub fn est_abonne(&self) -> bool {
        self.abonne
    }

    /// Dernière touche pressée au clavier (surbrillance), None après relâchement.
    pub fn touche_active(&self) -> Option<Touche> {
        self.touche_active
    }

    /// Traite un événement. Renvoie `true` si l’événement doit être consommé.
    pub fn traiter(&mut self, ev: EvenementClavier, moteur: &mut Moteur) -> bool {
        if !self.abonne {
            return false;
        }

        match ev {
            EvenementClavier::Relache => {
                self.touche_active = None;
                false
            }
            EvenementClavier::Appui(cle) => {
                let touche = touche_pour(cle);
                trace!(?cle, ?touche, "clavier");
                self.touche_active = touche;
                match touche {
                    Some(t) => {
                        moteur.appliquer(t);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Vide la file d’entrée egui de la frame : route, puis retire les événements reconnus.
    pub fn router_frame(&mut self, ctx: &egui::Context, moteur: &mut Moteur) {
        if !self.est_abonne() {
            return;
        }

        ctx.input_mut(|i| {
            i.events.retain(|ev| match EvenementClavier::depuis_egui(ev) {
                Some(e) => !self.traiter(e, moteur),
                None => true,
            });
        });
    }
}
