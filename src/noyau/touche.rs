// src/noyau/touche.rs
//
// Touches du pavé : une seule énumération pour les clics ET le clavier.

use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(u8),
    Decimale,
    Operateur(Operateur),
    Egal,
    Effacer,
    RetourArriere,
}

/// Pavé 4 colonnes, ordre d’affichage fixe (18 touches, la dernière ligne en a 2).
pub const PAVE: [Touche; 18] = [
    Touche::Effacer,
    Touche::Operateur(Operateur::Divise),
    Touche::Operateur(Operateur::Fois),
    Touche::RetourArriere,
    Touche::Chiffre(7),
    Touche::Chiffre(8),
    Touche::Chiffre(9),
    Touche::Operateur(Operateur::Moins),
    Touche::Chiffre(4),
    Touche::Chiffre(5),
    Touche::Chiffre(6),
    Touche::Operateur(Operateur::Plus),
    Touche::Chiffre(1),
    Touche::Chiffre(2),
    Touche::Chiffre(3),
    Touche::Egal,
    Touche::Chiffre(0),
    Touche::Decimale,
];

pub const COLONNES_PAVE: usize = 4;

/// Famille visuelle d’une touche (couleur d’accent, danger, neutre).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Famille {
    Chiffre,
    Accent,
    Danger,
}

impl Touche {
    /// Texte du bouton.
    pub fn etiquette(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Decimale => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::RetourArriere => "⌫".to_string(),
        }
    }

    /// Libellé lisible (info-bulle).
    pub fn libelle(self) -> String {
        match self {
            Touche::RetourArriere => "Retour arrière".to_string(),
            Touche::Effacer => "Effacer".to_string(),
            autre => autre.etiquette(),
        }
    }

    pub fn famille(self) -> Famille {
        match self {
            Touche::Operateur(_) | Touche::Egal => Famille::Accent,
            Touche::Effacer => Famille::Danger,
            Touche::Chiffre(_) | Touche::Decimale | Touche::RetourArriere => Famille::Chiffre,
        }
    }

    /// Caractère déjà normalisé (`×`, `÷`) -> touche.
    ///
    /// `*` et `/` doivent être convertis avant (voir le routeur clavier).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Touche::Chiffre(d as u8)),
            '.' => Some(Touche::Decimale),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_symbole(c).map(Touche::Operateur),
        }
    }
}
