// src/noyau/operateur.rs

/// Les quatre opérations de la calculatrice (évaluation gauche → droite, sans priorité).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Symbole affiché sur le pavé.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Symbole déjà normalisé (`×`, `÷`) -> opérateur.
    /// Un symbole inconnu n’a pas d’opérateur : pas de repli silencieux.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        Self::TOUS.into_iter().find(|op| op.symbole() == c)
    }

    /// a op b, en binaire flottant.
    ///
    /// Pas de garde sur ÷0 : on obtient `inf`, `-inf` ou `NaN`, affichés tels quels.
    pub fn evaluer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}
