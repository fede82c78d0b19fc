//! src/app/chargement.rs
//!
//! Écran de chargement (porte de démarrage, sans vue).
//!
//! Deux minuteries indépendantes, toutes deux lues sur la même horloge (temps écoulé) :
//! - compte à rebours : `Pret` quand `duree_totale` est écoulée ;
//! - tic périodique : +1 % et nouveau chiffre décoratif à chaque `intervalle_tic`,
//!   arrêté à `progression_max`.
//!
//! La fin du chargement ne dépend QUE du compte à rebours, pas de la progression.
//! Annulation : l’écran est possédé par AppCalc ; le lâcher suffit (plus de repaint programmé).

use std::time::Duration;

use rand::Rng;
use tracing::trace;

/// Réglages de la porte de démarrage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub duree_totale: Duration,
    pub intervalle_tic: Duration,
    pub progression_max: u8,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            duree_totale: Duration::from_millis(5000),
            intervalle_tic: Duration::from_millis(50),
            progression_max: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatChargement {
    EnCours,
    Pret,
}

#[derive(Clone, Debug)]
pub struct EcranChargement {
    reglages: Reglages,
    tics_traites: u64,
    progression: u8,
    chiffre: u8,
}

impl EcranChargement {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            tics_traites: 0,
            progression: 0,
            chiffre: 0,
        }
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Progression 0..=progression_max (en %).
    pub fn progression(&self) -> u8 {
        self.progression
    }

    /// Chiffre décoratif 0..=9 (aucun sens).
    pub fn chiffre(&self) -> u8 {
        self.chiffre
    }

    /// Le tic périodique est-il arrêté ?
    pub fn tic_arrete(&self) -> bool {
        self.progression >= self.reglages.progression_max
    }

    /// Rattrape les tics échus depuis le démarrage, puis consulte le compte à rebours.
    ///
    /// Appelé à chaque frame : plusieurs tics peuvent être traités d’un coup si une
    /// frame a pris du retard. Une fois arrêté, le tic ne fait plus rien.
    pub fn avancer<R: Rng>(&mut self, ecoule: Duration, rng: &mut R) -> EtatChargement {
        let tics_echus = tics_dans(ecoule, self.reglages.intervalle_tic);

        while self.tics_traites < tics_echus {
            self.tics_traites += 1;
            if self.tic_arrete() {
                continue;
            }
            self.progression += 1;
            self.chiffre = rng.gen_range(0..=9);
            trace!(progression = self.progression, chiffre = self.chiffre, "tic");
        }

        if ecoule >= self.reglages.duree_totale {
            EtatChargement::Pret
        } else {
            EtatChargement::EnCours
        }
    }

    /// Délai avant le prochain tic (None si le tic est arrêté).
    pub fn prochain_tic(&self, ecoule: Duration) -> Option<Duration> {
        if self.tic_arrete() {
            return None;
        }
        let pas = self.reglages.intervalle_tic;
        if pas.is_zero() {
            return Some(Duration::ZERO);
        }
        let prochain = pas * (tics_dans(ecoule, pas) as u32 + 1);
        Some(prochain.saturating_sub(ecoule))
    }

    /// Délai avant la fin du compte à rebours.
    pub fn reste(&self, ecoule: Duration) -> Duration {
        self.reglages.duree_totale.saturating_sub(ecoule)
    }
}

impl Default for EcranChargement {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

fn tics_dans(ecoule: Duration, pas: Duration) -> u64 {
    if pas.is_zero() {
        return 0;
    }
    (ecoule.as_nanos() / pas.as_nanos()) as u64
}
