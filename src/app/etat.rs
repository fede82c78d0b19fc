//! src/app/etat.rs
//!
//! État de l’application (sans vue).
//!
//! Deux écrans exclusifs :
//! - chargement (porte de démarrage) : `chargement = Some(..)`, clavier désabonné ;
//! - calculatrice : `chargement = None`, moteur neuf, clavier abonné.
//!
//! Contrats :
//! - Aucun dessin ici (vue.rs).
//! - Le passage chargement -> calculatrice est piloté par le temps seulement.

use std::time::Duration;

use tracing::info;

use super::chargement::{EcranChargement, EtatChargement, Reglages};
use super::clavier::RouteurClavier;
use crate::noyau::Moteur;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- porte de démarrage (None une fois la calculatrice montée) ---
    pub chargement: Option<EcranChargement>,

    // Horloge egui (secondes) à la première frame.
    pub debut: Option<f64>,

    // --- calculatrice ---
    pub moteur: Moteur,
    pub routeur: RouteurClavier,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            chargement: Some(EcranChargement::new(reglages)),
            debut: None,
            moteur: Moteur::default(),
            routeur: RouteurClavier::default(),
        }
    }

    pub fn calculatrice_visible(&self) -> bool {
        self.chargement.is_none()
    }

    /// Temps écoulé depuis la première frame (`maintenant` = horloge egui, en secondes).
    pub fn ecoule(&mut self, maintenant: f64) -> Duration {
        let debut = *self.debut.get_or_insert(maintenant);
        Duration::from_secs_f64((maintenant - debut).max(0.0))
    }

    /// Avance la porte de démarrage ; la lâche et monte la calculatrice quand elle est prête.
    ///
    /// Renvoie le délai avant la prochaine frame utile (None si plus rien à attendre).
    pub fn avancer_chargement<R: rand::Rng>(
        &mut self,
        ecoule: Duration,
        rng: &mut R,
    ) -> Option<Duration> {
        let ecran = self.chargement.as_mut()?;

        match ecran.avancer(ecoule, rng) {
            EtatChargement::EnCours => {
                let reste = ecran.reste(ecoule);
                Some(match ecran.prochain_tic(ecoule) {
                    Some(tic) => tic.min(reste),
                    None => reste,
                })
            }
            EtatChargement::Pret => {
                info!(?ecoule, "chargement terminé, calculatrice affichée");
                self.monter_calculatrice();
                None
            }
        }
    }

    /// Calculatrice visible : moteur neuf + clavier abonné.
    pub fn monter_calculatrice(&mut self) {
        self.chargement = None;
        self.moteur = Moteur::default();
        self.routeur.abonner();
    }

    /// Calculatrice retirée : plus aucun événement clavier ne touche le moteur.
    pub fn demonter_calculatrice(&mut self) {
        self.routeur.desabonner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn demarrage_sur_le_chargement() {
        let app = AppCalc::default();
        assert!(!app.calculatrice_visible());
        assert!(!app.routeur.est_abonne());
    }

    #[test]
    fn horloge_relative_a_la_premiere_frame() {
        let mut app = AppCalc::default();
        assert_eq!(app.ecoule(12.0), Duration::ZERO);
        assert_eq!(app.ecoule(13.5), Duration::from_millis(1500));
    }

    #[test]
    fn bascule_apres_le_compte_a_rebours() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut app = AppCalc::default();

        let attente = app.avancer_chargement(Duration::from_millis(120), &mut rng);
        assert_eq!(attente, Some(Duration::from_millis(30)));
        assert!(!app.calculatrice_visible());

        // progression à 100 mais compte à rebours pas encore écoulé : on attend le reste
        let mut lent = AppCalc::new(Reglages {
            intervalle_tic: Duration::from_millis(10),
            ..Reglages::default()
        });
        assert_eq!(
            lent.avancer_chargement(Duration::from_millis(4_000), &mut rng),
            Some(Duration::from_millis(1_000))
        );

        assert_eq!(app.avancer_chargement(Duration::from_millis(5_000), &mut rng), None);
        assert!(app.calculatrice_visible());
        assert!(app.routeur.est_abonne());
        assert_eq!(app.moteur.affichage(), "0");

        // plus rien à avancer
        assert_eq!(app.avancer_chargement(Duration::from_secs(60), &mut rng), None);
    }

    #[test]
    fn demontage_desabonne() {
        let mut app = AppCalc::default();
        app.monter_calculatrice();
        app.demonter_calculatrice();
        assert!(!app.routeur.est_abonne());
    }
}
