// src/app.rs
//
// Calculatrice sombre — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (chargement, clavier, etat, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre d’une frame :
// 1) porte de démarrage (temps) -> éventuellement montage de la calculatrice
// 2) clavier routé et consommé AVANT le dessin (aucun widget ne voit les touches reconnues)
// 3) dessin

pub mod chargement;
pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.calculatrice_visible() {
            let maintenant = ctx.input(|i| i.time);
            let ecoule = self.ecoule(maintenant);
            if let Some(attente) = self.avancer_chargement(ecoule, &mut rand::thread_rng()) {
                // tic suivant (ou fin du compte à rebours) ; + pulsation du chiffre
                ctx.request_repaint_after(attente.min(std::time::Duration::from_millis(50)));
            }
        }

        self.routeur.router_frame(ctx, &mut self.moteur);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.demonter_calculatrice();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(vue::FOND).inner_margin(egui::Margin::same(24)))
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }
}
