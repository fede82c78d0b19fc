// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran de chargement : gros chiffre décoratif + barre 0..100 % + anecdote
// - Calculatrice : affichage lecture seule aligné à droite + pavé 4 colonnes
// - Couleurs : opérateurs/= en accent (violet), C en danger (rouge), chiffres en gris
// - Touche pressée au clavier : anneau de surbrillance, indépendant du focus egui
//
// Note :
// - Le clavier est routé AVANT le dessin (app.rs) : ici on ne lit que les clics.

use eframe::egui;

use super::chargement::EcranChargement;
use super::etat::AppCalc;
use crate::noyau::format::nombre_en_texte;
use crate::noyau::{Famille, Phase, Touche, COLONNES_PAVE, PAVE};

/* ------------------------ Palette (thème sombre) ------------------------ */

pub const FOND: egui::Color32 = egui::Color32::from_rgb(17, 24, 39); // gray-900
const CARTE: egui::Color32 = egui::Color32::from_rgb(31, 41, 55); // gray-800
const PUITS: egui::Color32 = egui::Color32::from_rgb(55, 65, 81); // gray-700
const CHIFFRE: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(147, 51, 234); // purple-600
const DANGER: egui::Color32 = egui::Color32::from_rgb(239, 68, 68); // red-500
const ANNEAU: egui::Color32 = egui::Color32::from_rgb(168, 85, 247); // purple-500
const TEXTE_DISCRET: egui::Color32 = egui::Color32::from_rgb(156, 163, 175); // gray-400

const TAILLE_TOUCHE: egui::Vec2 = egui::vec2(88.0, 72.0);
const ECART: f32 = 14.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        match &self.chargement {
            Some(ecran) => Self::ui_chargement(ui, ecran),
            None => self.ui_calculatrice(ui),
        }
    }

    fn ui_chargement(ui: &mut egui::Ui, ecran: &EcranChargement) {
        let max = ecran.reglages().progression_max.max(1);
        let fraction = f32::from(ecran.progression()) / f32::from(max);

        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() * 0.25).max(0.0));

            // pulsation douce du chiffre décoratif
            let t = ui.input(|i| i.time) as f32;
            let alpha = 0.6 + 0.4 * (t * std::f32::consts::TAU).sin().abs();
            ui.label(
                egui::RichText::new(ecran.chiffre().to_string())
                    .size(72.0)
                    .strong()
                    .color(egui::Color32::WHITE.gamma_multiply(alpha)),
            );

            ui.add_space(24.0);

            ui.add(
                egui::ProgressBar::new(fraction)
                    .desired_width(256.0)
                    .desired_height(16.0)
                    .corner_radius(egui::CornerRadius::same(8))
                    .fill(ACCENT),
            );

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(format!(
                    "Chargement de la calculatrice… {} %",
                    ecran.progression()
                ))
                .size(18.0)
                .color(egui::Color32::WHITE),
            );

            ui.add_space(28.0);
            ui.label(egui::RichText::new("Le saviez-vous ?").color(TEXTE_DISCRET));
            ui.label(
                egui::RichText::new(
                    "Le mot « calculatrice » vient du latin « calculare », \
                     qui signifie « compter avec de petits cailloux ».",
                )
                .small()
                .color(TEXTE_DISCRET),
            );
        });
    }

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);

            egui::Frame::new()
                .fill(CARTE)
                .corner_radius(egui::CornerRadius::same(24))
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.set_width(4.0 * TAILLE_TOUCHE.x + 3.0 * ECART);

                    self.ui_affichage(ui);
                    ui.add_space(20.0);
                    self.ui_pave(ui);
                });
        });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(PUITS)
            .corner_radius(egui::CornerRadius::same(16))
            .inner_margin(egui::Margin::symmetric(18, 20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                // rappel discret du calcul en attente ("12 ×")
                let rappel = match (
                    self.moteur.phase(),
                    self.moteur.operande_en_attente(),
                    self.moteur.operateur_en_attente(),
                ) {
                    (Phase::Repos, _, _) => String::new(),
                    (_, Some(a), Some(op)) => format!("{} {}", nombre_en_texte(a), op.symbole()),
                    _ => String::new(),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(rappel).size(16.0).color(TEXTE_DISCRET));
                });

                // lecture seule, alignée à droite
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.moteur.affichage())
                                .size(44.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .truncate(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(COLONNES_PAVE)
            .spacing([ECART, ECART])
            .show(ui, |ui| {
                for (i, touche) in PAVE.into_iter().enumerate() {
                    self.bouton_touche(ui, touche);
                    if (i + 1) % COLONNES_PAVE == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let fond = match touche.famille() {
            Famille::Accent => ACCENT,
            Famille::Danger => DANGER,
            Famille::Chiffre => CHIFFRE,
        };

        let mut bouton = egui::Button::new(
            egui::RichText::new(touche.etiquette())
                .size(28.0)
                .color(egui::Color32::WHITE),
        )
        .fill(fond)
        .corner_radius(egui::CornerRadius::same(36));

        // surbrillance clavier (pas le focus egui)
        if self.routeur.touche_active() == Some(touche) {
            bouton = bouton.stroke(egui::Stroke::new(3.0, ANNEAU));
        }

        let resp = ui.add_sized(TAILLE_TOUCHE, bouton).on_hover_text(touche.libelle());
        if resp.clicked() {
            self.moteur.appliquer(touche);
        }
    }
}
