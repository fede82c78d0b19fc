//! Noyau de la calculatrice (sans vue, sans egui)
//!
//! Organisation interne :
//! - operateur.rs : + − × ÷ en binaire flottant
//! - format.rs    : nombre <-> texte affiché
//! - touche.rs    : touches du pavé (clic ou clavier) + disposition
//! - moteur.rs    : machine à états opérande / opérateur en attente

pub mod format;
pub mod moteur;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_moteur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use moteur::{Moteur, Phase};
pub use touche::{Famille, Touche, COLONNES_PAVE, PAVE};
