// src/noyau/format.rs
//
// Conversions texte <-> nombre pour l’affichage.

/// Affichage par défaut quand il n’y a rien (ou plus rien) à montrer.
pub const AFFICHAGE_ZERO: &str = "0";

/// Nombre -> texte : forme décimale la plus courte qui se relit à l’identique.
///
/// - 8.0 -> "8"
/// - 0.1 + 0.2 -> "0.30000000000000004" (artefact binaire conservé)
/// - 9 / 0 -> "inf", 0 / 0 -> "NaN"
/// - -5 × 0 -> "-0" (zéro négatif gardé tel quel)
pub fn nombre_en_texte(x: f64) -> String {
    format!("{x}")
}

/// Texte affiché -> nombre.
///
/// "0." et "inf" se relisent ; un texte tronqué par ⌫ ("-", "in") donne NaN.
pub fn lire_affichage(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(f64::NAN)
}
