// src/noyau/format.rs

use super::jetons::Jeton;

/// Affichage d’un flottant, style “calculatrice” :
/// toujours une partie décimale pour les entiers (44 -> "44.0").
///
/// Valeurs spéciales IEEE laissées telles quelles : "inf", "-inf", "NaN".
pub fn format_valeur(v: f64) -> String {
    // Debug de f64 garde le ".0" (Display ne le fait pas)
    format!("{v:?}")
}

/// Pile de jetons en texte : "[4.0, 5.0, 6.0, +, ×]".
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let items: Vec<String> = jetons.iter().map(|j| j.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Résultat d’évaluation pour l’écran : “pas de résultat” s’affiche 0.
pub fn format_resultat(r: Option<f64>) -> String {
    format_valeur(r.unwrap_or(0.0))
}
