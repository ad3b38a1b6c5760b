// src/noyau/format.rs

use super::jetons::Tok;

/* ------------------------ Ligne de diagnostic ------------------------ */

/// `Token <texte> (type=<code>, precedence=<p>, value=<v>)`
///
/// Les chevrons sont littéraux. Hors opérateur la précédence vaut 0,
/// hors nombre la valeur vaut 0.
pub fn ligne_jeton(tok: &Tok) -> String {
    format!(
        "Token <{}> (type={}, precedence={}, value={})",
        tok,
        tok.code_type(),
        tok.precedence(),
        tok.valeur()
    )
}

/* ------------------------ Résultat ------------------------ */

/// Affichage du résultat : `Display` de f64 (11, 0.5, inf, NaN).
pub fn format_resultat(v: f64) -> String {
    format!("{v}")
}
