// src/noyau/format.rs
//
// Affichage d’un résultat f64 : virgule fixe, zéros finaux retirés.

/// Précision d’affichage par défaut.
pub const DECIMALES_DEFAUT: usize = 10;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 17;

pub fn format_resultat(valeur: f64, decimales: usize) -> String {
    if valeur.is_nan() {
        return "NaN".to_string();
    }
    if valeur.is_infinite() {
        return if valeur > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let d = decimales.min(DECIMALES_MAX);
    let mut s = format!("{:.*}", d, valeur);

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // -0, ou un petit négatif arrondi à zéro
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
