// src/noyau/format.rs
//
// Affichage d'une valeur calculée.
//
// Contrainte forte : le texte produit doit re-passer tel quel dans le
// tokenizer (qui ne connaît pas la notation exponentielle). On s'appuie donc
// sur le Display de f64 : écriture décimale la plus courte qui re-parse
// bit à bit, jamais de 'e'.

/// Forme affichable d'un résultat.
/// `calcule(format_valeur(v))` redonne `v` (ré-injection du résultat).
pub fn format_valeur(v: f64) -> String {
    // -0 s'affiche "0" (comme la source d'origine)
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
