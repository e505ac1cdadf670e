// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau (fermée).
// Toutes récupérables : le noyau retourne, il ne panique jamais.
// La vue décide de l'affichage ("Erreur"), le genre reste disponible
// pour les tests et le diagnostic.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Caractère hors alphabet (lettre isolée, symbole non supporté, contrôle).
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInvalide { caractere: char, position: usize },

    /// Suite de jetons hors grammaire (parenthèses déséquilibrées, opérande
    /// manquante, argument de fonction vide, entrée vide, jetons en trop).
    #[error("syntaxe: {raison}")]
    Syntaxe {
        raison: String,
        /// Position (en caractères) du jeton fautif, si connue.
        position: Option<usize>,
    },

    /// Diviseur exactement nul.
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors domaine d'une fonction (√ de négatif, log de ≤ 0).
    #[error("hors domaine: {raison}")]
    Domaine { raison: String },

    /// Résultat intermédiaire ou final non fini (dépassement, NaN).
    #[error("résultat non fini")]
    NonFini,
}

/// Raccourci pour une erreur de syntaxe.
pub fn syntaxe(raison: impl Into<String>, position: Option<usize>) -> ErreurCalc {
    ErreurCalc::Syntaxe {
        raison: raison.into(),
        position,
    }
}
