//! Noyau de calcul (pur, sans UI)
//!
//! Organisation interne :
//! - erreurs.rs : taxonomie d'erreurs (fermée, typée)
//! - jetons.rs  : tokenisation
//! - parseur.rs : descente récursive -> AST
//! - expr.rs    : AST numérique
//! - eval.rs    : sémantique des opérateurs/fonctions + pipeline complet
//! - format.rs  : affichage ré-injectable du résultat
//!
//! Le noyau est synchrone, sans état, sans E/S et sans journal : une chaîne
//! entre, une valeur (ou une erreur typée) sort.

pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod parseur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{calcule, Calcul};
