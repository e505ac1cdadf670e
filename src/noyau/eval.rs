//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> parse -> eval -> format
//!
//! Sémantique fixée :
//! - sin/cos/tan en radians, log en base 10, sqrt racine principale
//! - diviseur exactement nul => DivisionParZero (jamais d'infini propagé)
//! - √ de négatif, log de ≤ 0 => Domaine (jamais de NaN silencieux)
//! - tout résultat intermédiaire ou final non fini => NonFini
//!
//! Le pipeline est une fonction pure : même chaîne => même valeur bit à bit
//! ou même genre d'erreur. Aucun état, aucune locale, aucun journal.

use super::erreurs::{syntaxe, ErreurCalc};
use super::expr::Expr;
use super::format::format_valeur;
use super::jetons::{tokenize, Fonction};
use super::parseur::parse;

/// Résultat d'un calcul réussi : la valeur, et sa forme affichable.
/// `affichage` re-passe telle quelle dans [`calcule`] (ré-injection du
/// résultat comme nouvelle entrée).
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub valeur: f64,
    pub affichage: String,
}

/// API publique : évalue une expression complète.
///
/// Unique point d'entrée du noyau. La couche UI normalise d'abord les
/// glyphes localisés (× ÷) vers * et / ; ici on ne lit que l'ASCII.
pub fn calcule(expression: &str) -> Result<Calcul, ErreurCalc> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(syntaxe("entrée vide", None));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) AST
    let expr = parse(&jetons)?;

    // 3) Valeur (chaque étape intermédiaire est déjà contrôlée)
    let valeur = eval(&expr)?;

    Ok(Calcul {
        affichage: format_valeur(valeur),
        valeur,
    })
}

/// Évalue un AST. Chaque nœud arithmétique est contrôlé fini avant de
/// remonter : un dépassement au milieu de l'expression ne se transforme
/// jamais en infini qui circule.
pub fn eval(expr: &Expr) -> Result<f64, ErreurCalc> {
    use Expr::*;

    match expr {
        Num(v) => Ok(*v),

        Neg(x) => Ok(-eval(x)?),

        Add(a, b) => fini(eval(a)? + eval(b)?),
        Sub(a, b) => fini(eval(a)? - eval(b)?),
        Mul(a, b) => fini(eval(a)? * eval(b)?),

        Div(a, b) => {
            let numerateur = eval(a)?;
            let diviseur = eval(b)?;
            if diviseur == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            fini(numerateur / diviseur)
        }

        // powf peut produire un NaN (base négative, exposant fractionnaire)
        // ou un infini (dépassement) : fini() attrape les deux.
        Pow(base, exposant) => fini(eval(base)?.powf(eval(exposant)?)),

        Fonc(f, x) => applique(*f, eval(x)?),
    }
}

/// Table fixe des fonctions scientifiques.
fn applique(f: Fonction, x: f64) -> Result<f64, ErreurCalc> {
    let v = match f {
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => x.tan(),

        Fonction::Log => {
            if x <= 0.0 {
                return Err(ErreurCalc::Domaine {
                    raison: format!("log({x}) : argument ≤ 0"),
                });
            }
            x.log10()
        }

        Fonction::Sqrt => {
            if x < 0.0 {
                return Err(ErreurCalc::Domaine {
                    raison: format!("sqrt({x}) : argument négatif"),
                });
            }
            x.sqrt()
        }
    };

    fini(v)
}

fn fini(v: f64) -> Result<f64, ErreurCalc> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalc::NonFini)
    }
}
