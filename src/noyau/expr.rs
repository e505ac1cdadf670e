// src/noyau/expr.rs
//
// AST numérique (f64).
// - Num  : littéral
// - Neg  : moins unaire (plus serré que + - binaires, moins serré que ^)
// - Fonc : application de fonction (argument toujours parenthésé à la source)
//
// L'arbre est figé après le parse : l'évaluation ne le modifie jamais.

use super::jetons::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Neg(Box<Expr>),
    Fonc(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}
