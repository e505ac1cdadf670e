// src/noyau/parseur.rs
//
// Descente récursive avec table de précédence -> AST
// Grammaire (du moins lié au plus lié):
//   expression := terme (('+' | '-') terme)*          gauche
//   terme      := unaire (('*' | '/') unaire)*        gauche
//   unaire     := '-' unaire | puissance
//   puissance  := atome ('^' unaire)?                 droite
//   atome      := Num | '(' expression ')' | Fonc '(' expression ')'
//
// Conséquences:
//   -2^2  = -(2^2) = -4
//   2^3^2 = 2^(3^2) = 512
//   2*-3  = 2*(-3)  = -6
//
// Pas de multiplication implicite : "2(3+4)" est une erreur de syntaxe.

use super::erreurs::{syntaxe, ErreurCalc};
use super::expr::Expr;
use super::jetons::Tok;

/// Construit l'AST complet. Tout jeton restant après l'expression est une
/// erreur (c'est là que "2(3+4)" échoue).
pub fn parse(jetons: &[(Tok, usize)]) -> Result<Expr, ErreurCalc> {
    let mut p = Parseur { jetons, pos: 0 };

    let expr = p.expression()?;

    if let Some((_, position)) = p.courant() {
        return Err(syntaxe("jeton en trop après l'expression", Some(*position)));
    }

    Ok(expr)
}

struct Parseur<'a> {
    jetons: &'a [(Tok, usize)],
    pos: usize,
}

impl Parseur<'_> {
    fn courant(&self) -> Option<&(Tok, usize)> {
        self.jetons.get(self.pos)
    }

    fn avance(&mut self) {
        self.pos += 1;
    }

    fn expression(&mut self) -> Result<Expr, ErreurCalc> {
        let mut gauche = self.terme()?;

        while let Some((tok, _)) = self.courant() {
            let est_plus = match tok {
                Tok::Plus => true,
                Tok::Minus => false,
                _ => break,
            };
            self.avance();

            let droite = self.terme()?;
            gauche = if est_plus {
                Expr::Add(Box::new(gauche), Box::new(droite))
            } else {
                Expr::Sub(Box::new(gauche), Box::new(droite))
            };
        }

        Ok(gauche)
    }

    fn terme(&mut self) -> Result<Expr, ErreurCalc> {
        let mut gauche = self.unaire()?;

        while let Some((tok, _)) = self.courant() {
            let est_fois = match tok {
                Tok::Star => true,
                Tok::Slash => false,
                _ => break,
            };
            self.avance();

            let droite = self.unaire()?;
            gauche = if est_fois {
                Expr::Mul(Box::new(gauche), Box::new(droite))
            } else {
                Expr::Div(Box::new(gauche), Box::new(droite))
            };
        }

        Ok(gauche)
    }

    fn unaire(&mut self) -> Result<Expr, ErreurCalc> {
        if let Some((Tok::Minus, _)) = self.courant() {
            self.avance();
            let x = self.unaire()?;
            return Ok(Expr::Neg(Box::new(x)));
        }
        self.puissance()
    }

    fn puissance(&mut self) -> Result<Expr, ErreurCalc> {
        let base = self.atome()?;

        if let Some((Tok::Caret, _)) = self.courant() {
            self.avance();
            // exposant = unaire : '^' est associatif à droite et accepte 2^-3
            let exposant = self.unaire()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exposant)));
        }

        Ok(base)
    }

    fn atome(&mut self) -> Result<Expr, ErreurCalc> {
        let Some((tok, position)) = self.courant() else {
            return Err(syntaxe("fin d'expression inattendue", None));
        };
        let position = *position;

        match tok.clone() {
            Tok::Num(v) => {
                self.avance();
                Ok(Expr::Num(v))
            }

            Tok::LPar => {
                self.avance();
                let interieur = self.expression()?;
                self.attend_par_fermante()?;
                Ok(interieur)
            }

            Tok::Fonc(f) => {
                self.avance();

                match self.courant() {
                    Some((Tok::LPar, _)) => self.avance(),
                    _ => {
                        return Err(syntaxe(
                            format!("'(' attendue après {}", f.nom()),
                            Some(position),
                        ));
                    }
                }

                // argument vide ("sin()") : l'atome suivant tombe sur ')'
                let argument = self.expression()?;
                self.attend_par_fermante()?;

                Ok(Expr::Fonc(f, Box::new(argument)))
            }

            Tok::RPar => Err(syntaxe("opérande manquante avant ')'", Some(position))),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                Err(syntaxe("opérande attendue", Some(position)))
            }
        }
    }

    fn attend_par_fermante(&mut self) -> Result<(), ErreurCalc> {
        match self.courant() {
            Some((Tok::RPar, _)) => {
                self.avance();
                Ok(())
            }
            Some((_, position)) => Err(syntaxe("')' attendue", Some(*position))),
            None => Err(syntaxe("parenthèse non fermée", None)),
        }
    }
}
