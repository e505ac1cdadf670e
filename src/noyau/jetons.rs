// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
}

impl Fonction {
    /// Mot-clé -> fonction. L'ensemble est fermé : tout autre mot est rejeté.
    pub fn depuis_mot(mot: &str) -> Option<Fonction> {
        match mot {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,

    Fonc(Fonction),
}

/// Tokenize une chaîne en jetons, chacun avec sa position (en caractères).
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5) — au plus un '.' par littéral
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - mots-clés de fonction: sin cos tan log sqrt (la '(' qui suit est exigée
///   par le parseur, juste après)
///
/// Tout autre caractère est rejeté avec sa position : le tokenizer est la
/// seule porte d'entrée du langage, rien n'est ignoré en silence.
pub fn tokenize(s: &str) -> Result<Vec<(Tok, usize)>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push((Tok::LPar, i));
            i += 1;
            continue;
        }
        if c == ')' {
            out.push((Tok::RPar, i));
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push((Tok::Plus, i));
                i += 1;
                continue;
            }
            '-' => {
                out.push((Tok::Minus, i));
                i += 1;
                continue;
            }
            '*' => {
                out.push((Tok::Star, i));
                i += 1;
                continue;
            }
            '/' => {
                out.push((Tok::Slash, i));
                i += 1;
                continue;
            }
            '^' => {
                out.push((Tok::Caret, i));
                i += 1;
                continue;
            }
            _ => {}
        }

        // Mots-clés de fonction : [a-z]+ exact, sinon rejet à la première lettre
        if c.is_ascii_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();

            match Fonction::depuis_mot(&mot) {
                Some(f) => out.push((Tok::Fonc(f), debut)),
                None => {
                    return Err(ErreurCalc::CaractereInvalide {
                        caractere: c,
                        position: debut,
                    });
                }
            }
            continue;
        }

        // Littéral numérique : chiffres + au plus un '.', au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            let mut point_vu = false;
            let mut chiffres = 0usize;

            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    if point_vu {
                        // deuxième point dans le même littéral
                        return Err(ErreurCalc::CaractereInvalide {
                            caractere: '.',
                            position: i,
                        });
                    }
                    point_vu = true;
                } else {
                    chiffres += 1;
                }
                i += 1;
            }

            if chiffres == 0 {
                // '.' seul
                return Err(ErreurCalc::CaractereInvalide {
                    caractere: '.',
                    position: debut,
                });
            }

            let litteral: String = chars[debut..i].iter().collect();
            let v: f64 = litteral.parse().map_err(|_| ErreurCalc::Syntaxe {
                raison: format!("nombre illisible: {litteral:?}"),
                position: Some(debut),
            })?;

            out.push((Tok::Num(v), debut));
            continue;
        }

        return Err(ErreurCalc::CaractereInvalide {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}
