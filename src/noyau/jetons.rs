// src/noyau/jetons.rs

use std::fmt;

use num_traits::Float;

use super::erreur::{ErreurCalcul, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    /// Plus grand = lie plus fort.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 0,
            Self::Fois | Self::Divise => 1,
            Self::Puissance => 2,
        }
    }

    /// `gauche op droite`, sémantique IEEE-754 (x/0 => inf ou NaN, jamais d’erreur).
    pub fn appliquer<F: Float>(self, gauche: F, droite: F) -> F {
        match self {
            Self::Plus => gauche + droite,
            Self::Moins => gauche - droite,
            Self::Fois => gauche * droite,
            Self::Divise => gauche / droite,
            Self::Puissance => gauche.powf(droite),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Texte d’origine conservé tel quel ("3.50" reste "3.50")
    Num { texte: String, valeur: f64 },
    Op(Operateur),
    LPar,
    RPar,
}

impl Tok {
    /// Code numérique du genre, pour la ligne de diagnostic.
    /// 0 est réservé à la classe initiale du lexer (jamais émise).
    pub fn code_type(&self) -> u8 {
        match self {
            Tok::Num { .. } => 1,
            Tok::Op(_) => 2,
            Tok::LPar => 4,
            Tok::RPar => 5,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Tok::Op(op) => op.precedence(),
            _ => 0,
        }
    }

    pub fn valeur(&self) -> f64 {
        match self {
            Tok::Num { valeur, .. } => *valeur,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num { texte, .. } => f.write_str(texte),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Caractère ignoré par le lexer (position en octets dans l’entrée).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymboleInconnu {
    pub symbole: char,
    pub position: usize,
}

/// Sortie du lexer : jetons + symboles ignorés en route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lexage {
    pub jetons: Vec<Tok>,
    pub inconnus: Vec<SymboleInconnu>,
}

/// Échec du lexer : l’erreur + les symboles inconnus vus avant elle
/// (ils restent à signaler, l’échec ne les annule pas).
#[derive(Clone, Debug, PartialEq)]
pub struct EchecLexage {
    pub erreur: ErreurCalcul,
    pub inconnus: Vec<SymboleInconnu>,
}

/// Classe grossière d’un caractère pendant le balayage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Classe {
    // début de chaîne, blanc, symbole inconnu, fin de chaîne
    Initiale,
    Nombre,
    Operateur(Operateur),
    ParGauche,
    ParDroite,
}

fn classer(c: char) -> Option<Classe> {
    if c.is_ascii_digit() || c == '.' {
        return Some(Classe::Nombre);
    }
    if let Some(op) = Operateur::depuis_char(c) {
        return Some(Classe::Operateur(op));
    }
    match c {
        '(' => Some(Classe::ParGauche),
        ')' => Some(Classe::ParDroite),
        _ => None,
    }
}

fn finir_nombre(texte: &str, position: usize) -> Result<Tok> {
    let valeur = texte
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::NombreInvalide {
            texte: texte.to_string(),
            position,
        })?;
    Ok(Tok::Num {
        texte: texte.to_string(),
        valeur,
    })
}

/// Tokenize une chaîne en jetons.
///
/// - nombres : suite contiguë de chiffres et de `.` (parse f64)
/// - opérateurs `+ - * / ^` et parenthèses : toujours un jeton par caractère
/// - blancs : ignorés, mais coupent un nombre en cours (`"3 4"` => 3, 4)
/// - autre caractère : noté dans `inconnus`, ignoré, coupe aussi un nombre
///
/// Seul un nombre mal formé fait échouer le lexage.
pub fn tokenize(s: &str) -> std::result::Result<Lexage, EchecLexage> {
    let mut inconnus = Vec::new();
    match balayer(s, &mut inconnus) {
        Ok(jetons) => Ok(Lexage { jetons, inconnus }),
        Err(erreur) => Err(EchecLexage { erreur, inconnus }),
    }
}

// Les inconnus sont poussés au fil du balayage, avant un éventuel échec.
fn balayer(s: &str, inconnus: &mut Vec<SymboleInconnu>) -> Result<Vec<Tok>> {
    let mut jetons = Vec::new();

    // run en cours : classe active + début (octets)
    let mut classe = Classe::Initiale;
    let mut debut = 0;

    for (i, c) in s.char_indices() {
        let nouvelle = if c.is_whitespace() {
            Classe::Initiale
        } else if let Some(k) = classer(c) {
            k
        } else {
            inconnus.push(SymboleInconnu {
                symbole: c,
                position: i,
            });
            Classe::Initiale
        };

        // seuls les chiffres s’accumulent
        if classe == Classe::Nombre && nouvelle == Classe::Nombre {
            continue;
        }

        // frontière : le run se termine avec la classe qui était active
        if classe == Classe::Nombre {
            jetons.push(finir_nombre(&s[debut..i], debut)?);
        }

        match nouvelle {
            Classe::Nombre => debut = i,
            Classe::Operateur(op) => jetons.push(Tok::Op(op)),
            Classe::ParGauche => jetons.push(Tok::LPar),
            Classe::ParDroite => jetons.push(Tok::RPar),
            Classe::Initiale => {}
        }
        classe = nouvelle;
    }

    // sentinelle de fin : vide le run en attente
    if classe == Classe::Nombre {
        jetons.push(finir_nombre(&s[debut..], debut)?);
    }

    Ok(jetons)
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
