// src/noyau/erreur.rs

use std::fmt;

use super::jetons::Operateur;

pub type Result<T> = std::result::Result<T, ErreurCalcul>;

/// Erreurs fatales pour UNE expression.
///
/// Les symboles inconnus ne sont pas ici : ils sont tolérés par le lexer
/// et remontés à part (voir `Lexage::inconnus`).
#[derive(Clone, Debug, PartialEq)]
pub enum ErreurCalcul {
    /// Suite de chiffres/points qui ne forme pas un flottant (`1.2.3`, `.`).
    NombreInvalide { texte: String, position: usize },

    /// Un opérateur trouve moins de deux valeurs sur la pile.
    PileInsuffisante { operateur: Operateur, position: usize },

    /// Fin de la RPN avec autre chose qu’exactement une valeur.
    ExpressionMalformee { restants: usize },
}

impl fmt::Display for ErreurCalcul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NombreInvalide { texte, position } => {
                write!(f, "invalid number literal `{texte}` at byte {position}")
            }
            Self::PileInsuffisante { operateur, position } => write!(
                f,
                "operator `{}` at postfix position {position} needs two operands",
                operateur.symbole()
            ),
            Self::ExpressionMalformee { restants } => write!(
                f,
                "malformed expression: {restants} value(s) left on the stack, expected 1"
            ),
        }
    }
}

impl std::error::Error for ErreurCalcul {}
