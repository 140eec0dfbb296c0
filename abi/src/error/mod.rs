mod claim;

use thiserror::Error;

pub use claim::*;

use crate::Notice;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("date unavailable")]
    DateUnavailable(DateClaim),

    #[error("selection limit reached: {limit}")]
    SelectionLimitReached { limit: usize },

    #[error("no dates selected")]
    NoDatesSelected,

    #[error("no server selected")]
    NoResourceSelected,

    #[error("invalid server name: {0}")]
    InvalidServer(String),

    #[error("invalid owner: {0}")]
    InvalidOwner(String),

    #[error("reservation has no dates")]
    EmptyReservation,
}

impl From<&SelectionError> for Notice {
    fn from(e: &SelectionError) -> Self {
        match e {
            SelectionError::DateUnavailable(_) => Notice::new(
                "Date non disponible",
                "Cette date est déjà réservée par un autre utilisateur.",
            ),
            SelectionError::SelectionLimitReached { limit } => Notice::new(
                "Limite atteinte",
                format!("Vous ne pouvez réserver que {} jours maximum.", limit),
            ),
            SelectionError::NoDatesSelected => Notice::new(
                "Aucune date sélectionnée",
                "Veuillez sélectionner au moins une date.",
            ),
            SelectionError::NoResourceSelected => {
                Notice::new("Aucun serveur sélectionné", "Veuillez choisir un serveur.")
            }
            other => Notice::new("Erreur", other.to_string()),
        }
    }
}
