use thiserror::Error;

use crate::ids::{OfferingId, UnitId};

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("unknown learning unit: {0}")]
    UnknownUnit(UnitId),
    #[error("unknown course offering: {0}")]
    UnknownOffering(OfferingId),
}

pub type Result<T> = std::result::Result<T, SheetError>;
