//! Error handling for the dashboard model
//!
//! Allocation failures, configuration problems and lookups of unknown lenses
//! all surface as [`DashboardError`] so the API layer can map them onto status
//! codes in one place.

use crate::lens::Lens;
use fusion_calculator::AllocationError;
use thiserror::Error;

/// Error type for dashboard computations and configuration loading
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A headcount breakdown could not be allocated
    #[error("Allocation error in {context}: {source}")]
    Allocation {
        context: String,
        #[source]
        source: AllocationError,
    },

    /// The configuration document could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String, path: Option<String> },

    /// A lens name that is not one of CEO/CFO/CHRO/CIO
    #[error("Unknown lens: {0}")]
    UnknownLens(String),

    /// The resolved configuration has no data for the lens
    #[error("No data configured for lens {0}")]
    MissingLens(Lens),
}

impl DashboardError {
    pub fn allocation(context: impl Into<String>, source: AllocationError) -> Self {
        Self::Allocation { context: context.into(), source }
    }

    pub fn config(message: impl Into<String>, path: Option<&str>) -> Self {
        Self::Config { message: message.into(), path: path.map(str::to_string) }
    }

    /// Whether the caller supplied inputs the model cannot work with (as
    /// opposed to a server-side configuration problem)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Allocation { .. } | Self::UnknownLens(_))
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
