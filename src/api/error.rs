// ==========================================
// Portal de Proveedores - Errores de la capa API
// ==========================================
// Responsabilidad: errores de la fachada hacia la interfaz, con
// mensajes explicables para el usuario final
// ==========================================

use crate::domain::types::WorkflowPhase;
use crate::engine::draft_builder::DraftBuildError;
use crate::engine::validator::ValidationReport;
use crate::engine::workflow::WorkflowError;
use crate::services::error::ServiceError;
use thiserror::Error;

/// Errores de la fachada del motor de borradores
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Flujo de la solicitud
    // ==========================================
    #[error("Transición de fase no permitida: {from} → {to}")]
    InvalidStateTransition {
        from: WorkflowPhase,
        to: WorkflowPhase,
    },

    /// Falta un requisito para avanzar (mensaje ya localizado)
    #[error("{0}")]
    PreconditionFailed(String),

    #[error("Hay una operación en curso; espere a que termine")]
    Busy,

    // ==========================================
    // Validación del borrador
    // ==========================================
    /// El borrador tiene líneas bloqueadas; el reporte trae el detalle
    #[error("{0}")]
    ValidationFailed(ValidationReport),

    // ==========================================
    // Entrada y búsqueda
    // ==========================================
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Recurso no encontrado: {0}")]
    NotFound(String),

    // ==========================================
    // Servicios externos
    // ==========================================
    #[error(transparent)]
    Service(#[from] ServiceError),

    // ==========================================
    // Genéricos
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversión desde errores internos del motor
// ==========================================
impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        ApiError::InvalidStateTransition {
            from: err.from,
            to: err.to,
        }
    }
}

impl From<DraftBuildError> for ApiError {
    fn from(err: DraftBuildError) -> Self {
        match err {
            DraftBuildError::UnknownItem { key } => {
                ApiError::NotFound(format!("Artículo {} no está en el catálogo", key))
            }
        }
    }
}

/// Alias de resultado para la capa API
pub type ApiResult<T> = Result<T, ApiError>;
