// ==========================================
// Portal de Proveedores - Errores de servicios
// ==========================================
// Responsabilidad: errores de los puertos hacia el portal del comercio
// ==========================================

use thiserror::Error;

// ==========================================
// ServiceError - Fallas de transporte y servidor
// ==========================================
#[derive(Debug, Error)]
pub enum ServiceError {
    // ==========================================
    // Transporte
    // ==========================================
    #[error("Error de red: {0}")]
    Network(String),

    #[error("Respuesta del servidor no interpretable: {0}")]
    InvalidResponse(String),

    // ==========================================
    // Servidor
    // ==========================================
    #[error("El servidor rechazó la operación: {0}")]
    Server(String),

    // ==========================================
    // Otros
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias de resultado para la capa de servicios
pub type ServiceResult<T> = Result<T, ServiceError>;
