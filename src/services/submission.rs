// ==========================================
// Portal de Proveedores - Servicio de envío
// ==========================================
// Responsabilidad: puerto de creación de la solicitud en el portal
// Regla: el transporte puede fallar (Err) o el servidor puede
// rechazar la solicitud (Ok con success=false); son casos distintos
// ==========================================

use crate::domain::draft::CostUpdateRequest;
use crate::services::error::ServiceResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ==========================================
// SubmissionReceipt - Acuse del portal
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub success: bool,            // ¿El portal aceptó la solicitud?
    pub message: Option<String>,  // Detalle del rechazo o confirmación
}

impl SubmissionReceipt {
    /// Acuse de aceptación sin mensaje adicional
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Acuse de rechazo con la razón del servidor
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(reason.into()),
        }
    }
}

/// Puerto de creación de solicitudes de actualización de costos
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Envía la solicitud al portal del comercio
    ///
    /// # Retorna
    /// - `Ok(receipt)`: el portal respondió; `receipt.success` dice si aceptó
    /// - `Err`: falla de transporte, la solicitud no llegó
    async fn create(&self, request: &CostUpdateRequest) -> ServiceResult<SubmissionReceipt>;
}
