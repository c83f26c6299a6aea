// ==========================================
// Portal de Proveedores - Notificaciones al usuario
// ==========================================
// Responsabilidad: trait de notificación para que el motor avise
// resultados sin conocer la interfaz
// Nota: el motor define el trait; la capa de presentación implementa
// el adaptador (toast, snackbar, etc.)
// ==========================================

use crate::domain::types::NotificationType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// Notification - Aviso para el usuario
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String, // Texto ya localizado
    #[serde(rename = "type")]
    pub kind: NotificationType, // Viaja como `type`; palabra reservada en Rust
}

impl Notification {
    /// Aviso de éxito
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationType::Success,
        }
    }

    /// Aviso de error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationType::Error,
        }
    }
}

// ==========================================
// Trait de notificación
// ==========================================

/// Receptor de avisos del motor
///
/// La capa de presentación implementa este trait; el motor lo usa
/// a través del envoltorio opcional sin acoplarse a la interfaz.
pub trait NotificationSink: Send + Sync {
    /// Entrega un aviso al usuario
    fn notify(&self, notification: Notification);
}

/// Receptor nulo, para escenarios sin interfaz (pruebas unitarias)
#[derive(Debug, Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            "NoOpNotificationSink: aviso descartado - kind={}, message={}",
            notification.kind,
            notification.message
        );
    }
}

/// Envoltorio opcional del receptor
///
/// Simplifica el uso de Option<Arc<dyn NotificationSink>>
pub struct OptionalNotificationSink {
    inner: Option<Arc<dyn NotificationSink>>,
}

impl OptionalNotificationSink {
    /// Crea el envoltorio con un receptor configurado
    pub fn with_sink(sink: Arc<dyn NotificationSink>) -> Self {
        Self { inner: Some(sink) }
    }

    /// Crea el envoltorio vacío (los avisos se descartan)
    pub fn none() -> Self {
        Self { inner: None }
    }

    /// Entrega el aviso si hay receptor configurado
    pub fn notify(&self, notification: Notification) {
        match &self.inner {
            Some(sink) => sink.notify(notification),
            None => {
                tracing::debug!(
                    "OptionalNotificationSink: sin receptor, aviso descartado - message={}",
                    notification.message
                );
            }
        }
    }

    /// ¿Hay receptor configurado?
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalNotificationSink {
    fn default() -> Self {
        Self::none()
    }
}
