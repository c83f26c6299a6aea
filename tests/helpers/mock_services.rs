// ==========================================
// Servicios simulados - para pruebas de integración
// ==========================================
// Responsabilidad: dobles de los puertos del motor con guion
// configurable y captura de lo que el motor les entrega
// ==========================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cost_update_engine::domain::catalog::CatalogSnapshot;
use cost_update_engine::domain::draft::CostUpdateRequest;
use cost_update_engine::services::catalog::CatalogService;
use cost_update_engine::services::error::{ServiceError, ServiceResult};
use cost_update_engine::services::notify::{Notification, NotificationSink};
use cost_update_engine::services::submission::{SubmissionReceipt, SubmissionService};

// ==========================================
// Catálogo simulado
// ==========================================

pub struct MockCatalogService {
    snapshot: Option<CatalogSnapshot>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockCatalogService {
    /// Responde siempre con el snapshot dado
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Falla siempre con un error de red
    pub fn failing(reason: &str) -> Self {
        Self {
            snapshot: None,
            failure: Some(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Cuántas veces se consultó el catálogo
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn items_for_supplier(&self, _supplier_nit: &str) -> ServiceResult<CatalogSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.failure {
            return Err(ServiceError::Network(reason.clone()));
        }
        Ok(self.snapshot.clone().unwrap_or_else(CatalogSnapshot::empty))
    }
}

// ==========================================
// Envío simulado
// ==========================================

/// Guion de respuestas del portal, consumido en orden
pub enum ScriptedResponse {
    Accept,
    Reject(String),
    TransportError(String),
}

pub struct MockSubmissionService {
    script: Mutex<Vec<ScriptedResponse>>,
    captured: Mutex<Vec<CostUpdateRequest>>,
}

impl MockSubmissionService {
    /// Acepta todas las solicitudes
    pub fn accepting() -> Self {
        Self::scripted(vec![])
    }

    /// Responde según el guion; agotado el guion, acepta
    pub fn scripted(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            script: Mutex::new(responses),
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Solicitudes que el motor alcanzó a entregar
    pub fn captured_requests(&self) -> Vec<CostUpdateRequest> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionService for MockSubmissionService {
    async fn create(&self, request: &CostUpdateRequest) -> ServiceResult<SubmissionReceipt> {
        self.captured.lock().unwrap().push(request.clone());

        let mut script = self.script.lock().unwrap();
        let response = if script.is_empty() {
            ScriptedResponse::Accept
        } else {
            script.remove(0)
        };

        match response {
            ScriptedResponse::Accept => Ok(SubmissionReceipt::accepted()),
            ScriptedResponse::Reject(reason) => Ok(SubmissionReceipt::rejected(reason)),
            ScriptedResponse::TransportError(reason) => Err(ServiceError::Network(reason)),
        }
    }
}

// ==========================================
// Receptor de avisos con grabación
// ==========================================

#[derive(Default)]
pub struct RecordingNotificationSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de los avisos recibidos, en orden de llegada
    pub fn messages(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}
