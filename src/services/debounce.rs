// ==========================================
// Portal de Proveedores - Antirrebote de búsqueda
// ==========================================
// Responsabilidad: diferir la emisión del texto de búsqueda hasta
// que el usuario deje de teclear
// Regla: cada entrada nueva aborta la anterior; solo el último texto
// sobrevive la ventana de espera
// ==========================================

use crate::config::DraftEngineConfig;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// ==========================================
// SearchDebouncer - Ventana de espera del tecleo
// ==========================================
pub struct SearchDebouncer {
    delay: Duration,                   // Ventana de espera
    pending: Option<JoinHandle<()>>,   // Emisión en vuelo, abortable
    tx: mpsc::UnboundedSender<String>, // Hacia el consumidor del filtro
}

impl SearchDebouncer {
    /// Crea el antirrebote y el receptor de textos asentados
    ///
    /// # Parámetros
    /// - `delay`: tiempo sin tecleo antes de emitir
    ///
    /// # Retorna
    /// - el antirrebote y el canal por donde llegan los textos
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                pending: None,
                tx,
            },
            rx,
        )
    }

    /// Conveniencia para construir desde milisegundos de configuración
    pub fn from_millis(millis: u64) -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::new(Duration::from_millis(millis))
    }

    /// Construye con la ventana definida en la configuración del motor
    pub fn from_config(config: &DraftEngineConfig) -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::from_millis(config.search_debounce_ms)
    }

    /// Registra un tecleo: aborta la emisión pendiente y arma una nueva
    ///
    /// Debe llamarse dentro de un runtime de tokio.
    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        let text = text.into();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(text);
        }));
    }

    /// Aborta la emisión pendiente sin emitir nada
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// ¿Hay una emisión esperando la ventana?
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
