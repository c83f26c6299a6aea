// ==========================================
// Inicialización del sistema de logs
// ==========================================
// Usa tracing y tracing-subscriber
// Nivel configurable por variable de entorno
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa el sistema de logs
///
/// # Variables de entorno
/// - RUST_LOG: filtro de nivel de log (por defecto: info)
///   Ejemplos: RUST_LOG=debug o RUST_LOG=cost_update_engine=trace
///
/// # Ejemplo
/// ```no_run
/// use cost_update_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    // Lee el nivel desde el entorno; info por defecto
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Formato de salida
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Inicializa el sistema de logs para pruebas
///
/// Usa un nivel más detallado para facilitar la depuración
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
