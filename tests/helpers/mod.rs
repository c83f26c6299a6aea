// ==========================================
// Ayudantes compartidos de las pruebas de integración
// ==========================================

// Cada binario de prueba usa un subconjunto distinto de los ayudantes
#[allow(dead_code)]
pub mod mock_services;
#[allow(dead_code)]
pub mod test_data_builder;

use cost_update_engine::{i18n, logging};

/// Prepara el entorno común de las pruebas: logs de prueba y locale
#[allow(dead_code)]
pub fn init_test_env() {
    logging::init_test();
    i18n::set_locale("es-CO");
}
