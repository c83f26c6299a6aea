// ==========================================
// Portal de Proveedores - Capa de configuración
// ==========================================
// Responsabilidad: parámetros del motor de borradores
// Los valores por defecto reproducen las reglas vigentes del negocio
// ==========================================

pub mod engine_config;

// Re-exportación de la configuración del motor
pub use engine_config::DraftEngineConfig;
