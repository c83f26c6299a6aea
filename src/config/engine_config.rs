// ==========================================
// Portal de Proveedores - Configuración del motor
// ==========================================
// Responsabilidad: agrupar los parámetros numéricos del motor de borradores
// Las fórmulas de derivación son fijas; aquí viven solo sus constantes
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DraftEngineConfig - Configuración del motor de borradores
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEngineConfig {
    pub icui_rate: f64,              // Tasa ICUI sobre el costo nuevo: 0.20
    pub icui_tax_code: String,       // Código de impuesto que dispara ICUI: "c"
    pub weight_sentinel: f64,        // Gramaje centinela "no aplica": 9999
    pub search_debounce_ms: u64,     // Retardo del filtro de búsqueda: 300ms
    pub min_variation_percent: f64,  // Límite inferior de variación: -100
    pub max_variation_percent: f64,  // Límite superior de variación: 100
}

impl Default for DraftEngineConfig {
    fn default() -> Self {
        Self {
            icui_rate: 0.20,
            icui_tax_code: "c".to_string(),
            weight_sentinel: 9999.0,
            search_debounce_ms: 300,
            min_variation_percent: -100.0,
            max_variation_percent: 100.0,
        }
    }
}
