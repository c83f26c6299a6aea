// ==========================================
// Portal de Proveedores - Resumen de revisión
// ==========================================
// Responsabilidad: totales del borrador para la cabecera de revisión
// ==========================================

use crate::domain::draft::DraftLine;
use serde::{Deserialize, Serialize};

// ==========================================
// ReviewSummary - Totales del borrador
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub line_count: usize,                 // Cantidad de líneas
    pub total_current_cost: f64,           // Suma de costos actuales sin IVA
    pub total_new_cost: f64,               // Suma de costos nuevos sin IVA
    pub average_variation_percent: f64,    // Promedio simple de variación %
}

impl ReviewSummary {
    /// Calcula los totales; con borrador vacío todo queda en cero
    pub fn from_lines(lines: &[DraftLine]) -> Self {
        if lines.is_empty() {
            return Self {
                line_count: 0,
                total_current_cost: 0.0,
                total_new_cost: 0.0,
                average_variation_percent: 0.0,
            };
        }

        let total_current: f64 = lines.iter().map(|l| l.current_cost_ex_vat).sum();
        let total_new: f64 = lines.iter().map(|l| l.new_cost_ex_vat).sum();
        let variation_sum: f64 = lines.iter().map(|l| l.variation_percent).sum();

        Self {
            line_count: lines.len(),
            total_current_cost: total_current,
            total_new_cost: total_new,
            average_variation_percent: variation_sum / lines.len() as f64,
        }
    }
}
