// ==========================================
// Portal de Proveedores - Recálculo de línea
// ==========================================
// Responsabilidad: funciones puras de recálculo tras editar una celda
// Reglas tributarias:
// - IVA = costo actual sin IVA × porcentaje IVA / 100
// - ICUI = costo nuevo × tasa ICUI, solo para el código de impuesto ICUI
// - variación % = (nuevo − actual) / actual × 100, con guarda de cero
// Regla de gramaje: entero truncado, nunca negativo, centinela → 0
// ==========================================

use crate::config::DraftEngineConfig;
use crate::domain::draft::DraftLine;
use crate::domain::types::DraftField;

// ==========================================
// RecalcEngine - Cascadas de recálculo
// ==========================================
#[derive(Debug, Clone)]
pub struct RecalcEngine {
    config: DraftEngineConfig,
}

impl RecalcEngine {
    pub fn new(config: DraftEngineConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(DraftEngineConfig::default())
    }

    /// Recalcula los campos derivados de una línea tras cambiar `changed`
    ///
    /// Es una función pura: recibe la línea con el valor nuevo ya aplicado
    /// y retorna una copia con los derivados actualizados.
    ///
    /// # Parámetros
    /// - `line`: línea con el valor editado ya escrito
    /// - `changed`: campo que cambió
    pub fn recompute(&self, line: &DraftLine, changed: DraftField) -> DraftLine {
        let mut next = line.clone();

        match changed {
            DraftField::CurrentCostExVat => {
                next.vat_amount = Self::vat_amount(next.current_cost_ex_vat, next.tax_percent);
                next.variation_percent =
                    Self::variation_percent(next.current_cost_ex_vat, next.new_cost_ex_vat);
            }
            DraftField::NewCostExVat => {
                next.variation_percent =
                    Self::variation_percent(next.current_cost_ex_vat, next.new_cost_ex_vat);
                if next.tax_code == self.config.icui_tax_code {
                    next.icui = next.new_cost_ex_vat * self.config.icui_rate;
                }
            }
            DraftField::TaxPercent => {
                next.vat_amount = Self::vat_amount(next.current_cost_ex_vat, next.tax_percent);
            }
            DraftField::WeightGrams => {
                next.weight_grams = self.normalize_weight(next.weight_grams);
            }
            DraftField::ManualBarcode => {
                next.selected_barcode = next.manual_barcode.clone();
            }
            // Los demás campos no tienen derivados
            DraftField::Icui
            | DraftField::Ibua
            | DraftField::Ipo
            | DraftField::InvoiceFootPercent1
            | DraftField::InvoiceFootPercent2 => {}
        }

        next
    }

    /// Normaliza el gramaje: trunca a entero, el centinela pasa a 0
    /// y el resultado nunca es negativo
    pub fn normalize_weight(&self, raw: f64) -> f64 {
        let truncated = raw.trunc();
        if truncated == self.config.weight_sentinel {
            return 0.0;
        }
        if truncated < 0.0 {
            return 0.0;
        }
        truncated
    }

    /// Variación porcentual entre el costo actual y el nuevo
    ///
    /// Guarda de cero: con costo actual en cero la variación es 100 si hay
    /// costo nuevo positivo, o 0 si no lo hay (nunca se divide por cero).
    pub fn variation_percent(current: f64, new: f64) -> f64 {
        if current == 0.0 {
            if new > 0.0 {
                return 100.0;
            }
            return 0.0;
        }
        (new - current) / current * 100.0
    }

    /// Valor del IVA sobre el costo actual
    pub fn vat_amount(current_cost: f64, tax_percent: f64) -> f64 {
        current_cost * tax_percent / 100.0
    }
}
