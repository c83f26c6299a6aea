// ==========================================
// Portal de Proveedores - Armado del borrador
// ==========================================
// Responsabilidad: materializar las líneas del borrador a partir de
// la selección, el catálogo y la modalidad de precio
// Reglas de siembra:
// - % IVA desde la tabla de impuestos según el código del artículo
// - costo nuevo = costo actual (absoluta) o actual × (1 + p/100) (porcentual)
// - ICUI inicial solo para el código de impuesto ICUI
// - gramaje normalizado desde el catálogo (centinela → 0)
// ==========================================

use crate::config::DraftEngineConfig;
use crate::domain::catalog::CatalogSnapshot;
use crate::domain::draft::DraftLine;
use crate::domain::types::PricingMode;
use crate::engine::recalc::RecalcEngine;
use crate::engine::selection::SelectionSet;
use crate::engine::tax_table::TaxTable;
use thiserror::Error;

// ==========================================
// DraftBuildError - Errores de armado
// ==========================================
#[derive(Debug, Error)]
pub enum DraftBuildError {
    #[error("Artículo desconocido en la selección: {key}")]
    UnknownItem { key: String },
}

// ==========================================
// DraftBuilder - Constructor de líneas
// ==========================================
#[derive(Debug, Clone)]
pub struct DraftBuilder {
    config: DraftEngineConfig,
    recalc: RecalcEngine,
}

impl DraftBuilder {
    pub fn new(config: DraftEngineConfig) -> Self {
        let recalc = RecalcEngine::new(config.clone());
        Self { config, recalc }
    }

    pub fn with_default_config() -> Self {
        Self::new(DraftEngineConfig::default())
    }

    /// Construye las líneas del borrador en orden de selección
    ///
    /// # Parámetros
    /// - `selection`: claves elegidas, en orden de selección
    /// - `catalog`: catálogo vigente del proveedor
    /// - `mode`: modalidad de precio (absoluta o variación porcentual)
    ///
    /// # Retorna
    /// - las líneas sembradas, o error si una clave no existe en el catálogo
    pub fn build(
        &self,
        selection: &SelectionSet,
        catalog: &CatalogSnapshot,
        mode: PricingMode,
    ) -> Result<Vec<DraftLine>, DraftBuildError> {
        let mut lines = Vec::with_capacity(selection.len());

        for key in selection.keys() {
            let item = catalog
                .find_by_key(key)
                .ok_or_else(|| DraftBuildError::UnknownItem {
                    key: key.as_str().to_string(),
                })?;

            let tax_percent = TaxTable::percent_for(&item.tax_code);
            let current = item.current_cost_ex_vat;
            let new_cost = match mode {
                PricingMode::Absolute => current,
                PricingMode::PercentageVariation(p) => current * (1.0 + p / 100.0),
            };

            let icui = if item.tax_code == self.config.icui_tax_code {
                new_cost * self.config.icui_rate
            } else {
                0.0
            };

            lines.push(DraftLine {
                item_code: item.item_code.clone(),
                unit_of_measure: item.unit_of_measure.clone(),
                description: item.description.clone(),
                product_line: item.product_line.clone(),
                brand_house_id: item.brand_house_id.clone(),
                tax_code: item.tax_code.clone(),
                weight_grams: self.recalc.normalize_weight(item.weight_grams),
                tax_percent,
                current_cost_ex_vat: current,
                new_cost_ex_vat: new_cost,
                vat_amount: RecalcEngine::vat_amount(current, tax_percent),
                icui,
                ibua: 0.0,
                ipo: 0.0,
                invoice_foot_percent_1: 0.0,
                invoice_foot_percent_2: 0.0,
                variation_percent: RecalcEngine::variation_percent(current, new_cost),
                selected_barcode: item.first_barcode().unwrap_or_default().to_string(),
                manual_barcode: String::new(),
            });
        }

        Ok(lines)
    }
}
