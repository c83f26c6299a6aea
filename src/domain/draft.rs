// ==========================================
// Portal de Proveedores - Modelo de borrador
// ==========================================
// DraftLine: línea mutable del borrador, una por artículo seleccionado
// CostUpdateRequest: solicitud inmutable armada al enviar
// Los campos derivados (vatAmount, variationPercent, icui con código "c")
// los mantiene consistentes el motor de recalculación
// ==========================================

use crate::domain::catalog::SelectionKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DraftLine - Línea del borrador
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftLine {
    // ===== Identidad del artículo =====
    pub item_code: String,       // Código del artículo
    pub unit_of_measure: String, // Unidad de medida
    pub description: String,     // Descripción comercial
    pub product_line: String,    // Línea de producto
    pub brand_house_id: String,  // Casa comercial
    pub tax_code: String,        // Código de impuesto (gobierna la regla ICUI)

    // ===== Física =====
    pub weight_grams: f64, // Gramaje normalizado (9999 → 0, entero, nunca negativo)

    // ===== Costos e impuestos =====
    pub tax_percent: f64,          // % IVA derivado del código (sobreescribible)
    pub current_cost_ex_vat: f64,  // Costo actual sin IVA
    pub new_cost_ex_vat: f64,      // Costo nuevo sin IVA
    pub vat_amount: f64,           // IVA en pesos: costo actual * % / 100
    pub icui: f64,                 // ICUI (derivado solo con código "c")
    pub ibua: f64,                 // IBUA (editable)
    pub ipo: f64,                  // IPO (editable)
    pub invoice_foot_percent_1: f64, // Pie de factura 1
    pub invoice_foot_percent_2: f64, // Pie de factura 2
    pub variation_percent: f64,    // Variación: (nuevo - actual) / actual * 100

    // ===== Código de barras =====
    pub selected_barcode: String, // Código elegido (primero del catálogo por defecto)
    pub manual_barcode: String,   // Código digitado a mano (vacío si no se digitó)
}

impl DraftLine {
    /// Clave de selección de la línea: itemCode + "_" + unitOfMeasure
    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey::new(&self.item_code, &self.unit_of_measure)
    }
}

// ==========================================
// CostUpdateRequest - Solicitud de actualización
// ==========================================
// Se arma únicamente al enviar, desde un borrador ya validado;
// inmutable una vez construida
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostUpdateRequest {
    pub supplier_nit: String,           // NIT del proveedor
    pub effective_start_date: NaiveDate, // Fecha de inicio de vigencia
    pub buyer_id: String,               // Comprador destinatario
    pub lines: Vec<DraftLine>,          // Líneas validadas
}

impl CostUpdateRequest {
    /// Cuerpo de la solicitud en el contrato del servicio de envío
    pub fn to_body(&self) -> CostUpdateRequestBody {
        CostUpdateRequestBody {
            supplier_nit: self.supplier_nit.clone(),
            effective_start_date: self.effective_start_date,
            buyer_id: self.buyer_id.clone(),
            lines: self.lines.iter().map(CostUpdateLineBody::from_line).collect(),
        }
    }
}

// ==========================================
// Cuerpo de la solicitud (contrato de envío)
// ==========================================
// Campos por línea exactamente como los espera el servicio externo;
// los campos de liquidación posteriores a la aprobación (feeAmount,
// costWithFee, costPlusIcui, vatAmountCalculated, costPlusVat) los
// calcula el backend, nunca este motor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostUpdateRequestBody {
    pub supplier_nit: String,
    pub effective_start_date: NaiveDate,
    pub buyer_id: String,
    pub lines: Vec<CostUpdateLineBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostUpdateLineBody {
    pub item_code: String,
    pub description: String,
    pub unit_of_measure: String,
    pub current_cost_ex_vat: f64,
    pub new_cost_ex_vat: f64,
    pub weight_grams: f64,
    pub tax_percent: f64,
    pub icui: f64,
    pub ibua: f64,
    pub ipo: f64,
    pub invoice_foot_percent_1: f64,
    pub invoice_foot_percent_2: f64,
    pub barcode: String,
}

impl CostUpdateLineBody {
    fn from_line(line: &DraftLine) -> Self {
        Self {
            item_code: line.item_code.clone(),
            description: line.description.clone(),
            unit_of_measure: line.unit_of_measure.clone(),
            current_cost_ex_vat: line.current_cost_ex_vat,
            new_cost_ex_vat: line.new_cost_ex_vat,
            weight_grams: line.weight_grams,
            tax_percent: line.tax_percent,
            icui: line.icui,
            ibua: line.ibua,
            ipo: line.ipo,
            invoice_foot_percent_1: line.invoice_foot_percent_1,
            invoice_foot_percent_2: line.invoice_foot_percent_2,
            barcode: line.selected_barcode.clone(),
        }
    }
}
