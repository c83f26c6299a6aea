// ==========================================
// Portal de Proveedores - Validación previa al envío
// ==========================================
// Responsabilidad: revisar cada línea del borrador antes de enviar
// Reglas de bloqueo:
// - costo actual sin IVA en cero
// - costo nuevo sin IVA en cero
// - código de barras vacío o "0"
// Salida: reporte agregado por línea con todas sus razones
// ==========================================

use crate::domain::draft::DraftLine;
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// LineValidationError - Errores de una línea
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineValidationError {
    pub item_index: usize,     // Posición de la línea en el borrador
    pub item_code: String,     // Código del artículo
    pub reasons: Vec<String>,  // Razones de bloqueo, localizadas
}

// ==========================================
// ValidationReport - Reporte agregado
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<LineValidationError>,
}

impl ValidationReport {
    /// ¿Pasan todas las líneas?
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Cantidad de líneas bloqueadas
    pub fn blocked_lines(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hay {} línea(s) con errores de validación",
            self.errors.len()
        )
    }
}

// ==========================================
// DraftValidator - Validador del borrador
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DraftValidator;

impl DraftValidator {
    pub fn new() -> Self {
        Self
    }

    /// Valida todas las líneas y agrega las razones por línea
    pub fn validate(&self, lines: &[DraftLine]) -> ValidationReport {
        let mut errors = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let mut reasons = Vec::new();

            if line.current_cost_ex_vat == 0.0 {
                reasons.push(i18n::t("validation.current_cost_missing"));
            }
            if line.new_cost_ex_vat == 0.0 {
                reasons.push(i18n::t("validation.new_cost_missing"));
            }
            if Self::barcode_missing(&line.selected_barcode) {
                reasons.push(i18n::t("validation.barcode_missing"));
            }

            if !reasons.is_empty() {
                errors.push(LineValidationError {
                    item_index: index,
                    item_code: line.item_code.clone(),
                    reasons,
                });
            }
        }

        ValidationReport { errors }
    }

    /// Un código de barras vacío o "0" no identifica al artículo
    fn barcode_missing(barcode: &str) -> bool {
        let trimmed = barcode.trim();
        trimmed.is_empty() || trimmed == "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_line(code: &str) -> DraftLine {
        DraftLine {
            item_code: code.to_string(),
            unit_of_measure: "UND".to_string(),
            description: format!("Artículo {}", code),
            product_line: "Bebidas".to_string(),
            brand_house_id: "CM01".to_string(),
            tax_code: "1".to_string(),
            weight_grams: 150.0,
            tax_percent: 19.0,
            current_cost_ex_vat: 1000.0,
            new_cost_ex_vat: 1100.0,
            vat_amount: 190.0,
            icui: 0.0,
            ibua: 0.0,
            ipo: 0.0,
            invoice_foot_percent_1: 0.0,
            invoice_foot_percent_2: 0.0,
            variation_percent: 10.0,
            selected_barcode: "7701234000011".to_string(),
            manual_barcode: String::new(),
        }
    }

    #[test]
    fn test_scenario_1_borrador_valido() {
        // Escenario 1: líneas completas pasan sin errores
        let validator = DraftValidator::new();
        let lines = vec![base_line("A001"), base_line("B002")];

        let report = validator.validate(&lines);
        assert!(report.is_ok());
        assert_eq!(report.blocked_lines(), 0);
    }

    #[test]
    fn test_scenario_2_costos_en_cero() {
        // Escenario 2: costo actual y nuevo en cero bloquean
        let validator = DraftValidator::new();
        let mut line = base_line("A001");
        line.current_cost_ex_vat = 0.0;
        line.new_cost_ex_vat = 0.0;

        let report = validator.validate(&[line]);
        assert_eq!(report.blocked_lines(), 1);
        assert_eq!(report.errors[0].item_index, 0);
        assert_eq!(report.errors[0].item_code, "A001");
        assert_eq!(report.errors[0].reasons.len(), 2, "ambos costos bloquean");
    }

    #[test]
    fn test_scenario_3_codigo_de_barras_invalido() {
        // Escenario 3: barras vacías, en blanco o "0" bloquean
        let validator = DraftValidator::new();

        for bad in ["", "   ", "0", " 0 "] {
            let mut line = base_line("A001");
            line.selected_barcode = bad.to_string();

            let report = validator.validate(&[line]);
            assert_eq!(report.blocked_lines(), 1, "'{}' debe bloquear", bad);
            assert_eq!(report.errors[0].reasons.len(), 1);
        }
    }

    #[test]
    fn test_scenario_4_agregacion_por_linea() {
        // Escenario 4: solo las líneas con problemas aparecen en el reporte
        let validator = DraftValidator::new();
        let mut bad = base_line("B002");
        bad.new_cost_ex_vat = 0.0;
        let lines = vec![base_line("A001"), bad, base_line("C003")];

        let report = validator.validate(&lines);
        assert_eq!(report.blocked_lines(), 1);
        assert_eq!(report.errors[0].item_index, 1, "índice original de la línea");
        assert_eq!(report.errors[0].item_code, "B002");
    }

    #[test]
    fn test_scenario_5_resumen_del_reporte() {
        // Escenario 5: el resumen textual indica cuántas líneas bloquean
        let validator = DraftValidator::new();
        let mut bad = base_line("A001");
        bad.selected_barcode = "0".to_string();

        let report = validator.validate(&[bad]);
        assert_eq!(
            report.to_string(),
            "Hay 1 línea(s) con errores de validación"
        );
    }

    #[test]
    fn test_scenario_6_reporte_serializable() {
        // Escenario 6: el reporte viaja en camelCase hacia la interfaz
        let validator = DraftValidator::new();
        let mut bad = base_line("A001");
        bad.current_cost_ex_vat = 0.0;

        let report = validator.validate(&[bad]);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["errors"][0]["itemIndex"].is_number());
        assert_eq!(json["errors"][0]["itemCode"], "A001");
    }
}
