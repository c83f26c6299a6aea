// ==========================================
// Portal de Proveedores - Sesión de edición de celda
// ==========================================
// Responsabilidad: ciclo foco → tecleo → desenfoque de una celda
// Reglas:
// - al enfocar, el texto en edición es el valor crudo sin formato
// - cada tecleo propone el texto completo; si no cumple el patrón
//   del campo se rechaza en silencio y el texto no cambia
// - al desenfocar: vacío descarta; texto no numérico vale 0
// Patrones: moneda ±2 decimales, porcentaje ±1 decimal, gramaje solo dígitos
// ==========================================

use crate::domain::draft::DraftLine;
use crate::domain::types::{DraftField, FieldClass};
use crate::engine::format;

// ==========================================
// EditSession - Celda en edición
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub line_index: usize,  // Índice de la línea en el borrador
    pub field: DraftField,  // Campo en edición
    pub staged: String,     // Texto tecleado, aún sin confirmar
}

// ==========================================
// EditCommit - Resultado del desenfoque
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommit {
    /// El texto quedó vacío: se descarta la edición
    Discarded,
    /// Commit numérico (moneda, porcentaje o gramaje)
    Number {
        line_index: usize,
        field: DraftField,
        value: f64,
    },
    /// Commit de texto (código de barras manual)
    Text {
        line_index: usize,
        field: DraftField,
        value: String,
    },
}

impl EditCommit {
    /// Campo afectado por el commit, si lo hay
    pub fn field(&self) -> Option<DraftField> {
        match self {
            EditCommit::Discarded => None,
            EditCommit::Number { field, .. } => Some(*field),
            EditCommit::Text { field, .. } => Some(*field),
        }
    }

    /// Escribe el valor confirmado en la línea (sin cascadas de recálculo)
    pub fn apply_to(&self, line: &mut DraftLine) {
        match self {
            EditCommit::Discarded => {}
            EditCommit::Number { field, value, .. } => match field {
                DraftField::CurrentCostExVat => line.current_cost_ex_vat = *value,
                DraftField::NewCostExVat => line.new_cost_ex_vat = *value,
                DraftField::TaxPercent => line.tax_percent = *value,
                DraftField::WeightGrams => line.weight_grams = *value,
                DraftField::Icui => line.icui = *value,
                DraftField::Ibua => line.ibua = *value,
                DraftField::Ipo => line.ipo = *value,
                DraftField::InvoiceFootPercent1 => line.invoice_foot_percent_1 = *value,
                DraftField::InvoiceFootPercent2 => line.invoice_foot_percent_2 = *value,
                DraftField::ManualBarcode => {}
            },
            EditCommit::Text { field, value, .. } => {
                if *field == DraftField::ManualBarcode {
                    line.manual_barcode = value.clone();
                }
            }
        }
    }
}

// ==========================================
// EditController - Una celda activa a la vez
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EditController {
    active: Option<EditSession>,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abre la edición de una celda y retorna el texto semilla (valor crudo)
    ///
    /// Si había otra celda en edición, la reemplaza sin confirmarla:
    /// el orquestador debe desenfocar antes de enfocar otra celda.
    pub fn focus(&mut self, line_index: usize, field: DraftField, line: &DraftLine) -> String {
        let staged = match field.field_class() {
            FieldClass::Currency => format::raw_currency(numeric_value(line, field)),
            FieldClass::Percent => format::raw_percent(numeric_value(line, field)),
            FieldClass::Weight => format::raw_weight(numeric_value(line, field)),
            FieldClass::Text => line.manual_barcode.clone(),
        };

        self.active = Some(EditSession {
            line_index,
            field,
            staged: staged.clone(),
        });
        staged
    }

    /// Propone el texto completo de la celda tras un tecleo
    ///
    /// # Retorna
    /// - true si el texto cumple el patrón del campo y quedó aplicado
    /// - false si se rechazó (el texto anterior se conserva)
    pub fn keystroke(&mut self, proposed: &str) -> bool {
        let session = match self.active.as_mut() {
            Some(s) => s,
            None => return false,
        };

        let accepted = match session.field.field_class() {
            FieldClass::Currency => matches_numeric(proposed, 2, true),
            FieldClass::Percent => matches_numeric(proposed, 1, true),
            FieldClass::Weight => matches_digits(proposed),
            FieldClass::Text => true,
        };

        if accepted {
            session.staged = proposed.to_string();
        }
        accepted
    }

    /// Cierra la edición y produce el commit
    ///
    /// - texto vacío: descarta (la línea conserva su valor anterior)
    /// - numérico no interpretable: vale 0
    pub fn blur(&mut self) -> Option<EditCommit> {
        let session = self.active.take()?;

        if session.staged.is_empty() {
            return Some(EditCommit::Discarded);
        }

        let commit = match session.field.field_class() {
            FieldClass::Currency | FieldClass::Percent => EditCommit::Number {
                line_index: session.line_index,
                field: session.field,
                value: session.staged.parse::<f64>().unwrap_or(0.0),
            },
            FieldClass::Weight => EditCommit::Number {
                line_index: session.line_index,
                field: session.field,
                value: parse_weight(&session.staged),
            },
            FieldClass::Text => EditCommit::Text {
                line_index: session.line_index,
                field: session.field,
                value: session.staged,
            },
        };

        Some(commit)
    }

    /// ¿Está esta celda en edición?
    pub fn is_editing(&self, line_index: usize, field: DraftField) -> bool {
        self.active
            .as_ref()
            .map(|s| s.line_index == line_index && s.field == field)
            .unwrap_or(false)
    }

    /// Sesión activa, si la hay
    pub fn active(&self) -> Option<&EditSession> {
        self.active.as_ref()
    }

    /// Texto en edición de la celda activa
    pub fn staged_text(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.staged.as_str())
    }

    /// Abandona la edición sin producir commit
    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Valor numérico comprometido del campo
pub(crate) fn numeric_value(line: &DraftLine, field: DraftField) -> f64 {
    match field {
        DraftField::CurrentCostExVat => line.current_cost_ex_vat,
        DraftField::NewCostExVat => line.new_cost_ex_vat,
        DraftField::TaxPercent => line.tax_percent,
        DraftField::WeightGrams => line.weight_grams,
        DraftField::Icui => line.icui,
        DraftField::Ibua => line.ibua,
        DraftField::Ipo => line.ipo,
        DraftField::InvoiceFootPercent1 => line.invoice_foot_percent_1,
        DraftField::InvoiceFootPercent2 => line.invoice_foot_percent_2,
        DraftField::ManualBarcode => 0.0,
    }
}

/// Patrón numérico: signo opcional, dígitos, punto opcional y
/// a lo más `max_decimals` decimales. Acepta estados intermedios
/// del tecleo como "", "-", "12." o ".5"
fn matches_numeric(text: &str, max_decimals: usize, allow_negative: bool) -> bool {
    let mut rest = text;
    if allow_negative {
        rest = rest.strip_prefix('-').unwrap_or(rest);
    }

    let mut seen_dot = false;
    let mut decimals = 0usize;
    for c in rest.chars() {
        if c == '.' {
            if seen_dot {
                return false;
            }
            seen_dot = true;
        } else if c.is_ascii_digit() {
            if seen_dot {
                decimals += 1;
                if decimals > max_decimals {
                    return false;
                }
            }
        } else {
            return false;
        }
    }
    true
}

/// Patrón de gramaje: solo dígitos, sin signo ni decimales
fn matches_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Interpreta el gramaje tecleado: toma el tramo inicial de dígitos
/// (con signo opcional) y lo convierte a entero; sin dígitos vale 0
pub(crate) fn parse_weight(text: &str) -> f64 {
    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = body.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0.0;
    }

    digits.parse::<f64>().map(|v| sign * v).unwrap_or(0.0)
}
