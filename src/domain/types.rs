// ==========================================
// Portal de Proveedores - Tipos de dominio
// ==========================================
// Tipos cerrados del flujo de actualización de costos:
// fase del flujo, modo de precio, campo editable, tipo de notificación
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Fase del flujo (Workflow Phase)
// ==========================================
// Secuencia: IDLE → SELECTING → REVIEWING → SUBMITTED/CANCELLED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowPhase {
    Idle,      // Sin solicitud en curso
    Selecting, // Seleccionando artículos del catálogo
    Reviewing, // Revisando/editando el borrador calculado
    Submitted, // Enviada al colaborador externo
    Cancelled, // Cerrada sin enviar
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowPhase::Idle => write!(f, "IDLE"),
            WorkflowPhase::Selecting => write!(f, "SELECTING"),
            WorkflowPhase::Reviewing => write!(f, "REVIEWING"),
            WorkflowPhase::Submitted => write!(f, "SUBMITTED"),
            WorkflowPhase::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==========================================
// Modo de precio (Pricing Mode)
// ==========================================
// Variante etiquetada: el porcentaje viaja dentro del modo,
// un modo inválido es irrepresentable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PricingMode {
    /// Valores absolutos: el costo nuevo arranca igual al actual
    Absolute,
    /// Variación porcentual uniforme aplicada al crear el borrador
    PercentageVariation(f64),
}

impl PricingMode {
    /// Porcentaje de variación del modo (0 en modo absoluto)
    pub fn variation_percent(&self) -> f64 {
        match self {
            PricingMode::Absolute => 0.0,
            PricingMode::PercentageVariation(p) => *p,
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingMode::Absolute => write!(f, "ABSOLUTE"),
            PricingMode::PercentageVariation(p) => write!(f, "PERCENTAGE_VARIATION({})", p),
        }
    }
}

// ==========================================
// Campo editable del borrador (Draft Field)
// ==========================================
// Identifica la celda editada; dispara la recalculación en cascada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    CurrentCostExVat,    // Costo actual sin IVA
    NewCostExVat,        // Costo nuevo sin IVA
    TaxPercent,          // Porcentaje de IVA (sobreescribible)
    WeightGrams,         // Gramaje
    Icui,                // Impuesto ICUI
    Ibua,                // Impuesto IBUA
    Ipo,                 // Impuesto IPO
    InvoiceFootPercent1, // Pie de factura 1
    InvoiceFootPercent2, // Pie de factura 2
    ManualBarcode,       // Código de barras manual
}

impl DraftField {
    /// Clase de edición del campo (patrón de tecleo y formato)
    pub fn field_class(&self) -> FieldClass {
        match self {
            DraftField::CurrentCostExVat
            | DraftField::NewCostExVat
            | DraftField::Icui
            | DraftField::Ibua
            | DraftField::Ipo => FieldClass::Currency,
            DraftField::TaxPercent
            | DraftField::InvoiceFootPercent1
            | DraftField::InvoiceFootPercent2 => FieldClass::Percent,
            DraftField::WeightGrams => FieldClass::Weight,
            DraftField::ManualBarcode => FieldClass::Text,
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::CurrentCostExVat => write!(f, "currentCostExVat"),
            DraftField::NewCostExVat => write!(f, "newCostExVat"),
            DraftField::TaxPercent => write!(f, "taxPercent"),
            DraftField::WeightGrams => write!(f, "weightGrams"),
            DraftField::Icui => write!(f, "icui"),
            DraftField::Ibua => write!(f, "ibua"),
            DraftField::Ipo => write!(f, "ipo"),
            DraftField::InvoiceFootPercent1 => write!(f, "invoiceFootPercent1"),
            DraftField::InvoiceFootPercent2 => write!(f, "invoiceFootPercent2"),
            DraftField::ManualBarcode => write!(f, "manualBarcode"),
        }
    }
}

// ==========================================
// Clase de edición (Field Class)
// ==========================================
// Moneda: signo opcional, hasta 2 decimales
// Porcentaje: signo opcional, hasta 1 decimal
// Gramaje: solo dígitos
// Texto: libre (código de barras manual)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldClass {
    Currency,
    Percent,
    Weight,
    Text,
}

impl fmt::Display for FieldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldClass::Currency => write!(f, "CURRENCY"),
            FieldClass::Percent => write!(f, "PERCENT"),
            FieldClass::Weight => write!(f, "WEIGHT"),
            FieldClass::Text => write!(f, "TEXT"),
        }
    }
}

// ==========================================
// Tipo de notificación (Notification Type)
// ==========================================
// Serializa en minúscula: es el campo `type` del colaborador de avisos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Success, // Confirmación
    Error,   // Error recuperable
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationType::Success => write!(f, "success"),
            NotificationType::Error => write!(f, "error"),
        }
    }
}
