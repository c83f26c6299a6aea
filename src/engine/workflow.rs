// ==========================================
// Portal de Proveedores - Máquina de fases del flujo
// ==========================================
// Responsabilidad: custodiar las transiciones del flujo de solicitud
// Fases: IDLE → SELECTING → REVIEWING → SUBMITTED / CANCELLED
// Reglas:
// - desde REVIEWING se puede volver a SELECTING sin perder la selección
// - el envío exitoso pasa por SUBMITTED y se auto-reinicia a IDLE
// - desde SUBMITTED o CANCELLED se puede abrir una solicitud nueva
// ==========================================

use crate::domain::types::WorkflowPhase;
use thiserror::Error;
use tracing::debug;

// ==========================================
// WorkflowError - Transición rechazada
// ==========================================
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Transición de fase no permitida: {from} → {to}")]
pub struct WorkflowError {
    pub from: WorkflowPhase,
    pub to: WorkflowPhase,
}

// ==========================================
// PhaseMachine - Fase actual y transiciones
// ==========================================
#[derive(Debug, Clone)]
pub struct PhaseMachine {
    phase: WorkflowPhase,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            phase: WorkflowPhase::Idle,
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// ¿Es legal pasar de la fase actual a `to`?
    pub fn can_transition(&self, to: WorkflowPhase) -> bool {
        use WorkflowPhase::*;
        matches!(
            (self.phase, to),
            (Idle, Selecting)
                | (Submitted, Selecting)
                | (Cancelled, Selecting)
                | (Selecting, Reviewing)
                | (Selecting, Cancelled)
                | (Reviewing, Selecting)
                | (Reviewing, Submitted)
                | (Reviewing, Cancelled)
                | (Submitted, Idle)
        )
    }

    /// Ejecuta la transición o la rechaza con el par de fases en conflicto
    pub fn transition_to(&mut self, to: WorkflowPhase) -> Result<(), WorkflowError> {
        if !self.can_transition(to) {
            return Err(WorkflowError {
                from: self.phase,
                to,
            });
        }

        debug!("Transición de fase: {} → {}", self.phase, to);
        self.phase = to;
        Ok(())
    }
}
