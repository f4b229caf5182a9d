//! Crate `rehydrate` — coordinador de rehidratación para estado particionado
//!
//! Este crate define los tipos de dominio (por ejemplo `PersistAction`,
//! `PersistorState`), el registro de slices pendientes (`Registry`), el
//! coordinador que dispara la transición de bootstrap (`Coordinator`), el
//! contrato de transporte `ActionBus` y una implementación en memoria útil
//! para pruebas (`RecordingBus`).
//!
//! Diseño resumido:
//! - Registro como multiset ordenado: cada `register` añade una ocurrencia de
//!   la key y cada `rehydrate` elimina exactamente una, tolerando duplicados
//!   y completions fuera de orden.
//! - Bootstrap por flanco: el flag `bootstrapped` pasa a `true` exactamente
//!   una vez, cuando un `rehydrate` vacía un registro previamente no vacío.
//! - Notificación por registro: cada `rehydrate` publica una acción
//!   `persist/REHYDRATE` en el bus, independiente del estado del registro.
//!
//! Ejemplo rápido:
//! ```rust
//! use rehydrate::stubs::RecordingBus;
//! use rehydrate::coordinator::CoordinatorConfig;
//! use std::sync::Arc;
//! let bus = Arc::new(RecordingBus::new());
//! let coord = rehydrate::Coordinator::new(bus, CoordinatorConfig {}, None);
//! coord.register("canary").unwrap();
//! ```
pub mod bus;
pub mod coordinator;
pub mod domain;
pub mod errors;
pub mod registry;
pub mod stubs;

pub use bus::*;
pub use coordinator::*;
pub use domain::*;
pub use errors::*;
pub use registry::*;
pub use stubs::*;
