// ============================================================================
// DOM MODULE - Abstracción del documento y del historial
// ============================================================================
// Las pantallas se renderizan reemplazando el subárbol raíz completo y
// re-enlazando listeners después de cada reemplazo. El navegador se usa a
// través de los traits `Document` y `History`; `memory` los implementa
// sin navegador.
// ============================================================================

pub mod document;
pub mod history;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use document::*;
pub use history::*;
pub use memory::MemoryDocument;

#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebHistory};
