// Archivo: registry.rs
// Propósito: multiset ordenado de keys pendientes de rehidratar más el
// flag monotónico `bootstrapped`. Componente hoja: datos puros e
// invariantes, sin transporte ni callbacks.

/// Registro de slices pendientes.
///
/// Mantiene las keys en orden de registro, con duplicados permitidos: la
/// misma key puede registrarse N veces (reintentos solapados del mismo
/// slice) y entonces requiere N completions antes de dejar de contar como
/// pendiente. El flag `bootstrapped` nace `false` y sólo transita a `true`
/// una vez; nunca revierte, ni siquiera si el registro vuelve a llenarse.
#[derive(Debug)]
pub struct Registry {
    pending: Vec<String>,
    bootstrapped: bool,
}

impl Registry {
    /// Crea un registro vacío, sin bootstrap.
    pub fn new() -> Self {
        Self { pending: Vec::new(),
               bootstrapped: false }
    }

    /// Añade una ocurrencia de `key` al final de la secuencia. Siempre
    /// tiene éxito; no hay cota de duplicados.
    pub fn register(&mut self, key: &str) {
        self.pending.push(key.to_string());
    }

    /// Elimina la PRIMERA ocurrencia de `key`. Si no hay ninguna, no-op.
    ///
    /// Devuelve `true` sólo cuando la eliminación en sí dejó vacía una
    /// secuencia previamente no vacía (señal de flanco que consume el
    /// coordinador). Un no-op nunca devuelve `true`, aunque la secuencia
    /// ya estuviera vacía.
    pub fn complete(&mut self, key: &str) -> bool {
        match self.pending.iter().position(|k| k == key) {
            Some(idx) => {
                self.pending.remove(idx);
                self.pending.is_empty()
            }
            None => false,
        }
    }

    /// Indica si hay al menos una ocurrencia pendiente de `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.pending.iter().any(|k| k == key)
    }

    /// Keys pendientes, en orden de registro.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Número de ocurrencias pendientes.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// `true` si no queda ninguna ocurrencia pendiente.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Lectura del flag monotónico de bootstrap.
    pub fn bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Marca el registro como bootstrapped. Idempotente; no hay camino de
    /// vuelta a `false`.
    pub fn mark_bootstrapped(&mut self) {
        self.bootstrapped = true;
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
