use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Length of the decoration around a description in `Symbol(…)`.
pub const SYMBOL_DECORATION_LEN: usize = "Symbol()".len();

/// A unique token, optionally carrying a description.
///
/// Two symbols are equal only when they are the same token. Tokens obtained
/// through [`Symbol::for_key`] are interned in a process-wide registry.
#[derive(Clone)]
pub struct Symbol(pub(crate) Arc<SymbolData>);

pub(crate) struct SymbolData {
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(SymbolData {
            description: Some(description.into()),
        }))
    }

    pub fn anonymous() -> Self {
        Self(Arc::new(SymbolData { description: None }))
    }

    /// Returns the symbol registered under `key`, registering a new one on
    /// first use.
    pub fn for_key(key: &str) -> Self {
        SymbolRegistry::global().get_or_register(key)
    }

    /// Returns the key this symbol is registered under, if it is global.
    pub fn key_for(&self) -> Option<String> {
        SymbolRegistry::global().key_for(self)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Interning table behind [`Symbol::for_key`].
///
/// Registered symbols live for the rest of the process, so their addresses
/// are stable and can key the reverse lookup.
#[derive(Default)]
pub struct SymbolRegistry {
    inner: RwLock<RegistryTables>,
}

#[derive(Default)]
struct RegistryTables {
    by_key: HashMap<String, Symbol>,
    by_address: HashMap<usize, String>,
}

static GLOBAL_REGISTRY: Lazy<SymbolRegistry> = Lazy::new(SymbolRegistry::default);

impl SymbolRegistry {
    pub fn global() -> &'static SymbolRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn get_or_register(&self, key: &str) -> Symbol {
        if let Some(symbol) = self.inner.read().by_key.get(key) {
            return symbol.clone();
        }

        let mut tables = self.inner.write();
        if let Some(symbol) = tables.by_key.get(key) {
            return symbol.clone();
        }

        let symbol = Symbol::new(key);
        tables
            .by_address
            .insert(symbol.address() as usize, key.to_owned());
        tables.by_key.insert(key.to_owned(), symbol.clone());

        symbol
    }

    /// Read-only lookup; never registers anything.
    pub fn key_for(&self, symbol: &Symbol) -> Option<String> {
        self.inner
            .read()
            .by_address
            .get(&(symbol.address() as usize))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_symbols_are_interned() {
        let first = Symbol::for_key("heft.symbol.interned");
        let second = Symbol::for_key("heft.symbol.interned");
        assert_eq!(first, second);
        assert_eq!(first.key_for().as_deref(), Some("heft.symbol.interned"));
    }

    #[test]
    fn test_local_symbols_are_unique() {
        let first = Symbol::new("a");
        let second = Symbol::new("a");
        assert_ne!(first, second);
        assert_eq!(first.key_for(), None);
        assert_ne!(first, Symbol::for_key("a"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new("abcd").to_string(), "Symbol(abcd)");
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
        assert_eq!(
            Symbol::new("abcd").to_string().len() - SYMBOL_DECORATION_LEN,
            4
        );
    }

    #[test]
    fn test_key_for_does_not_register() {
        let registry = SymbolRegistry::default();
        let symbol = Symbol::new("local");
        assert_eq!(registry.key_for(&symbol), None);
        assert_eq!(registry.key_for(&symbol), None);
        let global = registry.get_or_register("local");
        assert_eq!(registry.key_for(&global).as_deref(), Some("local"));
    }
}
