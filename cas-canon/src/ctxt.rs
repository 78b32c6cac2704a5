use once_cell::sync::Lazy;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What is known about the value a symbol stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Domain {
    /// The symbol is a real scalar. Symbols without a binding are assumed to be real.
    #[default]
    Real,

    /// The symbol is a scalar that may have a non-zero imaginary part.
    Complex,

    /// The symbol is a matrix.
    Matrix,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Real => write!(f, "real"),
            Domain::Complex => write!(f, "complex"),
            Domain::Matrix => write!(f, "matrix"),
        }
    }
}

/// The constants every default context knows about.
static BUILTIN_CONSTANTS: Lazy<HashMap<&'static str, Domain>> = Lazy::new(|| {
    HashMap::from([
        ("i", Domain::Complex),
        ("e", Domain::Real),
        ("phi", Domain::Real),
        ("pi", Domain::Real),
        ("tau", Domain::Real),
    ])
});

/// A context to use when classifying the nodes of a tree, containing the domains of the symbols
/// that can be used within the tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The domains of the symbols in the context.
    vars: HashMap<String, Domain>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: BUILTIN_CONSTANTS
                .iter()
                .map(|(name, domain)| (name.to_string(), *domain))
                .collect(),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// In the empty context, every symbol is real, including `i`. Consider using the [`Default`]
    /// implementation instead.
    pub fn new() -> Ctxt {
        Ctxt { vars: HashMap::new() }
    }

    /// Binds a symbol to the given domain.
    pub fn add_var(&mut self, name: &str, domain: Domain) {
        self.vars.insert(name.to_string(), domain);
    }

    /// Returns the domain a symbol is bound to, if any.
    pub fn get_var(&self, name: &str) -> Option<Domain> {
        self.vars.get(name).copied()
    }

    /// Returns the domain of a symbol, falling back to [`Domain::Real`] for unbound symbols.
    pub fn domain_of(&self, name: &str) -> Domain {
        self.get_var(name).unwrap_or_default()
    }

    /// Returns the symbols in the context.
    pub fn get_vars(&self) -> &HashMap<String, Domain> {
        &self.vars
    }
}
