//! Recursion limits for structural lookups.

/// Maximum depth when following base types and type parameter constraints
/// during property lookup. Guards against malformed cyclic hierarchies.
pub const MAX_PROPERTY_LOOKUP_DEPTH: u32 = 64;

/// Maximum number of alias hops followed when resolving an alias symbol.
pub const MAX_ALIAS_CHAIN: u32 = 32;
