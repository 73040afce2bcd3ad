//! Attribute value preparation and clause helpers

use stixgraph_core::NodeRef;

/// Escape and quote a raw attribute value
///
/// Backslashes and double quotes are escaped, then the whole value is
/// wrapped in double quotes.
pub fn prepare(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Build a `has <attribute> <value>` clause with the value prepared
pub fn has_clause(attribute: &str, value: &str) -> String {
    format!("has {} {}", attribute, prepare(value))
}

/// Build a match clause binding a variable to an element by stable id
pub fn match_clause(variable: &str, node: &NodeRef) -> String {
    format!(
        "${} isa {} {};",
        variable,
        node.entity,
        has_clause("stix_id", node.id.as_str())
    )
}
