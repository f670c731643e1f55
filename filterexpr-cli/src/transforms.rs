//! CLI-specific transforms
//!
//! Runs an expression through tokenize + parse and hands the tree to a named format.

use filterexpr::expr::formats::{FormatRegistry, IndentedFormatter};
use filterexpr::expr::lexing::tokenize;
use filterexpr::expr::parsing::Parser;
use filterexpr_config::ExprConfig;

/// Printed when the expression contains no symbols
pub const NO_EXPRESSION: &str = "no expression\n";

/// Build the registry used by the CLI, with the `tree` format laid out per `config`.
pub fn registry_for(config: &ExprConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(IndentedFormatter::new((&config.render).into()));
    registry
}

/// Execute the full pipeline on `source` and render the result in `format`.
pub fn execute_expression(
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, String> {
    if !registry.has(format) {
        return Err(format!(
            "Unknown format '{}' (available: {})",
            format,
            registry.list_formats().join(", ")
        ));
    }

    let symbols = tokenize(source).map_err(|e| format!("Lexing failed: {}", e))?;
    tracing::debug!(symbols = symbols.len(), "tokenized input");

    let mut parser = Parser::new(&symbols);
    let tree = parser
        .parse()
        .map_err(|e| format!("Parsing failed: {}", e))?;
    // The whole expression is printed or none of it.
    if let Some(extra) = parser.remaining().first() {
        return Err(format!(
            "Parsing failed: unexpected {} at position {}",
            extra,
            parser.position()
        ));
    }

    match tree {
        Some(tree) => registry.serialize(&tree, format).map_err(|e| e.to_string()),
        None => Ok(NO_EXPRESSION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FormatRegistry {
        registry_for(&filterexpr_config::load_defaults().unwrap())
    }

    #[test]
    fn renders_tree() {
        let output = execute_expression("1+2", "tree", &registry()).unwrap();
        assert_eq!(output, "+\n    1\n    2\n");
    }

    #[test]
    fn empty_expression() {
        let output = execute_expression("  ", "tree", &registry()).unwrap();
        assert_eq!(output, NO_EXPRESSION);
    }

    #[test]
    fn reports_lex_errors() {
        let err = execute_expression("1+a", "tree", &registry()).unwrap_err();
        assert_eq!(err, "Lexing failed: Unexpected character 'a' at 2..3");
    }

    #[test]
    fn reports_parse_errors() {
        let err = execute_expression("1+", "tree", &registry()).unwrap_err();
        assert_eq!(
            err,
            "Parsing failed: digit expected at position 2 but found end of input"
        );
    }

    #[test]
    fn rejects_unconsumed_symbols() {
        let err = execute_expression("12", "tree", &registry()).unwrap_err();
        assert_eq!(err, "Parsing failed: unexpected 2 at position 1");

        let err = execute_expression("1+2*3", "infix", &registry()).unwrap_err();
        assert_eq!(err, "Parsing failed: unexpected * at position 3");
    }

    #[test]
    fn rejects_unknown_format() {
        let err = execute_expression("1", "xml", &registry()).unwrap_err();
        assert_eq!(
            err,
            "Unknown format 'xml' (available: infix, json, tree, yaml)"
        );
    }
}
