use super::{quoted_list, Syntax};

/// Rust module with `pub const` items
pub struct RustSyntax;

impl Syntax for RustSyntax {
    fn comment(&self) -> &'static str {
        "//"
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "true"
        } else {
            "false"
        }
    }

    fn string_const(&self, name: &str, value: &str) -> String {
        format!("pub const {}: &str = \"{}\";", name, value)
    }

    fn uint_const(&self, name: &str, value: u32) -> String {
        format!("pub const {}: u32 = {};", name, value)
    }

    fn bool_const(&self, name: &str, value: bool) -> String {
        format!("pub const {}: bool = {};", name, self.bool_literal(value))
    }

    fn list_const(&self, name: &str, values: &[String]) -> String {
        format!("pub const {}: &[&str] = &[{}];", name, quoted_list(values))
    }
}
