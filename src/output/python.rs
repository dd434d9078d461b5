use super::{quoted_list, Syntax};

/// Flat Python module with module-level assignments
pub struct PythonSyntax;

impl Syntax for PythonSyntax {
    fn comment(&self) -> &'static str {
        "#"
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "True"
        } else {
            "False"
        }
    }

    fn string_const(&self, name: &str, value: &str) -> String {
        format!("{} = \"{}\"", name, value)
    }

    fn uint_const(&self, name: &str, value: u32) -> String {
        format!("{} = {}", name, value)
    }

    fn bool_const(&self, name: &str, value: bool) -> String {
        format!("{} = {}", name, self.bool_literal(value))
    }

    fn list_const(&self, name: &str, values: &[String]) -> String {
        format!("{} = [{}]", name, quoted_list(values))
    }
}
