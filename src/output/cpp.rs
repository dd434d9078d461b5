use super::{quoted_list, Syntax};

/// Include guard macro of the generated header.
pub const INCLUDE_GUARD: &str = "MESSMER_GITVERSION_VERSION_H";

/// Namespace holding the generated constants.
pub const NAMESPACE: &str = "version";

/// C++ header with `constexpr` constants inside `namespace version`
pub struct CppSyntax;

impl Syntax for CppSyntax {
    fn comment(&self) -> &'static str {
        "//"
    }

    fn indent(&self) -> &'static str {
        "    "
    }

    fn open(&self, out: &mut String) {
        out.push_str("#pragma once\n");
        out.push_str(&format!("#ifndef {}\n", INCLUDE_GUARD));
        out.push_str(&format!("#define {}\n", INCLUDE_GUARD));
        out.push('\n');
        out.push_str(&format!("namespace {} {{\n", NAMESPACE));
    }

    fn close(&self, out: &mut String) {
        out.push_str("}\n\n#endif\n");
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "true"
        } else {
            "false"
        }
    }

    fn string_const(&self, name: &str, value: &str) -> String {
        format!("constexpr const char *{} = \"{}\";", name, value)
    }

    fn uint_const(&self, name: &str, value: u32) -> String {
        format!("constexpr const unsigned int {} = {};", name, value)
    }

    fn bool_const(&self, name: &str, value: bool) -> String {
        format!("constexpr bool {} = {};", name, self.bool_literal(value))
    }

    fn list_const(&self, name: &str, values: &[String]) -> String {
        format!("constexpr const char *{}[] = {{{}}};", name, quoted_list(values))
    }
}
