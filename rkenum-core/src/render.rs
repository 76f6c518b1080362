//! Go source rendering for a validated [`EnumModel`].
//!
//! Output is a single compilation unit in a fixed order:
//!
//! ```text
//! header comment, package clause, imports
//! type <Enum> int
//! const ( <Enum>Unknown?, values..., <Enum>Max )
//! func New<Enum>FromString(s string) (<Enum>, error)
//! func (v <Enum>) String() string
//! -- only when aliases exist --
//! func New<Enum>FromAlias(s string) (<Enum>, error)
//! func (v <Enum>) Aliases() []string
//! func New<Enum>(s string) (<Enum>, error)
//! ```
//!
//! Values and aliases are emitted strictly in declaration order so numeric
//! constants stay stable across regenerations.

use std::fmt::{Display, Write};

use tracing::{debug, warn};

use crate::error::{EnumError, EnumResult};
use crate::model::EnumModel;
use crate::normalize::go_lowercase;
use crate::writer::SourceWriter;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Generated code - DO NOT EDIT";

/// Renders the model to a new string.
pub fn render(model: &EnumModel) -> EnumResult<String> {
    // ~160 bytes per value plus fixed boilerplate
    let mut out = String::with_capacity(model.values().len() * 160 + 600);
    render_into(model, &mut out)?;
    Ok(out)
}

/// Renders the model into an arbitrary sink.
///
/// Every write is attempted even after the sink fails; the first failure is
/// returned once rendering completes.
pub fn render_into<W: Write>(model: &EnumModel, sink: &mut W) -> EnumResult<()> {
    let mut b = SourceWriter::new(sink);
    let names = HelperNames::new(model);

    write_preamble(&mut b, model);
    write_constants(&mut b, model);
    write_parse_string(&mut b, model, &names);
    write_to_string(&mut b, model, &names);
    if model.has_aliases() {
        write_parse_alias(&mut b, model, &names);
        write_aliases(&mut b, model, &names);
        write_combined(&mut b, model, &names);
    }

    let (_, first_error) = b.finish();
    match first_error {
        Some(e) => {
            warn!(name = %model.name(), "sink rejected a write while rendering");
            Err(EnumError::from(e))
        }
        None => {
            debug!(name = %model.name(), "rendered enum source");
            Ok(())
        }
    }
}

/// Helper function and method names, cased by the enum's visibility.
struct HelperNames {
    from_string: String,
    from_alias: String,
    combined: String,
    string: String,
    aliases: String,
}

impl HelperNames {
    fn new(model: &EnumModel) -> Self {
        let vis = model.visibility();
        let title = model.title_name();
        let new = vis.apply("New");
        Self {
            from_string: format!("{}{}FromString", new, title),
            from_alias: format!("{}{}FromAlias", new, title),
            combined: format!("{}{}", new, title),
            string: vis.apply("String"),
            aliases: vis.apply("Aliases"),
        }
    }
}

fn write_preamble<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel) {
    b.w(GENERATED_HEADER);
    b.w("\n\n");
    b.f(format_args!("package {}\n\n", model.package()));
    b.w("import (\n");
    b.w("\t\"fmt\"\n");
    b.w("\t\"strings\"\n");
    b.w(")\n\n");
    b.f(format_args!("type {} int\n\n", model.name()));
}

fn write_constants<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel) {
    let name = model.name();
    b.w("const (\n");
    let mut first = true;
    if !model.no_unknown() {
        b.f(format_args!("\t{} = {}(iota)\n", model.unknown_constant(), name));
        first = false;
    }
    for value in model.values() {
        if first {
            b.f(format_args!("\t{} = {}(iota)\n", model.constant(value), name));
            first = false;
        } else {
            b.f(format_args!("\t{}\n", model.constant(value)));
        }
    }
    b.f(format_args!("\t{}\n", model.max_constant()));
    b.w(")\n");
}

/// Emits a lowercase string switch; `cases` yields (label, constant) pairs.
fn write_string_switch<W, I>(b: &mut SourceWriter<W>, model: &EnumModel, func: &str, cases: I)
where
    W: Write,
    I: IntoIterator<Item = (String, String)>,
{
    let name = model.name();
    b.f(format_args!("\nfunc {}(s string) ({}, error) {{\n", func, name));
    b.w("\tswitch strings.ToLower(s) {\n");
    for (label, constant) in cases {
        b.f(format_args!("\tcase {}:\n", GoString(&go_lowercase(&label))));
        b.f(format_args!("\t\treturn {}, nil\n", constant));
    }
    b.w("\tdefault:\n");
    b.f(format_args!(
        "\t\treturn {}(0), fmt.Errorf(\"could not convert string to {}: %s\", s)\n",
        name, name
    ));
    b.w("\t}\n");
    b.w("}\n");
}

fn write_parse_string<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel, names: &HelperNames) {
    let cases = model
        .values()
        .iter()
        .map(|v| (v.name.clone(), model.constant(v)));
    write_string_switch(b, model, &names.from_string, cases);
}

fn write_to_string<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel, names: &HelperNames) {
    let name = model.name();
    b.f(format_args!("\nfunc (v {}) {}() string {{\n", name, names.string));
    b.w("\tswitch v {\n");
    for value in model.values() {
        b.f(format_args!("\tcase {}:\n", model.constant(value)));
        b.f(format_args!("\t\treturn {}\n", GoString(&value.name)));
    }
    b.w("\tdefault:\n");
    b.f(format_args!("\t\treturn fmt.Sprintf(\"{}(%d)\", v)\n", name));
    b.w("\t}\n");
    b.w("}\n");
}

fn write_parse_alias<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel, names: &HelperNames) {
    let cases = model.values().iter().flat_map(|v| {
        let constant = model.constant(v);
        v.aliases
            .iter()
            .map(move |a| (a.clone(), constant.clone()))
    });
    write_string_switch(b, model, &names.from_alias, cases);
}

fn write_aliases<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel, names: &HelperNames) {
    b.f(format_args!(
        "\nfunc (v {}) {}() []string {{\n",
        model.name(),
        names.aliases
    ));
    b.w("\tswitch v {\n");
    for value in model.values() {
        b.f(format_args!("\tcase {}:\n", model.constant(value)));
        b.w("\t\treturn []string{");
        for (i, alias) in value.aliases.iter().enumerate() {
            if i > 0 {
                b.w(", ");
            }
            b.f(format_args!("{}", GoString(alias)));
        }
        b.w("}\n");
    }
    b.w("\tdefault:\n");
    b.w("\t\treturn nil\n");
    b.w("\t}\n");
    b.w("}\n");
}

fn write_combined<W: Write>(b: &mut SourceWriter<W>, model: &EnumModel, names: &HelperNames) {
    b.f(format_args!(
        "\nfunc {}(s string) ({}, error) {{\n",
        names.combined,
        model.name()
    ));
    b.f(format_args!("\tv, err := {}(s)\n", names.from_string));
    b.w("\tif err != nil {\n");
    b.f(format_args!("\t\tv, err = {}(s)\n", names.from_alias));
    b.w("\t}\n");
    b.w("\treturn v, err\n");
    b.w("}\n");
}

/// Double-quoted Go string literal.
struct GoString<'a>(&'a str);

impl Display for GoString<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                '\r' => f.write_str("\\r")?,
                c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}
