use crate::error::{ApiError, ApiResult};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Schema-defined node kinds of the code graph.
///
/// Every variant carries a primary kind and, for the sub categories, a subkind
/// refining it. Both are fixed string constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    // Core kinds
    Abs,
    AbsVar,
    Anchor,
    Constant,
    Doc,
    File,
    Function,
    Interface,
    Name,
    Package,
    Process,
    TApply,
    TBuiltin,

    // Sub-kinds
    FunctionConstructor,
    RecordClass,
    SumEnumClass,
    VariableException,
    VariableField,
    VariableLocal,
    VariableParameter,
    VariableResource,
}

impl NodeKind {
    pub const COUNT: usize = 21;

    /// Every variant, core kinds first, in declaration order.
    pub const ALL: [NodeKind; Self::COUNT] = [
        NodeKind::Abs,
        NodeKind::AbsVar,
        NodeKind::Anchor,
        NodeKind::Constant,
        NodeKind::Doc,
        NodeKind::File,
        NodeKind::Function,
        NodeKind::Interface,
        NodeKind::Name,
        NodeKind::Package,
        NodeKind::Process,
        NodeKind::TApply,
        NodeKind::TBuiltin,
        NodeKind::FunctionConstructor,
        NodeKind::RecordClass,
        NodeKind::SumEnumClass,
        NodeKind::VariableException,
        NodeKind::VariableField,
        NodeKind::VariableLocal,
        NodeKind::VariableParameter,
        NodeKind::VariableResource,
    ];

    pub fn iter() -> impl Iterator<Item = NodeKind> {
        Self::ALL.into_iter()
    }

    /// Returns the node's kind graph value.
    pub const fn kind(self) -> &'static str {
        match self {
            NodeKind::Abs => "abs",
            NodeKind::AbsVar => "absvar",
            NodeKind::Anchor => "anchor",
            NodeKind::Constant => "constant",
            NodeKind::Doc => "doc",
            NodeKind::File => "file",
            NodeKind::Function | NodeKind::FunctionConstructor => "function",
            NodeKind::Interface => "interface",
            NodeKind::Name => "name",
            NodeKind::Package => "package",
            NodeKind::Process => "process",
            NodeKind::TApply => "tapp",
            NodeKind::TBuiltin => "tbuiltin",
            NodeKind::RecordClass => "record",
            NodeKind::SumEnumClass => "sum",
            NodeKind::VariableException
            | NodeKind::VariableField
            | NodeKind::VariableLocal
            | NodeKind::VariableParameter
            | NodeKind::VariableResource => "variable",
        }
    }

    /// Returns the node's subkind graph value, if it has one.
    pub const fn subkind(self) -> Option<&'static str> {
        match self {
            NodeKind::FunctionConstructor => Some("constructor"),
            NodeKind::RecordClass => Some("class"),
            NodeKind::SumEnumClass => Some("enumClass"),
            NodeKind::VariableException => Some("local/exception"),
            NodeKind::VariableField => Some("field"),
            NodeKind::VariableLocal => Some("local"),
            NodeKind::VariableParameter => Some("local/parameter"),
            NodeKind::VariableResource => Some("local/resource"),
            NodeKind::Abs
            | NodeKind::AbsVar
            | NodeKind::Anchor
            | NodeKind::Constant
            | NodeKind::Doc
            | NodeKind::File
            | NodeKind::Function
            | NodeKind::Interface
            | NodeKind::Name
            | NodeKind::Package
            | NodeKind::Process
            | NodeKind::TApply
            | NodeKind::TBuiltin => None,
        }
    }

    pub const fn is_subkind(self) -> bool {
        self.subkind().is_some()
    }

    /// The upper snake case name used to refer to the variant in tooling.
    pub const fn identifier(self) -> &'static str {
        match self {
            NodeKind::Abs => "ABS",
            NodeKind::AbsVar => "ABS_VAR",
            NodeKind::Anchor => "ANCHOR",
            NodeKind::Constant => "CONSTANT",
            NodeKind::Doc => "DOC",
            NodeKind::File => "FILE",
            NodeKind::Function => "FUNCTION",
            NodeKind::Interface => "INTERFACE",
            NodeKind::Name => "NAME",
            NodeKind::Package => "PACKAGE",
            NodeKind::Process => "PROCESS",
            NodeKind::TApply => "TAPPLY",
            NodeKind::TBuiltin => "TBUILTIN",
            NodeKind::FunctionConstructor => "FUNCTION_CONSTRUCTOR",
            NodeKind::RecordClass => "RECORD_CLASS",
            NodeKind::SumEnumClass => "SUM_ENUM_CLASS",
            NodeKind::VariableException => "VARIABLE_EXCEPTION",
            NodeKind::VariableField => "VARIABLE_FIELD",
            NodeKind::VariableLocal => "VARIABLE_LOCAL",
            NodeKind::VariableParameter => "VARIABLE_PARAMETER",
            NodeKind::VariableResource => "VARIABLE_RESOURCE",
        }
    }

    /// Look up a variant by its exact identifier (e.g. `VARIABLE_LOCAL`).
    ///
    /// Only identifiers are accepted; kind and display strings are not parsed.
    pub fn from_identifier(identifier: &str) -> ApiResult<Self> {
        Self::iter()
            .find(|kind| kind.identifier() == identifier)
            .ok_or_else(|| ApiError::InvalidVariant(identifier.to_string()))
    }

    /// The combined `kind[/subkind]` form. Subkinds that contain `/` are not escaped.
    pub fn display_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())?;
        if let Some(subkind) = self.subkind() {
            write!(f, "/{}", subkind)?;
        }
        Ok(())
    }
}

impl Serialize for NodeKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl JsonSchema for NodeKind {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("NodeKind")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let values: Vec<String> = NodeKind::iter().map(|kind| kind.to_string()).collect();
        json_schema!({
            "type": "string",
            "enum": values,
        })
    }
}
