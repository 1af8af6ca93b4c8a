use serde::Serialize;

use super::{CategoryId, RawInputs};

/// How a form field is edited and how the engine reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Number,
    Text,
    Select,
}

/// One declared form field of a calculator.
///
/// `name` addresses the field's value in the raw input map and is unique
/// within its calculator. For [`InputKind::Select`] the raw value is always
/// the option text, never its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl InputField {
    /// A numeric field. The placeholder starts as `"0"`.
    pub const fn number(
        name: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Number,
            options: &[],
            unit: None,
            placeholder: Some("0"),
            default_value: None,
        }
    }

    pub const fn text(
        name: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Text,
            options: &[],
            unit: None,
            placeholder: None,
            default_value: None,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Select,
            options,
            unit: None,
            placeholder: None,
            default_value: None,
        }
    }

    pub const fn unit(
        mut self,
        unit: &'static str,
    ) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn placeholder(
        mut self,
        placeholder: &'static str,
    ) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Sets both the placeholder and the value the form is pre-filled with.
    pub const fn prefilled(
        mut self,
        value: &'static str,
    ) -> Self {
        self.placeholder = Some(value);
        self.default_value = Some(value);
        self
    }
}

/// A catalog entry: an input schema bound by `id` to a formula handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorDefinition {
    pub id: &'static str,
    pub category_id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: &'static [InputField],
    pub popular: bool,
}

impl CalculatorDefinition {
    /// Looks up a declared field by name.
    pub fn field(
        &self,
        name: &str,
    ) -> Option<&'static InputField> {
        self.inputs.iter().find(|f| f.name == name)
    }

    /// The raw input map a freshly opened form starts with: every field
    /// that declares a default value, and nothing else.
    pub fn default_inputs(&self) -> RawInputs {
        self.inputs
            .iter()
            .filter_map(|f| f.default_value.map(|v| (f.name, v)))
            .collect()
    }
}
