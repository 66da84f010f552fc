use std::fmt;

/// iPhone model variant appended to the simulator device name.
///
/// Only meaningful for iOS targets with an explicit device selection; Android
/// runs carry the default `Normal` and never render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    Normal,
    Mini,
    Pro,
    ProMax,
}

impl ModelVariant {
    /// All variants, in prompt order.
    pub const ALL: [ModelVariant; 4] =
        [ModelVariant::Normal, ModelVariant::Mini, ModelVariant::Pro, ModelVariant::ProMax];

    /// Token used in prompts and as the positional argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Normal => "normal",
            ModelVariant::Mini => "mini",
            ModelVariant::Pro => "pro",
            ModelVariant::ProMax => "pro max",
        }
    }

    /// Parse a variant from its prompt/positional token.
    pub fn parse(name: &str) -> Option<ModelVariant> {
        match name {
            "normal" => Some(ModelVariant::Normal),
            "mini" => Some(ModelVariant::Mini),
            "pro" => Some(ModelVariant::Pro),
            "pro max" => Some(ModelVariant::ProMax),
            _ => None,
        }
    }

    /// Suffix appended to `iPhone <mobile>` in the device expression.
    pub fn device_suffix(&self) -> &'static str {
        match self {
            ModelVariant::Normal => "",
            ModelVariant::Mini => " mini",
            ModelVariant::Pro => " Pro",
            ModelVariant::ProMax => " Pro Max",
        }
    }

    /// Variant choices offered for an iOS device token.
    ///
    /// The iPhone 11 line has no mini model.
    pub fn choices_for_mobile(mobile: &str) -> &'static [ModelVariant] {
        if mobile == "11" {
            &[ModelVariant::Normal, ModelVariant::Pro, ModelVariant::ProMax]
        } else {
            &[ModelVariant::Normal, ModelVariant::Mini, ModelVariant::Pro, ModelVariant::ProMax]
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
