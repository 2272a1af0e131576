//! Conversion routing: identity, direct pipeline, or composition through a hub

use codeshift_core::Language;

use crate::library::RuleSetLibrary;
use crate::pipeline::Pipeline;

/// Which language pairs without a direct pipeline go through, and in which order
///
/// Composition always runs source → hub first, then hub → target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubPolicy {
    hub: Language,
}

impl Default for HubPolicy {
    fn default() -> Self {
        Self {
            hub: Language::JavaScript,
        }
    }
}

impl HubPolicy {
    pub fn new(hub: Language) -> Self {
        Self { hub }
    }

    pub fn hub(&self) -> Language {
        self.hub
    }

    /// Chain `first` (source → hub) and `second` (hub → target)
    ///
    /// Returns `None` unless the two legs actually meet at the hub.
    pub fn compose<'a>(
        &self,
        first: &'a Pipeline,
        second: &'a Pipeline,
    ) -> Option<ConversionPath<'a>> {
        let meets_at_hub = first.target() == self.hub && second.source() == self.hub;
        let is_detour = first.source() != self.hub && second.target() != self.hub;

        (meets_at_hub && is_detour).then_some(ConversionPath::Composed(first, second))
    }
}

/// How one conversion is carried out
#[derive(Debug, Clone, Copy)]
pub enum ConversionPath<'a> {
    /// Source and target are the same language
    Identity,
    /// A directly authored pipeline
    Direct(&'a Pipeline),
    /// source → hub, then hub → target
    Composed(&'a Pipeline, &'a Pipeline),
}

impl ConversionPath<'_> {
    /// Run the path over `code`
    pub fn run(&self, code: &str) -> String {
        match self {
            ConversionPath::Identity => code.to_string(),
            ConversionPath::Direct(pipeline) => pipeline.apply(code),
            ConversionPath::Composed(first, second) => second.apply(&first.apply(code)),
        }
    }

    /// Human-readable route, e.g. `python → javascript → java`
    pub fn describe(&self) -> String {
        match self {
            ConversionPath::Identity => "identity".to_string(),
            ConversionPath::Direct(p) => format!("{} → {}", p.source(), p.target()),
            ConversionPath::Composed(first, second) => format!(
                "{} → {} → {}",
                first.source(),
                first.target(),
                second.target()
            ),
        }
    }
}

/// Routes conversions over a rule library
#[derive(Debug, Clone, Copy)]
pub struct Converter<'l> {
    library: &'l RuleSetLibrary,
    policy: HubPolicy,
}

impl<'l> Converter<'l> {
    /// A converter with the default hub
    pub fn new(library: &'l RuleSetLibrary) -> Self {
        Self {
            library,
            policy: HubPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: HubPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> HubPolicy {
        self.policy
    }

    /// Pick the path for a pair, or `None` if the library cannot reach it
    pub fn route(&self, source: Language, target: Language) -> Option<ConversionPath<'l>> {
        if source == target {
            return Some(ConversionPath::Identity);
        }

        if let Some(pipeline) = self.library.pipeline(source, target) {
            return Some(ConversionPath::Direct(pipeline));
        }

        let hub = self.policy.hub();
        let first = self.library.pipeline(source, hub)?;
        let second = self.library.pipeline(hub, target)?;
        self.policy.compose(first, second)
    }

    /// Convert `code` from `source` to `target`
    ///
    /// Never fails. Same-language conversion returns the input verbatim;
    /// otherwise blank input gives `""`. An unreachable pair (only possible
    /// with a hand-built library) returns the input unchanged.
    pub fn convert(&self, code: &str, source: Language, target: Language) -> String {
        if source == target {
            return code.to_string();
        }
        if code.trim().is_empty() {
            return String::new();
        }

        match self.route(source, target) {
            Some(path) => {
                tracing::debug!(route = %path.describe(), bytes = code.len(), "converting");
                path.run(code)
            }
            None => {
                tracing::warn!(%source, %target, "no conversion route; returning input unchanged");
                code.to_string()
            }
        }
    }
}
