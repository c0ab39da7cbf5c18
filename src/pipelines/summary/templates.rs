use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior};
use serde::Deserialize;

use crate::error::Result;
use crate::loaders::{DataFile, DataSource};

/// Which half of the summary a sentence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Pros,
    Cons,
}

impl Side {
    fn prefix(self) -> &'static str {
        match self {
            Side::Pros => "pros",
            Side::Cons => "cons",
        }
    }
}

/// Template key for a list of `len` entries.
fn arity(len: usize) -> &'static str {
    match len {
        0 => "none",
        1 => "one",
        2 => "two",
        _ => "many",
    }
}

#[derive(Debug, Deserialize)]
struct RawSentences {
    none: String,
    one: String,
    two: String,
    many: String,
}

#[derive(Debug, Deserialize)]
struct RawTemplates {
    pros: RawSentences,
    cons: RawSentences,
}

/// Sentence templates keyed by side and arity.
///
/// Each template sees the variables `first`, `second` and `third`. Rendering
/// is strict: a template referring to an entry the list does not have fails.
#[derive(Debug, Clone)]
pub struct SummaryTemplates {
    env: Environment<'static>,
}

impl SummaryTemplates {
    /// Templates compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::load(&DataSource::Embedded)
    }

    /// Reads `templates.json` from `source`.
    pub fn load(source: &DataSource) -> Result<Self> {
        let raw: RawTemplates = source.load_json(DataFile::Templates)?;
        Self::from_raw(raw)
    }

    /// Parses a JSON document of the form
    /// `{"pros": {"none": .., "one": .., "two": .., "many": ..}, "cons": {..}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    fn from_raw(raw: RawTemplates) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (side, sentences) in [(Side::Pros, raw.pros), (Side::Cons, raw.cons)] {
            let RawSentences {
                none,
                one,
                two,
                many,
            } = sentences;
            for (key, source) in [("none", none), ("one", one), ("two", two), ("many", many)] {
                env.add_template_owned(format!("{}.{key}", side.prefix()), source)?;
            }
        }

        Ok(Self { env })
    }

    /// Renders the sentence for `terms`. Only the first three are used.
    pub fn render(&self, side: Side, terms: &[&str]) -> Result<String> {
        let name = format!("{}.{}", side.prefix(), arity(terms.len()));
        let template = self.env.get_template(&name)?;
        let slots: BTreeMap<&str, &str> = ["first", "second", "third"]
            .into_iter()
            .zip(terms.iter().copied())
            .collect();
        let rendered = template.render(&slots)?;
        Ok(rendered.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn picks_template_by_arity() {
        let templates = SummaryTemplates::embedded().unwrap();
        assert_eq!(
            templates.render(Side::Pros, &[]).unwrap(),
            "No clear pros emerged from the reviews."
        );
        assert_eq!(
            templates.render(Side::Cons, &["camera"]).unwrap(),
            "The main concern was camera."
        );
        assert_eq!(
            templates.render(Side::Cons, &["camera", "heating"]).unwrap(),
            "Common complaints were camera and heating."
        );
        assert_eq!(
            templates
                .render(Side::Pros, &["battery", "camera", "display", "price"])
                .unwrap(),
            "Users most frequently praised battery, camera, and display."
        );
    }

    #[test]
    fn custom_templates_from_json() {
        let json = r#"{
            "pros": {"none": "-", "one": "+{{ first }}", "two": "+{{ first }}/{{ second }}", "many": "+{{ first }}/{{ second }}/{{ third }}"},
            "cons": {"none": "-", "one": "-{{ first }}", "two": "-{{ first }}/{{ second }}", "many": "-{{ first }}/{{ second }}/{{ third }}"}
        }"#;
        let templates = SummaryTemplates::from_json(json).unwrap();
        assert_eq!(templates.render(Side::Pros, &["a", "b"]).unwrap(), "+a/b");
    }

    #[test]
    fn template_using_missing_entry_fails() {
        let json = r#"{
            "pros": {"none": "{{ first }}", "one": "", "two": "", "many": ""},
            "cons": {"none": "", "one": "", "two": "", "many": ""}
        }"#;
        let templates = SummaryTemplates::from_json(json).unwrap();
        assert!(matches!(
            templates.render(Side::Pros, &[]),
            Err(PipelineError::Template(_))
        ));
    }

    #[test]
    fn malformed_template_is_rejected() {
        let json = r#"{
            "pros": {"none": "{{ first", "one": "", "two": "", "many": ""},
            "cons": {"none": "", "one": "", "two": "", "many": ""}
        }"#;
        assert!(matches!(
            SummaryTemplates::from_json(json),
            Err(PipelineError::Template(_))
        ));
    }
}
