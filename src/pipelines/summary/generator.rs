use super::templates::{Side, SummaryTemplates};
use crate::error::Result;
use crate::pipelines::aspects::RankedAspect;

/// Renders ranked pros and cons into a two-sentence paragraph.
#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    templates: SummaryTemplates,
}

impl SummaryGenerator {
    pub fn new(templates: SummaryTemplates) -> Self {
        Self { templates }
    }

    /// Generator using the built-in templates.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(SummaryTemplates::embedded()?))
    }

    /// Pros sentence, a space, then the cons sentence.
    pub fn generate(&self, pros: &[RankedAspect], cons: &[RankedAspect]) -> Result<String> {
        let pros_sentence = self.templates.render(Side::Pros, &leading_terms(pros))?;
        let cons_sentence = self.templates.render(Side::Cons, &leading_terms(cons))?;
        Ok(format!("{pros_sentence} {cons_sentence}"))
    }
}

fn leading_terms(ranked: &[RankedAspect]) -> Vec<&str> {
    ranked.iter().take(3).map(|r| r.term.as_str()).collect()
}

/// [`SummaryGenerator::generate`] with the built-in templates.
pub fn generate_summary(pros: &[RankedAspect], cons: &[RankedAspect]) -> Result<String> {
    SummaryGenerator::embedded()?.generate(pros, cons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(terms: &[&str]) -> Vec<RankedAspect> {
        terms
            .iter()
            .map(|t| RankedAspect {
                term: t.to_string(),
                count: 1,
            })
            .collect()
    }

    #[test]
    fn empty_lists_give_fixed_text() {
        assert_eq!(
            generate_summary(&[], &[]).unwrap(),
            "No clear pros emerged from the reviews. No clear cons were mentioned frequently."
        );
    }

    #[test]
    fn sides_are_rendered_independently() {
        let summary = generate_summary(&ranked(&["battery", "camera"]), &[]).unwrap();
        assert_eq!(
            summary,
            "Users most frequently praised battery and camera. \
             No clear cons were mentioned frequently."
        );

        let summary =
            generate_summary(&[], &ranked(&["camera", "heating", "gaming", "phone"])).unwrap();
        assert_eq!(
            summary,
            "No clear pros emerged from the reviews. \
             Common complaints were camera, heating, and gaming."
        );
    }
}
