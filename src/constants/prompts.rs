use crate::{errors::GenerationError, models::domain::Category};

const COUNT_PLACEHOLDER: &str = "{n}";

const APPLIED_MATH_PROMPT: &str = "Generate {n} multiple choice questions for Applied Mathematics.
Focus on these topics:
- Calculus (derivatives, integrals, optimization, accumulation)
- Linear Algebra (vectors, matrices, systems of equations, eigenvalues)
- Financial Mathematics (interest, present/future value, risk assessment)
- Number Theory (primes, divisibility, modular arithmetic)
- Probability & Combinatorics (counting, permutations, probability rules)";

const STATISTICS_PROMPT: &str = "Generate {n} multiple choice questions for Statistics & Data Analysis.
Focus on these topics:
- Hypothesis Testing (t-tests, chi-square, confidence intervals)
- Regression Analysis (linear regression, correlation, forecasting)
- Data Visualization (charts, graphs, scatter plots, histograms)
- Sampling Methods (random, stratified, cluster, biases)
- Central Tendency & Spread (mean, median, variance, standard deviation)";

const VERBAL_REASONING_PROMPT: &str = "Generate {n} multiple choice questions for Verbal Reasoning.
Focus on these topics:
- Critical Reading (author's tone, inference, arguments)
- Analogies (relationships between words or ideas)
- Logic Puzzles (deductive reasoning problems, elimination grids)
- Sentence Completion (context, vocabulary usage)
- Reading Comprehension (short passages with inference questions)";

const GENERAL_KNOWLEDGE_PROMPT: &str = "Generate {n} multiple choice questions for General Knowledge.
Focus on these topics:
- World Politics & Government (systems, leaders, global relations)
- Economics (supply/demand, inflation, markets)
- Science & Technology (major theories, discoveries, inventions)
- Art & Literature (artists, authors, works from different cultures)
- Geography (countries, capitals, physical landmarks)";

const SPECIALIZED_PROMPT: &str = "Generate {n} multiple choice questions for Specialized Fields.
Focus on these topics:
- Medicine: ECG interpretation (R-R interval conversion, arrhythmia basics)
- Biology: Genetics (Mendelian, molecular, population genetics)
- Computer Science: algorithms, data structures, internet basics, AI";

/// Appended to every rendered prompt so the model answers in the
/// `GeneratedQuestionSet` shape.
pub const QUESTION_OUTPUT_INSTRUCTIONS: &str = r#"Respond with a single JSON object and nothing else: no prose, no markdown.
The object must have exactly these keys:
- "category": the category identifier given below
- "questions": an array of objects, each with
  - "question": the question text
  - "options": an array of exactly 4 answer choices
  - "answer": the text of the correct choice, copied exactly from "options""#;

pub fn template(category: Category) -> &'static str {
    match category {
        Category::AppliedMath => APPLIED_MATH_PROMPT,
        Category::Statistics => STATISTICS_PROMPT,
        Category::VerbalReasoning => VERBAL_REASONING_PROMPT,
        Category::GeneralKnowledge => GENERAL_KNOWLEDGE_PROMPT,
        Category::Specialized => SPECIALIZED_PROMPT,
    }
}

/// Substitutes `count` into the category's template.
pub fn render(category: Category, count: u32) -> String {
    template(category).replace(COUNT_PLACEHOLDER, &count.to_string())
}

/// String-keyed entry point for callers holding an unvalidated identifier.
pub fn render_str(category: &str, count: u32) -> Result<String, GenerationError> {
    let category: Category = category.parse()?;
    Ok(render(category, count))
}

/// Full prompt sent to the model: the topic template followed by the
/// output contract.
pub fn build_generation_prompt(category: Category, count: u32) -> String {
    format!(
        "{}\n\nCategory identifier: {}\n\n{}",
        render(category, count),
        category,
        QUESTION_OUTPUT_INSTRUCTIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_template_with_placeholder() {
        for category in Category::ALL {
            assert!(
                template(category).contains(COUNT_PLACEHOLDER),
                "{category} template is missing the count placeholder"
            );
        }
    }

    #[test]
    fn render_substitutes_the_requested_count() {
        let prompt = render(Category::Statistics, 5);

        assert!(prompt.starts_with("Generate 5 multiple choice questions for Statistics"));
        assert!(!prompt.contains(COUNT_PLACEHOLDER));
    }

    #[test]
    fn render_is_pure() {
        assert_eq!(
            render(Category::VerbalReasoning, 12),
            render(Category::VerbalReasoning, 12)
        );
    }

    #[test]
    fn render_str_rejects_unknown_category() {
        let err = render_str("unknown_topic", 10).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidCategory(_)));
    }

    #[test]
    fn render_str_matches_typed_render() {
        assert_eq!(
            render_str("applied_math", 3).unwrap(),
            render(Category::AppliedMath, 3)
        );
    }

    #[test]
    fn generation_prompt_carries_output_contract() {
        let prompt = build_generation_prompt(Category::Specialized, 4);

        assert!(prompt.contains("Generate 4 multiple choice questions for Specialized Fields"));
        assert!(prompt.contains("Category identifier: specialized"));
        assert!(prompt.ends_with(QUESTION_OUTPUT_INSTRUCTIONS));
    }
}
