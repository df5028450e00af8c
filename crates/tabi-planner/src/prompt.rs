//! Prompt assembly for the planning request

/// Instruction template wrapping the retrieved documents and the user input.
const PLAN_TEMPLATE: &str = "\
Given the following <context>{context}</context>.
Suggest places to visit based on the following information: {input}.
- The higher the review and rankings, the better the location. Prioritise locations with higher rankings and reviews.
- The results need not be exact matches to the user's preferred activities, you can suggest other locations not relevant to the activities. But if possible, prioritise the locations that are relevant to the user's preferred activities.
- In case the number of places doesn't meet the minimum requirement, suggest more locations based on their similarity to the user's city.
- The returned format should be a list of items in JSON format with the same fields as in the database, parent field is \"locations\".
- The results should be different from the previous results, but doesn't necessarily have to be completely different.
- Strip any newline characters from the result.";

/// Render the user-input block embedded in the prompt and recorded as the
/// user turn in the conversation history.
pub fn build_input(city: &str, preferences: &str, language: Option<&str>) -> String {
    let mut input = format!("City: {}\nPreferences: {}", city, preferences);
    if let Some(language) = language {
        if !language.is_empty() {
            input.push_str("\nAnswer in language: ");
            input.push_str(language);
        }
    }
    input
}

/// Render the full planning prompt
pub fn build_prompt(context: &str, input: &str) -> String {
    PLAN_TEMPLATE
        .replace("{context}", context)
        .replace("{input}", input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_without_language() {
        let input = build_input("hanoi", "Activities: hiking", None);
        assert_eq!(input, "City: hanoi\nPreferences: Activities: hiking");
    }

    #[test]
    fn test_build_input_with_language() {
        let input = build_input("hanoi", "", Some("vi"));
        assert!(input.ends_with("Answer in language: vi"));

        // Empty language string behaves like no language
        let input = build_input("hanoi", "", Some(""));
        assert!(!input.contains("language"));
    }

    #[test]
    fn test_build_prompt_embeds_context_and_input() {
        let prompt = build_prompt("id: 1\nname: Lake", "City: hanoi\nPreferences: ");
        assert!(prompt.contains("<context>id: 1\nname: Lake</context>"));
        assert!(prompt.contains("information: City: hanoi"));
        assert!(prompt.contains("parent field is \"locations\""));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{input}"));
    }
}
