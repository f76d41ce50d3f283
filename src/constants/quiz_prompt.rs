pub const QUIZ_SYSTEM_PROMPT: &str = "You are a helpful assistant that generates quizzes from text. Your response must be a valid JSON array of objects, where each object has 'question', 'options', and 'answer' keys.";

pub const QUIZ_QUESTION_COUNT: usize = 5;

pub const QUIZ_TEMPERATURE: f32 = 0.5;

pub fn quiz_user_prompt(source_text: &str) -> String {
    format!(
        "Create a {}-question multiple choice quiz based on the following text:\n\n{}",
        QUIZ_QUESTION_COUNT, source_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_source_after_instruction() {
        let prompt = quiz_user_prompt("Water is a compound.");
        assert!(prompt.starts_with("Create a 5-question multiple choice quiz"));
        assert!(prompt.ends_with("\n\nWater is a compound."));
    }

    #[test]
    fn system_prompt_names_required_keys() {
        for key in ["'question'", "'options'", "'answer'"] {
            assert!(QUIZ_SYSTEM_PROMPT.contains(key));
        }
    }
}
