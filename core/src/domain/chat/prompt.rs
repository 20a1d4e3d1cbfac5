pub const SYSTEM_PROMPT: &str = "You are a helpful food nutrition assistant. \
Always respond in plain text without Markdown, lists, or asterisks.";

/// Build the user prompt sent alongside an optional meal photo.
pub fn build_chat_prompt(message: Option<&str>, detected_food: &[String], has_image: bool) -> String {
    let mut prompt = String::new();

    if has_image {
        prompt.push_str(
            "Act as a food calorie estimator and nutrition advisor for the attached meal photo. \
Identify the visible food items, estimate their calories and macronutrients \
(carbohydrates, protein, fat), and suggest practical adjustments for the rest of the day \
assuming a 2,000-calorie daily limit unless the user says otherwise.",
        );
        if !detected_food.is_empty() {
            prompt.push_str(&format!(
                " A food classifier detected: {}.",
                detected_food.join(", ")
            ));
        }
    } else {
        prompt.push_str(
            "Act as a nutrition advisor. Answer the user's question about food, calories, \
or diet with concrete, health-conscious advice.",
        );
    }

    prompt.push_str(" Keep the answer within 3 lines.");

    if let Some(message) = message {
        prompt.push_str(&format!(" The user says: {message}"));
    }

    prompt
}
