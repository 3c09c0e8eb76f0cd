//! Prompt templates for the text model.

/// Prompt asking the text model to analyze a website named by `target` (a URL
/// or free-form topic). The model works from the text alone; the bot never
/// fetches the site.
pub fn website_analysis(target: &str) -> String {
    format!(
        "Analyze the website: {target}\n\
         \n\
         **Here's what I'm looking for:**\n\
         \n\
         * **Purpose:** What is the main function or service offered by the website? Is it an e-commerce store, a news website, a portfolio, a blog, etc.?\n\
         * **Content:** Briefly describe the type of content found on the website (e.g., articles, products, services, images, videos).\n\
         * **Target Audience:** Who is the website aimed at? (e.g., businesses, general consumers, a specific niche)\n\
         \n\
         **Pay close attention to the website's metadata, including the title tag, meta description, and keywords.** This information can provide valuable clues about the website's purpose and target audience.\n\
         \n\
         **Keep the response concise and informative.**"
    )
}

/// Prompt asking the text model to reformat a raw vision-model description
/// into the structured summary sent back to the channel.
pub fn image_summary(description: &str) -> String {
    format!(
        "The following text is the response from a vision model analyzing an image:\n\
         \n\
         {description}\n\
         \n\
         Please reformat this response into a clear and concise summary with the following structure:\n\
         \n\
         **Image:**\n\
         \n\
         * Briefly describe the main subject(s) in the image.\n\
         \n\
         **Details:**\n\
         \n\
         * Describe any interesting details or objects in the image.\n\
         \n\
         **Additional Notes:**\n\
         \n\
         * Include any relevant information not contained."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_prompt_embeds_target_verbatim() {
        let prompt = website_analysis("one two");
        assert!(prompt.contains("Analyze the website: one two"));
    }

    #[test]
    fn website_prompt_keeps_bullet_fields() {
        let prompt = website_analysis("https://example.com");
        assert!(prompt.contains("**Purpose:**"));
        assert!(prompt.contains("**Content:**"));
        assert!(prompt.contains("**Target Audience:**"));
    }

    #[test]
    fn image_prompt_embeds_description() {
        let prompt = image_summary("a red fox on snow");
        assert!(prompt.contains("a red fox on snow"));
    }

    #[test]
    fn image_prompt_keeps_section_headers() {
        let prompt = image_summary("anything");
        assert!(prompt.contains("**Image:**"));
        assert!(prompt.contains("**Details:**"));
        assert!(prompt.contains("**Additional Notes:**"));
    }
}
