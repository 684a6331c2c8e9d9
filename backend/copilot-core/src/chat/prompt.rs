use crate::context::PageContext;

const URL_LABEL: &str = "Page URL: ";
const TITLE_LABEL: &str = "Page Title: ";
const CONTENT_LABEL: &str = "Page Content: ";
const QUESTION_LEAD: &str =
    "Based on this content and your general knowledge, please answer the following question: ";
const QUESTION_LABEL: &str = "Question: ";
const LANGUAGE_INSTRUCTION: &str = "Answer in the same language as the question.";

/// Build the user prompt for `question` about `context`.
///
/// Field order is URL, title, body text, question, then the language
/// instruction. Changing it changes model behavior.
pub fn compose_prompt(context: &PageContext, question: &str) -> String {
    let mut prompt = String::with_capacity(
        context.body_text().len() + context.url().len() + context.title().len() + question.len() + 256,
    );

    prompt.push_str(URL_LABEL);
    prompt.push_str(context.url());
    prompt.push('\n');

    prompt.push_str(TITLE_LABEL);
    prompt.push_str(context.title());
    prompt.push('\n');

    prompt.push_str(CONTENT_LABEL);
    prompt.push('\n');
    prompt.push_str(context.body_text());
    prompt.push('\n');

    prompt.push_str(QUESTION_LEAD);
    prompt.push('\n');
    prompt.push_str(QUESTION_LABEL);
    prompt.push_str(question);
    prompt.push('\n');

    prompt.push_str(LANGUAGE_INSTRUCTION);
    prompt
}
