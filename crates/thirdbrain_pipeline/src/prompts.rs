//! Structured prompt construction.
//!
//! Each builder returns the ordered role-tagged messages for one generation
//! step: a system persona, the user ask, and assistant messages pinning the
//! output format.

use thirdbrain_core::Message;

const COACH_PERSONA: &str = "You are a professional life coach with great knowledge of charisma and leadership. \
Having witnessed a wide range of experiences, overcome challenges, and achieved success in life, \
you will choose books that teach users to better their lives.";

const BOOK_FORMAT: &str = "Desired format:\n\
Book Title by Author Name\n\
\n\
Undesired format:\n\
\"Book Title\" by Author Name\n\
Book Title: Author Name";

const BOOK_FORMAT_ONLY: &str =
    "Give me just text in the form of the desired format, nothing else. No = or . or : either.";

/// Messages asking for a random, not-yet-used book subject.
pub fn book_picker(used_titles: &[String]) -> Vec<Message> {
    vec![
        Message::system(COACH_PERSONA),
        Message::user(format!(
            "Give me a random book from all time best selling self help books.\n\
             Different than these books:\n{}",
            used_titles.join("\n")
        )),
        Message::assistant(BOOK_FORMAT),
        Message::assistant(BOOK_FORMAT_ONLY),
    ]
}

/// Messages asking for a replacement after a collision with the used set.
pub fn book_repicker(used_titles: &[String]) -> Vec<Message> {
    vec![
        Message::system(COACH_PERSONA),
        Message::user(format!(
            "I have read this book already, please give me a different book. \
             NOT THESE BOOKS, PLEASE: {}",
            used_titles.join(", ")
        )),
        Message::assistant(BOOK_FORMAT),
        Message::assistant(BOOK_FORMAT_ONLY),
    ]
}

/// Messages asking for a structured summary of one book.
pub fn summarize_book(book: &str) -> Vec<Message> {
    vec![
        Message::system(
            "You are a professional writer and book summarizer. To write effective content, \
             both \"perplexity\" and \"burstiness\" are important. Perplexity assesses text \
             complexity and burstiness evaluates sentence variation. People often write with a \
             mix of long and short sentences, while machine-generated sentences tend to be \
             uniform. You need to ensure a suitable balance of both perplexity and burstiness.\n\
             \n\
             Remember that while summarizing, it's crucial to maintain the integrity of the \
             author's ideas and voice. Use your own words to explain the concepts, but ensure \
             that you capture the essence of the original content accurately.",
        ),
        Message::user(format!("Summarize this book: {book}")),
        Message::assistant(
            "Desired format:\n\
             Introduction: Provide a brief overview of the book's purpose, author's background, \
             and any relevant context.\n\
             Key points: Identify the main concepts or ideas presented in the book. Summarize \
             each key point concisely and clearly. Use bullet points or numbered lists to \
             organize the information.\n\
             Insights and Examples: Highlight the most insightful and impactful moments from \
             the book. Explain how these insights can be applied in real-life situations.\n\
             Practical Application: Offer practical steps or strategies derived from the book's \
             teachings, with actionable tips or exercises to reinforce the concepts.\n\
             Quotes: Select notable quotes from the author, \"Quote\" Author Name.\n\
             Conclusion: Summarize the overall message of the book and reflect on its potential \
             impact.",
        ),
    ]
}

const ARTIST_PERSONA: &str = "As a seasoned artist and photographer, you possess extensive expertise and skill honed \
over the years. Your journey has been filled with invaluable experiences, where you've \
embraced failures as valuable lessons and triumphed in your pursuit of capturing \
breathtaking visuals.";

/// Messages deriving a cover-image prompt from a book summary.
pub fn cover_prompt(summary: &str) -> Vec<Message> {
    vec![
        Message::system(ARTIST_PERSONA),
        Message::user(format!(
            "Generate a short textual representation of an image using keywords from the book \
             summary: {summary}"
        )),
        Message::assistant(
            "Generate a short written depiction of the book's essence by incorporating key \
             terms extracted from the provided summary. Emphasize the visual mood, theme, and \
             genre of the book. Consider a suitable color scheme that aligns with the intended \
             atmosphere. Use evocative language to describe visuals that reflect the plot, \
             themes, or significant elements of the book. The image should not contain any \
             written text.",
        ),
    ]
}

/// Messages deriving an art prompt from a free-form description.
pub fn art_prompt(description: &str) -> Vec<Message> {
    vec![
        Message::system(ARTIST_PERSONA),
        Message::user(format!(
            "Generate a short, under 400 characters long, written textual representation of an \
             art piece using keywords from the user input: {description}"
        )),
        Message::assistant(
            "Generate a short written textual representation of the art piece that captures \
             the essence, mood, and theme of the user input. Incorporate key terms extracted \
             from the provided input. Consider a suitable color scheme that aligns with the \
             intended atmosphere. Use evocative language to describe visuals that reflect the \
             plot, themes, or significant elements of the input. The output should not contain \
             any images, only a textual representation of an art piece. Avoid any apologies or \
             examples. Employ artistic and photographic vocabulary in crafting a distinct and \
             customized textual depiction that aligns with the user input and themes.",
        ),
    ]
}

const AUTHOR_PERSONA: &str = "You are an esteemed best-selling book author known for your unique and engaging content \
that provides immense value to readers.";

/// Messages brainstorming one e-book title.
pub fn ebook_title(topic: &str, target_audience: &str) -> Vec<Message> {
    vec![
        Message::system(AUTHOR_PERSONA),
        Message::user(format!(
            "Please brainstorm book titles based on user input:\n{topic}\n\n\
             and target audience:\n{target_audience}\n\n\
             Using the user input and target audience provided, create something that is \
             completely distinct from any existing book title in the market. Utilize keyword \
             research tools to identify popular search terms related to the topic. Please \
             provide me with ONE compelling title."
        )),
        Message::assistant("Desired format:\nTitle of Your Unique Book"),
    ]
}

/// Messages producing a markdown table of contents.
pub fn ebook_outline(title: &str, topic: &str, target_audience: &str) -> Vec<Message> {
    vec![
        Message::system(
            "You are an accomplished best-selling book author renowned for your ability to \
             create engaging and valuable content. Remember that maintaining a suitable \
             balance between perplexity and burstiness is crucial in crafting effective text. \
             By incorporating a mix of long and short sentences, you can ensure a captivating \
             reading experience for your audience.",
        ),
        Message::user(format!(
            "Based on this user input:\n{topic}\n\n\
             and this target audience:\n{target_audience}\n\n\
             We have crafted a unique book title:\n{title}\n\n\
             Create a captivating table of contents for this book. Consider how the content \
             will best resonate with the target audience and address their specific needs and \
             interests, refining the book's angle, structure, and tone."
        )),
        Message::assistant(format!(
            "Provide a detailed table of contents for the book formatted in Markdown. Avoid \
             any apologies or compliments. Consider the overall arc of a non-fiction eBook. \
             Begin with main themes or key ideas that form the basis for each chapter, and \
             within each chapter include subtopics that expand on the main theme. Maintain a \
             logical progression, allowing ideas to build upon one another:\n\
             # {title}\n\
             *Include your author name or pen name and any relevant subtitle or tagline.*\n\
             \n\
             ## Table of Contents\n\
             1. Introduction\n\
             2. Chapter\n\
                 - 2.1 Section\n\
                 - 2.2 Section\n\
             3. Chapter\n\
                 - Sections\n\
                     - Subsections\n\
             10. Conclusion"
        )),
    ]
}

/// Messages writing one manuscript section.
pub fn ebook_chapter(outline: &str, section: &str, target_audience: &str) -> Vec<Message> {
    vec![
        Message::system(
            "You are a highly acclaimed best-selling author, renowned for your exceptional \
             storytelling abilities and captivating prose. You have been focusing on self-help \
             books, learned from your mistakes and eventually succeeded. A compelling \
             narrative incorporates a mix of sentence lengths, unlike machine-generated \
             writing that can be uniform.",
        ),
        Message::user(format!(
            "I present to you the meticulously crafted table of contents for the eBook you are \
             writing now:\n{outline}\n\n\
             Now, please write the following section of the book:\n{section}\n\n\
             Choose language that is clear, concise, and accessible to your target audience:\n\
             {target_audience}"
        )),
        Message::assistant(
            "When crafting chapter titles, use markdown formatting to enhance their visual \
             appeal: ## Title, ### Subtitle. Feel free to use **bold** and *italic* when it \
             fits the theme. Establish a seamless flow within the chapter, maintaining a \
             novel-like structure rather than a sales pitch. Avoid apologies or compliments. \
             Use language that is relatable and conversational, making readers feel like they \
             are having a conversation with a knowledgeable friend.",
        ),
    ]
}

const PLAYLIST_EXAMPLE: &str = r#"[
    {"song": "Everybody Hurts", "artist": "R.E.M."},
    {"song": "Yesterday", "artist": "The Beatles"},
    {"song": "Tears in Heaven", "artist": "Eric Clapton"},
    {"song": "Hallelujah", "artist": "Jeff Buckley"},
    {"song": "Nothing Compares 2 U", "artist": "Sinead O'Connor"}
]"#;

/// Messages producing a JSON playlist for a description.
pub fn playlist(description: &str, count: u32) -> Vec<Message> {
    vec![
        Message::system(
            "You are a helpful playlist generating assistant. You should generate a list of \
             songs and their artists according to a text prompt. You should return a JSON \
             array, where each element follows this format: \
             {\"song\": <song_title>, \"artist\": <artist_name>}",
        ),
        Message::user("Generate a playlist of 5 songs based on this prompt: super super sad songs"),
        Message::assistant(PLAYLIST_EXAMPLE),
        Message::user(format!(
            "Generate a playlist of {count} songs based on this prompt: {description}"
        )),
        Message::assistant("Return just a JSON array, nothing else. No text before, no text after."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use thirdbrain_core::Role;

    #[test]
    fn picker_embeds_used_titles() {
        let used = vec!["Atomic Habits by James Clear".to_string()];
        let messages = book_picker(&used);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[1].content.contains("Atomic Habits by James Clear"));
    }

    #[test]
    fn chapter_prompt_carries_outline_and_audience() {
        let messages = ebook_chapter("# TOC", "2.1 Section", "new managers");
        assert!(messages[1].content.contains("# TOC"));
        assert!(messages[1].content.contains("new managers"));
    }
}
