use guestbook_domain::MessagePage;

const RULE: &str = "────────────────────────────────";

/// Render one fetched page as chat text.
///
/// The API serves newest-first; display flips the page so the newest entry
/// sits at the bottom, next to where the user is typing.
pub fn format_page(page: &MessagePage) -> String {
    if page.messages.is_empty() {
        return "No messages yet :(".to_string();
    }

    let entries: Vec<String> = page
        .messages
        .iter()
        .rev()
        .map(|message| {
            format!(
                "Name: {}\nMessage: {}\nDate: {}",
                message.name,
                message.message,
                message.date.format("%Y-%m-%d %H:%M")
            )
        })
        .collect();

    format!(
        "Page {}/{}\n{}",
        page.current_page,
        page.last_page,
        entries.join(&format!("\n{RULE}\n"))
    )
}
