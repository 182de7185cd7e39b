//! Console output formatter for bot replies

use colored::Colorize;
use quizbot_application::BotMode;
use quizbot_domain::ConversationId;
use std::fmt::Display;

const REPLY_PREFIX: &str = "bot> ";

/// Formats bot replies and REPL notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one reply message.
    ///
    /// Continuation lines are indented under the prefix so question
    /// options line up with the prompt.
    pub fn format_reply(text: &str) -> String {
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default();
        let mut output = format!("{}{}", REPLY_PREFIX.cyan().bold(), first);

        let rest: Vec<&str> = lines.collect();
        if !rest.is_empty() {
            output.push('\n');
            output.push_str(&Self::indent(
                &rest.join("\n"),
                &" ".repeat(REPLY_PREFIX.len()),
            ));
        }
        output
    }

    pub fn format_error(error: &dyn Display) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    pub fn format_notice(text: &str) -> String {
        text.dimmed().to_string()
    }

    /// Line describing who is talking to which engine
    pub fn session_line(mode: BotMode, conversation: Option<&ConversationId>) -> String {
        let who = conversation
            .map(|id| id.to_string())
            .unwrap_or_else(|| "(anonymous)".to_string());
        format!(
            "{} {}   {} {}",
            "Mode:".cyan().bold(),
            mode,
            "User:".cyan().bold(),
            who
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_reply() {
        let out = ConsoleFormatter::format_reply("答えは ナエトル です！");
        assert!(out.contains("bot> "));
        assert!(out.ends_with("答えは ナエトル です！"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_multi_line_reply_is_aligned() {
        let out = ConsoleFormatter::format_reply("どこ？\n森 / 山 / 海");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "     森 / 山 / 海");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }

    #[test]
    fn test_session_line() {
        let id = ConversationId::try_new("alice").unwrap();
        let out = ConsoleFormatter::session_line(BotMode::Game, Some(&id));
        assert!(out.contains("game"));
        assert!(out.contains("alice"));
        assert!(ConsoleFormatter::session_line(BotMode::Chat, None).contains("(anonymous)"));
    }
}
