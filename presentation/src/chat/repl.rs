//! REPL (Read-Eval-Print Loop) for talking to the bot

use crate::ConsoleFormatter;
use quizbot_application::{BotMode, HandleMessageUseCase, InboundMessage};
use quizbot_domain::ConversationId;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io;
use std::sync::Arc;
use tracing::warn;

/// Slash commands understood by the REPL
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Quit,
    Help,
    /// Switch to another conversation, or show the current one
    User(Option<String>),
    Anonymous,
    Unknown(String),
}

/// How one input line is handled
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Command(&'a str),
    /// Text for the bot. A leading `//` sends a literal `/`.
    Text(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    if line.starts_with("//") {
        Input::Text(&line[1..])
    } else if line.starts_with('/') {
        Input::Command(line)
    } else {
        Input::Text(line)
    }
}

/// A missing history file just means a first run
fn is_missing_history(error: &ReadlineError) -> bool {
    matches!(error, ReadlineError::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

fn parse_command(line: &str) -> ReplCommand {
    let mut parts = line.split_whitespace();
    match (parts.next().unwrap_or_default(), parts.next()) {
        ("/quit" | "/exit" | "/q", _) => ReplCommand::Quit,
        ("/help" | "/h" | "/?", _) => ReplCommand::Help,
        ("/user" | "/u", id) => ReplCommand::User(id.map(String::from)),
        ("/anonymous", _) => ReplCommand::Anonymous,
        (other, _) => ReplCommand::Unknown(other.to_string()),
    }
}

/// Interactive REPL
pub struct ChatRepl {
    use_case: Arc<HandleMessageUseCase>,
    mode: BotMode,
    conversation: Option<ConversationId>,
    quiet: bool,
}

impl ChatRepl {
    /// Create a REPL speaking as `conversation`, or anonymously when `None`
    pub fn new(
        use_case: Arc<HandleMessageUseCase>,
        mode: BotMode,
        conversation: Option<ConversationId>,
    ) -> Self {
        Self {
            use_case,
            mode,
            conversation,
            quiet: false,
        }
    }

    /// Set whether to skip the welcome banner
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("quizbot").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                warn!("Could not create history directory {}: {}", parent.display(), e);
            }
            if let Err(e) = rl.load_history(path)
                && !is_missing_history(&e)
            {
                warn!("Could not load history {}: {}", path.display(), e);
            }
        }

        if !self.quiet {
            self.print_welcome();
        }
        self.print_greeting().await;

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let text = match classify(line) {
                        Input::Command(cmd) => {
                            if self.handle_command(cmd).await {
                                break;
                            }
                            continue;
                        }
                        Input::Text(text) => text,
                    };

                    let _ = rl.add_history_entry(line);

                    for output in self.process_line(text).await {
                        println!("{}", output);
                    }
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                   quizbot                   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{}",
            ConsoleFormatter::session_line(self.mode, self.conversation.as_ref())
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /user [ID]        - Show or switch the conversation");
        println!("  /anonymous        - Send without a sender id");
        println!("  /quit, /exit, /q  - Exit");
        println!("  //text            - Send text starting with /");
        println!();
    }

    async fn print_greeting(&self) {
        if let Some(id) = &self.conversation
            && let Some(greeting) = self.use_case.greeting(id).await
        {
            println!("{}", ConsoleFormatter::format_reply(&greeting));
            println!();
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        match parse_command(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::User(None) => {
                println!(
                    "{}",
                    ConsoleFormatter::session_line(self.mode, self.conversation.as_ref())
                );
            }
            ReplCommand::User(Some(id)) => match ConversationId::try_new(id) {
                Ok(id) => {
                    self.conversation = Some(id);
                    println!(
                        "{}",
                        ConsoleFormatter::session_line(self.mode, self.conversation.as_ref())
                    );
                    self.print_greeting().await;
                }
                Err(e) => println!("{}", ConsoleFormatter::format_error(&e)),
            },
            ReplCommand::Anonymous => {
                self.conversation = None;
                println!("{}", ConsoleFormatter::format_notice("Sending without a sender id"));
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    /// Send one line to the bot and return the formatted output
    async fn process_line(&self, text: &str) -> Vec<String> {
        let message = match &self.conversation {
            Some(id) => InboundMessage::from_user(id.clone(), text),
            None => InboundMessage::anonymous(text),
        };

        match self.use_case.execute(&message).await {
            Ok(replies) => replies
                .iter()
                .map(|reply| ConsoleFormatter::format_reply(reply))
                .collect(),
            Err(e) => vec![ConsoleFormatter::format_error(&e)],
        }
    }
}
