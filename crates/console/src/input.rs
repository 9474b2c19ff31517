/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the draft to the line and submit it.
    Search(String),
    ToggleFollow,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type a username and press enter to search.
  :f, :follow   toggle follow on the searched profile
  :h, :help     show this help
  :q, :quit     exit";

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":q" | ":quit" => Command::Quit,
            ":f" | ":follow" => Command::ToggleFollow,
            ":h" | ":help" => Command::Help,
            _ => Command::Search(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
