//! Event scripts for `kanatool simulate`.
//!
//! Whitespace-separated tokens. A plain token types each of its characters
//! as a key; `:`-prefixed tokens are commands:
//!
//! | token | event |
//! |---|---|
//! | `:bs` | delete |
//! | `:space` | space |
//! | `:commit` | commit |
//! | `:clear` | clear |
//! | `:primary` / `:secondary` | select hiragana / katakana form |
//! | `:cand=N` | select candidate N (0-based) |

use kana_session::{KeyEvent, ScriptForm};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command ':{0}'")]
    UnknownCommand(String),
    #[error("invalid candidate index '{0}'")]
    InvalidIndex(String),
}

pub fn parse_script(script: &str) -> Result<Vec<KeyEvent>, ScriptError> {
    let mut events = Vec::new();
    for token in script.split_whitespace() {
        match token.strip_prefix(':') {
            Some(command) => events.push(parse_command(command)?),
            None => events.extend(token.chars().map(KeyEvent::Key)),
        }
    }
    Ok(events)
}

fn parse_command(command: &str) -> Result<KeyEvent, ScriptError> {
    let event = match command {
        "bs" => KeyEvent::Delete,
        "space" => KeyEvent::Space,
        "commit" => KeyEvent::Commit,
        "clear" => KeyEvent::Clear,
        "primary" => KeyEvent::SelectForm(ScriptForm::Primary),
        "secondary" => KeyEvent::SelectForm(ScriptForm::Secondary),
        _ => {
            let Some(index) = command.strip_prefix("cand=") else {
                return Err(ScriptError::UnknownCommand(command.to_string()));
            };
            let index = index
                .parse()
                .map_err(|_| ScriptError::InvalidIndex(index.to_string()))?;
            KeyEvent::SelectCandidate(index)
        }
    };
    Ok(event)
}
