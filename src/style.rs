use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

use crate::log;

#[derive(Error, Debug, PartialEq)]
pub enum StyleError {
    #[error("Style option '{0}' is not of the form key=value")]
    MalformedOption(String),
}

/// The user's current selection: style setting id to chosen option id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStyle {
    pub selections: BTreeMap<String, String>,
}

impl UserStyle {
    pub fn with(mut self, setting: impl Into<String>, option: impl Into<String>) -> Self {
        self.selections.insert(setting.into(), option.into());
        self
    }

    pub fn get(&self, setting: &str) -> Option<&str> {
        self.selections.get(setting).map(String::as_str)
    }

    /// Parses a `setting=option` pair as given on the command line.
    pub fn parse_selection(raw: &str) -> Result<(String, String), StyleError> {
        let Some((setting, option)) = raw.split_once('=') else {
            return Err(StyleError::MalformedOption(raw.to_string()));
        };
        let (setting, option) = (setting.trim(), option.trim());
        if setting.is_empty() {
            return Err(StyleError::MalformedOption(raw.to_string()));
        }
        Ok((setting.to_string(), option.to_string()))
    }
}

impl Display for UserStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (setting, option)) in self.selections.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{setting}: {option}")?;
        }
        write!(f, "}}")
    }
}

/// Host-owned store of the current [`UserStyle`].
pub trait StyleRepository {
    fn user_style(&self) -> UserStyle;

    /// Observer that is notified of every style published after this call.
    fn subscribe(&self) -> watch::Receiver<UserStyle>;
}

pub struct CurrentUserStyleRepository {
    tx: watch::Sender<UserStyle>,
}

impl CurrentUserStyleRepository {
    pub fn new(initial: UserStyle) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replaces the current style. Returns `false` when it was unchanged.
    pub fn publish(&self, style: UserStyle) -> bool {
        let updated = self.tx.send_if_modified(|current| {
            if *current == style {
                return false;
            }
            *current = style;
            true
        });

        if updated {
            println!("{} Published {}", log::STYLE, *self.tx.borrow());
        }
        updated
    }
}

impl Default for CurrentUserStyleRepository {
    fn default() -> Self {
        Self::new(UserStyle::default())
    }
}

impl StyleRepository for CurrentUserStyleRepository {
    fn user_style(&self) -> UserStyle {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<UserStyle> {
        self.tx.subscribe()
    }
}
