//! Static tables describing the turtle configuration language
//!
//! A [`Catalog`] is plain data: commands with their arity, keywords with their
//! snippet bodies, the predeclared configuration variables and the reserved
//! Scheme names. The engine never mutates it; callers either use the built-in
//! [`Catalog::turtle`] tables or load a replacement from JSON.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::builtins::BUILTIN_IDENTIFIERS;
use crate::error::Result;

/// Where command documentation points to
pub const COMMANDS_URL: &str =
    "https://github.com/EmilyGraceSeville7cf/tinyscheme-turtle?tab=readme-ov-file#configuration-script-commands";

/// Where variable documentation points to
pub const VARIABLES_URL: &str =
    "https://github.com/EmilyGraceSeville7cf/tinyscheme-turtle?tab=readme-ov-file#usage";

/// Where keyword and user-defined identifier documentation points to
pub const SCHEME_URL: &str =
    "https://conservatory.scheme.org/schemers/Documents/Standards/R5RS/HTML/";

/// A turtle command with a fixed arity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    /// Argument names in call order; the arity is their count
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    /// The command that undoes this one, e.g. `turn-right` for `turn-left`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposite: Option<String>,
}

impl Command {
    pub fn new(name: &str, description: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            shortcut: None,
            opposite: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    pub fn with_opposite(mut self, opposite: &str) -> Self {
        self.opposite = Some(opposite.to_string());
        self
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// A structural keyword such as `if` or `define`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,
    pub description: String,
    /// Snippet inserted after the keyword name
    pub body: String,
    /// Annotation keywords like `@author` live in comments and are not wrapped
    #[serde(default = "default_true")]
    pub wraps_in_parens: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl Keyword {
    pub fn new(name: &str, description: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            body: body.to_string(),
            wraps_in_parens: true,
            shortcut: None,
        }
    }

    /// An annotation used inside `;` comments
    pub fn annotation(name: &str, description: &str, body: &str) -> Self {
        Self {
            wraps_in_parens: false,
            ..Self::new(name, description, body)
        }
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }
}

fn default_true() -> bool {
    true
}

/// A predeclared top-level configuration variable
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl Variable {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            shortcut: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }
}

/// Everything the engine knows about the language before reading a document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub commands: Vec<Command>,
    pub keywords: Vec<Keyword>,
    pub variables: Vec<Variable>,
    #[serde(default = "default_builtins")]
    pub builtins: Vec<String>,
}

fn default_builtins() -> Vec<String> {
    BUILTIN_IDENTIFIERS.iter().map(|b| b.to_string()).collect()
}

/// The built-in turtle catalog, built once on first use
pub static TURTLE_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::turtle);

impl Catalog {
    /// The tables shipped with tinyscheme-turtle
    pub fn turtle() -> Self {
        Self {
            commands: build_commands(),
            keywords: build_keywords(),
            variables: build_variables(),
            builtins: default_builtins(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// True when `name` is a command, keyword or variable name.
    ///
    /// Built-in identifiers are deliberately not included: a user may shadow
    /// a Scheme procedure, but not a turtle command.
    pub fn contains_name(&self, name: &str) -> bool {
        self.commands.iter().any(|c| c.name == name)
            || self.keywords.iter().any(|k| k.name == name)
            || self.variables.iter().any(|v| v.name == name)
    }

    /// Every name the diagnostic engine treats as known before reading a document
    pub fn known_names(&self) -> impl Iterator<Item = &str> {
        self.builtins
            .iter()
            .map(String::as_str)
            .chain(self.commands.iter().map(|c| c.name.as_str()))
            .chain(self.keywords.iter().map(|k| k.name.as_str()))
            .chain(self.variables.iter().map(|v| v.name.as_str()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::turtle()
    }
}

fn build_commands() -> Vec<Command> {
    vec![
        // === MOVEMENT ===
        Command::new("move-on", "Move the turtle **on** a specific vector", &["x", "y"]),
        Command::new("move-to", "Move the turtle **to** a specific point", &["x", "y"]),
        Command::new(
            "move-forward",
            "Move the turtle **forward** for a specific amount of units",
            &["units"],
        )
        .with_shortcut("f")
        .with_opposite("move-backward"),
        Command::new(
            "move-backward",
            "Move the turtle **backward** for a specific amount of units",
            &["units"],
        )
        .with_shortcut("b")
        .with_opposite("move-forward"),
        Command::new("move-to-center", "Move the turtle to the **center**", &[]),
        Command::new("move-to-top-left", "Move the turtle to the **top left corner**", &[]),
        Command::new("move-to-top-middle", "Move the turtle to the **top middle side**", &[]),
        Command::new("move-to-top-right", "Move the turtle to the **top right corner**", &[]),
        Command::new("move-to-middle-right", "Move the turtle to the **middle right side**", &[]),
        Command::new("move-to-bottom-right", "Move the turtle to the **bottom right corner**", &[]),
        Command::new("move-to-bottom-middle", "Move the turtle to the **bottom middle side**", &[]),
        Command::new("move-to-bottom-left", "Move the turtle to the **bottom left corner**", &[]),
        Command::new("move-to-middle-left", "Move the turtle to the **middle left side**", &[]),
        // === ROTATION ===
        Command::new(
            "turn-left",
            "Rotate the turtle **left** at a specific amount of degrees",
            &["angle"],
        )
        .with_shortcut("l")
        .with_opposite("turn-right"),
        Command::new(
            "turn-right",
            "Rotate the turtle **right** at a specific amount of degrees",
            &["angle"],
        )
        .with_shortcut("r")
        .with_opposite("turn-left"),
        // === PEN ===
        Command::new("up", "Make turtle **not draw** on movements", &[]).with_opposite("down"),
        Command::new("down", "Make turtle **draw** on movements", &[]).with_opposite("up"),
        // === COLORS ===
        Command::new("black", "Change the turtle drawing color to **black**", &[]),
        Command::new("red", "Change the turtle drawing color to **red**", &[]),
        Command::new("green", "Change the turtle drawing color to **green**", &[]),
        Command::new("yellow", "Change the turtle drawing color to **yellow**", &[]),
        Command::new("blue", "Change the turtle drawing color to **blue**", &[]),
        Command::new("magenta", "Change the turtle drawing color to **magenta**", &[]),
        Command::new("cyan", "Change the turtle drawing color to **cyan**", &[]),
        Command::new("gray", "Change the turtle drawing color to **gray**", &[]),
        Command::new("random-color", "Change the turtle drawing color to a **random one**", &[]),
        Command::new(
            "rgb",
            "Change the turtle drawing color to a **specific one**",
            &["red", "green", "blue"],
        ),
        Command::new(
            "rgb-random-color",
            "Change the turtle drawing color to a **random one**",
            &[],
        ),
    ]
}

fn build_keywords() -> Vec<Keyword> {
    vec![
        Keyword::new(
            "if",
            "**Check** whether a specific condition is true",
            "${1:condition} ${2:then} ${3:else}",
        ),
        Keyword::new(
            "define",
            "**Define** a variable with a specific value",
            "${1:variable} ${2:value}",
        )
        .with_shortcut("d"),
        Keyword::new("set!", "**Set** a specific value to a variable", "${1:variable} ${2:value}"),
        Keyword::new(
            "let*",
            "**Define** variables with specific values",
            "((${1:variable} ${2:value})) ${3:commands}",
        ),
        Keyword::new("begin", "**Group** specific commands", "${1:commands}"),
        Keyword::annotation("@author", "Define a code **author**", "- ${1:author}"),
        Keyword::annotation("@description", "Define a code **description**", "- ${1:description}"),
        Keyword::annotation("@year", "Define a code **year**", "- ${1:year}"),
        Keyword::annotation(
            "@signature",
            "Define a specific function **signature**",
            "- ${1:function} ${2:types}",
        ),
    ]
}

fn build_variables() -> Vec<Variable> {
    vec![
        Variable::new("turtle-configuration", "A **drawing** code").with_shortcut("c"),
        Variable::new("turtle-theme", "A **theme** code"),
    ]
}
