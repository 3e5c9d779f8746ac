//! Command handlers
//!
//! One handler per supported command. Each takes the argument list and the
//! store and returns the text to show, or a classified [`CommandError`].

use crate::{
    core::contacts::{ContactStore, Insertion},
    error::CommandError,
};
use tracing::{debug, instrument};

/// Result of a single handler call
pub type HandlerResult = Result<String, CommandError>;

/// The fixed set of commands a handler exists for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    All,
    Hello,
}

impl Command {
    /// Every command in the dispatch table
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::Hello,
    ];

    /// Look up a (lower-cased) command token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == token)
    }

    /// Token that selects this command
    pub const fn name(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::Hello => "hello",
        }
    }

    /// Run the handler for this command against the store
    #[instrument(skip(store))]
    pub fn execute(self, args: &[String], store: &mut ContactStore) -> HandlerResult {
        match self {
            Command::Add => add_contact(args, store),
            Command::Change => change_contact(args, store),
            Command::Phone => show_phone(args, store),
            Command::All => show_all(args, store),
            Command::Hello => greet(args, store),
        }
    }
}

/// Split exactly `name phone` out of the argument list
fn name_and_phone<'a>(
    command: Command,
    args: &'a [String],
) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(CommandError::argument_count(command.name(), 2, args.len())),
    }
}

/// Add a new contact; an existing name is reported, not overwritten
pub fn add_contact(args: &[String], store: &mut ContactStore) -> HandlerResult {
    let (name, phone) = name_and_phone(Command::Add, args)?;

    match store.insert(name, phone) {
        Insertion::Added => {
            debug!("Added contact '{}'", name);
            Ok("Contact added.".to_string())
        }
        Insertion::AlreadyExists => Ok(format!("Contact '{name}' already exists.")),
    }
}

/// Change the phone number of an existing contact
pub fn change_contact(args: &[String], store: &mut ContactStore) -> HandlerResult {
    let (name, phone) = name_and_phone(Command::Change, args)?;

    if !store.update(name, phone) {
        return Err(CommandError::not_found(name));
    }

    debug!("Updated contact '{}'", name);
    Ok("Contact updated.".to_string())
}

/// Show the phone number of a contact. Extra arguments are ignored.
pub fn show_phone(args: &[String], store: &mut ContactStore) -> HandlerResult {
    let name = args
        .first()
        .ok_or_else(|| CommandError::argument_count(Command::Phone.name(), 1, 0))?;

    store
        .get(name)
        .map(str::to_string)
        .ok_or_else(|| CommandError::not_found(name.as_str()))
}

/// Show every saved contact, one `name: phone` per line
pub fn show_all(_args: &[String], store: &mut ContactStore) -> HandlerResult {
    if store.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    let lines: Vec<String> = store
        .iter()
        .map(|c| format!("{}: {}", c.name, c.phone))
        .collect();
    Ok(lines.join("\n"))
}

pub fn greet(_args: &[String], _store: &mut ContactStore) -> HandlerResult {
    Ok("How can I help you?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn store_with(entries: &[(&str, &str)]) -> ContactStore {
        let mut store = ContactStore::new();
        for (name, phone) in entries {
            store.insert(name, phone);
        }
        store
    }

    #[test]
    fn test_command_table_lookup() {
        assert_eq!(Command::from_token("add"), Some(Command::Add));
        assert_eq!(Command::from_token("hello"), Some(Command::Hello));
        assert_eq!(Command::from_token("remove"), None);
        assert_eq!(Command::from_token("exit"), None);
    }

    #[test]
    fn test_add_then_phone() {
        let mut store = ContactStore::new();
        assert_eq!(
            add_contact(&args(&["john", "1234567890"]), &mut store).unwrap(),
            "Contact added."
        );
        assert_eq!(
            show_phone(&args(&["john"]), &mut store).unwrap(),
            "1234567890"
        );
    }

    #[test]
    fn test_add_existing_is_not_an_error() {
        let mut store = store_with(&[("john", "111")]);
        let result = add_contact(&args(&["john", "222"]), &mut store);
        assert_eq!(result.unwrap(), "Contact 'john' already exists.");
        assert_eq!(store.get("john"), Some("111"));
    }

    #[test]
    fn test_add_wrong_arity() {
        let mut store = ContactStore::new();
        for bad in [args(&[]), args(&["john"]), args(&["john", "1", "2"])] {
            assert!(matches!(
                add_contact(&bad, &mut store),
                Err(CommandError::ArgumentCount { expected: 2, .. })
            ));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_change_existing() {
        let mut store = store_with(&[("john", "111")]);
        assert_eq!(
            change_contact(&args(&["john", "222"]), &mut store).unwrap(),
            "Contact updated."
        );
        assert_eq!(store.get("john"), Some("222"));
    }

    #[test]
    fn test_change_missing_leaves_store_untouched() {
        let mut store = store_with(&[("john", "111")]);
        let err = change_contact(&args(&["jane", "222"]), &mut store).unwrap_err();
        assert_eq!(err, CommandError::not_found("jane"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("john"), Some("111"));
    }

    #[test]
    fn test_change_wrong_arity() {
        let mut store = store_with(&[("john", "111")]);
        let err = change_contact(&args(&["john"]), &mut store).unwrap_err();
        assert_eq!(err.to_string(), "Enter the argument for the command.");
    }

    #[test]
    fn test_phone_errors() {
        let mut store = ContactStore::new();
        assert_eq!(
            show_phone(&[], &mut store).unwrap_err(),
            CommandError::argument_count("phone", 1, 0)
        );
        assert_eq!(
            show_phone(&args(&["ghost"]), &mut store)
                .unwrap_err()
                .to_string(),
            "Contact not found."
        );
    }

    #[test]
    fn test_phone_ignores_extra_args() {
        let mut store = store_with(&[("john", "111")]);
        assert_eq!(
            show_phone(&args(&["john", "extra"]), &mut store).unwrap(),
            "111"
        );
    }

    #[test]
    fn test_all_empty_and_ordered() {
        let mut store = ContactStore::new();
        assert_eq!(show_all(&[], &mut store).unwrap(), "No contacts saved.");

        store.insert("alice", "111");
        store.insert("bob", "222");
        assert_eq!(
            show_all(&[], &mut store).unwrap(),
            "alice: 111\nbob: 222"
        );
    }

    #[test]
    fn test_hello_ignores_args() {
        let mut store = ContactStore::new();
        assert_eq!(
            Command::Hello
                .execute(&args(&["there", "bot"]), &mut store)
                .unwrap(),
            "How can I help you?"
        );
    }
}
