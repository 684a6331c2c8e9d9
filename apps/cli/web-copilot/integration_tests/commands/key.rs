use web_copilot::commands::key::set_key;
use web_copilot::error::CopilotError;

use copilot_core::{CredentialSource, FileCredentialStore};

use tempfile::TempDir;

#[test]
fn given_key_when_set_then_settings_file_holds_trimmed_key() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());

    set_key(&store, "sk-proj-abc\n").unwrap();

    assert_eq!(store.get().unwrap().unwrap().as_str(), "sk-proj-abc");
}

#[test]
fn given_blank_key_when_set_then_input_error_and_nothing_stored() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());

    let result = set_key(&store, "  \n");

    match result {
        Err(CopilotError::Input { message, .. }) => assert_eq!(message, "Please enter an API key"),
        other => panic!("expected input error, got {other:?}"),
    }
    assert!(store.get().unwrap().is_none());
}
