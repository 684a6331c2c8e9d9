use crate::cli::{Cli, Command};

use clap::Parser;

#[test]
fn given_ask_arguments_when_parsed_then_question_words_collected() {
    let cli = Cli::try_parse_from([
        "web-copilot",
        "ask",
        "--url",
        "https://example.com",
        "--title",
        "Example",
        "What",
        "is",
        "this?",
    ])
    .unwrap();

    match cli.command {
        Command::Ask {
            url,
            title,
            page,
            question,
            ..
        } => {
            assert_eq!(url, "https://example.com");
            assert_eq!(title, "Example");
            assert_eq!(page, "-");
            assert_eq!(question.join(" "), "What is this?");
        }
        other => panic!("expected ask, got {other:?}"),
    }
}

#[test]
fn given_ask_without_question_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["web-copilot", "ask", "--url", "https://example.com"]);

    assert!(result.is_err());
}

#[test]
fn given_verbose_and_quiet_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["web-copilot", "-v", "-q", "config"]);

    assert!(result.is_err());
}

#[test]
fn given_set_key_without_value_when_parsed_then_key_is_none() {
    let cli = Cli::try_parse_from(["web-copilot", "set-key"]).unwrap();

    assert!(matches!(cli.command, Command::SetKey { key: None }));
}
