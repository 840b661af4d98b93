// Tests for the show-config and completions commands

use crate::common::{create_shared_services, TestCorpus};
use clap_complete::Shell;
use uxlex::cli::commands::completions::write_completions;
use uxlex::cli::commands::{config, ConfigArgs};
use uxlex::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_human() {
    let corpus = TestCorpus::design();
    let services = create_shared_services(corpus.path());

    let result = config::execute(ConfigArgs { all: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_config_all_json() {
    let corpus = TestCorpus::design();
    let services = create_shared_services(corpus.path());

    let result = config::execute(ConfigArgs { all: true }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[test]
fn test_completions_mention_subcommands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);

    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("uxlex"));
    assert!(script.contains("search-stack"));
    assert!(script.contains("detect-stack"));
}
