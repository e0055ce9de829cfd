#![cfg(feature = "mcp")]

mod common;

use agent_skills_mcp::config::SkillOptions;
use agent_skills_mcp::mcp::SkillServerBuilder;
use common::{write_file, write_sample_tree};
use rmcp::model::{PromptMessage, PromptMessageRole, ResourceContents};
use rmcp::ServerHandler;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn a_server_built_from_a_skill_tree_lists_everything_in_order() {
    let temp = tempdir().expect("temp dir should be created");
    write_sample_tree(temp.path());

    let server = SkillServerBuilder::new("orchard-skills", "0.1.0")
        .with_skills(&SkillOptions::default().with_path(temp.path()), temp.path())
        .expect("skills should register")
        .build();

    let prompts: Vec<_> = server
        .prompt_definitions()
        .into_iter()
        .map(|prompt| prompt.name)
        .collect();
    assert_eq!(prompts, vec!["greet", "orchardcore-content"]);

    let resources: Vec<_> = server
        .resource_definitions()
        .into_iter()
        .map(|resource| resource.raw.uri)
        .collect();
    assert_eq!(
        resources,
        vec![
            "skill://logo.png",
            "skill://orchardcore-content/references/fields.md"
        ]
    );

    assert_eq!(server.get_info().server_info.name, "orchard-skills");
}

#[test]
fn prompts_render_with_client_arguments() {
    let temp = tempdir().expect("temp dir should be created");
    write_file(temp.path(), "greet.prompt.md", "Hello {{name}}");

    let server = SkillServerBuilder::default()
        .with_skills(&SkillOptions::default().with_path(temp.path()), temp.path())
        .expect("skills should register")
        .build();

    let arguments = json!({ "name": "Ada" });
    let result = server
        .render_prompt("greet", arguments.as_object())
        .expect("prompt should render");

    assert_eq!(
        result.messages,
        vec![PromptMessage::new_text(PromptMessageRole::User, "Hello Ada")]
    );
}

#[test]
fn markdown_references_are_served_as_text() {
    let temp = tempdir().expect("temp dir should be created");
    write_sample_tree(temp.path());

    let server = SkillServerBuilder::default()
        .with_skills(&SkillOptions::default().with_path(temp.path()), temp.path())
        .expect("skills should register")
        .build();

    let result = server
        .read("skill://orchardcore-content/references/fields.md")
        .expect("reference should be readable");

    match &result.contents[0] {
        ResourceContents::TextResourceContents { text, .. } => assert_eq!(text, "# Fields\n"),
        other => panic!("expected text contents, got {other:?}"),
    }
}

#[test]
fn several_roots_append_to_one_server() {
    let first = tempdir().expect("temp dir should be created");
    let second = tempdir().expect("temp dir should be created");
    write_file(first.path(), "one.prompt.md", "one");
    write_file(second.path(), "two.prompt.md", "two");

    let server = SkillServerBuilder::default()
        .with_skills(&SkillOptions::default().with_path(first.path()), first.path())
        .expect("first root should register")
        .with_skills(
            &SkillOptions::default().with_path(second.path()),
            second.path(),
        )
        .expect("second root should register")
        .build();

    let ids: Vec<_> = server.prompts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["one", "two"]);
}

#[test]
fn an_empty_root_builds_an_empty_server() {
    let temp = tempdir().expect("temp dir should be created");

    let server = SkillServerBuilder::default()
        .with_skills(&SkillOptions::default().with_path(temp.path()), temp.path())
        .expect("empty root should not fail")
        .build();

    assert!(server.prompts().is_empty());
    assert!(server.resources().is_empty());
}
