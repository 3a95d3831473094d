use clap::Parser;
use dynaform::cli::Cli;
use dynaform::config::Settings;
use dynaform::domain::FieldType;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_forms_from_json_and_yaml() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::create_dir_all(root.join("config/forms"))?;

    let dynaform_toml = r#"
[server]
host = "127.0.0.1"
port = 4000
"#;
    fs::write(root.join("dynaform.toml"), dynaform_toml)?;

    let farm_yaml = r#"
name: farm
title: Create a Farm
submitLabel: Create Farm
fields:
  - label: First Name
    fieldType: text
    fieldName: firstName
  - label: Crops
    fieldType: checkbox
    fieldName: crops
    options: [Wheat, Corn, Rice, Barley]
"#;
    fs::write(root.join("config/forms/farm.yaml"), farm_yaml)?;

    let contact_json = r#"
{
    "name": "contact",
    "title": "Contact",
    "fields": [
        { "label": "Phone Number", "fieldType": "tel", "fieldName": "phoneNumber" }
    ]
}
"#;
    fs::write(root.join("config/forms/contact.json"), contact_json)?;

    // Files with other extensions are ignored
    fs::write(root.join("config/forms/README.md"), "# forms")?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.server.port, 4000);
    assert_eq!(settings.forms.len(), 2);

    let farm = settings.forms.iter().find(|f| f.name == "farm").unwrap();
    assert_eq!(farm.submit_label, "Create Farm");
    assert_eq!(farm.fields[1].field_type, FieldType::Checkbox);
    assert_eq!(farm.fields[1].options.len(), 4);

    let contact = settings.forms.iter().find(|f| f.name == "contact").unwrap();
    assert_eq!(contact.submit_label, "Submit");

    Ok(())
}

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_root(temp_dir.path().to_str().unwrap())?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert!(settings.forms.is_empty());
    Ok(())
}

#[test]
fn test_unknown_field_type_names_the_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("config/forms"))?;

    let broken = r#"
name: notes
title: Notes
fields:
  - label: Notes
    fieldType: textarea
    fieldName: notes
"#;
    fs::write(root.join("config/forms/notes.yaml"), broken)?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("notes.yaml"));
    Ok(())
}

#[test]
fn test_duplicate_field_names_fail_validation() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("config/forms"))?;

    let duplicated = r#"
{
    "name": "signup",
    "title": "Sign Up",
    "fields": [
        { "label": "Email", "fieldType": "email", "fieldName": "email" },
        { "label": "Confirm Email", "fieldType": "email", "fieldName": "email" }
    ]
}
"#;
    fs::write(root.join("config/forms/signup.json"), duplicated)?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));
    Ok(())
}

fn write_form(root: &std::path::Path, file: &str, name: &str) -> anyhow::Result<()> {
    let body = format!(
        "name: {name}\ntitle: {name}\nfields:\n  - label: Notes\n    fieldType: text\n    fieldName: notes\n"
    );
    fs::write(root.join("config/forms").join(file), body)?;
    Ok(())
}

#[test]
fn test_forms_load_in_sorted_path_order() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("config/forms"))?;

    write_form(root, "c_survey.yml", "survey")?;
    write_form(root, "a_farm.yaml", "farm")?;
    write_form(root, "b_contact.yaml", "contact")?;

    let settings = Settings::from_root(root.to_str().unwrap())?;
    let names: Vec<&str> = settings.forms.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["farm", "contact", "survey"]);
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("config/forms"))?;

    let config_path = root.join("dynaform.toml");
    fs::write(
        &config_path,
        "[server]\nhost = \"0.0.0.0\"\nport = 4000\n",
    )?;
    write_form(root, "b.yaml", "b")?;
    write_form(root, "a.yaml", "a")?;

    let cli = Cli::parse_from([
        "dynaform",
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "5000",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    let names: Vec<&str> = settings.forms.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_cli_with_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("absent.toml");

    let cli = Cli::parse_from(["dynaform", "--config", config_path.to_str().unwrap()]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert!(settings.forms.is_empty());
    Ok(())
}

#[test]
fn test_empty_names_fail_validation() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("config/forms"))?;

    let unnamed = r#"
{
    "name": "",
    "title": "Untitled",
    "fields": [
        { "label": "Notes", "fieldType": "text", "fieldName": "" }
    ]
}
"#;
    fs::write(root.join("config/forms/unnamed.json"), unnamed)?;

    let message = Settings::from_root(root.to_str().unwrap())
        .unwrap_err()
        .to_string();
    assert!(message.contains("forms[0].name"));
    assert!(message.contains("forms[0].fields[0].fieldName"));
    Ok(())
}
