use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const SCENARIO: &str = r#"
export function Greeting({ dynamicVar }) {
    T("hello");
    T("hello");
    T("world");
    fmt.Println(x);
    T(dynamicVar);
}
"#;

#[test]
fn test_extract_writes_catalog() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", SCENARIO)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Extracted 2 keys from 1 file -> ./i18n.json\n"
    );

    assert_snapshot!(test.read_file("i18n.json")?.trim_end(), @r#"
    [
      {
        "id": "hello",
        "translation": ""
      },
      {
        "id": "world",
        "translation": ""
      }
    ]
    "#);

    Ok(())
}

#[test]
fn test_extract_compact_to_stdout() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", SCENARIO)?;

    let output = test
        .extract_command()
        .args(["--stdout", "--compact"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "[{\"id\":\"hello\",\"translation\":\"\"},{\"id\":\"world\",\"translation\":\"\"}]\n"
    );
    assert!(!test.root().join("i18n.json").exists());

    Ok(())
}

#[test]
fn test_extract_custom_func_name() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"T("x"); Tr("y");"#)?;

    let output = test
        .extract_command()
        .args(["--func-name", "Tr", "--stdout", "--compact"])
        .output()?;
    assert_eq!(stdout(&output), "[{\"id\":\"y\",\"translation\":\"\"}]\n");

    Ok(())
}

#[test]
fn test_extract_func_name_from_config() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"T("x"); i18n.tr("y");"#)?;
    test.write_file(".msgscanrc.json", r#"{ "funcName": "tr" }"#)?;

    let output = test
        .extract_command()
        .args(["--stdout", "--compact"])
        .output()?;
    assert_eq!(stdout(&output), "[{\"id\":\"y\",\"translation\":\"\"}]\n");

    Ok(())
}

#[test]
fn test_extract_preserves_input_order_across_files() -> Result<()> {
    let test = CliTest::with_file("b.ts", r#"T("from-b"); T("shared");"#)?;
    test.write_file("a.ts", r#"T("shared"); T("from-a");"#)?;

    let output = test
        .extract_command()
        .args(["b.ts", "a.ts", "--stdout", "--compact"])
        .output()?;
    assert_eq!(
        stdout(&output),
        "[{\"id\":\"from-b\",\"translation\":\"\"},{\"id\":\"shared\",\"translation\":\"\"},{\"id\":\"from-a\",\"translation\":\"\"}]\n"
    );

    Ok(())
}

#[test]
fn test_extract_directory_order_is_sorted() -> Result<()> {
    let test = CliTest::with_file("src/b.ts", r#"T("b");"#)?;
    test.write_file("src/a.ts", r#"T("a");"#)?;
    test.write_file("src/nested/c.tsx", r#"T("c");"#)?;

    let output = test
        .extract_command()
        .args(["src", "--stdout", "--compact"])
        .output()?;
    assert_eq!(
        stdout(&output),
        "[{\"id\":\"a\",\"translation\":\"\"},{\"id\":\"b\",\"translation\":\"\"},{\"id\":\"c\",\"translation\":\"\"}]\n"
    );

    Ok(())
}

#[test]
fn test_extract_skips_node_modules_and_test_files() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"T("app");"#)?;
    test.write_file("node_modules/lib/index.js", r#"T("vendored");"#)?;
    test.write_file("src/app.test.ts", r#"T("in-test");"#)?;

    let output = test
        .extract_command()
        .args(["--stdout", "--compact"])
        .output()?;
    assert_eq!(stdout(&output), "[{\"id\":\"app\",\"translation\":\"\"}]\n");

    Ok(())
}

#[test]
fn test_extract_parse_error_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", r#"T("fine");"#)?;
    test.write_file("src/b.ts", "function broken() {\n  T(\"x\");\n")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error: Failed to parse "));
    assert!(stderr(&output).contains("b.ts"));
    assert!(!test.root().join("i18n.json").exists());

    Ok(())
}

#[test]
fn test_extract_output_path() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"T("k");"#)?;

    let output = test
        .extract_command()
        .args(["-o", "locales/en.json", "--compact"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("locales/en.json")?,
        r#"[{"id":"k","translation":""}]"#
    );

    Ok(())
}

#[test]
fn test_extract_output_path_is_relative_to_project_path() -> Result<()> {
    let test = CliTest::with_file("web/src/app.ts", r#"T("k");"#)?;

    let output = test
        .extract_command()
        .args(["--path", "web", "-o", "locales/en.json", "--compact"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("web/locales/en.json")?,
        r#"[{"id":"k","translation":""}]"#
    );
    assert!(!test.root().join("locales").exists());

    Ok(())
}

#[test]
fn test_extract_verbose_reports_missing_inputs() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"T("k");"#)?;

    let output = test
        .extract_command()
        .args(["src", "nope", "-v", "--stdout", "--compact"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Input path does not exist: nope"));
    assert!(stderr(&output).contains("warning: 1 input path(s) skipped"));
    assert_eq!(stdout(&output), "[{\"id\":\"k\",\"translation\":\"\"}]\n");

    Ok(())
}

#[test]
fn test_extract_sloppy_mode_script() -> Result<()> {
    let test = CliTest::with_file(
        "lib/legacy.cjs",
        "var await = 1;\nwith (obj) { T(\"legacy\"); }\n",
    )?;

    let output = test
        .extract_command()
        .args(["--stdout", "--compact"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "[{\"id\":\"legacy\",\"translation\":\"\"}]\n"
    );

    Ok(())
}

#[test]
fn test_extract_strict_reports_non_literal_keys() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "T(\"ok\");\nT(dynamicVar);\n")?;

    let output = test.extract_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "error: translation key is not a string literal\n  \
         --> ./src/app.ts:2:1\n  \
         |\n\
         2 | T(dynamicVar);\n  \
         | ^\n\
         \n\
         error: 1 translation call skipped (key is not a string literal)\n"
    );
    // The catalog is still written.
    assert!(test.read_file("i18n.json")?.contains("\"ok\""));

    Ok(())
}

#[test]
fn test_extract_without_strict_is_silent_about_non_literal_keys() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "T(dynamicVar);\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert_eq!(stderr(&output), "");
    assert_eq!(test.read_file("i18n.json")?, "[]\n");

    Ok(())
}

#[test]
fn test_extract_no_files_warns() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().args(["--stdout"]).output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("no source files found"));
    assert_eq!(stdout(&output), "[]\n");

    Ok(())
}

#[test]
fn test_extract_debug_dumps_tree_to_stderr() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"T("a");"#)?;

    let output = test
        .extract_command()
        .args(["--debug", "--stdout", "--compact"])
        .output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("CallExpr"));
    assert_eq!(stdout(&output), "[{\"id\":\"a\",\"translation\":\"\"}]\n");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".msgscanrc.json", r#"{ "ignores": ["[bad"] }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));

    Ok(())
}
