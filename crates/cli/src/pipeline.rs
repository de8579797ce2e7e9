//! Pipeline for lowering syntax tree files.
//!
//! Every input is read and decoded first; a file that cannot be read or
//! decoded stops the run. The decoded trees are then lowered in parallel and
//! rendered in input order. Lowering and printing errors are reported per
//! file with their source position, and nothing is written if any file
//! failed.

use crate::cli::{Cli, Emit};
use gopp_lowering::{lower_batch, print_tree, LowerConfig, LowerError, SourceFile, SyntaxTree};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is not a valid syntax tree: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode syntax tree: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid config file `{}`: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Lower(#[from] LowerError),

    #[error("--output takes a single input, got {0}")]
    OutputNeedsSingleInput(usize),

    #[error("{failed} of {total} input(s) failed to lower")]
    Failed { failed: usize, total: usize },
}

/// Lower every input named on the command line and write the result.
pub fn run(cli: &Cli) -> PipelineResult<()> {
    if cli.output.is_some() && cli.inputs.len() > 1 {
        return Err(CliError::OutputNeedsSingleInput(cli.inputs.len()));
    }

    let config = load_config(cli.config.as_deref())?;
    config.validate()?;

    let mut trees = cli
        .inputs
        .iter()
        .map(|path| read_tree(path))
        .collect::<PipelineResult<Vec<_>>>()?;

    let rendered = lower_and_render(&mut trees, &config, cli.emit)?;
    write_output(cli.output.as_deref(), &rendered)
}

/// Lower `trees` and render each one, concatenated in input order.
pub fn lower_and_render(
    trees: &mut [SyntaxTree],
    config: &LowerConfig,
    emit: Emit,
) -> PipelineResult<String> {
    let results = lower_batch(trees, config);

    let mut rendered = String::new();
    let mut failed = 0;
    for (tree, result) in trees.iter().zip(results) {
        let outcome = result
            .map_err(CliError::from)
            .and_then(|stats| {
                debug!(
                    file = %tree.source.name,
                    literals = stats.literals,
                    "rendering lowered tree"
                );
                render(tree, emit)
            });
        match outcome {
            Ok(text) => rendered.push_str(&text),
            Err(CliError::Lower(error)) => {
                report_lowering_error(&error, &tree.source);
                failed += 1;
            }
            Err(other) => return Err(other),
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: trees.len(),
        });
    }
    info!(files = trees.len(), "lowered all inputs");
    Ok(rendered)
}

/// Load the lowering configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> PipelineResult<LowerConfig> {
    let Some(path) = path else {
        return Ok(LowerConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| CliError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode one JSON syntax tree.
pub fn read_tree(path: &Path) -> PipelineResult<SyntaxTree> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "decoded syntax tree");
    Ok(tree)
}

fn render(tree: &SyntaxTree, emit: Emit) -> PipelineResult<String> {
    match emit {
        Emit::Go => Ok(print_tree(tree)?),
        Emit::Json => {
            let mut json = serde_json::to_string_pretty(tree).map_err(CliError::Encode)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> PipelineResult<()> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|source| CliError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

/// Print a lowering error with its resolved source position.
fn report_lowering_error(error: &LowerError, source: &SourceFile) {
    eprintln!("{}: {}", "error".bold().red(), error.located(source));
}

#[cfg(test)]
mod tests {
    use super::*;
    use gopp_lowering::helpers::*;
    use tempfile::TempDir;

    fn greeting_tree() -> SyntaxTree {
        tree(vec![var_decl(
            "s",
            vec![interp(vec![text("hi "), embed(ident("name"))])],
        )])
    }

    fn write_json(dir: &TempDir, name: &str, tree: &SyntaxTree) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(tree).unwrap()).unwrap();
        path
    }

    fn cli(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Cli {
        Cli {
            inputs,
            output,
            emit: Emit::Go,
            config: None,
            verbose: 0,
        }
    }

    #[test]
    fn test_run_writes_go_source() {
        let dir = TempDir::new().unwrap();
        let input = write_json(&dir, "main.json", &greeting_tree());
        let output = dir.path().join("main.go");

        run(&cli(vec![input], Some(output.clone()))).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "package main\n\nimport \"fmt\"\n\nvar s = fmt.Sprintf(\"hi %v\", name)\n"
        );
    }

    #[test]
    fn test_run_emits_lowered_json() {
        let dir = TempDir::new().unwrap();
        let input = write_json(&dir, "main.json", &greeting_tree());
        let output = dir.path().join("lowered.json");
        let mut options = cli(vec![input], Some(output.clone()));
        options.emit = Emit::Json;

        run(&options).unwrap();

        let lowered: SyntaxTree =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert!(lowered.imports.contains("fmt"));
    }

    #[test]
    fn test_config_file_changes_target() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("gopp.toml");
        fs::write(&config_path, "default_verb = \"s\"\n").unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        assert_eq!(config.default_verb, "s");
        assert_eq!(config.format_package, "fmt");

        let mut trees = vec![greeting_tree()];
        let rendered = lower_and_render(&mut trees, &config, Emit::Go).unwrap();
        assert!(rendered.contains("fmt.Sprintf(\"hi %s\", name)"));
    }

    #[test]
    fn test_bad_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("gopp.toml");
        fs::write(&config_path, "default_verb = [").unwrap();
        assert!(matches!(
            load_config(Some(&config_path)),
            Err(CliError::Toml { .. })
        ));
    }

    #[test]
    fn test_invalid_json_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"package\":").unwrap();
        assert!(matches!(read_tree(&path), Err(CliError::Json { .. })));
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            run(&cli(vec![missing], None)),
            Err(CliError::Io { .. })
        ));
    }

    #[test]
    fn test_output_requires_single_input() {
        let options = cli(
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            Some(PathBuf::from("out.go")),
        );
        assert!(matches!(
            run(&options),
            Err(CliError::OutputNeedsSingleInput(2))
        ));
    }

    #[test]
    fn test_failed_tree_is_counted() {
        let mut trees = vec![
            greeting_tree(),
            tree(vec![var_decl("s", vec![bad_expr()])]),
        ];
        let error = lower_and_render(&mut trees, &LowerConfig::default(), Emit::Go).unwrap_err();
        assert!(matches!(
            error,
            CliError::Failed {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_batch_output_keeps_input_order() {
        let mut trees = vec![
            tree(vec![var_decl("first", vec![int(1)])]),
            tree(vec![var_decl("second", vec![int(2)])]),
        ];
        let rendered = lower_and_render(&mut trees, &LowerConfig::default(), Emit::Go).unwrap();
        let first = rendered.find("var first").unwrap();
        let second = rendered.find("var second").unwrap();
        assert!(first < second);
    }
}
