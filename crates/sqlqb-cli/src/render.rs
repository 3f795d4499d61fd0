use crate::cli::RenderArgs;
use anyhow::Context;
use sqlqb::StatementFile;
use tracing::debug;

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read statement file {}", args.file.display()))?;

    let file = StatementFile::from_toml_str(&raw)
        .with_context(|| format!("failed to parse statement file {}", args.file.display()))?;

    let rendered = render_file(&file, &args)?;
    debug!(count = rendered.len(), file = %args.file.display(), "rendered statements");

    if !rendered.is_empty() {
        println!("{};", rendered.join(";\n"));
    }
    Ok(())
}

/// Render the selected statements of a decoded file, in file order.
pub fn render_file(file: &StatementFile, args: &RenderArgs) -> anyhow::Result<Vec<String>> {
    let selected: Vec<_> = match &args.name {
        Some(name) => {
            let Some(def) = file.find(name) else {
                anyhow::bail!("no statement named '{name}'");
            };
            vec![def]
        }
        None => file.statements.iter().collect(),
    };

    let mut out = Vec::with_capacity(selected.len());
    for def in selected {
        let built = if args.pretty {
            let mut forced = def.clone();
            forced.pretty = Some(true);
            forced.to_builder(true)
        } else {
            def.to_builder(file.pretty)
        };
        let qb = built.with_context(|| format!("invalid statement '{}'", def.label()))?;

        out.push(qb.try_build()?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const FILE: &str = r#"
[[statement]]
name = "users"
kind = "select"
tables = ["users"]
fields = ["id"]
pretty = false

[[statement]]
name = "purge"
kind = "delete"
tables = ["sessions"]

[[statement.where]]
lhs = "expired"
op = "="
rhs = true
"#;

    fn args(pretty: bool, name: Option<&str>) -> RenderArgs {
        RenderArgs {
            file: PathBuf::from("unused.toml"),
            pretty,
            name: name.map(|s| s.to_string()),
        }
    }

    #[test]
    fn renders_all_in_order() {
        let file = StatementFile::from_toml_str(FILE).unwrap();
        let out = render_file(&file, &args(false, None)).unwrap();
        assert_eq!(
            out,
            vec![
                "SELECT id  FROM users ".to_string(),
                "DELETE FROM sessions WHERE  expired = true ".to_string(),
            ]
        );
    }

    #[test]
    fn renders_by_name() {
        let file = StatementFile::from_toml_str(FILE).unwrap();
        let out = render_file(&file, &args(false, Some("purge"))).unwrap();
        assert_eq!(out, vec!["DELETE FROM sessions WHERE  expired = true ".to_string()]);
    }

    #[test]
    fn pretty_flag_overrides_statement() {
        let file = StatementFile::from_toml_str(FILE).unwrap();
        let out = render_file(&file, &args(true, Some("users"))).unwrap();
        assert_eq!(out, vec!["SELECT id\n  FROM users\n ".to_string()]);
    }

    #[test]
    fn unknown_name_fails() {
        let file = StatementFile::from_toml_str(FILE).unwrap();
        let err = render_file(&file, &args(false, Some("nope"))).unwrap_err();
        assert!(err.to_string().contains("no statement named 'nope'"));
    }

    #[test]
    fn invalid_statement_has_context() {
        let file = StatementFile::from_toml_str(
            "[[statement]]\nname = \"bad\"\nkind = \"upsert\"\ntables = [\"t\"]\n",
        )
        .unwrap();
        let err = render_file(&file, &args(false, None)).unwrap_err();
        assert_eq!(err.to_string(), "invalid statement 'bad'");
        assert!(format!("{err:#}").contains("upsert"));
    }
}
