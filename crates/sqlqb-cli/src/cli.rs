use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub file: PathBuf,
    pub pretty: bool,
    pub name: Option<String>,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help(HelpTopic::Root)),
        "render" => parse_render(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut file: Option<PathBuf> = None;
    let mut pretty = false;
    let mut name: Option<String> = None;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Render)),
            "--pretty" => pretty = true,
            "--name" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--name requires a value");
                };
                name = Some(v.to_string());
            }
            _ if token.starts_with("--name=") => {
                name = Some(token.trim_start_matches("--name=").to_string());
            }
            _ if token.starts_with('-') => anyhow::bail!("unknown argument: {token}"),
            _ if file.is_none() => file = Some(PathBuf::from(token)),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }

    let Some(file) = file else {
        anyhow::bail!("render requires a statement file");
    };

    Ok(Command::Render(RenderArgs { file, pretty, name }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqlqb - render SQL statements described in TOML files

USAGE:
  sqlqb <COMMAND> [OPTIONS]

COMMANDS:
  render        Render the statements of a file
  help          Print this help

Run `sqlqb <command> --help` for more.
Set RUST_LOG=sqlqb=debug to log every rendered statement."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  sqlqb render <FILE> [OPTIONS]

OPTIONS:
  --pretty              Force pretty mode for every statement
  --name <NAME>         Render only the statement with this name
  -h, --help            Print help"
            );
        }
    }
}
