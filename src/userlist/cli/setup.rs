use clap::Parser;
use std::ffi::OsString;
use userlist::api::Arguments;

/// Long flags that may be written with a single dash (`-fileName users.json`).
const LONG_FLAGS: &[&str] = &[
    "operation",
    "fileName",
    "id",
    "item",
    "verbose",
    "help",
    "version",
];

/// Long flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["operation", "fileName", "id", "item"];

/// Returns the version string, including the git hash for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "userlist", bin_name = "userlist", version = get_version())]
#[command(about = "Keep a list of users in a JSON file", long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Operation to perform: add, list, findById or remove
    #[arg(
        long = "operation",
        value_name = "NAME",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub operation: String,

    /// Path of the JSON file holding the users
    #[arg(
        long = "fileName",
        value_name = "PATH",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub file_name: String,

    /// User id for findById and remove
    #[arg(
        long = "id",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub id: String,

    /// User as a JSON object for add, e.g. {"id":"1","email":"a@x.com","age":30}
    #[arg(
        long = "item",
        value_name = "JSON",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub item: String,

    /// Log debug output to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn arguments(&self) -> Arguments {
        Arguments::new()
            .operation(self.operation.as_str())
            .file_name(self.file_name.as_str())
            .id(self.id.as_str())
            .item(self.item.as_str())
    }
}

/// Rewrite `-name` and `-name=value` to `--name` / `--name=value` for the
/// known long flags. Values and anything after `--` pass through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (position, arg) in args.into_iter().map(Into::into).enumerate() {
        if position == 0 || passthrough || expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let body = text.strip_prefix("--").or_else(|| text.strip_prefix('-'));
        let Some(body) = body else {
            normalized.push(arg);
            continue;
        };
        let (name, inline_value) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };

        if LONG_FLAGS.contains(&name) {
            expecting_value = VALUE_FLAGS.contains(&name) && !inline_value;
            normalized.push(OsString::from(format!("--{}", body)));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
