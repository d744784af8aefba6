use clap::{Args, Subcommand};
use filter_engine::CompilerSettings;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the nested sample filter against the sample users
    Demo {
        #[arg(long, help = "Print matches as JSON instead of a list")]
        json: bool,
    },
    /// Compile a JSON filter file and apply it to users
    Run {
        #[arg(long, help = "Path to a JSON array of filter nodes")]
        filter: String,

        #[arg(
            long,
            help = "Path to a JSON array of users; the sample users are used when omitted"
        )]
        records: Option<String>,

        #[arg(long, help = "Print matches as JSON instead of a list")]
        json: bool,

        #[command(flatten)]
        compiler: CompilerArgs,
    },
    /// Compile a JSON filter file and print the resulting expression
    Explain {
        #[arg(long, help = "Path to a JSON array of filter nodes")]
        filter: String,

        #[command(flatten)]
        compiler: CompilerArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CompilerArgs {
    #[arg(long, help = "Maximum nesting depth of filter groups")]
    max_depth: Option<usize>,

    #[arg(long, help = "Require property names to match field names exactly")]
    case_sensitive_fields: bool,
}

impl CompilerArgs {
    pub fn settings(&self) -> CompilerSettings {
        let defaults = CompilerSettings::default();
        defaults
            .with_max_depth(self.max_depth.unwrap_or(defaults.max_depth))
            .with_case_insensitive_fields(!self.case_sensitive_fields)
    }
}
