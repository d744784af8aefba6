use crate::{commands::CompilerArgs, error::CliError, user::User};
use clap::Parser;
use commands::Commands;
use filter_engine::{MemorySource, Predicate, PredicateCompiler, RecordSource};
use model::filter::FilterNode;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;
mod user;

#[derive(Parser)]
#[command(
    name = "sieve",
    version = "0.0.1",
    about = "Compile data-described filters into record predicates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json } => {
            let users = user::sample_users();
            let predicate =
                PredicateCompiler::<User>::for_record().compile(&user::sample_filter())?;
            run_filter(&users, &predicate, json)?;
        }
        Commands::Run {
            filter,
            records,
            json,
            compiler,
        } => {
            let nodes = input::load_filter(&filter).await?;
            let users = match records {
                Some(path) => MemorySource::from(input::load_users(&path).await?),
                None => user::sample_users(),
            };
            let predicate = compile_nodes(&nodes, &compiler)?;
            run_filter(&users, &predicate, json)?;
        }
        Commands::Explain { filter, compiler } => {
            let nodes = input::load_filter(&filter).await?;
            let predicate = compile_nodes(&nodes, &compiler)?;
            println!("{predicate}");
        }
    }

    Ok(())
}

fn compile_nodes(nodes: &[FilterNode], args: &CompilerArgs) -> Result<Predicate<User>, CliError> {
    let compiler = PredicateCompiler::<User>::for_record().with_settings(args.settings());
    Ok(compiler.compile(nodes)?)
}

fn run_filter(
    users: &MemorySource<User>,
    predicate: &Predicate<User>,
    as_json: bool,
) -> Result<(), CliError> {
    info!("Search with this expression: {}", predicate);
    let matches = users.filter(predicate);
    info!("{} of {} users matched", matches.len(), users.len());
    output::print_users(&matches, as_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_engine::FilterError;
    use model::filter::FilterOperator;

    fn explain_args(flags: &[&str]) -> CompilerArgs {
        let argv = ["sieve", "explain", "--filter", "filter.json"]
            .into_iter()
            .chain(flags.iter().copied());
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Explain { compiler, .. } => compiler,
            _ => panic!("expected the explain command"),
        }
    }

    fn lowercase_age() -> Vec<FilterNode> {
        vec![FilterNode::leaf("age", FilterOperator::GreaterOrEqual, 28)]
    }

    #[test]
    fn test_field_names_ignore_case_by_default() {
        let predicate = compile_nodes(&lowercase_age(), &explain_args(&[])).unwrap();
        assert_eq!(predicate.to_string(), "x => x.Age >= 28");
    }

    #[test]
    fn test_case_sensitive_fields_reject_unknown_case() {
        let err = compile_nodes(&lowercase_age(), &explain_args(&["--case-sensitive-fields"]))
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Compile(FilterError::UnknownField(ref name)) if name == "age"
        ));
    }

    #[test]
    fn test_max_depth_zero_rejects_groups() {
        let err = compile_nodes(&user::sample_filter(), &explain_args(&["--max-depth", "0"]))
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Compile(FilterError::DepthLimitExceeded { limit: 0 })
        ));
    }

    #[test]
    fn test_run_filter_over_sample_users() {
        let predicate = compile_nodes(&user::sample_filter(), &explain_args(&[])).unwrap();
        assert!(run_filter(&user::sample_users(), &predicate, false).is_ok());
    }
}
