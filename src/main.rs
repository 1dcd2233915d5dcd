//! strapper's main application entry point and orchestration logic.

use std::path::{Path, PathBuf};

use strapper::{
    cli::{get_args, Args},
    config::plugin_schema,
    constants::CLONE_TIMEOUT,
    error::{default_error_handler, Error, Result},
    installer::{Installer, SystemRunner},
    loader::{clone_repository, remove_git_metadata, TemplateSource},
    logger::init_logger,
    parser::{get_answers, get_answers_from},
    processor::{remove_path, Processor},
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Ensures the plugin directory can be created.
///
/// # Errors
/// * `Error::ValidationError` if the directory exists and force is false
pub fn get_project_dir<P: AsRef<Path>>(project_dir: P, force: bool) -> Result<PathBuf> {
    let project_dir = project_dir.as_ref();
    if project_dir.exists() {
        if !force {
            return Err(Error::ValidationError(format!(
                "'{}' already exists, use --force to replace it",
                project_dir.display()
            )));
        }
        remove_path(project_dir)?;
    }
    Ok(project_dir.to_path_buf())
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the schema and requested installers
/// 2. Resolves answers from the answers file, flags and prompts
/// 3. Clones the boilerplate into `<output-dir>/<package>`
/// 4. Rewrites the clone
/// 5. Installs dependencies and removes the git history
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let schema = plugin_schema()?;

    let installers = if args.skip_install {
        Vec::new()
    } else {
        args.installers
            .iter()
            .map(|kind| kind.parse::<Installer>())
            .collect::<Result<Vec<_>>>()?
    };

    let mut overrides = get_answers_from(args.answers.as_ref())?;
    overrides.extend(args.overrides());

    let answers = get_answers(&schema, &overrides, &prompt, args.yes)?;
    let package = answers.require("package")?;
    if package.is_empty() {
        return Err(Error::ValidationError(
            "the project name must contain at least one letter or digit".to_string(),
        ));
    }
    let project_dir = get_project_dir(args.output_dir.join(package), args.force)?;

    let mut step = 1;
    let source = TemplateSource::from_string(&args.repo);
    println!("{}. Cloning plugin boilerplate from the {}", step, source);
    clone_repository(&source, args.branch.as_deref(), &project_dir, CLONE_TIMEOUT)?;
    step += 1;

    println!("{}. Replacing plugin data", step);
    Processor::new(&answers, &project_dir).rewrite()?;
    step += 1;

    let runner = SystemRunner;
    for installer in installers {
        println!("{}. Installing {}. This may take a while...", step, installer.describe());
        installer.install(&runner, &project_dir)?;
        step += 1;
    }

    println!("{}. Cleaning up", step);
    remove_git_metadata(&project_dir)?;

    println!("----------------");
    println!("Project is created in {}.", project_dir.display());
    println!();
    println!("The plugin data, namespace and prefixes have been changed according to your input.");
    println!("Navigate to that folder and run the following commands:");
    println!("npm install");
    println!("npm run production");
    println!();
    println!("You can activate the plugin in WordPress and work on it straight away. Good luck!");
    println!("----------------");
    Ok(())
}
