use std::process::ExitCode;

use whiterose_core::Environment;
use whiterose_docker::{DockerManager, DockerSettings};

use super::print_subcommand_help;
use crate::DockerArgs;

/// Runs `docker`.
pub async fn run_docker(env: &Environment, args: &DockerArgs) -> anyhow::Result<ExitCode> {
    if args.is_empty() {
        print_subcommand_help("docker")?;
        return Ok(ExitCode::SUCCESS);
    }

    let settings = DockerSettings::from_env(env);
    let manager = DockerManager::new(&settings.work_dir);

    if args.file || args.build {
        let dockerfiles = manager.detect_dockerfiles().await?;

        if args.file {
            for path in &dockerfiles {
                println!("{}", path.display());
            }
        }

        if args.build
            && let Some(dockerfile) = dockerfiles.first()
        {
            let options = settings.build_options(dockerfile)?;
            let elapsed = manager.build(&options).await?;
            println!(
                "Docker image '{}' built in {:.1}s",
                options.image(),
                elapsed.as_secs_f64()
            );
        }
    }

    if args.delete {
        let image = settings.image_ref()?;
        manager.delete(&image).await?;
        println!("Docker image '{}' deleted", image);
    }

    Ok(ExitCode::SUCCESS)
}
