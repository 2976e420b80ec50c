use xpkgtools::NamingConfig;

pub struct PathArgs {
    pub directory: String,
    pub name: Option<String>,
}

pub fn path(args: PathArgs, config: &NamingConfig) -> eyre::Result<()> {
    let name = args.name.unwrap_or_default();
    let full = config.build_path(&args.directory, &name);
    tracing::debug!(
        "built package path (directory: {}, name: {}, path: {})",
        args.directory,
        name,
        full
    );

    println!("{full}");
    Ok(())
}
