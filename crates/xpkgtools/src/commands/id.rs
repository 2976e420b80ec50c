use xpkgtools::NamingConfig;

pub struct IdArgs {
    pub package: String,
    pub hash: String,
}

pub fn id(args: IdArgs, config: &NamingConfig) -> eyre::Result<()> {
    let id = config.friendly_id(&args.package, &args.hash);
    tracing::debug!(
        "built friendly id (package: {}, hash: {}, id: {})",
        args.package,
        args.hash,
        id
    );

    println!("{id}");
    Ok(())
}
