use std::path::PathBuf;

use xpkgtools::parse_name_from_meta;

pub struct MetaNameArgs {
    pub path: PathBuf,
}

pub fn meta_name(args: MetaNameArgs) -> eyre::Result<()> {
    let name = parse_name_from_meta(&args.path)?;

    println!("{name}");
    Ok(())
}
