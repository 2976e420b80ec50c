use std::path::PathBuf;

use colored::Colorize;
use xpkgtools::find_xpkg_in_dir;

pub struct FindArgs {
    pub root: PathBuf,
}

pub fn find(args: FindArgs) -> eyre::Result<()> {
    let package = find_xpkg_in_dir(&args.root)?;
    tracing::info!("{}", "found package :)".green());

    println!("{}", package.display().to_string().bold());
    Ok(())
}
