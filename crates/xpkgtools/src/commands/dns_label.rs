use xpkgtools::{is_dns_label, to_dns_label};

pub struct DnsLabelArgs {
    pub input: String,
}

pub fn dns_label(args: DnsLabelArgs) -> eyre::Result<()> {
    let label = to_dns_label(&args.input);
    if !is_dns_label(&label) {
        tracing::warn!(
            "input has no usable characters for a dns label (input: {})",
            args.input
        );
    }

    println!("{label}");
    Ok(())
}
