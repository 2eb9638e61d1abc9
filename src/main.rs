//! asname - resolve Autonomous System Numbers to organization names.
//!
//! This is the command-line interface for the asname library.

#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use asname::AsnNameResolver;
use clap::Parser;

/// Get the version string for asname
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the ASN name lookup tool.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Resolve Autonomous System Numbers to organization names via RDAP", long_about = None)]
struct Args {
    /// Print the full RDAP autnum record for each lookup
    #[clap(short, long)]
    verbose: bool,

    /// AS numbers to resolve, as plain integers (e.g. 15169)
    #[clap(value_name = "ASN", required = true)]
    asns: Vec<String>,
}

fn main() {
    // Quick check for version before starting async runtime
    let argv: Vec<String> = std::env::args().collect();
    if argv.len() == 2 && (argv[1] == "--version" || argv[1] == "-V") {
        println!("asname {}", get_version());
        return;
    }

    // Create single-threaded tokio runtime for lower overhead
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    if let Err(e) = runtime.block_on(async_main()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    let resolver = AsnNameResolver::new();

    // Strictly sequential, one resolution per argument. A bad argument
    // is reported and skipped; it never aborts the rest of the batch.
    for arg in &args.asns {
        let asn: i64 = match arg.parse() {
            Ok(asn) => asn,
            Err(e) => {
                println!("{}: invalid ASN: {}", arg, e);
                continue;
            }
        };

        match resolver.resolve(asn, args.verbose).await {
            Ok(name) if name.is_empty() => println!("AS{}: (no name found)", asn),
            Ok(name) => println!("AS{}: {}", asn, name),
            Err(e) => println!("AS{}: error: {}", asn, e),
        }
    }

    Ok(())
}
